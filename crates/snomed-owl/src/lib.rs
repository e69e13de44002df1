//! # snomed-owl
//!
//! OWL 2 functional syntax for SNOMED CT concept axioms.
//!
//! This crate provides:
//! - **AST**: class expressions (named classes, `ObjectIntersectionOf`,
//!   `ObjectSomeValuesFrom`) and axioms
//! - **Parser**: read axioms as stored in the OWL axiom reference set
//! - **Formatter**: write axioms back with prefixed or full IRIs
//!
//! ## Usage
//!
//! ```rust
//! use snomed_owl::{parse_axiom, Axiom, ClassExpression, Format, Formatter};
//!
//! let axiom = parse_axiom(
//!     "SubClassOf(:73211009 ObjectIntersectionOf(:362969004 \
//!      ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:363698007 :113331007))))",
//! )
//! .unwrap();
//!
//! match &axiom {
//!     Axiom::SubClassOf { sub_class, .. } => {
//!         assert_eq!(sub_class, &ClassExpression::named(73211009));
//!     }
//!     _ => unreachable!(),
//! }
//!
//! let text = Formatter::format_axiom(&axiom, Format::Prefixed);
//! assert!(text.starts_with("SubClassOf(:73211009 ObjectIntersectionOf("));
//! ```
//!
//! ## Syntax Quick Reference
//!
//! | Construct | Meaning | Example |
//! |-----------|---------|---------|
//! | `:id` | Named class or property | `:404684003` |
//! | `ObjectIntersectionOf` | Conjunction | `ObjectIntersectionOf(:A :B)` |
//! | `ObjectSomeValuesFrom` | Existential restriction | `ObjectSomeValuesFrom(:P :C)` |
//! | `SubClassOf` | Primitive definition | `SubClassOf(:A :B)` |
//! | `EquivalentClasses` | Fully defined | `EquivalentClasses(:A :B)` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod error;
mod formatter;
mod iri;
mod parser;

pub use ast::{Axiom, AxiomKind, ClassExpression, ClassExpressionType, ObjectProperty};
pub use error::{OwlError, OwlResult};
pub use formatter::{Format, Formatter};
pub use iri::{concept_id_from_iri, iri_for, SNOMED_IRI};
pub use parser::{parse_axiom, parse_class_expression};

/// SNOMED CT Identifier type (64-bit unsigned integer).
pub type SctId = u64;
