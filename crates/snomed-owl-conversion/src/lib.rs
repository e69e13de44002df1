//! # snomed-owl-conversion
//!
//! Conversion between SNOMED CT OWL axioms and the stated relationship
//! representation.
//!
//! A concept definition such as
//!
//! ```text
//! SubClassOf(:73211009 ObjectIntersectionOf(:362969004
//!     ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:363698007 :113331007))))
//! ```
//!
//! becomes a named concept on the left and grouped relationships on the right:
//!
//! | Group | Type | Destination |
//! |-------|------|-------------|
//! | 0 | 116680003 (Is a) | 362969004 |
//! | 1 | 363698007 (Finding site) | 113331007 |
//!
//! ## Quick Start
//!
//! ```rust
//! use snomed_owl_conversion::{Conversion, ConversionService, Relationship};
//!
//! let service = ConversionService::default();
//!
//! let conversion = service.convert_axiom_to_relationships(
//!     "SubClassOf(:73211009 ObjectIntersectionOf(:362969004 \
//!      ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:363698007 :113331007))))",
//! )?;
//!
//! let rep = conversion.representation().expect("SubClassOf converts");
//! let right = rep.right_relationships().unwrap();
//! assert_eq!(right.get(1).unwrap(), &[Relationship::new(1, 363698007, 113331007)]);
//!
//! // And back again
//! let text = service.convert_relationships_to_axiom(rep)?;
//! assert!(text.starts_with("SubClassOf(:73211009"));
//!
//! // Other axiom kinds are skipped, not failed
//! let skipped = service.convert_axiom_to_relationships("TransitiveObjectProperty(:774081006)")?;
//! assert!(matches!(skipped, Conversion::NotApplicable { .. }));
//! # Ok::<(), snomed_owl_conversion::ConversionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   snomed-owl-conversion                      │
//! │                                                              │
//! │  ConversionService                                           │
//! │  ├── AxiomSource: text → Axiom (snomed-owl parser)           │
//! │  ├── classify: SubClassOf / EquivalentClasses / other        │
//! │  ├── per side: resolve named concept, else extract groups    │
//! │  └── AxiomBuilder: representation → Axiom → text             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for representation types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod classifier;
mod config;
mod error;
mod extractor;
mod representation;
mod resolver;
mod service;
mod traits;

// Public re-exports
pub use builder::OwlAxiomBuilder;
pub use config::{concepts, ConversionConfig, ConversionConfigBuilder};
pub use error::{BuildError, ConversionError, ConversionResult, Side};
pub use representation::{
    AxiomRepresentation, Conversion, Relationship, RelationshipGroups, SideRepresentation,
};
pub use service::ConversionService;
pub use traits::{AxiomBuilder, AxiomSource, FunctionalSyntaxSource};

// Re-export commonly used types from dependencies for convenience
pub use snomed_owl::{Axiom, AxiomKind, ClassExpression, ClassExpressionType, SctId};
