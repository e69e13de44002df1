//! Collaborator seams for axiom conversion.
//!
//! The [`ConversionService`](crate::ConversionService) does not read text or
//! build axioms itself. It calls an [`AxiomSource`] to deserialise the
//! expression and an [`AxiomBuilder`] for the reverse direction. Both have
//! default implementations backed by `snomed-owl`.
//!
//! # Thread safety
//!
//! Conversions are pure functions of their input and the service's immutable
//! configuration, so a service can be shared across threads as long as its
//! source is `Sync`. A source that is not safe for concurrent use can be
//! wrapped in a [`parking_lot::Mutex`], which serialises calls into it:
//!
//! ```rust
//! use parking_lot::Mutex;
//! use snomed_owl_conversion::{ConversionConfig, ConversionService, FunctionalSyntaxSource};
//!
//! let service = ConversionService::with_source(
//!     ConversionConfig::default(),
//!     Mutex::new(FunctionalSyntaxSource),
//! );
//! let conversion = service.convert_axiom_to_relationships("SubClassOf(:100 :200)").unwrap();
//! assert!(conversion.representation().is_some());
//! ```

use parking_lot::Mutex;
use snomed_owl::{parse_axiom, Axiom, OwlResult};

use crate::error::BuildError;
use crate::representation::AxiomRepresentation;

/// Deserialises an axiom expression.
///
/// Implementations shared between threads must be safe for concurrent
/// calls; see the module documentation.
pub trait AxiomSource {
    /// Reads one axiom from its textual expression.
    fn deserialise_axiom(&self, expression: &str) -> OwlResult<Axiom>;
}

/// Builds an axiom from a relationship representation.
pub trait AxiomBuilder {
    /// Constructs the axiom equivalent to `representation`.
    fn build_axiom(&self, representation: &AxiomRepresentation) -> Result<Axiom, BuildError>;
}

/// [`AxiomSource`] reading OWL functional syntax. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionalSyntaxSource;

impl AxiomSource for FunctionalSyntaxSource {
    fn deserialise_axiom(&self, expression: &str) -> OwlResult<Axiom> {
        parse_axiom(expression)
    }
}

impl<S: AxiomSource + Send> AxiomSource for Mutex<S> {
    fn deserialise_axiom(&self, expression: &str) -> OwlResult<Axiom> {
        self.lock().deserialise_axiom(expression)
    }
}

impl<S: AxiomSource + ?Sized> AxiomSource for Box<S> {
    fn deserialise_axiom(&self, expression: &str) -> OwlResult<Axiom> {
        (**self).deserialise_axiom(expression)
    }
}
