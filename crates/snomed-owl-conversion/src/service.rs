//! Conversion service implementation.

use snomed_owl::{ClassExpression, SctId};
use tracing::{debug, info};

use crate::builder::OwlAxiomBuilder;
use crate::classifier::{classify, Classification};
use crate::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult, Side};
use crate::extractor::RelationshipExtractor;
use crate::representation::{AxiomRepresentation, Conversion, SideRepresentation};
use crate::resolver::{named_side, resolve_named_concept};
use crate::traits::{AxiomBuilder, AxiomSource, FunctionalSyntaxSource};

/// Converts OWL axiom expressions to relationship representations and back.
///
/// Only `SubClassOf` and `EquivalentClasses` axioms convert; every other
/// axiom kind yields [`Conversion::NotApplicable`].
///
/// # Example
///
/// ```rust
/// use snomed_owl_conversion::{ConversionService, Relationship};
///
/// let service = ConversionService::default();
/// let conversion = service
///     .convert_axiom_to_relationships(
///         "SubClassOf(:100 ObjectIntersectionOf(:200 ObjectSomeValuesFrom(:300 :400)))",
///     )
///     .unwrap();
///
/// let rep = conversion.representation().unwrap();
/// assert!(rep.primitive);
/// assert_eq!(rep.left_named_concept(), Some(100));
/// assert_eq!(
///     rep.right_relationships().unwrap().ungrouped(),
///     &[Relationship::new(0, 116680003, 200), Relationship::new(0, 300, 400)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConversionService<S = FunctionalSyntaxSource, B = OwlAxiomBuilder> {
    config: ConversionConfig,
    source: S,
    builder: B,
}

impl ConversionService {
    /// Creates a service with the given ungrouped attribute types and
    /// default identifiers.
    pub fn new(ungrouped_attributes: impl IntoIterator<Item = SctId>) -> Self {
        Self::with_config(
            ConversionConfig::builder()
                .with_ungrouped_attributes(ungrouped_attributes)
                .build(),
        )
    }

    /// Creates a service from a configuration.
    pub fn with_config(config: ConversionConfig) -> Self {
        Self::with_source(config, FunctionalSyntaxSource)
    }
}

impl<S: AxiomSource> ConversionService<S> {
    /// Creates a service reading expressions with `source`.
    pub fn with_source(config: ConversionConfig, source: S) -> Self {
        let builder = OwlAxiomBuilder::new(&config);
        Self::with_collaborators(config, source, builder)
    }
}

impl<S: AxiomSource, B: AxiomBuilder> ConversionService<S, B> {
    /// Creates a service with explicit collaborators.
    pub fn with_collaborators(config: ConversionConfig, source: S, builder: B) -> Self {
        Self {
            config,
            source,
            builder,
        }
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Converts an axiom expression to a named concept or set of
    /// relationships for each side.
    ///
    /// # Errors
    ///
    /// Fails if the expression cannot be parsed or has a shape that cannot
    /// be represented as relationships.
    pub fn convert_axiom_to_relationships(&self, expression: &str) -> ConversionResult<Conversion> {
        self.convert_axiom_to_relationships_for(None, expression)
    }

    /// Converts an axiom expression, forcing the side that is not
    /// `referenced_component_id` into relationship form.
    ///
    /// A side reducing to a single named concept other than
    /// `referenced_component_id` becomes one group 0 is-a relationship to
    /// that concept.
    pub fn convert_axiom_to_relationships_for(
        &self,
        referenced_component_id: Option<SctId>,
        expression: &str,
    ) -> ConversionResult<Conversion> {
        let axiom = self
            .source
            .deserialise_axiom(expression)
            .map_err(|source| ConversionError::ParseFailure {
                expression: expression.to_string(),
                source,
            })?;

        let classified = match classify(&axiom, expression)? {
            Classification::Supported(classified) => classified,
            Classification::Unsupported(kind) => {
                info!(
                    axiom_type = %kind,
                    "Only SubClassOf and EquivalentClasses can be converted to relationships"
                );
                return Ok(Conversion::NotApplicable { kind });
            }
        };

        let left = self.convert_side(
            classified.left,
            Side::Left,
            referenced_component_id,
            expression,
        )?;
        let right = self.convert_side(
            classified.right,
            Side::Right,
            referenced_component_id,
            expression,
        )?;

        debug!(
            primitive = classified.primitive,
            left_groups = left.relationships().map_or(0, |g| g.group_count()),
            right_groups = right.relationships().map_or(0, |g| g.group_count()),
            "Converted axiom to relationships"
        );

        Ok(Conversion::Converted(AxiomRepresentation::new(
            classified.primitive,
            left,
            right,
        )))
    }

    /// Builds the axiom for `representation` and returns its functional
    /// syntax text.
    pub fn convert_relationships_to_axiom(
        &self,
        representation: &AxiomRepresentation,
    ) -> ConversionResult<String> {
        let axiom = self.builder.build_axiom(representation)?;
        Ok(axiom.to_string())
    }

    fn convert_side(
        &self,
        expr: &ClassExpression,
        side: Side,
        referenced_component_id: Option<SctId>,
        expression: &str,
    ) -> ConversionResult<SideRepresentation> {
        match resolve_named_concept(expr, side, expression)? {
            Some(concept_id) => Ok(named_side(
                concept_id,
                referenced_component_id,
                self.config.is_a_id,
            )),
            None => RelationshipExtractor::new(&self.config, side, expression)
                .extract(expr)
                .map(SideRepresentation::Relationships),
        }
    }
}

impl Default for ConversionService {
    fn default() -> Self {
        Self::with_config(ConversionConfig::default())
    }
}
