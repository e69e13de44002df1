//! Named concept resolution for one side of an axiom.

use snomed_owl::{ClassExpression, ClassExpressionType, SctId};

use crate::error::{ConversionError, ConversionResult, Side};
use crate::representation::{Relationship, RelationshipGroups, SideRepresentation};

/// The single named concept a side denotes, or `None` if the side must be
/// decomposed into relationships.
///
/// A `Class` node always carries exactly one class, so the
/// [`ConversionError::AmbiguousNamedConcept`] branch is a guard that trees
/// built from [`ClassExpression`] cannot reach.
pub(crate) fn resolve_named_concept(
    expr: &ClassExpression,
    side: Side,
    expression: &str,
) -> ConversionResult<Option<SctId>> {
    if expr.expression_type() != ClassExpressionType::Class {
        return Ok(None);
    }

    let classes = expr.classes_in_signature();
    if classes.len() > 1 {
        return Err(ConversionError::AmbiguousNamedConcept {
            side,
            count: classes.len(),
            expression: expression.to_string(),
        });
    }
    Ok(classes.into_iter().next())
}

/// Representation of a side that reduced to `concept_id`.
///
/// A forcing id that differs from the concept turns the side into a single
/// ungrouped is-a relationship to it.
pub(crate) fn named_side(
    concept_id: SctId,
    referenced_component_id: Option<SctId>,
    is_a_id: SctId,
) -> SideRepresentation {
    match referenced_component_id {
        Some(forced) if forced != concept_id => {
            let mut groups = RelationshipGroups::new();
            groups.add(Relationship::new(0, is_a_id, concept_id));
            SideRepresentation::Relationships(groups)
        }
        _ => SideRepresentation::NamedConcept(concept_id),
    }
}
