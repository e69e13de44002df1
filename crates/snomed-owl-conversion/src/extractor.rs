//! Decomposition of a class expression into grouped relationships.
//!
//! Expected shape of a side that is not a single named concept:
//!
//! ```text
//! ObjectIntersectionOf(
//!     :parent                                             -> (0, is-a, parent)
//!     ObjectSomeValuesFrom(:type :value)                  -> (0, type, value)
//!     ObjectSomeValuesFrom(:609096000                     -> group N
//!         ObjectSomeValuesFrom(:type :value))
//!     ObjectSomeValuesFrom(:609096000                     -> group N + 1
//!         ObjectIntersectionOf(
//!             ObjectSomeValuesFrom(:type :value)
//!             ObjectSomeValuesFrom(:type :value)))
//! )
//! ```
//!
//! Group numbers start at 1 and follow the order in which role groups
//! appear. The scan is a single pass with no backtracking. Repeated
//! intersection operands count once.

use snomed_owl::{ClassExpression, ObjectProperty, SctId};

use crate::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult, Side};
use crate::representation::{Relationship, RelationshipGroups};

/// Extracts relationships from one side of one axiom.
pub(crate) struct RelationshipExtractor<'a> {
    role_group_id: SctId,
    is_a_id: SctId,
    side: Side,
    expression: &'a str,
}

impl<'a> RelationshipExtractor<'a> {
    pub(crate) fn new(config: &ConversionConfig, side: Side, expression: &'a str) -> Self {
        Self {
            role_group_id: config.role_group_id,
            is_a_id: config.is_a_id,
            side,
            expression,
        }
    }

    pub(crate) fn extract(&self, expr: &ClassExpression) -> ConversionResult<RelationshipGroups> {
        let operands = match expr.conjunction_operands() {
            Some(operands) if !operands.is_empty() => operands,
            _ => {
                return Err(ConversionError::UnexpectedTopLevelShape {
                    side: self.side,
                    actual: expr.expression_type(),
                    expression: self.expression.to_string(),
                })
            }
        };

        let mut groups = RelationshipGroups::new();
        let mut rolling_group_number = 0u32;

        for operand in operands {
            match operand {
                ClassExpression::NamedConcept(parent) => {
                    groups.add(Relationship::new(0, self.is_a_id, *parent));
                }
                ClassExpression::ExistentialRestriction { property, filler }
                    if self.is_role_group(property) =>
                {
                    rolling_group_number += 1;
                    self.extract_role_group(filler, rolling_group_number, &mut groups)?;
                }
                ClassExpression::ExistentialRestriction { property, filler } => {
                    groups.add(self.extract_relationship(property, filler, 0)?);
                }
                ClassExpression::Conjunction(_) => {
                    return Err(ConversionError::UnexpectedOperandShape {
                        side: self.side,
                        actual: operand.expression_type(),
                        expression: self.expression.to_string(),
                    });
                }
            }
        }

        Ok(groups)
    }

    /// Relationships of one role group, all numbered `group`.
    fn extract_role_group(
        &self,
        filler: &ClassExpression,
        group: u32,
        groups: &mut RelationshipGroups,
    ) -> ConversionResult<()> {
        match filler {
            ClassExpression::ExistentialRestriction { property, filler } => {
                groups.add(self.extract_relationship(property, filler, group)?);
                Ok(())
            }
            ClassExpression::Conjunction(attributes) if !attributes.is_empty() => {
                for attribute in filler.conjunction_operands().unwrap_or_default() {
                    match attribute {
                        ClassExpression::ExistentialRestriction { property, filler } => {
                            groups.add(self.extract_relationship(property, filler, group)?);
                        }
                        other => return Err(self.role_group_shape_error(other)),
                    }
                }
                Ok(())
            }
            other => Err(self.role_group_shape_error(other)),
        }
    }

    fn extract_relationship(
        &self,
        property: &ObjectProperty,
        filler: &ClassExpression,
        group: u32,
    ) -> ConversionResult<Relationship> {
        match filler {
            ClassExpression::NamedConcept(destination_id) => {
                Ok(Relationship::new(group, property.id, *destination_id))
            }
            other => Err(ConversionError::UnexpectedRestrictionFillerShape {
                side: self.side,
                actual: other.expression_type(),
                expression: self.expression.to_string(),
            }),
        }
    }

    fn is_role_group(&self, property: &ObjectProperty) -> bool {
        property.id == self.role_group_id
    }

    fn role_group_shape_error(&self, found: &ClassExpression) -> ConversionError {
        ConversionError::UnexpectedRoleGroupFillerShape {
            side: self.side,
            actual: found.expression_type(),
            expression: self.expression.to_string(),
        }
    }
}
