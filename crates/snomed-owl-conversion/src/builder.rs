//! Axiom construction from a relationship representation.

use std::collections::BTreeSet;

use snomed_owl::{Axiom, ClassExpression, SctId};

use crate::config::ConversionConfig;
use crate::error::{BuildError, Side};
use crate::representation::{AxiomRepresentation, RelationshipGroups, SideRepresentation};
use crate::traits::AxiomBuilder;

/// Default [`AxiomBuilder`].
///
/// - is-a relationships become named classes;
/// - group 0 attributes listed as ungrouped become bare restrictions;
/// - any other group 0 attribute gets a role group of its own;
/// - each group above 0 becomes one role group.
///
/// `primitive` representations become `SubClassOf`, the rest
/// `EquivalentClasses`.
#[derive(Debug, Clone)]
pub struct OwlAxiomBuilder {
    role_group_id: SctId,
    is_a_id: SctId,
    ungrouped_attributes: BTreeSet<SctId>,
}

impl OwlAxiomBuilder {
    /// Creates a builder sharing the conversion configuration.
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            role_group_id: config.role_group_id,
            is_a_id: config.is_a_id,
            ungrouped_attributes: config.ungrouped_attributes.clone(),
        }
    }

    fn side_expression(
        &self,
        side_rep: &SideRepresentation,
        side: Side,
    ) -> Result<ClassExpression, BuildError> {
        match side_rep {
            SideRepresentation::NamedConcept(id) => Ok(ClassExpression::named(*id)),
            SideRepresentation::Relationships(groups) => self
                .groups_expression(groups)
                .ok_or(BuildError::EmptySide { side }),
        }
    }

    fn groups_expression(&self, groups: &RelationshipGroups) -> Option<ClassExpression> {
        let mut terms = Vec::new();

        for (group_number, relationships) in groups.iter() {
            let mut group_terms = Vec::new();
            for relationship in relationships {
                if relationship.type_id == self.is_a_id {
                    terms.push(ClassExpression::named(relationship.destination_id));
                    continue;
                }
                let restriction = ClassExpression::some(
                    relationship.type_id,
                    ClassExpression::named(relationship.destination_id),
                );
                if group_number == 0 && self.ungrouped_attributes.contains(&relationship.type_id) {
                    terms.push(restriction);
                } else {
                    group_terms.push(restriction);
                }
            }

            if group_number == 0 {
                terms.extend(group_terms.into_iter().map(|term| self.role_group(term)));
            } else if let Some(grouped) = only_or_intersection(group_terms) {
                terms.push(self.role_group(grouped));
            }
        }

        only_or_intersection(terms)
    }

    fn role_group(&self, filler: ClassExpression) -> ClassExpression {
        ClassExpression::some(self.role_group_id, filler)
    }
}

impl Default for OwlAxiomBuilder {
    fn default() -> Self {
        Self::new(&ConversionConfig::default())
    }
}

impl AxiomBuilder for OwlAxiomBuilder {
    fn build_axiom(&self, representation: &AxiomRepresentation) -> Result<Axiom, BuildError> {
        let left = self.side_expression(&representation.left, Side::Left)?;
        let right = self.side_expression(&representation.right, Side::Right)?;

        if representation.primitive {
            Ok(Axiom::SubClassOf {
                sub_class: left,
                super_class: right,
            })
        } else {
            Ok(Axiom::EquivalentClasses(vec![left, right]))
        }
    }
}

fn only_or_intersection(mut terms: Vec<ClassExpression>) -> Option<ClassExpression> {
    match terms.len() {
        0 => None,
        1 => terms.pop(),
        _ => Some(ClassExpression::and(terms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::concepts::{IS_A, ROLE_GROUP};
    use crate::representation::Relationship;

    fn rels(relationships: Vec<Relationship>) -> SideRepresentation {
        SideRepresentation::Relationships(relationships.into_iter().collect())
    }

    #[test]
    fn test_named_concepts() {
        let rep = AxiomRepresentation::new(
            true,
            SideRepresentation::NamedConcept(100),
            SideRepresentation::NamedConcept(200),
        );
        let axiom = OwlAxiomBuilder::default().build_axiom(&rep).unwrap();
        assert_eq!(axiom.to_string(), "SubClassOf(:100 :200)");
    }

    #[test]
    fn test_single_parent_is_bare_class() {
        let rep = AxiomRepresentation::new(
            false,
            SideRepresentation::NamedConcept(100),
            rels(vec![Relationship::new(0, IS_A, 200)]),
        );
        let axiom = OwlAxiomBuilder::default().build_axiom(&rep).unwrap();
        assert_eq!(axiom.to_string(), "EquivalentClasses(:100 :200)");
    }

    #[test]
    fn test_grouped_and_ungrouped_attributes() {
        let config = ConversionConfig::builder()
            .with_ungrouped_attribute(272741003)
            .build();
        let rep = AxiomRepresentation::new(
            true,
            SideRepresentation::NamedConcept(100),
            rels(vec![
                Relationship::new(0, IS_A, 200),
                Relationship::new(0, 272741003, 7771000),
                Relationship::new(0, 300, 400),
                Relationship::new(1, 500, 600),
                Relationship::new(1, 700, 800),
            ]),
        );
        let axiom = OwlAxiomBuilder::new(&config).build_axiom(&rep).unwrap();

        let expected = Axiom::SubClassOf {
            sub_class: ClassExpression::named(100),
            super_class: ClassExpression::and(vec![
                ClassExpression::named(200),
                ClassExpression::some(272741003, ClassExpression::named(7771000)),
                ClassExpression::some(
                    ROLE_GROUP,
                    ClassExpression::some(300, ClassExpression::named(400)),
                ),
                ClassExpression::some(
                    ROLE_GROUP,
                    ClassExpression::and(vec![
                        ClassExpression::some(500, ClassExpression::named(600)),
                        ClassExpression::some(700, ClassExpression::named(800)),
                    ]),
                ),
            ]),
        };
        assert_eq!(axiom, expected);
    }

    #[test]
    fn test_gci_left_hand_relationships() {
        let rep = AxiomRepresentation::new(
            true,
            rels(vec![
                Relationship::new(0, IS_A, 200),
                Relationship::new(1, 300, 400),
            ]),
            SideRepresentation::NamedConcept(100),
        );
        let axiom = OwlAxiomBuilder::default().build_axiom(&rep).unwrap();
        assert_eq!(
            axiom.to_string(),
            "SubClassOf(ObjectIntersectionOf(:200 ObjectSomeValuesFrom(:609096000 \
             ObjectSomeValuesFrom(:300 :400))) :100)"
        );
    }

    #[test]
    fn test_empty_side_is_rejected() {
        let rep = AxiomRepresentation::new(
            true,
            SideRepresentation::NamedConcept(100),
            SideRepresentation::Relationships(RelationshipGroups::new()),
        );
        assert_eq!(
            OwlAxiomBuilder::default().build_axiom(&rep),
            Err(BuildError::EmptySide { side: Side::Right })
        );
    }
}
