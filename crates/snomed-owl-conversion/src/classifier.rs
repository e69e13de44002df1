//! Axiom classification: which axioms convert, and their two operands.

use snomed_owl::{Axiom, AxiomKind, ClassExpression};

use crate::error::{ConversionError, ConversionResult};

/// The two sides of a convertible axiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClassifiedAxiom<'a> {
    /// True only for `SubClassOf`.
    pub primitive: bool,
    pub left: &'a ClassExpression,
    pub right: &'a ClassExpression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classification<'a> {
    Supported(ClassifiedAxiom<'a>),
    Unsupported(AxiomKind),
}

/// Split an axiom into left and right operands.
///
/// `SubClassOf` yields (subclass, superclass). `EquivalentClasses` must have
/// exactly two distinct operands, taken in source order.
pub(crate) fn classify<'a>(
    axiom: &'a Axiom,
    expression: &str,
) -> ConversionResult<Classification<'a>> {
    match axiom {
        Axiom::SubClassOf {
            sub_class,
            super_class,
        } => Ok(Classification::Supported(ClassifiedAxiom {
            primitive: true,
            left: sub_class,
            right: super_class,
        })),
        Axiom::EquivalentClasses(_) => {
            let operands = axiom.equivalent_class_operands().unwrap_or_default();
            match operands.as_slice() {
                &[left, right] => Ok(Classification::Supported(ClassifiedAxiom {
                    primitive: false,
                    left,
                    right,
                })),
                _ => Err(ConversionError::OperandCount {
                    count: operands.len(),
                    expression: expression.to_string(),
                }),
            }
        }
        Axiom::Other { .. } => Ok(Classification::Unsupported(axiom.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_class_of_is_primitive() {
        let axiom = Axiom::SubClassOf {
            sub_class: ClassExpression::named(100),
            super_class: ClassExpression::named(200),
        };
        match classify(&axiom, "").unwrap() {
            Classification::Supported(classified) => {
                assert!(classified.primitive);
                assert_eq!(classified.left, &ClassExpression::named(100));
                assert_eq!(classified.right, &ClassExpression::named(200));
            }
            other => panic!("Expected Supported, got {:?}", other),
        }
    }

    #[test]
    fn test_equivalent_classes_keeps_source_order() {
        let axiom = Axiom::EquivalentClasses(vec![
            ClassExpression::named(200),
            ClassExpression::named(100),
        ]);
        match classify(&axiom, "").unwrap() {
            Classification::Supported(classified) => {
                assert!(!classified.primitive);
                assert_eq!(classified.left, &ClassExpression::named(200));
                assert_eq!(classified.right, &ClassExpression::named(100));
            }
            other => panic!("Expected Supported, got {:?}", other),
        }
    }

    #[test]
    fn test_equivalent_classes_operand_count() {
        let axiom = Axiom::EquivalentClasses(vec![
            ClassExpression::named(100),
            ClassExpression::named(200),
            ClassExpression::named(300),
        ]);
        let err = classify(&axiom, "EquivalentClasses(:100 :200 :300)").unwrap_err();
        assert_eq!(
            err,
            ConversionError::OperandCount {
                count: 3,
                expression: "EquivalentClasses(:100 :200 :300)".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_operands_collapse() {
        let axiom = Axiom::EquivalentClasses(vec![
            ClassExpression::named(100),
            ClassExpression::named(100),
        ]);
        let err = classify(&axiom, "EquivalentClasses(:100 :100)").unwrap_err();
        assert!(matches!(err, ConversionError::OperandCount { count: 1, .. }));
    }

    #[test]
    fn test_other_axiom_is_unsupported() {
        let axiom = Axiom::Other {
            keyword: "ReflexiveObjectProperty".to_string(),
            arguments: ":733930001".to_string(),
        };
        assert_eq!(
            classify(&axiom, "").unwrap(),
            Classification::Unsupported(AxiomKind::Other("ReflexiveObjectProperty".to_string()))
        );
    }
}
