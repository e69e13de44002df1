//! OWL axiom and class expression AST types.
//!
//! Only the fragment of OWL 2 used by SNOMED CT stated concept definitions is
//! modelled as class expressions: named classes, `ObjectIntersectionOf` and
//! `ObjectSomeValuesFrom`. Every other axiom is kept as [`Axiom::Other`] so
//! callers can recognise and skip it.
//!
//! ```text
//! SubClassOf(:73211009 ObjectIntersectionOf(:362969004
//!     ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:363698007 :113331007))))
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::SctId;

/// A named object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectProperty {
    /// SNOMED CT identifier of the attribute concept.
    pub id: SctId,
}

impl ObjectProperty {
    /// Create a property reference.
    pub fn new(id: SctId) -> Self {
        Self { id }
    }
}

/// A class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClassExpression {
    /// A named class: `:73211009`.
    NamedConcept(SctId),

    /// `ObjectIntersectionOf(A B ...)`, operands in source order.
    Conjunction(Vec<ClassExpression>),

    /// `ObjectSomeValuesFrom(property filler)`.
    ExistentialRestriction {
        /// Restricted property.
        property: ObjectProperty,
        /// Filler class expression.
        filler: Box<ClassExpression>,
    },
}

/// Kind of a class expression, named as in OWL functional syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassExpressionType {
    /// `Class`
    Class,
    /// `ObjectIntersectionOf`
    ObjectIntersectionOf,
    /// `ObjectSomeValuesFrom`
    ObjectSomeValuesFrom,
}

impl ClassExpressionType {
    /// Functional syntax name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ClassExpressionType::Class => "Class",
            ClassExpressionType::ObjectIntersectionOf => "ObjectIntersectionOf",
            ClassExpressionType::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
        }
    }
}

impl fmt::Display for ClassExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ClassExpression {
    /// Named class.
    pub fn named(id: SctId) -> Self {
        ClassExpression::NamedConcept(id)
    }

    /// Conjunction of operands.
    pub fn and(operands: Vec<ClassExpression>) -> Self {
        ClassExpression::Conjunction(operands)
    }

    /// Existential restriction on `property`.
    pub fn some(property: SctId, filler: ClassExpression) -> Self {
        ClassExpression::ExistentialRestriction {
            property: ObjectProperty::new(property),
            filler: Box::new(filler),
        }
    }

    /// Kind of this expression.
    pub fn expression_type(&self) -> ClassExpressionType {
        match self {
            ClassExpression::NamedConcept(_) => ClassExpressionType::Class,
            ClassExpression::Conjunction(_) => ClassExpressionType::ObjectIntersectionOf,
            ClassExpression::ExistentialRestriction { .. } => {
                ClassExpressionType::ObjectSomeValuesFrom
            }
        }
    }

    /// The identifier if this is a named class.
    pub fn as_named_concept(&self) -> Option<SctId> {
        match self {
            ClassExpression::NamedConcept(id) => Some(*id),
            _ => None,
        }
    }

    /// Distinct operands of an `ObjectIntersectionOf`, in first occurrence
    /// order.
    ///
    /// Intersection operands form a set, so `ObjectIntersectionOf(:1 :1 :2)`
    /// has two operands.
    pub fn conjunction_operands(&self) -> Option<Vec<&ClassExpression>> {
        match self {
            ClassExpression::Conjunction(operands) => Some(distinct(operands)),
            _ => None,
        }
    }

    /// All named classes mentioned anywhere in this expression.
    ///
    /// Property identifiers are not part of the class signature.
    pub fn classes_in_signature(&self) -> BTreeSet<SctId> {
        let mut classes = BTreeSet::new();
        self.collect_classes(&mut classes);
        classes
    }

    fn collect_classes(&self, classes: &mut BTreeSet<SctId>) {
        match self {
            ClassExpression::NamedConcept(id) => {
                classes.insert(*id);
            }
            ClassExpression::Conjunction(operands) => {
                for operand in operands {
                    operand.collect_classes(classes);
                }
            }
            ClassExpression::ExistentialRestriction { filler, .. } => {
                filler.collect_classes(classes);
            }
        }
    }

    /// Number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        match self {
            ClassExpression::NamedConcept(_) => 1,
            ClassExpression::Conjunction(operands) => {
                1 + operands.iter().map(|o| o.node_count()).sum::<usize>()
            }
            ClassExpression::ExistentialRestriction { filler, .. } => 1 + filler.node_count(),
        }
    }
}

/// Kind of an axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxiomKind {
    /// `SubClassOf`
    SubClassOf,
    /// `EquivalentClasses`
    EquivalentClasses,
    /// Any other axiom keyword, e.g. `SubObjectPropertyOf`.
    Other(String),
}

impl AxiomKind {
    /// Functional syntax keyword.
    pub fn name(&self) -> &str {
        match self {
            AxiomKind::SubClassOf => "SubClassOf",
            AxiomKind::EquivalentClasses => "EquivalentClasses",
            AxiomKind::Other(keyword) => keyword,
        }
    }
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single OWL axiom.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axiom {
    /// `SubClassOf(sub super)`.
    SubClassOf {
        /// The subclass (left hand side).
        sub_class: ClassExpression,
        /// The superclass (right hand side).
        super_class: ClassExpression,
    },

    /// `EquivalentClasses(A B ...)`, operands in source order.
    EquivalentClasses(Vec<ClassExpression>),

    /// Any axiom outside the class-expression fragment.
    Other {
        /// Axiom keyword.
        keyword: String,
        /// Raw text between the outer parentheses.
        arguments: String,
    },
}

impl Axiom {
    /// Kind of this axiom.
    pub fn kind(&self) -> AxiomKind {
        match self {
            Axiom::SubClassOf { .. } => AxiomKind::SubClassOf,
            Axiom::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Axiom::Other { keyword, .. } => AxiomKind::Other(keyword.clone()),
        }
    }

    /// Distinct operands of an `EquivalentClasses` axiom.
    ///
    /// OWL treats the operands as a set, so structurally equal operands are
    /// collapsed. First occurrence order is kept.
    pub fn equivalent_class_operands(&self) -> Option<Vec<&ClassExpression>> {
        match self {
            Axiom::EquivalentClasses(operands) => Some(distinct(operands)),
            _ => None,
        }
    }
}

fn distinct(operands: &[ClassExpression]) -> Vec<&ClassExpression> {
    let mut distinct: Vec<&ClassExpression> = Vec::with_capacity(operands.len());
    for operand in operands {
        if !distinct.contains(&operand) {
            distinct.push(operand);
        }
    }
    distinct
}
