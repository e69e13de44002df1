//! Axiom formatter for OWL functional syntax.
//!
//! Formats axioms and class expressions with prefixed or full IRIs.

use std::fmt;

use super::ast::{Axiom, ClassExpression};
use super::iri::iri_for;
use crate::SctId;

/// Output format for identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Prefixed identifiers (default).
    /// Example: `SubClassOf(:100 :200)`
    #[default]
    Prefixed,

    /// Full IRIs in angle brackets.
    /// Example: `SubClassOf(<http://snomed.info/id/100> <http://snomed.info/id/200>)`
    FullIri,
}

/// Axiom formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    _private: (),
}

impl Formatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format an axiom in the specified style.
    pub fn format(&self, axiom: &Axiom, format: Format) -> String {
        Self::format_axiom(axiom, format)
    }

    /// Format an axiom (static method).
    pub fn format_axiom(axiom: &Axiom, format: Format) -> String {
        let mut out = String::new();
        Self::write_axiom(&mut out, axiom, format);
        out
    }

    /// Format a class expression (static method).
    pub fn format_class_expression(expr: &ClassExpression, format: Format) -> String {
        let mut out = String::new();
        Self::write_expression(&mut out, expr, format);
        out
    }

    fn write_axiom(out: &mut String, axiom: &Axiom, format: Format) {
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                out.push_str("SubClassOf(");
                Self::write_expression(out, sub_class, format);
                out.push(' ');
                Self::write_expression(out, super_class, format);
                out.push(')');
            }
            Axiom::EquivalentClasses(operands) => {
                out.push_str("EquivalentClasses(");
                Self::write_operands(out, operands, format);
                out.push(')');
            }
            Axiom::Other { keyword, arguments } => {
                out.push_str(keyword);
                out.push('(');
                out.push_str(arguments);
                out.push(')');
            }
        }
    }

    fn write_expression(out: &mut String, expr: &ClassExpression, format: Format) {
        match expr {
            ClassExpression::NamedConcept(id) => Self::write_id(out, *id, format),
            ClassExpression::Conjunction(operands) => {
                out.push_str("ObjectIntersectionOf(");
                Self::write_operands(out, operands, format);
                out.push(')');
            }
            ClassExpression::ExistentialRestriction { property, filler } => {
                out.push_str("ObjectSomeValuesFrom(");
                Self::write_id(out, property.id, format);
                out.push(' ');
                Self::write_expression(out, filler, format);
                out.push(')');
            }
        }
    }

    fn write_operands(out: &mut String, operands: &[ClassExpression], format: Format) {
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            Self::write_expression(out, operand, format);
        }
    }

    fn write_id(out: &mut String, id: SctId, format: Format) {
        match format {
            Format::Prefixed => {
                out.push(':');
                out.push_str(&id.to_string());
            }
            Format::FullIri => {
                out.push('<');
                out.push_str(&iri_for(id));
                out.push('>');
            }
        }
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Formatter::format_class_expression(self, Format::Prefixed))
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Formatter::format_axiom(self, Format::Prefixed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_axiom;

    fn role_grouped() -> Axiom {
        Axiom::SubClassOf {
            sub_class: ClassExpression::named(100),
            super_class: ClassExpression::and(vec![
                ClassExpression::named(200),
                ClassExpression::some(
                    609096000,
                    ClassExpression::and(vec![
                        ClassExpression::some(300, ClassExpression::named(400)),
                        ClassExpression::some(500, ClassExpression::named(600)),
                    ]),
                ),
            ]),
        }
    }

    #[test]
    fn test_format_prefixed() {
        assert_eq!(
            role_grouped().to_string(),
            "SubClassOf(:100 ObjectIntersectionOf(:200 ObjectSomeValuesFrom(:609096000 \
             ObjectIntersectionOf(ObjectSomeValuesFrom(:300 :400) ObjectSomeValuesFrom(:500 :600)))))"
        );
    }

    #[test]
    fn test_format_full_iri() {
        let axiom = Axiom::EquivalentClasses(vec![
            ClassExpression::named(100),
            ClassExpression::named(200),
        ]);
        assert_eq!(
            Formatter::new().format(&axiom, Format::FullIri),
            "EquivalentClasses(<http://snomed.info/id/100> <http://snomed.info/id/200>)"
        );
    }

    #[test]
    fn test_formatted_text_parses_back() {
        let axiom = role_grouped();
        for format in [Format::Prefixed, Format::FullIri] {
            let text = Formatter::format_axiom(&axiom, format);
            assert_eq!(parse_axiom(&text).unwrap(), axiom);
        }
    }

    #[test]
    fn test_other_axiom_is_reproduced() {
        let text = "SubObjectPropertyOf(ObjectPropertyChain(:246093002 :738774007) :246093002)";
        assert_eq!(parse_axiom(text).unwrap().to_string(), text);
    }
}
