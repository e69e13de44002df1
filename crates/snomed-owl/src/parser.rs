//! OWL functional syntax parser implementation using nom.
//!
//! Reads a single axiom as stored in the SNOMED CT OWL axiom reference set.
//! Arguments may be separated by whitespace, commas, or both.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, cut, map, map_res, recognize, verify},
    multi::many1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::ast::{Axiom, ClassExpression, ObjectProperty};
use crate::error::{OwlError, OwlResult};
use crate::iri::concept_id_from_iri;
use crate::SctId;

/// Parse one axiom.
///
/// # Examples
///
/// ```rust
/// use snomed_owl::{parse_axiom, Axiom, ClassExpression};
///
/// let axiom = parse_axiom("SubClassOf(:100 :200)").unwrap();
/// assert_eq!(
///     axiom,
///     Axiom::SubClassOf {
///         sub_class: ClassExpression::named(100),
///         super_class: ClassExpression::named(200),
///     }
/// );
///
/// // Axioms outside the class fragment are kept by keyword
/// let axiom = parse_axiom("TransitiveObjectProperty(:774081006)").unwrap();
/// assert_eq!(axiom.kind().to_string(), "TransitiveObjectProperty");
/// ```
pub fn parse_axiom(input: &str) -> OwlResult<Axiom> {
    run(input, axiom)
}

/// Parse a standalone class expression.
pub fn parse_class_expression(input: &str) -> OwlResult<ClassExpression> {
    run(input, class_expression)
}

fn run<'a, T>(input: &'a str, parser: fn(&'a str) -> IResult<&'a str, T>) -> OwlResult<T> {
    let input = input.trim();
    if input.is_empty() {
        return Err(OwlError::EmptyExpression);
    }

    match all_consuming(delimited(ws, parser, ws))(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = input.len() - e.input.len();
            let message = if e.code == nom::error::ErrorKind::MapRes {
                format!("invalid identifier at: '{}'", truncate(e.input, 20))
            } else if e.input.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected input at: '{}'", truncate(e.input, 20))
            };
            Err(OwlError::ParseError { position, message })
        }
        Err(nom::Err::Incomplete(_)) => Err(OwlError::Incomplete("axiom".to_string())),
    }
}

fn truncate(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ============================================================================
// Axioms
// ============================================================================

fn axiom(input: &str) -> IResult<&str, Axiom> {
    alt((sub_class_of, equivalent_classes, other_axiom))(input)
}

fn sub_class_of(input: &str) -> IResult<&str, Axiom> {
    let (input, (sub_class, super_class)) = arguments(
        "SubClassOf",
        pair(preceded(sep, class_expression), preceded(sep, class_expression)),
    )(input)?;
    Ok((
        input,
        Axiom::SubClassOf {
            sub_class,
            super_class,
        },
    ))
}

/// Any operand count is accepted here; conversion rejects counts other
/// than two.
fn equivalent_classes(input: &str) -> IResult<&str, Axiom> {
    map(
        arguments("EquivalentClasses", many1(preceded(sep, class_expression))),
        Axiom::EquivalentClasses,
    )(input)
}

/// Any other axiom: keyword followed by balanced parentheses.
///
/// Malformed class axioms must not fall through to here.
fn other_axiom(input: &str) -> IResult<&str, Axiom> {
    let (input, keyword) = verify(keyword, |k: &str| {
        k != "SubClassOf" && k != "EquivalentClasses"
    })(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('(')(input)?;
    let (input, body) = balanced(input)?;
    let (input, _) = char(')')(input)?;
    Ok((
        input,
        Axiom::Other {
            keyword: keyword.to_string(),
            arguments: body.trim().to_string(),
        },
    ))
}

fn keyword(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_uppercase()),
        take_while(|c: char| c.is_ascii_alphanumeric()),
    ))(input)
}

/// Text up to the parenthesis closing the current one. IRIs in angle
/// brackets may contain parentheses and are skipped whole.
fn balanced(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut in_iri = false;
    for (idx, c) in input.char_indices() {
        match c {
            '<' if !in_iri => in_iri = true,
            '>' if in_iri => in_iri = false,
            '(' if !in_iri => depth += 1,
            ')' if !in_iri => {
                if depth == 0 {
                    return Ok((&input[idx..], &input[..idx]));
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        &input[input.len()..],
        nom::error::ErrorKind::TakeUntil,
    )))
}

// ============================================================================
// Class expressions
// ============================================================================

fn class_expression(input: &str) -> IResult<&str, ClassExpression> {
    alt((
        object_intersection_of,
        object_some_values_from,
        map(concept_id, ClassExpression::NamedConcept),
    ))(input)
}

fn object_intersection_of(input: &str) -> IResult<&str, ClassExpression> {
    map(
        arguments("ObjectIntersectionOf", at_least_two_operands),
        ClassExpression::Conjunction,
    )(input)
}

fn object_some_values_from(input: &str) -> IResult<&str, ClassExpression> {
    let (input, (property, filler)) = arguments(
        "ObjectSomeValuesFrom",
        pair(preceded(sep, concept_id), preceded(sep, class_expression)),
    )(input)?;
    Ok((
        input,
        ClassExpression::ExistentialRestriction {
            property: ObjectProperty::new(property),
            filler: Box::new(filler),
        },
    ))
}

fn at_least_two_operands(input: &str) -> IResult<&str, Vec<ClassExpression>> {
    verify(many1(preceded(sep, class_expression)), |operands: &Vec<_>| {
        operands.len() >= 2
    })(input)
}

/// `Keyword ( <inner> )` with optional whitespace around the parentheses.
///
/// Committed once `Keyword (` has matched, so errors point inside the
/// arguments.
fn arguments<'a, O, F>(
    name: &'static str,
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(
        tuple((tag(name), ws, char('('))),
        cut(terminated(inner, pair(sep, char(')')))),
    )
}

// ============================================================================
// Identifiers
// ============================================================================

fn concept_id(input: &str) -> IResult<&str, SctId> {
    map_res(iri, concept_id_from_iri)(input)
}

fn iri(input: &str) -> IResult<&str, &str> {
    alt((full_iri, prefixed_name))(input)
}

/// `<http://snomed.info/id/73211009>`
fn full_iri(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('<'),
        take_while1(|c: char| c != '>' && !c.is_whitespace()),
        char('>'),
    ))(input)
}

/// `:73211009` or `sct:73211009`
fn prefixed_name(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        char(':'),
        digit1,
    )))(input)
}

// ============================================================================
// Whitespace handling
// ============================================================================

/// Optional whitespace
fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

/// Argument separator: any run of whitespace and commas
fn sep(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == ',')(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AxiomKind;

    mod class_axioms {
        use super::*;

        #[test]
        fn test_sub_class_of_named_classes() {
            let axiom = parse_axiom("SubClassOf(:100 :200)").unwrap();
            assert_eq!(
                axiom,
                Axiom::SubClassOf {
                    sub_class: ClassExpression::named(100),
                    super_class: ClassExpression::named(200),
                }
            );
        }

        #[test]
        fn test_comma_separated_arguments() {
            let spaced = parse_axiom(
                "SubClassOf(:100 ObjectIntersectionOf(:200 ObjectSomeValuesFrom(:300 :400)))",
            )
            .unwrap();
            let commas = parse_axiom(
                "SubClassOf(:100, ObjectIntersectionOf(:200, ObjectSomeValuesFrom(:300, :400)))",
            )
            .unwrap();
            assert_eq!(spaced, commas);
        }

        #[test]
        fn test_role_group() {
            let axiom = parse_axiom(
                "EquivalentClasses(:73211009 ObjectIntersectionOf(:362969004 \
                 ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:363698007 :113331007))))",
            )
            .unwrap();
            let expected = Axiom::EquivalentClasses(vec![
                ClassExpression::named(73211009),
                ClassExpression::and(vec![
                    ClassExpression::named(362969004),
                    ClassExpression::some(
                        609096000,
                        ClassExpression::some(363698007, ClassExpression::named(113331007)),
                    ),
                ]),
            ]);
            assert_eq!(axiom, expected);
        }

        #[test]
        fn test_full_iris() {
            let axiom = parse_axiom(
                "SubClassOf(<http://snomed.info/id/100> <http://snomed.info/id/200>)",
            )
            .unwrap();
            assert_eq!(axiom.kind(), AxiomKind::SubClassOf);
        }

        #[test]
        fn test_equivalent_classes_single_operand() {
            let axiom = parse_axiom("EquivalentClasses(:100)").unwrap();
            assert_eq!(
                axiom,
                Axiom::EquivalentClasses(vec![ClassExpression::named(100)])
            );
        }

        #[test]
        fn test_equivalent_classes_keeps_all_operands() {
            let axiom = parse_axiom("EquivalentClasses(:100, :200, :300)").unwrap();
            match axiom {
                Axiom::EquivalentClasses(operands) => assert_eq!(operands.len(), 3),
                other => panic!("Expected EquivalentClasses, got {:?}", other),
            }
        }

        #[test]
        fn test_whitespace_and_newlines() {
            let axiom = parse_axiom(
                "  SubClassOf (\n  :100\n  ObjectIntersectionOf ( :200 :300 )\n)  ",
            )
            .unwrap();
            assert_eq!(axiom.kind(), AxiomKind::SubClassOf);
        }
    }

    mod other_axioms {
        use super::*;

        #[test]
        fn test_transitive_property() {
            let axiom = parse_axiom("TransitiveObjectProperty(:774081006)").unwrap();
            assert_eq!(
                axiom,
                Axiom::Other {
                    keyword: "TransitiveObjectProperty".to_string(),
                    arguments: ":774081006".to_string(),
                }
            );
        }

        #[test]
        fn test_property_chain() {
            let axiom = parse_axiom(
                "SubObjectPropertyOf(ObjectPropertyChain(:246093002 :738774007) :246093002)",
            )
            .unwrap();
            assert_eq!(
                axiom.kind(),
                AxiomKind::Other("SubObjectPropertyOf".to_string())
            );
        }

        #[test]
        fn test_unbalanced_other_axiom() {
            assert!(parse_axiom("SubObjectPropertyOf(:1 (:2)").is_err());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_empty_input() {
            assert_eq!(parse_axiom("   "), Err(OwlError::EmptyExpression));
        }

        #[test]
        fn test_single_operand_intersection() {
            assert!(parse_axiom("SubClassOf(:100 ObjectIntersectionOf(:200))").is_err());
        }

        #[test]
        fn test_trailing_input() {
            let err = parse_axiom("SubClassOf(:100 :200) :300").unwrap_err();
            assert!(matches!(err, OwlError::ParseError { .. }));
        }

        #[test]
        fn test_non_numeric_identifier() {
            let err = parse_class_expression("<http://example.org/onto#Heart>").unwrap_err();
            match err {
                OwlError::ParseError { position, message } => {
                    assert_eq!(position, 0);
                    assert!(message.starts_with("invalid identifier"));
                }
                other => panic!("Expected ParseError, got {:?}", other),
            }
        }

        #[test]
        fn test_error_position_inside_class_axiom() {
            let err = parse_axiom("SubClassOf(:100 ObjectIntersectionOf(:200 :abc))").unwrap_err();
            match err {
                OwlError::ParseError { position, message } => {
                    assert_eq!(position, 37);
                    assert!(message.contains(":200 :abc"), "{}", message);
                }
                other => panic!("Expected ParseError, got {:?}", other),
            }
        }

        #[test]
        fn test_missing_operand_position() {
            let err = parse_axiom("SubClassOf(:100)").unwrap_err();
            match err {
                OwlError::ParseError { position, .. } => assert_eq!(position, 15),
                other => panic!("Expected ParseError, got {:?}", other),
            }
        }

        #[test]
        fn test_empty_equivalent_classes() {
            assert!(parse_axiom("EquivalentClasses()").is_err());
        }

        #[test]
        fn test_missing_close() {
            assert!(parse_axiom("SubClassOf(:100 :200").is_err());
        }
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééééé", 2), "éé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
