//! Error types for axiom conversion.

use std::fmt;

use snomed_owl::{ClassExpressionType, OwlError};
use thiserror::Error;

/// Side of an axiom: the subclass / first operand, or the superclass /
/// second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Left hand side.
    Left,
    /// Right hand side.
    Right,
}

impl Side {
    /// Lowercase label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur while converting between axioms and relationships.
///
/// Every structural variant carries the side, the actual shape found, and
/// the whole axiom expression so the failure can be diagnosed without
/// parsing again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The expression text could not be deserialised.
    #[error("failed to deserialise axiom expression '{expression}': {source}")]
    ParseFailure {
        /// The axiom expression.
        expression: String,
        /// Underlying parse error.
        #[source]
        source: OwlError,
    },

    /// `EquivalentClasses` without exactly two distinct operands.
    #[error(
        "expecting EquivalentClasses expression to contain 2 class expressions, \
         got {count} - axiom '{expression}'"
    )]
    OperandCount {
        /// Number of operands found.
        count: usize,
        /// The axiom expression.
        expression: String,
    },

    /// More than one named class where a single named concept is expected.
    #[error(
        "expecting a maximum of 1 class in {side} hand side of axiom, \
         got {count} - axiom '{expression}'"
    )]
    AmbiguousNamedConcept {
        /// Offending side.
        side: Side,
        /// Number of classes in the side's signature.
        count: usize,
        /// The axiom expression.
        expression: String,
    },

    /// A side needing decomposition is not an intersection.
    #[error(
        "expecting ObjectIntersectionOf at first level of {side} hand side of axiom, \
         got {actual} - axiom '{expression}'"
    )]
    UnexpectedTopLevelShape {
        /// Offending side.
        side: Side,
        /// Shape found.
        actual: ClassExpressionType,
        /// The axiom expression.
        expression: String,
    },

    /// A role group whose value is not one restriction or an intersection
    /// of restrictions.
    #[error(
        "expecting role group in {side} hand side of axiom to contain ObjectSomeValuesFrom \
         or an ObjectIntersectionOf of ObjectSomeValuesFrom, got {actual} - axiom '{expression}'"
    )]
    UnexpectedRoleGroupFillerShape {
        /// Offending side.
        side: Side,
        /// Shape found.
        actual: ClassExpressionType,
        /// The axiom expression.
        expression: String,
    },

    /// An intersection operand that is neither a class nor a restriction.
    #[error(
        "expecting Class or ObjectSomeValuesFrom at second level of {side} hand side of axiom, \
         got {actual} - axiom '{expression}'"
    )]
    UnexpectedOperandShape {
        /// Offending side.
        side: Side,
        /// Shape found.
        actual: ClassExpressionType,
        /// The axiom expression.
        expression: String,
    },

    /// An attribute restriction whose value is not a named class.
    #[error(
        "expecting value of ObjectSomeValuesFrom in {side} hand side of axiom to be Class, \
         got {actual} - axiom '{expression}'"
    )]
    UnexpectedRestrictionFillerShape {
        /// Offending side.
        side: Side,
        /// Shape found.
        actual: ClassExpressionType,
        /// The axiom expression.
        expression: String,
    },

    /// The reverse builder rejected the representation.
    #[error("failed to build axiom: {0}")]
    Build(#[from] BuildError),
}

impl ConversionError {
    /// The offending side, for structural errors.
    pub fn side(&self) -> Option<Side> {
        match self {
            ConversionError::AmbiguousNamedConcept { side, .. }
            | ConversionError::UnexpectedTopLevelShape { side, .. }
            | ConversionError::UnexpectedRoleGroupFillerShape { side, .. }
            | ConversionError::UnexpectedOperandShape { side, .. }
            | ConversionError::UnexpectedRestrictionFillerShape { side, .. } => Some(*side),
            ConversionError::Build(BuildError::EmptySide { side }) => Some(*side),
            ConversionError::ParseFailure { .. } | ConversionError::OperandCount { .. } => None,
        }
    }

    /// The shape that was expected, for structural errors.
    pub fn expected(&self) -> Option<&'static str> {
        match self {
            ConversionError::OperandCount { .. } => Some("2 class expressions"),
            ConversionError::AmbiguousNamedConcept { .. } => Some("at most 1 class"),
            ConversionError::UnexpectedTopLevelShape { .. } => Some("ObjectIntersectionOf"),
            ConversionError::UnexpectedRoleGroupFillerShape { .. } => {
                Some("ObjectSomeValuesFrom or ObjectIntersectionOf of ObjectSomeValuesFrom")
            }
            ConversionError::UnexpectedOperandShape { .. } => {
                Some("Class or ObjectSomeValuesFrom")
            }
            ConversionError::UnexpectedRestrictionFillerShape { .. } => Some("Class"),
            ConversionError::ParseFailure { .. } | ConversionError::Build(_) => None,
        }
    }

    /// The shape that was found, for shape errors.
    pub fn actual(&self) -> Option<ClassExpressionType> {
        match self {
            ConversionError::UnexpectedTopLevelShape { actual, .. }
            | ConversionError::UnexpectedRoleGroupFillerShape { actual, .. }
            | ConversionError::UnexpectedOperandShape { actual, .. }
            | ConversionError::UnexpectedRestrictionFillerShape { actual, .. } => Some(*actual),
            _ => None,
        }
    }

    /// The axiom expression the error refers to.
    pub fn expression(&self) -> Option<&str> {
        match self {
            ConversionError::ParseFailure { expression, .. }
            | ConversionError::OperandCount { expression, .. }
            | ConversionError::AmbiguousNamedConcept { expression, .. }
            | ConversionError::UnexpectedTopLevelShape { expression, .. }
            | ConversionError::UnexpectedRoleGroupFillerShape { expression, .. }
            | ConversionError::UnexpectedOperandShape { expression, .. }
            | ConversionError::UnexpectedRestrictionFillerShape { expression, .. } => {
                Some(expression)
            }
            ConversionError::Build(_) => None,
        }
    }

    /// Whether the axiom parsed but has a shape that cannot be converted.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            ConversionError::ParseFailure { .. } | ConversionError::Build(_)
        )
    }
}

/// Errors raised when building an axiom from relationships.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A side holds a relationship grouping with no relationships.
    #[error("{side} hand side has neither a named concept nor any relationships")]
    EmptySide {
        /// Offending side.
        side: Side,
    },
}

/// Result type for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
