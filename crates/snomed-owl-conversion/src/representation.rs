//! Relationship representation of an axiom.

use std::collections::BTreeMap;

use snomed_owl::{AxiomKind, SctId};

use crate::error::Side;

/// A stated relationship: `(group, type, destination)`.
///
/// Group 0 is the ungrouped bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    /// Relationship group number (0 = ungrouped).
    pub group: u32,
    /// Relationship type (attribute) concept.
    pub type_id: SctId,
    /// Destination concept.
    pub destination_id: SctId,
}

impl Relationship {
    /// Creates a relationship.
    pub fn new(group: u32, type_id: SctId, destination_id: SctId) -> Self {
        Self {
            group,
            type_id,
            destination_id,
        }
    }
}

/// Relationships keyed by group number.
///
/// Groups iterate in ascending group number; relationships within a group
/// keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RelationshipGroups {
    groups: BTreeMap<u32, Vec<Relationship>>,
}

impl RelationshipGroups {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a relationship to the group named by its group number.
    pub fn add(&mut self, relationship: Relationship) {
        match self.groups.get_mut(&relationship.group) {
            Some(group) => group.push(relationship),
            None => {
                self.groups.insert(relationship.group, vec![relationship]);
            }
        }
    }

    /// Relationships in `group`, if the group exists.
    pub fn get(&self, group: u32) -> Option<&[Relationship]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    /// Ungrouped relationships (group 0).
    pub fn ungrouped(&self) -> &[Relationship] {
        self.get(0).unwrap_or(&[])
    }

    /// Returns true if `group` exists.
    pub fn contains_group(&self, group: u32) -> bool {
        self.groups.contains_key(&group)
    }

    /// Group numbers in ascending order.
    pub fn group_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.groups.keys().copied()
    }

    /// `(group, relationships)` pairs in ascending group order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Relationship])> {
        self.groups.iter().map(|(group, rels)| (*group, rels.as_slice()))
    }

    /// All relationships, group by group.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.groups.values().flatten()
    }

    /// Number of groups, including group 0.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of relationships across all groups.
    pub fn relationship_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns true if no relationships are held.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Relationship> for RelationshipGroups {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        let mut groups = RelationshipGroups::new();
        for relationship in iter {
            groups.add(relationship);
        }
        groups
    }
}

/// One side of an axiom: a single named concept, or relationships.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SideRepresentation {
    /// The side is exactly one named concept.
    NamedConcept(SctId),
    /// The side is decomposed into relationships.
    Relationships(RelationshipGroups),
}

impl SideRepresentation {
    /// The named concept, if this side is one.
    pub fn named_concept(&self) -> Option<SctId> {
        match self {
            SideRepresentation::NamedConcept(id) => Some(*id),
            SideRepresentation::Relationships(_) => None,
        }
    }

    /// The relationships, if this side was decomposed.
    pub fn relationships(&self) -> Option<&RelationshipGroups> {
        match self {
            SideRepresentation::NamedConcept(_) => None,
            SideRepresentation::Relationships(groups) => Some(groups),
        }
    }
}

/// Relationship representation of a `SubClassOf` or `EquivalentClasses`
/// axiom.
///
/// # Example
///
/// ```rust
/// use snomed_owl_conversion::{AxiomRepresentation, SideRepresentation};
///
/// let rep = AxiomRepresentation::new(
///     true,
///     SideRepresentation::NamedConcept(100),
///     SideRepresentation::NamedConcept(200),
/// );
/// assert_eq!(rep.left_named_concept(), Some(100));
/// assert!(rep.right_relationships().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxiomRepresentation {
    /// True for `SubClassOf`, false for `EquivalentClasses`.
    pub primitive: bool,
    /// Left hand side.
    pub left: SideRepresentation,
    /// Right hand side.
    pub right: SideRepresentation,
}

impl AxiomRepresentation {
    /// Creates a representation.
    pub fn new(primitive: bool, left: SideRepresentation, right: SideRepresentation) -> Self {
        Self {
            primitive,
            left,
            right,
        }
    }

    /// The given side.
    pub fn side(&self, side: Side) -> &SideRepresentation {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Left hand side named concept.
    pub fn left_named_concept(&self) -> Option<SctId> {
        self.left.named_concept()
    }

    /// Left hand side relationships.
    pub fn left_relationships(&self) -> Option<&RelationshipGroups> {
        self.left.relationships()
    }

    /// Right hand side named concept.
    pub fn right_named_concept(&self) -> Option<SctId> {
        self.right.named_concept()
    }

    /// Right hand side relationships.
    pub fn right_relationships(&self) -> Option<&RelationshipGroups> {
        self.right.relationships()
    }
}

/// Outcome of converting one axiom expression.
///
/// Failures are the `Err` arm of [`ConversionResult`](crate::ConversionResult).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Conversion {
    /// The axiom was converted.
    Converted(AxiomRepresentation),
    /// The axiom is not `SubClassOf` or `EquivalentClasses`.
    NotApplicable {
        /// Kind of the skipped axiom.
        kind: AxiomKind,
    },
}

impl Conversion {
    /// The representation, if converted.
    pub fn representation(&self) -> Option<&AxiomRepresentation> {
        match self {
            Conversion::Converted(rep) => Some(rep),
            Conversion::NotApplicable { .. } => None,
        }
    }

    /// Consumes the outcome, returning the representation if converted.
    pub fn into_representation(self) -> Option<AxiomRepresentation> {
        match self {
            Conversion::Converted(rep) => Some(rep),
            Conversion::NotApplicable { .. } => None,
        }
    }

    /// Returns true if the axiom kind is not convertible.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Conversion::NotApplicable { .. })
    }
}
