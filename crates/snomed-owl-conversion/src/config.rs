//! Configuration types for the conversion service.

use std::collections::BTreeSet;

use snomed_owl::SctId;

/// Well-known SNOMED CT concept identifiers used by the conversion.
pub mod concepts {
    use snomed_owl::SctId;

    /// 116680003 |Is a (attribute)|
    pub const IS_A: SctId = 116680003;

    /// 609096000 |Role group (attribute)|
    pub const ROLE_GROUP: SctId = 609096000;
}

/// Configuration for the conversion service.
///
/// Fixed at construction; the service never mutates it.
///
/// # Example
///
/// ```rust
/// use snomed_owl_conversion::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .with_ungrouped_attribute(272741003) // Laterality
///     .build();
///
/// assert!(config.is_ungrouped_attribute(272741003));
/// assert_eq!(config.role_group_id, 609096000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionConfig {
    /// Property marking a role group.
    pub role_group_id: SctId,
    /// Relationship type emitted for named classes.
    pub is_a_id: SctId,
    /// Attribute types that are never placed in a role group when building
    /// axioms from group 0 relationships.
    pub ungrouped_attributes: BTreeSet<SctId>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            role_group_id: concepts::ROLE_GROUP,
            is_a_id: concepts::IS_A,
            ungrouped_attributes: BTreeSet::new(),
        }
    }
}

impl ConversionConfig {
    /// Creates a new builder for ConversionConfig.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    /// Whether `type_id` is configured as an ungrouped attribute.
    pub fn is_ungrouped_attribute(&self, type_id: SctId) -> bool {
        self.ungrouped_attributes.contains(&type_id)
    }
}

/// Builder for ConversionConfig.
#[derive(Debug, Clone, Default)]
pub struct ConversionConfigBuilder {
    role_group_id: Option<SctId>,
    is_a_id: Option<SctId>,
    ungrouped_attributes: BTreeSet<SctId>,
}

impl ConversionConfigBuilder {
    /// Overrides the role group property.
    pub fn with_role_group_id(mut self, role_group_id: SctId) -> Self {
        self.role_group_id = Some(role_group_id);
        self
    }

    /// Overrides the is-a relationship type.
    pub fn with_is_a_id(mut self, is_a_id: SctId) -> Self {
        self.is_a_id = Some(is_a_id);
        self
    }

    /// Adds one ungrouped attribute type.
    pub fn with_ungrouped_attribute(mut self, type_id: SctId) -> Self {
        self.ungrouped_attributes.insert(type_id);
        self
    }

    /// Adds several ungrouped attribute types.
    pub fn with_ungrouped_attributes(mut self, type_ids: impl IntoIterator<Item = SctId>) -> Self {
        self.ungrouped_attributes.extend(type_ids);
        self
    }

    /// Builds the ConversionConfig.
    pub fn build(self) -> ConversionConfig {
        ConversionConfig {
            role_group_id: self.role_group_id.unwrap_or(concepts::ROLE_GROUP),
            is_a_id: self.is_a_id.unwrap_or(concepts::IS_A),
            ungrouped_attributes: self.ungrouped_attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ConversionConfig::default();
        assert_eq!(config.role_group_id, 609096000);
        assert_eq!(config.is_a_id, 116680003);
        assert!(config.ungrouped_attributes.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .with_role_group_id(1)
            .with_is_a_id(2)
            .with_ungrouped_attributes([272741003, 411116001])
            .with_ungrouped_attribute(763032000)
            .build();

        assert_eq!(config.role_group_id, 1);
        assert_eq!(config.is_a_id, 2);
        assert_eq!(config.ungrouped_attributes.len(), 3);
        assert!(config.is_ungrouped_attribute(411116001));
        assert!(!config.is_ungrouped_attribute(363698007));
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(ConversionConfig::builder().build(), ConversionConfig::default());
    }
}
