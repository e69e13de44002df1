//! Mapping between IRIs and SNOMED CT identifiers.

use crate::error::{OwlError, OwlResult};
use crate::SctId;

/// Namespace of SNOMED CT concept IRIs.
pub const SNOMED_IRI: &str = "http://snomed.info/id/";

/// Extract the concept identifier from an IRI.
///
/// Accepts the full form (`<http://snomed.info/id/73211009>` or the bare
/// `http://snomed.info/id/73211009`) and the prefixed forms `:73211009` and
/// `sct:73211009`. The identifier is the trailing segment after the last
/// `/`, `#` or `:`.
///
/// # Examples
///
/// ```rust
/// use snomed_owl::concept_id_from_iri;
///
/// assert_eq!(concept_id_from_iri(":73211009").unwrap(), 73211009);
/// assert_eq!(concept_id_from_iri("<http://snomed.info/id/73211009>").unwrap(), 73211009);
/// assert!(concept_id_from_iri(":abc").is_err());
/// ```
pub fn concept_id_from_iri(iri: &str) -> OwlResult<SctId> {
    let trimmed = iri
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>');
    let fragment = trimmed
        .rsplit(|c: char| c == '/' || c == '#' || c == ':')
        .next()
        .unwrap_or(trimmed);

    if fragment.is_empty() || !fragment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OwlError::InvalidIdentifier(iri.to_string()));
    }
    fragment
        .parse::<SctId>()
        .map_err(|_| OwlError::InvalidIdentifier(iri.to_string()))
}

/// Full IRI for a concept identifier.
pub fn iri_for(id: SctId) -> String {
    format!("{}{}", SNOMED_IRI, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_forms() {
        assert_eq!(concept_id_from_iri(":100").unwrap(), 100);
        assert_eq!(concept_id_from_iri("sct:609096000").unwrap(), 609096000);
    }

    #[test]
    fn test_full_iri() {
        assert_eq!(
            concept_id_from_iri("<http://snomed.info/id/116680003>").unwrap(),
            116680003
        );
        assert_eq!(
            concept_id_from_iri("http://snomed.info/id/116680003").unwrap(),
            116680003
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            concept_id_from_iri("<http://example.org/onto#Heart>"),
            Err(OwlError::InvalidIdentifier(
                "<http://example.org/onto#Heart>".to_string()
            ))
        );
        assert!(concept_id_from_iri(":").is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(concept_id_from_iri(":99999999999999999999999").is_err());
    }

    #[test]
    fn test_iri_for() {
        assert_eq!(iri_for(73211009), "http://snomed.info/id/73211009");
    }
}
