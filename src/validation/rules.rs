//! Single-field rules.
//!
//! Each rule takes the field by value and either hands it back, possibly
//! rewritten, or rejects it with an error naming the field. A missing value
//! passes every rule.

use tracing::debug;

use crate::domain::AnnotatedField;
use crate::error::ValidationError;
use crate::validation::doi;
use crate::validation::ontology::{self, OntologyPolicy};

/// Knobs that change rule behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
    pub ontology_policy: OntologyPolicy,
}

/// Signature shared by every field rule
pub type Rule<T> =
    fn(&str, AnnotatedField<T>, &RuleOptions) -> Result<AnnotatedField<T>, ValidationError>;

pub fn non_empty_text(
    field_name: &str,
    field: AnnotatedField<String>,
    _options: &RuleOptions,
) -> Result<AnnotatedField<String>, ValidationError> {
    match field.value() {
        Some(value) if value.trim().is_empty() => Err(ValidationError::EmptyValue {
            field: field_name.to_string(),
        }),
        _ => Ok(field),
    }
}

pub fn non_negative(
    field_name: &str,
    field: AnnotatedField<i64>,
    _options: &RuleOptions,
) -> Result<AnnotatedField<i64>, ValidationError> {
    match field.copied() {
        Some(value) if value < 0 => Err(ValidationError::NegativeValue {
            field: field_name.to_string(),
            value,
        }),
        _ => Ok(field),
    }
}

/// Ontology identifier rule.
///
/// Strict: the value must already contain a canonical `PREFIX:DIGITS` id.
/// Normalizing: when a loosely written id is found, the whole value becomes
/// the canonical id and any surrounding text is discarded; values without a
/// recognisable id are left as they are.
pub fn ontology_identifier(
    field_name: &str,
    field: AnnotatedField<String>,
    options: &RuleOptions,
) -> Result<AnnotatedField<String>, ValidationError> {
    let Some(value) = field.value() else {
        return Ok(field);
    };

    match options.ontology_policy {
        OntologyPolicy::Strict => {
            if ontology::contains_canonical_id(value) {
                Ok(field)
            } else {
                Err(ValidationError::InvalidOntologyId {
                    field: field_name.to_string(),
                    value: value.clone(),
                })
            }
        }
        OntologyPolicy::Normalizing => match ontology::canonicalize(value) {
            Some(canonical) => {
                if canonical != *value {
                    debug!(field = field_name, from = %value, to = %canonical, "Normalized ontology identifier");
                }
                Ok(field.map_value(|_| canonical))
            }
            None => Ok(field),
        },
    }
}

pub fn doi(
    field_name: &str,
    field: AnnotatedField<String>,
    _options: &RuleOptions,
) -> Result<AnnotatedField<String>, ValidationError> {
    let Some(value) = field.value() else {
        return Ok(field);
    };

    if !doi::contains_doi(value) {
        return Err(ValidationError::InvalidDoiFormat {
            field: field_name.to_string(),
            value: value.clone(),
        });
    }

    Ok(field.map_value(|value| {
        let url = doi::to_resolver_url(value);
        debug!(field = field_name, doi = %url, "Normalized DOI");
        url
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> AnnotatedField<String> {
        AnnotatedField::of(value.to_string())
            .with_explanation("extracted")
            .with_pages(vec![3])
    }

    fn strict() -> RuleOptions {
        RuleOptions {
            ontology_policy: OntologyPolicy::Strict,
        }
    }

    #[test]
    fn test_whitespace_text_is_rejected() {
        let err = non_empty_text("disease", text(" \t\n"), &RuleOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyValue {
                field: "disease".to_string()
            }
        );
    }

    #[test]
    fn test_missing_values_pass_every_rule() {
        let options = RuleOptions::default();
        assert!(non_empty_text("gene", AnnotatedField::missing(), &options).is_ok());
        assert!(non_negative("replicates", AnnotatedField::missing(), &options).is_ok());
        assert!(doi("doi", AnnotatedField::missing(), &options).is_ok());
        assert!(ontology_identifier("type", AnnotatedField::missing(), &strict()).is_ok());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let options = RuleOptions::default();
        assert!(non_negative("totalVariants", AnnotatedField::of(0), &options).is_ok());

        let err = non_negative("totalVariants", AnnotatedField::of(-1), &options).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeValue { value: -1, .. }));
        assert_eq!(err.field(), Some("totalVariants"));
    }

    #[test]
    fn test_ontology_normalizing_rewrites_and_keeps_provenance() {
        let field = ontology_identifier("type", text("obi0000854"), &RuleOptions::default()).unwrap();
        assert_eq!(field.value().map(String::as_str), Some("OBI:0000854"));
        assert_eq!(field.explanation.as_deref(), Some("extracted"));
        assert_eq!(field.pages, Some(vec![3]));
    }

    #[test]
    fn test_ontology_normalizing_discards_surrounding_text() {
        let field = ontology_identifier(
            "type",
            text("Luciferase reporter assay (OBI:0000854)"),
            &RuleOptions::default(),
        )
        .unwrap();
        assert_eq!(field.value().map(String::as_str), Some("OBI:0000854"));
    }

    #[test]
    fn test_ontology_normalizing_leaves_unmatched_text() {
        let field =
            ontology_identifier("type", text("massively parallel reporter assay"), &RuleOptions::default())
                .unwrap();
        assert_eq!(
            field.value().map(String::as_str),
            Some("massively parallel reporter assay")
        );
    }

    #[test]
    fn test_ontology_strict_rejects_loose_spelling() {
        let err = ontology_identifier("type", text("ECO_0001091"), &strict()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOntologyId { .. }));

        let ok = ontology_identifier("type", text("assay ECO:0001091"), &strict()).unwrap();
        assert_eq!(ok.value().map(String::as_str), Some("assay ECO:0001091"));
    }

    #[test]
    fn test_doi_rule() {
        let options = RuleOptions::default();
        let field = doi("doi", text("10.1038/s41586-020-1234-5"), &options).unwrap();
        assert_eq!(
            field.value().map(String::as_str),
            Some("https://doi.org/10.1038/s41586-020-1234-5")
        );

        let err = doi("doi", text("unpublished"), &options).unwrap_err();
        assert_eq!(err.to_string(), "doi.value format seems invalid as a DOI (got 'unpublished')");
    }
}
