use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejection raised while validating an extracted article.
///
/// Every variant is deterministic: resubmitting the same payload fails the
/// same way, so none of these are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}.value must not be an empty string")]
    EmptyValue { field: String },

    #[error("{field}.value must be a non-negative integer (got {value})")]
    NegativeValue { field: String, value: i64 },

    #[error("{field}.value must include a valid ontology identifier like 'OBI:0000854' or 'ECO:0001091' (got '{value}')")]
    InvalidOntologyId { field: String, value: String },

    #[error("{field}.value format seems invalid as a DOI (got '{value}')")]
    InvalidDoiFormat { field: String, value: String },

    #[error("{message}")]
    CrossFieldConsistency {
        rule: ConsistencyRule,
        message: String,
    },
}

impl ValidationError {
    /// Name of the offending field, if the failure is tied to a single one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::EmptyValue { field }
            | Self::NegativeValue { field, .. }
            | Self::InvalidOntologyId { field, .. }
            | Self::InvalidDoiFormat { field, .. } => Some(field),
            Self::CrossFieldConsistency { .. } => None,
        }
    }

    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::EmptyValue { .. } => RejectionKind::EmptyValue,
            Self::NegativeValue { .. } => RejectionKind::NegativeValue,
            Self::InvalidOntologyId { .. } => RejectionKind::InvalidOntologyId,
            Self::InvalidDoiFormat { .. } => RejectionKind::InvalidDoiFormat,
            Self::CrossFieldConsistency { .. } => RejectionKind::CrossFieldConsistency,
        }
    }

    pub fn to_rejection(&self) -> Rejection {
        let field = match self {
            Self::CrossFieldConsistency { rule, .. } => Some(rule.as_str().to_string()),
            other => other.field().map(str::to_string),
        };
        Rejection {
            kind: self.kind(),
            field,
            reason: self.to_string(),
        }
    }
}

/// The cross-field relationships checked once every field is individually valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyRule {
    /// A reproducible study must report more than one replicate.
    ReproducibilityRequiresReplicates,
    /// Abnormal pathogenic variants are a subset of pathogenic variants.
    AbnormalWithinPathogenic,
    /// The total variant count covers every pathogenic variant.
    TotalCoversPathogenic,
}

impl ConsistencyRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReproducibilityRequiresReplicates => "reproducible_requires_replicates",
            Self::AbnormalWithinPathogenic => "abnormal_within_pathogenic",
            Self::TotalCoversPathogenic => "total_covers_pathogenic",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ReproducibilityRequiresReplicates => {
                "Reproducible studies must have more than 1 replicate"
            }
            Self::AbnormalWithinPathogenic => {
                "Pathogenic abnormal variants cannot exceed total pathogenic variants"
            }
            Self::TotalCoversPathogenic => {
                "Total variants must be greater than or equal to pathogenic variants"
            }
        }
    }
}

impl fmt::Display for ConsistencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable category of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    EmptyValue,
    NegativeValue,
    InvalidOntologyId,
    InvalidDoiFormat,
    CrossFieldConsistency,
}

impl RejectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyValue => "empty_value",
            Self::NegativeValue => "negative_value",
            Self::InvalidOntologyId => "invalid_ontology_id",
            Self::InvalidDoiFormat => "invalid_doi_format",
            Self::CrossFieldConsistency => "cross_field_consistency",
        }
    }
}

/// Structured rejection handed back to whatever produced the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub kind: RejectionKind,
    /// Field name, or the violated relationship for cross-field failures
    pub field: Option<String>,
    pub reason: String,
}

impl From<&ValidationError> for Rejection {
    fn from(err: &ValidationError) -> Self {
        err.to_rejection()
    }
}

/// Errors raised by the application shell around the validation core.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
