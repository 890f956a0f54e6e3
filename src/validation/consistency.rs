//! Whole-record invariants that no single-field rule can express.
//!
//! A missing value means "unknown" and exempts every check that reads it,
//! except reproducibility, which needs a known replicate count to hold.

use crate::domain::ArticleFields;
use crate::error::{ConsistencyRule, ValidationError};

/// The scalar values the cross-field checks read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsistencyInputs {
    pub reproducible: Option<bool>,
    pub replicates: Option<i64>,
    pub pathogenic_abnormal_variants: Option<i64>,
    pub pathogenic_variants: Option<i64>,
    pub total_variants: Option<i64>,
}

impl ConsistencyInputs {
    pub fn from_fields(fields: &ArticleFields) -> Self {
        Self {
            reproducible: fields.reproducible.copied(),
            replicates: fields.replicates.copied(),
            pathogenic_abnormal_variants: fields.pathogenic_abnormal_variants.copied(),
            pathogenic_variants: fields.pathogenic_variants.copied(),
            total_variants: fields.total_variants.copied(),
        }
    }
}

/// Every violated relationship, in fixed rule order.
pub fn violations(inputs: &ConsistencyInputs) -> Vec<ConsistencyRule> {
    let mut violated = Vec::new();

    if inputs.reproducible == Some(true) && !matches!(inputs.replicates, Some(n) if n > 1) {
        violated.push(ConsistencyRule::ReproducibilityRequiresReplicates);
    }

    if let (Some(abnormal), Some(pathogenic)) =
        (inputs.pathogenic_abnormal_variants, inputs.pathogenic_variants)
    {
        if abnormal > pathogenic {
            violated.push(ConsistencyRule::AbnormalWithinPathogenic);
        }
    }

    if let (Some(total), Some(pathogenic)) = (inputs.total_variants, inputs.pathogenic_variants) {
        if total < pathogenic {
            violated.push(ConsistencyRule::TotalCoversPathogenic);
        }
    }

    violated
}

/// Fails on the first violated relationship.
pub fn check(inputs: &ConsistencyInputs) -> Result<(), ValidationError> {
    match violations(inputs).into_iter().next() {
        Some(rule) => Err(ValidationError::CrossFieldConsistency {
            rule,
            message: rule.message().to_string(),
        }),
        None => Ok(()),
    }
}
