//! Metric names and recording helpers for the validation pipelines.
//!
//! Recording goes through the `metrics` facade; without an installed
//! recorder every call is a no-op.

use std::fmt;

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Article validation
    ArticlesAccepted,
    ArticlesRejected,
    FieldsNormalized,
    BatchesProcessed,
    BatchSize,

    // Variant normalization
    VariantPairsKept,
    VariantPairsDropped,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::ArticlesAccepted => "evidence_articles_accepted_total",
            MetricName::ArticlesRejected => "evidence_articles_rejected_total",
            MetricName::FieldsNormalized => "evidence_fields_normalized_total",
            MetricName::BatchesProcessed => "evidence_batches_processed_total",
            MetricName::BatchSize => "evidence_batch_size",
            MetricName::VariantPairsKept => "evidence_variant_pairs_kept_total",
            MetricName::VariantPairsDropped => "evidence_variant_pairs_dropped_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod validation {
    use super::MetricName;

    pub fn article_accepted() {
        ::metrics::counter!(MetricName::ArticlesAccepted.as_str()).increment(1);
    }

    /// Record a rejected article, labelled by rejection kind
    pub fn article_rejected(kind: &str) {
        ::metrics::counter!(MetricName::ArticlesRejected.as_str(), "kind" => kind.to_string())
            .increment(1);
    }

    /// Record a field whose value was rewritten during validation
    pub fn field_normalized(field: &str) {
        ::metrics::counter!(MetricName::FieldsNormalized.as_str(), "field" => field.to_string())
            .increment(1);
    }

    /// Record a finished batch. Accepted and rejected totals are counted per
    /// article by `article_accepted` and `article_rejected`.
    pub fn batch_processed(total: usize) {
        ::metrics::histogram!(MetricName::BatchSize.as_str()).record(total as f64);
        ::metrics::counter!(MetricName::BatchesProcessed.as_str()).increment(1);
    }
}

pub mod variants {
    use super::MetricName;
    use crate::normalize::VariantSummary;

    pub fn summary_recorded(summary: &VariantSummary) {
        ::metrics::counter!(MetricName::VariantPairsKept.as_str()).increment(summary.kept as u64);
        ::metrics::counter!(MetricName::VariantPairsDropped.as_str(), "reason" => "prefix")
            .increment(summary.dropped_prefix as u64);
        ::metrics::counter!(MetricName::VariantPairsDropped.as_str(), "reason" => "duplicate")
            .increment(summary.dropped_duplicate as u64);
    }
}
