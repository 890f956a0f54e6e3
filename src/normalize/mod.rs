//! Gene / variant pair normalization.
//!
//! Unlike article validation this pipeline never rejects: pairs with an
//! unrecognised nomenclature prefix or a repeated key are dropped silently.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::constants::ALLOWED_VARIANT_PREFIXES;
use crate::domain::GeneVariantPair;

/// Counts of what happened to each input pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VariantSummary {
    pub kept: usize,
    pub dropped_prefix: usize,
    pub dropped_duplicate: usize,
}

impl VariantSummary {
    pub fn total(&self) -> usize {
        self.kept + self.dropped_prefix + self.dropped_duplicate
    }
}

/// Filters and de-duplicates pairs, preserving first-occurrence order.
pub fn normalize_variants(pairs: Vec<GeneVariantPair>) -> Vec<GeneVariantPair> {
    normalize_variants_with_summary(pairs).0
}

pub fn normalize_variants_with_summary(
    pairs: Vec<GeneVariantPair>,
) -> (Vec<GeneVariantPair>, VariantSummary) {
    let mut summary = VariantSummary::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let gene = pair.gene.trim();
        let variant = pair.variant.trim();

        if !has_allowed_prefix(variant) {
            debug!(gene = %gene, variant = %variant, "Dropping variant with unrecognised prefix");
            summary.dropped_prefix += 1;
            continue;
        }

        // Gene symbols compare case-insensitively; variant text keeps its case
        let key = (gene.to_lowercase(), variant.to_string());
        if !seen.insert(key) {
            debug!(gene = %gene, variant = %variant, "Dropping duplicate variant");
            summary.dropped_duplicate += 1;
            continue;
        }

        kept.push(GeneVariantPair::new(gene, variant));
        summary.kept += 1;
    }

    (kept, summary)
}

fn has_allowed_prefix(variant: &str) -> bool {
    let lowered = variant.to_lowercase();
    ALLOWED_VARIANT_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(gene: &str, variant: &str) -> GeneVariantPair {
        GeneVariantPair::new(gene, variant)
    }

    #[test]
    fn test_filters_dedups_and_trims() {
        let input = vec![
            pair("BRCA1", "p.Arg1699Gln"),
            pair("brca1", "p.Arg1699Gln"),
            pair("TP53", "x.123"),
            pair(" BRCA2 ", " c.123A>T "),
        ];

        let (output, summary) = normalize_variants_with_summary(input);

        assert_eq!(
            output,
            vec![pair("BRCA1", "p.Arg1699Gln"), pair("BRCA2", "c.123A>T")]
        );
        assert_eq!(
            summary,
            VariantSummary {
                kept: 2,
                dropped_prefix: 1,
                dropped_duplicate: 1
            }
        );
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_empty_input_is_pass_through() {
        assert!(normalize_variants(Vec::new()).is_empty());
    }

    #[test]
    fn test_prefix_check_ignores_case() {
        let output = normalize_variants(vec![pair("MLH1", "P.Val384Asp"), pair("MSH2", "R.942+3a>t")]);
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].variant, "P.Val384Asp");
    }

    #[test]
    fn test_variant_case_is_part_of_the_key() {
        let output = normalize_variants(vec![pair("ATM", "c.7271T>G"), pair("ATM", "c.7271t>g")]);
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let output = normalize_variants(vec![
            pair("PALB2", "c.3113G>A"),
            pair("CHEK2", "c.1100delC"),
            pair("palb2 ", "c.3113G>A"),
        ]);
        assert_eq!(
            output,
            vec![pair("PALB2", "c.3113G>A"), pair("CHEK2", "c.1100delC")]
        );
    }

    #[test]
    fn test_whitespace_only_variant_is_dropped() {
        let output = normalize_variants(vec![pair("BRCA1", "   ")]);
        assert!(output.is_empty());
    }
}
