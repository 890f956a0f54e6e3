//! Field name → ordered rule list.
//!
//! Which rules apply to which field is data: adding a rule to a field is an
//! edit to one of the tables below.

use crate::constants;
use crate::domain::AnnotatedField;
use crate::error::ValidationError;
use crate::validation::rules::{self, Rule, RuleOptions};

const NON_EMPTY: Rule<String> = rules::non_empty_text;
const ONTOLOGY_ID: Rule<String> = rules::ontology_identifier;
const DOI: Rule<String> = rules::doi;
const NON_NEGATIVE: Rule<i64> = rules::non_negative;

/// Ordered rules per field for one value type
pub struct RuleTable<T: 'static> {
    entries: &'static [(&'static str, &'static [Rule<T>])],
}

impl<T> RuleTable<T> {
    /// Rules for a field in application order; empty for unknown fields
    pub fn rules_for(&self, field_name: &str) -> &'static [Rule<T>] {
        self.entries
            .iter()
            .find(|(name, _)| *name == field_name)
            .map(|(_, rules)| *rules)
            .unwrap_or_default()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Runs every rule for the field, threading the (possibly rewritten) field through.
    pub fn apply(
        &self,
        field_name: &str,
        field: AnnotatedField<T>,
        options: &RuleOptions,
    ) -> Result<AnnotatedField<T>, ValidationError> {
        self.rules_for(field_name)
            .iter()
            .try_fold(field, |field, rule| rule(field_name, field, options))
    }
}

pub static TEXT_RULES: RuleTable<String> = RuleTable {
    entries: &[
        (constants::ARTICLE, &[NON_EMPTY]),
        (constants::DOI, &[DOI]),
        (constants::DISEASE, &[NON_EMPTY]),
        (constants::GENE, &[NON_EMPTY]),
        (constants::VARIANT_NAME, &[NON_EMPTY]),
        (constants::ASSAY_TYPE, &[NON_EMPTY, ONTOLOGY_ID]),
        (constants::MODEL_SYSTEM, &[NON_EMPTY]),
        (constants::EXPERIMENTAL_METHOD, &[NON_EMPTY]),
        (constants::OUTCOME_EVALUATED, &[NON_EMPTY]),
        (constants::STATISTICAL_ANALYSIS, &[NON_EMPTY]),
        (constants::VALIDATION_PROCESS, &[NON_EMPTY]),
        (constants::ROBUSTNESS_DATA, &[NON_EMPTY]),
        (constants::FUNCTIONAL_IMPACT, &[NON_EMPTY]),
    ],
};

pub static COUNT_RULES: RuleTable<i64> = RuleTable {
    entries: &[
        (constants::POSITIVE_CONTROLS, &[NON_NEGATIVE]),
        (constants::NEGATIVE_CONTROLS, &[NON_NEGATIVE]),
        (constants::PATHOGENIC_VARIANTS, &[NON_NEGATIVE]),
        (constants::PATHOGENIC_ABNORMAL_VARIANTS, &[NON_NEGATIVE]),
        (constants::TOTAL_VARIANTS, &[NON_NEGATIVE]),
        (constants::REPLICATES, &[NON_NEGATIVE]),
    ],
};
