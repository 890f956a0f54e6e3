//! Article validation: per-field rules, canonicalization, and cross-field checks.
//!
//! Validation is pure and synchronous. The only shared state is the compiled
//! regex matchers, which are read-only once built, so any number of articles
//! can be validated in parallel.

pub mod consistency;
pub mod doi;
pub mod ontology;
pub mod registry;
pub mod rules;

pub use consistency::ConsistencyInputs;
pub use ontology::OntologyPolicy;
pub use registry::{RuleTable, COUNT_RULES, TEXT_RULES};
pub use rules::{Rule, RuleOptions};

use crate::constants;
use crate::domain::{AnnotatedField, ArticleFields, ResearchArticle};
use crate::error::{ConsistencyRule, ValidationError};

/// Builds validated `ResearchArticle`s from raw extracted fields.
///
/// Construction is all-or-nothing: the first failing field rule or cross-field
/// relationship rejects the whole article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleValidator {
    options: RuleOptions,
}

impl ArticleValidator {
    pub fn new(ontology_policy: OntologyPolicy) -> Self {
        Self {
            options: RuleOptions { ontology_policy },
        }
    }

    /// Validator that rejects assay types lacking a canonical identifier
    pub fn strict() -> Self {
        Self::new(OntologyPolicy::Strict)
    }

    pub fn ontology_policy(&self) -> OntologyPolicy {
        self.options.ontology_policy
    }

    pub fn validate(&self, fields: ArticleFields) -> Result<ResearchArticle, ValidationError> {
        let fields = self.apply_field_rules(fields)?;
        consistency::check(&ConsistencyInputs::from_fields(&fields))?;
        Ok(ResearchArticle::from_validated(fields))
    }

    /// Relationship violations of raw fields, for review tooling. Field rules are not run.
    pub fn consistency_report(&self, fields: &ArticleFields) -> Vec<ConsistencyRule> {
        consistency::violations(&ConsistencyInputs::from_fields(fields))
    }

    fn apply_field_rules(&self, fields: ArticleFields) -> Result<ArticleFields, ValidationError> {
        let options = &self.options;
        let text = |name: &str, field: AnnotatedField<String>| TEXT_RULES.apply(name, field, options);
        let count = |name: &str, field: AnnotatedField<i64>| COUNT_RULES.apply(name, field, options);

        Ok(ArticleFields {
            article: text(constants::ARTICLE, fields.article)?,
            doi: text(constants::DOI, fields.doi)?,
            disease: text(constants::DISEASE, fields.disease)?,
            gene: text(constants::GENE, fields.gene)?,
            variant_name: text(constants::VARIANT_NAME, fields.variant_name)?,
            assay_type: text(constants::ASSAY_TYPE, fields.assay_type)?,
            model_system: text(constants::MODEL_SYSTEM, fields.model_system)?,
            experimental_method: text(constants::EXPERIMENTAL_METHOD, fields.experimental_method)?,
            outcome_evaluated: text(constants::OUTCOME_EVALUATED, fields.outcome_evaluated)?,
            positive_controls: count(constants::POSITIVE_CONTROLS, fields.positive_controls)?,
            negative_controls: count(constants::NEGATIVE_CONTROLS, fields.negative_controls)?,
            pathogenic_variants: count(constants::PATHOGENIC_VARIANTS, fields.pathogenic_variants)?,
            pathogenic_abnormal_variants: count(
                constants::PATHOGENIC_ABNORMAL_VARIANTS,
                fields.pathogenic_abnormal_variants,
            )?,
            total_variants: count(constants::TOTAL_VARIANTS, fields.total_variants)?,
            replicates: count(constants::REPLICATES, fields.replicates)?,
            statistical_analysis: text(constants::STATISTICAL_ANALYSIS, fields.statistical_analysis)?,
            validation_process: text(constants::VALIDATION_PROCESS, fields.validation_process)?,
            reproducible: fields.reproducible,
            robustness_data: text(constants::ROBUSTNESS_DATA, fields.robustness_data)?,
            functional_impact: text(constants::FUNCTIONAL_IMPACT, fields.functional_impact)?,
        })
    }
}
