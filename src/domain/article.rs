use serde::{Deserialize, Serialize};

use crate::domain::annotated::AnnotatedField;
use crate::error::ValidationError;
use crate::validation::ArticleValidator;

/// The annotated slots of a research article exactly as the extractor emits them.
///
/// Nothing here is validated; this is the raw payload shape. Slots missing
/// from the payload deserialize as not-found fields; unknown slot names are
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArticleFields {
    #[serde(rename = "articulo")]
    pub article: AnnotatedField<String>,
    pub doi: AnnotatedField<String>,
    pub disease: AnnotatedField<String>,
    pub gene: AnnotatedField<String>,
    pub variant_name: AnnotatedField<String>,
    /// Assay or evidence type, expected to carry an ontology identifier
    #[serde(rename = "type")]
    pub assay_type: AnnotatedField<String>,
    #[serde(rename = "modelSystem")]
    pub model_system: AnnotatedField<String>,
    #[serde(rename = "experimentalMethod")]
    pub experimental_method: AnnotatedField<String>,
    #[serde(rename = "outcomeEvaluated")]
    pub outcome_evaluated: AnnotatedField<String>,
    #[serde(rename = "positiveControls")]
    pub positive_controls: AnnotatedField<i64>,
    #[serde(rename = "negativeControls")]
    pub negative_controls: AnnotatedField<i64>,
    #[serde(rename = "pathogenicVariants")]
    pub pathogenic_variants: AnnotatedField<i64>,
    #[serde(rename = "pathogenicAbnormalVariants")]
    pub pathogenic_abnormal_variants: AnnotatedField<i64>,
    #[serde(rename = "totalVariants")]
    pub total_variants: AnnotatedField<i64>,
    pub replicates: AnnotatedField<i64>,
    #[serde(rename = "statisticalAnalysis")]
    pub statistical_analysis: AnnotatedField<String>,
    #[serde(rename = "validationProcess")]
    pub validation_process: AnnotatedField<String>,
    pub reproducible: AnnotatedField<bool>,
    #[serde(rename = "robustnessData")]
    pub robustness_data: AnnotatedField<String>,
    #[serde(rename = "functionalImpact")]
    pub functional_impact: AnnotatedField<String>,
}

/// A research article whose every field rule and cross-field invariant holds.
///
/// Only `ArticleValidator` builds one, so holding a `ResearchArticle` is proof
/// of validity. Deserializing one runs the default validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArticleFields", into = "ArticleFields")]
pub struct ResearchArticle {
    fields: ArticleFields,
}

impl ResearchArticle {
    pub(crate) fn from_validated(fields: ArticleFields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &ArticleFields {
        &self.fields
    }

    pub fn into_fields(self) -> ArticleFields {
        self.fields
    }

    /// Article identifier as extracted, if any
    pub fn article_id(&self) -> Option<&str> {
        self.fields.article.value().map(String::as_str)
    }

    /// DOI in resolver URL form, if any
    pub fn doi(&self) -> Option<&str> {
        self.fields.doi.value().map(String::as_str)
    }

    pub fn assay_type(&self) -> Option<&str> {
        self.fields.assay_type.value().map(String::as_str)
    }
}

impl TryFrom<ArticleFields> for ResearchArticle {
    type Error = ValidationError;

    fn try_from(fields: ArticleFields) -> Result<Self, Self::Error> {
        ArticleValidator::default().validate(fields)
    }
}

impl From<ResearchArticle> for ArticleFields {
    fn from(article: ResearchArticle) -> Self {
        article.fields
    }
}

/// A batch of extracted articles from one source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchData {
    pub data: Vec<ArticleFields>,
}

impl ResearchData {
    /// Parses either a `{"data": [...]}` batch or a single article object.
    ///
    /// An object carrying a `data` key is always read as a batch, so a
    /// malformed batch is an error rather than a single empty article.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("data").is_some() {
            return serde_json::from_value(value);
        }

        let article: ArticleFields = serde_json::from_value(value)?;
        Ok(Self {
            data: vec![article],
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
