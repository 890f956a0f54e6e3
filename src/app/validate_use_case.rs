use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app::ports::{ArticleOutputPort, RejectionOutputPort};
use crate::app::records::{ArticleOutcome, BatchReport, RejectedArticleRecord, ValidatedArticleRecord};
use crate::constants;
use crate::domain::{ArticleFields, ResearchArticle, ResearchData};
use crate::observability::metrics;
use crate::validation::ArticleValidator;

/// Use case for validating extracted articles and routing the outcome
pub struct ValidateArticlesUseCase {
    validator: ArticleValidator,
    accepted_output: Box<dyn ArticleOutputPort>,
    rejected_output: Box<dyn RejectionOutputPort>,
}

impl ValidateArticlesUseCase {
    pub fn new(
        validator: ArticleValidator,
        accepted_output: Box<dyn ArticleOutputPort>,
        rejected_output: Box<dyn RejectionOutputPort>,
    ) -> Self {
        Self {
            validator,
            accepted_output,
            rejected_output,
        }
    }

    /// Create a use case with the default (normalizing) validator
    pub fn with_default_validator(
        accepted_output: Box<dyn ArticleOutputPort>,
        rejected_output: Box<dyn RejectionOutputPort>,
    ) -> Self {
        Self::new(ArticleValidator::default(), accepted_output, rejected_output)
    }

    /// Validate a single article and write it to the matching output.
    ///
    /// A rejected article is a normal outcome, not an error; errors come only
    /// from the outputs.
    pub async fn validate_article(
        &self,
        source: &str,
        index: usize,
        fields: ArticleFields,
    ) -> Result<ArticleOutcome> {
        let article_id = fields.article.value().cloned();
        let raw_doi = fields.doi.value().cloned();
        let raw_assay_type = fields.assay_type.value().cloned();

        let outcome = match self.validator.validate(fields) {
            Ok(article) => {
                record_normalizations(&article, raw_doi.as_deref(), raw_assay_type.as_deref());
                metrics::validation::article_accepted();
                info!(source = %source, index, article = ?article_id, "Article accepted");

                let record = ValidatedArticleRecord {
                    record_id: Uuid::new_v4(),
                    source: source.to_string(),
                    index,
                    article,
                    rule_version: constants::RULE_VERSION.to_string(),
                    validated_at: Utc::now(),
                };
                self.accepted_output.write_validated_article(&record).await?;
                ArticleOutcome::Accepted(record)
            }
            Err(err) => {
                let rejection = err.to_rejection();
                metrics::validation::article_rejected(rejection.kind.as_str());
                warn!(
                    source = %source,
                    index,
                    article = ?article_id,
                    field = ?rejection.field,
                    reason = %rejection.reason,
                    "Article rejected"
                );

                let record = RejectedArticleRecord {
                    record_id: Uuid::new_v4(),
                    source: source.to_string(),
                    index,
                    article_id,
                    rejection,
                    rule_version: constants::RULE_VERSION.to_string(),
                    rejected_at: Utc::now(),
                };
                self.rejected_output.write_rejected_article(&record).await?;
                ArticleOutcome::Rejected(record)
            }
        };

        Ok(outcome)
    }

    /// Validate every article of a batch independently
    pub async fn validate_batch(&self, source: &str, batch: ResearchData) -> Result<BatchReport> {
        let mut report = BatchReport {
            source: source.to_string(),
            total: batch.len(),
            ..Default::default()
        };

        for (index, fields) in batch.data.into_iter().enumerate() {
            match self.validate_article(source, index, fields).await? {
                ArticleOutcome::Accepted(_) => report.accepted += 1,
                ArticleOutcome::Rejected(record) => {
                    report.rejected += 1;
                    report.rejections.push(record);
                }
            }
        }

        metrics::validation::batch_processed(report.total);
        info!(
            source = %source,
            total = report.total,
            accepted = report.accepted,
            rejected = report.rejected,
            "Batch validated"
        );

        Ok(report)
    }
}

fn record_normalizations(article: &ResearchArticle, raw_doi: Option<&str>, raw_assay_type: Option<&str>) {
    if article.doi() != raw_doi {
        metrics::validation::field_normalized(constants::DOI);
    }
    if article.assay_type() != raw_assay_type {
        metrics::validation::field_normalized(constants::ASSAY_TYPE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::{ArticleOutputPort, RejectionOutputPort};
    use crate::domain::AnnotatedField;
    use crate::error::RejectionKind;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockArticleOutput {
        pub records: Arc<tokio::sync::Mutex<Vec<ValidatedArticleRecord>>>,
    }

    struct MockRejectionOutput {
        pub records: Arc<tokio::sync::Mutex<Vec<RejectedArticleRecord>>>,
    }

    #[async_trait]
    impl ArticleOutputPort for MockArticleOutput {
        async fn write_validated_article(&self, record: &ValidatedArticleRecord) -> Result<()> {
            self.records.lock().await.push(record.clone());
            Ok(())
        }
    }

    #[async_trait]
    impl RejectionOutputPort for MockRejectionOutput {
        async fn write_rejected_article(&self, record: &RejectedArticleRecord) -> Result<()> {
            self.records.lock().await.push(record.clone());
            Ok(())
        }
    }

    type Sinks = (
        Arc<tokio::sync::Mutex<Vec<ValidatedArticleRecord>>>,
        Arc<tokio::sync::Mutex<Vec<RejectedArticleRecord>>>,
    );

    fn use_case(validator: ArticleValidator) -> (ValidateArticlesUseCase, Sinks) {
        let accepted = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let rejected = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let use_case = ValidateArticlesUseCase::new(
            validator,
            Box::new(MockArticleOutput {
                records: accepted.clone(),
            }),
            Box::new(MockRejectionOutput {
                records: rejected.clone(),
            }),
        );
        (use_case, (accepted, rejected))
    }

    fn article(name: &str, doi: &str) -> ArticleFields {
        ArticleFields {
            article: AnnotatedField::of(name.to_string()),
            doi: AnnotatedField::of(doi.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_accepted_article_is_written_normalized() {
        let (use_case, (accepted, rejected)) = use_case(ArticleValidator::default());

        let outcome = use_case
            .validate_article("study.pdf", 0, article("Starita 2018", "10.1016/j.ajhg.2018.07.016"))
            .await
            .unwrap();
        assert!(outcome.is_accepted());

        let written = accepted.lock().await;
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].source, "study.pdf");
        assert_eq!(
            written[0].article.doi(),
            Some("https://doi.org/10.1016/j.ajhg.2018.07.016")
        );
        assert!(rejected.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_isolates_rejections() {
        let (use_case, (accepted, rejected)) = use_case(ArticleValidator::default());

        let batch = ResearchData {
            data: vec![
                article("First", "10.1038/s41586-020-1234-5"),
                article("Second", "no doi given"),
                ArticleFields::default(),
            ],
        };

        let report = use_case.validate_batch("batch.pdf", batch).await.unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 1);

        let rejection = &report.rejections[0];
        assert_eq!(rejection.index, 1);
        assert_eq!(rejection.article_id.as_deref(), Some("Second"));
        assert_eq!(rejection.rejection.kind, RejectionKind::InvalidDoiFormat);
        assert_eq!(rejection.rejection.field.as_deref(), Some("doi"));

        assert_eq!(accepted.lock().await.len(), 2);
        assert_eq!(rejected.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch_is_accepted() {
        let (use_case, _) = use_case(ArticleValidator::default());
        let report = use_case
            .validate_batch("empty.pdf", ResearchData::default())
            .await
            .unwrap();
        assert_eq!(
            report,
            BatchReport {
                source: "empty.pdf".to_string(),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_strict_validator_is_honoured() {
        let (use_case, (_, rejected)) = use_case(ArticleValidator::strict());

        let fields = ArticleFields {
            assay_type: AnnotatedField::of("eco_0001091".to_string()),
            ..Default::default()
        };
        let outcome = use_case.validate_article("strict.pdf", 0, fields).await.unwrap();

        assert!(!outcome.is_accepted());
        assert_eq!(
            rejected.lock().await[0].rejection.kind,
            RejectionKind::InvalidOntologyId
        );
    }
}
