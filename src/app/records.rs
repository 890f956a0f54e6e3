use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ResearchArticle;
use crate::error::Rejection;

/// A validated article ready for the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedArticleRecord {
    pub record_id: Uuid,
    /// Name of the source document the batch was extracted from
    pub source: String,
    /// Position of the article within its batch
    pub index: usize,
    pub article: ResearchArticle,
    pub rule_version: String,
    pub validated_at: DateTime<Utc>,
}

/// An article that failed validation, routed back for re-extraction or review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedArticleRecord {
    pub record_id: Uuid,
    pub source: String,
    pub index: usize,
    /// Article identifier as extracted, to help reviewers find it
    pub article_id: Option<String>,
    pub rejection: Rejection,
    pub rule_version: String,
    pub rejected_at: DateTime<Utc>,
}

/// Outcome of validating one article
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleOutcome {
    Accepted(ValidatedArticleRecord),
    Rejected(RejectedArticleRecord),
}

impl ArticleOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Summary of a validated batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub source: String,
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub rejections: Vec<RejectedArticleRecord>,
}
