//! Boundaries to the collaborators around the validation core.
//!
//! Accepted articles go to a document store, rejections to whatever queue or
//! log feeds re-extraction and manual review. The core itself never performs
//! I/O; only use cases talk to these ports.

use async_trait::async_trait;

use crate::app::records::{RejectedArticleRecord, ValidatedArticleRecord};

#[async_trait]
pub trait ArticleOutputPort: Send + Sync {
    async fn write_validated_article(&self, record: &ValidatedArticleRecord) -> anyhow::Result<()>;
}

#[async_trait]
pub trait RejectionOutputPort: Send + Sync {
    async fn write_rejected_article(&self, record: &RejectedArticleRecord) -> anyhow::Result<()>;
}
