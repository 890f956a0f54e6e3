pub mod ports;
pub mod records;
pub mod validate_use_case;

pub use records::{ArticleOutcome, BatchReport, RejectedArticleRecord, ValidatedArticleRecord};
pub use validate_use_case::ValidateArticlesUseCase;
