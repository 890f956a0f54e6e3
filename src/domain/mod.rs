//! Data shapes shared across layers: annotated fields, articles, and variant pairs.

pub mod annotated;
pub mod article;
pub mod gene_variant;

pub use annotated::AnnotatedField;
pub use article::{ArticleFields, ResearchArticle, ResearchData};
pub use gene_variant::{FunctionalVariants, GeneVariantPair, VariantLevel};
