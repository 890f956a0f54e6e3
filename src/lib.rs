//! Validation and normalization of metadata extracted from functional-variant
//! study articles.
//!
//! Two independent pipelines:
//! - **Article validation**: raw annotated fields → per-field rules →
//!   cross-field checks → an immutable `ResearchArticle`, or a rejection.
//! - **Variant pair normalization**: filter gene/variant pairs by nomenclature
//!   prefix and drop duplicates, never rejecting.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Domain data shapes shared across layers
pub mod domain;

// The pure validation core
pub mod normalize;
pub mod validation;

// Application and infrastructure boundaries
pub mod app;
pub mod infra;
pub mod observability;

pub use domain::{
    AnnotatedField, ArticleFields, FunctionalVariants, GeneVariantPair, ResearchArticle,
    ResearchData, VariantLevel,
};
pub use error::{ConsistencyRule, Rejection, RejectionKind, ValidationError};
pub use validation::{ArticleValidator, OntologyPolicy};
