use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_variants, normalize_variants_with_summary, VariantSummary};

/// A single gene / variant nomenclature assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneVariantPair {
    pub gene: String,
    pub variant: String,
}

impl GeneVariantPair {
    pub fn new(gene: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            variant: variant.into(),
        }
    }

    /// Sequence level the variant is described at, read from its nomenclature prefix
    pub fn level(&self) -> Option<VariantLevel> {
        VariantLevel::from_variant(&self.variant)
    }
}

/// Sequence level of a variant description (HGVS-style prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantLevel {
    /// `p.`: protein
    Protein,
    /// `r.`: RNA
    Rna,
    /// `c.`: coding DNA
    CodingDna,
}

impl VariantLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Protein => "p.",
            Self::Rna => "r.",
            Self::CodingDna => "c.",
        }
    }

    /// Classifies a variant by its leading prefix, ignoring case and surrounding whitespace.
    pub fn from_variant(variant: &str) -> Option<Self> {
        let lowered = variant.trim().to_lowercase();
        [Self::Protein, Self::Rna, Self::CodingDna]
            .into_iter()
            .find(|level| lowered.starts_with(level.prefix()))
    }
}

/// Gene / variant pairs after filtering and de-duplication.
///
/// Every retained variant starts with an allowed nomenclature prefix and no
/// two pairs share a `(lowercased gene, variant)` key. Deserializing runs the
/// normalizer, so raw extraction output can be read straight into this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVariantList")]
pub struct FunctionalVariants {
    data: Vec<GeneVariantPair>,
}

#[derive(Deserialize)]
struct RawVariantList {
    #[serde(default)]
    data: Vec<GeneVariantPair>,
}

impl From<RawVariantList> for FunctionalVariants {
    fn from(raw: RawVariantList) -> Self {
        Self::normalize(raw.data)
    }
}

impl FunctionalVariants {
    pub fn normalize(pairs: Vec<GeneVariantPair>) -> Self {
        Self {
            data: normalize_variants(pairs),
        }
    }

    pub fn normalize_with_summary(pairs: Vec<GeneVariantPair>) -> (Self, VariantSummary) {
        let (data, summary) = normalize_variants_with_summary(pairs);
        (Self { data }, summary)
    }

    pub fn pairs(&self) -> &[GeneVariantPair] {
        &self.data
    }

    pub fn into_pairs(self) -> Vec<GeneVariantPair> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
