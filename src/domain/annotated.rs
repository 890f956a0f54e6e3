use serde::{Deserialize, Serialize};

/// One extracted datum together with the evidence trail behind it.
///
/// A `None` value means the extractor did not find the datum. The container
/// holds no validation logic of its own; rules in `crate::validation` decide
/// what a well-formed value looks like for each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedField<T> {
    /// Candidate value, absent when not found
    pub value: Option<T>,
    /// Why the value was chosen and where it came from
    #[serde(default)]
    pub explanation: Option<String>,
    /// Source pages the value was read from
    #[serde(default)]
    pub pages: Option<Vec<u32>>,
}

impl<T> AnnotatedField<T> {
    pub fn new(value: Option<T>, explanation: Option<String>, pages: Option<Vec<u32>>) -> Self {
        Self {
            value,
            explanation,
            pages,
        }
    }

    /// A field carrying a value and no provenance
    pub fn of(value: T) -> Self {
        Self::new(Some(value), None, None)
    }

    /// A field the extractor reported as not found
    pub fn missing() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_pages(mut self, pages: Vec<u32>) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    /// Replaces the value, keeping provenance intact
    pub fn map_value<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            value: self.value.map(f),
            explanation: self.explanation,
            pages: self.pages,
        }
    }
}

impl<T: Copy> AnnotatedField<T> {
    pub fn copied(&self) -> Option<T> {
        self.value
    }
}

impl<T> Default for AnnotatedField<T> {
    fn default() -> Self {
        Self::missing()
    }
}
