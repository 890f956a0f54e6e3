use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier already in canonical `PREFIX:DIGITS` form somewhere in the text
static CANONICAL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2,10}:\d{7,}\b").expect("canonical ontology id pattern"));

/// Looser spelling: any-case prefix, optional `:`/`_`/`-`, then seven or more
/// digits that may be split by single underscores. The prefix must not be
/// glued to a longer word.
static LOOSE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[^a-z])([a-z]{2,10})[:_-]?(\d(?:_?\d){6,})")
        .expect("loose ontology id pattern")
});

/// How the assay-type field treats its ontology identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OntologyPolicy {
    /// Rewrite any recognisable identifier to `PREFIX:DIGITS`; leave the rest untouched
    #[default]
    Normalizing,
    /// Reject values that do not already contain a canonical identifier
    Strict,
}

impl OntologyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normalizing => "normalizing",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for OntologyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OntologyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalizing" | "lenient" => Ok(Self::Normalizing),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown ontology policy '{}'", other)),
        }
    }
}

/// True when the text carries a `PREFIX:DIGITS` identifier verbatim.
pub fn contains_canonical_id(text: &str) -> bool {
    CANONICAL_ID.is_match(text)
}

/// Finds the first loosely spelled identifier and returns it in canonical form.
///
/// `"obi0000854"` becomes `"OBI:0000854"`, `"ECO_0001091"` becomes `"ECO:0001091"`.
pub fn canonicalize(text: &str) -> Option<String> {
    let caps = LOOSE_ID.captures(text)?;
    let prefix = caps.get(1)?.as_str().to_ascii_uppercase();
    let digits: String = caps.get(2)?.as_str().chars().filter(|c| *c != '_').collect();
    Some(format!("{}:{}", prefix, digits))
}
