use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::DOI_RESOLVER;

static DOI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)10\.\d{4,9}/[-._;()/:A-Z0-9]+").expect("doi pattern")
});

/// True when a DOI appears anywhere in the text.
pub fn contains_doi(text: &str) -> bool {
    DOI_PATTERN.is_match(text)
}

/// Prepends the resolver unless the value already starts with an HTTP(S) scheme.
pub fn to_resolver_url(value: String) -> String {
    if has_http_scheme(&value) {
        value
    } else {
        format!("{}{}", DOI_RESOLVER, value)
    }
}

fn has_http_scheme(value: &str) -> bool {
    value
        .get(..4)
        .map_or(false, |scheme| scheme.eq_ignore_ascii_case("http"))
}
