//! Request/response header mappings and the raw header-block parser.

use std::collections::HashMap;

/// Header mapping keyed exactly as written; no case folding is applied.
pub type Headers = HashMap<String, String>;

/// Response headers parsed from a raw header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders(Headers);

impl ResponseHeaders {
    pub fn new(headers: Headers) -> Self {
        Self(headers)
    }

    /// Parses a newline-delimited `Name: value` block.
    ///
    /// Each line splits at its first `:`, so values may themselves contain
    /// colons. Name and value are trimmed of outer whitespace (space, tab,
    /// CR, LF, form feed, vertical tab); interior whitespace is preserved.
    /// Lines without a `:` — the status line, blank separators — are
    /// dropped.
    pub fn parse(raw: &str) -> Self {
        let headers = raw
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect();
        Self(headers)
    }

    /// The underlying mapping.
    pub fn value(&self) -> &Headers {
        &self.0
    }

    /// Looks up a header by its exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl From<Headers> for ResponseHeaders {
    fn from(headers: Headers) -> Self {
        Self(headers)
    }
}
