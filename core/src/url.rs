//! Composable URL values.
//!
//! # Design
//! `Url` assembles protocol, host, path segments, and query parameters into
//! `"{protocol}://{host}{path}{query}"`. The `with_*` builders consume and
//! return the value, so deriving one URL from another never mutates a shared
//! original. Rendering trims outer whitespace and is memoized per value;
//! every builder resets the memo.
//!
//! Constructing from a raw string stores it as the rendered form and parses
//! only the protocol prefix. The host, path, and query components are not
//! decomposed and read back empty.

use std::fmt;
use std::sync::OnceLock;

use crate::types::{Host, PathSegment, Protocol, QueryKey, QueryValue};

/// Ordered path segments, rendered as `/a/b/c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegments(Vec<PathSegment>);

impl PathSegments {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// `/a/b/c` in insertion order; empty when there are no segments.
    pub fn value(&self) -> String {
        self.0
            .iter()
            .map(|segment| format!("/{segment}"))
            .collect()
    }
}

impl From<Vec<PathSegment>> for PathSegments {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<PathSegment> for PathSegments {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered query key/value pairs, rendered as `?k1=v1&k2=v2`.
///
/// Pairs keep their insertion order and duplicates all render, so the query
/// string reads back exactly as it was composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters(Vec<(QueryKey, QueryValue)>);

impl QueryParameters {
    pub fn new(pairs: Vec<(QueryKey, QueryValue)>) -> Self {
        Self(pairs)
    }

    pub fn pairs(&self) -> &[(QueryKey, QueryValue)] {
        &self.0
    }

    /// `?k1=v1&k2=v2` in insertion order; empty when there are no pairs.
    pub fn value(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let joined = self
            .0
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

impl From<Vec<(QueryKey, QueryValue)>> for QueryParameters {
    fn from(pairs: Vec<(QueryKey, QueryValue)>) -> Self {
        Self(pairs)
    }
}

impl FromIterator<(QueryKey, QueryValue)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (QueryKey, QueryValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A structured URL with memoized rendering.
#[derive(Debug, Clone, Default)]
pub struct Url {
    protocol: Protocol,
    host: Host,
    path_segments: PathSegments,
    query_parameters: QueryParameters,
    rendered: OnceLock<String>,
}

impl Url {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self.rendered = OnceLock::new();
        self
    }

    pub fn with_host(mut self, host: Host) -> Self {
        self.host = host;
        self.rendered = OnceLock::new();
        self
    }

    pub fn with_path_segments(mut self, path_segments: PathSegments) -> Self {
        self.path_segments = path_segments;
        self.rendered = OnceLock::new();
        self
    }

    pub fn with_query_parameters(mut self, query_parameters: QueryParameters) -> Self {
        self.query_parameters = query_parameters;
        self.rendered = OnceLock::new();
        self
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn path_segments(&self) -> &PathSegments {
        &self.path_segments
    }

    pub fn query_parameters(&self) -> &QueryParameters {
        &self.query_parameters
    }

    /// The rendered `"{protocol}://{host}{path}{query}"` with outer
    /// whitespace removed. Computed on first use and cached.
    pub fn value(&self) -> &str {
        self.rendered.get_or_init(|| {
            format!(
                "{}://{}{}{}",
                self.protocol,
                self.host,
                self.path_segments.value(),
                self.query_parameters.value()
            )
            .trim()
            .to_string()
        })
    }
}

impl From<&str> for Url {
    fn from(raw: &str) -> Self {
        Url::from(raw.to_string())
    }
}

impl From<String> for Url {
    fn from(raw: String) -> Self {
        let raw = raw.trim().to_string();
        // Only the protocol prefix is recovered from a raw string; the rest
        // stays inside the stored rendering undecomposed.
        let protocol = match raw.split_once(':') {
            Some((prefix, _)) => Protocol::from(prefix),
            None => Protocol::from("unknown"),
        };
        Self {
            protocol,
            host: Host::default(),
            path_segments: PathSegments::default(),
            query_parameters: QueryParameters::default(),
            rendered: OnceLock::from(raw),
        }
    }
}

/// Equality compares rendered values, so a raw URL and a composed URL that
/// print the same are the same.
impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Url {}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
