use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Kind of comparison a field matcher applies to a request field.
///
/// Only `Exact` pins a field to a single literal value; every other kind
/// describes a family of values and is opaque to the match cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    Exact,
    Glob,
    Regex,
    JsonPath,
    XPath,
    Array,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatcher {
    pub kind: MatcherKind,
    pub value: String,
}

impl FieldMatcher {
    pub fn new(kind: MatcherKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn exact(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::Exact, value)
    }
}

/// Canonical request fields the proxy extracts before matching.
///
/// Normalization happens upstream in the request pipeline; values are
/// compared verbatim here. `Default` is the all-empty fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFingerprint {
    pub method: String,
    pub scheme: String,
    pub destination: String,
    pub path: String,
    pub query: String,
    pub body: String,
}

/// Matcher set describing which requests a recorded response applies to.
///
/// Each field holds an ordered list of matchers that must all hold; an empty
/// list accepts any value for that field. Header constraints are independent
/// of the fingerprint fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTemplate {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<FieldMatcher>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheme: Vec<FieldMatcher>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination: Vec<FieldMatcher>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<FieldMatcher>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<FieldMatcher>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<FieldMatcher>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, Vec<FieldMatcher>>,
}

/// Recorded response, passed through the cache unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub status: u16,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub template: RequestTemplate,
    pub response: ResponseRecord,
}

/// Ordered collection of matched pairs. Template order is significant: the
/// external matching engine applies first-match-wins over this order.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    pairs: Vec<MatchedPair>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pair(&mut self, pair: MatchedPair) {
        self.pairs.push(pair);
    }

    pub fn pairs(&self) -> &[MatchedPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
