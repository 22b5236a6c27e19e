//! The query type: a PII string to locate, already split into per-line
//! parts.

use crate::config::NewlineConvention;
use crate::text::normalize;

/// A PII string to locate, already split into per-line parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The original, unmodified query text.
    pub text: String,
    /// `text` split according to the configured newline convention.
    /// Always has at least one element.
    pub parts: Vec<String>,
    /// `normalize(text).text_norm`.
    pub text_norm: String,
}

impl Query {
    /// Build a query from raw text, splitting it per `convention`.
    pub fn new(text: &str, convention: NewlineConvention) -> Self {
        let parts = convention
            .split(text)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            text: text.to_string(),
            parts,
            text_norm: normalize(text).text_norm,
        }
    }

    /// Number of line parts this query spans.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// A query always has at least one part.
    pub fn is_empty(&self) -> bool {
        false
    }
}
