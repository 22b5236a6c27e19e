//! Fatal error types for the text locator.
//!
//! Recoverable conditions (malformed lines, unclipped misses, no match,
//! ambiguous runs) are *not* errors — they go through [`crate::diagnostics`]
//! instead and never abort a call. This module covers only the conditions
//! that make a `build`/`locate` call meaningless to continue.

/// Result type alias for locator operations.
pub type Result<T> = std::result::Result<T, LocatorFailure>;

/// Fatal errors that abort a `build` or `locate` call.
#[derive(Debug, thiserror::Error)]
pub enum LocatorFailure {
    /// A span or line rectangle from the upstream parser had a NaN
    /// coordinate, violating the data model invariant.
    #[error("invalid rectangle on page {page_num}: {reason}")]
    InvalidRect {
        /// Page the invalid rectangle was reported on.
        page_num: usize,
        /// Why the rectangle was rejected.
        reason: String,
    },

    /// The upstream parser reported a page number outside the document.
    #[error("page {page_num} is out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// The offending page number.
        page_num: usize,
        /// Total number of pages in the document.
        page_count: usize,
    },

    /// The clipped search collaborator ([`crate::source::ClippedSearch`])
    /// returned an error of its own; wrapped so callers see a single
    /// failure type.
    #[error("clipped search failed on page {page_num}: {source}")]
    ClippedSearchFailed {
        /// Page the search was attempted on.
        page_num: usize,
        /// Underlying error from the caller's parser adapter.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
