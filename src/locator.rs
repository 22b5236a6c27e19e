//! The crate's facade: `build` a [`LineIndex`] once, then `locate` as many
//! query strings against it as needed.

use crate::config::LocatorConfig;
use crate::diagnostics::{DiagnosticSink, LoggingSink};
use crate::error::Result;
use crate::index::{LineIndex, LineIndexBuilder};
use crate::locate::{CandidateSearcher, LocatedRect, PreciseRectResolver, Query, SequenceValidator};
use crate::source::{ClippedSearch, SourcePage};
use crate::text::normalize;

/// Owns a document's [`LineIndex`] and answers `locate` queries against it.
///
/// `LineIndex` is immutable after [`Locator::build`], so a `Locator` may be
/// shared (e.g. behind an `Arc`) across threads issuing concurrent
/// `locate` calls with no external synchronization — `ClippedSearch`
/// implementations take `&self`, so the caller's search object can be
/// shared the same way; a non-reentrant one should be wrapped in
/// [`crate::concurrency::SerializedClippedSearch`] first.
pub struct Locator {
    index: LineIndex,
    normalized_lines: Vec<String>,
    config: LocatorConfig,
    /// Number of pages the document is known to have, per the `pages`
    /// iterable `build` was given (or, for [`Locator::from_index`], one
    /// past the highest `page_num` the index actually references). A line
    /// whose `page_num` falls outside this range at `locate` time means
    /// the upstream parser reported a page id outside the document, which
    /// is fatal per the locator's error taxonomy.
    page_count: usize,
}

impl Locator {
    /// Build the line index once per document open.
    ///
    /// Computing each line's normalized text here, rather than on every
    /// `locate` call, is what keeps per-query cost proportional to the
    /// query rather than to the whole document.
    pub fn build(
        pages: impl IntoIterator<Item = SourcePage>,
        config: LocatorConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let pages: Vec<SourcePage> = pages.into_iter().collect();
        let page_count = pages.len();
        let index = LineIndexBuilder::build(pages, sink);
        let normalized_lines = index
            .records()
            .iter()
            .map(|r| normalize(&r.text).text_norm)
            .collect();
        Self {
            index,
            normalized_lines,
            config,
            page_count,
        }
    }

    /// Build from an index constructed elsewhere (e.g. deserialized from
    /// the round-trip wire form) — used by tests and by callers who cache
    /// the index across process restarts.
    ///
    /// Without the original `pages` iterable there is no authoritative
    /// page count, so one is inferred as one past the highest `page_num`
    /// any record in `index` references.
    pub fn from_index(index: LineIndex, config: LocatorConfig) -> Self {
        let normalized_lines = index
            .records()
            .iter()
            .map(|r| normalize(&r.text).text_norm)
            .collect();
        let page_count = index
            .records()
            .iter()
            .map(|r| r.page_num)
            .max()
            .map_or(0, |m| m + 1);
        Self {
            index,
            normalized_lines,
            config,
            page_count,
        }
    }

    /// The underlying line index, for inspection or re-serialization.
    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    /// Locate one query instance.
    ///
    /// `search` performs the clipped per-line search against the live
    /// parsed document; wrap it in
    /// [`crate::concurrency::SerializedClippedSearch`] first if it is not
    /// safe to call from multiple threads concurrently.
    pub fn locate<S: ClippedSearch>(
        &self,
        query_text: &str,
        search: &S,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Vec<LocatedRect>> {
        let query = Query::new(query_text, self.config.newline_convention);

        if self.index.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = CandidateSearcher::find(&self.index, &self.normalized_lines, &query);
        let run = SequenceValidator::validate(
            &self.index,
            &self.normalized_lines,
            &candidates,
            &query,
            sink,
        );

        let Some(run) = run else {
            return Ok(Vec::new());
        };

        PreciseRectResolver::resolve(&self.index, &query, &run, self.page_count, search, sink)
    }

    /// Locate with the default [`LoggingSink`] instead of a caller-supplied
    /// one, for the common case where diagnostics should just go to the
    /// log.
    pub fn locate_logged<S: ClippedSearch>(
        &self,
        query_text: &str,
        search: &S,
    ) -> Result<Vec<LocatedRect>> {
        let mut sink = LoggingSink;
        self.locate(query_text, search, &mut sink)
    }
}
