//! Recoverable-condition reporting.
//!
//! Every condition in this module is non-fatal: the call that produced it
//! still returns a value (possibly empty). A [`Diagnostic`] is reported to
//! a [`DiagnosticSink`] so callers can observe *why* a result looks the
//! way it does without the call ever returning an `Err`.

use crate::geometry::Rect;

/// A recoverable condition encountered during `build` or `locate`.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A line from the upstream parser lacked text or a rectangle and was
    /// skipped while building the [`crate::index::LineIndex`].
    MalformedLine {
        /// Page the line was on.
        page_num: usize,
        /// Why the line was skipped.
        reason: String,
    },
    /// The document yielded no usable lines at all; every `locate` call
    /// on this index will return an empty sequence.
    EmptyIndex,
    /// More than one candidate run satisfied sequence validation; the
    /// earlier run (by ascending start line id) was selected.
    AmbiguousRun {
        /// Page the runs were found on.
        page_num: usize,
        /// Line id the selected (earlier) run starts at.
        selected_start: usize,
        /// Line id of the first rejected run.
        rejected_start: usize,
    },
    /// No run of candidate lines validated against the query.
    NoMatch {
        /// The query text that failed to locate.
        query: String,
    },
    /// Sequence validation said a line should contain the query part, but
    /// the clipped per-line search found nothing there.
    UnclippedMiss {
        /// Page the line is on.
        page_num: usize,
        /// Id of the line that produced no rectangle.
        line_id: usize,
        /// The clip rectangle that was searched.
        clip: Rect,
    },
}

/// Receives [`Diagnostic`]s as they occur.
///
/// The default used by [`crate::locator::Locator`] when none is supplied
/// logs each diagnostic via the `log` crate at a severity matching its
/// taxonomy (warnings for things that drop data, debug for expected
/// no-match outcomes) and discards it otherwise.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Logs every diagnostic via the `log` facade and keeps nothing.
///
/// This is what a locator uses when the caller doesn't supply a sink —
/// logging recoverable parse conditions inline rather than threading a
/// callback through every layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl DiagnosticSink for LoggingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MalformedLine { page_num, reason } => {
                log::warn!("malformed line on page {page_num}: {reason}");
            }
            Diagnostic::EmptyIndex => {
                log::warn!("line index is empty; every locate() call will return no rectangles");
            }
            Diagnostic::AmbiguousRun {
                page_num,
                selected_start,
                rejected_start,
            } => {
                log::warn!(
                    "ambiguous run on page {page_num}: selected run starting at line {selected_start}, \
                     ignored run starting at line {rejected_start}"
                );
            }
            Diagnostic::NoMatch { query } => {
                log::debug!("no validated run for query {query:?}");
            }
            Diagnostic::UnclippedMiss {
                page_num,
                line_id,
                clip,
            } => {
                log::warn!(
                    "clipped search found nothing for line {line_id} on page {page_num} within {clip:?}"
                );
            }
        }
    }
}

/// Collects every diagnostic in order, for tests and for integrators
/// (GUI, batch pipelines) that want structured access instead of logs.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    /// Diagnostics reported so far, in report order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
