//! Precise rectangle resolution: turning a validated run of line ids into
//! tight on-page rectangles via the caller's clipped text search.

use super::query::Query;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{LocatorFailure, Result};
use crate::geometry::Rect;
use crate::index::LineIndex;
use crate::source::ClippedSearch;
use serde::{Deserialize, Serialize};

/// The coordinate space every [`LocatedRect`] is expressed in.
///
/// Always `pdf-user-space` — the locator never performs a viewport
/// conversion; that stays the caller's responsibility. The single variant
/// exists so the serialized wire form always carries the tag rather than
/// leaving it implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordSpace {
    /// Bottom-left origin, units of points.
    PdfUserSpace,
}

/// One rectangle tightly covering part of a located query, in PDF user
/// space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocatedRect {
    /// 0-based page number.
    pub page_num: usize,
    /// 1-based position of this rectangle's line within the validated run.
    pub line_number: usize,
    /// Always [`CoordSpace::PdfUserSpace`].
    pub coord_space: CoordSpace,
    /// The tight rectangle.
    pub rect: Rect,
    /// Id of the source line in the [`LineIndex`] this rectangle came from.
    #[serde(skip)]
    pub line_id: usize,
}

/// Resolves a validated run of line ids into tight on-page rectangles.
pub struct PreciseRectResolver;

impl PreciseRectResolver {
    /// Resolve `run` into tight rectangles, one clipped search per line.
    ///
    /// `run[j]` is the line id matched to `query.parts[j]`. Empty parts
    /// (from a leading/trailing newline in the query) contribute no
    /// rectangle. A nonempty part that the clipped search can't find
    /// within its line's rectangle contributes no rectangle either, but
    /// does not fail the call — an [`crate::diagnostics::Diagnostic::UnclippedMiss`]
    /// is reported instead.
    ///
    /// `page_count` is the document's known page count (see
    /// [`crate::locator::Locator`]); a line whose `page_num` falls outside
    /// `0..page_count` means the upstream parser reported a page id
    /// outside the document, which is fatal and returned as
    /// [`LocatorFailure::PageOutOfRange`] rather than skipped.
    pub fn resolve<S: ClippedSearch>(
        index: &LineIndex,
        query: &Query,
        run: &[usize],
        page_count: usize,
        search: &S,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Vec<LocatedRect>> {
        let mut out = Vec::new();

        for (j, &line_id) in run.iter().enumerate() {
            let part = &query.parts[j];
            if part.is_empty() {
                continue;
            }

            let line = index.get(line_id).ok_or_else(|| LocatorFailure::InvalidRect {
                page_num: 0,
                reason: format!("run referenced unknown line id {line_id}"),
            })?;

            if line.page_num >= page_count {
                return Err(LocatorFailure::PageOutOfRange {
                    page_num: line.page_num,
                    page_count,
                });
            }

            if line.rect.is_nan() {
                return Err(LocatorFailure::InvalidRect {
                    page_num: line.page_num,
                    reason: "line rectangle contains NaN".to_string(),
                });
            }

            let rects = search
                .search_on_page_clipped(line.page_num, part, line.rect)
                .map_err(|e| LocatorFailure::ClippedSearchFailed {
                    page_num: line.page_num,
                    source: Box::new(e),
                })?;

            if rects.is_empty() {
                sink.report(Diagnostic::UnclippedMiss {
                    page_num: line.page_num,
                    line_id,
                    clip: line.rect,
                });
                continue;
            }

            for rect in rects {
                out.push(LocatedRect {
                    page_num: line.page_num,
                    line_number: j + 1,
                    coord_space: CoordSpace::PdfUserSpace,
                    rect,
                    line_id,
                });
            }
        }

        Ok(out)
    }
}
