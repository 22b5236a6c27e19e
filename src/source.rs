//! The upstream collaborator contract.
//!
//! The locator never parses a PDF byte stream. It consumes whatever the
//! caller's PDF parser hands it: a block/line/span geometry tree per page,
//! and an operation to run a clipped text search against the live parsed
//! document. These types and the [`ClippedSearch`] trait are that
//! contract, expressed in Rust rather than assumed implicitly.

use crate::geometry::Rect;

/// One styled run of text within a line, as the upstream extractor
/// produces it, reduced to the fields the locator actually needs: text
/// and position.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSpan {
    /// The span's text, exactly as extracted (no normalization applied).
    pub text: String,
    /// The span's bounding box in PDF user space.
    pub bbox: Rect,
}

/// A single visual line: an ordered run of spans in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceLine {
    /// Spans making up this line, in reading order.
    pub spans: Vec<SourceSpan>,
}

/// A block (paragraph/column fragment) containing lines in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBlock {
    /// Lines in this block, in reading order.
    pub lines: Vec<SourceLine>,
}

/// One page's worth of block/line/span geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage {
    /// 0-based page number.
    pub page_num: usize,
    /// Page width in points, informational only (not used by the locator).
    pub page_width: f64,
    /// Page height in points, informational only (not used by the locator).
    pub page_height: f64,
    /// Blocks on this page, in reading order.
    pub blocks: Vec<SourceBlock>,
}

impl SourcePage {
    /// Create an otherwise-empty page with the given number and size.
    pub fn new(page_num: usize, page_width: f64, page_height: f64) -> Self {
        Self {
            page_num,
            page_width,
            page_height,
            blocks: Vec::new(),
        }
    }
}

/// The `search_on_page_clipped` operation, performed against the live
/// parsed document.
///
/// Implementations wrap whatever parser object the integrator already
/// has open. If that parser is not re-entrant, wrap it in
/// [`crate::concurrency::SerializedClippedSearch`] so step 3 of
/// [`crate::locate::PreciseRectResolver`] serializes automatically while
/// the rest of the pipeline stays lock-free.
pub trait ClippedSearch {
    /// The error type this search can fail with; wrapped into
    /// [`crate::error::LocatorFailure::ClippedSearchFailed`] by the
    /// locator.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for `needle` on `page_num`, restricted to `clip`.
    ///
    /// Returns one tight rectangle per occurrence found within the clip;
    /// an empty vector means the needle was not found there.
    ///
    /// Takes `&self`, not `&mut self`: the locator never needs exclusive
    /// access to the search object, only shared access to the live parsed
    /// document. A non-reentrant parser should still be wrapped in
    /// [`crate::concurrency::SerializedClippedSearch`], whose own interior
    /// `Mutex` is what serializes concurrent callers, rather than the
    /// caller threading a `&mut` through every `locate` call.
    fn search_on_page_clipped(
        &self,
        page_num: usize,
        needle: &str,
        clip: Rect,
    ) -> Result<Vec<Rect>, Self::Error>;
}
