// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::manual_find)]
#![allow(clippy::match_like_matches_macro)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]
#![cfg_attr(test, allow(unused_variables))]

//! # PDF Text Locator
//!
//! Given a PII string (possibly spanning several lines) and a page's
//! already-extracted line geometry, computes the exact on-page rectangles
//! that render it, in PDF user space.
//!
//! ## Scope
//!
//! This crate does not parse PDF byte streams, run OCR, detect PII, or
//! draw annotations. It sits between an upstream PDF text extractor (which
//! hands it a [`source::SourcePage`] tree plus a [`source::ClippedSearch`]
//! implementation) and a downstream annotation drawer, doing exactly one
//! job: turning a matched string into tight, page-tagged rectangles.
//!
//! ## Pipeline
//!
//! 1. [`text::normalize`] — fold whitespace width and Unicode
//!    compatibility variants so queries match across representations
//!    that render identically.
//! 2. [`index::LineIndexBuilder`] — build a dense [`index::LineIndex`]
//!    from the caller's page geometry once per document.
//! 3. [`locate::CandidateSearcher`] then [`locate::SequenceValidator`] —
//!    find and validate the one consecutive run of lines whose
//!    concatenation contains the query.
//! 4. [`locate::PreciseRectResolver`] — resolve that run into tight
//!    rectangles via the caller's [`source::ClippedSearch`].
//!
//! [`locator::Locator`] wires all four stages behind one `build`/`locate`
//! API.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_text_locator::config::LocatorConfig;
//! use pdf_text_locator::diagnostics::LoggingSink;
//! use pdf_text_locator::locator::Locator;
//!
//! # fn run(pages: Vec<pdf_text_locator::source::SourcePage>,
//! #        search: impl pdf_text_locator::source::ClippedSearch)
//! #   -> pdf_text_locator::error::Result<()> {
//! let mut sink = LoggingSink;
//! let locator = Locator::build(pages, LocatorConfig::new(), &mut sink);
//! let rects = locator.locate("田中太郎様 03-1234-5678", &search, &mut sink)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Diagnostics (non-fatal reporting)
pub mod diagnostics;

// Configuration
pub mod config;

// Geometry primitives (PDF user space)
pub mod geometry;

// Text normalization
pub mod text;

// Upstream collaborator contract
pub mod source;

// Dense per-line index
pub mod index;

// Per-query locate pipeline
pub mod locate;

// Top-level facade
pub mod locator;

// Serialization wrapper for non-reentrant search implementations
pub mod concurrency;

// Re-exports
pub use error::{LocatorFailure, Result};
pub use locator::Locator;

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    /// True if any of a rectangle's four coordinates is NaN.
    ///
    /// Kept separate from [`crate::geometry::Rect::is_nan`] so non-`Rect`
    /// float tuples can reuse the same check if needed.
    #[inline]
    pub fn any_nan(coords: [f64; 4]) -> bool {
        coords.iter().any(|c| c.is_nan())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn detects_nan_in_any_position() {
            assert!(any_nan([f64::NAN, 0.0, 0.0, 0.0]));
            assert!(any_nan([0.0, 0.0, 0.0, f64::NAN]));
            assert!(!any_nan([0.0, 1.0, 2.0, 3.0]));
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
