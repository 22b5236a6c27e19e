//! Text normalization.
//!
//! One function, [`normalize`], is used everywhere a string is compared
//! against another in this crate: stored line text, query text, and
//! query parts all go through it before any substring test. See
//! [`normalize`] for the exact transform.

mod normalize;

pub use normalize::{normalize, NormalizedText};
