//! The single canonical text transform used everywhere a string is
//! compared against another in this crate.

use unicode_normalization::UnicodeNormalization;

/// Zero-width codepoints removed entirely rather than treated as whitespace.
const ZERO_WIDTH: [char; 2] = ['\u{200B}', '\u{FEFF}'];

/// Result of [`normalize`]: the normalized text plus a reverse mapping
/// back to source byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// NFKC-normalized, whitespace-collapsed, zero-width-stripped text.
    pub text_norm: String,
    /// `byte_map[i]` is the source byte offset of the source character
    /// that produced the `i`-th character of `text_norm`. Collapsed
    /// whitespace runs are represented by the offset of the first
    /// whitespace character in the run.
    pub byte_map: Vec<usize>,
}

/// Normalize `s` for membership comparisons.
///
/// NFKC normalization is applied per source character rather than to the
/// whole string at once, so every output character can be traced back to
/// the single source byte offset that produced it — this is what makes
/// `byte_map` possible. It means a combining-mark sequence that would
/// only compose in whole-string NFKC (base char + combining accent typed
/// as two codepoints) is normalized per-component instead; this does not
/// affect NFKC-precomposed Japanese or ASCII text, which is the crate's
/// actual domain.
///
/// # Examples
///
/// ```
/// use pdf_text_locator::text::normalize;
///
/// let a = normalize("山田\u{3000}太郎");
/// let b = normalize("山田 太郎");
/// assert_eq!(a.text_norm, b.text_norm);
/// ```
pub fn normalize(s: &str) -> NormalizedText {
    let mut expanded: Vec<(char, usize)> = Vec::with_capacity(s.len());

    for (offset, ch) in s.char_indices() {
        for mapped in ch.nfkc() {
            if ZERO_WIDTH.contains(&mapped) {
                continue;
            }
            let out = if mapped.is_whitespace() { ' ' } else { mapped };
            expanded.push((out, offset));
        }
    }

    let mut text_norm = String::with_capacity(expanded.len());
    let mut byte_map = Vec::with_capacity(expanded.len());
    let mut pending_space: Option<usize> = None;

    for (ch, offset) in expanded {
        if ch == ' ' {
            if !text_norm.is_empty() {
                pending_space.get_or_insert(offset);
            }
            continue;
        }
        if let Some(space_offset) = pending_space.take() {
            text_norm.push(' ');
            byte_map.push(space_offset);
        }
        text_norm.push(ch);
        byte_map.push(offset);
    }

    NormalizedText { text_norm, byte_map }
}
