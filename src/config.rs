//! Configuration for the text locator.

/// How a query string is split into per-line parts.
///
/// Only one knob is part of the core contract: everything else (which
/// detector produced the query, how the PDF was opened, how results are
/// drawn) belongs to surrounding collaborators, not this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineConvention {
    /// Split on `\n` only. Default — matches the majority of upstream
    /// detectors observed in practice.
    #[default]
    Lf,
    /// Split on `\r\n` only.
    CrLf,
    /// Split on either `\r\n` or `\n`.
    Either,
}

impl NewlineConvention {
    /// Split `text` into parts according to this convention.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            NewlineConvention::Lf => text.split('\n').collect(),
            NewlineConvention::CrLf => text.split("\r\n").collect(),
            NewlineConvention::Either => text.split(['\n']).map(Self::strip_trailing_cr).collect(),
        }
    }

    fn strip_trailing_cr(part: &str) -> &str {
        part.strip_suffix('\r').unwrap_or(part)
    }
}

/// Locator-wide configuration.
#[derive(Debug, Clone, Default)]
pub struct LocatorConfig {
    /// How query text is split into line parts.
    pub newline_convention: NewlineConvention,
}

impl LocatorConfig {
    /// Create a new configuration with defaults (`newline_convention: Lf`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the newline convention.
    pub fn with_newline_convention(mut self, convention: NewlineConvention) -> Self {
        self.newline_convention = convention;
        self
    }
}
