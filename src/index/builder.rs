//! Turns upstream [`SourcePage`]s into a flat [`LineIndex`].

use super::{LineIndex, LineRecord};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::geometry::Rect;
use crate::source::SourcePage;
use crate::text::normalize;

/// Builds a [`LineIndex`] from the upstream parser's page geometry.
pub struct LineIndexBuilder;

impl LineIndexBuilder {
    /// Traverse `pages` and produce a flat, dense-ided [`LineIndex`].
    ///
    /// Reading order within a page is preserved exactly as the pages
    /// iterate it; pages are not re-sorted or deduplicated. A line with
    /// no spans is malformed and is skipped with a diagnostic; a line
    /// whose normalized text is empty is dropped silently (normal for
    /// purely decorative whitespace lines).
    pub fn build(
        pages: impl IntoIterator<Item = SourcePage>,
        sink: &mut dyn DiagnosticSink,
    ) -> LineIndex {
        let mut records = Vec::new();

        for page in pages {
            for block in page.blocks {
                for line in block.lines {
                    if line.spans.is_empty() {
                        sink.report(Diagnostic::MalformedLine {
                            page_num: page.page_num,
                            reason: "line has no spans".to_string(),
                        });
                        continue;
                    }

                    let text: String = line.spans.iter().map(|s| s.text.as_str()).collect();
                    let rect = Rect::union_all(
                        &line.spans.iter().map(|s| s.bbox).collect::<Vec<_>>(),
                    );
                    let Some(rect) = rect else {
                        sink.report(Diagnostic::MalformedLine {
                            page_num: page.page_num,
                            reason: "line has no bounding rectangle".to_string(),
                        });
                        continue;
                    };

                    if normalize(&text).text_norm.is_empty() {
                        continue;
                    }

                    records.push(LineRecord {
                        id: records.len(),
                        page_num: page.page_num,
                        rect,
                        text,
                    });
                }
            }
        }

        if records.is_empty() {
            sink.report(Diagnostic::EmptyIndex);
        }

        LineIndex::from_records(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::source::{SourceBlock, SourceLine, SourceSpan};

    fn span(text: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> SourceSpan {
        SourceSpan {
            text: text.to_string(),
            bbox: Rect::new(x0, y0, x1, y1),
        }
    }

    #[test]
    fn concatenates_spans_without_inserting_whitespace() {
        let page = SourcePage {
            page_num: 0,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock {
                lines: vec![SourceLine {
                    spans: vec![
                        span("田中", 72.0, 700.0, 100.0, 716.0),
                        span("太郎", 100.0, 700.0, 140.0, 716.0),
                    ],
                }],
            }],
        };

        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(vec![page], &mut sink);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(0).unwrap().text, "田中太郎");
        assert!(sink.diagnostics.is_empty());
    }

    #[test]
    fn line_rect_is_union_of_span_rects() {
        let page = SourcePage {
            page_num: 0,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock {
                lines: vec![SourceLine {
                    spans: vec![
                        span("A", 10.0, 10.0, 20.0, 22.0),
                        span("B", 20.0, 8.0, 30.0, 20.0),
                    ],
                }],
            }],
        };
        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(vec![page], &mut sink);
        let rect = index.get(0).unwrap().rect;
        assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (10.0, 8.0, 30.0, 22.0));
    }

    #[test]
    fn empty_line_is_malformed_and_skipped() {
        let page = SourcePage {
            page_num: 0,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock {
                lines: vec![SourceLine { spans: vec![] }],
            }],
        };
        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(vec![page], &mut sink);
        assert!(index.is_empty());
        assert!(matches!(
            sink.diagnostics[0],
            Diagnostic::MalformedLine { .. }
        ));
        assert!(matches!(sink.diagnostics[1], Diagnostic::EmptyIndex));
    }

    #[test]
    fn whitespace_only_line_is_dropped_without_diagnostic() {
        let page = SourcePage {
            page_num: 0,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock {
                lines: vec![SourceLine {
                    spans: vec![span("   ", 0.0, 0.0, 10.0, 10.0)],
                }],
            }],
        };
        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(vec![page], &mut sink);
        assert!(index.is_empty());
        assert_eq!(sink.diagnostics.len(), 1);
        assert!(matches!(sink.diagnostics[0], Diagnostic::EmptyIndex));
    }

    #[test]
    fn ids_are_dense_across_pages() {
        let make_page = |n| SourcePage {
            page_num: n,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock {
                lines: vec![SourceLine {
                    spans: vec![span("line", 0.0, 0.0, 10.0, 10.0)],
                }],
            }],
        };
        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(vec![make_page(0), make_page(1)], &mut sink);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(0).unwrap().page_num, 0);
        assert_eq!(index.get(1).unwrap().page_num, 1);
        assert_eq!(index.get(0).unwrap().id, 0);
        assert_eq!(index.get(1).unwrap().id, 1);
    }

    #[test]
    fn preserves_reading_order_does_not_resort() {
        let page = SourcePage {
            page_num: 0,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock {
                lines: vec![
                    SourceLine {
                        spans: vec![span("second", 0.0, 100.0, 10.0, 110.0)],
                    },
                    SourceLine {
                        spans: vec![span("first", 0.0, 700.0, 10.0, 710.0)],
                    },
                ],
            }],
        };
        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(vec![page], &mut sink);
        assert_eq!(index.get(0).unwrap().text, "second");
        assert_eq!(index.get(1).unwrap().text, "first");
    }
}
