//! Sequence validation: picking one consecutive run of candidate line ids
//! whose concatenation contains the query.

use super::query::Query;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::index::LineIndex;

/// Selects at most one run of consecutive line ids whose candidate
/// membership, page, and concatenated text all validate against the
/// query.
pub struct SequenceValidator;

impl SequenceValidator {
    /// Validate candidate sets against `query`, reporting `NoMatch` or
    /// `AmbiguousRun` diagnostics as appropriate.
    ///
    /// A run is valid when every line id it proposes is a member of that
    /// part's candidate set, every line is on the same page, and the
    /// space-joined normalized text of the run contains the query's
    /// normalized text. Returns the selected run (one line id per query
    /// part, in order) or `None` if no run validates.
    pub fn validate(
        index: &LineIndex,
        normalized_lines: &[String],
        candidates: &[Vec<usize>],
        query: &Query,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Vec<usize>> {
        let k = candidates.len();
        if k == 0 {
            return None;
        }

        let mut selected: Option<Vec<usize>> = None;

        for &start in &candidates[0] {
            if start + k > index.len() {
                continue;
            }
            let run: Vec<usize> = (start..start + k).collect();

            if !Self::run_is_valid(index, normalized_lines, candidates, query, &run) {
                continue;
            }

            match &selected {
                None => selected = Some(run),
                Some(first) => {
                    sink.report(Diagnostic::AmbiguousRun {
                        page_num: index.get(first[0]).map(|r| r.page_num).unwrap_or(0),
                        selected_start: first[0],
                        rejected_start: run[0],
                    });
                    // Only the first AmbiguousRun diagnostic is reported;
                    // the selected run never changes once chosen.
                    break;
                }
            }
        }

        if selected.is_none() {
            sink.report(Diagnostic::NoMatch {
                query: query.text.clone(),
            });
        }

        selected
    }

    fn run_is_valid(
        index: &LineIndex,
        normalized_lines: &[String],
        candidates: &[Vec<usize>],
        query: &Query,
        run: &[usize],
    ) -> bool {
        for (j, &id) in run.iter().enumerate() {
            if !candidates[j].contains(&id) {
                return false;
            }
        }

        let Some(first_page) = index.get(run[0]).map(|r| r.page_num) else {
            return false;
        };
        if !run.iter().all(|&id| index.get(id).map(|r| r.page_num) == Some(first_page)) {
            return false;
        }

        let joined = run
            .iter()
            .map(|&id| normalized_lines[id].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        joined.contains(&query.text_norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewlineConvention;
    use crate::diagnostics::CollectingSink;
    use crate::index::LineIndexBuilder;
    use crate::locate::candidates::CandidateSearcher;
    use crate::source::{SourceBlock, SourceLine, SourcePage, SourceSpan};
    use crate::text::normalize;

    fn build_index(lines: &[&str]) -> LineIndex {
        let mut y = 700.0;
        let source_lines = lines
            .iter()
            .map(|text| {
                let l = SourceLine {
                    spans: vec![SourceSpan {
                        text: text.to_string(),
                        bbox: crate::geometry::Rect::new(72.0, y, 540.0, y + 16.0),
                    }],
                };
                y -= 20.0;
                l
            })
            .collect();
        let page = SourcePage {
            page_num: 0,
            page_width: 612.0,
            page_height: 792.0,
            blocks: vec![SourceBlock { lines: source_lines }],
        };
        let mut sink = CollectingSink::new();
        LineIndexBuilder::build(vec![page], &mut sink)
    }

    fn normalized_cache(index: &LineIndex) -> Vec<String> {
        index
            .records()
            .iter()
            .map(|r| normalize(&r.text).text_norm)
            .collect()
    }

    #[test]
    fn single_line_query_validates_on_containing_line() {
        let index = build_index(&["無関係", "田中太郎の連絡先は03-1234-5678です。"]);
        let cache = normalized_cache(&index);
        let query = Query::new("03-1234-5678", NewlineConvention::Lf);
        let candidates = CandidateSearcher::find(&index, &cache, &query);
        let mut sink = CollectingSink::new();
        let run = SequenceValidator::validate(&index, &cache, &candidates, &query, &mut sink);
        assert_eq!(run, Some(vec![1]));
        assert!(sink.diagnostics.is_empty());
    }

    #[test]
    fn two_line_query_validates_consecutive_run() {
        let index = build_index(&[
            "住所：東京都渋谷区恵比寿西一丁目",
            "二番三号マンション４０５号室",
        ]);
        let cache = normalized_cache(&index);
        let query = Query::new(
            "東京都渋谷区恵比寿西一丁目\n二番三号",
            NewlineConvention::Lf,
        );
        let candidates = CandidateSearcher::find(&index, &cache, &query);
        let mut sink = CollectingSink::new();
        let run = SequenceValidator::validate(&index, &cache, &candidates, &query, &mut sink);
        assert_eq!(run, Some(vec![0, 1]));
    }

    #[test]
    fn no_match_reports_diagnostic_and_returns_none() {
        let index = build_index(&["無関係"]);
        let cache = normalized_cache(&index);
        let query = Query::new("田中", NewlineConvention::Lf);
        let candidates = CandidateSearcher::find(&index, &cache, &query);
        let mut sink = CollectingSink::new();
        let run = SequenceValidator::validate(&index, &cache, &candidates, &query, &mut sink);
        assert_eq!(run, None);
        assert!(matches!(sink.diagnostics[0], Diagnostic::NoMatch { .. }));
    }

    #[test]
    fn ambiguous_run_selects_earlier_start() {
        let index = build_index(&["重複テキスト", "重複テキスト"]);
        let cache = normalized_cache(&index);
        let query = Query::new("重複テキスト", NewlineConvention::Lf);
        let candidates = CandidateSearcher::find(&index, &cache, &query);
        let mut sink = CollectingSink::new();
        let run = SequenceValidator::validate(&index, &cache, &candidates, &query, &mut sink);
        assert_eq!(run, Some(vec![0]));
        assert!(matches!(
            sink.diagnostics[0],
            Diagnostic::AmbiguousRun {
                selected_start: 0,
                rejected_start: 1,
                ..
            }
        ));
    }

    #[test]
    fn empty_leading_part_anchors_on_first_nonempty_part() {
        let index = build_index(&["無関係の行", "東京都のどこかです"]);
        let cache = normalized_cache(&index);
        let query = Query::new("\n東京都", NewlineConvention::Lf);
        let candidates = CandidateSearcher::find(&index, &cache, &query);
        let mut sink = CollectingSink::new();
        let run = SequenceValidator::validate(&index, &cache, &candidates, &query, &mut sink);
        assert_eq!(run, Some(vec![0, 1]));
    }

    #[test]
    fn run_crossing_pages_is_rejected() {
        let mut y = 700.0;
        let mut pages = Vec::new();
        for (page_num, text) in [(0usize, "東京都渋谷区"), (1usize, "恵比寿西一丁目")] {
            let line = SourceLine {
                spans: vec![SourceSpan {
                    text: text.to_string(),
                    bbox: crate::geometry::Rect::new(72.0, y, 540.0, y + 16.0),
                }],
            };
            y -= 20.0;
            pages.push(SourcePage {
                page_num,
                page_width: 612.0,
                page_height: 792.0,
                blocks: vec![SourceBlock { lines: vec![line] }],
            });
        }
        let mut sink = CollectingSink::new();
        let index = LineIndexBuilder::build(pages, &mut sink);
        let cache = normalized_cache(&index);
        let query = Query::new("東京都渋谷区\n恵比寿西一丁目", NewlineConvention::Lf);
        let candidates = CandidateSearcher::find(&index, &cache, &query);
        let mut sink = CollectingSink::new();
        let run = SequenceValidator::validate(&index, &cache, &candidates, &query, &mut sink);
        assert_eq!(run, None);
    }
}
