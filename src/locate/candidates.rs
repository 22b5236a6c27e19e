//! Candidate line search: the first pass over the index before sequence
//! validation narrows it down to one run.

use super::query::Query;
use crate::index::LineIndex;
use crate::text::normalize;

/// Finds, for each part of a [`Query`], the set of line ids whose
/// normalized text contains that part.
pub struct CandidateSearcher;

impl CandidateSearcher {
    /// Returns one candidate set per query part, in part order.
    ///
    /// `normalized_lines` must be `normalize(line.text).text_norm` for
    /// every line in `index`, indexed by line id — callers normally get
    /// this from [`crate::locator::Locator`], which computes it once at
    /// build time rather than on every call.
    ///
    /// An empty part (the query started or ended with a newline) matches
    /// every line id trivially; [`super::validator::SequenceValidator`]
    /// relies on its neighbors to constrain the run.
    pub fn find(index: &LineIndex, normalized_lines: &[String], query: &Query) -> Vec<Vec<usize>> {
        query
            .parts
            .iter()
            .map(|part| {
                let part_norm = normalize(part).text_norm;
                if part_norm.is_empty() {
                    (0..index.len()).collect()
                } else {
                    (0..index.len())
                        .filter(|&id| normalized_lines[id].contains(&part_norm))
                        .collect()
                }
            })
            .collect()
    }
}
