//! The flat, immutable line index.

mod builder;

pub use builder::LineIndexBuilder;

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One visual line, as recorded in the index.
///
/// `id` is this record's position in the owning [`LineIndex`] — dense,
/// 0-based, and stable for the index's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    /// This record's position in the index. Equal to its array index.
    pub id: usize,
    /// 0-based page number.
    pub page_num: usize,
    /// The line's bounding rectangle: the union of its span rectangles.
    pub rect: Rect,
    /// Raw, pre-normalization concatenated span text.
    pub text: String,
}

/// A flat, read-only, ordered sequence of [`LineRecord`]s.
///
/// Built once per document by [`LineIndexBuilder::build`] and shared
/// read-only with every subsequent query. `Send + Sync` because it never
/// changes after construction, so it can be handed to concurrent query
/// callers with no synchronization.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    records: Vec<LineRecord>,
}

impl LineIndex {
    /// Wrap a flat list of records that is already dense and id-ordered —
    /// e.g. one deserialized from the wire form produced by
    /// [`LineIndex::records`].
    pub fn from_records(records: Vec<LineRecord>) -> Self {
        debug_assert!(
            records.iter().enumerate().all(|(i, r)| r.id == i),
            "LineIndex ids must be dense and match position"
        );
        Self { records }
    }

    /// Number of lines in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a line by id.
    pub fn get(&self, id: usize) -> Option<&LineRecord> {
        self.records.get(id)
    }

    /// All records, in id order.
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    /// Ids of every line on `page_num`, in reading order.
    pub fn page_line_ids(&self, page_num: usize) -> impl Iterator<Item = usize> + '_ {
        self.records
            .iter()
            .filter(move |r| r.page_num == page_num)
            .map(|r| r.id)
    }
}
