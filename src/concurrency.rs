//! Serialization wrapper for non-reentrant [`ClippedSearch`] implementors.
//!
//! Most PDF parser objects are not safe to call concurrently even if the
//! type is `Send` — the underlying library typically holds file handles or
//! internal caches that assume single-threaded access. [`LineIndex`] itself
//! is immutable and freely shared, so the only thing that needs
//! synchronizing across concurrent `locate` calls on the same document is
//! the search object. Because [`ClippedSearch::search_on_page_clipped`]
//! takes `&self`, a shared `&SerializedClippedSearch<T>` can be handed to
//! every thread; only the moment a thread actually calls through to the
//! wrapped parser takes the interior lock, so candidate search and
//! sequence validation — which never touch the search object — run fully
//! in parallel across callers.

use crate::geometry::Rect;
use crate::source::ClippedSearch;
use std::sync::Mutex;

/// Wraps a `ClippedSearch` implementor behind a [`Mutex`], serializing
/// access so multiple threads can call [`crate::locator::Locator::locate`]
/// concurrently against the same underlying parser.
pub struct SerializedClippedSearch<T> {
    inner: Mutex<T>,
}

impl<T> SerializedClippedSearch<T> {
    /// Wrap `inner` for shared, serialized access.
    pub fn new(inner: T) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Recover the wrapped value, discarding the lock.
    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: ClippedSearch> ClippedSearch for SerializedClippedSearch<T> {
    type Error = T::Error;

    fn search_on_page_clipped(
        &self,
        page_num: usize,
        needle: &str,
        clip: Rect,
    ) -> Result<Vec<Rect>, Self::Error> {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.search_on_page_clipped(page_num, needle, clip)
    }
}
