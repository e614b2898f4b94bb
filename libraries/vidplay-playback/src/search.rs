//! Search results
//!
//! Results are an ordered, 1-based numbered list. Picking one to play is
//! left to the caller: it obtains a number however it likes and hands it
//! to `Controller::play_by_index`.

use std::sync::Arc;
use vidplay_core::Video;

/// What a search matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Case-insensitive substring of the title
    Title,

    /// Exact, case-insensitive tag
    Tag,
}

/// Videos matching a search, sorted by title
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: String,
    kind: SearchKind,
    videos: Vec<Arc<Video>>,
}

impl SearchResults {
    pub(crate) fn new(query: impl Into<String>, kind: SearchKind, mut videos: Vec<Arc<Video>>) -> Self {
        sort_by_title(&mut videos);
        Self {
            query: query.into(),
            kind,
            videos,
        }
    }

    /// The term or tag searched for, as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Search kind
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Number of results
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Result by 1-based position
    ///
    /// `0` and anything past the end are "no selection".
    pub fn get(&self, number: usize) -> Option<&Arc<Video>> {
        number.checked_sub(1).and_then(|index| self.videos.get(index))
    }

    /// Results paired with their 1-based number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Arc<Video>)> {
        self.videos.iter().enumerate().map(|(index, video)| (index + 1, video))
    }
}

/// Sort by title, then id so equal titles keep a stable order
pub(crate) fn sort_by_title(videos: &mut [Arc<Video>]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
