/// Video domain type
use serde::{Deserialize, Serialize};
use std::fmt;

use super::VideoId;

/// A video record from the catalog
///
/// Videos are immutable once loaded. They are shared as `Arc<Video>` so
/// playlists and the playback session only ever hold references into the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,

    /// Display title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new<T, S>(id: impl Into<VideoId>, title: impl Into<String>, tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_uppercase().contains(&term.to_uppercase())
    }

    /// Exact, case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
