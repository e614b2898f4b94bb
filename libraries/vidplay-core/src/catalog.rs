//! Read-only video catalog
//!
//! The catalog is the source of truth for video records. The playback core
//! only ever reads from it.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CatalogError, Result};
use crate::types::{Video, VideoId};

/// Video catalog trait
///
/// Implementers supply immutable video records. Order of `all_videos` is not
/// significant; callers sort for display.
pub trait VideoCatalog: Send + Sync {
    /// Look up a video by id (exact match)
    fn get_video(&self, id: &str) -> Option<Arc<Video>>;

    /// All videos in the catalog
    fn all_videos(&self) -> Vec<Arc<Video>>;

    /// All videos whose id is not in `excluded`
    fn videos_excluding(&self, excluded: &HashSet<VideoId>) -> Vec<Arc<Video>> {
        self.all_videos()
            .into_iter()
            .filter(|video| !excluded.contains(&video.id))
            .collect()
    }

    /// Number of videos in the catalog
    fn len(&self) -> usize {
        self.all_videos().len()
    }

    /// Check if the catalog has no videos
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Catalog held entirely in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    videos: IndexMap<VideoId, Arc<Video>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from videos, rejecting duplicate ids
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Result<Self> {
        let mut catalog = Self::new();
        for video in videos {
            catalog.insert(video)?;
        }
        Ok(catalog)
    }

    /// Add a video
    ///
    /// Fails with `DuplicateVideo` if the id is already present.
    pub fn insert(&mut self, video: Video) -> Result<()> {
        if self.videos.contains_key(&video.id) {
            return Err(CatalogError::DuplicateVideo(video.id));
        }
        self.videos.insert(video.id.clone(), Arc::new(video));
        Ok(())
    }
}

impl VideoCatalog for InMemoryCatalog {
    fn get_video(&self, id: &str) -> Option<Arc<Video>> {
        self.videos.get(id).cloned()
    }

    fn all_videos(&self) -> Vec<Arc<Video>> {
        self.videos.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}
