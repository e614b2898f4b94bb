//! User playlists
//!
//! Playlists are keyed by a canonical (trimmed, upper-cased) form of their
//! name, so "Movies", "movies" and "MOVIES" all resolve to the same
//! playlist. The name given at creation is kept for display.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use vidplay_core::{Video, VideoId};

/// Canonical lookup key for a playlist name
pub fn canonical_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// A named, duplicate-free list of videos in insertion order
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    videos: IndexMap<VideoId, Arc<Video>>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: IndexMap::new(),
        }
    }

    /// Display name, as given at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Videos in insertion order
    pub fn videos(&self) -> impl Iterator<Item = &Arc<Video>> {
        self.videos.values()
    }

    /// Number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the playlist has no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Check if a video is in the playlist
    pub fn contains(&self, id: &VideoId) -> bool {
        self.videos.contains_key(id)
    }

    /// Append a video
    ///
    /// Returns `false` without changing anything if the id is already present.
    pub fn add_video(&mut self, video: Arc<Video>) -> bool {
        if self.videos.contains_key(&video.id) {
            return false;
        }
        self.videos.insert(video.id.clone(), video);
        true
    }

    /// Remove a video, keeping the order of the rest
    pub fn remove_video(&mut self, id: &VideoId) -> bool {
        self.videos.shift_remove(id).is_some()
    }

    /// Remove every video; the playlist itself stays
    pub fn clear(&mut self) {
        self.videos.clear();
    }
}

/// All playlists, keyed case-insensitively
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a playlist
    ///
    /// Returns the playlist and whether it was newly created. If a playlist
    /// with the same canonical name exists it is returned untouched, keeping
    /// its original display name.
    pub fn create_playlist(&mut self, name: &str) -> (&mut Playlist, bool) {
        let key = canonical_key(name);
        let created = !self.playlists.contains_key(&key);
        if created {
            debug!(playlist = %name.trim(), "Playlist created");
        }

        let playlist = self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.trim()));
        (playlist, created)
    }

    /// Look up a playlist by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&canonical_key(name))
    }

    /// Look up a playlist for mutation (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&canonical_key(name))
    }

    /// All playlists, in no particular order
    pub fn all(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }

    /// Delete a playlist, returning whether it existed
    pub fn delete(&mut self, name: &str) -> bool {
        let deleted = self.playlists.remove(&canonical_key(name)).is_some();
        if deleted {
            debug!(playlist = %name, "Playlist deleted");
        }
        deleted
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Arc<Video> {
        Arc::new(Video::new(id, title, ["#test"]))
    }

    #[test]
    fn canonical_key_folds_case_and_whitespace() {
        assert_eq!(canonical_key("Movies"), "MOVIES");
        assert_eq!(canonical_key("  movies "), "MOVIES");
    }

    #[test]
    fn create_is_case_insensitive() {
        let mut store = PlaylistStore::new();

        let (playlist, created) = store.create_playlist("Movies");
        assert!(created);
        assert_eq!(playlist.name(), "Movies");

        let (existing, created) = store.create_playlist("MOVIES");
        assert!(!created);
        assert_eq!(existing.name(), "Movies");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_keeps_display_name() {
        let mut store = PlaylistStore::new();
        store.create_playlist("Movies");

        assert_eq!(store.get("movies").unwrap().name(), "Movies");
        assert_eq!(store.get("MOVIES").unwrap().name(), "Movies");
        assert!(store.get("Music").is_none());
    }

    #[test]
    fn add_rejects_duplicates_and_keeps_order() {
        let mut playlist = Playlist::new("mix");
        assert!(playlist.add_video(video("b", "B")));
        assert!(playlist.add_video(video("a", "A")));
        assert!(!playlist.add_video(video("b", "B again")));

        let ids: Vec<&str> = playlist.videos().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut playlist = Playlist::new("mix");
        for (id, title) in [("a", "A"), ("b", "B"), ("c", "C")] {
            playlist.add_video(video(id, title));
        }

        assert!(playlist.remove_video(&VideoId::new("b")));
        assert!(!playlist.remove_video(&VideoId::new("b")));

        let ids: Vec<&str> = playlist.videos().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn clear_keeps_playlist() {
        let mut store = PlaylistStore::new();
        let (playlist, _) = store.create_playlist("Mix");
        playlist.add_video(video("a", "A"));

        store.get_mut("mix").unwrap().clear();

        let playlist = store.get("MIX").unwrap();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name(), "Mix");
    }

    #[test]
    fn delete_is_case_insensitive() {
        let mut store = PlaylistStore::new();
        store.create_playlist("Mix");

        assert!(store.delete("mIx"));
        assert!(!store.delete("Mix"));
        assert!(store.is_empty());
    }
}
