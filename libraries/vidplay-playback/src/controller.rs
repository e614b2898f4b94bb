//! Controller - core orchestration
//!
//! Coordinates the catalog, flag registry, playlists and playback session.
//! Every operation returns a `Result`; rendering is left to the caller.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use vidplay_core::{Video, VideoCatalog, VideoId};

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    flags::FlagRegistry,
    playlist::PlaylistStore,
    random::RandomSource,
    search::{sort_by_title, SearchKind, SearchResults},
    session::{PlaybackSession, PlaybackState},
    types::{FlagReport, PlayReport, PlaylistView, VideoListing},
};

/// Central playback control
///
/// Owns the registries it is given and the single playback session:
/// - Playback (play, stop, pause, resume, random)
/// - Playlist management (case-insensitive names)
/// - Search (flagged videos excluded)
/// - Flag moderation (flagged videos cannot play)
pub struct Controller {
    catalog: Arc<dyn VideoCatalog>,
    flags: FlagRegistry,
    playlists: PlaylistStore,
    session: PlaybackSession,
    random: Box<dyn RandomSource>,
    pending_events: Vec<PlayerEvent>,
}

impl Controller {
    /// Create a controller over a catalog and pre-built registries
    ///
    /// Random selection uses the thread-local RNG; see `with_random`.
    pub fn new(catalog: Arc<dyn VideoCatalog>, flags: FlagRegistry, playlists: PlaylistStore) -> Self {
        info!(videos = catalog.len(), "Controller ready");
        Self {
            catalog,
            flags,
            playlists,
            session: PlaybackSession::new(),
            random: Box::new(rand::thread_rng()),
            pending_events: Vec::new(),
        }
    }

    /// Replace the random source used by `play_random`
    #[must_use]
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    // ===== Library =====

    /// Number of videos in the library
    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    /// Every video sorted by title, with flag reasons
    pub fn list_all(&self) -> Vec<VideoListing> {
        let mut videos = self.catalog.all_videos();
        sort_by_title(&mut videos);
        videos.into_iter().map(|video| self.listing(video)).collect()
    }

    // ===== Playback Control =====

    /// Play a video by id
    ///
    /// Whatever was current is stopped first.
    pub fn play(&mut self, id: &str) -> Result<PlayReport> {
        let video = self.resolve(id)?;
        self.ensure_not_flagged(&video)?;
        Ok(self.start(video))
    }

    /// Play a random video that is not flagged
    pub fn play_random(&mut self) -> Result<PlayReport> {
        let pool = self.catalog.videos_excluding(&self.flags.flagged_ids());
        if pool.is_empty() {
            return Err(PlayerError::NoVideosAvailable);
        }

        let index = self.random.choose_index(pool.len());
        let video = Arc::clone(&pool[index]);
        debug!(video_id = %video.id, pool = pool.len(), "Random pick");
        self.play(video.id.as_str())
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Result<Arc<Video>> {
        let video = self.session.stop()?;
        self.pending_events.push(PlayerEvent::stopped(&video));
        Ok(video)
    }

    /// Pause the current video
    pub fn pause(&mut self) -> Result<Arc<Video>> {
        let video = self.session.pause()?;
        self.pending_events.push(PlayerEvent::paused(&video));
        Ok(video)
    }

    /// Resume the paused video
    pub fn resume(&mut self) -> Result<Arc<Video>> {
        let video = self.session.resume()?;
        self.pending_events.push(PlayerEvent::resumed(&video));
        Ok(video)
    }

    /// Current playback state
    pub fn now_playing(&self) -> &PlaybackState {
        self.session.state()
    }

    // ===== Playlists =====

    /// Create a playlist, returning its display name
    pub fn create_playlist(&mut self, name: &str) -> Result<String> {
        let (playlist, created) = self.playlists.create_playlist(name);
        if created {
            Ok(playlist.name().to_string())
        } else {
            Err(PlayerError::PlaylistAlreadyExists(name.to_string()))
        }
    }

    /// Delete a playlist
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        if self.playlists.delete(name) {
            Ok(())
        } else {
            Err(PlayerError::PlaylistNotFound(name.to_string()))
        }
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))?;
        playlist.clear();
        debug!(playlist = %playlist.name(), "Playlist cleared");
        Ok(())
    }

    /// Display names of all playlists, sorted
    pub fn list_playlists(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .playlists
            .all()
            .into_iter()
            .map(|playlist| playlist.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// A playlist's contents in insertion order
    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView> {
        let playlist = self
            .playlists
            .get(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))?;

        Ok(PlaylistView {
            name: playlist.name().to_string(),
            videos: playlist
                .videos()
                .map(|video| self.listing(Arc::clone(video)))
                .collect(),
        })
    }

    /// Add a video to a playlist
    ///
    /// Flagged videos are refused.
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Result<Arc<Video>> {
        if self.playlists.get(name).is_none() {
            return Err(PlayerError::PlaylistNotFound(name.to_string()));
        }
        let video = self.resolve(id)?;
        self.ensure_not_flagged(&video)?;

        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))?;
        if !playlist.add_video(Arc::clone(&video)) {
            return Err(PlayerError::AlreadyInPlaylist);
        }

        debug!(playlist = %playlist.name(), video_id = %video.id, "Added to playlist");
        Ok(video)
    }

    /// Remove a video from a playlist
    ///
    /// Allowed for flagged videos too.
    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Result<Arc<Video>> {
        if self.playlists.get(name).is_none() {
            return Err(PlayerError::PlaylistNotFound(name.to_string()));
        }
        let video = self.resolve(id)?;

        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))?;
        if !playlist.remove_video(&video.id) {
            return Err(PlayerError::NotInPlaylist);
        }

        debug!(playlist = %playlist.name(), video_id = %video.id, "Removed from playlist");
        Ok(video)
    }

    // ===== Search =====

    /// Unflagged videos whose title contains `term` (case-insensitive)
    pub fn search(&self, term: &str) -> SearchResults {
        let matches = self
            .playable_pool()
            .into_iter()
            .filter(|video| video.title_contains(term))
            .collect();
        SearchResults::new(term, SearchKind::Title, matches)
    }

    /// Unflagged videos carrying `tag` (exact, case-insensitive)
    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        let matches = self
            .playable_pool()
            .into_iter()
            .filter(|video| video.has_tag(tag))
            .collect();
        SearchResults::new(tag, SearchKind::Tag, matches)
    }

    /// Play the `number`-th search result (1-based)
    ///
    /// Returns `Ok(None)` when `number` does not name a result.
    pub fn play_by_index(&mut self, results: &SearchResults, number: usize) -> Result<Option<PlayReport>> {
        match results.get(number) {
            Some(video) => self.play(video.id.as_str()).map(Some),
            None => {
                debug!(number, results = results.len(), "Selection ignored");
                Ok(None)
            }
        }
    }

    // ===== Moderation =====

    /// Flag a video
    ///
    /// If it is the current video it is stopped first.
    pub fn flag_video(&mut self, id: &str, reason: &str) -> Result<FlagReport> {
        let video = self.resolve(id)?;

        let stopped = if self.session.is_current(&video.id) {
            Some(self.stop()?)
        } else {
            None
        };

        let (reason, newly_flagged) = self.flags.flag(&video.id, reason);
        if !newly_flagged {
            return Err(PlayerError::AlreadyFlagged);
        }

        Ok(FlagReport {
            video,
            reason,
            stopped,
        })
    }

    /// Remove a video's flag
    pub fn allow_video(&mut self, id: &str) -> Result<Arc<Video>> {
        let video = self.resolve(id)?;
        if self.flags.allow(&video.id) {
            Ok(video)
        } else {
            Err(PlayerError::NotFlagged)
        }
    }

    /// Flag reason for a video, if flagged
    pub fn flag_reason(&self, id: &VideoId) -> Option<&str> {
        self.flags.reason_for(id)
    }

    // ===== Events =====

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if events are waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn resolve(&self, id: &str) -> Result<Arc<Video>> {
        self.catalog
            .get_video(id)
            .ok_or_else(|| PlayerError::VideoNotFound(VideoId::new(id)))
    }

    fn ensure_not_flagged(&self, video: &Video) -> Result<()> {
        match self.flags.reason_for(&video.id) {
            Some(reason) => Err(PlayerError::VideoFlagged {
                id: video.id.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn start(&mut self, video: Arc<Video>) -> PlayReport {
        let stopped = self.session.play(Arc::clone(&video));
        if let Some(prev) = &stopped {
            self.pending_events.push(PlayerEvent::stopped(prev));
        }
        self.pending_events.push(PlayerEvent::started(&video));

        PlayReport {
            stopped,
            playing: video,
        }
    }

    fn playable_pool(&self) -> Vec<Arc<Video>> {
        self.catalog.videos_excluding(&self.flags.flagged_ids())
    }

    fn listing(&self, video: Arc<Video>) -> VideoListing {
        let flag_reason = self.flags.reason_for(&video.id).map(str::to_string);
        VideoListing { video, flag_reason }
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("videos", &self.catalog.len())
            .field("flags", &self.flags)
            .field("playlists", &self.playlists)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
