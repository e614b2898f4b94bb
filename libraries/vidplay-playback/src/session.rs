//! Playback session state machine
//!
//! ```text
//!            play                pause
//!   Idle ──────────▶ Playing ──────────▶ Paused
//!    ▲                 │  ▲    resume      │
//!    │      stop       │  └────────────────┘
//!    └─────────────────┴───────────────────┘
//! ```
//!
//! `play` is accepted from every state and implicitly stops whatever was
//! current.

use std::sync::Arc;
use tracing::debug;
use vidplay_core::{Video, VideoId};

use crate::error::{PlayerError, Result};

/// Playback state
///
/// The paused flag only exists alongside a current video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No video loaded
    #[default]
    Idle,

    /// Currently playing
    Playing(Arc<Video>),

    /// Paused mid-video
    Paused(Arc<Video>),
}

impl PlaybackState {
    /// The current video, paused or not
    pub fn current(&self) -> Option<&Arc<Video>> {
        match self {
            Self::Idle => None,
            Self::Playing(video) | Self::Paused(video) => Some(video),
        }
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }
}

/// The single live playback slot
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    state: PlaybackState,
}

impl PlaybackSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Current video, if any
    pub fn current(&self) -> Option<&Arc<Video>> {
        self.state.current()
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Check if the given video is the current one (playing or paused)
    pub fn is_current(&self, id: &VideoId) -> bool {
        self.current().is_some_and(|video| &video.id == id)
    }

    /// Start playing a video
    ///
    /// Returns the video that was current before, which is now stopped.
    pub fn play(&mut self, video: Arc<Video>) -> Option<Arc<Video>> {
        debug!(video_id = %video.id, "Session playing");
        let previous = std::mem::replace(&mut self.state, PlaybackState::Playing(video));
        match previous {
            PlaybackState::Idle => None,
            PlaybackState::Playing(prev) | PlaybackState::Paused(prev) => Some(prev),
        }
    }

    /// Stop playback, returning the stopped video
    pub fn stop(&mut self) -> Result<Arc<Video>> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(PlayerError::NotCurrentlyPlaying),
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => {
                debug!(video_id = %video.id, "Session stopped");
                Ok(video)
            }
        }
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<Arc<Video>> {
        match &self.state {
            PlaybackState::Idle => Err(PlayerError::NotCurrentlyPlaying),
            PlaybackState::Paused(video) => Err(PlayerError::AlreadyPaused(Arc::clone(video))),
            PlaybackState::Playing(video) => {
                let video = Arc::clone(video);
                debug!(video_id = %video.id, "Session paused");
                self.state = PlaybackState::Paused(Arc::clone(&video));
                Ok(video)
            }
        }
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Result<Arc<Video>> {
        match &self.state {
            PlaybackState::Idle => Err(PlayerError::NotCurrentlyPlaying),
            PlaybackState::Playing(_) => Err(PlayerError::NotPaused),
            PlaybackState::Paused(video) => {
                let video = Arc::clone(video);
                debug!(video_id = %video.id, "Session resumed");
                self.state = PlaybackState::Playing(Arc::clone(&video));
                Ok(video)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Arc<Video> {
        Arc::new(Video::new(id, format!("Video {id}"), ["#test"]))
    }

    #[test]
    fn starts_idle() {
        let session = PlaybackSession::new();
        assert_eq!(session.state(), &PlaybackState::Idle);
        assert!(session.current().is_none());
        assert!(!session.is_paused());
    }

    #[test]
    fn full_cycle_ends_idle() {
        let mut session = PlaybackSession::new();
        let a = video("a");

        assert!(session.play(Arc::clone(&a)).is_none());
        assert_eq!(session.pause().unwrap(), a);
        assert!(session.is_paused());
        assert_eq!(session.resume().unwrap(), a);
        assert_eq!(session.state(), &PlaybackState::Playing(Arc::clone(&a)));
        assert_eq!(session.stop().unwrap(), a);
        assert_eq!(session.state(), &PlaybackState::Idle);
    }

    #[test]
    fn play_replaces_current() {
        let mut session = PlaybackSession::new();
        session.play(video("b"));
        session.pause().unwrap();

        let stopped = session.play(video("a"));
        assert_eq!(stopped.unwrap().id.as_str(), "b");
        assert!(session.is_current(&VideoId::new("a")));
        assert!(!session.is_paused());
    }

    #[test]
    fn double_pause_is_reported_and_harmless() {
        let mut session = PlaybackSession::new();
        session.play(video("a"));
        session.pause().unwrap();

        let err = session.pause().unwrap_err();
        assert!(matches!(err, PlayerError::AlreadyPaused(v) if v.id.as_str() == "a"));
        assert!(session.is_paused());
    }

    #[test]
    fn idle_transitions_fail() {
        let mut session = PlaybackSession::new();
        assert_eq!(session.stop().unwrap_err(), PlayerError::NotCurrentlyPlaying);
        assert_eq!(session.pause().unwrap_err(), PlayerError::NotCurrentlyPlaying);
        assert_eq!(session.resume().unwrap_err(), PlayerError::NotCurrentlyPlaying);
    }

    #[test]
    fn resume_while_playing_fails() {
        let mut session = PlaybackSession::new();
        session.play(video("a"));
        assert_eq!(session.resume().unwrap_err(), PlayerError::NotPaused);
        assert!(!session.is_paused());
    }

    #[test]
    fn stop_clears_pause() {
        let mut session = PlaybackSession::new();
        session.play(video("a"));
        session.pause().unwrap();
        session.stop().unwrap();

        assert!(!session.is_paused());
        assert!(session.current().is_none());
    }
}
