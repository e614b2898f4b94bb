//! Error types for playback control
//!
//! Every controller operation fails with one of these variants. The display
//! strings are the reason texts shown to the user; the console prefixes them
//! with the operation ("Cannot play video: ...").

use std::sync::Arc;
use thiserror::Error;
use vidplay_core::{Video, VideoId};

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Video id is not in the catalog
    #[error("Video does not exist")]
    VideoNotFound(VideoId),

    /// Video is flagged and may not be played, searched or added
    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: VideoId, reason: String },

    /// No playlist with that name (case-insensitive)
    #[error("Playlist does not exist")]
    PlaylistNotFound(String),

    /// A playlist with the same canonical name exists
    #[error("A playlist with the same name already exists")]
    PlaylistAlreadyExists(String),

    /// Video is already in the playlist
    #[error("Video already added")]
    AlreadyInPlaylist,

    /// Video is not in the playlist
    #[error("Video is not in playlist")]
    NotInPlaylist,

    /// Video already carries a flag
    #[error("Video is already flagged")]
    AlreadyFlagged,

    /// Video carries no flag
    #[error("Video is not flagged")]
    NotFlagged,

    /// Every catalog video is flagged (or the catalog is empty)
    #[error("No videos available")]
    NoVideosAvailable,

    /// Session is idle
    #[error("No video is currently playing")]
    NotCurrentlyPlaying,

    /// Session is already paused on this video
    #[error("Video already paused: {}", .0.title)]
    AlreadyPaused(Arc<Video>),

    /// Session is playing, not paused
    #[error("Video is not paused")]
    NotPaused,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
