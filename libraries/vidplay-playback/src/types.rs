//! Result types returned by the controller

use std::sync::Arc;
use vidplay_core::Video;

/// A video together with its flag reason, for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoListing {
    /// The video
    pub video: Arc<Video>,

    /// Flag reason if the video is flagged
    pub flag_reason: Option<String>,
}

/// A playlist's display name and contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    /// Name as given at creation
    pub name: String,

    /// Videos in insertion order
    pub videos: Vec<VideoListing>,
}

/// Outcome of a successful play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// Video that was implicitly stopped first, if any
    pub stopped: Option<Arc<Video>>,

    /// Video now playing
    pub playing: Arc<Video>,
}

/// Outcome of a successful flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagReport {
    /// The flagged video
    pub video: Arc<Video>,

    /// Stored reason (placeholder if none was given)
    pub reason: String,

    /// Set when the video was current and got stopped
    pub stopped: Option<Arc<Video>>,
}
