//! Playback Events
//!
//! The controller records every playback transition so a UI can replay
//! them in order. An implicit stop (playing a new video over an old one,
//! flagging the current video) shows up as its own `Stopped` event before
//! whatever caused it.

use serde::{Deserialize, Serialize};
use vidplay_core::{Video, VideoId};

/// Events emitted by the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A video started playing
    Started {
        /// ID of the video
        video_id: VideoId,
        /// Title of the video
        title: String,
    },

    /// The current video was stopped
    Stopped {
        /// ID of the video
        video_id: VideoId,
        /// Title of the video
        title: String,
    },

    /// The current video was paused
    Paused {
        /// ID of the video
        video_id: VideoId,
        /// Title of the video
        title: String,
    },

    /// The current video was resumed
    Resumed {
        /// ID of the video
        video_id: VideoId,
        /// Title of the video
        title: String,
    },
}

impl PlayerEvent {
    pub(crate) fn started(video: &Video) -> Self {
        Self::Started {
            video_id: video.id.clone(),
            title: video.title.clone(),
        }
    }

    pub(crate) fn stopped(video: &Video) -> Self {
        Self::Stopped {
            video_id: video.id.clone(),
            title: video.title.clone(),
        }
    }

    pub(crate) fn paused(video: &Video) -> Self {
        Self::Paused {
            video_id: video.id.clone(),
            title: video.title.clone(),
        }
    }

    pub(crate) fn resumed(video: &Video) -> Self {
        Self::Resumed {
            video_id: video.id.clone(),
            title: video.title.clone(),
        }
    }

    /// ID of the video this event is about
    pub fn video_id(&self) -> &VideoId {
        match self {
            Self::Started { video_id, .. }
            | Self::Stopped { video_id, .. }
            | Self::Paused { video_id, .. }
            | Self::Resumed { video_id, .. } => video_id,
        }
    }

    /// Title of the video this event is about
    pub fn title(&self) -> &str {
        match self {
            Self::Started { title, .. }
            | Self::Stopped { title, .. }
            | Self::Paused { title, .. }
            | Self::Resumed { title, .. } => title,
        }
    }
}
