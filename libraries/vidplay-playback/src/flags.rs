//! Flag registry
//!
//! Moderation overlay mapping video ids to a flag reason. A flagged video
//! cannot be played, shows up in no search, and cannot be added to a
//! playlist.

use std::collections::{HashMap, HashSet};
use tracing::debug;
use vidplay_core::VideoId;

/// Reason stored when the user gives none
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Flagged videos and their reasons
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    reasons: HashMap<VideoId, String>,
}

impl FlagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a video
    ///
    /// Returns the effective reason and whether the video was newly flagged.
    /// An existing flag is never overwritten: the stored reason comes back
    /// with `false`.
    pub fn flag(&mut self, id: &VideoId, reason: &str) -> (String, bool) {
        if let Some(existing) = self.reasons.get(id) {
            return (existing.clone(), false);
        }

        let reason = normalize_reason(reason);
        debug!(video_id = %id, reason = %reason, "Video flagged");
        self.reasons.insert(id.clone(), reason.clone());
        (reason, true)
    }

    /// Remove a flag, returning whether one was present
    pub fn allow(&mut self, id: &VideoId) -> bool {
        let removed = self.reasons.remove(id).is_some();
        if removed {
            debug!(video_id = %id, "Flag removed");
        }
        removed
    }

    /// Check if a video is flagged
    pub fn is_flagged(&self, id: &VideoId) -> bool {
        self.reasons.contains_key(id)
    }

    /// Flag reason for a video, if flagged
    pub fn reason_for(&self, id: &VideoId) -> Option<&str> {
        self.reasons.get(id).map(String::as_str)
    }

    /// Ids of all flagged videos
    pub fn flagged_ids(&self) -> HashSet<VideoId> {
        self.reasons.keys().cloned().collect()
    }

    /// Number of flagged videos
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Check if nothing is flagged
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

fn normalize_reason(reason: &str) -> String {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        DEFAULT_FLAG_REASON.to_string()
    } else {
        trimmed.to_string()
    }
}
