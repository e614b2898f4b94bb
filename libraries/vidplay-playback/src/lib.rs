//! vidplay - Playback Management
//!
//! Single-user playback state for a fixed video library.
//!
//! This crate provides:
//! - Playback session (Idle / Playing / Paused state machine)
//! - Playlists with case-insensitive names and duplicate-free contents
//! - Flag moderation gating playback, search and playlist insertion
//! - Title and tag search with 1-based selection
//! - Random play over unflagged videos (injectable randomness)
//!
//! # Architecture
//!
//! `vidplay-playback` does no I/O:
//! - The video catalog is supplied through `vidplay_core::VideoCatalog`
//! - Registries are built by the caller and handed to the `Controller`
//! - Operations return `Result`s; printing is the caller's business
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use std::sync::Arc;
//! use vidplay_core::{InMemoryCatalog, Video};
//! use vidplay_playback::{Controller, FlagRegistry, PlaylistStore};
//!
//! let catalog = InMemoryCatalog::from_videos([
//!     Video::new("cats", "Amazing Cats", ["#cat", "#animal"]),
//!     Video::new("dogs", "Funny Dogs", ["#dog", "#animal"]),
//! ])
//! .unwrap();
//!
//! let mut player = Controller::new(Arc::new(catalog), FlagRegistry::new(), PlaylistStore::new());
//!
//! player.play("cats").unwrap();
//! player.pause().unwrap();
//! assert!(player.now_playing().is_paused());
//!
//! // Playing another video stops the current one first
//! let report = player.play("dogs").unwrap();
//! assert_eq!(report.stopped.unwrap().title, "Amazing Cats");
//! ```
//!
//! # Example: Search and Select
//!
//! ```rust
//! use std::sync::Arc;
//! use vidplay_core::{InMemoryCatalog, Video};
//! use vidplay_playback::{Controller, FlagRegistry, PlaylistStore};
//!
//! let catalog = InMemoryCatalog::from_videos([
//!     Video::new("cats", "Amazing Cats", ["#cat"]),
//!     Video::new("more_cats", "Another Cat Video", ["#cat"]),
//! ])
//! .unwrap();
//! let mut player = Controller::new(Arc::new(catalog), FlagRegistry::new(), PlaylistStore::new());
//!
//! let results = player.search_by_tag("#cat");
//! // The number comes from wherever the caller likes; 0 means "no"
//! assert!(player.play_by_index(&results, 0).unwrap().is_none());
//! assert!(player.play_by_index(&results, 2).unwrap().is_some());
//! ```

mod controller;
mod error;
mod events;
mod flags;
mod playlist;
mod random;
mod search;
mod session;
pub mod types;

// Public exports
pub use controller::Controller;
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use flags::{FlagRegistry, DEFAULT_FLAG_REASON};
pub use playlist::{canonical_key, Playlist, PlaylistStore};
pub use random::RandomSource;
pub use search::{SearchKind, SearchResults};
pub use session::{PlaybackSession, PlaybackState};
pub use types::{FlagReport, PlayReport, PlaylistView, VideoListing};
