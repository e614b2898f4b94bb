//! vidplay Core
//!
//! Platform-agnostic video types, the catalog abstraction and catalog file
//! loading shared by the playback library and the console application.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video`, `VideoId`
//! - **Catalog**: the read-only `VideoCatalog` trait and `InMemoryCatalog`
//! - **Loading**: text (`Title | id | #tag , #tag`) and JSON catalog files
//! - **Error Handling**: `CatalogError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use vidplay_core::{loader, VideoCatalog};
//!
//! let catalog = loader::parse_text("Funny Dogs | funny_dogs_video_id | #dog , #animal").unwrap();
//! let video = catalog.get_video("funny_dogs_video_id").unwrap();
//!
//! assert_eq!(video.title, "Funny Dogs");
//! assert_eq!(video.to_string(), "Funny Dogs (funny_dogs_video_id) [#dog #animal]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod types;

pub use catalog::{InMemoryCatalog, VideoCatalog};
pub use error::{CatalogError, Result};
pub use types::{Video, VideoId};
