//! Catalog file loading
//!
//! Two formats are accepted:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! and, for files ending in `.json`, an array of `{ "id", "title", "tags" }`
//! objects.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::catalog::{InMemoryCatalog, VideoCatalog};
use crate::error::{CatalogError, Result};
use crate::types::Video;

const FIELD_SEPARATOR: char = '|';
const TAG_SEPARATOR: char = ',';

/// Load a catalog from disk, picking the format from the file extension
pub fn load_from_path(path: &Path) -> Result<InMemoryCatalog> {
    let contents = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let catalog = if is_json {
        parse_json(&contents)?
    } else {
        parse_text(&contents)?
    };

    debug!(path = %path.display(), videos = catalog.len(), "Catalog file loaded");
    Ok(catalog)
}

/// Parse the pipe-separated text format
pub fn parse_text(contents: &str) -> Result<InMemoryCatalog> {
    let mut catalog = InMemoryCatalog::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let video = parse_line(line, line_no)?;
        catalog.insert(video)?;
    }

    Ok(catalog)
}

/// Parse the JSON array format
pub fn parse_json(contents: &str) -> Result<InMemoryCatalog> {
    let videos: Vec<Video> = serde_json::from_str(contents)?;
    InMemoryCatalog::from_videos(videos)
}

fn parse_line(line: &str, line_no: usize) -> Result<Video> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);

    let title = fields.next().unwrap_or_default();
    let Some(id) = fields.next() else {
        return Err(CatalogError::parse(line_no, "expected `title | id | tags`"));
    };

    if title.is_empty() {
        return Err(CatalogError::parse(line_no, "empty title"));
    }
    if id.is_empty() {
        return Err(CatalogError::parse(line_no, "empty video id"));
    }

    let tags: Vec<&str> = fields
        .next()
        .map(|tags| {
            tags.split(TAG_SEPARATOR)
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(id, title, tags))
}
