//! vidplay Console
//!
//! Text front end for `vidplay-playback`: configuration, catalog loading,
//! command parsing and rendering, and the read-eval-print loop.

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod render;

pub use command::{Command, CommandError};
pub use config::ConsoleConfig;
pub use console::{Console, Flow};
pub use error::{ConsoleError, Result};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;
use vidplay_core::{loader, InMemoryCatalog, VideoCatalog};
use vidplay_playback::{Controller, FlagRegistry, PlaylistStore};

/// Library shipped with the binary, used when no catalog is configured
pub const BUNDLED_CATALOG: &str = include_str!("../data/videos.txt");

/// Load the configured catalog, or the bundled one
pub fn load_catalog(config: &ConsoleConfig) -> Result<InMemoryCatalog> {
    let catalog = match &config.catalog.path {
        Some(path) => loader::load_from_path(path)?,
        None => loader::parse_text(BUNDLED_CATALOG)?,
    };

    info!(
        videos = catalog.len(),
        source = %config
            .catalog
            .path
            .as_deref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Build a controller with empty registries over the configured catalog
pub fn build_controller(config: &ConsoleConfig) -> Result<Controller> {
    let catalog = load_catalog(config)?;
    let controller = Controller::new(Arc::new(catalog), FlagRegistry::new(), PlaylistStore::new());

    Ok(match config.playback.random_seed {
        Some(seed) => controller.with_random(Box::new(StdRng::seed_from_u64(seed))),
        None => controller,
    })
}
