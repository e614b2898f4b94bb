/// Console configuration
use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "vidplay.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub prompt: PromptSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Text or JSON catalog; the bundled library is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Seed for PLAY_RANDOM; unseeded when unset
    #[serde(default)]
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptSettings {
    #[serde(default = "default_search_selection")]
    pub search_selection: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given. Otherwise `vidplay.toml` in the working
    /// directory is used if present. Environment variables prefixed with
    /// `VIDPLAY_` override both, with `__` between nesting levels
    /// (`VIDPLAY_PLAYBACK__RANDOM_SEED=7`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("VIDPLAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ConsoleError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// Parse configuration from TOML text (no environment overrides)
    pub fn from_toml(contents: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog.path {
            if !path.exists() {
                return Err(ConsoleError::Config(format!(
                    "Catalog file not found at {}",
                    path.display()
                )));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConsoleError::Config(
                "Logging filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_search_selection() -> bool {
    true
}

fn default_filter() -> String {
    "vidplay=info".to_string()
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            search_selection: default_search_selection(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
