/// Application configuration
use crate::app::PageOptions;
use crate::error::{AppError, Result};
use fanpage_core::types::Track;
use fanpage_playback::{Catalog, PlaybackConfig};
use fanpage_storage::POSTS_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "fanpage.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    /// Replaces the built-in catalog when present
    #[serde(default)]
    pub catalog: Option<Vec<Track>>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON file backing the headless key-value store
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_preview_volume")]
    pub preview_volume: f32,

    #[serde(default = "default_preview_offset_ms")]
    pub preview_offset_ms: u64,

    #[serde(default = "default_preview_duration_ms")]
    pub preview_duration_ms: u64,

    #[serde(default = "default_external_flag_ms")]
    pub external_flag_ms: u64,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `fanpage.toml` is read if
    /// present. `FANPAGE_*` variables override both, with `__` between
    /// section and key (`FANPAGE_PLAYBACK__PREVIEW_VOLUME=0.5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        settings = settings.add_source(
            config::Environment::with_prefix("FANPAGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, without environment overrides
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let volume = self.playback.preview_volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(AppError::Config(format!(
                "preview_volume must be between 0 and 1, got {volume}"
            )));
        }

        if self.storage.key.trim().is_empty() {
            return Err(AppError::Config("storage key must not be empty".to_string()));
        }

        if let Some(tracks) = &self.catalog {
            for (i, track) in tracks.iter().enumerate() {
                if track.id.as_str().is_empty() {
                    return Err(AppError::Config(format!("catalog track {i} has no id")));
                }
                if tracks[..i].iter().any(|t| t.id == track.id) {
                    return Err(AppError::Config(format!(
                        "catalog track id {} is used twice",
                        track.id
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            preview_volume: self.playback.preview_volume,
            preview_offset: Duration::from_millis(self.playback.preview_offset_ms),
            preview_duration: Duration::from_millis(self.playback.preview_duration_ms),
            external_flag_duration: Duration::from_millis(self.playback.external_flag_ms),
        }
    }

    pub fn catalog(&self) -> Catalog {
        match &self.catalog {
            Some(tracks) => Catalog::new(tracks.clone()),
            None => Catalog::default(),
        }
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            catalog: self.catalog(),
            playback: self.playback_config(),
            storage_key: self.storage.key.clone(),
        }
    }
}

// Default values
fn default_log_level() -> String {
    "fanpage=info".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("fanpage-data.json")
}

fn default_storage_key() -> String {
    POSTS_KEY.to_string()
}

fn default_preview_volume() -> f32 {
    0.22
}

fn default_preview_offset_ms() -> u64 {
    5_000
}

fn default_preview_duration_ms() -> u64 {
    6_000
}

fn default_external_flag_ms() -> u64 {
    2_000
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            preview_volume: default_preview_volume(),
            preview_offset_ms: default_preview_offset_ms(),
            preview_duration_ms: default_preview_duration_ms(),
            external_flag_ms: default_external_flag_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            playback: PlaybackSettings::default(),
            catalog: None,
            log_level: default_log_level(),
        }
    }
}
