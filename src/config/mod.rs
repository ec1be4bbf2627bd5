// SPDX-License-Identifier: MPL-2.0
//! This module loads the user's preferences from a `settings.toml` file.
//! The application only reads it; the file is edited by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[grid]` - Thumbnail grid layout and sort order
//!
//! Lightbox timings and input thresholds are not configurable; see [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//!
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("{} columns", config.grid.effective_columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Thumbnail grid settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Thumbnails per row.
    #[serde(default = "default_columns")]
    pub columns: Option<u16>,

    /// Thumbnail edge length in logical pixels.
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: Option<f32>,

    /// Order of images in the grid (and therefore in the lightbox).
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            thumbnail_size: default_thumbnail_size(),
            sort_order: Some(SortOrder::default()),
        }
    }
}

impl GridConfig {
    /// Column count clamped to the supported range.
    pub fn effective_columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Thumbnail size clamped to the supported range.
    pub fn effective_thumbnail_size(&self) -> f32 {
        let size = self.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE);
        if size.is_finite() {
            size.clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
        } else {
            DEFAULT_THUMBNAIL_SIZE
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_thumbnail_size() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

// =============================================================================
// Load
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\n\n[grid]\ncolumns = 6\nthumbnail_size = 128.0\nsort_order = \"modified-date\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            grid: GridConfig {
                columns: Some(6),
                thumbnail_size: Some(128.0),
                sort_order: Some(SortOrder::ModifiedDate),
            },
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.grid, GridConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[grid\ncolumns = ").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_reads_settings_from_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[grid]\ncolumns = 3\n").expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.grid.columns, Some(3));
    }

    #[test]
    fn unknown_sort_order_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[grid]\nsort_order = \"ModifiedDate\"\n").expect("write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn effective_values_are_clamped() {
        let grid = GridConfig {
            columns: Some(0),
            thumbnail_size: Some(10_000.0),
            sort_order: None,
        };
        assert_eq!(grid.effective_columns(), MIN_GRID_COLUMNS);
        assert_eq!(grid.effective_thumbnail_size(), MAX_THUMBNAIL_SIZE);

        let grid = GridConfig {
            columns: None,
            thumbnail_size: Some(f32::NAN),
            sort_order: None,
        };
        assert_eq!(grid.effective_columns(), DEFAULT_GRID_COLUMNS);
        assert_eq!(grid.effective_thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
    }
}
