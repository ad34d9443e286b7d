// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[library]` - Capture directory and sort order
//! - `[preview]` - Preview layout, fit mode and transition durations
//! - `[export]` - Where saved captures go
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `CAPTURE_VIEWER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use capture_viewer::app::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if warning.is_some() {
//!     eprintln!("using defaults, language {:?}", config.general.language);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// Strategy used to shrink a capture into the preview budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Clamp width first, then clamp the resulting height.
    #[default]
    TwoPass,
    /// Scale uniformly by the smallest of the two ratios.
    MinRatio,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Capture library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibraryConfig {
    /// Directory scanned for captures when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Order of captures in the gallery and during preview navigation.
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// Preview dialog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Vertical space reserved for the dialog header.
    #[serde(default = "default_header_height")]
    pub header_height: u32,

    /// Horizontal space reserved around the image.
    #[serde(default = "default_preview_margin")]
    pub preview_margin: u32,

    #[serde(default)]
    pub fit_mode: FitMode,

    /// Gallery fade duration in milliseconds.
    #[serde(default = "default_gallery_transition_ms")]
    pub gallery_transition_ms: u64,

    /// Dialog fade duration in milliseconds.
    #[serde(default = "default_dialog_transition_ms")]
    pub dialog_transition_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            preview_margin: DEFAULT_PREVIEW_MARGIN,
            fit_mode: FitMode::default(),
            gallery_transition_ms: DEFAULT_GALLERY_TRANSITION_MS,
            dialog_transition_ms: DEFAULT_DIALOG_TRANSITION_MS,
        }
    }
}

/// Export (save capture) settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Destination directory; defaults to the user's download directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Ask for a destination with a native save dialog on every export.
    #[serde(default)]
    pub ask_destination: bool,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Clamps numeric values into their supported ranges so a hand-edited
    /// file cannot request nonsensical layouts or endless transitions.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        let preview = &mut self.preview;
        preview.header_height = preview.header_height.min(MAX_RESERVED_SPACE);
        preview.preview_margin = preview.preview_margin.min(MAX_RESERVED_SPACE);
        preview.gallery_transition_ms = preview.gallery_transition_ms.min(MAX_TRANSITION_MS);
        preview.dialog_transition_ms = preview.dialog_transition_ms.min(MAX_TRANSITION_MS);
        self
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_header_height() -> u32 {
    DEFAULT_HEADER_HEIGHT
}

fn default_preview_margin() -> u32 {
    DEFAULT_PREVIEW_MARGIN
}

fn default_gallery_transition_ms() -> u64 {
    DEFAULT_GALLERY_TRANSITION_MS
}

fn default_dialog_transition_ms() -> u64 {
    DEFAULT_DIALOG_TRANSITION_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

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
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path. Values are clamped on load.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config.clamped())
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            library: LibraryConfig {
                directory: Some(PathBuf::from("/captures")),
                sort_order: SortOrder::ModifiedDate,
            },
            preview: PreviewConfig {
                header_height: 60,
                preview_margin: 120,
                fit_mode: FitMode::MinRatio,
                gallery_transition_ms: 300,
                dialog_transition_ms: 150,
            },
            export: ExportConfig {
                directory: Some(PathBuf::from("/exports")),
                ask_destination: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[preview\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n").expect("parse");

        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.preview, PreviewConfig::default());
        assert_eq!(config.library.sort_order, SortOrder::Alphabetical);
        assert!(!config.export.ask_destination);
    }

    #[test]
    fn kebab_case_enums_parse() {
        let content = "[library]\nsort_order = \"created-date\"\n[preview]\nfit_mode = \"min-ratio\"\n";
        let config: Config = toml::from_str(content).expect("parse");

        assert_eq!(config.library.sort_order, SortOrder::CreatedDate);
        assert_eq!(config.preview.fit_mode, FitMode::MinRatio);
    }

    #[test]
    fn out_of_range_values_are_clamped_on_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[preview]\nheader_height = 10000\npreview_margin = 5000\ngallery_transition_ms = 999999\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("load");

        assert_eq!(loaded.preview.header_height, MAX_RESERVED_SPACE);
        assert_eq!(loaded.preview.preview_margin, MAX_RESERVED_SPACE);
        assert_eq!(loaded.preview.gallery_transition_ms, MAX_TRANSITION_MS);
        assert_eq!(loaded.preview.dialog_transition_ms, DEFAULT_DIALOG_TRANSITION_MS);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.preview.header_height, 90);
        assert_eq!(config.preview.preview_margin, 200);
        assert_eq!(config.preview.fit_mode, FitMode::TwoPass);
        assert_eq!(config.preview.gallery_transition_ms, 500);
        assert_eq!(config.preview.dialog_transition_ms, 250);
        assert!(config.library.directory.is_none());
    }
}
