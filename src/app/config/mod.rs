// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[gallery]` - Gallery directory and prefetch cache sizing
//! - `[shop]` - Marketplace proxy endpoint, seller, listing limit
//! - `[contact]` - Form submission endpoint
//!
//! # Path Resolution
//!
//! The config file location can be customized:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI flag / `CALICO_GALLERY_CONFIG_DIR` env variable
//! 3. Falls back to the platform config directory
//!
//! Loading never fails the app: a corrupted file yields defaults plus a
//! warning, and numeric values out of range are clamped.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory scanned for gallery images. Falls back to the platform
    /// pictures directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_dir: Option<PathBuf>,

    /// Prefetch cache size in megabytes.
    #[serde(default = "default_prefetch_cache_mb")]
    pub prefetch_cache_mb: u32,

    /// Maximum number of images held in the prefetch cache.
    #[serde(default = "default_prefetch_max_images")]
    pub prefetch_max_images: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            gallery_dir: None,
            prefetch_cache_mb: DEFAULT_PREFETCH_CACHE_MB,
            prefetch_max_images: DEFAULT_PREFETCH_MAX_IMAGES,
        }
    }
}

impl GalleryConfig {
    /// Cache size in megabytes, clamped to the documented range.
    #[must_use]
    pub fn prefetch_cache_mb(&self) -> u32 {
        self.prefetch_cache_mb
            .clamp(MIN_PREFETCH_CACHE_MB, MAX_PREFETCH_CACHE_MB)
    }

    /// Cache image count, clamped to the documented range.
    #[must_use]
    pub fn prefetch_max_images(&self) -> u32 {
        self.prefetch_max_images
            .clamp(MIN_PREFETCH_MAX_IMAGES, MAX_PREFETCH_MAX_IMAGES)
    }
}

/// Shop screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Marketplace proxy base URL.
    #[serde(default = "default_proxy_base_url")]
    pub proxy_base_url: String,

    /// Marketplace seller account to list.
    #[serde(default = "default_seller")]
    pub seller: String,

    /// Listing count per fetch.
    #[serde(default = "default_shop_limit")]
    pub limit: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            proxy_base_url: default_proxy_base_url(),
            seller: default_seller(),
            limit: DEFAULT_SHOP_LIMIT,
        }
    }
}

impl ShopConfig {
    /// Listing limit, clamped to the proxy's accepted range.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.clamp(MIN_SHOP_LIMIT, MAX_SHOP_LIMIT)
    }
}

/// Contact screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Form submission endpoint.
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub shop: ShopConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_prefetch_cache_mb() -> u32 {
    DEFAULT_PREFETCH_CACHE_MB
}

fn default_prefetch_max_images() -> u32 {
    DEFAULT_PREFETCH_MAX_IMAGES
}

fn default_proxy_base_url() -> String {
    DEFAULT_PROXY_BASE_URL.to_owned()
}

fn default_seller() -> String {
    DEFAULT_SELLER.to_owned()
}

fn default_shop_limit() -> u32 {
    DEFAULT_SHOP_LIMIT
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_owned()
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
/// Returns (config, optional warning). A missing file is not a warning; a
/// corrupted one yields defaults plus a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some(
                            "The settings file could not be read; defaults are in use."
                                .to_owned(),
                        ),
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.gallery.gallery_dir.is_none());
        assert_eq!(config.gallery.prefetch_cache_mb(), DEFAULT_PREFETCH_CACHE_MB);
        assert_eq!(config.shop.seller, DEFAULT_SELLER);
        assert_eq!(config.shop.limit(), DEFAULT_SHOP_LIMIT);
        assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                gallery_dir: Some(PathBuf::from("/srv/photos")),
                prefetch_cache_mb: 64,
                prefetch_max_images: 8,
            },
            shop: ShopConfig {
                proxy_base_url: "https://proxy.example.com".to_owned(),
                seller: "other-seller".to_owned(),
                limit: 12,
            },
            contact: ContactConfig {
                endpoint: "https://forms.example.com/contact".to_owned(),
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
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_values_clamp() {
        let config = Config {
            gallery: GalleryConfig {
                prefetch_cache_mb: 9999,
                prefetch_max_images: 0,
                ..GalleryConfig::default()
            },
            shop: ShopConfig {
                limit: 500,
                ..ShopConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(config.gallery.prefetch_cache_mb(), MAX_PREFETCH_CACHE_MB);
        assert_eq!(config.gallery.prefetch_max_images(), MIN_PREFETCH_MAX_IMAGES);
        assert_eq!(config.shop.limit(), MAX_SHOP_LIMIT);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[shop]\nseller = \"someone-else\"\n",
        )
        .expect("write partial config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.shop.seller, "someone-else");
        assert_eq!(loaded.shop.limit, DEFAULT_SHOP_LIMIT);
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[general]"), "should have [general] section");
        assert!(content.contains("[gallery]"), "should have [gallery] section");
        assert!(content.contains("[shop]"), "should have [shop] section");
        assert!(content.contains("[contact]"), "should have [contact] section");
    }

    #[test]
    fn theme_mode_round_trips_lowercase() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("theme_mode = \"dark\""));

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
