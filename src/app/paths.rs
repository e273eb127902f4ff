// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--gallery-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CALICO_GALLERY_DIR`, `CALICO_GALLERY_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.gallery_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "CalicoGallery";

/// Environment variable to override the gallery directory.
pub const ENV_GALLERY_DIR: &str = "CALICO_GALLERY_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CALICO_GALLERY_CONFIG_DIR";

/// Global CLI override for the gallery directory (set once at startup).
static CLI_GALLERY_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the gallery and config directories.
///
/// This should be called once at application startup, before any path
/// resolution functions are called. The CLI overrides take highest priority.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(gallery_dir: Option<String>, config_dir: Option<String>) {
    CLI_GALLERY_DIR
        .set(gallery_dir.map(PathBuf::from))
        .expect("CLI gallery dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Returns the CLI override for the gallery directory, if set.
fn get_cli_gallery_dir() -> Option<PathBuf> {
    CLI_GALLERY_DIR.get().and_then(Clone::clone)
}

/// Returns the CLI override for the config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory stores user preferences (settings.toml).
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `CALICO_GALLERY_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/CalicoGallery/`
///    - macOS: `~/Library/Application Support/CalicoGallery/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\CalicoGallery\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The `override_path` parameter takes highest priority; it exists for tests
/// that must not touch the real config directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory scanned for gallery images.
///
/// # Resolution Order
///
/// 1. CLI argument `--gallery-dir` (if set via [`init_cli_overrides`])
/// 2. `CALICO_GALLERY_DIR` environment variable (if set and non-empty)
/// 3. `gallery_dir` from the loaded configuration (if set)
/// 4. The platform pictures directory
///
/// Returns `None` if no candidate can be determined.
pub fn get_gallery_dir(configured: Option<&PathBuf>) -> Option<PathBuf> {
    // Priority 1: CLI argument
    if let Some(path) = get_cli_gallery_dir() {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_GALLERY_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Configured directory
    if let Some(path) = configured {
        return Some(path.clone());
    }

    // Priority 4: Platform pictures directory
    dirs::picture_dir()
}
