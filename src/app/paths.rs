// SPDX-License-Identifier: MPL-2.0
//! Application directories for settings and persisted state.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** passed to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--config-dir`, `--data-dir`) set via [`init_cli_overrides`]
//! 3. **Environment variables** (`BANNERBOARD_CONFIG_DIR`, `BANNERBOARD_DATA_DIR`)
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Bannerboard";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "BANNERBOARD_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BANNERBOARD_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("directory overrides were already initialized, ignoring");
    }
}

/// Which of the two application directories to resolve.
#[derive(Debug, Clone, Copy)]
enum DirKind {
    Config,
    Data,
}

impl DirKind {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Config => &CLI_CONFIG_DIR,
            DirKind::Data => &CLI_DATA_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            DirKind::Config => ENV_CONFIG_DIR,
            DirKind::Data => ENV_DATA_DIR,
        }
    }

    fn platform_dir(self) -> Option<PathBuf> {
        match self {
            DirKind::Config => dirs::config_dir(),
            DirKind::Data => dirs::data_dir(),
        }
    }
}

fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli_override() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory holding `state.cbor`.
///
/// Returns `None` if no platform data directory exists.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Data, override_path)
}

/// Directory holding `settings.toml`.
///
/// Returns `None` if no platform config directory exists.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Config, override_path)
}
