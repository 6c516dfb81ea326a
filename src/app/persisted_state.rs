// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR, separate from user-editable settings.
//!
//! Loading and saving never fail hard: problems come back as an i18n
//! warning key the caller can surface as a toast.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// State remembered between sessions that is not a user preference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last file picked in the banner form.
    #[serde(default)]
    pub last_upload_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default data directory.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the default data directory.
    ///
    /// A missing file yields the default state without a warning.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("cannot open {}: {err}", path.display());
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                log::warn!("cannot parse {}: {err}", path.display());
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default data directory.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state to `base_dir`, creating it when needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-write-error".to_string());
        };

        let result = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::File::create(&path))
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });

        match result {
            Ok(()) => None,
            Err(err) => {
                log::warn!("cannot write {}: {err}", path.display());
                Some("notification-state-write-error".to_string())
            }
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory containing `file_path`.
    ///
    /// Paths without a parent (such as `/`) leave the state untouched.
    pub fn set_last_upload_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_upload_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remembers_parent_of_picked_file() {
        let mut state = AppState::default();
        state.set_last_upload_directory_from_file(Path::new("/home/user/banners/promo.png"));
        assert_eq!(
            state.last_upload_directory,
            Some(PathBuf::from("/home/user/banners"))
        );
    }

    #[test]
    fn root_and_bare_names_are_ignored() {
        let mut state = AppState::default();
        state.set_last_upload_directory_from_file(Path::new("/"));
        state.set_last_upload_directory_from_file(Path::new("promo.png"));
        assert!(state.last_upload_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested").join("data");

        let original = AppState {
            last_upload_directory: Some(PathBuf::from("/media/uploads")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }
}
