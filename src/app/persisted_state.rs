// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across
//! sessions but is not user-configurable (unlike preferences in
//! `settings.toml`). Each of the four browser dialogs remembers its own last
//! directory, so opening a source file and picking an output folder do not
//! trample each other's starting location.
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for
//! compact binary storage and clear separation from user-editable TOML
//! preferences.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory used by the open-file dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Last directory used by the save-file dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Last directory used by the open-folder dialog.
    #[serde(default)]
    pub last_folder_directory: Option<PathBuf>,

    /// Last directory used by the output-folder dialog.
    #[serde(default)]
    pub last_output_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails,
    /// returns default state with a warning message key that can be shown
    /// via notifications.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning message key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the open-file dialog directory from a chosen file path.
    ///
    /// Extracts the parent directory from the given path. If the path has no
    /// parent (e.g., root path), the directory is not updated.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    /// Remembers the save-file dialog directory from a chosen file path.
    pub fn set_last_save_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_directories() {
        let state = AppState::default();
        assert!(state.last_open_directory.is_none());
        assert!(state.last_save_directory.is_none());
        assert!(state.last_folder_directory.is_none());
        assert!(state.last_output_directory.is_none());
    }

    #[test]
    fn set_last_open_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(std::path::Path::new(
            "/home/user/dumps/Actor.pack.zs",
        ));
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/dumps"))
        );
    }

    #[test]
    fn set_last_save_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(std::path::Path::new("/"));
        assert!(state.last_save_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_open_directory: Some(PathBuf::from("/dumps/romfs")),
            last_save_directory: Some(PathBuf::from("/work/extracted")),
            last_folder_directory: Some(PathBuf::from("/dumps")),
            last_output_directory: Some(PathBuf::from("/work")),
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");
        assert!(base_dir.join(STATE_FILE).exists(), "state file should exist");

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(
            warning,
            Some("notification-state-parse-error".to_string())
        );
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_open_directory: Some(PathBuf::from("/test")),
            ..AppState::default()
        };

        let result = state.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
