// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::decompress::FolderSummary;
use crate::error::Error;
use crate::ui::decompressor;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Decompressor(decompressor::Message),
    Settings(settings::Message),
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
    /// Result from the compressed-file picker.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the save-destination picker for a single file.
    SaveFileDialogResult(Option<PathBuf>),
    /// Result from the input-folder picker.
    OpenFolderDialogResult(Option<PathBuf>),
    /// Result from the output-folder picker for a folder job.
    OutputFolderDialogResult(Option<PathBuf>),
    /// Result from the dictionary-directory picker in settings.
    DictionaryDirDialogResult(Option<PathBuf>),
    /// A background folder decompression finished.
    FolderDecompressed(Result<FolderSummary, Error>),
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional file or folder path to preload on startup.
    pub path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ZS_TOOL_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ZS_TOOL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
