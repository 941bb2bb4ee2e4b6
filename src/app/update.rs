// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Single-file decompression runs synchronously in the update loop once the
//! save dialog returns, since individual game files are small. Folder jobs go
//! through `Task::perform` so a large tree cannot freeze the UI; the
//! `FolderDecompressed` message carries the summary back.

use super::{config_from_state, persisted_state::AppState, Message, Screen};
use crate::config;
use crate::decompress::{self, DictionaryStore, FolderSummary};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::decompressor;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Mutable slices of `App` state that handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub decompressor: &'a mut decompressor::State,
    pub settings: &'a mut settings::State,
    pub theme_mode: &'a mut ThemeMode,
    pub dictionaries: &'a mut DictionaryStore,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles messages from the decompression screen.
pub fn handle_decompressor_message(
    ctx: &mut UpdateContext<'_>,
    message: decompressor::Message,
) -> Task<Message> {
    match message {
        decompressor::Message::BrowseFile => {
            open_file_dialog(ctx.app_state.last_open_directory.clone())
        }
        decompressor::Message::DecompressFile => {
            let Some(file_name) = ctx.decompressor.suggested_output_name() else {
                return Task::none();
            };
            save_file_dialog(file_name, ctx.app_state.last_save_directory.clone())
        }
        decompressor::Message::BrowseFolder => folder_dialog(
            ctx.app_state.last_folder_directory.clone(),
            Message::OpenFolderDialogResult,
        ),
        decompressor::Message::DecompressFolder => folder_dialog(
            ctx.app_state.last_output_directory.clone(),
            Message::OutputFolderDialogResult,
        ),
        decompressor::Message::RecursiveToggled(enabled) => {
            ctx.decompressor.recursive = enabled;
            Task::none()
        }
    }
}

/// Handles messages from the settings screen.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            persist_config(ctx);
            Task::none()
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.settings.theme_mode = mode;
            persist_config(ctx);
            Task::none()
        }
        settings::Message::DictionaryDirInputChanged(value) => {
            ctx.settings.set_dictionary_dir_input(value);
            Task::none()
        }
        settings::Message::DictionaryDirSubmitted => {
            apply_dictionary_dir(ctx);
            Task::none()
        }
        settings::Message::BrowseDictionaryDir => folder_dialog(
            ctx.settings.dictionary_dir(),
            Message::DictionaryDirDialogResult,
        ),
        settings::Message::RecursiveDefaultToggled(enabled) => {
            ctx.settings.recursive_default = enabled;
            ctx.decompressor.recursive = enabled;
            persist_config(ctx);
            Task::none()
        }
    }
}

/// Handles navbar tab clicks.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    *ctx.screen = message.target();
    Task::none()
}

/// Handles the result of the compressed-file picker.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    ctx.app_state.set_last_open_directory_from_file(&path);
    persist_state(ctx);
    ctx.decompressor.set_file_path(path);
    Task::none()
}

/// Handles the result of the save-destination picker: decompresses the
/// selected file to the chosen destination.
pub fn handle_save_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    dest: Option<PathBuf>,
) -> Task<Message> {
    let Some(dest) = dest else {
        return Task::none();
    };
    let Some(src) = ctx.decompressor.file_path().map(PathBuf::from) else {
        return Task::none();
    };

    match decompress::decompress_file_to(&src, &dest, ctx.dictionaries) {
        Ok(_) => {
            ctx.notifications.push(
                Notification::success("notification-decompress-success")
                    .with_arg("path", dest.display().to_string()),
            );
            ctx.app_state.set_last_save_directory_from_file(&dest);
            persist_state(ctx);
        }
        Err(err) => {
            ctx.notifications.push(decompress_error_notification(&err));
        }
    }
    Task::none()
}

/// Handles the result of the input-folder picker.
pub fn handle_open_folder_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    ctx.app_state.last_folder_directory = Some(path.clone());
    persist_state(ctx);
    ctx.decompressor.set_folder_path(path);
    Task::none()
}

/// Handles the result of the output-folder picker: kicks off the background
/// folder decompression job.
pub fn handle_output_folder_dialog_result(
    ctx: &mut UpdateContext<'_>,
    output: Option<PathBuf>,
) -> Task<Message> {
    let Some(output) = output else {
        return Task::none();
    };
    let Some(input) = ctx.decompressor.folder_path().map(PathBuf::from) else {
        return Task::none();
    };

    ctx.app_state.last_output_directory = Some(output.clone());
    persist_state(ctx);

    ctx.decompressor.set_folder_job_running(true);
    let recursive = ctx.decompressor.recursive;
    let dictionaries = ctx.dictionaries.clone();

    Task::perform(
        async move { decompress::decompress_folder(&input, &output, recursive, &dictionaries) },
        Message::FolderDecompressed,
    )
}

/// Handles completion of a background folder job.
pub fn handle_folder_decompressed(
    ctx: &mut UpdateContext<'_>,
    result: Result<FolderSummary, Error>,
) -> Task<Message> {
    ctx.decompressor.set_folder_job_running(false);

    match result {
        Ok(summary) => ctx.notifications.push(folder_summary_notification(&summary)),
        Err(err) => {
            ctx.notifications.push(
                Notification::error("notification-folder-decompress-error")
                    .with_arg("reason", err.to_string()),
            );
        }
    }
    Task::none()
}

/// Handles the result of the dictionary-directory picker in settings.
pub fn handle_dictionary_dir_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    ctx.settings
        .set_dictionary_dir_input(path.display().to_string());
    apply_dictionary_dir(ctx);
    Task::none()
}

/// Handles a file or folder dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if path.is_dir() {
        ctx.decompressor.set_folder_path(path);
    } else {
        ctx.decompressor.set_file_path(path);
    }
    Task::none()
}

/// Reloads the dictionary store from the committed settings input and
/// persists the new directory.
fn apply_dictionary_dir(ctx: &mut UpdateContext<'_>) {
    match ctx.settings.dictionary_dir() {
        Some(dir) => match DictionaryStore::load(&dir) {
            Ok(store) => {
                let count = store.len();
                *ctx.dictionaries = store;
                ctx.notifications.push(
                    Notification::info("notification-dictionaries-loaded")
                        .with_arg("count", count.to_string()),
                );
            }
            Err(err) => {
                ctx.notifications.push(
                    Notification::warning("notification-dictionaries-load-error")
                        .with_arg("reason", err.to_string()),
                );
            }
        },
        None => {
            *ctx.dictionaries = DictionaryStore::empty();
        }
    }
    persist_config(ctx);
}

/// Saves the current preferences, surfacing failures as a warning toast.
fn persist_config(ctx: &mut UpdateContext<'_>) {
    let config = config_from_state(ctx.i18n, *ctx.theme_mode, ctx.settings);
    if config::save(&config).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

/// Saves the persisted dialog directories, surfacing failures as a toast.
fn persist_state(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = ctx.app_state.save() {
        ctx.notifications.push(Notification::warning(&key));
    }
}

/// Maps a decompression failure to its user-facing notification.
fn decompress_error_notification(err: &Error) -> Notification {
    match err {
        Error::Zstd(zstd_err) => {
            Notification::error(zstd_err.i18n_key()).with_arg("reason", zstd_err.to_string())
        }
        other => Notification::error("notification-decompress-error")
            .with_arg("reason", other.to_string()),
    }
}

/// Maps a folder summary to its completion notification.
fn folder_summary_notification(summary: &FolderSummary) -> Notification {
    if summary.is_clean() {
        Notification::success("notification-folder-decompress-success")
            .with_arg("count", summary.decompressed.to_string())
    } else {
        Notification::warning("notification-folder-decompress-partial")
            .with_arg("count", summary.decompressed.to_string())
            .with_arg("failed", summary.failed.len().to_string())
    }
}

/// Opens the compressed-file picker, starting in the last used directory.
fn open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Zstandard", decompress::COMPRESSED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Opens the save dialog for a single decompressed file.
fn save_file_dialog(file_name: String, last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&file_name);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveFileDialogResult,
    )
}

/// Opens a folder picker, routing the result through `on_result`.
fn folder_dialog(
    last_directory: Option<PathBuf>,
    on_result: fn(Option<PathBuf>) -> Message,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        on_result,
    )
}
