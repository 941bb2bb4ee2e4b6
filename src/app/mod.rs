// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (decompression engine,
//! localization, settings) and translates messages into side effects like
//! config persistence or dialog tasks. Policy decisions (window sizing,
//! persistence format, locale switching) stay close to the main update loop
//! so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, DecompressConfig, GeneralConfig};
use crate::decompress::DictionaryStore;
use crate::i18n::fluent::I18n;
use crate::ui::decompressor::State as DecompressorState;
use crate::ui::notifications;
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    decompressor: DecompressorState,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Loaded decoder dictionaries, rebuilt when the directory setting changes.
    dictionaries: DictionaryStore,
    /// Persisted application state (last dialog directories).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("dictionaries", &self.dictionaries.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the serializable config from the live application state.
pub(crate) fn config_from_state(
    i18n: &I18n,
    theme_mode: ThemeMode,
    settings: &SettingsState,
) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(i18n.current_locale().to_string()),
            theme_mode,
        },
        decompress: DecompressConfig {
            dictionary_dir: settings.dictionary_dir(),
            recursive: Some(settings.recursive_default),
        },
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Decompressor,
            decompressor: DecompressorState::new(config::DEFAULT_RECURSIVE),
            settings: SettingsState::new(None, config::DEFAULT_RECURSIVE, ThemeMode::System),
            theme_mode: ThemeMode::System,
            dictionaries: DictionaryStore::empty(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the loaded config and optionally
    /// preloads a path received from the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        let recursive = config
            .decompress
            .recursive
            .unwrap_or(config::DEFAULT_RECURSIVE);
        app.decompressor = DecompressorState::new(recursive);
        app.settings = SettingsState::new(
            config.decompress.dictionary_dir.as_ref(),
            recursive,
            config.general.theme_mode,
        );

        // Load decoder dictionaries from the configured directory
        if let Some(dir) = &config.decompress.dictionary_dir {
            match DictionaryStore::load(dir) {
                Ok(store) => app.dictionaries = store,
                Err(err) => {
                    app.notifications.push(
                        notifications::Notification::warning(
                            "notification-dictionaries-load-error",
                        )
                        .with_arg("reason", err.to_string()),
                    );
                }
            }
        }

        // Load application state (last dialog directories)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // A positional CLI path preloads the matching section
        if let Some(path_str) = flags.path {
            let path = PathBuf::from(&path_str);
            if path.is_dir() {
                app.decompressor.set_folder_path(path);
            } else {
                app.decompressor.set_file_path(path);
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self.decompressor.file_path().and_then(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        });

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            decompressor: &mut self.decompressor,
            settings: &mut self.settings,
            theme_mode: &mut self.theme_mode,
            dictionaries: &mut self.dictionaries,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Decompressor(decompressor_message) => {
                update::handle_decompressor_message(&mut ctx, decompressor_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => {
                self.screen = target;
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::SaveFileDialogResult(path) => {
                update::handle_save_file_dialog_result(&mut ctx, path)
            }
            Message::OpenFolderDialogResult(path) => {
                update::handle_open_folder_dialog_result(&mut ctx, path)
            }
            Message::OutputFolderDialogResult(path) => {
                update::handle_output_folder_dialog_result(&mut ctx, path)
            }
            Message::DictionaryDirDialogResult(path) => {
                update::handle_dictionary_dir_dialog_result(&mut ctx, path)
            }
            Message::FolderDecompressed(result) => {
                update::handle_folder_decompressed(&mut ctx, result)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            decompressor: &self.decompressor,
            settings: &self.settings,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompress::FolderSummary;
    use crate::error::{Error, ZstdError};
    use crate::ui::decompressor;
    use crate::ui::navbar;
    use crate::ui::settings;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());

        test(temp_dir.path());

        std::env::remove_var(paths::ENV_CONFIG_DIR);
        std::env::remove_var(paths::ENV_DATA_DIR);
    }

    #[test]
    fn new_starts_on_decompressor_screen() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Decompressor);
            assert!(app.decompressor.file_path().is_none());
            assert!(app.dictionaries.is_empty());
        });
    }

    #[test]
    fn new_preloads_positional_file_path() {
        with_temp_dirs(|root| {
            let file = root.join("data.bin.zs");
            fs::write(&file, b"stub").expect("write");

            let (app, _task) = App::new(Flags {
                path: Some(file.display().to_string()),
                ..Flags::default()
            });

            assert_eq!(app.decompressor.file_path(), Some(file.as_path()));
            assert!(app.decompressor.can_decompress_file());
        });
    }

    #[test]
    fn new_preloads_positional_folder_path() {
        with_temp_dirs(|root| {
            let folder = root.join("dump");
            fs::create_dir_all(&folder).expect("mkdir");

            let (app, _task) = App::new(Flags {
                path: Some(folder.display().to_string()),
                ..Flags::default()
            });

            assert_eq!(app.decompressor.folder_path(), Some(folder.as_path()));
        });
    }

    #[test]
    fn navbar_messages_switch_screens() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));
        assert_eq!(app.screen, Screen::About);

        let _ = app.update(Message::Navbar(navbar::Message::OpenDecompressor));
        assert_eq!(app.screen, Screen::Decompressor);
    }

    #[test]
    fn recursive_toggle_updates_decompressor_state() {
        let mut app = App::default();
        assert!(app.decompressor.recursive);

        let _ = app.update(Message::Decompressor(
            decompressor::Message::RecursiveToggled(false),
        ));
        assert!(!app.decompressor.recursive);
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_dirs(|config_root| {
            let mut app = App::default();
            let target_locale: unic_langid::LanguageIdentifier = app
                .i18n
                .available_locales
                .iter()
                .find(|locale| locale.to_string() == "fr")
                .cloned()
                .unwrap_or_else(|| app.i18n.current_locale().clone());

            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                target_locale.clone(),
            )));

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains(&target_locale.to_string()));
        });
    }

    #[test]
    fn theme_mode_selection_persists_and_applies() {
        with_temp_dirs(|config_root| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Light,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.settings.theme_mode, ThemeMode::Light);

            let contents = fs::read_to_string(config_root.join("settings.toml"))
                .expect("config should be readable");
            assert!(contents.contains("theme_mode = \"light\""));
        });
    }

    #[test]
    fn open_file_dialog_result_remembers_directory() {
        with_temp_dirs(|root| {
            let file = root.join("dumps").join("Actor.pack.zs");
            fs::create_dir_all(file.parent().unwrap()).expect("mkdir");
            fs::write(&file, b"stub").expect("write");

            let mut app = App::default();
            let _ = app.update(Message::OpenFileDialogResult(Some(file.clone())));

            assert_eq!(app.decompressor.file_path(), Some(file.as_path()));
            assert_eq!(
                app.app_state.last_open_directory,
                Some(file.parent().unwrap().to_path_buf())
            );
        });
    }

    #[test]
    fn cancelled_dialogs_change_nothing() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::OpenFileDialogResult(None));
            let _ = app.update(Message::SaveFileDialogResult(None));
            let _ = app.update(Message::OpenFolderDialogResult(None));
            let _ = app.update(Message::OutputFolderDialogResult(None));

            assert!(app.decompressor.file_path().is_none());
            assert!(app.decompressor.folder_path().is_none());
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn save_dialog_result_decompresses_file() {
        with_temp_dirs(|root| {
            let src = root.join("hello.txt.zs");
            let dest = root.join("hello.txt");
            let compressed =
                zstd::stream::encode_all(b"hello from the tool".as_slice(), 3).expect("compress");
            fs::write(&src, compressed).expect("write src");

            let mut app = App::default();
            app.decompressor.set_file_path(src);

            let _ = app.update(Message::SaveFileDialogResult(Some(dest.clone())));

            assert_eq!(fs::read(&dest).expect("read dest"), b"hello from the tool");
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn save_dialog_result_reports_bad_input() {
        with_temp_dirs(|root| {
            let src = root.join("bogus.zs");
            fs::write(&src, b"definitely not zstandard").expect("write src");

            let mut app = App::default();
            app.decompressor.set_file_path(src);

            let _ = app.update(Message::SaveFileDialogResult(Some(root.join("out.bin"))));

            assert!(!root.join("out.bin").exists());
            let keys: Vec<_> = app
                .notifications
                .visible()
                .map(|n| n.message_key().to_string())
                .collect();
            assert!(keys.contains(&"error-zstd-not-zstandard".to_string()));
        });
    }

    #[test]
    fn folder_decompressed_clears_running_flag_and_notifies() {
        let mut app = App::default();
        app.decompressor.set_folder_job_running(true);

        let _ = app.update(Message::FolderDecompressed(Ok(FolderSummary {
            decompressed: 4,
            skipped: 1,
            failed: Vec::new(),
        })));

        assert!(!app.decompressor.folder_job_running());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn folder_decompressed_error_shows_error_toast() {
        let mut app = App::default();
        app.decompressor.set_folder_job_running(true);

        let _ = app.update(Message::FolderDecompressed(Err(Error::Io(
            "walk failed".to_string(),
        ))));

        assert!(!app.decompressor.folder_job_running());
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert!(keys.contains(&"notification-folder-decompress-error".to_string()));
    }

    #[test]
    fn dictionary_dir_dialog_reloads_store() {
        with_temp_dirs(|root| {
            let dict_dir = root.join("dicts");
            fs::create_dir_all(&dict_dir).expect("mkdir");
            fs::write(dict_dir.join("zs.zsdic"), b"general dictionary").expect("write dict");
            fs::write(dict_dir.join("pack.zsdic"), b"pack dictionary").expect("write dict");

            let mut app = App::default();
            let _ = app.update(Message::DictionaryDirDialogResult(Some(dict_dir.clone())));

            assert_eq!(app.dictionaries.len(), 2);
            assert_eq!(
                app.settings.dictionary_dir(),
                Some(dict_dir),
            );
        });
    }

    #[test]
    fn file_dropped_fills_matching_section() {
        with_temp_dirs(|root| {
            let file = root.join("drop.bin.zs");
            fs::write(&file, b"stub").expect("write");
            let folder = root.join("dropdir");
            fs::create_dir_all(&folder).expect("mkdir");

            let mut app = App::default();

            let _ = app.update(Message::FileDropped(file.clone()));
            assert_eq!(app.decompressor.file_path(), Some(file.as_path()));

            let _ = app.update(Message::FileDropped(folder.clone()));
            assert_eq!(app.decompressor.folder_path(), Some(folder.as_path()));
        });
    }

    #[test]
    fn title_includes_selected_file_name() {
        let mut app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        app.decompressor
            .set_file_path(PathBuf::from("/dumps/Actor.pack.zs"));
        assert!(app.title().starts_with("Actor.pack.zs - "));
    }

    #[test]
    fn decompress_file_without_selection_is_a_no_op() {
        let mut app = App::default();
        let _ = app.update(Message::Decompressor(decompressor::Message::DecompressFile));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn failed_folder_entries_surface_partial_warning() {
        let mut app = App::default();

        let _ = app.update(Message::FolderDecompressed(Ok(FolderSummary {
            decompressed: 2,
            skipped: 0,
            failed: vec![(
                PathBuf::from("bad.bin.zs"),
                Error::Zstd(ZstdError::CorruptedFrame),
            )],
        })));

        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert!(keys.contains(&"notification-folder-decompress-partial".to_string()));
    }
}
