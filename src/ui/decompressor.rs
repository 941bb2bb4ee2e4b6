// SPDX-License-Identifier: MPL-2.0
//! Main decompression screen.
//!
//! Two sections: a single-file row (pick a compressed file, decompress it to a
//! chosen destination) and a folder row (pick an input tree, decompress every
//! compressed file into an output tree). The action buttons stay disabled
//! until the corresponding path points at something usable on disk, and the
//! folder button is also disabled while a folder job runs in the background.

use crate::decompress;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, checkbox, text, Button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::path::{Path, PathBuf};

/// State for the decompression screen.
#[derive(Debug, Default)]
pub struct State {
    file_path: Option<PathBuf>,
    can_decompress_file: bool,
    folder_path: Option<PathBuf>,
    can_decompress_folder: bool,
    /// Whether the folder walk descends into subdirectories.
    pub recursive: bool,
    folder_job_running: bool,
}

/// Messages emitted by the decompression screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the file picker for the single-file section.
    BrowseFile,
    /// Decompress the selected file (opens the save dialog).
    DecompressFile,
    /// Open the folder picker for the folder section.
    BrowseFolder,
    /// Decompress the selected folder (opens the output folder dialog).
    DecompressFolder,
    /// Toggle recursive folder walking.
    RecursiveToggled(bool),
}

impl State {
    #[must_use]
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            ..Self::default()
        }
    }

    /// Sets the single-file path and recomputes whether it can be decompressed.
    pub fn set_file_path(&mut self, path: PathBuf) {
        self.can_decompress_file = path.is_file();
        self.file_path = Some(path);
    }

    /// Sets the folder path and recomputes whether it can be decompressed.
    pub fn set_folder_path(&mut self, path: PathBuf) {
        self.can_decompress_folder = path.is_dir();
        self.folder_path = Some(path);
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    #[must_use]
    pub fn folder_path(&self) -> Option<&Path> {
        self.folder_path.as_deref()
    }

    #[must_use]
    pub fn can_decompress_file(&self) -> bool {
        self.can_decompress_file
    }

    #[must_use]
    pub fn can_decompress_folder(&self) -> bool {
        self.can_decompress_folder && !self.folder_job_running
    }

    #[must_use]
    pub fn folder_job_running(&self) -> bool {
        self.folder_job_running
    }

    pub fn set_folder_job_running(&mut self, running: bool) {
        self.folder_job_running = running;
    }

    /// Suggested output file name for the selected file, with the compression
    /// extension stripped.
    #[must_use]
    pub fn suggested_output_name(&self) -> Option<String> {
        let path = self.file_path.as_deref()?;
        decompress::output_name(path).map(|name| name.to_string_lossy().into_owned())
    }
}

/// Context required to render the decompression screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the decompression screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("decompressor-title")).size(typography::TITLE_LG);

    let file_section = build_file_section(&ctx);
    let folder_section = build_folder_section(&ctx);

    let content = Column::new()
        .push(title)
        .push(file_section)
        .push(folder_section)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn build_file_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Text::new(i18n.tr("decompressor-file-section")).size(typography::TITLE_SM);

    let path_label = match state.file_path() {
        Some(path) => Text::new(path.display().to_string()).size(typography::BODY),
        None => Text::new(i18n.tr("decompressor-no-file-selected")).size(typography::BODY),
    };

    let browse_button = Button::new(Text::new(i18n.tr("decompressor-browse-file-button")))
        .on_press(Message::BrowseFile)
        .style(button::secondary);

    let decompress_button = Button::new(Text::new(i18n.tr("decompressor-decompress-button")))
        .on_press_maybe(state.can_decompress_file().then_some(Message::DecompressFile))
        .style(button::primary);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(browse_button)
        .push(decompress_button);

    Column::new()
        .push(header)
        .push(path_row(path_label))
        .push(controls)
        .spacing(spacing::SM)
        .into()
}

fn build_folder_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Text::new(i18n.tr("decompressor-folder-section")).size(typography::TITLE_SM);

    let path_label = match state.folder_path() {
        Some(path) => Text::new(path.display().to_string()).size(typography::BODY),
        None => Text::new(i18n.tr("decompressor-no-folder-selected")).size(typography::BODY),
    };

    let browse_button = Button::new(Text::new(i18n.tr("decompressor-browse-folder-button")))
        .on_press(Message::BrowseFolder)
        .style(button::secondary);

    let action_label = if state.folder_job_running() {
        i18n.tr("decompressor-folder-running")
    } else {
        i18n.tr("decompressor-decompress-folder-button")
    };
    let decompress_button = Button::new(Text::new(action_label))
        .on_press_maybe(
            state
                .can_decompress_folder()
                .then_some(Message::DecompressFolder),
        )
        .style(button::primary);

    let recursive_checkbox = checkbox(state.recursive)
        .label(i18n.tr("decompressor-recursive-label"))
        .on_toggle(Message::RecursiveToggled)
        .size(sizing::ICON_SM)
        .text_size(typography::BODY);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(browse_button)
        .push(decompress_button)
        .push(recursive_checkbox);

    Column::new()
        .push(header)
        .push(path_row(path_label))
        .push(controls)
        .spacing(spacing::SM)
        .into()
}

fn path_row(label: Text<'_>) -> Element<'_, Message> {
    Container::new(label.style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    }))
    .width(Length::Fixed(sizing::PATH_INPUT_WIDTH))
    .padding(spacing::XXS)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_state_cannot_decompress() {
        let state = State::default();
        assert!(!state.can_decompress_file());
        assert!(!state.can_decompress_folder());
        assert!(state.file_path().is_none());
    }

    #[test]
    fn set_file_path_enables_action_for_existing_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("data.bin.zs");
        fs::write(&path, b"stub").expect("write");

        let mut state = State::default();
        state.set_file_path(path.clone());

        assert!(state.can_decompress_file());
        assert_eq!(state.file_path(), Some(path.as_path()));
    }

    #[test]
    fn set_file_path_keeps_action_disabled_for_missing_file() {
        let mut state = State::default();
        state.set_file_path(PathBuf::from("/no/such/file.zs"));
        assert!(!state.can_decompress_file());
    }

    #[test]
    fn set_folder_path_enables_action_for_existing_directory() {
        let dir = tempdir().expect("temp dir");

        let mut state = State::default();
        state.set_folder_path(dir.path().to_path_buf());

        assert!(state.can_decompress_folder());
    }

    #[test]
    fn running_job_disables_folder_action() {
        let dir = tempdir().expect("temp dir");

        let mut state = State::default();
        state.set_folder_path(dir.path().to_path_buf());
        state.set_folder_job_running(true);

        assert!(!state.can_decompress_folder());
        assert!(state.folder_job_running());

        state.set_folder_job_running(false);
        assert!(state.can_decompress_folder());
    }

    #[test]
    fn suggested_output_name_strips_extension() {
        let mut state = State::default();
        state.set_file_path(PathBuf::from("/dumps/Actor.pack.zs"));
        assert_eq!(state.suggested_output_name(), Some("Actor.pack".to_string()));
    }

    #[test]
    fn view_renders_in_all_states() {
        let i18n = I18n::default();
        let mut state = State::new(true);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        state.set_file_path(PathBuf::from("/dumps/a.zs"));
        state.set_folder_job_running(true);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
