// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme, and decompression preferences.
//!
//! The dictionary directory is edited as free text and committed on submit,
//! or filled through the folder picker. Reload of the dictionary store happens
//! in the application update loop, not here.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, checkbox, text_input, Button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// State for the settings screen.
#[derive(Debug, Default)]
pub struct State {
    /// Current text of the dictionary directory input.
    dictionary_dir_input: String,
    /// Default for the recursive checkbox on the decompression screen.
    pub recursive_default: bool,
    /// Selected theme mode.
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    DictionaryDirInputChanged(String),
    DictionaryDirSubmitted,
    BrowseDictionaryDir,
    RecursiveDefaultToggled(bool),
}

impl State {
    #[must_use]
    pub fn new(
        dictionary_dir: Option<&PathBuf>,
        recursive_default: bool,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            dictionary_dir_input: dictionary_dir
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            recursive_default,
            theme_mode,
        }
    }

    #[must_use]
    pub fn dictionary_dir_input(&self) -> &str {
        &self.dictionary_dir_input
    }

    pub fn set_dictionary_dir_input(&mut self, value: String) {
        self.dictionary_dir_input = value;
    }

    /// The committed dictionary directory, or `None` when the input is blank.
    #[must_use]
    pub fn dictionary_dir(&self) -> Option<PathBuf> {
        let trimmed = self.dictionary_dir_input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .push(title)
        .push(build_language_section(ctx.i18n))
        .push(build_theme_section(ctx.i18n, ctx.state))
        .push(build_decompress_section(ctx.i18n, ctx.state))
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn build_language_section(i18n: &I18n) -> Element<'_, Message> {
    let mut column = Column::new()
        .push(Text::new(i18n.tr("select-language-label")).size(typography::TITLE_SM))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let display_name = locale.to_string();

        // Check for specific translation for the language name, e.g., "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = i18n.current_locale() == locale;
        let mut language_button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }

        column = column.push(language_button);
    }

    column.into()
}

fn build_theme_section<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let mut mode_button = Button::new(Text::new(i18n.tr(mode.i18n_key())))
            .on_press(Message::ThemeModeSelected(mode));
        if mode == state.theme_mode {
            mode_button = mode_button.style(button::primary);
        } else {
            mode_button = mode_button.style(button::secondary);
        }
        row = row.push(mode_button);
    }

    Column::new()
        .push(Text::new(i18n.tr("theme-mode-label")).size(typography::TITLE_SM))
        .push(row)
        .spacing(spacing::XS)
        .into()
}

fn build_decompress_section<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let dir_input = text_input(
        &i18n.tr("settings-dictionary-dir-placeholder"),
        state.dictionary_dir_input(),
    )
    .on_input(Message::DictionaryDirInputChanged)
    .on_submit(Message::DictionaryDirSubmitted)
    .width(Length::Fixed(sizing::PATH_INPUT_WIDTH))
    .size(typography::BODY);

    let browse_button = Button::new(Text::new(i18n.tr("settings-dictionary-dir-browse")))
        .on_press(Message::BrowseDictionaryDir)
        .style(button::secondary);

    let dir_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(dir_input)
        .push(browse_button);

    let recursive_checkbox = checkbox(state.recursive_default)
        .label(i18n.tr("settings-recursive-default-label"))
        .on_toggle(Message::RecursiveDefaultToggled)
    .size(sizing::ICON_SM)
    .text_size(typography::BODY);

    Column::new()
        .push(Text::new(i18n.tr("settings-decompress-section")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("settings-dictionary-dir-label")).size(typography::BODY))
        .push(dir_row)
        .push(recursive_checkbox)
        .spacing(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_formats_dictionary_dir() {
        let dir = PathBuf::from("/games/totk/ZsDic");
        let state = State::new(Some(&dir), true, ThemeMode::Dark);

        assert_eq!(state.dictionary_dir_input(), "/games/totk/ZsDic");
        assert_eq!(state.dictionary_dir(), Some(dir));
        assert!(state.recursive_default);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn blank_input_means_no_dictionary_dir() {
        let mut state = State::default();
        assert_eq!(state.dictionary_dir(), None);

        state.set_dictionary_dir_input("   ".to_string());
        assert_eq!(state.dictionary_dir(), None);
    }

    #[test]
    fn input_is_trimmed_before_use() {
        let mut state = State::default();
        state.set_dictionary_dir_input("  /dicts  ".to_string());
        assert_eq!(state.dictionary_dir(), Some(PathBuf::from("/dicts")));
    }

    #[test]
    fn view_renders_without_panic() {
        let i18n = I18n::default();
        let state = State::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
