// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for switching between screens.
//!
//! A simple row of tab-style buttons at the top of the window. The active
//! screen's tab is highlighted.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Button, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenDecompressor,
    OpenSettings,
    OpenAbout,
}

impl Message {
    /// Target screen of this navbar action.
    #[must_use]
    pub fn target(&self) -> Screen {
        match self {
            Message::OpenDecompressor => Screen::Decompressor,
            Message::OpenSettings => Screen::Settings,
            Message::OpenAbout => Screen::About,
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tabs = [
        ("navbar-decompressor", Screen::Decompressor, Message::OpenDecompressor),
        ("navbar-settings", Screen::Settings, Message::OpenSettings),
        ("navbar-about", Screen::About, Message::OpenAbout),
    ];

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    for (key, screen, message) in tabs {
        let label = ctx.i18n.tr(key);
        let mut tab = Button::new(Text::new(label)).on_press(message);
        if ctx.active_screen == screen {
            tab = tab.style(button::primary);
        } else {
            tab = tab.style(button::text);
        }
        row = row.push(tab);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_their_screens() {
        assert_eq!(Message::OpenDecompressor.target(), Screen::Decompressor);
        assert_eq!(Message::OpenSettings.target(), Screen::Settings);
        assert_eq!(Message::OpenAbout.target(), Screen::About);
    }

    #[test]
    fn navbar_view_renders_for_each_screen() {
        let i18n = I18n::default();
        for screen in [Screen::Decompressor, Screen::Settings, Screen::About] {
            let _ = view(ViewContext {
                i18n: &i18n,
                active_screen: screen,
            });
        }
    }
}
