// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The layout is a navbar above the active screen, with the toast overlay
//! stacked on top so notifications float over whatever screen is showing.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::decompressor::{self, State as DecompressorState};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{self, State as SettingsState};
use iced::widget::{stack, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub decompressor: &'a DecompressorState,
    pub settings: &'a SettingsState,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active_screen: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Decompressor => decompressor::view(decompressor::ViewContext {
            i18n: ctx.i18n,
            state: ctx.decompressor,
        })
        .map(Message::Decompressor),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: ctx.i18n,
            state: ctx.settings,
        })
        .map(Message::Settings),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }),
    };

    let content = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toast_overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![
        Container::new(content).width(Length::Fill).height(Length::Fill),
        toast_overlay
    ]
    .into()
}
