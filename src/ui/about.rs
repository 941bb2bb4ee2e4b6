// SPDX-License-Identifier: MPL-2.0
//! About screen with application name, version, and license.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the about screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, crate::app::Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);
    let version = Text::new(format!("v{}", env!("CARGO_PKG_VERSION"))).size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);
    let license = Text::new(ctx.i18n.tr("about-license")).size(typography::CAPTION);

    let content = Column::new()
        .push(title)
        .push(version)
        .push(description)
        .push(license)
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _ = view(ViewContext { i18n: &i18n });
    }
}
