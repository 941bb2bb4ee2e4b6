// SPDX-License-Identifier: MPL-2.0
//! Shared widget style functions.

use crate::ui::design_tokens::border;
use iced::widget::container;
use iced::Theme;

/// Style for the top toolbar container.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: iced::Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
