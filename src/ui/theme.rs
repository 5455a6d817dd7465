// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Border, Color, Theme};

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Card style used by form panels (coordinate entry, settings).
pub fn panel_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            color: extended.background.strong.color,
            width: border::THIN,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
