// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

/// Subtitles, descriptions, hints.
pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}
