// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every panel.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header bar with a bottom separator look.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Raised card used for the form, list rows, slider frame and content cards.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Muted placeholder surface (missing thumbnails, empty preview, video).
pub fn placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_muted)),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Active/inactive pill badge.
pub fn badge(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let (bg, text) = if active {
            (colors.badge_active_bg, colors.badge_active_text)
        } else {
            (colors.badge_inactive_bg, colors.badge_inactive_text)
        };
        container::Style {
            background: Some(Background::Color(bg)),
            text_color: Some(text),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Underlined tab label.
pub fn active_tab(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.brand_primary),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Translucent band behind slide captions.
pub fn caption(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Surface standing in for a video slide.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        ..Default::default()
    }
}

/// Modal dialog body.
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        ..card(theme)
    }
}

/// Inline validation message.
pub fn inline_warning(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WARNING_500),
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette::WARNING_500
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
