// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(background: Color, border: Color, text_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

fn disabled_style(theme: &Theme) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    button::Style {
        background: Some(Background::Color(colors.surface_muted)),
        text_color: colors.text_tertiary,
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main call to action (save, add banner, confirm logout).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_600, palette::PRIMARY_700, WHITE)
        }
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..filled(palette::PRIMARY_700, palette::PRIMARY_700, WHITE)
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Neutral action (cancel, choose file).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            shadow: shadow::NONE,
            ..filled(colors.surface_card, colors.border, colors.text_primary)
        },
        button::Status::Hovered => button::Style {
            shadow: shadow::NONE,
            ..filled(colors.surface_muted, colors.border, colors.text_primary)
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Destructive action (delete confirmation).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::ERROR_500, palette::ERROR_600, WHITE)
        }
        button::Status::Hovered => filled(palette::ERROR_600, palette::ERROR_600, WHITE),
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Borderless icon-like button used in list rows and the header.
///
/// `accent` colors the glyph; hover adds a faint backdrop.
pub fn ghost(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(colors.surface_muted))
            }
            _ => None,
        };
        let text_color = if status == button::Status::Disabled {
            colors.text_tertiary
        } else {
            accent
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Header button, highlighted when its panel or menu is active.
pub fn header(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let (background, text_color) = match (selected, status) {
            (true, _) => (Some(Background::Color(palette::PRIMARY_100)), palette::PRIMARY_700),
            (false, button::Status::Hovered | button::Status::Pressed) => (
                Some(Background::Color(colors.surface_muted)),
                colors.text_primary,
            ),
            (false, _) => (None, colors.text_secondary),
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round translucent button drawn over slides (arrows, play/pause).
pub fn overlay(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: colors.overlay_text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Slide indicator dot; the current slide is fully opaque.
pub fn indicator(current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (current, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => opacity::OVERLAY_HOVER,
            (false, _) => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
