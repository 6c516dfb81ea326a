// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_card: Color,
    pub surface_muted: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Badges
    pub badge_active_bg: Color,
    pub badge_active_text: Color,
    pub badge_inactive_bg: Color,
    pub badge_inactive_text: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_50,
            surface_card: palette::WHITE,
            surface_muted: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,

            badge_active_bg: palette::SUCCESS_100,
            badge_active_text: Color::from_rgb(0.086, 0.396, 0.204),
            badge_inactive_bg: palette::GRAY_100,
            badge_inactive_text: palette::GRAY_700,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_card: palette::GRAY_800,
            surface_muted: palette::GRAY_700,
            border: palette::GRAY_700,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,
            text_tertiary: palette::GRAY_500,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            badge_active_bg: Color::from_rgb(0.078, 0.325, 0.176),
            badge_active_text: Color::from_rgb(0.525, 0.937, 0.675),
            badge_inactive_bg: palette::GRAY_700,
            badge_inactive_text: palette::GRAY_200,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching an Iced theme produced by [`ThemeMode::theme`].
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Light only when the platform explicitly reports it.
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Explicit mode opposite to the one currently displayed.
    ///
    /// `System` resolves to whatever the platform shows, so toggling always
    /// changes the visible theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Iced theme to render with.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
