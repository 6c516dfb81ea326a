// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every screen of the application.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use bannerboard::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let caption_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
let padding = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const SUCCESS_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Chrome
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Content widths
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const LANGUAGE_PICKER_WIDTH: f32 = 150.0;

    // Banner media
    pub const THUMBNAIL_WIDTH: f32 = 128.0;
    pub const THUMBNAIL_HEIGHT: f32 = 72.0;
    pub const PREVIEW_HEIGHT: f32 = 180.0;
    pub const SLIDER_HEIGHT: f32 = 420.0;
    pub const DESCRIPTION_EDITOR_HEIGHT: f32 = 96.0;

    // Slider controls
    pub const SLIDER_ARROW: f32 = 44.0;
    pub const INDICATOR_DOT: f32 = 10.0;
    pub const INDICATOR_ACTIVE_WIDTH: f32 = 28.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: page and section headings
    //! - Body: primary content text
    //! - Caption: badges and hints

    /// Page headings ("Admin Panel", "Welcome")
    pub const TITLE_LG: f32 = 30.0;

    /// Slide titles, app name in the header
    pub const TITLE_MD: f32 = 22.0;

    /// Section and card headers
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - separators, input fields, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - toast accents, active tab underline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::THUMBNAIL_WIDTH > sizing::THUMBNAIL_HEIGHT);
    assert!(sizing::SLIDER_HEIGHT > sizing::PREVIEW_HEIGHT);
    assert!(sizing::INDICATOR_ACTIVE_WIDTH > sizing::INDICATOR_DOT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
