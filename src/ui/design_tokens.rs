// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the crate's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, also exposed as named color resources
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_snackbar::ui::design_tokens::{palette, spacing, DesignTokens};
use iced_snackbar::snackbar::{ColorRes, ColorResolver};

assert_eq!(DesignTokens.color(ColorRes::SUCCESS), Some(palette::GREEN_500));

let padding = spacing::MD; // 16px
```
"#]

use crate::snackbar::{ColorRes, ColorResolver};
use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98); // Light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue

    // Snackbar backgrounds
    pub const SNACKBAR_BACKGROUND: Color = Color::from_rgb(0.196, 0.196, 0.196); // #323232
    pub const GREEN_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
    pub const RED_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #F44336
    pub const YELLOW_700: Color = Color::from_rgb(0.984, 0.753, 0.176); // #FBC02D
}

/// Resolves [`ColorRes`] names against the palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignTokens;

impl ColorResolver for DesignTokens {
    fn color(&self, id: ColorRes) -> Option<Color> {
        let color = match id.name() {
            "white" => palette::WHITE,
            "black" => palette::BLACK,
            "gray_900" => palette::GRAY_900,
            "gray_400" => palette::GRAY_400,
            "primary_200" => palette::PRIMARY_200,
            "primary_500" => palette::PRIMARY_500,
            "default_background" => palette::SNACKBAR_BACKGROUND,
            "green_500" => palette::GREEN_500,
            "red_500" => palette::RED_500,
            "yellow_700" => palette::YELLOW_700,
            _ => return None,
        };
        Some(color)
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Snackbars never grow wider than this.
    pub const SNACKBAR_MAX_WIDTH: f32 = 568.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Counters, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::SNACKBAR_MAX_WIDTH > 0.0);

    // Typography validation
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
