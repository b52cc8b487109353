// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

Section and overlay *geometry* (section heights, FAB rectangle) lives with
the page layout in [`crate::page`], because the interaction logic reasons
about it; everything visual-only lives here.

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_900: Color = Color::from_rgb(0.10, 0.09, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.29, 0.27, 0.31);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.53, 0.57);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.81, 0.84);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.92, 0.94);

    // Brand colors (coral scale)
    pub const PRIMARY_100: Color = Color::from_rgb(1.0, 0.90, 0.87);
    pub const PRIMARY_200: Color = Color::from_rgb(1.0, 0.78, 0.72);
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.55, 0.47);
    pub const PRIMARY_500: Color = Color::from_rgb(0.96, 0.42, 0.34);
    pub const PRIMARY_600: Color = Color::from_rgb(0.85, 0.33, 0.26);
    pub const PRIMARY_700: Color = Color::from_rgb(0.70, 0.25, 0.19);

    // Accent (deep teal, used for the in-person pricing accents)
    pub const ACCENT_500: Color = Color::from_rgb(0.13, 0.55, 0.55);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Barely-there washes behind cards.
    pub const FAINT: f32 = 0.06;
    /// Secondary text.
    pub const MUTED: f32 = 0.7;
    /// Popup menu backdrop.
    pub const OVERLAY_STRONG: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 40.0;
    pub const XXL: f32 = 64.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of an inactive side navigation dot.
    pub const NAV_DOT: f32 = 12.0;
    /// Diameter of the active side navigation dot.
    pub const NAV_DOT_ACTIVE: f32 = 16.0;
    /// Width reserved for the side navigation rail overlay.
    pub const NAV_RAIL_WIDTH: f32 = 56.0;
    /// Width of a feature card.
    pub const FEATURE_CARD_WIDTH: f32 = 280.0;
    /// Width of a gallery tile.
    pub const GALLERY_TILE_WIDTH: f32 = 380.0;
    /// Width of the courses panel.
    pub const COURSE_PANEL_WIDTH: f32 = 640.0;
    /// Width of the contact block.
    pub const CONTACT_BLOCK_WIDTH: f32 = 520.0;
    /// How far a revealing element slides up while fading in.
    pub const REVEAL_SLIDE: f32 = 18.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 54.0;
    pub const TITLE_LG: f32 = 34.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    /// Fully round (dots, the FAB toggle).
    pub const FULL: f32 = 999.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    /// Resting card shadow.
    #[must_use]
    pub fn card() -> Shadow {
        Shadow {
            color: Color {
                a: 0.18,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        }
    }

    /// Floating overlay shadow (FAB, popup menu).
    #[must_use]
    pub fn overlay() -> Shadow {
        Shadow {
            color: Color {
                a: 0.3,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 6.0),
            blur_radius: 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn typography_scale_is_monotonic() {
        let scale = [
            typography::CAPTION,
            typography::BODY,
            typography::TITLE_SM,
            typography::TITLE_MD,
            typography::TITLE_LG,
            typography::DISPLAY,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn active_nav_dot_is_larger() {
        assert!(sizing::NAV_DOT_ACTIVE > sizing::NAV_DOT);
        assert!(sizing::NAV_DOT_ACTIVE < sizing::NAV_RAIL_WIDTH);
    }
}
