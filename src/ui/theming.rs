// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,
}

impl ColorScheme {
    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,
            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_700,
            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_200,
            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves whether this mode currently renders dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The next mode in the Light -> Dark -> System cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        write!(f, "{name}")
    }
}

/// Global theme state: the selected mode plus its resolved colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };
        Self { colors, mode }
    }

    /// Switches to the next mode and re-resolves the colors.
    pub fn cycle(&mut self) {
        *self = Self::new(self.mode.next());
        log::debug!("Theme mode: {}", self.mode);
    }

    /// Maps the scheme onto an Iced theme so stock widgets pick up the
    /// brand colors through the extended palette.
    #[must_use]
    pub fn to_iced_theme(&self) -> Theme {
        let name = if self.mode.is_dark() {
            "ForYou Dark"
        } else {
            "ForYou Light"
        };
        Theme::custom(
            name.to_string(),
            Palette {
                background: self.colors.surface_primary,
                text: self.colors.text_primary,
                primary: self.colors.brand_primary,
                success: self.colors.success,
                danger: self.colors.error,
            },
        )
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
        assert_eq!(mode.next(), ThemeMode::Light);
    }

    #[test]
    fn mode_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrap {
            mode: ThemeMode,
        }
        let toml = toml::to_string(&Wrap {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert!(toml.contains("\"dark\""));
    }

    #[test]
    fn app_theme_follows_the_requested_mode() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);
        assert_ne!(
            light.colors.surface_primary,
            dark.colors.surface_primary
        );
    }
}
