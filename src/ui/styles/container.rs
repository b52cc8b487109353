// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Alternating section surface. Even sections sit on the base background,
/// odd ones on a faint wash, so scrolling reads as distinct regions.
pub fn section(stripe: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let background = if stripe {
            with_alpha(extended.background.weak.color, 0.5)
        } else {
            extended.background.base.color
        };
        container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        }
    }
}

/// A revealable card. `progress` is the reveal ramp in `0.0..=1.0` and
/// scales the card's whole presence: background, border, and shadow fade in
/// together.
pub fn card(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let base = extended.background.weak.color;
        let mut card_shadow = shadow::card();
        card_shadow.color.a *= progress;
        container::Style {
            background: Some(Background::Color(with_alpha(base, base.a * progress))),
            border: Border {
                color: with_alpha(extended.background.strong.color, progress),
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: card_shadow,
            ..Default::default()
        }
    }
}

/// A gallery tile: a flat brand-tinted placeholder that fades in with its
/// reveal ramp.
pub fn gallery_tile(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(with_alpha(
                extended.primary.weak.color,
                progress.max(opacity::FAINT),
            ))),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// The FAB popup menu panel.
pub fn fab_menu(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(with_alpha(
            extended.background.base.color,
            opacity::OVERLAY_STRONG,
        ))),
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::overlay(),
        ..Default::default()
    }
}
