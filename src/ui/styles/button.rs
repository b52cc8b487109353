// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (call to action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::card(),
    }
}

/// One side navigation dot. The active dot is filled with the brand color;
/// inactive dots are hollow and brighten on hover.
pub fn nav_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let fill = if active {
            extended.primary.base.color
        } else {
            match status {
                button::Status::Hovered => extended.background.strong.color,
                _ => Color::TRANSPARENT,
            }
        };
        button::Style {
            background: Some(Background::Color(fill)),
            text_color: Color::TRANSPARENT,
            border: Border {
                color: if active {
                    extended.primary.base.color
                } else {
                    extended.background.strong.color
                },
                width: 2.0,
                radius: radius::FULL.into(),
            },
            shadow: iced::Shadow::default(),
        }
    }
}

/// One pricing tab. The active tab is filled; the inactive one stays flat
/// until hovered.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let (background, text_color) = if active {
            (extended.primary.base.color, extended.primary.base.text)
        } else {
            match status {
                button::Status::Hovered => (
                    extended.background.weak.color,
                    extended.background.base.text,
                ),
                _ => (Color::TRANSPARENT, extended.background.base.text),
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: iced::Shadow::default(),
        }
    }
}

/// The round FAB toggle. Open state swaps to the pressed brand shade.
pub fn fab_toggle(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if open {
            palette::PRIMARY_600
        } else {
            match status {
                button::Status::Hovered => palette::PRIMARY_400,
                _ => palette::PRIMARY_500,
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::overlay(),
        }
    }
}

/// One entry of the FAB popup menu.
pub fn fab_entry(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => extended.background.weak.color,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: extended.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
    }
}
