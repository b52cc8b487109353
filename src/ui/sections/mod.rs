// SPDX-License-Identifier: MPL-2.0
//! The five page sections, top to bottom.
//!
//! Every section renders inside a fixed-height container taken from the
//! design constants in [`crate::page::layout`], so the widget tree and the
//! geometry the interaction components reason about stay in agreement. The
//! hero is the exception: its height tracks the viewport and is passed in
//! by the shell.

pub mod contact;
pub mod courses;
pub mod features;
pub mod gallery;
pub mod hero;

use crate::ui::design_tokens::opacity;
use iced::widget::text;
use iced::Theme;

/// Text style fading primary text in with a reveal ramp.
pub(crate) fn faded(progress: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.text;
        text::Style {
            color: Some(iced::Color {
                a: base.a * progress,
                ..base
            }),
        }
    }
}

/// Like [`faded`], but for secondary (muted) text.
pub(crate) fn faded_muted(progress: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.text;
        text::Style {
            color: Some(iced::Color {
                a: opacity::MUTED * base.a * progress,
                ..base
            }),
        }
    }
}
