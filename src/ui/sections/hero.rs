// SPDX-License-Identifier: MPL-2.0
//! Hero section with the decorative parallax.
//!
//! The content block drifts down and fades out as the reader scrolls,
//! driven by the values owned by [`Parallax`](crate::page::Parallax). The
//! drift is rendered as a spacer above the block, which keeps the section
//! itself at its fixed height.

use crate::i18n::fluent::I18n;
use crate::page::Parallax;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Space};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub parallax: &'a Parallax,
    /// Current hero height (one viewport).
    pub height: f32,
}

/// Messages emitted by the hero.
#[derive(Debug, Clone)]
pub enum Message {
    BrowseCourses,
}

/// Renders the hero section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let opacity = ctx.parallax.opacity();

    let kicker = text(ctx.i18n.tr("hero-kicker"))
        .size(typography::TITLE_SM)
        .style(move |theme: &Theme| {
            let brand = theme.extended_palette().primary.base.color;
            iced::widget::text::Style {
                color: Some(iced::Color {
                    a: brand.a * opacity,
                    ..brand
                }),
            }
        });

    let title = text(ctx.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .style(super::faded(opacity));

    let subtitle = text(ctx.i18n.tr("hero-subtitle"))
        .size(typography::TITLE_SM)
        .style(super::faded_muted(opacity));

    let cta = button(text(ctx.i18n.tr("hero-cta")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::BrowseCourses);

    // Top-anchored so the drift applies verbatim: resting position is about
    // a third of the way down, plus the parallax offset.
    let drift = ctx.height * 0.3 + ctx.parallax.translate_y();
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Space::with_height(Length::Fixed(drift)))
        .push(kicker)
        .push(title)
        .push(subtitle)
        .push(Space::with_height(Length::Fixed(spacing::MD)))
        .push(cta);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top)
        .style(styles::container::section(false))
        .into()
}
