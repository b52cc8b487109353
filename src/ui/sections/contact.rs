// SPDX-License-Identifier: MPL-2.0
//! Contact section: a single revealable block.

use crate::i18n::fluent::I18n;
use crate::page::layout::{CONTACT_BLOCK_HEIGHT, SECTION_CONTACT_HEIGHT};
use crate::page::RevealFrame;
use crate::ui::components::SectionHeader;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Space};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: RevealFrame,
}

/// Renders the contact section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let progress = ctx.frame.contact;

    let header = SectionHeader::new(ctx.i18n.tr("contact-title"))
        .subtitle(ctx.i18n.tr("contact-subtitle"))
        .view();

    let email = text(ctx.i18n.tr("contact-email"))
        .size(typography::TITLE_SM)
        .style(move |theme: &Theme| {
            let brand = theme.extended_palette().primary.base.color;
            iced::widget::text::Style {
                color: Some(iced::Color {
                    a: brand.a * progress,
                    ..brand
                }),
            }
        });

    let block = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .push(
                text(ctx.i18n.tr("contact-body"))
                    .size(typography::BODY)
                    .style(super::faded(progress)),
            )
            .push(email),
    )
    .width(Length::Fixed(sizing::CONTACT_BLOCK_WIDTH))
    .height(Length::Fixed(CONTACT_BLOCK_HEIGHT - sizing::REVEAL_SLIDE))
    .align_y(iced::alignment::Vertical::Center)
    .style(styles::container::card(progress));

    let slot = Column::new()
        .height(Length::Fixed(CONTACT_BLOCK_HEIGHT))
        .push(Space::with_height(Length::Fixed(
            (1.0 - progress) * sizing::REVEAL_SLIDE,
        )))
        .push(block);

    let content = Column::new().push(header).push(
        Container::new(slot)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_CONTACT_HEIGHT))
        .style(styles::container::section(false))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_renders_pending_and_revealed() {
        let i18n = I18n::default();
        let pending = RevealFrame::default();
        let _: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            frame: pending,
        });

        let mut revealed = RevealFrame::default();
        revealed.contact = 1.0;
        let _: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            frame: revealed,
        });
    }
}
