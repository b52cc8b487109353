// SPDX-License-Identifier: MPL-2.0
//! Features section: three revealable cards in a row.

use crate::i18n::fluent::I18n;
use crate::page::layout::{FEATURE_CARD_COUNT, FEATURE_CARD_HEIGHT, SECTION_FEATURES_HEIGHT};
use crate::page::RevealFrame;
use crate::ui::components::SectionHeader;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Contextual data needed to render the features section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: RevealFrame,
}

/// Renders the features section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let header = SectionHeader::new(ctx.i18n.tr("features-title"))
        .subtitle(ctx.i18n.tr("features-subtitle"))
        .view();

    let mut cards = Row::new().spacing(spacing::LG);
    for i in 0..FEATURE_CARD_COUNT {
        cards = cards.push(card(&ctx, i));
    }

    let content = Column::new()
        .push(header)
        .push(Container::new(cards).width(Length::Fill).align_x(Horizontal::Center));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_FEATURES_HEIGHT))
        .style(styles::container::section(true))
        .into()
}

fn card<'a, Message: 'a>(ctx: &ViewContext<'_>, index: usize) -> Element<'a, Message> {
    let progress = ctx.frame.features[index];
    let n = index + 1;

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(
            text(ctx.i18n.tr(&format!("feature-{n}-title")))
                .size(typography::TITLE_SM)
                .style(super::faded(progress)),
        )
        .push(
            text(ctx.i18n.tr(&format!("feature-{n}-body")))
                .size(typography::BODY)
                .style(super::faded_muted(progress)),
        );

    let card = Container::new(body)
        .width(Length::Fixed(sizing::FEATURE_CARD_WIDTH))
        .height(Length::Fixed(
            FEATURE_CARD_HEIGHT - sizing::REVEAL_SLIDE,
        ))
        .style(styles::container::card(progress));

    // The slide-up: spare space above the card shrinks as the ramp runs.
    Column::new()
        .height(Length::Fixed(FEATURE_CARD_HEIGHT))
        .push(Space::with_height(Length::Fixed(
            (1.0 - progress) * sizing::REVEAL_SLIDE,
        )))
        .push(card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_render_pending_and_revealed() {
        let i18n = I18n::default();
        let pending = RevealFrame::default();
        let _: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            frame: pending,
        });

        let mut revealed = RevealFrame::default();
        revealed.features = [1.0; FEATURE_CARD_COUNT];
        let _: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            frame: revealed,
        });
    }
}
