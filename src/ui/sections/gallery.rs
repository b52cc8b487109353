// SPDX-License-Identifier: MPL-2.0
//! Gallery section: a two-by-two grid of revealable tiles.

use crate::i18n::fluent::I18n;
use crate::page::layout::{
    GALLERY_COLUMNS, GALLERY_ITEM_COUNT, GALLERY_ROW_HEIGHT, GALLERY_ROW_SPACING,
    SECTION_GALLERY_HEIGHT,
};
use crate::page::RevealFrame;
use crate::ui::components::SectionHeader;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: RevealFrame,
}

/// Renders the gallery section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let header = SectionHeader::new(ctx.i18n.tr("gallery-title"))
        .subtitle(ctx.i18n.tr("gallery-subtitle"))
        .view();

    let mut grid = Column::new().spacing(GALLERY_ROW_SPACING);
    let mut index = 0;
    while index < GALLERY_ITEM_COUNT {
        let mut row = Row::new().spacing(spacing::LG);
        for _ in 0..GALLERY_COLUMNS {
            if index < GALLERY_ITEM_COUNT {
                row = row.push(tile(&ctx, index));
                index += 1;
            }
        }
        grid = grid.push(row);
    }

    let content = Column::new().push(header).push(
        Container::new(grid)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_GALLERY_HEIGHT))
        .style(styles::container::section(false))
        .into()
}

fn tile<'a, Message: 'a>(ctx: &ViewContext<'_>, index: usize) -> Element<'a, Message> {
    let progress = ctx.frame.gallery[index];
    let caption = text(ctx.i18n.tr(&format!("gallery-item-{}", index + 1)))
        .size(typography::CAPTION)
        .style(super::faded_muted(progress));

    Container::new(
        Container::new(caption)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::SM),
    )
    .width(Length::Fixed(sizing::GALLERY_TILE_WIDTH))
    .height(Length::Fixed(GALLERY_ROW_HEIGHT))
    .style(styles::container::gallery_tile(progress))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_renders_mixed_progress() {
        let i18n = I18n::default();
        let mut frame = RevealFrame::default();
        frame.gallery = [0.0, 0.5, 1.0, 1.0];
        let _: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            frame,
        });
    }
}
