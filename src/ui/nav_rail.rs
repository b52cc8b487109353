// SPDX-License-Identifier: MPL-2.0
//! Scroll-synced side navigation rail.
//!
//! One dot per section, stacked vertically along the right edge. The dot
//! of the section currently holding the viewport's center band is filled;
//! pressing a dot asks the shell to smooth-scroll to that section.

use crate::i18n::fluent::I18n;
use crate::page::SectionId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, tooltip, Column};
use iced::{Element, Length};

/// Contextual data needed to render the rail.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: SectionId,
}

/// Messages emitted by the rail.
#[derive(Debug, Clone)]
pub enum Message {
    DotPressed(SectionId),
}

/// Renders the dot column.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fixed(sizing::NAV_RAIL_WIDTH));

    for section in SectionId::ALL {
        let active = section == ctx.active;
        let diameter = if active {
            sizing::NAV_DOT_ACTIVE
        } else {
            sizing::NAV_DOT
        };

        let dot = button(text(""))
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .padding(0)
            .style(styles::button::nav_dot(active))
            .on_press(Message::DotPressed(section));

        let label = text(ctx.i18n.tr(section.label_key())).size(typography::CAPTION);
        column = column.push(tooltip(dot, label, tooltip::Position::Left));
    }

    column.into()
}
