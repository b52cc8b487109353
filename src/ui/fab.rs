// SPDX-License-Identifier: MPL-2.0
//! Floating action button and its popup menu.
//!
//! The widget tree only renders the state owned by
//! [`FabMenu`](crate::page::FabMenu); opening, closing, and the
//! outside-click rule all live in the page domain.

use crate::i18n::fluent::I18n;
use crate::page::fab::{FAB_MENU_GAP, FAB_MENU_HEIGHT, FAB_MENU_WIDTH, FAB_SIZE};
use crate::page::FabAction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container};
use iced::{Element, Length};

/// Contextual data needed to render the FAB.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub open: bool,
}

/// Messages emitted by the FAB.
#[derive(Debug, Clone)]
pub enum Message {
    Toggled,
    Action(FabAction),
}

/// Renders the FAB column: the popup menu (while open) above the toggle.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(FAB_MENU_GAP)
        .align_x(Horizontal::Right);

    if ctx.open {
        let mut entries = Column::new().spacing(spacing::XS);
        for action in FabAction::ALL {
            entries = entries.push(
                button(text(ctx.i18n.tr(action.label_key())).size(typography::BODY))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::fab_entry)
                    .on_press(Message::Action(action)),
            );
        }

        column = column.push(
            Container::new(entries)
                .width(Length::Fixed(FAB_MENU_WIDTH))
                .height(Length::Fixed(FAB_MENU_HEIGHT))
                .padding(spacing::XS)
                .style(styles::container::fab_menu),
        );
    }

    // The glyph mirrors the state: a plus at rest, a cross while open.
    let glyph = if ctx.open { "\u{00D7}" } else { "+" };
    let toggle = button(
        Container::new(text(glyph).size(typography::TITLE_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(FAB_SIZE))
    .height(Length::Fixed(FAB_SIZE))
    .padding(0)
    .style(styles::button::fab_toggle(ctx.open))
    .on_press(Message::Toggled);

    column.push(toggle).into()
}
