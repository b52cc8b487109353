// SPDX-License-Identifier: MPL-2.0
//! Courses section: the pricing tab strip and one visible panel.
//!
//! Both panels render into the same three row slots, so a row's reveal
//! state carries across tab switches.

use crate::i18n::fluent::I18n;
use crate::page::layout::{
    COURSE_ROW_COUNT, COURSE_ROW_HEIGHT, COURSE_ROW_SPACING, COURSE_TAB_STRIP_HEIGHT,
    SECTION_COURSES_HEIGHT,
};
use crate::page::{RevealFrame, TabId, TabSwitcher};
use crate::ui::components::SectionHeader;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Contextual data needed to render the courses section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tabs: &'a TabSwitcher,
    pub frame: RevealFrame,
}

/// Messages emitted by the courses section.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(TabId),
}

/// Renders the courses section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = SectionHeader::new(ctx.i18n.tr("courses-title"))
        .subtitle(ctx.i18n.tr("courses-subtitle"))
        .view();

    let mut strip = Row::new().spacing(spacing::SM);
    for tab in TabId::ALL {
        strip = strip.push(
            button(text(ctx.i18n.tr(tab.label_key())).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::tab(ctx.tabs.is_active(tab)))
                .on_press(Message::TabSelected(tab)),
        );
    }
    let strip = Container::new(strip)
        .width(Length::Fill)
        .height(Length::Fixed(COURSE_TAB_STRIP_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut rows = Column::new().spacing(COURSE_ROW_SPACING);
    for i in 0..COURSE_ROW_COUNT {
        rows = rows.push(row(&ctx, i));
    }

    let content = Column::new().push(header).push(strip).push(
        Container::new(rows)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_COURSES_HEIGHT))
        .style(styles::container::section(true))
        .into()
}

fn row<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let progress = ctx.frame.courses[index];
    let prefix = format!("course-{}-{}", panel_key(ctx.tabs.active()), index + 1);

    let titles = Column::new()
        .spacing(spacing::XS / 2.0)
        .push(
            text(ctx.i18n.tr(&format!("{prefix}-title")))
                .size(typography::TITLE_SM)
                .style(super::faded(progress)),
        )
        .push(
            text(ctx.i18n.tr(&format!("{prefix}-detail")))
                .size(typography::CAPTION)
                .style(super::faded_muted(progress)),
        );

    let price = text(ctx.i18n.tr(&format!("{prefix}-price")))
        .size(typography::TITLE_MD)
        .style(super::faded(progress));

    let body = Row::new()
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(titles)
        .push(Space::with_width(Length::Fill))
        .push(price);

    Container::new(body)
        .width(Length::Fixed(sizing::COURSE_PANEL_WIDTH))
        .height(Length::Fixed(COURSE_ROW_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::card(progress))
        .into()
}

fn panel_key(tab: TabId) -> &'static str {
    match tab {
        TabId::Online => "online",
        TabId::InPerson => "inperson",
    }
}
