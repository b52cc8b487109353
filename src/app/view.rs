// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections; the navigation rail and
//! the FAB are layered on top of it with a `stack`, anchored to the right
//! edge. Their geometry mirrors the constants the interaction logic uses
//! for hit-testing.

use super::{App, Message, PAGE_SCROLLABLE};
use crate::page::fab::FAB_MARGIN;
use crate::page::SectionId;
use crate::ui::design_tokens::spacing;
use crate::ui::{fab as fab_ui, nav_rail, sections};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Id, Scrollable, Viewport};
use iced::widget::{stack, Column, Container};
use iced::{Element, Length, Padding};
use std::time::Instant;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let frame = self.reveal.frame(Instant::now());
        // Same floor the layout applies, so spans and widgets agree.
        let hero_height = self.layout().section_span(SectionId::Hero).height;

        let page = Column::new()
            .push(
                sections::hero::view(sections::hero::ViewContext {
                    i18n: &self.i18n,
                    parallax: &self.parallax,
                    height: hero_height,
                })
                .map(Message::Hero),
            )
            .push(sections::features::view(sections::features::ViewContext {
                i18n: &self.i18n,
                frame,
            }))
            .push(sections::gallery::view(sections::gallery::ViewContext {
                i18n: &self.i18n,
                frame,
            }))
            .push(
                sections::courses::view(sections::courses::ViewContext {
                    i18n: &self.i18n,
                    tabs: &self.tabs,
                    frame,
                })
                .map(Message::Courses),
            )
            .push(sections::contact::view(sections::contact::ViewContext {
                i18n: &self.i18n,
                frame,
            }));

        let page = Scrollable::new(page)
            .id(Id::new(PAGE_SCROLLABLE))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::PageScrolled {
                offset: viewport.absolute_offset(),
                bounds: viewport.bounds(),
            });

        let rail = Container::new(
            nav_rail::view(nav_rail::ViewContext {
                i18n: &self.i18n,
                active: self.tracker.active(),
            })
            .map(Message::NavRail),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(Padding {
            right: spacing::MD,
            ..Padding::ZERO
        });

        let fab = Container::new(
            fab_ui::view(fab_ui::ViewContext {
                i18n: &self.i18n,
                open: self.fab.is_open(),
            })
            .map(Message::Fab),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(FAB_MARGIN);

        stack![page, rail, fab].into()
    }
}
