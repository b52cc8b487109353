// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every scroll update runs the three observers (navigation tracker,
//! reveal scan, parallax) against the same scroll snapshot; they stay
//! independent of one another, matching the page's original behavior.

use super::{App, Message, PAGE_SCROLLABLE};
use crate::config;
use crate::page::fab::{self, FabAction};
use crate::page::{PageLayout, ScrollAnimation, SectionId};
use crate::ui::{fab as fab_ui, nav_rail, sections};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::{Rectangle, Task};
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageScrolled { offset, bounds } => {
                self.handle_scrolled(offset, bounds);
                Task::none()
            }
            Message::NavRail(nav_rail::Message::DotPressed(section)) => {
                self.start_scroll_to(section)
            }
            Message::Hero(sections::hero::Message::BrowseCourses) => {
                self.start_scroll_to(SectionId::Courses)
            }
            Message::Courses(sections::courses::Message::TabSelected(tab)) => {
                self.tabs.select(tab);
                Task::none()
            }
            Message::Fab(fab_ui::Message::Toggled) => {
                self.fab.toggle();
                Task::none()
            }
            Message::Fab(fab_ui::Message::Action(action)) => self.run_fab_action(action),
            Message::CursorMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::MousePressed => {
                let container = self
                    .window_size
                    .map(|size| fab::container_bounds(size, self.fab.is_open()));
                self.fab.close_on_outside_click(self.cursor, container);
                Task::none()
            }
            Message::WindowMeasured(size) => {
                self.window_size = Some(size);
                Task::none()
            }
            Message::Tick(now) => self.advance_animations(now),
        }
    }

    /// Runs the scroll-driven observers against one snapshot.
    fn handle_scrolled(&mut self, offset: AbsoluteOffset, bounds: Rectangle) {
        self.scroll_offset = sanitize(offset.y);
        let viewport_height = if bounds.height.is_finite() && bounds.height > 0.0 {
            bounds.height
        } else {
            self.viewport_height()
        };

        let layout = self.layout();
        self.tracker
            .observe(&layout, self.scroll_offset, viewport_height);
        self.reveal
            .observe(&layout, self.scroll_offset, viewport_height, Instant::now());
        if self.parallax_enabled && !self.reduce_motion {
            self.parallax.observe(self.scroll_offset, viewport_height);
        }
    }

    /// Requests a scroll to the top of a section. Without a measured
    /// window there is no reliable target yet, and the request is dropped.
    fn start_scroll_to(&mut self, section: SectionId) -> Task<Message> {
        let Some(size) = self.window_size else {
            log::debug!(
                "Ignoring scroll request to '{}': window not measured yet",
                section.anchor()
            );
            return Task::none();
        };

        let layout = PageLayout::compute(size);
        let target = layout
            .section_span(section)
            .top
            .min(layout.max_scroll(size.height));

        if self.reduce_motion {
            self.scroll_animation = None;
            return snap_to(target);
        }

        self.scroll_animation = Some(ScrollAnimation::new(
            self.scroll_offset,
            target,
            Instant::now(),
        ));
        Task::none()
    }

    fn run_fab_action(&mut self, action: FabAction) -> Task<Message> {
        self.fab.close();
        match action {
            FabAction::Contact => self.start_scroll_to(SectionId::Contact),
            FabAction::ToggleTheme => {
                self.theme.cycle();
                self.persist_preferences();
                Task::none()
            }
            FabAction::SwitchLanguage => {
                self.i18n.cycle_locale();
                self.persist_preferences();
                Task::none()
            }
        }
    }

    /// Drives the in-flight scroll animation. Reveal ramps sample the
    /// clock directly; the tick only has to trigger redraws for them.
    fn advance_animations(&mut self, now: Instant) -> Task<Message> {
        let Some(animation) = &self.scroll_animation else {
            return Task::none();
        };
        let offset = animation.sample(now);
        if animation.is_finished(now) {
            self.scroll_animation = None;
        }
        snap_to(offset)
    }

    fn persist_preferences(&self) {
        let mut config = config::load().unwrap_or_default();
        config.theme_mode = Some(self.theme.mode);
        config.language = Some(self.i18n.current_locale().to_string());
        if let Err(err) = config::save(&config) {
            log::warn!("Failed to save preferences: {err}");
        }
    }
}

fn snap_to(offset: f32) -> Task<Message> {
    scrollable::scroll_to(
        scrollable::Id::new(PAGE_SCROLLABLE),
        AbsoluteOffset { x: 0.0, y: offset },
    )
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
