// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the localized page content, the theme,
//! and the five interaction components, and translates messages into state
//! transitions or scroll tasks. This file intentionally keeps policy
//! decisions (window sizing, preference persistence, reduced-motion
//! behavior) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::page::{
    FabMenu, NavigationTracker, PageLayout, Parallax, RevealAnimator, ScrollAnimation,
    TabSwitcher,
};
use crate::ui::theming::AppTheme;
use iced::{Point, Size, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Widget id of the page scrollable, shared by the view and the scroll
/// tasks issued from `update`.
pub const PAGE_SCROLLABLE: &str = "landing-page";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    /// Collapse animations to jumps (config or `--reduce-motion`).
    reduce_motion: bool,
    /// Whether the decorative hero parallax runs at all.
    parallax_enabled: bool,
    /// Last reported window size; `None` until the runtime reports one.
    window_size: Option<Size>,
    /// Last known cursor position, for pointer presses that carry none.
    cursor: Point,
    /// Sanitized absolute scroll offset of the page scrollable.
    scroll_offset: f32,
    tracker: NavigationTracker,
    tabs: TabSwitcher,
    fab: FabMenu,
    reveal: RevealAnimator,
    parallax: Parallax,
    scroll_animation: Option<ScrollAnimation>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_section", &self.tracker.active())
            .field("scroll_offset", &self.scroll_offset)
            .field("fab_open", &self.fab.is_open())
            .finish()
    }
}

impl App {
    pub fn new(flags: Flags) -> (Self, iced::Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load configuration, using defaults: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let theme = AppTheme::new(config.theme_mode());
        let reduce_motion = flags.reduce_motion || config.reduce_motion();
        log::info!(
            "Starting landing page (theme: {}, reduce motion: {reduce_motion})",
            theme.mode
        );

        let app = Self {
            i18n,
            theme,
            reduce_motion,
            parallax_enabled: config.parallax(),
            window_size: None,
            cursor: Point::ORIGIN,
            scroll_offset: 0.0,
            tracker: NavigationTracker::new(),
            tabs: TabSwitcher::new(),
            fab: FabMenu::new(),
            reveal: RevealAnimator::new(reduce_motion),
            parallax: Parallax::new(),
            scroll_animation: None,
        };
        (app, iced::Task::none())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.to_iced_theme()
    }

    /// Viewport height used for layout before and after measurement.
    fn viewport_height(&self) -> f32 {
        self.window_size
            .map_or(WINDOW_DEFAULT_HEIGHT, |size| size.height)
    }

    /// Page layout for the current (or default) viewport.
    fn layout(&self) -> PageLayout {
        let size = self
            .window_size
            .unwrap_or(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));
        PageLayout::compute(size)
    }

    /// Whether the periodic animation tick subscription should be running.
    fn needs_tick(&self) -> bool {
        self.scroll_animation.is_some() || self.reveal.is_animating(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{FabAction, SectionId, TabId};
    use crate::ui::{fab, nav_rail, sections};
    use iced::Rectangle;
    use iced::widget::scrollable::AbsoluteOffset;

    fn measured_app() -> App {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::WindowMeasured(Size::new(1100.0, 800.0)));
        app
    }

    fn scrolled(offset: f32) -> Message {
        Message::PageScrolled {
            offset: AbsoluteOffset { x: 0.0, y: offset },
            bounds: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 1100.0,
                height: 800.0,
            },
        }
    }

    #[test]
    fn nav_press_before_measurement_is_a_no_op() {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::NavRail(nav_rail::Message::DotPressed(
            SectionId::Contact,
        )));
        assert!(app.scroll_animation.is_none());
    }

    #[test]
    fn nav_press_starts_a_scroll_animation() {
        let mut app = measured_app();
        app.reduce_motion = false;
        let _ = app.update(Message::NavRail(nav_rail::Message::DotPressed(
            SectionId::Gallery,
        )));
        let anim = app.scroll_animation.as_ref().expect("animation started");
        let expected = app.layout().section_span(SectionId::Gallery).top;
        assert!((anim.target() - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn scrolling_moves_the_navigation_highlight() {
        let mut app = measured_app();
        let courses_top = app.layout().section_span(SectionId::Courses).top;
        let _ = app.update(scrolled(courses_top));
        assert_eq!(app.tracker.active(), SectionId::Courses);
    }

    #[test]
    fn tab_messages_switch_the_panel() {
        let mut app = measured_app();
        let _ = app.update(Message::Courses(sections::courses::Message::TabSelected(
            TabId::InPerson,
        )));
        assert_eq!(app.tabs.active(), TabId::InPerson);
    }

    #[test]
    fn fab_toggle_and_outside_press_round_trip() {
        let mut app = measured_app();
        let _ = app.update(Message::Fab(fab::Message::Toggled));
        assert!(app.fab.is_open());

        // Press far away from the FAB corner.
        let _ = app.update(Message::CursorMoved(Point::new(50.0, 50.0)));
        let _ = app.update(Message::MousePressed);
        assert!(!app.fab.is_open());
    }

    #[test]
    fn fab_survives_presses_inside_its_corner() {
        let mut app = measured_app();
        let _ = app.update(Message::Fab(fab::Message::Toggled));
        let bounds =
            crate::page::fab::container_bounds(Size::new(1100.0, 800.0), true);
        let inside = Point::new(bounds.x + 5.0, bounds.y + 5.0);
        let _ = app.update(Message::CursorMoved(inside));
        let _ = app.update(Message::MousePressed);
        assert!(app.fab.is_open());
    }

    #[test]
    fn fab_action_closes_the_menu() {
        let mut app = measured_app();
        let _ = app.update(Message::Fab(fab::Message::Toggled));
        let before = app.theme.mode;
        let _ = app.update(Message::Fab(fab::Message::Action(FabAction::ToggleTheme)));
        assert!(!app.fab.is_open());
        assert_ne!(app.theme.mode, before);
    }

    #[test]
    fn tick_retires_a_finished_scroll_animation() {
        let mut app = measured_app();
        app.reduce_motion = false;
        let _ = app.update(Message::Hero(sections::hero::Message::BrowseCourses));
        assert!(app.scroll_animation.is_some());

        let finish = Instant::now() + crate::page::scroll::SCROLL_DURATION * 2;
        let _ = app.update(Message::Tick(finish));
        assert!(app.scroll_animation.is_none());
    }

    #[test]
    fn reduce_motion_scrolls_without_an_animation() {
        let mut app = measured_app();
        app.reduce_motion = true;
        let _ = app.update(Message::NavRail(nav_rail::Message::DotPressed(
            SectionId::Contact,
        )));
        assert!(app.scroll_animation.is_none());
    }

    #[test]
    fn view_renders_in_every_state() {
        let mut app = measured_app();
        let _ = app.view();
        let _ = app.update(Message::Fab(fab::Message::Toggled));
        let _ = app.update(scrolled(2000.0));
        let _ = app.view();
    }
}
