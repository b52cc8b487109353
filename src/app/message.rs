// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{fab, nav_rail, sections};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page scrollable reported a new viewport.
    PageScrolled {
        offset: AbsoluteOffset,
        bounds: Rectangle,
    },
    NavRail(nav_rail::Message),
    Hero(sections::hero::Message),
    Courses(sections::courses::Message),
    Fab(fab::Message),
    /// Pointer moved; presses carry no position, so the shell tracks it.
    CursorMoved(Point),
    /// Primary pointer button pressed anywhere in the window.
    MousePressed,
    /// The window was opened or resized.
    WindowMeasured(Size),
    /// Periodic animation tick while something is in flight.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Skip animations regardless of the configured preference.
    pub reduce_motion: bool,
}
