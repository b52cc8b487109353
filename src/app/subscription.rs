// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw pointer and window events feed the outside-click rule and the
//! layout; the animation tick is only installed while a scroll animation
//! or a reveal ramp is actually running.

use super::{App, Message};
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Message::MousePressed)
            }
            Event::Window(window::Event::Opened { size, .. }) => {
                Some(Message::WindowMeasured(size))
            }
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowMeasured(size)),
            _ => None,
        });

        let ticks = if self.needs_tick() {
            time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, ticks])
    }
}
