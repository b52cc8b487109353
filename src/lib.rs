// SPDX-License-Identifier: MPL-2.0
//! `iced_landing` renders the FOR YOU marketing landing page as a native
//! desktop application built with the Iced GUI framework.
//!
//! The page is a single scrollable surface with five sections (hero,
//! features, gallery, courses, contact). Every interactive behavior —
//! scroll-synced side navigation, the pricing tab switcher, the floating
//! action menu, scroll-triggered reveal animations, and the hero parallax —
//! is derived from three inputs delivered by the runtime: scroll viewport
//! updates, pointer events, and periodic animation ticks.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
