// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module organizes all widget code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`sections`] - the five page sections (hero, features, gallery,
//!   courses, contact)
//! - [`nav_rail`] - the scroll-synced side navigation dots
//! - [`fab`] - the floating action button and its popup menu
//!
//! # Shared infrastructure
//!
//! - [`components`] - reusable UI components (section headers)
//! - [`styles`] - centralized styling (buttons, containers)
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod fab;
pub mod nav_rail;
pub mod sections;
pub mod styles;
pub mod theming;
