// SPDX-License-Identifier: MPL-2.0
//! Landing page domain logic, independent of any widget code.
//!
//! Everything in here is a pure state transition over three inputs: the
//! current scroll offset, the measured viewport size, and the clock. The
//! widget layer renders from these states and forwards user intent back as
//! plain method calls, which keeps the interactive contracts unit-testable
//! without a running event loop.
//!
//! The five components are deliberately independent of one another:
//!
//! - [`tracker`] - which section owns the side navigation highlight
//! - [`tabs`] - the pricing tab switcher
//! - [`fab`] - the floating action button state machine
//! - [`reveal`] - one-shot reveal transitions for content blocks
//! - [`parallax`] - the decorative hero offset/fade
//!
//! [`layout`] derives the page geometry they all read, and [`visibility`]
//! holds the geometric predicates that replace a host-provided
//! intersection observer.

pub mod fab;
pub mod layout;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod tabs;
pub mod tracker;
pub mod visibility;

pub use fab::{FabAction, FabMenu};
pub use layout::{PageLayout, RevealTarget};
pub use parallax::Parallax;
pub use reveal::{RevealAnimator, RevealFrame};
pub use scroll::ScrollAnimation;
pub use section::SectionId;
pub use tabs::{TabId, TabSwitcher};
pub use tracker::NavigationTracker;
pub use visibility::{CenterBand, RevealTrigger, Span};
