// SPDX-License-Identifier: MPL-2.0
//! Scroll-synced side navigation state.
//!
//! Exactly one navigation indicator is active at any time: the one for the
//! topmost section whose extent intersects the viewport's center band.

use super::layout::PageLayout;
use super::section::SectionId;
use super::visibility::CenterBand;

#[derive(Debug, Clone)]
pub struct NavigationTracker {
    active: SectionId,
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: SectionId::Hero,
        }
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == id
    }

    /// Recomputes the active section from the current scroll position.
    /// Returns whether the active section changed. When no section
    /// intersects the band the previous choice is kept.
    pub fn observe(&mut self, layout: &PageLayout, scroll_y: f32, viewport_height: f32) -> bool {
        let band = CenterBand::at(scroll_y, viewport_height);
        let Some(current) = layout.section_at(&band) else {
            return false;
        };
        if current == self.active {
            return false;
        }
        log::debug!("Active section: {} -> {}", self.active.anchor(), current.anchor());
        self.active = current;
        true
    }
}
