// SPDX-License-Identifier: MPL-2.0
//! Pricing tab switcher for the courses section.
//!
//! Exactly one pricing panel is visible at a time. The tab set is a closed
//! enum, so a tab without a matching panel cannot exist; selecting the
//! already-active tab is a no-op.

/// The two pricing panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Online,
    InPerson,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Online, TabId::InPerson];

    /// Stable identifier of the panel this tab controls.
    #[must_use]
    pub fn panel_id(self) -> &'static str {
        match self {
            TabId::Online => "courses-online",
            TabId::InPerson => "courses-inperson",
        }
    }

    /// Translation key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TabId::Online => "tab-online",
            TabId::InPerson => "tab-inperson",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabSwitcher {
    active: TabId,
}

impl Default for TabSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TabSwitcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: TabId::Online,
        }
    }

    #[must_use]
    pub fn active(&self) -> TabId {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, id: TabId) -> bool {
        self.active == id
    }

    /// Activates the given tab. Returns whether the selection changed.
    pub fn select(&mut self, id: TabId) -> bool {
        if self.active == id {
            return false;
        }
        log::debug!("Pricing tab: {} -> {}", self.active.panel_id(), id.panel_id());
        self.active = id;
        true
    }
}
