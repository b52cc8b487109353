// SPDX-License-Identifier: MPL-2.0
//! Floating action button state machine.
//!
//! Two states: Closed (initial) and Open. The toggle flips the state; a
//! pointer press outside the FAB's container closes it. Until the window
//! has been measured there is no container rectangle, and the outside-click
//! rule stays inert.

use iced::{Point, Rectangle, Size};

/// Diameter of the round toggle button.
pub const FAB_SIZE: f32 = 56.0;
/// Distance between the FAB and the window's bottom/right edges.
pub const FAB_MARGIN: f32 = 28.0;
/// Width of the popup menu panel.
pub const FAB_MENU_WIDTH: f32 = 220.0;
/// Height of the popup menu panel (three entries plus padding).
pub const FAB_MENU_HEIGHT: f32 = 168.0;
/// Gap between the menu panel and the toggle.
pub const FAB_MENU_GAP: f32 = 12.0;

/// Entries of the popup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabAction {
    /// Smooth-scroll to the contact section.
    Contact,
    /// Cycle light / dark / system.
    ToggleTheme,
    /// Cycle through the shipped locales.
    SwitchLanguage,
}

impl FabAction {
    pub const ALL: [FabAction; 3] = [
        FabAction::Contact,
        FabAction::ToggleTheme,
        FabAction::SwitchLanguage,
    ];

    /// Translation key for the menu entry label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FabAction::Contact => "fab-contact",
            FabAction::ToggleTheme => "fab-theme",
            FabAction::SwitchLanguage => "fab-language",
        }
    }
}

/// The region of the window owned by the FAB: the toggle itself, plus the
/// popup menu above it while open. Pointer presses inside this rectangle
/// never close the menu.
#[must_use]
pub fn container_bounds(window: Size, open: bool) -> Rectangle {
    let toggle = Rectangle {
        x: window.width - FAB_MARGIN - FAB_SIZE,
        y: window.height - FAB_MARGIN - FAB_SIZE,
        width: FAB_SIZE,
        height: FAB_SIZE,
    };
    if !open {
        return toggle;
    }
    // Union with the menu panel, anchored to the window's right edge.
    let menu_top = toggle.y - FAB_MENU_GAP - FAB_MENU_HEIGHT;
    Rectangle {
        x: window.width - FAB_MARGIN - FAB_MENU_WIDTH,
        y: menu_top,
        width: FAB_MENU_WIDTH,
        height: window.height - FAB_MARGIN - menu_top,
    }
}

#[derive(Debug, Clone, Default)]
pub struct FabMenu {
    open: bool,
}

impl FabMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        log::debug!("FAB menu {}", if self.open { "opened" } else { "closed" });
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Applies the outside-click rule. `container` is `None` while the
    /// window is unmeasured, which leaves the component inert. Returns
    /// whether the menu was closed by this press.
    pub fn close_on_outside_click(
        &mut self,
        press: Point,
        container: Option<Rectangle>,
    ) -> bool {
        if !self.open {
            return false;
        }
        let Some(container) = container else {
            return false;
        };
        if container.contains(press) {
            return false;
        }
        self.open = false;
        log::debug!("FAB menu closed by outside press");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size {
        width: 1100.0,
        height: 800.0,
    };

    fn outside_point() -> Point {
        Point::new(100.0, 100.0)
    }

    fn toggle_center() -> Point {
        let r = container_bounds(WINDOW, false);
        Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    #[test]
    fn starts_closed() {
        assert!(!FabMenu::new().is_open());
    }

    #[test]
    fn toggle_flips_between_open_and_closed() {
        let mut fab = FabMenu::new();
        assert!(fab.toggle());
        assert!(fab.is_open());
        assert!(!fab.toggle());
        assert!(!fab.is_open());
    }

    #[test]
    fn outside_press_closes_an_open_menu() {
        let mut fab = FabMenu::new();
        fab.toggle();
        let closed = fab.close_on_outside_click(
            outside_point(),
            Some(container_bounds(WINDOW, true)),
        );
        assert!(closed);
        assert!(!fab.is_open());
    }

    #[test]
    fn press_inside_the_container_leaves_it_open() {
        let mut fab = FabMenu::new();
        fab.toggle();
        let closed = fab.close_on_outside_click(
            toggle_center(),
            Some(container_bounds(WINDOW, true)),
        );
        assert!(!closed);
        assert!(fab.is_open());
    }

    #[test]
    fn press_on_the_open_menu_panel_leaves_it_open() {
        let mut fab = FabMenu::new();
        fab.toggle();
        let bounds = container_bounds(WINDOW, true);
        let on_menu = Point::new(bounds.x + 10.0, bounds.y + 10.0);
        assert!(!fab.close_on_outside_click(on_menu, Some(bounds)));
        assert!(fab.is_open());
    }

    #[test]
    fn closed_menu_ignores_outside_presses() {
        let mut fab = FabMenu::new();
        let closed = fab.close_on_outside_click(
            outside_point(),
            Some(container_bounds(WINDOW, false)),
        );
        assert!(!closed);
        assert!(!fab.is_open());
    }

    #[test]
    fn unmeasured_window_leaves_the_rule_inert() {
        let mut fab = FabMenu::new();
        fab.toggle();
        assert!(!fab.close_on_outside_click(outside_point(), None));
        assert!(fab.is_open());
    }

    #[test]
    fn open_container_covers_the_menu_panel() {
        let closed = container_bounds(WINDOW, false);
        let open = container_bounds(WINDOW, true);
        assert!(open.height > closed.height);
        assert!(open.width >= FAB_MENU_WIDTH);
        // The toggle stays inside the open container.
        assert!(open.contains(toggle_center()));
    }
}
