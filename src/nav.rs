//! Mobile navigation panel.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::effect::{Effect, Target};

/// Open/closed state of the nav panel.
///
/// While open, the toggle and the panel carry `active` and the body's
/// scrolling is locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavController {
    open: bool,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel open or closed.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        self.mirror()
    }

    /// A nav link was selected.
    pub fn link_selected(&mut self) -> Vec<Effect> {
        self.close()
    }

    /// A click landed somewhere on the document.
    ///
    /// Clicks on the toggle or inside the panel are handled elsewhere; any
    /// other click closes the panel.
    pub fn document_clicked(&mut self, on_toggle: bool, in_menu: bool) -> Vec<Effect> {
        if on_toggle || in_menu {
            return Vec::new();
        }
        self.close()
    }

    /// Close unconditionally. The page is rewritten even when already closed.
    pub fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        self.mirror()
    }

    fn mirror(&self) -> Vec<Effect> {
        if self.open {
            vec![
                Effect::AddClass { target: Target::NavToggle, class: "active" },
                Effect::AddClass { target: Target::NavMenu, class: "active" },
                Effect::style(Target::Body, "overflow", "hidden"),
            ]
        } else {
            vec![
                Effect::RemoveClass { target: Target::NavToggle, class: "active" },
                Effect::RemoveClass { target: Target::NavMenu, class: "active" },
                Effect::clear_style(Target::Body, "overflow"),
            ]
        }
    }
}
