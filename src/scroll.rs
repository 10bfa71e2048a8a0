//! Scroll-driven styling and in-page anchor scrolling.
//!
//! Everything here is re-derived from the current scroll position on each
//! event. The only remembered values are the last header state and the last
//! highlighted section, kept so unchanged frames produce no effects.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::effect::{Effect, Target};

/// Vertical extent of a `section[id]` in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Scroll position and current section layout at the time of an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub sections: Vec<SectionBounds>,
}

/// Layout of an in-page anchor's destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTarget {
    /// `offsetTop` of the destination element.
    pub offset_top: f64,
    /// Height of the fixed header covering the top of the viewport.
    pub header_height: f64,
}

impl AnchorTarget {
    /// Scroll offset that puts the destination just below the header.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.offset_top - self.header_height
    }
}

/// Section that should be highlighted for a (header-adjusted) position.
///
/// Sections are checked in document order and the last one containing the
/// position wins, which only matters for overlapping layouts.
#[must_use]
pub fn active_section(sections: &[SectionBounds], position: f64) -> Option<&str> {
    sections.iter().rev().find(|s| s.contains(position)).map(|s| s.id.as_str())
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: ScrollConfig,
    /// Section ids that have a matching `.nav-link`.
    nav_links: Vec<String>,
    header_scrolled: Option<bool>,
    active: Option<String>,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(config: ScrollConfig, nav_links: Vec<String>) -> Self {
        Self { config, nav_links, header_scrolled: None, active: None }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn header_scrolled(&self) -> bool {
        self.header_scrolled.unwrap_or(false)
    }

    /// React to a scroll event: header style and nav highlighting.
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Vec<Effect> {
        let mut effects = self.update_header(snapshot.scroll_y);
        effects.extend(self.update_active_nav(snapshot));
        effects
    }

    /// Toggle `scrolled` on the header once the page leaves the top.
    pub fn update_header(&mut self, scroll_y: f64) -> Vec<Effect> {
        let scrolled = scroll_y > self.config.header_threshold_px;
        if self.header_scrolled == Some(scrolled) {
            return Vec::new();
        }
        self.header_scrolled = Some(scrolled);
        if scrolled {
            vec![Effect::AddClass { target: Target::Header, class: "scrolled" }]
        } else {
            vec![Effect::RemoveClass { target: Target::Header, class: "scrolled" }]
        }
    }

    /// Highlight the nav link of the section under the adjusted scroll position.
    ///
    /// When no section contains the position the previous highlight stays.
    pub fn update_active_nav(&mut self, snapshot: &ScrollSnapshot) -> Vec<Effect> {
        let position = snapshot.scroll_y + self.config.active_offset_px;
        let Some(id) = active_section(&snapshot.sections, position) else {
            return Vec::new();
        };
        if self.active.as_deref() == Some(id) {
            return Vec::new();
        }
        log::debug!("active section -> {id}");

        let mut effects: Vec<Effect> = self
            .nav_links
            .iter()
            .filter(|link| link.as_str() != id)
            .map(|link| Effect::RemoveClass { target: Target::NavLink(link.clone()), class: "active" })
            .collect();
        if self.nav_links.iter().any(|link| link == id) {
            effects.push(Effect::AddClass { target: Target::NavLink(id.to_owned()), class: "active" });
        }
        self.active = Some(id.to_owned());
        effects
    }

    /// Smooth-scroll to an anchor's destination. Missing destinations are ignored.
    #[must_use]
    pub fn scroll_to_anchor(&self, target: Option<AnchorTarget>) -> Vec<Effect> {
        match target {
            Some(target) => vec![Effect::ScrollTo { top: target.scroll_top() }],
            None => Vec::new(),
        }
    }
}
