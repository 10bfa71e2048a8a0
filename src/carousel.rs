//! Testimonial carousel.
//!
//! Exactly one item carries `active` at any time, or none when there are no
//! items. Every transition deactivates the previous item and activates the
//! next one in the same effect batch, so the host never renders a state with
//! zero or two active items.
//!
//! Automatic advancement runs on its own fixed schedule. Manual `next`/`prev`
//! do not reset it.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::effect::{Effect, Target, Task};

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    interval_ms: u32,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize, interval_ms: u32) -> Self {
        Self { len, current: 0, interval_ms }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active item, or `None` for an empty carousel.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Mark the first item active and start the auto-advance timer.
    ///
    /// Any `active` class the markup shipped with is cleared first. An
    /// interval of zero disables auto-advance.
    #[must_use]
    pub fn initialize(&self) -> Vec<Effect> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = (0..self.len)
            .filter(|&index| index != self.current)
            .map(|index| Effect::RemoveClass { target: Target::Testimonial(index), class: "active" })
            .collect();
        effects.push(Effect::AddClass { target: Target::Testimonial(self.current), class: "active" });
        if self.interval_ms == 0 {
            log::debug!("carousel auto-advance disabled");
        } else {
            effects.push(Effect::Repeat { task: Task::CarouselAdvance, interval_ms: self.interval_ms });
        }
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if self.is_empty() {
            return Vec::new();
        }
        self.show((self.current + 1) % self.len)
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        if self.is_empty() {
            return Vec::new();
        }
        self.show((self.current + self.len - 1) % self.len)
    }

    /// Timer tick; identical to a manual `next`.
    pub fn auto_advance(&mut self) -> Vec<Effect> {
        self.next()
    }

    fn show(&mut self, index: usize) -> Vec<Effect> {
        let previous = self.current;
        self.current = index;
        log::debug!("carousel {previous} -> {index}");
        if previous == index {
            return vec![Effect::AddClass { target: Target::Testimonial(index), class: "active" }];
        }
        vec![
            Effect::RemoveClass { target: Target::Testimonial(previous), class: "active" },
            Effect::AddClass { target: Target::Testimonial(index), class: "active" },
        ]
    }
}
