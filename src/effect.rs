//! Effects returned by controllers for the host to apply.
//!
//! Controllers never touch the page directly. They name the element they
//! want changed with a [`Target`] and describe the change as an [`Effect`].
//! Delayed work is expressed as a [`Task`] that the host runs back through
//! [`crate::site::Site::run`] once its timer fires.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use crate::notify::{NotificationId, NotificationKind};

/// Which set of one-shot observed elements a watched target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchGroup {
    /// Section blocks that fade and slide in.
    Reveal,
    /// Skill progress bars that grow to their target width.
    SkillBar,
    /// Images whose real `src` is deferred until visible.
    LazyImage,
}

/// An element the host resolves from its own lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// The `<body>` element.
    Body,
    /// The page header.
    Header,
    ThemeToggle,
    NavToggle,
    NavMenu,
    /// The `.nav-link` pointing at the section with this id.
    NavLink(String),
    /// The `index`-th element of a watched group, in document order.
    Watched { group: WatchGroup, index: usize },
    /// The `index`-th testimonial item.
    Testimonial(usize),
    ContactForm,
    SubmitButton,
    Notification(NotificationId),
}

/// A continuation scheduled on a timer.
///
/// Each task identifies its own timer: scheduling a task that is still
/// pending replaces the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Return the theme toggle to its neutral rotation.
    ThemeSpinReset,
    /// Advance the testimonial carousel.
    CarouselAdvance,
    /// Finish the simulated contact form round-trip.
    SubmitComplete,
    /// Slide a notification into view.
    NotificationEnter(NotificationId),
    /// Slide a notification out of view.
    NotificationExit(NotificationId),
    /// Remove a notification from the page.
    NotificationRemove(NotificationId),
}

/// A single page mutation or timer request.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetAttribute { target: Target, name: &'static str, value: String },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Set an inline style property. An empty value removes the property.
    SetStyle { target: Target, property: &'static str, value: String },
    SetText { target: Target, text: String },
    SetDisabled { target: Target, disabled: bool },
    /// Clear every field of the contact form.
    ResetForm,
    /// Stop observing a watched element.
    Unobserve { group: WatchGroup, index: usize },
    /// Smooth-scroll the window to this vertical offset.
    ScrollTo { top: f64 },
    /// Create a notification element and append it to the page.
    MountNotification { id: NotificationId, message: String, kind: NotificationKind },
    /// Remove a notification element from the page.
    RemoveNotification(NotificationId),
    /// Offer a generated file to the user.
    Download { filename: String, mime: &'static str, content: String },
    /// Run `task` once after `delay_ms`.
    Schedule { task: Task, delay_ms: u32 },
    /// Run `task` every `interval_ms` until cancelled.
    Repeat { task: Task, interval_ms: u32 },
    /// Drop a pending [`Effect::Schedule`] or [`Effect::Repeat`].
    Cancel(Task),
}

impl Effect {
    #[must_use]
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    #[must_use]
    pub fn clear_style(target: Target, property: &'static str) -> Self {
        Self::SetStyle { target, property, value: String::new() }
    }

    /// Whether this effect is a timer request rather than a page mutation.
    #[must_use]
    pub fn is_timer(&self) -> bool {
        matches!(self, Self::Schedule { .. } | Self::Repeat { .. } | Self::Cancel(_))
    }
}
