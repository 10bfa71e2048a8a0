//! In-memory page model and a browser-free host.
//!
//! [`HeadlessPage`] applies effects to plain maps so the result of a
//! sequence of events can be inspected directly. [`HeadlessHost`] pairs it
//! with a [`Site`] and a [`Timeline`], standing in for the browser's event
//! loop: events are dispatched immediately and timer tasks run as virtual
//! time advances.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::contact::ContactSubmission;
use crate::effect::{Effect, Target, WatchGroup};
use crate::notify::{NotificationId, NotificationKind};
use crate::scroll::ScrollSnapshot;
use crate::site::{Event, Site};
use crate::storage::PreferenceStore;
use crate::timeline::Timeline;

/// A notification element currently on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedNotification {
    pub message: String,
    pub kind: NotificationKind,
}

/// A file the page offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    classes: HashMap<Target, BTreeSet<&'static str>>,
    styles: HashMap<(Target, &'static str), String>,
    attributes: HashMap<(Target, &'static str), String>,
    text: HashMap<Target, String>,
    disabled: HashSet<Target>,
    unobserved: HashSet<(WatchGroup, usize)>,
    notifications: BTreeMap<NotificationId, MountedNotification>,
    /// Current contact form field values.
    pub form: ContactSubmission,
    /// Last smooth-scroll destination.
    pub scroll_top: Option<f64>,
    pub downloads: Vec<Download>,
}

impl HeadlessPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(&mut self, effect: &Effect) {
        match effect {
            Effect::SetAttribute { target, name, value } => {
                self.attributes.insert((target.clone(), *name), value.clone());
            }
            Effect::AddClass { target, class } => {
                self.classes.entry(target.clone()).or_default().insert(*class);
            }
            Effect::RemoveClass { target, class } => {
                if let Some(set) = self.classes.get_mut(target) {
                    set.remove(class);
                }
            }
            Effect::SetStyle { target, property, value } => {
                if value.is_empty() {
                    self.styles.remove(&(target.clone(), *property));
                } else {
                    self.styles.insert((target.clone(), *property), value.clone());
                }
            }
            Effect::SetText { target, text } => {
                self.text.insert(target.clone(), text.clone());
            }
            Effect::SetDisabled { target, disabled } => {
                if *disabled {
                    self.disabled.insert(target.clone());
                } else {
                    self.disabled.remove(target);
                }
            }
            Effect::ResetForm => self.form = ContactSubmission::default(),
            Effect::Unobserve { group, index } => {
                self.unobserved.insert((*group, *index));
            }
            Effect::ScrollTo { top } => self.scroll_top = Some(*top),
            Effect::MountNotification { id, message, kind } => {
                self.notifications.insert(*id, MountedNotification { message: message.clone(), kind: *kind });
                self.styles.insert((Target::Notification(*id), "transform"), "translateX(400px)".to_owned());
            }
            Effect::RemoveNotification(id) => {
                self.notifications.remove(id);
                self.styles.retain(|(target, _), _| *target != Target::Notification(*id));
            }
            Effect::Download { filename, mime, content } => self.downloads.push(Download {
                filename: filename.clone(),
                mime: *mime,
                content: content.clone(),
            }),
            Effect::Schedule { .. } | Effect::Repeat { .. } | Effect::Cancel(_) => {}
        }
    }

    #[must_use]
    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes.get(target).is_some_and(|set| set.contains(class))
    }

    #[must_use]
    pub fn style(&self, target: &Target, property: &'static str) -> Option<&str> {
        self.styles.get(&(target.clone(), property)).map(String::as_str)
    }

    #[must_use]
    pub fn attribute(&self, target: &Target, name: &'static str) -> Option<&str> {
        self.attributes.get(&(target.clone(), name)).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, target: &Target) -> Option<&str> {
        self.text.get(target).map(String::as_str)
    }

    /// Seed an element's text, as the markup would.
    pub fn set_text(&mut self, target: Target, text: impl Into<String>) {
        self.text.insert(target, text.into());
    }

    #[must_use]
    pub fn is_disabled(&self, target: &Target) -> bool {
        self.disabled.contains(target)
    }

    #[must_use]
    pub fn is_unobserved(&self, group: WatchGroup, index: usize) -> bool {
        self.unobserved.contains(&(group, index))
    }

    /// Notifications on the page, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = (NotificationId, &MountedNotification)> {
        self.notifications.iter().map(|(id, note)| (*id, note))
    }

    /// Indices of testimonials currently carrying `active`.
    #[must_use]
    pub fn active_testimonials(&self) -> Vec<usize> {
        let mut active: Vec<usize> = self
            .classes
            .iter()
            .filter_map(|(target, set)| match target {
                Target::Testimonial(index) if set.contains("active") => Some(*index),
                _ => None,
            })
            .collect();
        active.sort_unstable();
        active
    }

    /// Section ids whose nav link currently carries `active`.
    #[must_use]
    pub fn active_nav_links(&self) -> Vec<&str> {
        let mut active: Vec<&str> = self
            .classes
            .iter()
            .filter_map(|(target, set)| match target {
                Target::NavLink(id) if set.contains("active") => Some(id.as_str()),
                _ => None,
            })
            .collect();
        active.sort_unstable();
        active
    }
}

/// A [`Site`] driven by an in-memory page and a virtual clock.
pub struct HeadlessHost<S> {
    pub site: Site<S>,
    pub page: HeadlessPage,
    pub timeline: Timeline,
}

impl<S: PreferenceStore> HeadlessHost<S> {
    #[must_use]
    pub fn new(site: Site<S>) -> Self {
        Self { site, page: HeadlessPage::new(), timeline: Timeline::new() }
    }

    pub fn start(&mut self, snapshot: &ScrollSnapshot) {
        let effects = self.site.start(snapshot);
        self.apply(&effects);
    }

    pub fn dispatch(&mut self, event: Event) {
        let effects = self.site.handle(event);
        self.apply(&effects);
    }

    /// Submit the contact form with whatever the page currently holds.
    pub fn submit_form(&mut self) {
        let submit_label = self.page.text(&Target::SubmitButton).unwrap_or_default().to_owned();
        let submission = self.page.form.clone();
        self.dispatch(Event::ContactSubmitted { submission, submit_label });
    }

    /// Advance virtual time by `ms`, running every task that comes due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timeline.now_ms() + ms;
        while let Some(task) = self.timeline.next_due(until) {
            let effects = self.site.run(task);
            self.apply(&effects);
        }
        self.timeline.settle(until);
    }

    fn apply(&mut self, effects: &[Effect]) {
        self.page.apply(effects);
        self.timeline.record(effects);
    }
}
