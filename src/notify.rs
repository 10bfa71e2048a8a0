//! Transient notifications.
//!
//! Each call to [`NotificationService::notify`] creates an independent
//! element with its own lifecycle: mounted off-screen, slid in, held, slid
//! out, removed. Notifications do not queue or coordinate; several at once
//! simply stack in paint order.
//!
//! The default flow never cancels anything. [`NotificationService::dismiss`]
//! is the explicit cancel path for callers that want to cut one short.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::collections::HashMap;

use crate::config::NotifyConfig;
use crate::effect::{Effect, Target, Task};

const OFFSCREEN: &str = "translateX(400px)";
const ONSCREEN: &str = "translateX(0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Class list for the notification element.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Background gradient distinguishing the kinds.
    #[must_use]
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #667eea, #764ba2)",
            Self::Error => "linear-gradient(135deg, #f093fb, #f5576c)",
            Self::Info => "linear-gradient(135deg, #4facfe, #00f2fe)",
        }
    }

    /// Full inline style for a freshly mounted, still off-screen notification.
    #[must_use]
    pub fn css_text(self, transition_ms: u32) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 15px 25px; border-radius: 10px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2); \
             z-index: 10000; transform: {OFFSCREEN}; transition: transform {}s ease; \
             font-weight: 500; max-width: 300px;",
            self.gradient(),
            f64::from(transition_ms) / 1000.0,
        )
    }
}

/// Where a live notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting to slide in.
    Mounted,
    /// Visible.
    Shown,
    /// Sliding out, waiting to be removed.
    Leaving,
}

#[derive(Debug, Clone)]
pub struct NotificationService {
    config: NotifyConfig,
    next_id: u64,
    live: HashMap<NotificationId, Phase>,
}

impl NotificationService {
    #[must_use]
    pub fn new(config: NotifyConfig) -> Self {
        Self { config, next_id: 0, live: HashMap::new() }
    }

    #[must_use]
    pub fn config(&self) -> NotifyConfig {
        self.config
    }

    /// Number of notifications currently on the page.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.live.get(&id).copied()
    }

    /// Show `message` and schedule its whole lifecycle.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Vec<Effect> {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, Phase::Mounted);
        let message = message.into();
        log::debug!("notification {} ({}): {message}", id.0, kind.as_str());

        vec![
            Effect::MountNotification { id, message, kind },
            Effect::Schedule { task: Task::NotificationEnter(id), delay_ms: self.config.enter_delay_ms },
            Effect::Schedule { task: Task::NotificationExit(id), delay_ms: self.config.hold_ms },
        ]
    }

    /// Slide a mounted notification into view.
    pub fn enter(&mut self, id: NotificationId) -> Vec<Effect> {
        let Some(phase) = self.live.get_mut(&id) else {
            return Vec::new();
        };
        if *phase != Phase::Mounted {
            return Vec::new();
        }
        *phase = Phase::Shown;
        vec![Effect::style(Target::Notification(id), "transform", ONSCREEN)]
    }

    /// Slide a notification out and schedule its removal.
    ///
    /// A notification whose enter step has not run yet still leaves normally.
    pub fn exit(&mut self, id: NotificationId) -> Vec<Effect> {
        let Some(phase) = self.live.get_mut(&id) else {
            return Vec::new();
        };
        if *phase == Phase::Leaving {
            return Vec::new();
        }
        *phase = Phase::Leaving;
        vec![
            Effect::style(Target::Notification(id), "transform", OFFSCREEN),
            Effect::Schedule { task: Task::NotificationRemove(id), delay_ms: self.config.transition_ms },
        ]
    }

    /// Take a notification off the page.
    pub fn remove(&mut self, id: NotificationId) -> Vec<Effect> {
        if self.live.remove(&id).is_some() {
            vec![Effect::RemoveNotification(id)]
        } else {
            Vec::new()
        }
    }

    /// Cut a notification short: cancel its pending steps and start leaving now.
    pub fn dismiss(&mut self, id: NotificationId) -> Vec<Effect> {
        if !self.live.contains_key(&id) {
            return Vec::new();
        }
        let mut effects = vec![Effect::Cancel(Task::NotificationEnter(id)), Effect::Cancel(Task::NotificationExit(id))];
        effects.extend(self.exit(id));
        effects
    }
}
