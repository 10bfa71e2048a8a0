//! Light/dark theme with a persisted preference.
//!
//! The active theme is mirrored as `data-theme` on the `<html>` element and
//! written to the preference store on every change. A store that cannot be
//! read or written is ignored: the theme keeps working from memory for the
//! rest of the page's life.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::effect::{Effect, Target, Task};
use crate::storage::PreferenceStore;

/// Attribute on the root element that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized reads as `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub struct ThemeController<S> {
    theme: Theme,
    store: S,
    config: ThemeConfig,
}

impl<S: PreferenceStore> ThemeController<S> {
    #[must_use]
    pub fn new(store: S, config: ThemeConfig) -> Self {
        Self { theme: Theme::default(), store, config }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored preference and apply it to the root element.
    pub fn initialize(&mut self) -> Vec<Effect> {
        self.theme = match self.store.get(&self.config.storage_key) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::debug!("theme preference unreadable, using default: {err}");
                Theme::default()
            }
        };
        vec![self.apply()]
    }

    /// Flip the theme, persist it, and spin the toggle control.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(&self.config.storage_key, self.theme.as_str()) {
            log::debug!("theme preference not persisted: {err}");
        }
        log::debug!("theme -> {}", self.theme.as_str());

        vec![
            self.apply(),
            Effect::style(Target::ThemeToggle, "transform", "rotate(360deg)"),
            Effect::Schedule { task: Task::ThemeSpinReset, delay_ms: self.config.spin_ms },
        ]
    }

    /// Return the toggle control to its neutral rotation.
    #[must_use]
    pub fn finish_spin(&self) -> Vec<Effect> {
        vec![Effect::clear_style(Target::ThemeToggle, "transform")]
    }

    fn apply(&self) -> Effect {
        Effect::SetAttribute {
            target: Target::Root,
            name: THEME_ATTRIBUTE,
            value: self.theme.as_str().to_owned(),
        }
    }
}
