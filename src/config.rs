//! Site configuration.
//!
//! Every field has a default taken from [`crate::consts`], so an empty JSON
//! object (or no configuration at all) yields the stock behavior. Pages can
//! override individual values with an inline
//! `<script type="application/json" id="folio-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Id of the optional inline configuration element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid email pattern: {0}")]
    EmailPattern(#[from] regex_lite::Error),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub skills: SkillConfig,
    pub lazy_images: LazyImageConfig,
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
    pub notify: NotifyConfig,
    pub scroll: ScrollConfig,
    pub resume: ResumeConfig,
}

impl SiteConfig {
    /// Parse a configuration document, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Log level name as written in configuration (`"info"`, `"debug"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_owned())
    }
}

impl LogLevel {
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] for names `log` does not recognize.
    pub fn parse(&self) -> Result<log::Level, ConfigError> {
        self.0.parse().map_err(|_| ConfigError::LogLevel(self.0.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub spin_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: consts::THEME_STORAGE_KEY.to_owned(), spin_ms: consts::THEME_SPIN_MS }
    }
}

/// Intersection settings shared by all one-shot observers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Minimum visible fraction (0.0 to 1.0) that counts as "seen".
    pub threshold: f64,
    /// Bottom root margin in pixels; negative values shrink the viewport.
    pub bottom_margin_px: i32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { threshold: 0.0, bottom_margin_px: 0 }
    }
}

impl ObserverConfig {
    /// Root margin in the CSS shorthand `IntersectionObserver` expects.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub observer: ObserverConfig,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let selectors = [
            ".section-header",
            ".about-text",
            ".stat-item",
            ".skills-category",
            ".experience-card",
            ".project-card",
            ".education-card",
            ".certification-card",
            ".contact-item",
        ];
        Self {
            selectors: selectors.iter().map(|s| (*s).to_owned()).collect(),
            observer: ObserverConfig {
                threshold: consts::REVEAL_THRESHOLD,
                bottom_margin_px: consts::REVEAL_BOTTOM_MARGIN_PX,
            },
        }
    }
}

impl RevealConfig {
    /// All reveal selectors joined into one selector list.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(",")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    pub observer: ObserverConfig,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self { observer: ObserverConfig { threshold: consts::SKILL_THRESHOLD, bottom_margin_px: 0 } }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LazyImageConfig {
    pub observer: ObserverConfig,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self { observer: ObserverConfig { threshold: consts::LAZY_IMAGE_THRESHOLD, bottom_margin_px: 0 } }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: consts::CAROUSEL_INTERVAL_MS }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub pending_label: String,
    pub email_pattern: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            pending_label: consts::SUBMIT_PENDING_LABEL.to_owned(),
            email_pattern: consts::EMAIL_PATTERN.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub enter_delay_ms: u32,
    pub hold_ms: u32,
    pub transition_ms: u32,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: consts::NOTIFY_ENTER_DELAY_MS,
            hold_ms: consts::NOTIFY_HOLD_MS,
            transition_ms: consts::NOTIFY_TRANSITION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_threshold_px: f64,
    pub active_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: consts::HEADER_SCROLL_THRESHOLD_PX,
            active_offset_px: consts::ACTIVE_NAV_OFFSET_PX,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub filename: String,
    pub content: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            filename: consts::RESUME_FILENAME.to_owned(),
            content: "John Doe - Full Stack Developer Resume\n\n\
                      Email: john.doe@example.com\n\
                      Portfolio: https://johndoe.com\n"
                .to_owned(),
        }
    }
}

/// Whether the page is served from a local development host.
#[must_use]
pub fn is_dev_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1")
}
