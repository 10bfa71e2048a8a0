//! Resume download.
//!
//! The file is generated in memory from configuration; the host turns
//! [`Effect::Download`] into a blob URL and a synthetic link click.

use crate::config::ResumeConfig;
use crate::consts;
use crate::effect::Effect;

/// Notification text shown after the download is triggered.
pub const DOWNLOADED_MESSAGE: &str = "Resume downloaded successfully!";

#[derive(Debug, Clone)]
pub struct ResumeDownload {
    config: ResumeConfig,
}

impl ResumeDownload {
    #[must_use]
    pub fn new(config: ResumeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.config.filename
    }

    #[must_use]
    pub fn download(&self) -> Effect {
        Effect::Download {
            filename: self.config.filename.clone(),
            mime: consts::RESUME_MIME,
            content: self.config.content.clone(),
        }
    }
}
