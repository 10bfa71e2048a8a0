//! Contact form validation and simulated submission.
//!
//! DESIGN
//! ======
//! Nothing is transmitted. A valid submission disables the submit control,
//! shows a pending label, and completes after a fixed delay as if a server
//! had answered. The controller only tracks the submission state; the
//! notifications that report the outcome are raised by the caller.
//!
//! ERROR HANDLING
//! ==============
//! Invalid input is returned as [`ValidationError`] before any state
//! changes, so the form keeps what the user typed.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use regex_lite::Regex;
use serde::Deserialize;

use crate::config::{ConfigError, ContactConfig};
use crate::effect::{Effect, Target, Task};

/// Notification text shown once the simulated submission completes.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Field values read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Done,
}

#[derive(Debug)]
pub struct ContactFormController {
    config: ContactConfig,
    email: Regex,
    state: SubmissionState,
    /// Submit button label to restore when the pending submission completes.
    restore_label: Option<String>,
}

impl ContactFormController {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmailPattern`] if the configured email pattern
    /// does not compile.
    pub fn new(config: ContactConfig) -> Result<Self, ConfigError> {
        let email = Regex::new(&config.email_pattern)?;
        Ok(Self { config, email, state: SubmissionState::Idle, restore_label: None })
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Check required fields, then the email shape.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingFields`] if any field is empty,
    /// [`ValidationError::InvalidEmail`] if the email does not match.
    pub fn validate(&self, submission: &ContactSubmission) -> Result<(), ValidationError> {
        if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !self.email.is_match(&submission.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and start the simulated round-trip.
    ///
    /// `submit_label` is the submit control's current text, restored on
    /// completion. A submission arriving while one is in flight is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`Self::validate`]; no state changes.
    pub fn submit(&mut self, submission: &ContactSubmission, submit_label: &str) -> Result<Vec<Effect>, ValidationError> {
        if self.state == SubmissionState::Submitting {
            log::debug!("contact submission already in flight");
            return Ok(Vec::new());
        }
        self.validate(submission)?;

        self.state = SubmissionState::Submitting;
        self.restore_label = Some(submit_label.to_owned());
        log::debug!("contact submission started");

        Ok(vec![
            Effect::SetText { target: Target::SubmitButton, text: self.config.pending_label.clone() },
            Effect::SetDisabled { target: Target::SubmitButton, disabled: true },
            Effect::Schedule { task: Task::SubmitComplete, delay_ms: self.config.submit_delay_ms },
        ])
    }

    /// The simulated response arrived: clear the form and restore the control.
    pub fn complete(&mut self) -> Vec<Effect> {
        if self.state != SubmissionState::Submitting {
            return Vec::new();
        }
        self.state = SubmissionState::Done;
        let label = self.restore_label.take().unwrap_or_default();
        log::debug!("contact submission done");

        vec![
            Effect::ResetForm,
            Effect::SetText { target: Target::SubmitButton, text: label },
            Effect::SetDisabled { target: Target::SubmitButton, disabled: false },
        ]
    }
}
