use super::*;

fn controller() -> ContactFormController {
    ContactFormController::new(ContactConfig::default()).unwrap()
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_message_is_missing_fields() {
    let form = controller();
    let err = form.validate(&ContactSubmission::new("A", "a@b.com", "")).unwrap_err();
    assert_eq!(err, ValidationError::MissingFields);
}

#[test]
fn every_field_is_required() {
    let form = controller();
    for submission in [
        ContactSubmission::new("", "a@b.com", "hi"),
        ContactSubmission::new("A", "", "hi"),
        ContactSubmission::new("A", "a@b.com", ""),
        ContactSubmission::default(),
    ] {
        assert_eq!(form.validate(&submission), Err(ValidationError::MissingFields));
    }
}

#[test]
fn malformed_email_is_rejected() {
    let form = controller();
    let err = form.validate(&ContactSubmission::new("A", "not-an-email", "hi")).unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
}

#[test]
fn email_shape_rules() {
    let form = controller();
    let check = |email: &str| form.validate(&ContactSubmission::new("A", email, "hi")).is_ok();
    assert!(check("a@b.com"));
    assert!(check("first.last@sub.example.org"));
    assert!(!check("a@b"));
    assert!(!check("@b.com"));
    assert!(!check("a@.com"));
    assert!(!check("a b@c.com"));
    assert!(!check("a@b@c.com"));
    assert!(!check("a@b."));
}

#[test]
fn valid_submission_passes() {
    assert_eq!(controller().validate(&ContactSubmission::new("A", "a@b.com", "hi")), Ok(()));
}

#[test]
fn error_messages_match_notifications() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all required fields");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
}

#[test]
fn bad_pattern_is_config_error() {
    let config = ContactConfig { email_pattern: "([".to_owned(), ..ContactConfig::default() };
    let err = ContactFormController::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::EmailPattern(_)));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn invalid_submit_changes_nothing() {
    let mut form = controller();
    let err = form.submit(&ContactSubmission::new("A", "a@b.com", ""), "Send Message").unwrap_err();
    assert_eq!(err, ValidationError::MissingFields);
    assert_eq!(form.state(), SubmissionState::Idle);
}

#[test]
fn valid_submit_enters_pending_state() {
    let mut form = controller();
    let effects = form.submit(&ContactSubmission::new("A", "a@b.com", "hi"), "Send Message").unwrap();
    assert_eq!(form.state(), SubmissionState::Submitting);
    assert!(effects.contains(&Effect::SetDisabled { target: Target::SubmitButton, disabled: true }));
    assert!(effects.contains(&Effect::SetText { target: Target::SubmitButton, text: "Sending...".to_owned() }));
    assert!(effects.contains(&Effect::Schedule { task: Task::SubmitComplete, delay_ms: 1500 }));
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let mut form = controller();
    let submission = ContactSubmission::new("A", "a@b.com", "hi");
    form.submit(&submission, "Send Message").unwrap();
    assert_eq!(form.submit(&submission, "Sending...").unwrap(), Vec::new());
    assert_eq!(form.state(), SubmissionState::Submitting);
}

#[test]
fn complete_restores_original_label() {
    let mut form = controller();
    form.submit(&ContactSubmission::new("A", "a@b.com", "hi"), "Send Message").unwrap();
    let effects = form.complete();
    assert_eq!(form.state(), SubmissionState::Done);
    assert_eq!(
        effects,
        vec![
            Effect::ResetForm,
            Effect::SetText { target: Target::SubmitButton, text: "Send Message".to_owned() },
            Effect::SetDisabled { target: Target::SubmitButton, disabled: false },
        ]
    );
}

#[test]
fn complete_without_pending_submission_is_noop() {
    let mut form = controller();
    assert!(form.complete().is_empty());
    assert_eq!(form.state(), SubmissionState::Idle);
}

#[test]
fn can_submit_again_after_done() {
    let mut form = controller();
    let submission = ContactSubmission::new("A", "a@b.com", "hi");
    form.submit(&submission, "Send").unwrap();
    form.complete();
    assert!(!form.submit(&submission, "Send").unwrap().is_empty());
    assert_eq!(form.state(), SubmissionState::Submitting);
}

#[test]
fn submission_deserializes_with_missing_fields() {
    let submission: ContactSubmission = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
    assert_eq!(submission, ContactSubmission::new("A", "", ""));
}
