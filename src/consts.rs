//! Default timings, thresholds, and keys used when no configuration overrides them.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Duration of the toggle button's rotation before it is reset.
pub const THEME_SPIN_MS: u32 = 300;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a section that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root margin for section reveals, in pixels (negative shrinks the viewport).
pub const REVEAL_BOTTOM_MARGIN_PX: i32 = -50;

/// Fraction of a skill bar that must be visible before it fills.
pub const SKILL_THRESHOLD: f64 = 0.5;

/// Lazy images load as soon as any part of them intersects.
pub const LAZY_IMAGE_THRESHOLD: f64 = 0.0;

/// Slack allowed when comparing a reported ratio against its threshold.
/// Browsers may report a crossing a hair under the configured threshold.
pub const RATIO_TOLERANCE: f64 = 1e-3;

// ── Carousel ────────────────────────────────────────────────────

/// Interval between automatic testimonial advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

// ── Contact form ────────────────────────────────────────────────

/// Simulated round-trip for a contact form submission.
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// Label shown on the submit button while a submission is in flight.
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

/// Accepted email shape: something, `@`, something, `.`, something, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// ── Notifications ───────────────────────────────────────────────

/// Delay between mounting a notification and sliding it in.
pub const NOTIFY_ENTER_DELAY_MS: u32 = 100;

/// Time from mounting a notification until it starts sliding out.
pub const NOTIFY_HOLD_MS: u32 = 3000;

/// Slide transition length; removal happens this long after the exit starts.
pub const NOTIFY_TRANSITION_MS: u32 = 300;

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset past which the header gets the `scrolled` class.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Added to the scroll offset before matching it against section bounds.
pub const ACTIVE_NAV_OFFSET_PX: f64 = 100.0;

// ── Resume ──────────────────────────────────────────────────────

/// Filename offered for the resume download.
pub const RESUME_FILENAME: &str = "John_Doe_Resume.txt";

/// MIME type of the resume download.
pub const RESUME_MIME: &str = "text/plain";
