use super::*;
use crate::effect::Target;
use crate::headless::HeadlessHost;
use crate::notify::NotificationKind;
use crate::reveal::IntersectionSample;
use crate::scroll::SectionBounds;
use crate::storage::MemoryStore;

fn layout() -> PageLayout {
    PageLayout {
        reveal_count: 4,
        skill_progress: vec![Some("90".to_owned()), None],
        lazy_sources: vec![Some("/img/avatar.jpg".to_owned())],
        testimonial_count: 3,
        nav_links: vec!["home".to_owned(), "about".to_owned(), "contact".to_owned()],
    }
}

fn snapshot(scroll_y: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        scroll_y,
        sections: vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("about", 700.0, 900.0),
            SectionBounds::new("contact", 1600.0, 600.0),
        ],
    }
}

fn host_with(store: MemoryStore, layout: PageLayout) -> HeadlessHost<MemoryStore> {
    let site = Site::new(SiteConfig::default(), store, layout).unwrap();
    let mut host = HeadlessHost::new(site);
    host.page.set_text(Target::SubmitButton, "Send Message");
    host.start(&snapshot(0.0));
    host
}

fn host() -> HeadlessHost<MemoryStore> {
    host_with(MemoryStore::new(), layout())
}

fn messages(host: &HeadlessHost<MemoryStore>) -> Vec<(String, NotificationKind)> {
    host.page.notifications().map(|(_, n)| (n.message.clone(), n.kind)).collect()
}

// =============================================================
// Startup
// =============================================================

#[test]
fn start_applies_theme_and_initial_state() {
    let host = host_with(MemoryStore::with("theme", "dark"), layout());
    assert_eq!(host.page.attribute(&Target::Root, "data-theme"), Some("dark"));
    assert_eq!(host.page.active_testimonials(), vec![0]);
    assert_eq!(host.page.active_nav_links(), vec!["home"]);
    let first = Target::Watched { group: WatchGroup::Reveal, index: 0 };
    assert_eq!(host.page.style(&first, "opacity"), Some("0"));
    let bar = Target::Watched { group: WatchGroup::SkillBar, index: 1 };
    assert_eq!(host.page.style(&bar, "width"), Some("0%"));
}

#[test]
fn bad_email_pattern_fails_construction() {
    let mut config = SiteConfig::default();
    config.contact.email_pattern = "(".to_owned();
    assert!(Site::new(config, MemoryStore::new(), layout()).is_err());
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggle_spins_then_resets() {
    let mut host = host();
    host.dispatch(Event::ThemeToggleClicked);
    assert_eq!(host.page.attribute(&Target::Root, "data-theme"), Some("dark"));
    assert_eq!(host.page.style(&Target::ThemeToggle, "transform"), Some("rotate(360deg)"));
    assert_eq!(host.site.theme().store().get("theme").unwrap().as_deref(), Some("dark"));

    host.advance(299);
    assert_eq!(host.page.style(&Target::ThemeToggle, "transform"), Some("rotate(360deg)"));
    host.advance(1);
    assert_eq!(host.page.style(&Target::ThemeToggle, "transform"), None);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_opens_and_closes_on_outside_click() {
    let mut host = host();
    host.dispatch(Event::NavToggleClicked);
    assert!(host.page.has_class(&Target::NavMenu, "active"));
    assert_eq!(host.page.style(&Target::Body, "overflow"), Some("hidden"));

    host.dispatch(Event::DocumentClicked { on_toggle: false, in_menu: true });
    assert!(host.site.nav().is_open());

    host.dispatch(Event::DocumentClicked { on_toggle: false, in_menu: false });
    assert!(!host.page.has_class(&Target::NavMenu, "active"));
    assert_eq!(host.page.style(&Target::Body, "overflow"), None);
}

#[test]
fn nav_link_click_closes_menu() {
    let mut host = host();
    host.dispatch(Event::NavToggleClicked);
    host.dispatch(Event::NavLinkClicked);
    assert!(!host.site.nav().is_open());
    assert!(!host.page.has_class(&Target::NavToggle, "active"));
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveal_routes_to_the_right_group() {
    let mut host = host();
    host.dispatch(Event::Intersection {
        group: WatchGroup::SkillBar,
        index: 0,
        sample: IntersectionSample::visible(0.6),
    });
    let bar = Target::Watched { group: WatchGroup::SkillBar, index: 0 };
    assert_eq!(host.page.style(&bar, "width"), Some("90%"));
    assert!(host.page.is_unobserved(WatchGroup::SkillBar, 0));
    assert!(!host.site.observer(WatchGroup::Reveal).is_revealed(0));
}

#[test]
fn revealed_section_never_rehides() {
    let mut host = host();
    let target = Target::Watched { group: WatchGroup::Reveal, index: 2 };
    host.dispatch(Event::Intersection { group: WatchGroup::Reveal, index: 2, sample: IntersectionSample::visible(0.2) });
    assert_eq!(host.page.style(&target, "opacity"), Some("1"));

    for _ in 0..3 {
        host.dispatch(Event::Intersection { group: WatchGroup::Reveal, index: 2, sample: IntersectionSample::hidden() });
        host.dispatch(Event::Intersection {
            group: WatchGroup::Reveal,
            index: 2,
            sample: IntersectionSample::visible(0.9),
        });
        assert_eq!(host.page.style(&target, "opacity"), Some("1"));
    }
    assert_eq!(host.site.observer(WatchGroup::Reveal).pending(), 3);
}

#[test]
fn lazy_image_loads_on_first_sight() {
    let mut host = host();
    host.dispatch(Event::Intersection {
        group: WatchGroup::LazyImage,
        index: 0,
        sample: IntersectionSample::visible(0.0),
    });
    let img = Target::Watched { group: WatchGroup::LazyImage, index: 0 };
    assert_eq!(host.page.attribute(&img, "src"), Some("/img/avatar.jpg"));
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_auto_advances_every_interval() {
    let mut host = host();
    host.advance(4999);
    assert_eq!(host.page.active_testimonials(), vec![0]);
    host.advance(1);
    assert_eq!(host.page.active_testimonials(), vec![1]);
    host.advance(10_000);
    assert_eq!(host.page.active_testimonials(), vec![0]);
}

#[test]
fn manual_navigation_keeps_timer_schedule() {
    let mut host = host();
    host.advance(4000);
    host.dispatch(Event::CarouselNext);
    assert_eq!(host.page.active_testimonials(), vec![1]);
    // The timer still fires at 5000, one second after the manual step.
    host.advance(1000);
    assert_eq!(host.page.active_testimonials(), vec![2]);
    host.dispatch(Event::CarouselPrev);
    host.dispatch(Event::CarouselPrev);
    assert_eq!(host.page.active_testimonials(), vec![0]);
}

#[test]
fn exactly_one_testimonial_active_over_time() {
    let mut host = host();
    for step in 0..20 {
        if step % 3 == 0 {
            host.dispatch(Event::CarouselPrev);
        } else {
            host.dispatch(Event::CarouselNext);
        }
        host.advance(2500);
        assert_eq!(host.page.active_testimonials().len(), 1);
    }
}

#[test]
fn empty_carousel_never_schedules() {
    let host = host_with(MemoryStore::new(), PageLayout { testimonial_count: 0, ..layout() });
    assert!(!host.timeline.is_pending(Task::CarouselAdvance));
    assert!(host.page.active_testimonials().is_empty());
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn empty_message_shows_error_and_keeps_fields() {
    let mut host = host();
    host.page.form = ContactSubmission::new("A", "a@b.com", "");
    host.submit_form();

    assert_eq!(messages(&host), vec![("Please fill in all required fields".to_owned(), NotificationKind::Error)]);
    assert_eq!(host.page.form, ContactSubmission::new("A", "a@b.com", ""));
    assert!(!host.page.is_disabled(&Target::SubmitButton));
    assert_eq!(host.site.contact().state(), contact::SubmissionState::Idle);
}

#[test]
fn invalid_email_shows_error() {
    let mut host = host();
    host.page.form = ContactSubmission::new("A", "not-an-email", "hi");
    host.submit_form();
    assert_eq!(messages(&host), vec![("Please enter a valid email address".to_owned(), NotificationKind::Error)]);
}

#[test]
fn valid_submission_round_trip() {
    let mut host = host();
    host.page.form = ContactSubmission::new("A", "a@b.com", "hi");
    host.submit_form();

    assert_eq!(host.site.contact().state(), contact::SubmissionState::Submitting);
    assert!(host.page.is_disabled(&Target::SubmitButton));
    assert_eq!(host.page.text(&Target::SubmitButton), Some("Sending..."));

    host.advance(1499);
    assert_eq!(host.site.contact().state(), contact::SubmissionState::Submitting);

    host.advance(1);
    assert_eq!(host.site.contact().state(), contact::SubmissionState::Done);
    assert!(!host.page.is_disabled(&Target::SubmitButton));
    assert_eq!(host.page.text(&Target::SubmitButton), Some("Send Message"));
    assert_eq!(host.page.form, ContactSubmission::default());
    assert_eq!(messages(&host), vec![(contact::SUCCESS_MESSAGE.to_owned(), NotificationKind::Success)]);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn three_quick_notifications_live_independently() {
    let mut host = host();
    let ids: Vec<_> = (0..3)
        .map(|i| {
            host.advance(50);
            host.dispatch(Event::ResumeRequested);
            host.page.notifications().last().map(|(id, _)| id).unwrap_or_else(|| panic!("notification {i}"))
        })
        .collect();
    assert_eq!(host.page.notifications().count(), 3);

    // Mounted at 50, 100 and 150; each slides in 100ms after mounting.
    let shown = |host: &HeadlessHost<MemoryStore>, i: usize| {
        host.page.style(&Target::Notification(ids[i]), "transform") == Some("translateX(0)")
    };
    assert!(shown(&host, 0));
    assert!(!shown(&host, 1));
    host.advance(100);
    assert!((0..3).all(|i| shown(&host, i)));

    // First notification starts leaving at 3050 and is removed at 3350.
    host.advance(3350 - 250);
    assert_eq!(host.page.notifications().count(), 2);

    host.advance(100);
    assert_eq!(host.page.notifications().count(), 0);
    assert_eq!(host.site.notifications().live(), 0);
}

#[test]
fn dismiss_cuts_a_notification_short() {
    let mut host = host();
    host.dispatch(Event::ResumeRequested);
    let (id, _) = host.page.notifications().next().unwrap();
    let effects = host.site.notifications_mut().dismiss(id);
    host.page.apply(&effects);
    host.timeline.record(&effects);

    host.advance(300);
    assert_eq!(host.page.notifications().count(), 0);
    assert!(host.timeline.is_pending(Task::CarouselAdvance));
    assert_eq!(host.timeline.len(), 1);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scrolling_updates_header_and_active_link() {
    let mut host = host();
    host.dispatch(Event::Scrolled(snapshot(800.0)));
    assert!(host.page.has_class(&Target::Header, "scrolled"));
    assert_eq!(host.page.active_nav_links(), vec!["about"]);

    host.dispatch(Event::Scrolled(snapshot(1550.0)));
    assert_eq!(host.page.active_nav_links(), vec!["contact"]);

    host.dispatch(Event::Scrolled(snapshot(0.0)));
    assert!(!host.page.has_class(&Target::Header, "scrolled"));
    assert_eq!(host.page.active_nav_links(), vec!["home"]);
}

#[test]
fn anchor_click_scrolls_below_header() {
    let mut host = host();
    host.dispatch(Event::AnchorClicked { target: Some(AnchorTarget { offset_top: 1600.0, header_height: 72.0 }) });
    assert_eq!(host.page.scroll_top, Some(1528.0));

    host.page.scroll_top = None;
    host.dispatch(Event::AnchorClicked { target: None });
    assert_eq!(host.page.scroll_top, None);
}

// =============================================================
// Resume
// =============================================================

#[test]
fn resume_download_is_plain_text_with_notice() {
    let mut host = host();
    host.dispatch(Event::ResumeRequested);
    assert_eq!(host.page.downloads.len(), 1);
    let download = &host.page.downloads[0];
    assert_eq!(download.filename, "John_Doe_Resume.txt");
    assert_eq!(download.mime, "text/plain");
    assert!(!download.content.is_empty());
    assert_eq!(messages(&host), vec![(resume::DOWNLOADED_MESSAGE.to_owned(), NotificationKind::Success)]);
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn zero_interval_carousel_stays_put() {
    let mut config = SiteConfig::default();
    config.carousel.interval_ms = 0;
    let site = Site::new(config, MemoryStore::new(), layout()).unwrap();
    let mut host = HeadlessHost::new(site);
    host.start(&snapshot(0.0));
    assert!(!host.timeline.is_pending(Task::CarouselAdvance));

    host.advance(60_000);
    assert_eq!(host.page.active_testimonials(), vec![0]);
    host.dispatch(Event::CarouselNext);
    assert_eq!(host.page.active_testimonials(), vec![1]);
}

#[test]
fn skill_bar_without_progress_reveals_at_zero() {
    let mut host = host();
    let bar = Target::Watched { group: WatchGroup::SkillBar, index: 1 };
    host.dispatch(Event::Intersection {
        group: WatchGroup::SkillBar,
        index: 1,
        sample: IntersectionSample::visible(1.0),
    });
    assert_eq!(host.page.style(&bar, "width"), Some("0%"));
    assert!(host.site.observer(WatchGroup::SkillBar).is_revealed(1));
    assert!(host.page.is_unobserved(WatchGroup::SkillBar, 1));
}
