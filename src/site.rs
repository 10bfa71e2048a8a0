//! The site: every controller plus the routing between them.
//!
//! DESIGN
//! ======
//! `Site` is the testable core of the page, free of any browser types. Hosts
//! translate DOM events into [`Event`]s and timer expiries into [`Task`]s,
//! and apply whatever [`Effect`]s come back. Controllers never see each
//! other; the only cross-controller flow is raising notifications for form
//! and download outcomes, which happens here.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::carousel::Carousel;
use crate::config::{ConfigError, SiteConfig};
use crate::contact::{self, ContactFormController, ContactSubmission};
use crate::effect::{Effect, Task, WatchGroup};
use crate::nav::NavController;
use crate::notify::{NotificationKind, NotificationService};
use crate::resume::{self, ResumeDownload};
use crate::reveal::{IntersectionSample, RevealObserver};
use crate::scroll::{AnchorTarget, ScrollEffects, ScrollSnapshot};
use crate::storage::PreferenceStore;
use crate::theme::ThemeController;

/// What the host found in the markup at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Number of elements matching the reveal selectors.
    pub reveal_count: usize,
    /// Raw `data-progress` of each skill bar.
    pub skill_progress: Vec<Option<String>>,
    /// Raw `data-src` of each lazy image.
    pub lazy_sources: Vec<Option<String>>,
    /// Number of testimonial items.
    pub testimonial_count: usize,
    /// Section ids targeted by `.nav-link` elements, in document order.
    pub nav_links: Vec<String>,
}

/// A user or platform event, already stripped of browser types.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeToggleClicked,
    NavToggleClicked,
    NavLinkClicked,
    /// Any click on the document, with where it landed relative to the nav.
    DocumentClicked { on_toggle: bool, in_menu: bool },
    Intersection { group: WatchGroup, index: usize, sample: IntersectionSample },
    CarouselPrev,
    CarouselNext,
    ContactSubmitted { submission: ContactSubmission, submit_label: String },
    /// An in-page anchor was clicked; `None` when its destination does not exist.
    AnchorClicked { target: Option<AnchorTarget> },
    Scrolled(ScrollSnapshot),
    ResumeRequested,
}

pub struct Site<S> {
    theme: ThemeController<S>,
    nav: NavController,
    reveal: RevealObserver,
    skills: RevealObserver,
    lazy_images: RevealObserver,
    carousel: Carousel,
    contact: ContactFormController,
    notifications: NotificationService,
    scroll: ScrollEffects,
    resume: ResumeDownload,
}

impl<S: PreferenceStore> Site<S> {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot be used (currently
    /// only an email pattern that does not compile).
    pub fn new(config: SiteConfig, store: S, layout: PageLayout) -> Result<Self, ConfigError> {
        Ok(Self {
            theme: ThemeController::new(store, config.theme),
            nav: NavController::new(),
            reveal: RevealObserver::sections(layout.reveal_count, config.reveal.observer),
            skills: RevealObserver::skill_bars(&layout.skill_progress, config.skills.observer),
            lazy_images: RevealObserver::lazy_images(layout.lazy_sources, config.lazy_images.observer),
            carousel: Carousel::new(layout.testimonial_count, config.carousel.interval_ms),
            contact: ContactFormController::new(config.contact)?,
            notifications: NotificationService::new(config.notify),
            scroll: ScrollEffects::new(config.scroll, layout.nav_links),
            resume: ResumeDownload::new(config.resume),
        })
    }

    /// Effects that bring the freshly loaded page into its initial state.
    pub fn start(&mut self, snapshot: &ScrollSnapshot) -> Vec<Effect> {
        let mut effects = self.theme.initialize();
        effects.extend(self.reveal.initialize());
        effects.extend(self.skills.initialize());
        effects.extend(self.lazy_images.initialize());
        effects.extend(self.carousel.initialize());
        effects.extend(self.scroll.update_active_nav(snapshot));
        log::debug!("site started with {} effects", effects.len());
        effects
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::ThemeToggleClicked => self.theme.toggle(),
            Event::NavToggleClicked => self.nav.toggle(),
            Event::NavLinkClicked => self.nav.link_selected(),
            Event::DocumentClicked { on_toggle, in_menu } => self.nav.document_clicked(on_toggle, in_menu),
            Event::Intersection { group, index, sample } => self.observer_mut(group).observe(index, sample),
            Event::CarouselPrev => self.carousel.prev(),
            Event::CarouselNext => self.carousel.next(),
            Event::ContactSubmitted { submission, submit_label } => {
                match self.contact.submit(&submission, &submit_label) {
                    Ok(effects) => effects,
                    Err(err) => {
                        log::debug!("contact form rejected: {err:?}");
                        self.notifications.notify(err.to_string(), NotificationKind::Error)
                    }
                }
            }
            Event::AnchorClicked { target } => self.scroll.scroll_to_anchor(target),
            Event::Scrolled(snapshot) => self.scroll.on_scroll(&snapshot),
            Event::ResumeRequested => {
                let mut effects = vec![self.resume.download()];
                effects.extend(self.notifications.notify(resume::DOWNLOADED_MESSAGE, NotificationKind::Success));
                effects
            }
        }
    }

    /// Run a task whose timer has fired.
    pub fn run(&mut self, task: Task) -> Vec<Effect> {
        match task {
            Task::ThemeSpinReset => self.theme.finish_spin(),
            Task::CarouselAdvance => self.carousel.auto_advance(),
            Task::SubmitComplete => {
                let mut effects = self.contact.complete();
                if !effects.is_empty() {
                    effects.extend(self.notifications.notify(contact::SUCCESS_MESSAGE, NotificationKind::Success));
                }
                effects
            }
            Task::NotificationEnter(id) => self.notifications.enter(id),
            Task::NotificationExit(id) => self.notifications.exit(id),
            Task::NotificationRemove(id) => self.notifications.remove(id),
        }
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    #[must_use]
    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    #[must_use]
    pub fn observer(&self, group: WatchGroup) -> &RevealObserver {
        match group {
            WatchGroup::Reveal => &self.reveal,
            WatchGroup::SkillBar => &self.skills,
            WatchGroup::LazyImage => &self.lazy_images,
        }
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn contact(&self) -> &ContactFormController {
        &self.contact
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationService {
        &mut self.notifications
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollEffects {
        &self.scroll
    }

    fn observer_mut(&mut self, group: WatchGroup) -> &mut RevealObserver {
        match group {
            WatchGroup::Reveal => &mut self.reveal,
            WatchGroup::SkillBar => &mut self.skills,
            WatchGroup::LazyImage => &mut self.lazy_images,
        }
    }
}
