//! Element lookup and effect application on the live document.
//!
//! Elements are resolved once at startup; the markup is static apart from
//! the notification elements this module mounts itself.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, FormData, HtmlAnchorElement, HtmlElement, HtmlFormElement,
    IntersectionObserver, ScrollBehavior, ScrollToOptions, Url, Window,
};

use super::OkOrLog;
use crate::config::SiteConfig;
use crate::contact::ContactSubmission;
use crate::effect::{Effect, Target, WatchGroup};
use crate::notify::{NotificationId, NotificationKind};
use crate::scroll::{AnchorTarget, ScrollSnapshot, SectionBounds};
use crate::site::PageLayout;

pub(super) struct Dom {
    window: Window,
    document: Document,
    header: Option<Element>,
    theme_toggle: Option<Element>,
    nav_toggle: Option<Element>,
    nav_menu: Option<Element>,
    /// Every `.nav-link`; any of them closes the mobile menu.
    nav_link_elements: Vec<Element>,
    /// `.nav-link`s pointing at an in-page section, keyed by section id.
    nav_links: Vec<(String, Element)>,
    reveal: Vec<Element>,
    skill_bars: Vec<Element>,
    lazy_images: Vec<Element>,
    testimonials: Vec<Element>,
    carousel_prev: Option<Element>,
    carousel_next: Option<Element>,
    contact_form: Option<HtmlFormElement>,
    submit_button: Option<Element>,
    anchors: Vec<Element>,
    sections: Vec<HtmlElement>,
    download_resume: Option<Element>,
    notify_transition_ms: u32,
    notifications: RefCell<HashMap<NotificationId, HtmlElement>>,
    observers: RefCell<HashMap<WatchGroup, IntersectionObserver>>,
}

impl Dom {
    pub(super) fn query(window: Window, document: Document, config: &SiteConfig) -> Result<Self, JsValue> {
        let contact_form = match document.get_element_by_id("contactForm") {
            Some(el) => match el.dyn_into::<HtmlFormElement>() {
                Ok(form) => Some(form),
                Err(el) => {
                    log::warn!("#contactForm is a <{}>, not a form", el.tag_name());
                    None
                }
            },
            None => None,
        };
        let submit_button = match &contact_form {
            Some(form) => form.query_selector("button[type=\"submit\"]")?,
            None => None,
        };
        let nav_link_elements = all(&document, ".nav-link")?;
        let nav_links = nav_link_elements
            .iter()
            .filter_map(|link| {
                let id = link.get_attribute("href")?.strip_prefix('#')?.to_owned();
                Some((id, link.clone()))
            })
            .collect();
        let sections = all(&document, "section[id]")?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok_or_log())
            .collect();

        Ok(Self {
            header: document.query_selector(".header")?,
            theme_toggle: document.get_element_by_id("themeToggle"),
            nav_toggle: document.get_element_by_id("navToggle"),
            nav_menu: document.query_selector(".nav-menu")?,
            nav_link_elements,
            nav_links,
            reveal: all(&document, &config.reveal.selector_list())?,
            skill_bars: all(&document, ".skill-progress")?,
            lazy_images: all(&document, "img[data-src]")?,
            testimonials: all(&document, ".testimonial-item")?,
            carousel_prev: document.get_element_by_id("testimonialPrev"),
            carousel_next: document.get_element_by_id("testimonialNext"),
            contact_form,
            submit_button,
            anchors: all(&document, "a[href^=\"#\"]")?,
            sections,
            download_resume: document.get_element_by_id("downloadResume"),
            notify_transition_ms: config.notify.transition_ms,
            notifications: RefCell::new(HashMap::new()),
            observers: RefCell::new(HashMap::new()),
            window,
            document,
        })
    }

    pub(super) fn layout(&self) -> PageLayout {
        PageLayout {
            reveal_count: self.reveal.len(),
            skill_progress: self.skill_bars.iter().map(|el| el.get_attribute("data-progress")).collect(),
            lazy_sources: self.lazy_images.iter().map(|el| el.get_attribute("data-src")).collect(),
            testimonial_count: self.testimonials.len(),
            nav_links: self.nav_links.iter().map(|(id, _)| id.clone()).collect(),
        }
    }

    /// Current scroll position and section geometry.
    pub(super) fn snapshot(&self) -> ScrollSnapshot {
        let scroll_y = match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("scrollY unavailable: {err:?}");
                0.0
            }
        };
        let sections = self
            .sections
            .iter()
            .map(|el| SectionBounds::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect();
        ScrollSnapshot { scroll_y, sections }
    }

    /// Where an in-page link points, if that element exists.
    pub(super) fn anchor_target(&self, href: &str) -> Option<AnchorTarget> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let target = self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok_or_log()?;
        let header_height =
            self.header.as_ref().and_then(|h| h.dyn_ref::<HtmlElement>()).map_or(0, HtmlElement::offset_height);
        Some(AnchorTarget { offset_top: f64::from(target.offset_top()), header_height: f64::from(header_height) })
    }

    /// Current contact form fields, or empty ones when there is no form.
    pub(super) fn read_form(&self) -> Result<ContactSubmission, JsValue> {
        let Some(form) = &self.contact_form else {
            return Ok(ContactSubmission::default());
        };
        let data = FormData::new_with_form(form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Ok(ContactSubmission::new(field("name"), field("email"), field("message")))
    }

    pub(super) fn submit_label(&self) -> String {
        self.submit_button.as_ref().and_then(|el| el.text_content()).unwrap_or_default()
    }

    /// Whether `node` lies inside the nav toggle and inside the nav panel.
    pub(super) fn click_position(&self, node: Option<&web_sys::Node>) -> (bool, bool) {
        let inside = |el: &Option<Element>| el.as_ref().is_some_and(|el| el.contains(node));
        (inside(&self.nav_toggle), inside(&self.nav_menu))
    }

    pub(super) fn window(&self) -> &Window {
        &self.window
    }

    pub(super) fn document(&self) -> &Document {
        &self.document
    }

    pub(super) fn theme_toggle(&self) -> Option<&Element> {
        self.theme_toggle.as_ref()
    }

    pub(super) fn nav_toggle(&self) -> Option<&Element> {
        self.nav_toggle.as_ref()
    }

    pub(super) fn nav_links(&self) -> &[Element] {
        &self.nav_link_elements
    }

    pub(super) fn carousel_buttons(&self) -> (Option<&Element>, Option<&Element>) {
        (self.carousel_prev.as_ref(), self.carousel_next.as_ref())
    }

    pub(super) fn contact_form(&self) -> Option<&HtmlFormElement> {
        self.contact_form.as_ref()
    }

    pub(super) fn anchors(&self) -> &[Element] {
        &self.anchors
    }

    pub(super) fn download_resume(&self) -> Option<&Element> {
        self.download_resume.as_ref()
    }

    pub(super) fn watched(&self, group: WatchGroup) -> &[Element] {
        match group {
            WatchGroup::Reveal => &self.reveal,
            WatchGroup::SkillBar => &self.skill_bars,
            WatchGroup::LazyImage => &self.lazy_images,
        }
    }

    pub(super) fn register_observer(&self, group: WatchGroup, observer: IntersectionObserver) {
        self.observers.borrow_mut().insert(group, observer);
    }

    fn resolve(&self, target: &Target) -> Option<Element> {
        match target {
            Target::Root => self.document.document_element(),
            Target::Body => self.document.body().map(Element::from),
            Target::Header => self.header.clone(),
            Target::ThemeToggle => self.theme_toggle.clone(),
            Target::NavToggle => self.nav_toggle.clone(),
            Target::NavMenu => self.nav_menu.clone(),
            Target::NavLink(id) => self.nav_links.iter().find(|(link, _)| link == id).map(|(_, el)| el.clone()),
            Target::Watched { group, index } => self.watched(*group).get(*index).cloned(),
            Target::Testimonial(index) => self.testimonials.get(*index).cloned(),
            Target::ContactForm => self.contact_form.clone().map(Element::from),
            Target::SubmitButton => self.submit_button.clone(),
            Target::Notification(id) => self.notifications.borrow().get(id).cloned().map(Element::from),
        }
    }

    /// Apply one page effect. Effects on elements the page does not have are skipped.
    pub(super) fn apply(&self, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::SetAttribute { target, name, value } => {
                if let Some(el) = self.resolve(target) {
                    el.set_attribute(name, value)?;
                }
            }
            Effect::AddClass { target, class } => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().add_1(class)?;
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().remove_1(class)?;
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.resolve(target) {
                    let style = el.dyn_ref::<HtmlElement>().ok_or_else(|| not_html(target))?.style();
                    if value.is_empty() {
                        style.remove_property(property)?;
                    } else {
                        style.set_property(property, value)?;
                    }
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = self.resolve(target) {
                    el.set_text_content(Some(text));
                }
            }
            Effect::SetDisabled { target, disabled } => {
                if let Some(el) = self.resolve(target) {
                    if *disabled {
                        el.set_attribute("disabled", "")?;
                    } else {
                        el.remove_attribute("disabled")?;
                    }
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.contact_form {
                    form.reset();
                }
            }
            Effect::Unobserve { group, index } => {
                let observers = self.observers.borrow();
                if let (Some(observer), Some(el)) = (observers.get(group), self.watched(*group).get(*index)) {
                    observer.unobserve(el);
                }
            }
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::MountNotification { id, message, kind } => self.mount_notification(*id, message, *kind)?,
            Effect::RemoveNotification(id) => {
                if let Some(el) = self.notifications.borrow_mut().remove(id) {
                    el.remove();
                }
            }
            Effect::Download { filename, mime, content } => self.download(filename, mime, content)?,
            Effect::Schedule { .. } | Effect::Repeat { .. } | Effect::Cancel(_) => {
                log::debug!("timer effect reached the DOM: {effect:?}");
            }
        }
        Ok(())
    }

    fn mount_notification(&self, id: NotificationId, message: &str, kind: NotificationKind) -> Result<(), JsValue> {
        let el = self.document.create_element("div")?.dyn_into::<HtmlElement>()?;
        el.set_class_name(&kind.class_name());
        el.set_text_content(Some(message));
        el.style().set_css_text(&kind.css_text(self.notify_transition_ms));
        let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&el)?;
        self.notifications.borrow_mut().insert(id, el);
        Ok(())
    }

    /// Offer `content` as a file through a temporary object URL.
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let link = self.document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
        link.set_href(&url);
        link.set_download(filename);
        let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&link)?;
        link.click();
        link.remove();
        Url::revoke_object_url(&url)
    }
}

fn not_html(target: &Target) -> JsValue {
    JsValue::from_str(&format!("{target:?} is not an HTML element"))
}

/// Every element matching `selector`, in document order.
fn all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::new();
    for index in 0..list.length() {
        if let Some(el) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok_or_log()) {
            out.push(el);
        }
    }
    Ok(out)
}
