//! DOM listener wiring.
//!
//! Each listener turns a browser event into a [`crate::site::Event`] and hands it to
//! the runtime. Listeners stay attached for the lifetime of the page.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, EventTarget, Node};

use super::{OkOrLog, Runtime};
use crate::site::Event;

/// Attach every listener the page supports. Returns the features that found
/// their elements.
pub(super) fn wire(runtime: &Rc<Runtime>) -> Vec<&'static str> {
    let dom = &runtime.dom;
    let mut wired = Vec::new();

    match dom.theme_toggle() {
        Some(toggle) => {
            on(runtime, toggle, "click", |_, _| Some(Event::ThemeToggleClicked));
            wired.push("theme");
        }
        None => log::warn!("#themeToggle not found; theme switching disabled"),
    }

    match dom.nav_toggle() {
        Some(toggle) => {
            on(runtime, toggle, "click", |_, _| Some(Event::NavToggleClicked));
            for link in dom.nav_links() {
                on(runtime, link, "click", |_, _| Some(Event::NavLinkClicked));
            }
            on(runtime, dom.document(), "click", |runtime, event| {
                let node = event.target().and_then(|target| target.dyn_into::<Node>().ok_or_log());
                let (on_toggle, in_menu) = runtime.dom.click_position(node.as_ref());
                Some(Event::DocumentClicked { on_toggle, in_menu })
            });
            wired.push("navigation");
        }
        None => log::warn!("#navToggle not found; mobile navigation disabled"),
    }

    match dom.carousel_buttons() {
        (Some(prev), Some(next)) => {
            on(runtime, prev, "click", |_, _| Some(Event::CarouselPrev));
            on(runtime, next, "click", |_, _| Some(Event::CarouselNext));
            wired.push("carousel controls");
        }
        _ => log::warn!("carousel buttons not found; manual carousel navigation disabled"),
    }

    match dom.contact_form() {
        Some(form) => {
            on_prevented(runtime, form, "submit", |runtime, _| match runtime.dom.read_form() {
                Ok(submission) => Some(Event::ContactSubmitted { submission, submit_label: runtime.dom.submit_label() }),
                Err(err) => {
                    log::warn!("could not read contact form: {err:?}");
                    None
                }
            });
            wired.push("contact form");
        }
        None => log::warn!("#contactForm not found; contact form disabled"),
    }

    for anchor in dom.anchors() {
        let href = anchor.get_attribute("href").unwrap_or_default();
        on_prevented(runtime, anchor, "click", move |runtime, _| {
            Some(Event::AnchorClicked { target: runtime.dom.anchor_target(&href) })
        });
    }
    if !dom.anchors().is_empty() {
        wired.push("smooth scrolling");
    }

    on(runtime, dom.window(), "scroll", |runtime, _| Some(Event::Scrolled(runtime.dom.snapshot())));
    wired.push("scroll effects");

    if let Some(button) = dom.download_resume() {
        on_prevented(runtime, button, "click", |_, _| Some(Event::ResumeRequested));
        wired.push("resume download");
    }

    EventListener::new(dom.window(), "error", |event| match event.dyn_ref::<ErrorEvent>() {
        Some(error) => log::error!("{} ({}:{}:{})", error.message(), error.filename(), error.lineno(), error.colno()),
        None => log::error!("uncaught page error: {event:?}"),
    })
    .forget();

    wired
}

type Translate = dyn Fn(&Runtime, &web_sys::Event) -> Option<Event>;

fn on(
    runtime: &Rc<Runtime>,
    target: &EventTarget,
    kind: &'static str,
    translate: impl Fn(&Runtime, &web_sys::Event) -> Option<Event> + 'static,
) {
    attach(runtime, target, kind, EventListenerOptions::default(), Box::new(translate));
}

/// Like [`on`], but the browser's default action is suppressed first.
fn on_prevented(
    runtime: &Rc<Runtime>,
    target: &EventTarget,
    kind: &'static str,
    translate: impl Fn(&Runtime, &web_sys::Event) -> Option<Event> + 'static,
) {
    let translate = move |runtime: &Runtime, event: &web_sys::Event| {
        event.prevent_default();
        translate(runtime, event)
    };
    attach(runtime, target, kind, EventListenerOptions::enable_prevent_default(), Box::new(translate));
}

fn attach(
    runtime: &Rc<Runtime>,
    target: &EventTarget,
    kind: &'static str,
    options: EventListenerOptions,
    translate: Box<Translate>,
) {
    let runtime = Rc::clone(runtime);
    EventListener::new_with_options(target, kind, options, move |event| {
        if let Some(event) = translate(&runtime, event) {
            runtime.dispatch(event);
        }
    })
    .forget();
}
