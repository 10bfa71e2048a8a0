//! Browser host: binds a [`Site`] to the live page.
//!
//! DESIGN
//! ======
//! [`start`] runs once when the WASM module loads. It reads configuration
//! and markup, builds a [`Site`] backed by `localStorage`, applies the
//! startup effects, then wires DOM listeners and intersection observers that
//! translate browser events into [`Event`]s.
//!
//! Every batch of effects flows through [`Runtime::apply`]: page effects go
//! to [`dom::Dom`], timer effects to [`timers::Timers`]. The site is borrowed
//! only while it computes a batch, never while the batch is applied, so DOM
//! calls that synchronously fire further events are safe.
//!
//! ERROR HANDLING
//! ==============
//! A missing optional element leaves its feature unwired and is logged as a
//! warning. A failing DOM call is logged and skipped; one failed effect never
//! stops the rest of its batch.

mod dom;
mod listen;
mod observe;
mod storage;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::{CONFIG_ELEMENT_ID, ConfigError, SiteConfig, is_dev_host};
use crate::effect::{Effect, Task, WatchGroup};
use crate::site::{Event, Site};

pub use storage::LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = match read_config(&document) {
        Ok(config) => {
            init_logging(config.log_level.parse());
            config
        }
        Err(err) => {
            init_logging(Ok(log::Level::Info));
            log::warn!("{err}; using default configuration");
            SiteConfig::default()
        }
    };

    if let Err(err) = boot(&window, document, config) {
        log::error!("folio failed to start: {err}");
    }
}

fn init_logging(level: Result<log::Level, ConfigError>) {
    let (level, problem) = match level {
        Ok(level) => (level, None),
        Err(err) => (log::Level::Info, Some(err)),
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
    if let Some(problem) = problem {
        log::warn!("{problem}; logging at info");
    }
}

/// Configuration from the inline JSON element, or defaults when it is absent.
fn read_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    let json = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    match json {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(&json),
        _ => Ok(SiteConfig::default()),
    }
}

fn boot(window: &Window, document: Document, config: SiteConfig) -> Result<(), BrowserError> {
    let dom = dom::Dom::query(window.clone(), document, &config)?;
    let layout = dom.layout();
    let snapshot = dom.snapshot();
    let watch = [
        (WatchGroup::Reveal, config.reveal.observer),
        (WatchGroup::SkillBar, config.skills.observer),
        (WatchGroup::LazyImage, config.lazy_images.observer),
    ];

    let site = Site::new(config, LocalStore::open(window), layout)?;
    let runtime = Rc::new(Runtime { site: RefCell::new(site), dom, timers: timers::Timers::new() });

    let effects = runtime.site.borrow_mut().start(&snapshot);
    runtime.apply(&effects);

    for (group, observer) in watch {
        observe::watch(&runtime, group, observer)?;
    }
    let wired = listen::wire(&runtime);

    if is_dev_host(&window.location().hostname().unwrap_or_default()) {
        log::info!("folio (development) wired: {}", wired.join(", "));
    }
    log::debug!("folio started");
    Ok(())
}

/// Shared state behind every listener, observer, and timer.
struct Runtime {
    site: RefCell<Site<LocalStore>>,
    dom: dom::Dom,
    timers: timers::Timers,
}

impl Runtime {
    fn dispatch(self: &Rc<Self>, event: Event) {
        let effects = self.site.borrow_mut().handle(event);
        self.apply(&effects);
    }

    fn run(self: &Rc<Self>, task: Task) {
        let effects = self.site.borrow_mut().run(task);
        self.apply(&effects);
    }

    fn apply(self: &Rc<Self>, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Schedule { task, delay_ms } => self.timers.schedule(self, *task, *delay_ms, false),
                Effect::Repeat { task, interval_ms } => self.timers.schedule(self, *task, *interval_ms, true),
                Effect::Cancel(task) => self.timers.cancel(*task),
                other => {
                    if let Err(err) = self.dom.apply(other) {
                        log::warn!("failed to apply {other:?}: {err:?}");
                    }
                }
            }
        }
    }
}

/// A failed cast or lookup turned into `None`, with the error logged.
trait OkOrLog<T> {
    fn ok_or_log(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> OkOrLog<T> for Result<T, E> {
    fn ok_or_log(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("skipped: {err:?}");
                None
            }
        }
    }
}
