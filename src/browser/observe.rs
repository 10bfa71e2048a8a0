//! One `IntersectionObserver` per watch group.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Runtime;
use crate::config::ObserverConfig;
use crate::effect::WatchGroup;
use crate::reveal::IntersectionSample;
use crate::site::Event;

/// Observe every element of `group`, reporting samples as [`Event::Intersection`].
pub(super) fn watch(runtime: &Rc<Runtime>, group: WatchGroup, config: ObserverConfig) -> Result<(), JsValue> {
    let targets = runtime.dom.watched(group).to_vec();
    if targets.is_empty() {
        log::debug!("nothing to observe for {group:?}");
        return Ok(());
    }

    let handler = Rc::clone(runtime);
    let elements = targets.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = elements.iter().position(|el| *el == target) else {
                    continue;
                };
                let sample =
                    IntersectionSample { intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() };
                handler.dispatch(Event::Intersection { group, index, sample });
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in &targets {
        observer.observe(el);
    }
    runtime.dom.register_observer(group, observer);
    // The observer calls back for the lifetime of the page.
    callback.forget();
    log::debug!("observing {} elements for {group:?}", targets.len());
    Ok(())
}
