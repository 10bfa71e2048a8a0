//! Task timers on the browser event loop.
//!
//! Each pending task owns a cancel flag. A timer is a local future that
//! sleeps, checks its flag, and runs the task back through the runtime;
//! repeating timers loop until cancelled. Scheduling a task that is already
//! pending cancels the old timer first. Zero-interval repeats are refused.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use super::Runtime;
use crate::effect::Task;

pub(super) struct Timers {
    pending: RefCell<HashMap<Task, Rc<Cell<bool>>>>,
}

impl Timers {
    pub(super) fn new() -> Self {
        Self { pending: RefCell::new(HashMap::new()) }
    }

    pub(super) fn schedule(&self, runtime: &Rc<Runtime>, task: Task, delay_ms: u32, repeat: bool) {
        self.cancel(task);
        if repeat && delay_ms == 0 {
            log::warn!("refusing zero-interval repeat of {task:?}");
            return;
        }
        let cancelled = Rc::new(Cell::new(false));
        self.pending.borrow_mut().insert(task, Rc::clone(&cancelled));
        log::trace!("timer armed: {task:?} in {delay_ms}ms (repeat: {repeat})");

        let runtime = Rc::clone(runtime);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(delay_ms).await;
                if cancelled.get() {
                    return;
                }
                if !repeat {
                    runtime.timers.finish(task, &cancelled);
                }
                runtime.run(task);
                if !repeat {
                    return;
                }
            }
        });
    }

    pub(super) fn cancel(&self, task: Task) {
        if let Some(flag) = self.pending.borrow_mut().remove(&task) {
            flag.set(true);
        }
    }

    /// Forget a one-shot timer that has fired, unless it was already replaced.
    fn finish(&self, task: Task, flag: &Rc<Cell<bool>>) {
        let mut pending = self.pending.borrow_mut();
        if pending.get(&task).is_some_and(|current| Rc::ptr_eq(current, flag)) {
            pending.remove(&task);
        }
    }
}
