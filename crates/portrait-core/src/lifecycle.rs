//! Scoped ownership of everything a mounted portrait schedules.
//!
//! Timers, listeners and the frame callback each register a cancel action.
//! `stop` runs them all once and flips the shared liveness flag, which the
//! frame loop checks before rescheduling itself.

use std::cell::Cell;
use std::rc::Rc;

type Cancel = Box<dyn FnOnce()>;

pub struct Teardown {
    live: Rc<Cell<bool>>,
    cancels: Vec<(&'static str, Cancel)>,
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}

impl Teardown {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
            cancels: Vec::new(),
        }
    }

    /// Shared flag that reads false once `stop` has run.
    pub fn liveness(&self) -> Rc<Cell<bool>> {
        self.live.clone()
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Register a cancel action. After `stop` the action runs immediately.
    pub fn register(&mut self, label: &'static str, cancel: impl FnOnce() + 'static) {
        if self.is_live() {
            self.cancels.push((label, Box::new(cancel)));
        } else {
            log::debug!("[lifecycle] {} registered after stop; cancelling now", label);
            cancel();
        }
    }

    pub fn pending(&self) -> usize {
        self.cancels.len()
    }

    /// Cancel everything in reverse registration order. Safe to call twice.
    pub fn stop(&mut self) {
        self.live.set(false);
        let n = self.cancels.len();
        while let Some((label, cancel)) = self.cancels.pop() {
            log::debug!("[lifecycle] cancel {}", label);
            cancel();
        }
        if n > 0 {
            log::info!("[lifecycle] released {} resources", n);
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.stop();
    }
}
