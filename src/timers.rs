use portrait_core::Teardown;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `handler` every `period_ms` until the teardown stops it.
pub fn every(
    window: &web::Window,
    label: &'static str,
    period_ms: i32,
    handler: impl FnMut() + 'static,
    teardown: &mut Teardown,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let id = match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms,
    ) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("[timers] {} interval failed: {:?}", label, e);
            return;
        }
    };
    let window = window.clone();
    teardown.register(label, move || {
        window.clear_interval_with_handle(id);
        drop(closure);
    });
}

/// Re-armable one-shot timer. Arming while pending replaces the pending call.
#[derive(Clone)]
pub struct Timeout {
    window: web::Window,
    delay_ms: i32,
    handle: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Timeout {
    pub fn new(
        window: &web::Window,
        label: &'static str,
        delay_ms: i32,
        mut handler: impl FnMut() + 'static,
        teardown: &mut Teardown,
    ) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let handle_fired = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            handle_fired.set(None);
            handler();
        }) as Box<dyn FnMut()>);
        let timeout = Self {
            window: window.clone(),
            delay_ms,
            handle,
            closure: Rc::new(RefCell::new(Some(closure))),
        };
        let pending = timeout.clone();
        teardown.register(label, move || {
            pending.cancel();
            pending.closure.borrow_mut().take();
        });
        timeout
    }

    pub fn arm(&self) {
        self.cancel();
        let closure = self.closure.borrow();
        let Some(cb) = closure.as_ref() else {
            return;
        };
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                self.delay_ms,
            ) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::warn!("[timers] set_timeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
