use crate::render::CanvasSurface;
use instant::Instant;
use portrait_core::{AnimationClock, PointCloud, Pointer, Teardown};
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub cloud: PointCloud,
    pub clock: Rc<RefCell<AnimationClock>>,
    pub pointer: Rc<Cell<Pointer>>,
    pub surface: CanvasSurface,
    pub rng: StdRng,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.surface.begin_frame();
        let clock = self.clock.borrow();
        self.cloud.frame(
            &mut self.surface,
            &clock,
            self.pointer.get(),
            dt_sec,
            &mut self.rng,
        );
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `teardown` stops it.
pub fn start_loop(frame_ctx: FrameContext, teardown: &mut Teardown) {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let live = teardown.liveness();
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if !live.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            raf_id_tick.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(request_frame(cb));
    }

    teardown.register("animation-frame", move || {
        if let (Some(id), Some(w)) = (raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference so the dots are freed.
        tick.borrow_mut().take();
    });
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
