#![cfg(target_arch = "wasm32")]
use instant::Instant;
use portrait_core::{AnimationClock, Phase, PointCloud, Pointer, PortraitConfig, Teardown};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;
mod timers;

use constants::*;

thread_local! {
    // Portrait mounted by `start`; kept alive for the lifetime of the page.
    static AUTO_MOUNTED: RefCell<Option<PortraitHandle>> = const { RefCell::new(None) };
}

/// Owner of everything a mounted portrait scheduled. Calling `stop` cancels the
/// frame loop, both intervals, the burst timeout and all listeners.
#[wasm_bindgen]
pub struct PortraitHandle {
    teardown: Rc<RefCell<Teardown>>,
    phase: Rc<Cell<Phase>>,
}

#[wasm_bindgen]
impl PortraitHandle {
    pub fn stop(&self) {
        if self.phase.get() == Phase::Stopped {
            return;
        }
        self.teardown.borrow_mut().stop();
        self.phase.set(Phase::Stopped);
        log::info!("[portrait] stopped");
    }

    pub fn phase(&self) -> String {
        self.phase.get().as_str().to_string()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portrait-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if document.get_element_by_id(CANVAS_ID).is_none() {
        log::info!("[portrait] no #{}; waiting for mount()", CANVAS_ID);
        return Ok(());
    }
    match mount_by_id(CANVAS_ID) {
        Ok(handle) => AUTO_MOUNTED.with(|m| *m.borrow_mut() = Some(handle)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Mount a portrait on the canvas with the given element id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<PortraitHandle, JsValue> {
    mount_by_id(canvas_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn mount_by_id(canvas_id: &str) -> anyhow::Result<PortraitHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let url = canvas
        .get_attribute(DOT_MAP_ATTR)
        .unwrap_or_else(|| DEFAULT_DOT_MAP_URL.to_string());
    let config = PortraitConfig::default();

    let teardown = Rc::new(RefCell::new(Teardown::new()));
    let phase = Rc::new(Cell::new(Phase::Loading));
    let clock = Rc::new(RefCell::new(AnimationClock::new()));
    let pointer = Rc::new(Cell::new(Pointer::PARKED));

    overlay::show_loading(&document);
    dom::sync_canvas_backing_size(&canvas, &dom::measure_viewport(&canvas));

    {
        let mut td = teardown.borrow_mut();
        let canvas_resize = canvas.clone();
        events::listen(
            &window,
            "resize",
            move |_ev: web::Event| {
                let viewport = dom::measure_viewport(&canvas_resize);
                dom::sync_canvas_backing_size(&canvas_resize, &viewport);
            },
            &mut td,
        );
        events::wire_pointer_handlers(&window, &canvas, pointer.clone(), &mut td);
        wire_clock_timers(&window, &clock, &mut td);
    }

    let live = teardown.borrow().liveness();
    let teardown_load = teardown.clone();
    let phase_load = phase.clone();
    spawn_local(async move {
        let loaded = loader::load_dots(&url, &config.filter).await;
        if !live.get() {
            log::info!("[portrait] dot map arrived after stop; discarding");
            return;
        }
        overlay::hide_loading(&document);
        let dots = match loaded {
            Ok(dots) => dots,
            Err(e) => {
                log::error!("[loader] error loading dot data: {:?}", e);
                phase_load.set(Phase::Empty);
                return;
            }
        };
        let next = Phase::after_load(dots.len());
        if next == Phase::Empty {
            log::warn!("[portrait] no dots inside the filter window; nothing to animate");
            phase_load.set(next);
            return;
        }
        let mut rng = StdRng::from_entropy();
        let cloud = PointCloud::new(&dots, config, &mut rng);
        let frame_ctx = frame::FrameContext {
            cloud,
            clock,
            pointer,
            surface: render::CanvasSurface::new(canvas, ctx),
            rng,
            last_instant: Instant::now(),
        };
        frame::start_loop(frame_ctx, &mut teardown_load.borrow_mut());
        phase_load.set(next);
    });

    Ok(PortraitHandle { teardown, phase })
}

/// Breathing clock at a fixed tick, plus the burst roll and its auto-reset.
fn wire_clock_timers(window: &web::Window, clock: &Rc<RefCell<AnimationClock>>, td: &mut Teardown) {
    let clock_breathe = clock.clone();
    timers::every(
        window,
        "breathing",
        BREATHING_INTERVAL_MS,
        move || clock_breathe.borrow_mut().tick_breathing(),
        td,
    );

    let clock_end = clock.clone();
    let burst_end = timers::Timeout::new(
        window,
        "burst-end",
        BURST_DURATION_MS,
        move || clock_end.borrow_mut().end_burst(),
        td,
    );
    let clock_roll = clock.clone();
    let mut rng = StdRng::from_entropy();
    timers::every(
        window,
        "burst-roll",
        BURST_ROLL_INTERVAL_MS,
        move || {
            if clock_roll.borrow_mut().roll_burst(&mut rng) {
                burst_end.arm();
            }
        },
        td,
    );
}
