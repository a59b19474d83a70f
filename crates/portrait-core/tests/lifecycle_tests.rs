// Host-side tests for the animation clock, teardown registry and viewport sizing.

use portrait_core::{AnimationClock, Teardown, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn stop_runs_every_cancel_once_in_reverse_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut teardown = Teardown::new();
    for label in ["resize", "breathing", "frame"] {
        let order = order.clone();
        teardown.register(label, move || order.borrow_mut().push(label));
    }
    assert_eq!(teardown.pending(), 3);
    assert!(teardown.is_live());

    teardown.stop();
    assert_eq!(*order.borrow(), vec!["frame", "breathing", "resize"]);
    assert_eq!(teardown.pending(), 0);
    assert!(!teardown.is_live());

    teardown.stop();
    assert_eq!(order.borrow().len(), 3);
}

#[test]
fn liveness_flag_is_shared() {
    let mut teardown = Teardown::new();
    let live = teardown.liveness();
    assert!(live.get());
    teardown.stop();
    assert!(!live.get());
}

#[test]
fn registering_after_stop_cancels_immediately() {
    let mut teardown = Teardown::new();
    teardown.stop();
    let hit = Rc::new(Cell::new(0));
    let h = hit.clone();
    teardown.register("late", move || h.set(h.get() + 1));
    assert_eq!(hit.get(), 1);
    assert_eq!(teardown.pending(), 0);
}

#[test]
fn dropping_releases_everything() {
    let hit = Rc::new(Cell::new(0));
    {
        let mut teardown = Teardown::new();
        for _ in 0..4 {
            let h = hit.clone();
            teardown.register("timer", move || h.set(h.get() + 1));
        }
    }
    assert_eq!(hit.get(), 4);
}

#[test]
fn clock_breathing_advances() {
    let mut clock = AnimationClock::new();
    clock.tick_breathing();
    clock.tick_breathing();
    assert!((clock.breathing_time - 0.032).abs() < 1e-6);
}

#[test]
fn bursts_start_about_one_time_in_five() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut clock = AnimationClock::new();
    let rolls = 5000;
    let mut started = 0;
    for _ in 0..rolls {
        if clock.roll_burst(&mut rng) {
            assert!(clock.organic_active);
            started += 1;
            clock.end_burst();
        }
        assert!(!clock.organic_active);
    }
    assert_eq!(clock.burst_count, started);
    let rate = started as f32 / rolls as f32;
    assert!(rate > 0.17 && rate < 0.23, "rate {}", rate);
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    let vp = Viewport {
        css_width: 512.0,
        css_height: 384.0,
        device_pixel_ratio: 2.0,
    };
    assert_eq!(vp.backing_size(), (1024, 768));

    let fractional = Viewport {
        css_width: 333.0,
        css_height: 100.0,
        device_pixel_ratio: 1.5,
    };
    assert_eq!(fractional.backing_size(), (499, 150));
}

#[test]
fn backing_size_is_never_zero() {
    let collapsed = Viewport {
        css_width: 0.0,
        css_height: 0.0,
        device_pixel_ratio: 2.0,
    };
    assert_eq!(collapsed.backing_size(), (1, 1));

    let bad_dpr = Viewport {
        css_width: 200.0,
        css_height: 100.0,
        device_pixel_ratio: f64::NAN,
    };
    assert_eq!(bad_dpr.backing_size(), (200, 100));
}

#[test]
fn displayed_size_stays_at_container_size_on_dense_screens() {
    let vp = Viewport {
        css_width: 400.0,
        css_height: 300.0,
        device_pixel_ratio: 2.0,
    };
    assert_eq!(vp.backing_size(), (800, 600));
    assert_eq!(vp.css_size(), ("400px".to_string(), "300px".to_string()));

    let fractional = Viewport {
        css_width: 320.5,
        css_height: -4.0,
        device_pixel_ratio: 1.0,
    };
    assert_eq!(fractional.css_size(), ("320.5px".to_string(), "0px".to_string()));
}
