// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the plain constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use portrait_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive_and_ordered() {
    assert!(BREATHING_INTERVAL_MS > 0);
    assert!(BURST_DURATION_MS > 0);
    // A burst must end before the next roll can start another.
    assert!(BURST_DURATION_MS < BURST_ROLL_INTERVAL_MS);
}

#[test]
fn breathing_tick_matches_interval() {
    let interval_sec = BREATHING_INTERVAL_MS as f32 / 1000.0;
    assert!((BREATHE_TICK_SEC - interval_sec).abs() < 1e-6);
}

#[test]
fn dom_hooks_are_well_formed() {
    assert!(!CANVAS_ID.is_empty() && !CANVAS_ID.contains(' '));
    assert!(!LOADING_ID.is_empty() && !LOADING_ID.contains(' '));
    assert_ne!(CANVAS_ID, LOADING_ID);
    assert!(!LOADING_HIDDEN_CLASS.is_empty() && !LOADING_HIDDEN_CLASS.contains(' '));
    assert!(DOT_MAP_ATTR.starts_with("data-"));
    assert!(DEFAULT_DOT_MAP_URL.ends_with(".json"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn filter_window_is_nonempty() {
    assert!(FILTER_MIN_X < FILTER_MAX_X);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_have_logical_relationships() {
    // Background never outranks the foreground.
    assert!(BACKGROUND_MAX_DEPTH < FOREGROUND_DEPTH);
    assert!(BACKGROUND_RATIO > 0.0 && BACKGROUND_RATIO < 1.0);

    // Darkening stays a darkening across the whole background depth range.
    assert!(DARKEN_BASE + BACKGROUND_MAX_DEPTH * DARKEN_DEPTH <= 1.0);

    // Hover softens the spring rather than stiffening it.
    assert!(SPRING_RATE_HOVERED < SPRING_RATE);
    // Largest step factor stays below 1 so integration never overshoots.
    assert!(SPRING_RATE * FOREGROUND_DEPTH * MAX_FRAME_DT_SEC < 1.0);

    // The parked pointer is out of repulsion range for every on-canvas dot.
    let parked = (POINTER_PARKED[0] * POINTER_PARKED[0] + POINTER_PARKED[1] * POINTER_PARKED[1])
        .sqrt();
    assert!(parked >= REPULSION_MAX_DISTANCE || POINTER_PARKED[0] + REPULSION_MAX_DISTANCE <= FILTER_MIN_X);

    assert!(ALPHA_BASE + ALPHA_DEPTH <= 1.0 + 1e-6);
    assert!(HOVER_SIZE_MULTIPLIER > 1.0);
    assert!(BURST_PROBABILITY > 0.0 && BURST_PROBABILITY < 1.0);
}
