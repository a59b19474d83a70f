//! Per-dot motion signals. Each signal is zero when its trigger is absent and
//! the target position is their sum on top of the dot's anchor.

use crate::clock::AnimationClock;
use crate::config::MotionParams;
use crate::constants::POINTER_PARKED;
use crate::synth::AnimatedDot;
use glam::Vec2;
use rand::Rng;

/// Pointer position in design space. Parked far off-canvas when absent so it
/// never influences any dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer(pub Vec2);

impl Pointer {
    pub const PARKED: Pointer = Pointer(Vec2::new(POINTER_PARKED[0], POINTER_PARKED[1]));

    pub fn at(x: f32, y: f32) -> Self {
        Pointer(Vec2::new(x, y))
    }

    pub fn park(&mut self) {
        *self = Self::PARKED;
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::PARKED
    }
}

#[inline]
pub fn breathe(dot: &AnimatedDot, t: f32, params: &MotionParams) -> Vec2 {
    let phase = dot.breathe_phase + t * dot.breathe_speed;
    Vec2::new(
        phase.sin() * dot.breathe_amount,
        (phase * params.breathe_y_freq).cos() * dot.breathe_amount,
    )
}

#[inline]
pub fn proximity(distance: f32, params: &MotionParams) -> f32 {
    (1.0 - distance / params.repulsion_max_distance).max(0.0)
}

/// Displacement pushing the dot away from the pointer. At zero distance the
/// direction degenerates to -x rather than NaN.
pub fn repulsion(dot: &AnimatedDot, pointer: Pointer, params: &MotionParams) -> Vec2 {
    let delta = pointer.0 - dot.original;
    let strength = params.repulsion_strength * proximity(delta.length(), params) * dot.depth;
    if strength == 0.0 {
        return Vec2::ZERO;
    }
    let angle = delta.y.atan2(delta.x);
    Vec2::new(-angle.cos(), -angle.sin()) * strength
}

#[inline]
pub fn is_hovered(dot: &AnimatedDot, pointer: Pointer, params: &MotionParams) -> bool {
    pointer.0.distance(dot.original) < dot.radius + params.hover_distance
}

/// Burst jitter; only active while the clock has a burst running.
pub fn organic(dot: &AnimatedDot, clock: &AnimationClock, params: &MotionParams) -> Vec2 {
    if !clock.organic_active {
        return Vec2::ZERO;
    }
    let phase =
        dot.organic_phase + clock.burst_count as f32 * params.burst_phase_rate * dot.organic_speed;
    Vec2::new(
        phase.sin() * dot.organic_offset.x * params.burst_amplitude,
        (phase * params.breathe_y_freq).cos() * dot.organic_offset.y * params.burst_amplitude,
    )
}

/// Apply the hover transition for this frame and return the jitter to use.
///
/// The jitter is drawn once on hover onset and reused until hover ends, at
/// which point it is cleared.
pub fn update_hover<R: Rng + ?Sized>(
    dot: &mut AnimatedDot,
    hovered: bool,
    params: &MotionParams,
    rng: &mut R,
) -> Vec2 {
    if hovered {
        if !dot.hovered {
            let j = params.hover_jitter;
            dot.hover_offset = Vec2::new(
                (rng.gen::<f32>() * 2.0 * j - j) * dot.depth,
                (rng.gen::<f32>() * 2.0 * j - j) * dot.depth,
            );
        }
    } else {
        dot.hover_offset = Vec2::ZERO;
    }
    dot.hovered = hovered;
    dot.hover_offset
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub target: Vec2,
    pub hovered: bool,
}

/// Evaluate all signals for one dot at breathing time `t`.
pub fn evaluate<R: Rng + ?Sized>(
    dot: &mut AnimatedDot,
    t: f32,
    clock: &AnimationClock,
    pointer: Pointer,
    params: &MotionParams,
    rng: &mut R,
) -> MotionSample {
    let hovered = is_hovered(dot, pointer, params);
    let hover = update_hover(dot, hovered, params, rng);
    let target = dot.original
        + breathe(dot, t, params)
        + organic(dot, clock, params)
        + repulsion(dot, pointer, params)
        + hover;
    MotionSample { target, hovered }
}
