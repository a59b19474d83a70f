use crate::config::SpringParams;
use glam::Vec2;

/// Clamp a raw frame delta so a stalled tab does not fling dots on resume.
#[inline]
pub fn clamp_dt(dt_sec: f32, params: &SpringParams) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, params.max_dt)
    } else {
        0.0
    }
}

#[inline]
pub fn spring_rate(depth: f32, hovered: bool, params: &SpringParams) -> f32 {
    depth
        * if hovered {
            params.rate_hovered
        } else {
            params.rate
        }
}

/// One exponential smoothing step of `current` toward `target`.
///
/// `dt_sec` must already be clamped; with the default rates the step factor
/// stays below 1 so the position never overshoots.
#[inline]
pub fn step(current: Vec2, target: Vec2, dt_sec: f32, rate: f32) -> Vec2 {
    current + (target - current) * dt_sec * rate
}
