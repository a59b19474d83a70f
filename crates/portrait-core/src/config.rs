//! Tunable parameters for loading, synthesizing and animating the portrait.
//!
//! Every field defaults to the values in [`crate::constants`]; a front-end can
//! override individual knobs with struct update syntax.

use crate::constants::*;

/// Exclusive x-range a dot must fall inside to be kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterBounds {
    pub min_x: f32,
    pub max_x: f32,
}

impl FilterBounds {
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        self.min_x < x && x < self.max_x
    }
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            min_x: FILTER_MIN_X,
            max_x: FILTER_MAX_X,
        }
    }
}

/// A uniform draw in `[base, base + span)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
    pub base: f32,
    pub span: f32,
}

impl Spread {
    pub const fn new(base: f32, span: f32) -> Self {
        Self { base, span }
    }

    #[inline]
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.base + rng.gen::<f32>() * self.span
    }
}

/// Per-layer ranges for the random oscillator parameters of each dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorRanges {
    pub breathe_speed: Spread,
    pub breathe_amount: Spread,
    pub organic_offset: Spread,
    pub organic_speed: Spread,
}

pub const FOREGROUND_OSCILLATORS: OscillatorRanges = OscillatorRanges {
    breathe_speed: Spread::new(0.3, 0.4),
    breathe_amount: Spread::new(1.2, 0.8),
    organic_offset: Spread::new(-2.5, 5.0),
    organic_speed: Spread::new(0.25, 0.35),
};

pub const BACKGROUND_OSCILLATORS: OscillatorRanges = OscillatorRanges {
    breathe_speed: Spread::new(0.15, 0.25),
    breathe_amount: Spread::new(0.6, 0.6),
    organic_offset: Spread::new(-1.5, 3.0),
    organic_speed: Spread::new(0.15, 0.25),
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub breathe_y_freq: f32,
    pub repulsion_max_distance: f32,
    pub repulsion_strength: f32,
    pub hover_distance: f32,
    pub hover_jitter: f32,
    pub hover_size_multiplier: f32,
    pub burst_phase_rate: f32,
    pub burst_amplitude: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            breathe_y_freq: BREATHE_Y_FREQ,
            repulsion_max_distance: REPULSION_MAX_DISTANCE,
            repulsion_strength: REPULSION_STRENGTH,
            hover_distance: HOVER_DISTANCE,
            hover_jitter: HOVER_JITTER,
            hover_size_multiplier: HOVER_SIZE_MULTIPLIER,
            burst_phase_rate: BURST_PHASE_RATE,
            burst_amplitude: BURST_AMPLITUDE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub rate: f32,
    pub rate_hovered: f32,
    pub max_dt: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            rate: SPRING_RATE,
            rate_hovered: SPRING_RATE_HOVERED,
            max_dt: MAX_FRAME_DT_SEC,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortraitConfig {
    pub filter: FilterBounds,
    pub foreground_radius_scale: f32,
    pub background_ratio: f64,
    pub background_jitter: f32,
    pub background_max_depth: f32,
    pub foreground_oscillators: OscillatorRanges,
    pub background_oscillators: OscillatorRanges,
    pub motion: MotionParams,
    pub spring: SpringParams,
}

impl Default for PortraitConfig {
    fn default() -> Self {
        Self {
            filter: FilterBounds::default(),
            foreground_radius_scale: FOREGROUND_RADIUS_SCALE,
            background_ratio: BACKGROUND_RATIO,
            background_jitter: BACKGROUND_JITTER,
            background_max_depth: BACKGROUND_MAX_DEPTH,
            foreground_oscillators: FOREGROUND_OSCILLATORS,
            background_oscillators: BACKGROUND_OSCILLATORS,
            motion: MotionParams::default(),
            spring: SpringParams::default(),
        }
    }
}
