//! Construction of animated dots: the foreground layer from the loaded
//! samples and the synthesized background layer behind it.

use crate::config::{OscillatorRanges, PortraitConfig};
use crate::constants::{
    BACKGROUND_RADIUS_BASE, BACKGROUND_RADIUS_DEPTH, BACKGROUND_RADIUS_SCALE, DARKEN_BASE,
    DARKEN_DEPTH, FOREGROUND_DEPTH,
};
use crate::dot::{Dot, DotColor};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A dot plus everything needed to animate it.
///
/// `original` and `depth` never change after construction; `current` and the
/// hover fields are updated by the frame step.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedDot {
    pub original: Vec2,
    pub current: Vec2,
    pub color: DotColor,
    pub radius: f32,
    pub depth: f32,
    pub breathe_phase: f32,
    pub breathe_speed: f32,
    pub breathe_amount: f32,
    pub organic_offset: Vec2,
    pub organic_phase: f32,
    pub organic_speed: f32,
    pub hovered: bool,
    pub hover_offset: Vec2,
}

impl AnimatedDot {
    /// A resting dot at `position` with oscillator parameters drawn from `ranges`.
    pub fn new<R: Rng + ?Sized>(
        position: Vec2,
        color: DotColor,
        radius: f32,
        depth: f32,
        ranges: &OscillatorRanges,
        rng: &mut R,
    ) -> Self {
        Self {
            original: position,
            current: position,
            color,
            radius,
            depth,
            breathe_phase: rng.gen::<f32>() * TAU,
            breathe_speed: ranges.breathe_speed.sample(rng),
            breathe_amount: ranges.breathe_amount.sample(rng),
            organic_offset: Vec2::new(
                ranges.organic_offset.sample(rng),
                ranges.organic_offset.sample(rng),
            ),
            organic_phase: rng.gen::<f32>() * TAU,
            organic_speed: ranges.organic_speed.sample(rng),
            hovered: false,
            hover_offset: Vec2::ZERO,
        }
    }
}

/// Foreground layer: one dot per sample at full depth and reduced radius.
pub fn foreground_dots<R: Rng + ?Sized>(
    dots: &[Dot],
    config: &PortraitConfig,
    rng: &mut R,
) -> Vec<AnimatedDot> {
    dots.iter()
        .map(|d| {
            AnimatedDot::new(
                d.position,
                d.color.clone(),
                d.radius * config.foreground_radius_scale,
                FOREGROUND_DEPTH,
                &config.foreground_oscillators,
                rng,
            )
        })
        .collect()
}

#[inline]
pub fn background_count(primary: usize, ratio: f64) -> usize {
    (primary as f64 * ratio).floor() as usize
}

#[inline]
pub fn darken_factor(depth: f32) -> f32 {
    DARKEN_BASE + depth * DARKEN_DEPTH
}

#[inline]
pub fn background_radius(template_radius: f32, depth: f32) -> f32 {
    template_radius
        * BACKGROUND_RADIUS_SCALE
        * (BACKGROUND_RADIUS_BASE + depth * BACKGROUND_RADIUS_DEPTH)
}

/// Background layer: `floor(ratio * N)` jittered, shrunk and darkened copies of
/// randomly chosen templates. No templates means no background.
pub fn background_dots<R: Rng + ?Sized>(
    templates: &[Dot],
    config: &PortraitConfig,
    rng: &mut R,
) -> Vec<AnimatedDot> {
    if templates.is_empty() {
        return Vec::new();
    }
    let count = background_count(templates.len(), config.background_ratio);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let template = &templates[rng.gen_range(0..templates.len())];
        let jitter = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.background_jitter,
            (rng.gen::<f32>() - 0.5) * config.background_jitter,
        );
        let depth = rng.gen::<f32>() * config.background_max_depth;
        out.push(AnimatedDot::new(
            template.position + jitter,
            template.color.darken(darken_factor(depth)),
            background_radius(template.radius, depth),
            depth,
            &config.background_oscillators,
            rng,
        ));
    }
    out
}
