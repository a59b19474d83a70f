//! The animated point cloud: both dot layers plus the per-frame update and draw.

use crate::clock::AnimationClock;
use crate::config::PortraitConfig;
use crate::dot::{Dot, DotColor};
use crate::motion::{self, Pointer};
use crate::render::{self, Surface};
use crate::spring;
use crate::synth::{self, AnimatedDot};
use glam::Vec2;
use rand::Rng;

/// Lifecycle of a mounted portrait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Animating,
    Empty,
    Stopped,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Animating => "animating",
            Phase::Empty => "empty",
            Phase::Stopped => "stopped",
        }
    }

    /// Phase to enter once a load finished with `kept` usable dots.
    pub fn after_load(kept: usize) -> Self {
        if kept == 0 {
            Phase::Empty
        } else {
            Phase::Animating
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Background,
    Foreground,
}

/// Read-only view of one dot for consumers outside the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct DotSnapshot {
    pub layer: Layer,
    pub original: Vec2,
    pub position: Vec2,
    pub depth: f32,
    pub radius: f32,
    pub color: DotColor,
    pub hovered: bool,
}

pub struct PointCloud {
    config: PortraitConfig,
    background: Vec<AnimatedDot>,
    foreground: Vec<AnimatedDot>,
}

impl PointCloud {
    /// Build both layers from already-filtered samples.
    pub fn new<R: Rng + ?Sized>(dots: &[Dot], config: PortraitConfig, rng: &mut R) -> Self {
        let foreground = synth::foreground_dots(dots, &config, rng);
        let background = synth::background_dots(dots, &config, rng);
        log::info!(
            "[portrait] point cloud: foreground={} background={}",
            foreground.len(),
            background.len()
        );
        Self {
            config,
            background,
            foreground,
        }
    }

    pub fn empty(config: PortraitConfig) -> Self {
        Self {
            config,
            background: Vec::new(),
            foreground: Vec::new(),
        }
    }

    pub fn config(&self) -> &PortraitConfig {
        &self.config
    }

    pub fn foreground_len(&self) -> usize {
        self.foreground.len()
    }

    pub fn background_len(&self) -> usize {
        self.background.len()
    }

    pub fn len(&self) -> usize {
        self.background.len() + self.foreground.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance every dot by one frame. `t` is the breathing time for this frame
    /// and `dt_sec` the unclamped wall-clock delta since the previous frame.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        t: f32,
        dt_sec: f32,
        clock: &AnimationClock,
        pointer: Pointer,
        rng: &mut R,
    ) {
        let dt = spring::clamp_dt(dt_sec, &self.config.spring);
        let motion = &self.config.motion;
        let springs = &self.config.spring;
        for dot in self.background.iter_mut().chain(self.foreground.iter_mut()) {
            let sample = motion::evaluate(dot, t, clock, pointer, motion, rng);
            let rate = spring::spring_rate(dot.depth, sample.hovered, springs);
            dot.current = spring::step(dot.current, sample.target, dt, rate);
        }
    }

    /// Clear the surface and draw background then foreground.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for dot in self.background.iter().chain(self.foreground.iter()) {
            render::draw_dot(surface, dot, &self.config.motion);
        }
        surface.set_global_alpha(1.0);
    }

    /// Update at the clock's current breathing time, then draw.
    pub fn frame<S: Surface + ?Sized, R: Rng + ?Sized>(
        &mut self,
        surface: &mut S,
        clock: &AnimationClock,
        pointer: Pointer,
        dt_sec: f32,
        rng: &mut R,
    ) {
        self.step(clock.breathing_time, dt_sec, clock, pointer, rng);
        self.draw(surface);
    }

    pub fn snapshot(&self) -> Vec<DotSnapshot> {
        let tag = |layer: Layer| {
            move |d: &AnimatedDot| DotSnapshot {
                layer,
                original: d.original,
                position: d.current,
                depth: d.depth,
                radius: d.radius,
                color: d.color.clone(),
                hovered: d.hovered,
            }
        };
        self.background
            .iter()
            .map(tag(Layer::Background))
            .chain(self.foreground.iter().map(tag(Layer::Foreground)))
            .collect()
    }
}
