//! Drawing contract and per-dot draw rules.
//!
//! The renderer only needs an immediate-mode 2D surface; the web front-end
//! backs it with a canvas context, tests with [`RecordingSurface`].

use crate::config::MotionParams;
use crate::constants::{ALPHA_BASE, ALPHA_DEPTH};
use crate::dot::DotColor;
use crate::synth::AnimatedDot;
use glam::Vec2;

/// Immediate-mode surface in design-space units. Device pixel scaling is the
/// implementor's concern.
pub trait Surface {
    fn clear(&mut self);
    fn set_global_alpha(&mut self, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &DotColor);
}

/// Displayed size of the drawing surface plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Backing store size in device pixels; never zero so the canvas stays valid.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        let w = (self.css_width.max(0.0) * dpr) as u32;
        let h = (self.css_height.max(0.0) * dpr) as u32;
        (w.max(1), h.max(1))
    }

    /// CSS `width` / `height` values that pin the displayed size, so the
    /// larger backing store does not change layout.
    pub fn css_size(&self) -> (String, String) {
        (
            format!("{}px", self.css_width.max(0.0)),
            format!("{}px", self.css_height.max(0.0)),
        )
    }
}

#[inline]
pub fn dot_alpha(depth: f32) -> f32 {
    ALPHA_BASE + depth * ALPHA_DEPTH
}

#[inline]
pub fn dot_draw_radius(dot: &AnimatedDot, params: &MotionParams) -> f32 {
    let hover = if dot.hovered {
        params.hover_size_multiplier
    } else {
        1.0
    };
    dot.radius * dot.depth * hover
}

pub fn draw_dot<S: Surface + ?Sized>(surface: &mut S, dot: &AnimatedDot, params: &MotionParams) {
    surface.set_global_alpha(dot_alpha(dot.depth));
    surface.fill_circle(dot.current, dot_draw_radius(dot, params), &dot.color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Alpha(f32),
    Circle {
        center: Vec2,
        radius: f32,
        color: DotColor,
    },
}

/// Surface that records every call, for headless inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Circles in draw order, each paired with the alpha active when it was drawn.
    pub fn circles(&self) -> Vec<(Vec2, f32, f32, &DotColor)> {
        let mut alpha = 1.0;
        let mut out = Vec::new();
        for c in &self.commands {
            match c {
                DrawCommand::Alpha(a) => alpha = *a,
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => out.push((*center, *radius, alpha, color)),
                DrawCommand::Clear => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &DotColor) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.clone(),
        });
    }
}
