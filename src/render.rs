use glam::Vec2;
use portrait_core::{DotColor, Surface, Viewport};
use std::f64::consts::TAU;
use web_sys as web;

use crate::dom;

/// Canvas 2D implementation of the portrait surface.
///
/// Drawing happens in CSS pixels; `begin_frame` sets a devicePixelRatio scale
/// so the backing store stays crisp on high-density displays.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
    last_fill: Option<DotColor>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        let viewport = dom::measure_viewport(&canvas);
        Self {
            canvas,
            ctx,
            viewport,
            last_fill: None,
        }
    }

    /// Re-measure the container, resize the backing store if needed and reset
    /// the device pixel transform.
    pub fn begin_frame(&mut self) {
        self.viewport = dom::measure_viewport(&self.canvas);
        if dom::sync_canvas_backing_size(&self.canvas, &self.viewport) {
            log::debug!(
                "[render] backing store {}x{} (dpr {:.2})",
                self.canvas.width(),
                self.canvas.height(),
                self.viewport.device_pixel_ratio
            );
            // Resizing resets the context state, including the fill style.
            self.last_fill = None;
        }
        let dpr = self.viewport.device_pixel_ratio;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("[render] set_transform failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.viewport.css_width, self.viewport.css_height);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &DotColor) {
        if self.last_fill.as_ref() != Some(color) {
            self.ctx.set_fill_style_str(&color.css());
            self.last_fill = Some(color.clone());
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
