use portrait_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("getContext error: {:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Displayed size of the canvas' container (or the canvas itself when detached)
/// together with the current device pixel ratio.
pub fn measure_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w, h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
        None => {
            let rect = canvas.get_bounding_client_rect();
            (rect.width(), rect.height())
        }
    };
    Viewport {
        css_width: w,
        css_height: h,
        device_pixel_ratio: dpr,
    }
}

/// Match the backing store to container size * devicePixelRatio and pin the
/// displayed size to the container. Returns true when the backing store was
/// resized (which also resets its 2D state).
fn pin_css_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let style = canvas.style();
    let (w, h) = viewport.css_size();
    for (prop, value) in [("width", w), ("height", h)] {
        if style.get_property_value(prop).ok().as_deref() != Some(value.as_str()) {
            if let Err(e) = style.set_property(prop, &value) {
                log::warn!("[dom] canvas style {} failed: {:?}", prop, e);
            }
        }
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) -> bool {
    pin_css_size(canvas, viewport);
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}
