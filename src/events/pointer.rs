use super::listen;
use portrait_core::{Pointer, Teardown};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Pointer {
    let rect = canvas.get_bounding_client_rect();
    Pointer::at(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
    )
}

/// Track the pointer on the whole window and park it when it leaves the canvas.
pub fn wire_pointer_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<Cell<Pointer>>,
    teardown: &mut Teardown,
) {
    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    listen(
        window,
        "mousemove",
        move |ev: web::MouseEvent| {
            pointer_move.set(pointer_canvas_css(&ev, &canvas_move));
        },
        teardown,
    );

    listen(
        canvas,
        "mouseleave",
        move |_ev: web::MouseEvent| {
            pointer.set(Pointer::PARKED);
        },
        teardown,
    );
}
