pub mod pointer;

pub use pointer::wire_pointer_handlers;

use portrait_core::Teardown;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` to `target` and register its removal with `teardown`.
/// The closure is kept alive by the cancel action rather than leaked.
pub fn listen<E>(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(E) + 'static,
    teardown: &mut Teardown,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] failed to add {} listener: {:?}", kind, e);
        return;
    }
    let target = target.clone();
    teardown.register(kind, move || {
        _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        drop(closure);
    });
}
