use crate::constants::{LOADING_HIDDEN_CLASS, LOADING_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Toggle the loading overlay, if the page has one. The overlay is hidden by
/// class, by the `hidden` property and by inline `display`, so it disappears
/// whether or not the page styles the class.
pub fn set_loading(document: &web::Document, loading: bool) {
    let Some(el) = document.get_element_by_id(LOADING_ID) else {
        return;
    };
    _ = el
        .class_list()
        .toggle_with_force(LOADING_HIDDEN_CLASS, !loading);
    _ = el.set_attribute("aria-hidden", if loading { "false" } else { "true" });
    if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
        html.set_hidden(!loading);
        let style = html.style();
        _ = if loading {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
    }
}

#[inline]
pub fn show_loading(document: &web::Document) {
    set_loading(document, true);
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    set_loading(document, false);
}
