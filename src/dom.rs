use crate::error::FxError;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn create_div(document: &web::Document, class: &str) -> Result<web::HtmlElement, FxError> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| FxError::Js(format!("div.{class} is not an HtmlElement")))
}

/// Attach `handler` for `event` on `target`; the listener lives for the page lifetime.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(
        Box::new(move |ev: web::Event| handler(ev.unchecked_into::<E>())) as Box<dyn FnMut(_)>,
    );
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] add '{}' listener failed: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once the DOM is parsed (immediately if it already is).
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(f);
        _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
    } else {
        f();
    }
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms) {
            log::warn!("[dom] setTimeout failed: {:?}", e);
        }
    }
}

pub fn set_interval(ms: i32, f: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        if let Err(e) = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            log::warn!("[dom] setInterval failed: {:?}", e);
        }
        closure.forget();
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Position a fixed overlay element at `pos` (viewport px).
#[inline]
pub fn place(el: &web::HtmlElement, pos: Vec2) {
    set_style(el, "left", &format!("{}px", pos.x));
    set_style(el, "top", &format!("{}px", pos.y));
}
