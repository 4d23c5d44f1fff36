use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[dom] #{} not present; click handler skipped", element_id);
    }
}

/// Listener registration flags (`once`, `capture`, `passive`).
#[derive(Clone, Copy, Default)]
pub struct ListenOpts {
    pub once: bool,
    pub capture: bool,
    pub passive: bool,
}

pub fn listen(
    target: &web::EventTarget,
    event: &str,
    opts: ListenOpts,
    mut handler: impl FnMut() + 'static,
) {
    let options = web::AddEventListenerOptions::new();
    options.set_once(opts.once);
    options.set_capture(opts.capture);
    options.set_passive(opts.passive);
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

#[inline]
pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Set an element's text if it exists. Returns false when the slot is absent.
pub fn set_text(document: &web::Document, element_id: &str, text: &str) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            el.set_text_content(Some(text));
            true
        }
        None => false,
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Set a CSS custom property on `<html>`.
pub fn set_root_var(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, name, value);
    }
}

pub fn create_div(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Run `f` once after `ms` milliseconds. Fire-and-forget.
pub fn after_ms(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

pub fn remove_after(el: web::Element, ms: i32) {
    after_ms(ms, move || el.remove());
}

/// Run `f` after `frames` animation frames (0 runs it immediately).
pub fn after_frames(frames: u8, f: impl FnOnce() + 'static) {
    if frames == 0 {
        f();
        return;
    }
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(move || after_frames(frames - 1, f));
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

pub fn viewport_size() -> Vec2 {
    web::window()
        .map(|w| {
            let dim = |v: Result<JsValue, JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
            };
            Vec2::new(dim(w.inner_width()), dim(w.inner_height()))
        })
        .unwrap_or(Vec2::ZERO)
}
