use crate::constants::classes;
use crate::core::{evasive_position, WIGGLE_MS};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Jump the element to a random on-screen spot and wiggle it briefly.
pub fn evade(el: &web::HtmlElement) {
    let size = Vec2::new(el.offset_width() as f32, el.offset_height() as f32);
    let pos = evasive_position(&mut rand::thread_rng(), dom::viewport_size(), size);
    dom::set_style(el, "position", "fixed");
    dom::set_style(el, "left", &format!("{}px", pos.x));
    dom::set_style(el, "top", &format!("{}px", pos.y));

    let cl = el.class_list();
    _ = cl.remove_1(classes::NO_WIGGLE);
    _ = cl.add_1(classes::WIGGLE);
    // Not cancelled on re-entry; a newer wiggle simply gets its class reset early.
    let el = el.clone();
    dom::after_ms(WIGGLE_MS, move || {
        let cl = el.class_list();
        _ = cl.remove_1(classes::WIGGLE);
        _ = cl.add_1(classes::NO_WIGGLE);
    });
}

pub fn evade_by_id(document: &web::Document, element_id: &str) {
    if let Some(el) = dom::html_element(document, element_id) {
        evade(&el);
    }
}
