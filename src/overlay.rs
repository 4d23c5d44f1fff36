use crate::constants::{classes, ids};
use web_sys as web;

// "Tap to start" prompt shown until the first gesture unlocks audio.

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ids::MUSIC_TAP_OVERLAY) {
        _ = el.class_list().remove_1(classes::HIDDEN);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ids::MUSIC_TAP_OVERLAY) {
        _ = el.class_list().add_1(classes::HIDDEN);
    }
}
