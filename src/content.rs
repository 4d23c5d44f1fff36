use crate::constants::{classes, css_vars, ids};
use crate::core::{title_text, ValentineConfig};
use crate::dom;
use web_sys as web;

/// Copy validated config strings into the page's text slots.
///
/// The title slot is required; every other slot is optional and skipped when
/// the host page does not provide it.
pub fn bind(document: &web::Document, config: &ValentineConfig) -> anyhow::Result<()> {
    document.set_title(&config.page_title);

    let title = document
        .get_element_by_id(ids::TITLE)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ids::TITLE))?;
    title.set_text_content(Some(&title_text(&config.valentine_name)));
    _ = title.class_list().add_1(classes::TITLE_REVEAL);

    let q = &config.questions;
    let slots: [(&str, &str); 10] = [
        (ids::Q1_TEXT, q.first.text.as_str()),
        (ids::YES_1, q.first.yes_btn.as_str()),
        (ids::NO_1, q.first.no_btn.as_str()),
        (ids::SECRET_BUTTON, q.first.secret_answer.as_str()),
        (ids::Q2_TEXT, q.second.text.as_str()),
        (ids::START_TEXT, q.second.start_text.as_str()),
        (ids::NEXT, q.second.next_btn.as_str()),
        (ids::Q3_TEXT, q.third.text.as_str()),
        (ids::YES_3, q.third.yes_btn.as_str()),
        (ids::NO_3, q.third.no_btn.as_str()),
    ];
    let missing = slots
        .iter()
        .filter(|(id, text)| !dom::set_text(document, id, text))
        .count();
    if missing > 0 {
        log::debug!("[content] {} optional text slots absent", missing);
    }

    apply_theme(document, config);
    Ok(())
}

fn apply_theme(document: &web::Document, config: &ValentineConfig) {
    let c = &config.colors;
    let vars = [
        ("--bg-start", c.background_start.as_str()),
        ("--bg-end", c.background_end.as_str()),
        ("--button-bg", c.button_background.as_str()),
        ("--button-hover", c.button_hover.as_str()),
        ("--text-color", c.text_color.as_str()),
        (css_vars::FLOAT_DURATION, config.animations.float_duration.as_str()),
        (css_vars::FLOAT_DISTANCE, config.animations.float_distance.as_str()),
        (css_vars::BOUNCE_SPEED, config.animations.bounce_speed.as_str()),
    ];
    // Empty means the host sent a non-string; the stylesheet's own value stays.
    for (name, value) in vars.into_iter().filter(|(_, v)| !v.is_empty()) {
        dom::set_root_var(document, name, value);
    }
    dom::set_root_var(
        document,
        css_vars::EXPLOSION_SIZE,
        &config.animations.heart_explosion_size.to_string(),
    );
}
