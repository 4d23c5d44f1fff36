use crate::constants::{classes, css_vars, selectors};
use crate::core::{
    pick_glyph, ConfettiPiece, FloatPlacement, FloatingEmojis, CONFETTI_LIFETIME_MS,
    CONFETTI_PIECES, HEART_EXPLOSION_COUNT,
};
use crate::dom;
use web_sys as web;

fn floating_layer(document: &web::Document) -> Option<web::Element> {
    document.query_selector(selectors::FLOATING_LAYER).ok().flatten()
}

fn place(el: &web::HtmlElement, p: &FloatPlacement) {
    dom::set_style(el, "left", &format!("{}vw", p.left_vw));
    dom::set_style(el, "animation-delay", &format!("{}s", p.delay_sec));
    dom::set_style(el, "animation-duration", &format!("{}s", p.duration_sec));
    dom::set_style(el, css_vars::FLOAT_SCALE, &p.scale.to_string());
    dom::set_style(el, "opacity", &p.opacity.to_string());
    if p.sway {
        _ = el.class_list().add_1(classes::SWAY);
    }
}

fn spawn_glyph(document: &web::Document, layer: &web::Element, class: &str, glyph: &str) {
    let Some(el) = dom::create_div(document, class) else {
        return;
    };
    el.set_text_content(Some(glyph));
    place(&el, &FloatPlacement::random(&mut rand::thread_rng()));
    _ = layer.append_child(&el);
}

/// One ambient node per configured heart and bear.
pub fn spawn_floating(document: &web::Document, emojis: &FloatingEmojis) {
    let Some(layer) = floating_layer(document) else {
        log::warn!("[decor] no {} container; skipping ambient hearts", selectors::FLOATING_LAYER);
        return;
    };
    for heart in &emojis.hearts {
        spawn_glyph(document, &layer, classes::HEART, heart);
    }
    for bear in &emojis.bears {
        spawn_glyph(document, &layer, classes::BEAR, bear);
    }
}

pub fn heart_explosion(document: &web::Document, hearts: &[String]) {
    let Some(layer) = floating_layer(document) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for _ in 0..HEART_EXPLOSION_COUNT {
        if let Some(glyph) = pick_glyph(&mut rng, hearts) {
            spawn_glyph(document, &layer, classes::HEART, glyph);
        }
    }
}

pub fn confetti(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let mut rng = rand::thread_rng();
    for _ in 0..CONFETTI_PIECES {
        let Some(el) = dom::create_div(document, classes::CONFETTI) else {
            continue;
        };
        let piece = ConfettiPiece::random(&mut rng);
        dom::set_style(&el, "left", &format!("{}vw", piece.left_vw));
        dom::set_style(&el, "background", piece.color);
        dom::set_style(&el, "border-radius", piece.border_radius());
        dom::set_style(&el, "animation-delay", &format!("{}s", piece.delay_sec));
        dom::set_style(&el, "animation-duration", &format!("{}s", piece.duration_sec));
        _ = body.append_child(&el);
        dom::remove_after(el.into(), CONFETTI_LIFETIME_MS);
    }
}
