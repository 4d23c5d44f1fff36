use crate::constants::{classes, ids};
use crate::core::{visible_emojis, Panel, PanelSequencer, PanelTransition, ValentineConfig};
use crate::{decor, dom};
use std::cell::RefCell;
use web_sys as web;

// Frames to wait after un-hiding a panel before adding its visible class, so
// the browser has laid out the un-hidden state when the transition starts.
fn entrance_frames(t: &PanelTransition) -> u8 {
    match (t.from, t.to) {
        (_, Panel::Celebration) => 0,
        (Panel::NoneActive, _) => 1,
        _ => 2,
    }
}

fn apply(document: &web::Document, t: &PanelTransition) {
    for panel in &t.hide {
        if let Some(el) = panel.element_id().and_then(|id| document.get_element_by_id(id)) {
            let cl = el.class_list();
            _ = cl.add_1(classes::HIDDEN);
            _ = cl.remove_1(panel.visible_class());
        }
    }

    if let Some(secret) = document.get_element_by_id(ids::SECRET_ANSWER) {
        let cl = secret.class_list();
        if t.secret_visible {
            _ = cl.remove_1(classes::HIDDEN);
        } else {
            _ = cl.add_1(classes::HIDDEN);
        }
    }

    let Some(target) = t.to.element_id().and_then(|id| document.get_element_by_id(id)) else {
        return;
    };
    _ = target.class_list().remove_1(classes::HIDDEN);
    let visible = t.to.visible_class();
    dom::after_frames(entrance_frames(t), move || {
        _ = target.class_list().add_1(visible);
    });
}

pub fn show_panel(document: &web::Document, panels: &RefCell<PanelSequencer>, to: Panel) {
    let transition = panels.borrow_mut().show(to);
    log::info!("[panels] {:?} -> {:?}", transition.from, transition.to);
    apply(document, &transition);
}

/// First panel on page load.
pub fn enter(document: &web::Document, panels: &RefCell<PanelSequencer>) {
    show_panel(document, panels, Panel::Question1);
}

pub fn celebrate(
    document: &web::Document,
    panels: &RefCell<PanelSequencer>,
    config: &ValentineConfig,
) {
    if panels.borrow().current() == Panel::Celebration {
        return;
    }
    show_panel(document, panels, Panel::Celebration);

    let c = &config.celebration;
    dom::set_text(document, ids::CELEBRATION_TITLE, &c.title);
    dom::set_text(document, ids::CELEBRATION_MESSAGE, &c.message);

    if let Some(wrap) = document.get_element_by_id(ids::CELEBRATION_EMOJIS) {
        wrap.set_inner_html("");
        for emoji in visible_emojis(&c.emojis) {
            if let Ok(span) = document.create_element("span") {
                span.set_class_name(classes::CELEBRATION_EMOJI);
                span.set_text_content(Some(emoji));
                _ = wrap.append_child(&span);
            }
        }
    }

    decor::heart_explosion(document, &config.floating_emojis.hearts);
    decor::confetti(document);
}
