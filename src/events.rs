use crate::constants::{css_vars, classes, ids};
use crate::core::{LoveMeter, Panel, PanelSequencer, SecretReveal, ValentineConfig};
use crate::{dom, evasive, sequencer, slider};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Grow the secret answer one step.
fn bump_secret(document: &web::Document, reveal: &RefCell<SecretReveal>) {
    let Some(el) = dom::html_element(document, ids::SECRET_ANSWER) else {
        return;
    };
    let mut reveal = reveal.borrow_mut();
    let scale = reveal.bump();
    _ = el.class_list().add_1(classes::REVEALED);
    dom::set_style(&el, css_vars::SECRET_SCALE, &scale.to_string());
    _ = el.set_attribute("data-reveal-level", &reveal.level().to_string());
}

pub struct PageWiring {
    pub config: Rc<ValentineConfig>,
    pub panels: Rc<RefCell<PanelSequencer>>,
    pub reveal: Rc<RefCell<SecretReveal>>,
    pub meter: Rc<RefCell<LoveMeter>>,
}

pub fn wire_page_handlers(document: &web::Document, w: PageWiring) {
    // Question 1: every answer feeds the secret reveal.
    for (id, advance) in [(ids::YES_1, true), (ids::SECRET_BUTTON, true), (ids::NO_1, false)] {
        let doc = document.clone();
        let reveal = w.reveal.clone();
        let panels = w.panels.clone();
        dom::add_click_listener(document, id, move || {
            bump_secret(&doc, &reveal);
            if advance {
                sequencer::show_panel(&doc, &panels, Panel::Question2);
            } else {
                evasive::evade_by_id(&doc, id);
            }
        });
    }

    {
        let doc = document.clone();
        let panels = w.panels.clone();
        dom::add_click_listener(document, ids::NEXT, move || {
            sequencer::show_panel(&doc, &panels, Panel::Question3);
        });
    }

    {
        let doc = document.clone();
        let panels = w.panels.clone();
        let config = w.config.clone();
        dom::add_click_listener(document, ids::YES_3, move || {
            sequencer::celebrate(&doc, &panels, &config);
        });
    }

    {
        let doc = document.clone();
        dom::add_click_listener(document, ids::NO_3, move || {
            evasive::evade_by_id(&doc, ids::NO_3);
        });
    }

    slider::wire(
        document,
        slider::SliderWiring {
            meter: w.meter,
            messages: w.config.love_messages.clone(),
            hearts: w.config.floating_emojis.hearts.clone(),
        },
    );
}
