use crate::constants::{classes, css_vars, ids, selectors};
use crate::core::{
    burst_offsets, fill_percent, parse_slider_value, pick_glyph, LoveMeter, LoveMessages,
    LoveTier, MeterReading, BURST_LIFETIME_MS,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn meter_input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(ids::LOVE_METER)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn set_fill(document: &web::Document, fill: f32) {
    dom::set_root_var(document, css_vars::LOVE_PERCENT, &format!("{}%", fill));
}

/// Park the slider at 100 with a full-width track.
pub fn set_initial_position(document: &web::Document) {
    let Some(input) = meter_input(document) else {
        return;
    };
    let value = LoveMeter::INITIAL_VALUE;
    input.set_value(&value.to_string());
    dom::set_text(document, ids::LOVE_VALUE, &value.to_string());
    dom::set_style(&input, "width", "100%");
    set_fill(document, fill_percent(value));
}

fn message_for(messages: &LoveMessages, tier: LoveTier) -> &str {
    match tier {
        LoveTier::Normal => &messages.normal,
        LoveTier::High => &messages.high,
        LoveTier::Extreme => &messages.extreme,
    }
}

fn apply_reading(
    document: &web::Document,
    input: &web::HtmlInputElement,
    reading: &MeterReading,
    messages: &LoveMessages,
) {
    dom::set_text(document, ids::LOVE_VALUE, &reading.value.to_string());
    set_fill(document, reading.fill_percent);
    dom::set_style(input, "width", &reading.width_css());

    let Some(extra) = document.get_element_by_id(ids::EXTRA_LOVE) else {
        return;
    };
    let cl = extra.class_list();
    match reading.overflow {
        Some(overflow) => {
            _ = cl.remove_1(classes::HIDDEN);
            dom::set_style(input, "transition", "width 0.3s");
            if overflow.tier.emphasized() {
                _ = cl.add_1(classes::SUPER_LOVE);
            } else {
                _ = cl.remove_1(classes::SUPER_LOVE);
            }
            extra.set_text_content(Some(message_for(messages, overflow.tier)));
        }
        None => {
            _ = cl.add_1(classes::HIDDEN);
            _ = cl.remove_1(classes::SUPER_LOVE);
        }
    }
}

/// Six hearts flung outward from the middle of the meter track.
fn milestone_burst(document: &web::Document, hearts: &[String]) {
    let (Some(track), Some(body)) = (
        document.query_selector(selectors::METER_TRACK).ok().flatten(),
        document.body(),
    ) else {
        return;
    };
    let rect = track.get_bounding_client_rect();
    let cx = rect.left() + rect.width() / 2.0;
    let cy = rect.top() + rect.height() / 2.0;
    let mut rng = rand::thread_rng();
    for offset in burst_offsets(&mut rng) {
        let Some(el) = dom::create_div(document, classes::BURST) else {
            continue;
        };
        el.set_text_content(pick_glyph(&mut rng, hearts));
        dom::set_style(&el, "left", &format!("{}px", cx));
        dom::set_style(&el, "top", &format!("{}px", cy));
        dom::set_style(&el, css_vars::BURST_X, &format!("{}px", offset.x));
        dom::set_style(&el, css_vars::BURST_Y, &format!("{}px", offset.y));
        _ = body.append_child(&el);
        dom::remove_after(el.into(), BURST_LIFETIME_MS);
    }
}

pub struct SliderWiring {
    pub meter: Rc<RefCell<LoveMeter>>,
    pub messages: LoveMessages,
    pub hearts: Vec<String>,
}

pub fn wire(document: &web::Document, w: SliderWiring) {
    let Some(input) = meter_input(document) else {
        log::warn!("[slider] #{} missing; love meter disabled", ids::LOVE_METER);
        return;
    };
    let doc = document.clone();
    let target = input.clone();
    dom::listen(&input, "input", dom::ListenOpts::default(), move || {
        let Some(value) = parse_slider_value(&target.value()) else {
            return;
        };
        let reading = w.meter.borrow_mut().update(value, dom::viewport_size().x);
        apply_reading(&doc, &target, &reading, &w.messages);
        if let Some(milestone) = reading.burst {
            log::info!("[slider] milestone {} reached", milestone);
            milestone_burst(&doc, &w.hearts);
        }
    });
}
