#![cfg(target_arch = "wasm32")]
use crate::core::{ConfigError, LoveMeter, PanelSequencer, SecretReveal, ValentineConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod content;
mod core;
mod decor;
mod dom;
mod evasive;
mod events;
mod music;
mod overlay;
mod sequencer;
mod slider;

fn load_config(window: &web::Window) -> Result<ValentineConfig, ConfigError> {
    let raw = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("VALENTINE_CONFIG"))
        .map_err(|e| ConfigError::Unreadable(format!("{:?}", e)))?;
    if raw.is_undefined() || raw.is_null() {
        return Err(ConfigError::Missing);
    }
    let json = js_sys::JSON::stringify(&raw)
        .map_err(|e| ConfigError::Unreadable(format!("{:?}", e)))?;
    ValentineConfig::from_json(&String::from(json))
}

fn validated_config(window: &web::Window) -> ValentineConfig {
    let mut config = load_config(window).unwrap_or_else(|e| {
        log::warn!("[config] {}; using defaults", e);
        ValentineConfig::default()
    });
    let issues = config.validate();
    if !issues.is_empty() {
        log::warn!("⚠️ Configuration Warnings:");
        for issue in &issues {
            log::warn!("- {}", issue);
        }
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let once = dom::ListenOpts {
            once: true,
            ..Default::default()
        };
        dom::listen(&document, "DOMContentLoaded", once, run);
    } else {
        run();
    }

    // Late assets can reflow the meter; park it again once everything loaded.
    let doc = document.clone();
    dom::listen(&window, "load", dom::ListenOpts::default(), move || {
        slider::set_initial_position(&doc);
    });
    Ok(())
}

/// Page hook for an explicit "play music" control.
#[wasm_bindgen(js_name = startMusic)]
pub fn start_music() {
    music::start_from_js();
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(validated_config(&window));

    content::bind(&document, &config)?;
    decor::spawn_floating(&document, &config.floating_emojis);

    let panels = Rc::new(RefCell::new(PanelSequencer::new()));
    sequencer::enter(&document, &panels);
    slider::set_initial_position(&document);

    events::wire_page_handlers(
        &document,
        events::PageWiring {
            config: config.clone(),
            panels,
            reveal: Rc::new(RefCell::new(SecretReveal::new())),
            meter: Rc::new(RefCell::new(LoveMeter::new())),
        },
    );

    music::setup(&document, &config.music);
    Ok(())
}
