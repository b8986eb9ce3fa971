#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod cursor;
mod dom;
mod error;
mod nav;
mod snippet;
mod theme;
mod typing;

use error::FxError;

fn report(component: &str, result: Result<(), FxError>) {
    if let Err(e) = result {
        log::warn!("[{}] not initialised: {}", component, e);
    }
}

fn init_effects(document: &web::Document) {
    report("theme", theme::init(document));
    if dom::query(document, constants::TERMINAL_SELECTOR).is_some() {
        report("copy", snippet::init(document));
    }
    report("cursor", cursor::init(document));
    report("nav", nav::init(document));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    let doc = document.clone();
    dom::on_ready(&document, move || init_effects(&doc));

    // Typing runs off its own ready callback, independent of the other effects.
    let doc = document.clone();
    dom::on_ready(&document, move || report("typing", typing::start(&doc)));
    Ok(())
}
