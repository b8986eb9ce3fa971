use crate::constants::{DARK_MODE_CLASS, THEME_TOGGLE_ID};
use crate::core::{load_theme, toggle_theme, FlagStore, ThemeFlag};
use crate::dom;
use crate::error::FxError;
use wasm_bindgen::JsCast;
use web_sys as web;

impl FlagStore for web::Storage {
    fn read(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.set_item(key, value) {
            log::warn!("[theme] storage write {}={} failed: {:?}", key, value, e);
        }
    }
}

fn apply(body: &web::HtmlElement, flag: ThemeFlag) {
    let cl = body.class_list();
    _ = if flag.is_dark() {
        cl.add_1(DARK_MODE_CLASS)
    } else {
        cl.remove_1(DARK_MODE_CLASS)
    };
}

pub fn init(document: &web::Document) -> Result<(), FxError> {
    let toggle = document
        .get_element_by_id(THEME_TOGGLE_ID)
        .ok_or(FxError::MissingElement(THEME_TOGGLE_ID))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|_| FxError::Js(format!("#{THEME_TOGGLE_ID} is not an <input>")))?;
    let body = document.body().ok_or(FxError::MissingElement("body"))?;
    // Storage can be missing (privacy modes); the toggle still works, unpersisted.
    let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::warn!("[theme] localStorage unavailable; preference will not persist");
    }

    let flag = storage.as_ref().map(load_theme).unwrap_or_default();
    if flag.is_dark() {
        toggle.set_checked(true);
        apply(&body, flag);
    }
    log::info!("[theme] initial={}", flag.as_str());

    let control = toggle.clone();
    dom::add_listener(&toggle, "change", move |_: web::Event| {
        let checked = control.checked();
        let flag = match &storage {
            Some(store) => toggle_theme(store, checked),
            None => ThemeFlag::from_checked(checked),
        };
        apply(&body, flag);
    });
    Ok(())
}
