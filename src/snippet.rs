use crate::constants::*;
use crate::core::{compose_copy_text, CHECK_ICON_SVG, COPY_ICON_SVG};
use crate::dom;
use crate::error::FxError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn init(document: &web::Document) -> Result<(), FxError> {
    let button = dom::query(document, COPY_BUTTON_SELECTOR)
        .ok_or(FxError::MissingElement(COPY_BUTTON_SELECTOR))?;

    let doc = document.clone();
    let btn = button.clone();
    dom::add_listener(&button, "click", move |_: web::MouseEvent| {
        let command =
            dom::query(&doc, COMMAND_SELECTOR).and_then(|el| el.get_attribute(COMMAND_ATTR));
        let Some(text) = compose_copy_text(command.as_deref()) else {
            return;
        };
        let doc = doc.clone();
        let btn = btn.clone();
        spawn_local(async move {
            match write_clipboard(&text).await {
                Ok(()) => show_copy_success(&btn),
                Err(e) => {
                    log::info!("[copy] clipboard write failed ({}); using fallback", e);
                    if let Err(e) = fallback_copy(&doc, &text) {
                        log::error!("[copy] fallback copy failed: {}", e);
                    }
                }
            }
        });
    });
    Ok(())
}

async fn write_clipboard(text: &str) -> Result<(), FxError> {
    let window = web::window().ok_or(FxError::ClipboardUnavailable)?;
    let navigator = window.navigator();
    // `navigator.clipboard` is undefined outside secure contexts
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(FxError::ClipboardUnavailable);
    }
    let clipboard: web::Clipboard = clipboard.unchecked_into();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn show_copy_success(button: &web::Element) {
    let Some(svg) = dom::query_in(button, "svg") else {
        return;
    };
    svg.set_inner_html(CHECK_ICON_SVG);
    dom::set_timeout(COPY_CONFIRM_MS, move || svg.set_inner_html(COPY_ICON_SVG));
}

/// Legacy path: select an off-screen textarea and run `execCommand("copy")`.
fn fallback_copy(document: &web::Document, text: &str) -> Result<(), FxError> {
    let body = document.body().ok_or(FxError::MissingElement("body"))?;
    let area = document
        .create_element("textarea")?
        .dyn_into::<web::HtmlTextAreaElement>()
        .map_err(|_| FxError::Js("textarea is not an HtmlTextAreaElement".into()))?;
    area.set_value(text);
    area.set_read_only(true);
    dom::set_style(&area, "position", "fixed");
    dom::set_style(&area, "left", "-9999px");
    dom::set_style(&area, "top", "0");
    body.append_child(&area)?;
    area.select();

    let copied = match document.dyn_ref::<web::HtmlDocument>() {
        Some(html) => html.exec_command("copy").map_err(FxError::from),
        None => Err(FxError::Js("document is not an HTML document".into())),
    };
    area.remove();
    match copied? {
        true => Ok(()),
        false => Err(FxError::CopyRejected),
    }
}
