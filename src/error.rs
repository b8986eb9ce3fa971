use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("clipboard API unavailable")]
    ClipboardUnavailable,
    #[error("copy command was rejected")]
    CopyRejected,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        FxError::Js(format!("{:?}", value))
    }
}
