use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    #[error("camera API not supported by this browser")]
    Unsupported,
    #[error("{0}")]
    Access(String),
    #[error("camera surface missing from the page")]
    SurfaceMissing,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("Camera not available")]
    CameraUnavailable,
    #[error("canvas error: {0}")]
    Canvas(String),
    #[error("could not read file: {0}")]
    Read(String),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("encoded image is invalid: {0}")]
    Encoding(#[from] shared::DataUrlError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Encode(String),
    #[error("{0}")]
    Network(String),
    #[error("server error: {status} {status_text}")]
    Server { status: u16, status_text: String },
    #[error("invalid response: {0}")]
    Parse(String),
}

/// Best-effort message out of a rejected promise or thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return exception.message();
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
