use crate::error::{js_message, CaptureError};
use shared::DataUrl;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Encoding used for every image sent to the classifier.
pub const CAPTURE_MIME: &str = "image/jpeg";

/// Resizes the canvas, lets `draw` paint on it and returns the result as a
/// JPEG data URL.
pub fn encode_canvas<F>(
    canvas: &HtmlCanvasElement,
    width: u32,
    height: u32,
    draw: F,
) -> Result<DataUrl, CaptureError>
where
    F: FnOnce(&CanvasRenderingContext2d) -> Result<(), JsValue>,
{
    if width == 0 || height == 0 {
        return Err(CaptureError::Canvas("source has no pixels yet".into()));
    }
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(|e| CaptureError::Canvas(js_message(&e)))?
        .ok_or_else(|| CaptureError::Canvas("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CaptureError::Canvas("unexpected context type".into()))?;

    draw(&context).map_err(|e| CaptureError::Canvas(js_message(&e)))?;

    let encoded = canvas
        .to_data_url_with_type(CAPTURE_MIME)
        .map_err(|e| CaptureError::Canvas(js_message(&e)))?;
    Ok(DataUrl::parse(encoded)?)
}
