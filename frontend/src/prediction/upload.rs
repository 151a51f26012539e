use super::ImageFile;
use crate::canvas::encode_canvas;
use crate::error::{js_message, CaptureError};
use futures::channel::oneshot;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use shared::DataUrl;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlCanvasElement, HtmlImageElement};
use yew::NodeRef;

/// A file picked through the upload input. Encoding redraws it on the
/// capture canvas so uploads reach the service as JPEG like live frames.
pub struct BrowserUpload {
    file: GlooFile,
    canvas: NodeRef,
}

impl BrowserUpload {
    pub fn new(file: GlooFile, canvas: NodeRef) -> Self {
        Self { file, canvas }
    }
}

impl ImageFile for BrowserUpload {
    fn mime_type(&self) -> String {
        self.file.raw_mime_type()
    }

    fn size(&self) -> u64 {
        self.file.size()
    }

    async fn encode(&self) -> Result<DataUrl, CaptureError> {
        let source = gloo_file::futures::read_as_data_url(&self.file)
            .await
            .map_err(|e| CaptureError::Read(e.to_string()))?;
        let image = load_image(&source).await?;
        let canvas = self
            .canvas
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| CaptureError::Canvas("capture canvas missing".into()))?;

        encode_canvas(&canvas, image.natural_width(), image.natural_height(), |context| {
            context.draw_image_with_html_image_element(&image, 0.0, 0.0)
        })
    }
}

async fn load_image(source: &str) -> Result<HtmlImageElement, CaptureError> {
    let image = HtmlImageElement::new().map_err(|e| CaptureError::Decode(js_message(&e)))?;
    let (sender, receiver) = oneshot::channel::<bool>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_load = {
        let sender = sender.clone();
        EventListener::once(&image, "load", move |_| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(true);
            }
        })
    };
    let on_error = EventListener::once(&image, "error", move |_| {
        if let Some(sender) = sender.borrow_mut().take() {
            let _ = sender.send(false);
        }
    });

    image.set_src(source);
    let loaded = receiver.await.unwrap_or(false);
    drop(on_load);
    drop(on_error);

    if loaded {
        Ok(image)
    } else {
        Err(CaptureError::Decode("image failed to load".into()))
    }
}
