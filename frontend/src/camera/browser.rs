use super::{LiveStream, MediaDevices, StreamConstraints};
use crate::canvas::encode_canvas;
use crate::error::{js_message, CameraError, CaptureError};
use shared::DataUrl;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};
use yew::NodeRef;

/// `navigator.mediaDevices` feeding the page's `<video>` element.
#[derive(Clone)]
pub struct BrowserCamera {
    video: NodeRef,
    canvas: NodeRef,
}

impl BrowserCamera {
    pub fn new(video: NodeRef, canvas: NodeRef) -> Self {
        Self { video, canvas }
    }
}

impl MediaDevices for BrowserCamera {
    type Stream = BrowserStream;

    async fn open_stream(&self, constraints: &StreamConstraints) -> Result<BrowserStream, CameraError> {
        let video = self
            .video
            .cast::<HtmlVideoElement>()
            .ok_or(CameraError::SurfaceMissing)?;
        let devices = web_sys::window()
            .ok_or(CameraError::Unsupported)?
            .navigator()
            .media_devices()
            .map_err(|_| CameraError::Unsupported)?;

        log::info!("Requesting {} camera stream", constraints.facing());
        let json = constraints
            .to_json()
            .map_err(|e| CameraError::Access(e.to_string()))?;
        let js_constraints: MediaStreamConstraints = js_sys::JSON::parse(&json)
            .map_err(|e| CameraError::Access(js_message(&e)))?
            .unchecked_into();

        let promise = devices
            .get_user_media_with_constraints(&js_constraints)
            .map_err(|e| CameraError::Access(js_message(&e)))?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| CameraError::Access(js_message(&e)))?
            .dyn_into::<MediaStream>()
            .map_err(|_| CameraError::Access("no media stream returned".into()))?;

        video.set_autoplay(true);
        video.set_muted(true);
        // iOS Safari only renders inline with this attribute present
        let _ = video.set_attribute("playsinline", "");
        video.set_src_object(Some(&stream));
        Ok(BrowserStream {
            stream,
            video: self.video.clone(),
            canvas: self.canvas.clone(),
        })
    }
}

pub struct BrowserStream {
    stream: MediaStream,
    video: NodeRef,
    canvas: NodeRef,
}

impl LiveStream for BrowserStream {
    fn stop(&self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        if let Some(video) = self.video.cast::<HtmlVideoElement>() {
            video.set_src_object(None);
        }
    }

    fn grab_frame(&self) -> Result<DataUrl, CaptureError> {
        let video = self
            .video
            .cast::<HtmlVideoElement>()
            .ok_or(CaptureError::CameraUnavailable)?;
        let canvas = self
            .canvas
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| CaptureError::Canvas("capture canvas missing".into()))?;

        let (width, height) = (video.video_width(), video.video_height());
        encode_canvas(&canvas, width, height, |context| {
            context.draw_image_with_html_video_element_and_dw_and_dh(
                &video,
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            )
        })
    }
}
