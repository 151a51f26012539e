pub mod browser;
pub mod session;

use crate::error::{CameraError, CaptureError};
use serde::Serialize;
use shared::{DataUrl, FacingMode};

/// Source of live camera streams (`navigator.mediaDevices` in the browser).
pub trait MediaDevices {
    type Stream: LiveStream;

    async fn open_stream(&self, constraints: &StreamConstraints) -> Result<Self::Stream, CameraError>;
}

/// An open camera stream owned by the capture session.
pub trait LiveStream {
    /// Stops every track of the stream; the handle is dead afterwards.
    fn stop(&self);

    /// Encodes the frame currently shown by the stream.
    fn grab_frame(&self) -> Result<DataUrl, CaptureError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct Ideal<T> {
    ideal: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoConstraints {
    facing_mode: Ideal<FacingMode>,
    width: Ideal<u32>,
    height: Ideal<u32>,
}

/// `getUserMedia` constraints: preferred facing mode plus a resolution hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreamConstraints {
    video: VideoConstraints,
    audio: bool,
}

impl StreamConstraints {
    pub fn new(facing: FacingMode, width: u32, height: u32) -> Self {
        Self {
            video: VideoConstraints {
                facing_mode: Ideal { ideal: facing },
                width: Ideal { ideal: width },
                height: Ideal { ideal: height },
            },
            audio: false,
        }
    }

    pub fn facing(&self) -> FacingMode {
        self.video.facing_mode.ideal
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
