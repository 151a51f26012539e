use crate::prediction::PredictionView;
use crate::presenter::{CameraStatus, Notice, ViewUpdate};
use shared::DataUrl;

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultText {
    #[default]
    Idle,
    Loading,
    Prediction(PredictionView),
    Failed(String),
}

/// What the page currently shows; folded from `ViewUpdate`s.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub preview: Option<DataUrl>,
    pub result: ResultText,
    pub capture_enabled: bool,
    pub switch_enabled: bool,
    pub camera: CameraStatus,
    pub toast: Option<Notice>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            preview: None,
            result: ResultText::Idle,
            capture_enabled: true,
            switch_enabled: false,
            camera: CameraStatus::Stopped,
            toast: None,
        }
    }
}

impl ViewState {
    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::Preview(image) => self.preview = Some(image),
            ViewUpdate::Loading => self.result = ResultText::Loading,
            ViewUpdate::Result(view) => self.result = ResultText::Prediction(view),
            ViewUpdate::FailureText(message) => self.result = ResultText::Failed(message),
            ViewUpdate::Notify(notice) => self.toast = Some(notice),
            ViewUpdate::CaptureEnabled(enabled) => self.capture_enabled = enabled,
            ViewUpdate::SwitchEnabled(enabled) => self.switch_enabled = enabled,
            ViewUpdate::Camera(status) => self.camera = status,
        }
    }

    pub fn hide_toast(&mut self) {
        self.toast = None;
    }

    pub fn camera_active(&self) -> bool {
        matches!(self.camera, CameraStatus::Active(_))
    }

    /// Verdict styling only exists while a prediction is on screen.
    pub fn verdict_class(&self) -> Option<&'static str> {
        match &self.result {
            ResultText::Prediction(view) => Some(view.verdict.css_class()),
            _ => None,
        }
    }
}
