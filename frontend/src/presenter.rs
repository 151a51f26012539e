use crate::prediction::PredictionView;
use crate::{Model, Msg};
use shared::{DataUrl, FacingMode};
use yew::html::Scope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraStatus {
    #[default]
    Stopped,
    Starting(FacingMode),
    Active(FacingMode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_success: bool,
}

/// Everything the controllers are allowed to change on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Preview(DataUrl),
    Loading,
    Result(PredictionView),
    FailureText(String),
    Notify(Notice),
    CaptureEnabled(bool),
    SwitchEnabled(bool),
    Camera(CameraStatus),
}

/// Presentation port the camera session and the prediction pipeline talk to.
pub trait Presenter {
    fn present(&self, update: ViewUpdate);

    fn show_preview(&self, image: &DataUrl) {
        self.present(ViewUpdate::Preview(image.clone()));
    }

    /// Puts the result region into its loading placeholder and drops the
    /// previous verdict styling.
    fn show_loading(&self) {
        self.present(ViewUpdate::Loading);
    }

    fn show_result(&self, result: PredictionView) {
        self.present(ViewUpdate::Result(result));
    }

    fn show_failure_text(&self, message: impl Into<String>) {
        self.present(ViewUpdate::FailureText(message.into()));
    }

    fn notify(&self, message: impl Into<String>, is_success: bool) {
        self.present(ViewUpdate::Notify(Notice {
            message: message.into(),
            is_success,
        }));
    }

    fn set_capture_enabled(&self, enabled: bool) {
        self.present(ViewUpdate::CaptureEnabled(enabled));
    }

    fn set_switch_enabled(&self, enabled: bool) {
        self.present(ViewUpdate::SwitchEnabled(enabled));
    }

    fn show_camera(&self, status: CameraStatus) {
        self.present(ViewUpdate::Camera(status));
    }
}

/// Routes view updates into the root component's message queue.
#[derive(Clone)]
pub struct YewPresenter {
    link: Scope<Model>,
}

impl YewPresenter {
    pub fn new(link: Scope<Model>) -> Self {
        Self { link }
    }
}

impl Presenter for YewPresenter {
    fn present(&self, update: ViewUpdate) {
        self.link.send_message(Msg::Present(update));
    }
}
