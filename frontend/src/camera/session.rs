use super::{LiveStream, MediaDevices, StreamConstraints};
use crate::error::CaptureError;
use crate::presenter::{CameraStatus, Presenter};
use shared::{DataUrl, FacingMode};

/// Lifecycle position of the session, without the stream handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Stopped,
    Starting,
    Active,
}

enum SessionState<S> {
    Stopped,
    Starting,
    Active(S),
}

/// Owns the single camera stream and keeps the controls that depend on it
/// in sync. A stream handle only exists in the `Active` state.
pub struct CaptureSession<M: MediaDevices, P> {
    media: M,
    presenter: P,
    state: SessionState<M::Stream>,
    facing: FacingMode,
    ideal_width: u32,
    ideal_height: u32,
}

impl<M: MediaDevices, P: Presenter> CaptureSession<M, P> {
    pub fn new(media: M, presenter: P, facing: FacingMode, ideal_width: u32, ideal_height: u32) -> Self {
        Self {
            media,
            presenter,
            state: SessionState::Stopped,
            facing,
            ideal_width,
            ideal_height,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::Stopped => SessionPhase::Stopped,
            SessionState::Starting => SessionPhase::Starting,
            SessionState::Active(_) => SessionPhase::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Active
    }

    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    pub async fn toggle_camera(&mut self) {
        if self.is_active() {
            self.stop_camera();
        } else {
            self.start_camera(self.facing).await;
        }
    }

    /// Flips between front and back camera. Does nothing while stopped.
    pub async fn switch_camera(&mut self) {
        if !self.is_active() {
            log::debug!("Switch ignored, camera is not running");
            return;
        }
        log::info!("Switching away from {} camera", self.facing().label());
        self.start_camera(self.facing.flipped()).await;
    }

    /// Releases any running stream, then asks for a new one. On failure the
    /// session ends up stopped with no handle and the facing mode unchanged.
    pub async fn start_camera(&mut self, facing: FacingMode) {
        self.release();
        self.state = SessionState::Starting;
        self.presenter.show_camera(CameraStatus::Starting(facing));

        let constraints = StreamConstraints::new(facing, self.ideal_width, self.ideal_height);
        match self.media.open_stream(&constraints).await {
            Ok(stream) => {
                self.state = SessionState::Active(stream);
                self.facing = facing;
                log::info!("Camera started facing {}", facing);
                self.presenter.show_camera(CameraStatus::Active(facing));
                self.presenter.set_switch_enabled(true);
                self.presenter
                    .notify(format!("Camera started: {} camera", facing.label()), true);
            }
            Err(e) => {
                self.state = SessionState::Stopped;
                log::error!("Camera access failed: {}", e);
                self.presenter.show_camera(CameraStatus::Stopped);
                self.presenter.set_switch_enabled(false);
                self.presenter.notify(format!("Camera access error: {}", e), false);
            }
        }
    }

    pub fn stop_camera(&mut self) {
        if self.release() {
            log::info!("Camera stopped");
            self.presenter.show_camera(CameraStatus::Stopped);
            self.presenter.notify("Camera stopped", true);
        }
    }

    pub fn grab_frame(&self) -> Result<DataUrl, CaptureError> {
        match &self.state {
            SessionState::Active(stream) => stream.grab_frame(),
            _ => Err(CaptureError::CameraUnavailable),
        }
    }

    /// Stops the current stream, if any. Returns whether one was running.
    fn release(&mut self) -> bool {
        match std::mem::replace(&mut self.state, SessionState::Stopped) {
            SessionState::Active(stream) => {
                stream.stop();
                self.presenter.set_switch_enabled(false);
                true
            }
            _ => false,
        }
    }
}
