//! In-memory stand-ins for the browser ports.

use crate::camera::{LiveStream, MediaDevices, StreamConstraints};
use crate::error::{CameraError, CaptureError, TransportError};
use crate::prediction::{ImageFile, PredictionClient};
use crate::presenter::{Notice, Presenter, ViewUpdate};
use crate::view_state::ViewState;
use shared::{DataUrl, PredictRequest, PredictResponse, Prediction};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub fn jpeg(payload: &str) -> DataUrl {
    DataUrl::parse(format!("data:image/jpeg;base64,{}", payload)).unwrap()
}

pub fn milk_prediction() -> PredictResponse {
    PredictResponse::Success(Prediction {
        predicted_class: "Milk".into(),
        confidence: 97.5,
        cropped_image: jpeg("AAA"),
    })
}

#[derive(Clone, Default)]
pub struct RecordingPresenter {
    updates: Rc<RefCell<Vec<ViewUpdate>>>,
    state: Rc<RefCell<ViewState>>,
}

impl RecordingPresenter {
    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.updates.borrow().clone()
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.updates
            .borrow()
            .iter()
            .filter_map(|update| match update {
                ViewUpdate::Notify(notice) => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices().pop()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&self, update: ViewUpdate) {
        self.state.borrow_mut().apply(update.clone());
        self.updates.borrow_mut().push(update);
    }
}

#[derive(Clone)]
pub struct FakeCamera {
    requests: Rc<RefCell<Vec<StreamConstraints>>>,
    live: Rc<Cell<usize>>,
    live_at_open: Rc<RefCell<Vec<usize>>>,
    failures: Rc<RefCell<VecDeque<CameraError>>>,
    frame: DataUrl,
}

impl Default for FakeCamera {
    fn default() -> Self {
        Self {
            requests: Rc::default(),
            live: Rc::default(),
            live_at_open: Rc::default(),
            failures: Rc::default(),
            frame: jpeg("/9j/frame"),
        }
    }
}

impl FakeCamera {
    pub fn fail_next(&self, message: &str) {
        self.failures
            .borrow_mut()
            .push_back(CameraError::Access(message.into()));
    }

    pub fn requests(&self) -> Vec<StreamConstraints> {
        self.requests.borrow().clone()
    }

    pub fn live_streams(&self) -> usize {
        self.live.get()
    }

    /// Live stream count seen by each `open_stream` call, on entry.
    pub fn live_at_open(&self) -> Vec<usize> {
        self.live_at_open.borrow().clone()
    }
}

impl MediaDevices for FakeCamera {
    type Stream = FakeStream;

    async fn open_stream(&self, constraints: &StreamConstraints) -> Result<FakeStream, CameraError> {
        self.requests.borrow_mut().push(*constraints);
        self.live_at_open.borrow_mut().push(self.live.get());
        if let Some(err) = self.failures.borrow_mut().pop_front() {
            return Err(err);
        }
        self.live.set(self.live.get() + 1);
        Ok(FakeStream {
            live: self.live.clone(),
            stopped: Cell::new(false),
            frame: self.frame.clone(),
        })
    }
}

pub struct FakeStream {
    live: Rc<Cell<usize>>,
    stopped: Cell<bool>,
    frame: DataUrl,
}

impl LiveStream for FakeStream {
    fn stop(&self) {
        if !self.stopped.replace(true) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn grab_frame(&self) -> Result<DataUrl, CaptureError> {
        if self.stopped.get() {
            return Err(CaptureError::CameraUnavailable);
        }
        Ok(self.frame.clone())
    }
}

#[derive(Clone, Default)]
pub struct ScriptedClient {
    replies: Rc<RefCell<VecDeque<Result<PredictResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<PredictRequest>>>,
    observer: Option<RecordingPresenter>,
    capture_enabled_in_flight: Rc<RefCell<Vec<bool>>>,
}

impl ScriptedClient {
    pub fn replying(reply: Result<PredictResponse, TransportError>) -> Self {
        let client = Self::default();
        client.replies.borrow_mut().push_back(reply);
        client
    }

    /// Records the capture-trigger state seen while each request is open.
    pub fn observing(mut self, presenter: &RecordingPresenter) -> Self {
        self.observer = Some(presenter.clone());
        self
    }

    pub fn requests(&self) -> Vec<PredictRequest> {
        self.requests.borrow().clone()
    }

    pub fn capture_enabled_in_flight(&self) -> Vec<bool> {
        self.capture_enabled_in_flight.borrow().clone()
    }
}

impl PredictionClient for ScriptedClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(observer) = &self.observer {
            self.capture_enabled_in_flight
                .borrow_mut()
                .push(observer.state().capture_enabled);
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
    }
}

pub struct FakeFile {
    pub mime_type: String,
    pub size: u64,
    pub encoded: Result<DataUrl, CaptureError>,
    pub encodes: Cell<usize>,
}

impl FakeFile {
    pub fn new(mime_type: &str, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size,
            encoded: Ok(jpeg("/9j/upload")),
            encodes: Cell::new(0),
        }
    }
}

impl ImageFile for FakeFile {
    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn encode(&self) -> Result<DataUrl, CaptureError> {
        self.encodes.set(self.encodes.get() + 1);
        self.encoded.clone()
    }
}
