use super::{ImageFile, PredictionClient, PredictionView};
use crate::error::CaptureError;
use crate::presenter::Presenter;
use shared::{DataUrl, PredictRequest, PredictResponse, RequestId, UploadConstraint};

/// Disables the capture trigger for as long as it is alive.
struct CaptureTrigger<'a, P: Presenter> {
    presenter: &'a P,
}

impl<'a, P: Presenter> CaptureTrigger<'a, P> {
    fn hold(presenter: &'a P) -> Self {
        presenter.set_capture_enabled(false);
        Self { presenter }
    }
}

impl<P: Presenter> Drop for CaptureTrigger<'_, P> {
    fn drop(&mut self) {
        self.presenter.set_capture_enabled(true);
    }
}

/// Sends one image per user action to the classifier and projects the
/// answer onto the page. Holds no per-request state, so uploads and live
/// captures may overlap; whichever answer lands last is what stays visible.
pub struct PredictionPipeline<C, P> {
    client: C,
    presenter: P,
    upload: UploadConstraint,
    clean_classes: Vec<String>,
}

impl<C: PredictionClient, P: Presenter> PredictionPipeline<C, P> {
    pub fn new(client: C, presenter: P, upload: UploadConstraint, clean_classes: Vec<String>) -> Self {
        Self {
            client,
            presenter,
            upload,
            clean_classes,
        }
    }

    pub async fn submit(&self, image: DataUrl) {
        let id = RequestId::new();
        self.presenter.show_preview(&image);
        let _trigger = CaptureTrigger::hold(&self.presenter);
        self.presenter.show_loading();

        log::info!(
            "Prediction {} sent ({}, ~{} bytes)",
            id,
            image.mime_type(),
            image.decoded_len()
        );

        match self.client.predict(&PredictRequest::new(&image)).await {
            Ok(PredictResponse::Success(prediction)) => {
                log::info!(
                    "Prediction {} complete: {} ({}%)",
                    id,
                    prediction.predicted_class,
                    prediction.confidence
                );
                let view = PredictionView::from_prediction(prediction, &self.clean_classes);
                self.presenter.show_result(view);
                self.presenter.notify("Prediction complete", true);
            }
            Ok(PredictResponse::Failure { error }) => {
                log::error!("Prediction {} rejected by service: {}", id, error);
                self.presenter.notify(format!("Prediction error: {}", error), false);
            }
            Err(e) => {
                log::error!("Prediction {} failed: {}", id, e);
                self.presenter.show_failure_text(format!("Error: {}", e));
                self.presenter.notify(format!("Connection error: {}", e), false);
            }
        }
    }

    /// Live-capture entry point; a failed grab never reaches the network.
    pub async fn submit_frame(&self, frame: Result<DataUrl, CaptureError>) {
        match frame {
            Ok(image) => self.submit(image).await,
            Err(e) => {
                log::warn!("Frame capture failed: {}", e);
                self.presenter.notify(e.to_string(), false);
            }
        }
    }

    pub async fn submit_upload<F: ImageFile>(&self, file: &F) {
        if let Err(rejection) = self.upload.check(&file.mime_type(), file.size()) {
            log::warn!("Upload rejected: {}", rejection);
            self.presenter.notify(rejection.to_string(), false);
            return;
        }

        match file.encode().await {
            Ok(image) => self.submit(image).await,
            Err(e) => {
                log::error!("Upload could not be encoded: {}", e);
                self.presenter.notify(format!("Could not load image: {}", e), false);
            }
        }
    }
}
