pub mod pipeline;
pub mod upload;

use crate::error::{CaptureError, TransportError};
use shared::{DataUrl, PredictRequest, PredictResponse, Prediction};

/// HTTP side of `POST /predict`.
pub trait PredictionClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, TransportError>;
}

/// A user-selected file that can be turned into an encoded image.
pub trait ImageFile {
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
    async fn encode(&self) -> Result<DataUrl, CaptureError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Flagged,
}

impl Verdict {
    /// Labels listed in `clean_classes` (case-insensitive) and anything
    /// mentioning "pure" count as clean.
    pub fn classify(predicted_class: &str, clean_classes: &[String]) -> Self {
        let label = predicted_class.trim();
        let listed = clean_classes
            .iter()
            .any(|clean| clean.trim().eq_ignore_ascii_case(label));
        if listed || label.to_lowercase().contains("pure") {
            Verdict::Clean
        } else {
            Verdict::Flagged
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Clean => "clean",
            Verdict::Flagged => "flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub predicted_class: String,
    pub confidence: f64,
    pub cropped_image: DataUrl,
    pub verdict: Verdict,
}

impl PredictionView {
    pub fn from_prediction(prediction: Prediction, clean_classes: &[String]) -> Self {
        let verdict = Verdict::classify(&prediction.predicted_class, clean_classes);
        Self {
            predicted_class: prediction.predicted_class,
            confidence: prediction.confidence,
            cropped_image: prediction.cropped_image,
            verdict,
        }
    }

    /// Confidence exactly as the service reported it.
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }
}
