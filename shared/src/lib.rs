mod data_url;
mod upload;

pub use data_url::{DataUrl, DataUrlError};
pub use upload::{UploadConstraint, UploadRejection, DEFAULT_MAX_UPLOAD_BYTES};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /predict`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictRequest {
    pub image: DataUrl,
}

impl PredictRequest {
    pub fn new(image: &DataUrl) -> Self {
        Self {
            image: image.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub predicted_class: String,
    pub confidence: f64,
    pub cropped_image: DataUrl,
}

/// The service answers either with a prediction or with `{"error": ...}`.
/// Anything carrying an `error` field is treated as a failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PredictResponse {
    Failure { error: String },
    Success(Prediction),
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    #[strum(serialize = "user")]
    User,
    #[default]
    #[strum(serialize = "environment")]
    Environment,
}

impl FacingMode {
    pub fn flipped(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }

    /// Human name used in notifications.
    pub fn label(self) -> &'static str {
        match self {
            FacingMode::User => "front",
            FacingMode::Environment => "back",
        }
    }
}

/// Correlates log lines of a single prediction round trip.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn success_body_parses_into_prediction() {
        let body = r#"{"predicted_class":"Milk","confidence":97.5,"cropped_image":"data:image/jpeg;base64,AAA"}"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();

        match response {
            PredictResponse::Success(prediction) => {
                assert_eq!(prediction.predicted_class, "Milk");
                assert_eq!(prediction.confidence, 97.5);
                assert_eq!(prediction.cropped_image.mime_type(), "image/jpeg");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn error_body_parses_into_failure() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"error":"model unavailable"}"#).unwrap();
        assert_eq!(
            response,
            PredictResponse::Failure {
                error: "model unavailable".into()
            }
        );
    }

    #[test]
    fn error_field_wins_over_partial_prediction() {
        let body = r#"{"error":"No valid contour found, invalid image.","predicted_class":"Milk"}"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(response, PredictResponse::Failure { .. }));
    }

    #[test]
    fn prediction_with_broken_cropped_image_is_rejected() {
        let body = r#"{"predicted_class":"Milk","confidence":97.5,"cropped_image":"not a data url"}"#;
        assert!(serde_json::from_str::<PredictResponse>(body).is_err());
    }

    #[test]
    fn request_serializes_image_as_plain_string() {
        let image = DataUrl::parse("data:image/jpeg;base64,/9j/4AAQ").unwrap();
        let json = serde_json::to_string(&PredictRequest::new(&image)).unwrap();
        assert_eq!(json, r#"{"image":"data:image/jpeg;base64,/9j/4AAQ"}"#);
    }

    #[test]
    fn facing_mode_uses_media_capture_names() {
        assert_eq!(FacingMode::User.to_string(), "user");
        assert_eq!(FacingMode::Environment.to_string(), "environment");
        assert_eq!(FacingMode::from_str("user").unwrap(), FacingMode::User);
        assert_eq!(
            serde_json::to_string(&FacingMode::Environment).unwrap(),
            r#""environment""#
        );
    }

    #[test]
    fn facing_mode_flips_and_defaults_to_back_camera() {
        assert_eq!(FacingMode::default(), FacingMode::Environment);
        assert_eq!(FacingMode::Environment.flipped(), FacingMode::User);
        assert_eq!(FacingMode::User.flipped().label(), "back");
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }
}
