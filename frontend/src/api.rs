use crate::error::TransportError;
use crate::prediction::PredictionClient;
use gloo_net::http::Request;
use serde_json::Value;
use shared::{PredictRequest, PredictResponse, Prediction};

/// `POST <endpoint>` with a JSON body, via `fetch`.
#[derive(Clone)]
pub struct HttpPredictionClient {
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, TransportError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        interpret(
            response.ok(),
            response.status(),
            response.status_text(),
            decode_body(&body),
        )
    }
}

/// Any body carrying an `error` field is a failure; everything else must be
/// a complete prediction. Errors name the offending field.
fn decode_body(body: &str) -> Result<PredictResponse, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if let Some(error) = value.get("error") {
        let error = match error.as_str() {
            Some(text) => text.to_string(),
            None => error.to_string(),
        };
        return Ok(PredictResponse::Failure { error });
    }
    serde_json::from_value::<Prediction>(value)
        .map(PredictResponse::Success)
        .map_err(|e| e.to_string())
}

/// Error bodies come with 4xx/5xx, so the status alone decides nothing.
fn interpret(
    ok: bool,
    status: u16,
    status_text: String,
    body: Result<PredictResponse, String>,
) -> Result<PredictResponse, TransportError> {
    match body {
        Ok(body) => Ok(body),
        Err(e) if ok => Err(TransportError::Parse(e)),
        Err(_) => Err(TransportError::Server {
            status,
            status_text,
        }),
    }
}
