use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,
    #[error("data URL has no payload separator")]
    MissingSeparator,
    #[error("data URL declares no MIME type")]
    MissingMime,
    #[error("data URL is not base64 encoded")]
    NotBase64,
    #[error("data URL payload is empty")]
    EmptyPayload,
}

/// An encoded image travelling as `data:<mime>;base64,<payload>`.
///
/// Construction validates the shape only; the payload bytes stay opaque.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataUrl {
    raw: String,
    mime_end: usize,
    payload_start: usize,
}

impl DataUrl {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DataUrlError> {
        let raw = raw.into();
        let rest = raw.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let comma = rest.find(',').ok_or(DataUrlError::MissingSeparator)?;
        let header = &rest[..comma];

        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default();
        if mime.is_empty() {
            return Err(DataUrlError::MissingMime);
        }
        if !params.any(|param| param.eq_ignore_ascii_case("base64")) {
            return Err(DataUrlError::NotBase64);
        }
        if rest[comma + 1..].is_empty() {
            return Err(DataUrlError::EmptyPayload);
        }

        let mime_end = "data:".len() + mime.len();
        let payload_start = "data:".len() + comma + 1;
        Ok(Self {
            raw,
            mime_end,
            payload_start,
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.raw["data:".len()..self.mime_end]
    }

    pub fn payload(&self) -> &str {
        &self.raw[self.payload_start..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Size of the decoded bytes, derived from the base64 length.
    pub fn decoded_len(&self) -> usize {
        let payload = self.payload().trim_end_matches('=');
        payload.len() * 3 / 4
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for DataUrl {
    type Error = DataUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DataUrl> for String {
    fn from(value: DataUrl) -> Self {
        value.raw
    }
}
