use serde::Deserialize;
use shared::{FacingMode, UploadConstraint};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub predict_endpoint: String,
    pub upload: UploadConstraint,
    pub default_facing: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub toast_millis: u32,
    pub autostart_camera: bool,
    /// Predicted labels rendered with the "clean" verdict.
    pub clean_classes: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            predict_endpoint: "/predict".into(),
            upload: UploadConstraint::default(),
            default_facing: FacingMode::Environment,
            ideal_width: 640,
            ideal_height: 480,
            toast_millis: 3000,
            autostart_camera: true,
            clean_classes: vec!["Milk".into()],
        }
    }
}

impl ClientConfig {
    /// Page-embedded JSON (`<script id="milkscan-config" type="application/json">`)
    /// when present, then variables baked in at build time.
    pub fn load() -> Self {
        let base = page_config_json()
            .map(|json| Self::from_json(&json))
            .unwrap_or_default();
        base.with_overrides(
            option_env!("MILKSCAN_PREDICT_ENDPOINT"),
            option_env!("MILKSCAN_AUTOSTART"),
        )
    }

    fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid page config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn with_overrides(mut self, endpoint: Option<&str>, autostart: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.predict_endpoint = endpoint.trim().to_string();
        }
        if let Some(autostart) = autostart {
            match autostart.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "no" | "off" => self.autostart_camera = false,
                "1" | "true" | "yes" | "on" => self.autostart_camera = true,
                other => log::warn!("Ignoring MILKSCAN_AUTOSTART value {:?}", other),
            }
        }
        self
    }
}

fn page_config_json() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id("milkscan-config")?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_contract() {
        let config = ClientConfig::default();
        assert_eq!(config.predict_endpoint, "/predict");
        assert_eq!(config.upload.max_bytes, 1024 * 1024);
        assert_eq!(config.default_facing, FacingMode::Environment);
        assert!(config.autostart_camera);
    }

    #[test]
    fn overrides_apply_when_present() {
        let config =
            ClientConfig::default().with_overrides(Some(" http://scanner:5000/predict "), Some("off"));
        assert_eq!(config.predict_endpoint, "http://scanner:5000/predict");
        assert!(!config.autostart_camera);
    }

    #[test]
    fn blank_or_unknown_overrides_are_ignored() {
        let config = ClientConfig::default().with_overrides(Some("  "), Some("maybe"));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        assert_eq!(ClientConfig::from_json("{not json"), ClientConfig::default());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = ClientConfig::from_json(r#"{"toast_millis": 1500, "default_facing": "user"}"#);
        assert_eq!(config.toast_millis, 1500);
        assert_eq!(config.default_facing, FacingMode::User);
        assert_eq!(config.ideal_width, 640);
    }
}
