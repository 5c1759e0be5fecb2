// crates/foodframe-core/src/config.rs

use crate::detect::DetectionRule;
use crate::error::{FrameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORAGE_KEY: &str = "userCity";
pub const DEFAULT_MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Frame settings. Every field has a default, so a partial JSON document
/// (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Storage key holding the persisted city.
    pub storage_key: String,
    /// Prefix of the "view on map" link; the encoded query is appended.
    pub maps_search_base: String,
    pub detection: DetectionRule,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            maps_search_base: DEFAULT_MAPS_SEARCH_BASE.to_string(),
            detection: DetectionRule::default(),
        }
    }
}

impl FrameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(FrameError::Config("storage_key must not be empty".into()));
        }
        if !(self.maps_search_base.starts_with("https://")
            || self.maps_search_base.starts_with("http://"))
        {
            return Err(FrameError::Config(format!(
                "maps_search_base is not an http(s) URL: {}",
                self.maps_search_base
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = FrameConfig::from_json_str("{}").unwrap();
        assert_eq!(config, FrameConfig::default());
        assert_eq!(config.storage_key, "userCity");
        assert_eq!(config.detection.username, "kompreni");
    }

    #[test]
    fn partial_override() {
        let config =
            FrameConfig::from_json_str(r#"{"detection": {"city": "Tokyo"}}"#).unwrap();
        assert_eq!(config.detection.username, "kompreni");
        assert_eq!(config.detection.city, "Tokyo");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            FrameConfig::from_json_str(r#"{"storage_key": " "}"#),
            Err(FrameError::Config(_))
        ));
        assert!(matches!(
            FrameConfig::from_json_str(r#"{"maps_search_base": "ftp://maps"}"#),
            Err(FrameError::Config(_))
        ));
        assert!(matches!(FrameConfig::from_json_str("not json"), Err(FrameError::Json(_))));
    }
}
