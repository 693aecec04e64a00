//! List Configuration
//!
//! Settings with serde defaults, so a partial JSON override is enough.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Storage key holding the serialized item list
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// Storage key holding an optional JSON `ListConfig` override
pub const CONFIG_STORAGE_KEY: &str = "items.config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Key of the slot the item list is persisted under
    pub storage_key: String,
    /// Reject edits that rename an item onto another existing item's text
    pub validate_unique_on_edit: bool,
    /// Number of log lines kept in memory
    pub log_capacity: usize,
    /// Minimum log level: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            validate_unique_on_edit: false,
            log_capacity: 200,
            log_level: "info".to_string(),
        }
    }
}

impl ListConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed `log_level`, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = ListConfig::from_json(r#"{"validate_unique_on_edit": true}"#).unwrap();
        assert!(config.validate_unique_on_edit);
        assert_eq!(config.storage_key, "items");
        assert_eq!(config.log_capacity, 200);
    }

    #[test]
    fn level_filter_parses_names() {
        let mut config = ListConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::INFO);
        config.log_level = "debug".into();
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);
        config.log_level = "loud".into();
        assert_eq!(config.level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(ListConfig::from_json("not json").is_err());
    }
}
