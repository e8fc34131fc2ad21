//! Runtime configuration
//!
//! The defaults are compiled in. A host page may override any of them with an
//! inline JSON block:
//!
//! ```html
//! <script id="autohealth-config" type="application/json">
//!   { "report_delay_ms": 500 }
//! </script>
//! ```

use serde::Deserialize;
use std::time::Duration;

use crate::error::Result;

/// Id of the optional inline config element.
pub const CONFIG_ELEMENT_ID: &str = "autohealth-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Product name shown on the auth screens and in the document title
    pub app_name: String,
    /// Durable key holding the session flag
    pub storage_key: String,
    /// Simulated latency before the assistant answers
    pub chat_reply_delay_ms: u64,
    /// Simulated latency before a report is shown
    pub report_delay_ms: u64,
    /// Name shown on the account affordance in the header
    pub display_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_name: "AutoHealth".to_string(),
            storage_key: "isAuthenticated".to_string(),
            chat_reply_delay_ms: 1000,
            report_delay_ms: 2000,
            display_name: "John Doe".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load overrides from the host document, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed inline config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }

    /// Initials for the avatar fallback, e.g. "JD" for "John Doe".
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = UiConfig::from_json(r#"{ "report_delay_ms": 50 }"#).expect("should parse");

        assert_eq!(config.report_delay(), Duration::from_millis(50));
        assert_eq!(config.storage_key, "isAuthenticated");
        assert_eq!(config.chat_reply_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let err = UiConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_initials() {
        let mut config = UiConfig::default();
        assert_eq!(config.initials(), "JD");

        config.display_name = "ada".to_string();
        assert_eq!(config.initials(), "A");
    }
}
