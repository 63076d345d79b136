//! Compose-link configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where inquiries go and how the success banner is timed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Fixed recipient of every inquiry.
    pub recipient: String,
    /// Webmail compose endpoint; query parameters are appended.
    pub compose_base: String,
    /// Site name used in the body signature line.
    pub site_name: String,
    /// Delay before showing success after the webmail link opened.
    pub primary_delay_ms: u64,
    /// Delay before showing success after falling back to `mailto:`.
    pub fallback_delay_ms: u64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            recipient: "anita.mrugesh@gmail.com".to_string(),
            compose_base: "https://mail.google.com/mail/".to_string(),
            site_name: "Gajanand Enterprise".to_string(),
            primary_delay_ms: 500,
            fallback_delay_ms: 1000,
        }
    }
}

impl ComposeConfig {
    pub fn primary_delay(&self) -> Duration {
        Duration::from_millis(self.primary_delay_ms)
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ComposeConfig =
            serde_json::from_str(r#"{ "recipient": "sales@example.com" }"#).unwrap();
        assert_eq!(config.recipient, "sales@example.com");
        assert_eq!(config.compose_base, "https://mail.google.com/mail/");
        assert_eq!(config.primary_delay(), Duration::from_millis(500));
        assert_eq!(config.fallback_delay(), Duration::from_millis(1000));
    }
}
