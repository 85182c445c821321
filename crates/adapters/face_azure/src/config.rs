//! Face API connection configuration.

use serde::Deserialize;

/// Configuration for the Azure Face API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaceApiConfig {
    /// Subscription key credential.
    pub api_key: String,
    /// Azure region hosting the resource (e.g. `westus`).
    pub region: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FaceApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: "westus".to_string(),
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_westus_with_ten_second_timeout() {
        let config = FaceApiConfig::default();
        assert_eq!(config.region, "westus");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }
}
