use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the upstream provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Base URL without trailing slash, e.g. "https://api.example.com".
    pub base_url: String,
    /// Sent as `x-api-key`.
    pub api_key: String,
    /// Sent as `x-integration-source`.
    pub integration_source: String,
    /// Per-request timeout in seconds. Default: 30. Zero falls back to the default.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(default_timeout_secs())
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}
