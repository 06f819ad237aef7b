use config::{Config, ConfigError, Environment, File};
use provider_client::ProviderConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Import batch tuning.
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Properties reconciled in parallel. Default: 1 (sequential).
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_concurrency() -> usize {
    1
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub external_api: ProviderConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("IMOVEIS_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("external_api.timeout_secs", 30_i64)?
            .set_default("import.concurrency", 1_i64)?
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., IMOVEIS__EXTERNAL_API__API_KEY)
            .add_source(Environment::with_prefix("IMOVEIS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
