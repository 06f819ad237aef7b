//! Client for the upstream property provider.
//!
//! Two read-only endpoints are consumed: the published list and the
//! per-property detail. Both are authenticated with an API key and an
//! integration-source header.

pub mod config;
pub mod error;
pub mod types;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

pub use config::ProviderConfig;
pub use error::{ProviderError, Result};
pub use types::{
    DetailResponse, ExternalAddress, ExternalBroker, ExternalDevelopment, ExternalFloorPlan,
    ExternalOrganization, ExternalPackage, ExternalPhoto, ExternalRentPrice, ExternalSalePrice,
    ExternalTower, ListResponse, PropertyDetail, PropertySummary,
};

/// Source of published properties.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Summaries of every currently published property.
    async fn fetch_published_summaries(&self) -> Result<Vec<PropertySummary>>;

    /// Full property graph for one external id.
    async fn fetch_property_detail(&self, external_id: u64) -> Result<PropertyDetail>;
}

pub struct ProviderClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProviderClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&config.api_key).map_err(invalid_header)?,
        );
        headers.insert(
            "x-integration-source",
            HeaderValue::from_str(&config.integration_source).map_err(invalid_header)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn invalid_header(err: reqwest::header::InvalidHeaderValue) -> ProviderError {
    ProviderError::Config(format!("header value rejected: {err}"))
}

#[async_trait]
impl PropertySource for ProviderClient {
    async fn fetch_published_summaries(&self) -> Result<Vec<PropertySummary>> {
        let url = format!("{}/api/properties/published", self.base_url);
        let resp: ListResponse = self.get_json(&url).await?;
        tracing::debug!(count = resp.results.entities.len(), "Fetched published list");
        Ok(resp.results.entities)
    }

    async fn fetch_property_detail(&self, external_id: u64) -> Result<PropertyDetail> {
        let url = format!("{}/api/properties/published/{}", self.base_url, external_id);
        let resp: DetailResponse = self.get_json(&url).await?;
        Ok(resp.results)
    }
}
