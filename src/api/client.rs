//! Signal Backend Client
//!
//! Loads the aggregated dashboard statistics over HTTP.

use crate::api::StatsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{self, network};
use crate::models::DashboardPayload;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("falcon-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the fixed backend address.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(cli_consts::API_BASE)
    }

    pub(crate) fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        // No overall timeout: a request runs until the transport gives up.
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl StatsApi for ApiClient {
    async fn dashboard_stats(&self) -> Result<DashboardPayload, ApiError> {
        let payload: DashboardPayload = self.get_request(cli_consts::STATS_PATH).await?;
        payload.validate().map_err(ApiError::Inconsistent)?;
        Ok(payload)
    }
}
