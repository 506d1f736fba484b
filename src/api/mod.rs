use crate::api::error::ApiError;
use crate::models::DashboardPayload;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatsApi: Send + Sync {
    /// Fetch the aggregated dashboard statistics.
    async fn dashboard_stats(&self) -> Result<DashboardPayload, ApiError>;
}
