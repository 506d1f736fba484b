//! View models for the dashboard statistics endpoint.
//!
//! Every value here is read-only and replaced wholesale on each successful load.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome of a signal once it has been evaluated.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize, strum::Display)]
#[serde(from = "Option<String>")]
pub enum PerformanceStatus {
    Success,
    Failure,
    Pending,
    #[default]
    Unknown,
}

impl From<Option<String>> for PerformanceStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("SUCCESS") => PerformanceStatus::Success,
            Some("FAILURE") => PerformanceStatus::Failure,
            Some("PENDING") => PerformanceStatus::Pending,
            _ => PerformanceStatus::Unknown,
        }
    }
}

/// Recommended action attached to a signal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize, strum::Display)]
#[serde(from = "Option<String>")]
pub enum Decision {
    StrongBuy,
    Buy,
    Ignore,
    #[default]
    Unknown,
}

impl From<Option<String>> for Decision {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("STRONG_BUY") => Decision::StrongBuy,
            Some("BUY") => Decision::Buy,
            Some("IGNORE") => Decision::Ignore,
            _ => Decision::Unknown,
        }
    }
}

/// Aggregate counters computed by the backend.
///
/// `success_rate` is already a percentage in `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_signals: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub successful_signals: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_signals: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub success_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_wallets: u64,
}

impl DashboardStats {
    /// Signals that are neither successful nor pending. Saturates at zero.
    pub fn failed_signals(&self) -> u64 {
        self.total_signals
            .saturating_sub(self.successful_signals)
            .saturating_sub(self.pending_signals)
    }

    /// Checks that successful and pending signals fit inside the total.
    pub fn validate(&self) -> Result<(), String> {
        let accounted = self
            .successful_signals
            .checked_add(self.pending_signals)
            .ok_or_else(|| "signal counters overflow".to_string())?;
        if accounted > self.total_signals {
            return Err(format!(
                "successful ({}) + pending ({}) signals exceed total ({})",
                self.successful_signals, self.pending_signals, self.total_signals
            ));
        }
        if !self.success_rate.is_finite() {
            return Err("success rate is not a finite number".to_string());
        }
        Ok(())
    }
}

/// A recorded trading recommendation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signal {
    pub id: i64,
    #[serde(default)]
    pub token_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contract_address: String,
    #[serde(default)]
    pub performance_status: PerformanceStatus,
    #[serde(default)]
    pub decision: Decision,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_wallets_involved: u64,
    /// ISO-8601 time the signal was recorded, when the backend provides it.
    #[serde(default)]
    pub signal_time: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

/// A monitored wallet and its call history.
///
/// `success_rate` is a ratio in `[0, 1]`, unlike [`DashboardStats::success_rate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wallet {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wallet_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wallet_number: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_calls: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub successful_calls: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success_rate: f64,
}

/// Body of `GET /api/dashboard/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardPayload {
    #[serde(default)]
    pub stats: Option<DashboardStats>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_signals: Vec<Signal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_wallets: Vec<Wallet>,
}

impl DashboardPayload {
    /// Rejects payloads whose counters cannot be displayed consistently.
    pub fn validate(&self) -> Result<(), String> {
        match &self.stats {
            Some(stats) => stats.validate(),
            None => Ok(()),
        }
    }
}
