//! Dashboard state update logic
//!
//! The reducer: the only code that writes fetched data, phase or error.

use super::state::{DashboardState, FetchPhase};

use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType, FetchEvent};
use crate::models::DashboardPayload;

use chrono::Local;

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(event) = self.pending_events.pop_front() {
            self.apply(event);
        }
    }

    /// Apply a single load event.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Started { request_id } => self.handle_started(request_id),
            FetchEvent::Succeeded {
                request_id,
                payload,
            } => self.handle_succeeded(request_id, payload),
            FetchEvent::Failed {
                request_id,
                message,
                log_level,
            } => self.handle_failed(request_id, message, log_level),
        }
    }

    fn handle_started(&mut self, request_id: u64) {
        if request_id <= self.latest_request_id() {
            return;
        }
        self.set_latest_request_id(request_id);
        self.set_phase(FetchPhase::Loading);
        self.set_error(None);
        self.add_to_activity_log(Event::loader_with_level(
            format!("Loading dashboard data (request #{})", request_id),
            EventType::Refresh,
            LogLevel::Info,
        ));
    }

    fn handle_succeeded(&mut self, request_id: u64, payload: DashboardPayload) {
        if self.is_stale(request_id) {
            return;
        }
        let DashboardPayload {
            stats,
            recent_signals,
            top_wallets,
        } = payload;
        let message = format!(
            "Loaded {} recent signals and {} top wallets",
            recent_signals.len(),
            top_wallets.len()
        );

        self.stats = stats;
        self.recent_signals = recent_signals;
        self.top_wallets = top_wallets;
        self.set_last_updated(Local::now());
        self.set_phase(FetchPhase::Loaded);
        self.add_to_activity_log(Event::loader_with_level(
            message,
            EventType::Success,
            LogLevel::Info,
        ));
    }

    /// Previously loaded data is left in place; only the error view changes.
    fn handle_failed(&mut self, request_id: u64, message: String, log_level: LogLevel) {
        if self.is_stale(request_id) {
            return;
        }
        self.add_to_activity_log(Event::loader_with_level(
            format!("Failed to load dashboard data: {}", message),
            EventType::Error,
            log_level,
        ));
        self.set_error(Some(message));
        self.set_phase(FetchPhase::Errored);
    }

    /// A completion is stale unless it belongs to the latest load still in flight.
    fn is_stale(&mut self, request_id: u64) -> bool {
        let in_flight =
            request_id == self.latest_request_id() && self.phase() == FetchPhase::Loading;
        if !in_flight {
            self.add_to_activity_log(Event::loader_with_level(
                format!(
                    "Discarded result of request #{} (latest is #{})",
                    request_id,
                    self.latest_request_id()
                ),
                EventType::Discarded,
                LogLevel::Debug,
            ));
        }
        !in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DashboardStats, Signal, Wallet};
    use crate::ui::UIConfig;
    use crate::ui::dashboard::state::View;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(Instant::now(), UIConfig::new(false))
    }

    fn payload(total: u64) -> DashboardPayload {
        DashboardPayload {
            stats: Some(DashboardStats {
                total_signals: total,
                ..Default::default()
            }),
            recent_signals: vec![Signal {
                id: 1,
                token_name: None,
                contract_address: "0xabc".to_string(),
                performance_status: Default::default(),
                decision: Default::default(),
                total_wallets_involved: 2,
                signal_time: None,
                confidence_score: None,
            }],
            top_wallets: vec![Wallet {
                id: 1,
                wallet_type: "KOL".to_string(),
                wallet_number: 1,
                total_calls: 5,
                successful_calls: 2,
                success_rate: 0.4,
            }],
        }
    }

    fn failed(request_id: u64) -> FetchEvent {
        FetchEvent::Failed {
            request_id,
            message: "Failed to load dashboard data (HTTP 500)".to_string(),
            log_level: LogLevel::Warn,
        }
    }

    fn succeeded(request_id: u64, total: u64) -> FetchEvent {
        FetchEvent::Succeeded {
            request_id,
            payload: payload(total),
        }
    }

    #[test]
    fn test_success_path() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        assert_eq!(state.view(), View::Loading);

        state.apply(succeeded(1, 10));
        assert_eq!(state.view(), View::Content);
        assert_eq!(state.stats.as_ref().unwrap().total_signals, 10);
        assert_eq!(state.recent_signals.len(), 1);
        assert_eq!(state.top_wallets.len(), 1);
        assert!(state.last_updated().is_some());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_error_then_retry() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(failed(1));
        assert_eq!(state.view(), View::Error);
        assert!(!state.error().unwrap().is_empty());

        state.apply(FetchEvent::Started { request_id: 2 });
        assert_eq!(state.view(), View::Loading);
        assert!(state.error().is_none());

        state.apply(succeeded(2, 3));
        assert_eq!(state.view(), View::Content);
    }

    #[test]
    fn test_failure_preserves_previous_data() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(succeeded(1, 42));
        state.apply(FetchEvent::Started { request_id: 2 });
        state.apply(failed(2));

        assert_eq!(state.view(), View::Error);
        assert_eq!(state.stats.as_ref().unwrap().total_signals, 42);
        assert_eq!(state.recent_signals.len(), 1);
    }

    #[test]
    fn test_refresh_shows_loading_over_stale_content() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(succeeded(1, 5));
        state.apply(FetchEvent::Started { request_id: 2 });
        assert_eq!(state.view(), View::Loading);
        assert_eq!(state.stats.as_ref().unwrap().total_signals, 5);
    }

    #[test]
    fn test_out_of_order_completion_is_discarded() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(FetchEvent::Started { request_id: 2 });

        // The older request resolves first and must not be applied.
        state.apply(succeeded(1, 100));
        assert_eq!(state.view(), View::Loading);
        assert!(state.stats.is_none());

        state.apply(succeeded(2, 7));
        assert_eq!(state.stats.as_ref().unwrap().total_signals, 7);

        // The older request resolving after the newer one changes nothing either.
        state.apply(failed(1));
        assert_eq!(state.view(), View::Content);
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.event_type == EventType::Discarded)
        );
    }

    #[test]
    fn test_duplicate_completion_ignored() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(succeeded(1, 1));
        state.apply(failed(1));
        assert_eq!(state.view(), View::Content);
    }

    #[test]
    fn test_stale_start_ignored() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 3 });
        state.apply(FetchEvent::Started { request_id: 2 });
        assert_eq!(state.latest_request_id(), 3);
    }

    #[test]
    fn test_view_follows_latest_request() {
        let mut state = state();
        let steps = [
            (FetchEvent::Started { request_id: 1 }, View::Loading),
            (failed(1), View::Error),
            (FetchEvent::Started { request_id: 2 }, View::Loading),
            (FetchEvent::Started { request_id: 3 }, View::Loading),
            // Superseded by #3, so still loading.
            (succeeded(2, 1), View::Loading),
            (failed(3), View::Error),
            (FetchEvent::Started { request_id: 4 }, View::Loading),
            (succeeded(4, 2), View::Content),
        ];
        for (event, expected) in steps {
            state.add_event(event);
            state.update();
            assert_eq!(state.view(), expected);
            assert_eq!(state.view() == View::Error, state.error().is_some());
        }
        assert_eq!(state.stats.as_ref().map(|s| s.total_signals), Some(2));
    }

    #[test]
    fn test_missing_lists_render_empty() {
        let mut state = state();
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(succeeded(1, 1));
        state.apply(FetchEvent::Started { request_id: 2 });
        state.apply(FetchEvent::Succeeded {
            request_id: 2,
            payload: DashboardPayload::default(),
        });
        assert!(state.recent_signals.is_empty());
        assert!(state.top_wallets.is_empty());
        assert!(state.stats.is_none());
        assert_eq!(state.view(), View::Content);
    }
}
