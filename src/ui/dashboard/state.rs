//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::{Event, FetchEvent};
use crate::models::{DashboardStats, Signal, Wallet};
use crate::ui::UIConfig;

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::Instant;

/// Where the most recent load stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FetchPhase {
    /// Nothing has been requested yet.
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// The top-level view the renderer draws. Exactly one is active at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    Loading,
    Error,
    Content,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tab {
    Signals,
    Wallets,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Signals, Tab::Wallets, Tab::Analytics];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Signals => "Recent Signals",
            Tab::Wallets => "Top Wallets",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Signals => 0,
            Tab::Wallets => 1,
            Tab::Analytics => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dashboard state, written only by the reducer in `updaters`.
#[derive(Debug)]
pub struct DashboardState {
    /// The start time of the application.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Aggregate counters from the last successful load. `None` renders as zeros.
    pub stats: Option<DashboardStats>,
    /// Signals from the last successful load, in backend order.
    pub recent_signals: Vec<Signal>,
    /// Wallets from the last successful load, in backend (rank) order.
    pub top_wallets: Vec<Wallet>,
    /// Queue of load events waiting to be applied
    pub pending_events: VecDeque<FetchEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Tab shown in the content view
    pub selected_tab: Tab,
    /// Animation tick counter
    pub tick: usize,

    phase: FetchPhase,
    error: Option<String>,
    /// Id of the most recently started load; completions for other ids are dropped.
    latest_request_id: u64,
    last_updated: Option<DateTime<Local>>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            start_time,
            with_background_color: ui_config.with_background_color,
            stats: None,
            recent_signals: Vec::new(),
            top_wallets: Vec::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            selected_tab: Tab::Signals,
            tick: 0,
            phase: FetchPhase::Idle,
            error: None,
            latest_request_id: 0,
            last_updated: None,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }

    pub fn last_updated(&self) -> Option<&DateTime<Local>> {
        self.last_updated.as_ref()
    }

    /// The view to draw. A pending load always shows the loading view, even
    /// over stale content.
    pub fn view(&self) -> View {
        match self.phase {
            FetchPhase::Idle | FetchPhase::Loading => View::Loading,
            FetchPhase::Errored => View::Error,
            FetchPhase::Loaded => View::Content,
        }
    }

    /// Counters to display, zeros when the backend sent none.
    pub fn stats_or_default(&self) -> DashboardStats {
        self.stats.clone().unwrap_or_default()
    }

    // Setters for private fields (for updaters)
    pub(super) fn set_phase(&mut self, phase: FetchPhase) {
        self.phase = phase;
    }

    pub(super) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub(super) fn set_latest_request_id(&mut self, request_id: u64) {
        self.latest_request_id = request_id;
    }

    pub(super) fn set_last_updated(&mut self, timestamp: DateTime<Local>) {
        self.last_updated = Some(timestamp);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: FetchEvent) {
        self.pending_events.push_back(event);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }

    pub fn select_next_tab(&mut self) {
        self.selected_tab = self.selected_tab.next();
    }

    pub fn select_previous_tab(&mut self) {
        self.selected_tab = self.selected_tab.previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;

    fn state() -> DashboardState {
        DashboardState::new(Instant::now(), UIConfig::new(false))
    }

    #[test]
    fn test_idle_renders_loading_view() {
        let state = state();
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert_eq!(state.view(), View::Loading);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut state = state();
        state.select_previous_tab();
        assert_eq!(state.selected_tab, Tab::Analytics);
        state.select_next_tab();
        assert_eq!(state.selected_tab, Tab::Signals);
        state.select_tab(Tab::Wallets);
        assert_eq!(state.selected_tab.index(), 1);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_to_activity_log(Event::ui(format!("event {}", i), EventType::Refresh));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }

    #[test]
    fn test_missing_stats_render_as_zeros() {
        let state = state();
        assert_eq!(state.stats_or_default(), DashboardStats::default());
    }
}
