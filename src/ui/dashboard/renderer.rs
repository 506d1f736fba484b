//! Dashboard main renderer

use super::components::{
    analytics, cards, footer, header, signals, status_views, tabs, wallets,
};
use super::state::{DashboardState, Tab, View};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Draw the dashboard. Exactly one of the loading, error or content views is
/// drawn, chosen by `DashboardState::view`.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let view = state.view();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match view {
        View::Loading => status_views::render_loading(f, main_chunks[1], state),
        View::Error => status_views::render_error(f, main_chunks[1], state),
        View::Content => render_content(f, main_chunks[1], state),
    }

    footer::render_footer(f, main_chunks[2], view);
}

fn render_content(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

    cards::render_stat_cards(f, chunks[0], state);
    tabs::render_tabs(f, chunks[1], state);

    match state.selected_tab {
        Tab::Signals => signals::render_signals_tab(f, chunks[2], state),
        Tab::Wallets => wallets::render_wallets_tab(f, chunks[2], state),
        Tab::Analytics => analytics::render_analytics_tab(f, chunks[2], state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::events::FetchEvent;
    use crate::models::DashboardPayload;
    use crate::ui::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(state: &DashboardState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn payload() -> DashboardPayload {
        serde_json::from_str(
            r#"{
                "stats": {"total_signals": 100, "successful_signals": 60,
                          "pending_signals": 10, "success_rate": 60.0, "total_wallets": 25},
                "recent_signals": [{
                    "id": 1, "token_name": "PEPE",
                    "contract_address": "0x1234567890abcdef1234",
                    "performance_status": "SUCCESS", "decision": "STRONG_BUY",
                    "total_wallets_involved": 7
                }],
                "top_wallets": [{
                    "id": 3, "wallet_type": "alpha", "wallet_number": 12,
                    "total_calls": 40, "successful_calls": 30, "success_rate": 0.75
                }]
            }"#,
        )
        .unwrap()
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(Instant::now(), UIConfig::new(false));
        state.apply(FetchEvent::Started { request_id: 1 });
        state.apply(FetchEvent::Succeeded {
            request_id: 1,
            payload: payload(),
        });
        state
    }

    #[test]
    fn test_loading_view_is_exclusive() {
        let mut state = DashboardState::new(Instant::now(), UIConfig::new(false));
        state.apply(FetchEvent::Started { request_id: 1 });
        let screen = draw(&state);
        assert!(screen.contains("Loading dashboard"));
        assert!(!screen.contains("Total Signals"));
        assert!(!screen.contains("Unable to load"));
    }

    #[test]
    fn test_content_view_shows_stats_and_signals() {
        let screen = draw(&loaded_state());
        assert!(screen.contains("Total Signals"));
        assert!(screen.contains("60 successful"));
        assert!(screen.contains("PEPE"));
        assert!(screen.contains("STRONG BUY"));
        assert!(screen.contains("0x123456...cdef1234"));
        assert!(!screen.contains("Loading dashboard"));
    }

    #[test]
    fn test_wallets_tab_shows_rank_and_rate() {
        let mut state = loaded_state();
        state.select_tab(Tab::Wallets);
        let screen = draw(&state);
        assert!(screen.contains("alpha #12"));
        assert!(screen.contains("75.0%"));
    }

    #[test]
    fn test_analytics_tab_shows_failed_count() {
        let mut state = loaded_state();
        state.select_tab(Tab::Analytics);
        let screen = draw(&state);
        assert!(screen.contains("SIGNAL OUTCOMES"));
        assert!(screen.contains("Failed      30"));
        assert!(screen.contains("ACTIVE"));
    }

    #[test]
    fn test_exactly_one_view_drawn_per_step() {
        let mut state = DashboardState::new(Instant::now(), UIConfig::new(false));
        let failed = |request_id| FetchEvent::Failed {
            request_id,
            message: "Could not connect to the signal backend".to_string(),
            log_level: LogLevel::Warn,
        };
        let sequence = [
            FetchEvent::Started { request_id: 1 },
            failed(1),
            FetchEvent::Started { request_id: 2 },
            FetchEvent::Started { request_id: 3 },
            FetchEvent::Succeeded {
                request_id: 2,
                payload: payload(),
            },
            failed(3),
            FetchEvent::Started { request_id: 4 },
            FetchEvent::Succeeded {
                request_id: 4,
                payload: payload(),
            },
        ];
        let markers = [
            "Fetching the latest signal statistics",
            "Unable to load the dashboard",
            "Total Signals",
        ];
        for event in sequence {
            state.apply(event);
            let screen = draw(&state);
            let drawn = markers.iter().filter(|m| screen.contains(*m)).count();
            assert_eq!(drawn, 1, "after {:?}", state.phase());
        }
    }

    #[test]
    fn test_error_view_hides_stale_content() {
        let mut state = loaded_state();
        state.apply(FetchEvent::Started { request_id: 2 });
        state.apply(FetchEvent::Failed {
            request_id: 2,
            message: "Failed to load dashboard data (HTTP 500)".to_string(),
            log_level: LogLevel::Warn,
        });
        let screen = draw(&state);
        assert!(screen.contains("HTTP 500"));
        assert!(screen.contains("[R] Retry"));
        assert!(!screen.contains("Total Signals"));
        assert!(!screen.contains("PEPE"));
    }
}
