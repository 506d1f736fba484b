//! Analytics tab
//!
//! Signal outcome breakdown, system information and the activity log

use super::super::state::{DashboardState, FetchPhase};
use super::logs::render_logs_panel;
use crate::consts::cli_consts::API_BASE;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render analytics: outcome counts and system info on top, activity log below.
pub fn render_analytics_tab(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Fill(1)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_outcomes(f, top[0], state);
    render_system_info(f, top[1], state);
    render_logs_panel(f, rows[1], state);
}

fn outcome_line(label: &str, value: u64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_outcomes(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = state.stats_or_default();
    let lines = vec![
        outcome_line("Successful", stats.successful_signals, Color::LightGreen),
        outcome_line("Failed", stats.failed_signals(), Color::LightRed),
        outcome_line("Pending", stats.pending_signals, Color::Yellow),
    ];

    let block = Block::default()
        .title("SIGNAL OUTCOMES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightGreen))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Human readable uptime, coarsest unit first.
pub fn format_uptime(secs: u64) -> String {
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

fn render_system_info(f: &mut Frame, area: Rect, state: &DashboardState) {
    let (status, status_color) = match state.phase() {
        FetchPhase::Loaded => ("ACTIVE", Color::LightGreen),
        FetchPhase::Errored => ("DEGRADED", Color::LightRed),
        FetchPhase::Idle | FetchPhase::Loading => ("CONNECTING", Color::Yellow),
    };

    let last_update = state
        .last_updated()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "Never".to_string());

    let info_lines = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(
                status,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Last update: {}", last_update),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("Backend: {}", API_BASE),
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(Span::styled(
            format!(
                "Uptime: {}",
                format_uptime(state.start_time.elapsed().as_secs())
            ),
            Style::default().fg(Color::LightGreen),
        )),
    ];

    let block = Block::default()
        .title("SYSTEM INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(info_lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
