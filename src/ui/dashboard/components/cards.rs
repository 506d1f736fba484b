//! Dashboard stat cards
//!
//! Renders the four headline counters

use super::super::state::DashboardState;
use super::super::utils::format_percent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

fn card_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn render_counter_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: u64,
    caption: String,
    color: Color,
) {
    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(Color::Gray))),
    ];
    f.render_widget(
        Paragraph::new(lines).block(card_block(title, color)),
        area,
    );
}

/// Render total signals, success rate, active wallets and pending signals.
pub fn render_stat_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = state.stats_or_default();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_counter_card(
        f,
        chunks[0],
        "Total Signals",
        stats.total_signals,
        format!("{} successful", stats.successful_signals),
        Color::LightBlue,
    );

    let rate_gauge = Gauge::default()
        .block(card_block("Success Rate", Color::LightGreen))
        .gauge_style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .percent(stats.success_rate.clamp(0.0, 100.0) as u16)
        .label(format_percent(stats.success_rate));
    f.render_widget(rate_gauge, chunks[1]);

    render_counter_card(
        f,
        chunks[2],
        "Active Wallets",
        stats.total_wallets,
        "monitored wallets".to_string(),
        Color::Magenta,
    );

    render_counter_card(
        f,
        chunks[3],
        "Pending Signals",
        stats.pending_signals,
        "awaiting evaluation".to_string(),
        Color::Yellow,
    );
}
