//! Dashboard header component
//!
//! Renders the title and load status line

use super::super::state::{DashboardState, FetchPhase};
use super::super::utils::spinner_frame;
use crate::consts::cli_consts::API_BASE;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and load status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("SMART FALCON SIGNAL DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (status_text, status_color) = match state.phase() {
        FetchPhase::Idle => ("IDLE".to_string(), Color::Gray),
        FetchPhase::Loading => (
            format!("{} LOADING", spinner_frame(state.tick)),
            Color::LightBlue,
        ),
        FetchPhase::Loaded => ("● LIVE".to_string(), Color::LightGreen),
        FetchPhase::Errored => ("✘ ERROR".to_string(), Color::LightRed),
    };

    let last_update = state
        .last_updated()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "Never".to_string());

    let status_line = Line::from(vec![
        Span::styled(
            status_text,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Last update: ", Style::default().fg(Color::Gray)),
        Span::styled(last_update, Style::default().fg(Color::Yellow)),
        Span::styled("   Backend: ", Style::default().fg(Color::Gray)),
        Span::styled(API_BASE, Style::default().fg(Color::Cyan)),
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
