//! Full-area loading and error views

use super::super::state::DashboardState;
use super::super::utils::spinner_frame;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(chunks[1]);
    cols[1]
}

pub fn render_loading(f: &mut Frame, area: Rect, state: &DashboardState) {
    let text = vec![
        Line::from(Span::styled(
            format!("{}  Loading dashboard...", spinner_frame(state.tick)),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fetching the latest signal statistics",
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        centered(area, 2),
    );
}

/// Error message with a retry hint. Previously loaded data is not shown here.
pub fn render_error(f: &mut Frame, area: Rect, state: &DashboardState) {
    let message = state.error().unwrap_or("Failed to load dashboard data");

    let text = vec![
        Line::from(Span::styled(
            "✘ Unable to load the dashboard",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Retry",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title("ERROR")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true }),
        centered(area, 9),
    );
}
