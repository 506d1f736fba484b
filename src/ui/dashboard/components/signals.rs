//! Recent signals tab

use super::super::indicators::{decision_to_badge, status_to_indicator};
use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, truncate_address};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the recent signals list, two lines per signal.
pub fn render_signals_tab(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = Vec::with_capacity(state.recent_signals.len() * 2);

    for signal in &state.recent_signals {
        let indicator = status_to_indicator(signal.performance_status);
        let badge = decision_to_badge(signal.decision);
        let token = signal.token_name.as_deref().unwrap_or("Unnamed token");

        lines.push(Line::from(vec![
            indicator.span(),
            Span::styled(
                format!("{}  ", token),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            badge.span(),
        ]));

        let mut details = vec![
            Span::raw("   "),
            Span::styled(
                truncate_address(&signal.contract_address),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("   {} wallets", signal.total_wallets_involved),
                Style::default().fg(Color::Gray),
            ),
        ];
        if let Some(score) = signal.confidence_score {
            details.push(Span::styled(
                format!("   score {:.0}", score),
                Style::default().fg(Color::LightBlue),
            ));
        }
        if let Some(time) = &signal.signal_time {
            details.push(Span::styled(
                format!("   {}", format_compact_timestamp(time)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(details));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No signals recorded yet",
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title(format!(
            "RECENT SIGNALS (last {} analysed)",
            state.recent_signals.len()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightBlue))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
