//! Top wallets tab

use super::super::state::DashboardState;
use super::super::utils::format_wallet_rate;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render wallets ranked by their position in the backend response.
pub fn render_wallets_tab(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new(vec!["#", "Wallet", "Total Calls", "Success", "Successful"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .top_wallets
        .iter()
        .enumerate()
        .map(|(index, wallet)| {
            Row::new(vec![
                Cell::from(format!("{}", index + 1)).style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(format!("{} #{}", wallet.wallet_type, wallet.wallet_number))
                    .style(Style::default().fg(Color::White)),
                Cell::from(format!("{} calls", wallet.total_calls))
                    .style(Style::default().fg(Color::Gray)),
                Cell::from(format!("▲ {}", format_wallet_rate(wallet.success_rate))).style(
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(format!("{} won", wallet.successful_calls))
                    .style(Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let title = if rows.is_empty() {
        "TOP WALLETS (none yet)".to_string()
    } else {
        "TOP WALLETS (highest success rate)".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
