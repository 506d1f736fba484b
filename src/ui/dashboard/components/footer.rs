//! Dashboard footer component
//!
//! Renders key hints for the active view

use super::super::state::View;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hints shown for a view.
pub fn footer_text(view: View) -> &'static str {
    match view {
        View::Loading => "[Q] Quit | Loading dashboard data...",
        View::Error => "[R] Retry | [Q] Quit",
        View::Content => "[R] Refresh | [Tab/1-3] Switch tab | [Q] Quit",
    }
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, view: View) {
    let footer_color = match view {
        View::Error => Color::LightRed,
        View::Loading | View::Content => Color::Cyan,
    };

    let footer = Paragraph::new(footer_text(view))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
