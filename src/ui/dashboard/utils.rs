//! Dashboard utility functions
//!
//! Display formatting shared by the TUI components and the headless snapshot

use crate::consts::cli_consts::ui::ADDRESS_EDGE_CHARS;
use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity log entry based on its source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Ui => Color::Yellow,
    }
}

/// Format a percentage with one decimal place, e.g. `66.666` -> `66.7%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a wallet success ratio in `[0, 1]` as a percentage, e.g. `0.5` -> `50.0%`.
pub fn format_wallet_rate(ratio: f64) -> String {
    format_percent(ratio * 100.0)
}

/// Shorten a contract address to its first and last eight characters.
///
/// Addresses too short to shorten without overlap are returned whole.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < ADDRESS_EDGE_CHARS * 2 {
        return address.to_string();
    }
    let head: String = chars[..ADDRESS_EDGE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_EDGE_CHARS..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format compact timestamp with date and time from full timestamp.
///
/// Accepts both `YYYY-MM-DD HH:MM:SS` and ISO-8601 `YYYY-MM-DDTHH:MM:SS`.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let mut parts = timestamp.splitn(2, [' ', 'T']);
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        // Extract MM-DD from date and HH:MM from time
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Rotating spinner frame for the given tick.
pub fn spinner_frame(tick: usize) -> &'static str {
    const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
    FRAMES[tick % FRAMES.len()]
}
