//! Status and decision display mappings

use crate::models::{Decision, PerformanceStatus};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;

/// Icon shown next to a signal for its performance status.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub symbol: &'static str,
    pub label: &'static str,
    pub color: Color,
}

impl Indicator {
    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!("{} ", self.symbol),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )
    }
}

/// Label shown for a signal's decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub style: Style,
}

impl Badge {
    pub fn span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.label), self.style)
    }
}

pub fn status_to_indicator(status: PerformanceStatus) -> Indicator {
    match status {
        PerformanceStatus::Success => Indicator {
            symbol: "✔",
            label: "Success",
            color: Color::Green,
        },
        PerformanceStatus::Failure => Indicator {
            symbol: "✘",
            label: "Failure",
            color: Color::Red,
        },
        PerformanceStatus::Pending => Indicator {
            symbol: "◷",
            label: "Pending",
            color: Color::Yellow,
        },
        PerformanceStatus::Unknown => Indicator {
            symbol: "◌",
            label: "Unknown",
            color: Color::Gray,
        },
    }
}

pub fn decision_to_badge(decision: Decision) -> Badge {
    match decision {
        Decision::StrongBuy => Badge {
            label: "STRONG BUY",
            style: Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        },
        Decision::Buy => Badge {
            label: "BUY",
            style: Style::default().fg(Color::Black).bg(Color::LightGreen),
        },
        Decision::Ignore => Badge {
            label: "IGNORE",
            style: Style::default().fg(Color::White).bg(Color::DarkGray),
        },
        Decision::Unknown => Badge {
            label: "UNDETERMINED",
            style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_indicators() {
        assert_eq!(status_to_indicator(PerformanceStatus::Success).color, Color::Green);
        assert_eq!(status_to_indicator(PerformanceStatus::Failure).color, Color::Red);
        assert_eq!(status_to_indicator(PerformanceStatus::Pending).label, "Pending");
    }

    #[test]
    fn test_unrecognised_status_is_neutral() {
        let status = PerformanceStatus::from(Some("UNEXPECTED".to_string()));
        let indicator = status_to_indicator(status);
        assert_eq!(indicator.label, "Unknown");
        assert_eq!(indicator.color, Color::Gray);
    }

    #[test]
    fn test_unrecognised_decision_is_undetermined() {
        let decision = Decision::from(Some("UNEXPECTED".to_string()));
        assert_eq!(decision_to_badge(decision).label, "UNDETERMINED");
        assert_eq!(decision_to_badge(Decision::from(None)).label, "UNDETERMINED");
    }

    #[test]
    fn test_decision_badges() {
        assert_eq!(decision_to_badge(Decision::StrongBuy).label, "STRONG BUY");
        assert_eq!(decision_to_badge(Decision::Buy).label, "BUY");
        assert_eq!(decision_to_badge(Decision::Ignore).label, "IGNORE");
    }
}
