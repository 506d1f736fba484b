//! Event System
//!
//! Load lifecycle events consumed by the dashboard reducer, and the activity
//! log entries derived from them.

use crate::error_classifier::LogLevel;
use crate::logging;
use crate::models::DashboardPayload;
use chrono::Local;
use std::fmt::Display;

/// Discrete inputs to the dashboard reducer.
///
/// Every load is tagged with the id issued when it started; completions carry
/// the same id so stale results can be recognised.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    Started {
        request_id: u64,
    },
    Succeeded {
        request_id: u64,
        payload: DashboardPayload,
    },
    Failed {
        request_id: u64,
        message: String,
        log_level: LogLevel,
    },
}

#[cfg(test)]
impl FetchEvent {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchEvent::Started { request_id }
            | FetchEvent::Succeeded { request_id, .. }
            | FetchEvent::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The stats loader.
    Loader,
    /// User interaction with the dashboard.
    Ui,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    /// A completed load that was superseded by a newer one.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn ui(msg: String, event_type: EventType) -> Self {
        Self::new(Source::Ui, msg, event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        logging::is_enabled(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_accessor() {
        let event = FetchEvent::Failed {
            request_id: 4,
            message: "x".to_string(),
            log_level: LogLevel::Warn,
        };
        assert_eq!(event.request_id(), 4);
        assert_eq!(FetchEvent::Started { request_id: 9 }.request_id(), 9);
    }

    #[test]
    fn test_warn_and_success_events_display() {
        let warn = Event::loader_with_level("down".to_string(), EventType::Error, LogLevel::Warn);
        assert!(warn.should_display());
        let ok = Event::loader_with_level("ok".to_string(), EventType::Success, LogLevel::Debug);
        assert!(ok.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::ui("Refresh requested".to_string(), EventType::Refresh);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("] Refresh requested"));
    }
}
