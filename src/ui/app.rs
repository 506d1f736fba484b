//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::poll_interval;
use crate::events::{Event as ActivityEvent, EventType, FetchEvent};
use crate::loader::StatsLoader;
use crate::ui::dashboard::{DashboardState, Tab, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What the UI loop should do after a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// The dashboard being displayed.
    state: DashboardState,

    /// Issues dashboard loads.
    loader: StatsLoader,

    /// Receives load completions from loader tasks.
    event_receiver: mpsc::Receiver<FetchEvent>,
}

impl App {
    /// Mounts the dashboard and starts the initial load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        mut loader: StatsLoader,
        event_receiver: mpsc::Receiver<FetchEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let mut state = DashboardState::new(Instant::now(), ui_config);
        state.add_event(loader.load());
        Self {
            state,
            loader,
            event_receiver,
        }
    }

    /// Starts a new load, superseding any load still in flight.
    fn refresh(&mut self) {
        self.state.add_to_activity_log(ActivityEvent::ui(
            "Refresh requested".to_string(),
            EventType::Refresh,
        ));
        self.state.add_event(self.loader.load());
    }

    /// Queues completions that arrived since the last frame.
    fn drain_completions(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
    }

    /// Applies a key press to the application.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.refresh(),
            KeyCode::Tab | KeyCode::Right => self.state.select_next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.state.select_previous_tab(),
            KeyCode::Char('1') => self.state.select_tab(Tab::Signals),
            KeyCode::Char('2') => self.state.select_tab(Tab::Wallets),
            KeyCode::Char('3') => self.state.select_tab(Tab::Analytics),
            _ => {}
        }
        KeyOutcome::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // UI event loop
    loop {
        app.drain_completions();
        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key.code) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}
