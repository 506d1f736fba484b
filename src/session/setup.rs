//! Session setup and initialization

use crate::api::{ApiClient, StatsApi};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::FetchEvent;
use crate::loader::StatsLoader;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and snapshot modes
pub struct SessionData {
    /// Issues dashboard loads
    pub loader: StatsLoader,
    /// Receives load completions
    pub event_receiver: mpsc::Receiver<FetchEvent>,
    /// Backend the session talks to (for display purposes)
    pub base_url: String,
}

/// Sets up a session against the dashboard backend.
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session() -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new()?;
    let base_url = client.base_url().to_string();
    Ok(session_with_api(Arc::new(client), base_url))
}

/// Wires a loader and its completion channel around an API implementation.
pub fn session_with_api(api: Arc<dyn StatsApi>, base_url: String) -> SessionData {
    let (sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    SessionData {
        loader: StatsLoader::new(api, sender),
        event_receiver,
        base_url,
    }
}
