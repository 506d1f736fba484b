//! Dashboard data loading
//!
//! Each load runs on its own tokio task and reports back over a channel. Loads
//! are never cancelled; request ids let the reducer drop superseded results.

use crate::api::StatsApi;
use crate::error_classifier::ErrorClassifier;
use crate::events::FetchEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct StatsLoader {
    api: Arc<dyn StatsApi>,
    sender: mpsc::Sender<FetchEvent>,
    classifier: ErrorClassifier,
    last_request_id: u64,
}

impl StatsLoader {
    pub fn new(api: Arc<dyn StatsApi>, sender: mpsc::Sender<FetchEvent>) -> Self {
        Self {
            api,
            sender,
            classifier: ErrorClassifier::new(),
            last_request_id: 0,
        }
    }

    /// Id of the most recently issued load, or 0 if none was issued.
    #[cfg(test)]
    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    fn next_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// Starts a load in the background.
    ///
    /// Returns the `Started` event, which the caller applies right away; the
    /// completion arrives later on the channel.
    pub fn load(&mut self) -> FetchEvent {
        let request_id = self.next_request_id();
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        let classifier = self.classifier.clone();

        tokio::spawn(async move {
            let outcome = fetch(api.as_ref(), &classifier, request_id).await;
            if sender.send(outcome).await.is_err() {
                log::debug!("Dashboard closed before load {} completed", request_id);
            }
        });

        FetchEvent::Started { request_id }
    }

    /// Runs a load to completion on the current task.
    ///
    /// Returns the `Started` event followed by the completion.
    pub async fn load_and_wait(&mut self) -> (FetchEvent, FetchEvent) {
        let request_id = self.next_request_id();
        let outcome = fetch(self.api.as_ref(), &self.classifier, request_id).await;
        (FetchEvent::Started { request_id }, outcome)
    }
}

async fn fetch(api: &dyn StatsApi, classifier: &ErrorClassifier, request_id: u64) -> FetchEvent {
    match api.dashboard_stats().await {
        Ok(payload) => FetchEvent::Succeeded {
            request_id,
            payload,
        },
        Err(e) => {
            log::debug!("Load {} failed ({}): {}", request_id, e.kind(), e);
            FetchEvent::Failed {
                request_id,
                message: e.user_message(),
                log_level: classifier.classify_fetch_error(&e),
            }
        }
    }
}
