//! Conversation inbox: list, unread badge, and background refresh.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::domain::entities::{Conversation, UnreadCount};
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::{PollStep, PollingScheduler, best_effort, surfaced};

const POLL_KEY: &str = "inbox";
const UNREAD_REFRESH_DELAY: Duration = Duration::from_secs(10);
const RELOAD_DELAY: Duration = Duration::from_secs(5);

/// Conversation list with its unread counter.
pub struct ConversationInbox {
    client: Arc<ApiClient>,
    conversations: Mutex<Vec<Conversation>>,
    unread_count: AtomicI64,
}

impl ConversationInbox {
    /// Creates an empty inbox.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            conversations: Mutex::new(Vec::new()),
            unread_count: AtomicI64::new(0),
        }
    }

    /// Loads the conversation list, replacing the snapshot. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display; the snapshot is
    /// kept unchanged.
    pub async fn load(&self) -> Result<Vec<Conversation>, ApiError> {
        let conversations: Vec<Conversation> = surfaced(
            "conversation list",
            self.client.request(ApiRequest::new(Endpoint::Conversations)),
        )
        .await?;

        *self.conversations.lock() = conversations.clone();
        Ok(conversations)
    }

    /// Refreshes the unread badge counter. Best-effort.
    pub async fn refresh_unread_count(&self) {
        if let Some(response) = best_effort(
            "unread count",
            self.client
                .request::<UnreadCount>(ApiRequest::new(Endpoint::UnreadCount)),
        )
        .await
        {
            self.unread_count.store(response.count, Ordering::SeqCst);
        }
    }

    async fn reload_conversations(&self) {
        if let Some(conversations) = best_effort(
            "conversation refresh",
            self.client
                .request::<Vec<Conversation>>(ApiRequest::new(Endpoint::Conversations)),
        )
        .await
        {
            *self.conversations.lock() = conversations;
        }
    }

    /// Starts the background refresh: the unread counter on a short beat
    /// and the full conversation list on a longer one, composed as steps of
    /// one loop so the total request rate stays bounded. Restarting
    /// replaces any loop already running.
    pub fn start_polling(self: &Arc<Self>, scheduler: &PollingScheduler) {
        let unread_inbox = Arc::clone(self);
        let reload_inbox = Arc::clone(self);

        scheduler.start_steps(
            POLL_KEY,
            vec![
                PollStep::new(UNREAD_REFRESH_DELAY, move || {
                    let inbox = Arc::clone(&unread_inbox);
                    Box::pin(async move {
                        inbox.refresh_unread_count().await;
                    })
                }),
                PollStep::new(RELOAD_DELAY, move || {
                    let inbox = Arc::clone(&reload_inbox);
                    Box::pin(async move {
                        inbox.reload_conversations().await;
                    })
                }),
            ],
        );
    }

    /// Stops the background refresh. Safe when not polling.
    pub fn stop_polling(&self, scheduler: &PollingScheduler) {
        scheduler.stop(POLL_KEY);
    }

    /// Returns a snapshot of the loaded conversations.
    #[must_use]
    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations.lock().clone()
    }

    /// Returns the last known unread message count.
    #[must_use]
    pub fn unread_count(&self) -> i64 {
        self.unread_count.load(Ordering::SeqCst)
    }
}
