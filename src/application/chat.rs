//! One open conversation: history, sending, and live refresh.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;

use crate::domain::entities::{Message, MessagesPage};
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::{CursorPager, PollingScheduler, best_effort, surfaced};

const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct SendMessageBody<'a> {
    content: &'a str,
}

/// Message history and live refresh for one conversation.
pub struct ChatThread {
    client: Arc<ApiClient>,
    conversation_id: i64,
    messages: Mutex<Vec<Message>>,
    pager: CursorPager,
}

impl ChatThread {
    /// Creates a thread bound to one conversation.
    #[must_use]
    pub fn new(client: Arc<ApiClient>, conversation_id: i64) -> Self {
        Self {
            client,
            conversation_id,
            messages: Mutex::new(Vec::new()),
            pager: CursorPager::new(),
        }
    }

    /// Returns the conversation this thread is bound to.
    #[must_use]
    pub fn conversation_id(&self) -> i64 {
        self.conversation_id
    }

    fn history_request(&self) -> ApiRequest {
        ApiRequest::new(Endpoint::ConversationMessages {
            id: self.conversation_id,
        })
    }

    /// Loads the visible window of the conversation, replacing the
    /// snapshot. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn load(&self) -> Result<Vec<Message>, ApiError> {
        let page: MessagesPage = surfaced(
            "message history",
            self.client.request(self.history_request()),
        )
        .await?;

        self.pager.set_has_more(page.has_more);
        *self.messages.lock() = page.messages.clone();

        Ok(page.messages)
    }

    /// Sends a message, appending it to the snapshot on success. Blank
    /// input is dropped without a request. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn send(&self, content: &str) -> Result<Option<Message>, ApiError> {
        let text = content.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let body = SendMessageBody { content: text };
        let request = ApiRequest::with_json(
            Endpoint::SendMessage {
                conversation_id: self.conversation_id,
            },
            &body,
        )?;

        let message: Message = surfaced("send message", self.client.request(request)).await?;
        self.messages.lock().push(message.clone());

        Ok(Some(message))
    }

    /// Marks the conversation read. Best-effort.
    pub async fn mark_read(&self) {
        best_effort(
            "mark read",
            self.client
                .request_void(ApiRequest::new(Endpoint::MarkConversationRead {
                    id: self.conversation_id,
                })),
        )
        .await;
    }

    /// Loads history before the oldest known message, prepending results so
    /// chronological order is preserved. Best-effort; a no-op while a load
    /// is in flight or when no earlier history exists.
    pub async fn load_earlier(&self) {
        let Some(before) = self.messages.lock().first().map(|m| m.message_id) else {
            return;
        };

        if !self.pager.try_begin() {
            return;
        }

        let request = self.history_request().query("before", before);

        match best_effort("earlier messages", self.client.request::<MessagesPage>(request)).await {
            Some(page) => {
                self.pager.complete(page.has_more);
                let mut messages = self.messages.lock();
                let mut combined = page.messages;
                combined.append(&mut messages);
                *messages = combined;
            }
            None => self.pager.abandon(),
        }
    }

    /// Starts the live refresh loop for this conversation. Restarting
    /// replaces any loop already running for the same conversation.
    pub fn start_polling(self: &Arc<Self>, scheduler: &PollingScheduler) {
        let thread = Arc::clone(self);

        scheduler.start(
            Self::poll_key(self.conversation_id),
            REFRESH_INTERVAL,
            move || {
                let thread = Arc::clone(&thread);
                Box::pin(async move {
                    thread.refresh_latest().await;
                })
            },
        );
    }

    /// Stops the live refresh loop. Safe when not polling.
    pub fn stop_polling(&self, scheduler: &PollingScheduler) {
        scheduler.stop(&Self::poll_key(self.conversation_id));
    }

    fn poll_key(conversation_id: i64) -> String {
        format!("chat-{conversation_id}")
    }

    /// Refetches the window and replaces the snapshot only when the newest
    /// message changed. Best-effort.
    async fn refresh_latest(&self) {
        let Some(page) = best_effort(
            "chat refresh",
            self.client.request::<MessagesPage>(self.history_request()),
        )
        .await
        else {
            return;
        };

        let mut messages = self.messages.lock();
        let newest = messages.last().map(|m| m.message_id);
        if page.messages.last().map(|m| m.message_id) != newest {
            *messages = page.messages;
        }
    }

    /// Returns a snapshot of the loaded messages.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

    /// Returns whether earlier history is believed to exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthToken;
    use crate::domain::ports::mocks::MemoryCredentialStore;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message_json(id: i64, content: &str) -> serde_json::Value {
        serde_json::json!({
            "message_id": id,
            "conversation_id": 4,
            "sender_id": 1,
            "content": content,
            "is_read": false,
            "created_at": format!("2025-11-02T18:{:02}:00.000Z", id)
        })
    }

    fn page_json(ids: &[i64], has_more: bool) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| message_json(*id, &format!("msg-{id}")))
            .collect();
        serde_json::json!({"messages": messages, "hasMore": has_more})
    }

    fn make_thread(server: &MockServer) -> ChatThread {
        let store = Arc::new(MemoryCredentialStore::with_token(AuthToken::new_unchecked(
            "session-token",
        )));
        let client = Arc::new(ApiClient::new(server.uri(), store).unwrap());
        ChatThread::new(client, 4)
    }

    #[tokio::test]
    async fn test_load_replaces_snapshot_and_records_has_more() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[10, 11], true)))
            .mount(&server)
            .await;

        let thread = make_thread(&server);
        let messages = thread.load().await.unwrap();

        assert_eq!(messages.len(), 2);
        assert!(thread.has_more());
    }

    #[tokio::test]
    async fn test_send_appends_on_success_and_skips_blank_input() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages/conversations/4"))
            .and(body_string_contains("\"content\":\"hey\""))
            .respond_with(ResponseTemplate::new(201).set_body_json(message_json(12, "hey")))
            .expect(1)
            .mount(&server)
            .await;

        let thread = make_thread(&server);

        assert!(thread.send("   ").await.unwrap().is_none());

        let sent = thread.send("  hey ").await.unwrap().unwrap();
        assert_eq!(sent.message_id, 12);
        assert_eq!(thread.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_load_earlier_prepends_and_uses_before_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .and(query_param("before", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[8, 9], false)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[10, 11], true)))
            .mount(&server)
            .await;

        let thread = make_thread(&server);
        thread.load().await.unwrap();
        thread.load_earlier().await;

        let ids: Vec<i64> = thread.messages().iter().map(|m| m.message_id).collect();
        assert_eq!(ids, [8, 9, 10, 11]);
        assert!(!thread.has_more());

        // Exhausted: no further request is issued.
        thread.load_earlier().await;
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_load_earlier_failure_keeps_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .and(query_param("before", "10"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[10], true)))
            .mount(&server)
            .await;

        let thread = make_thread(&server);
        thread.load().await.unwrap();
        thread.load_earlier().await;

        assert_eq!(thread.messages().len(), 1);
        assert!(thread.has_more());
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot_only_on_change() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[10, 11], false)))
            .mount(&server)
            .await;

        let thread = make_thread(&server);
        thread.load().await.unwrap();

        // Same newest id: snapshot object is left alone.
        thread.refresh_latest().await;
        assert_eq!(thread.messages().len(), 2);

        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/messages/conversations/4"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_json(&[10, 11, 12], false)),
            )
            .mount(&server)
            .await;

        thread.refresh_latest().await;
        assert_eq!(thread.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_mark_read_failure_is_silent() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/messages/conversations/4/read"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let thread = make_thread(&server);
        thread.mark_read().await;
    }
}
