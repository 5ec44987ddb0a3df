//! Direct message entities.

use serde::Deserialize;

/// One message inside a conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Server-side message identity.
    pub message_id: i64,
    /// Owning conversation.
    pub conversation_id: i64,
    /// Sending user.
    pub sender_id: i64,
    /// Message text.
    pub content: String,
    /// Whether the recipient has read the message.
    pub is_read: bool,
    /// Creation timestamp in the server's canonical string form.
    pub created_at: String,
    /// Sender username, when the server joins it in.
    #[serde(default)]
    pub sender_username: Option<String>,
}

/// One window of a conversation's history.
///
/// Unlike most payloads this envelope uses camelCase keys.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesPage {
    /// Messages in chronological order.
    pub messages: Vec<Message>,
    /// Whether earlier history exists beyond this window.
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Unread message counter for the badge.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnreadCount {
    /// Number of unread messages across all conversations.
    pub count: i64,
}

/// Response from the check-dm endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDmResponse {
    /// Whether the current user may message the target.
    #[serde(rename = "canDM")]
    pub can_dm: bool,
    /// Existing conversation with the target, if one exists.
    #[serde(default)]
    pub conversation_id: Option<i64>,
    /// Reason messaging is not allowed.
    #[serde(default)]
    pub reason: Option<String>,
}
