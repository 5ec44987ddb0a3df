//! Conversation list entities.

use serde::Deserialize;

use crate::domain::serde_utils;

/// One conversation in the inbox, joined with its latest message preview.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    /// Server-side conversation identity.
    pub conversation_id: i64,
    /// First participant.
    pub user_one: i64,
    /// Second participant.
    pub user_two: i64,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// The other participant's username.
    #[serde(default)]
    pub other_username: Option<String>,
    /// The other participant's identity.
    #[serde(default)]
    pub other_user_id: Option<i64>,
    /// The other participant's profile image URL.
    #[serde(default)]
    pub other_profile_image: Option<String>,
    /// Preview of the latest message.
    #[serde(default)]
    pub last_message: Option<String>,
    /// Timestamp of the latest message.
    #[serde(default)]
    pub last_message_at: Option<String>,
    /// Sender of the latest message.
    #[serde(default)]
    pub last_sender_id: Option<i64>,
    /// Unread messages in this conversation. The backend's COUNT(*) comes
    /// back as a bigint, which its JSON layer serializes as a string.
    #[serde(default, with = "serde_utils::int_or_string::option")]
    pub unread_count: Option<i64>,
}
