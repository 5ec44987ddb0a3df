//! Waitlist entities.

use serde::Deserialize;

/// One entry on the signup waitlist.
#[derive(Debug, Clone, Deserialize)]
pub struct WaitlistEntry {
    /// Server-side entry identity.
    #[serde(default)]
    pub waitlist_id: Option<i64>,
    /// Signup email.
    pub email: String,
    /// Signup name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Entry status (pending, approved, rejected).
    pub status: String,
    /// Invite code issued on approval.
    #[serde(default)]
    pub invite_code: Option<String>,
    /// Signup timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response from the waitlist join endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WaitlistJoinResponse {
    /// Server confirmation message.
    pub message: String,
    /// Email the entry was recorded under.
    pub email: String,
}
