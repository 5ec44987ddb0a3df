//! Waitlist signup.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::WaitlistJoinResponse;
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::surfaced;

/// Text shown when the email is already on the waitlist (HTTP 409),
/// overriding whatever message the server sent.
pub const ALREADY_ON_WAITLIST: &str = "This email is already on the waitlist.";

#[derive(Serialize)]
struct WaitlistJoinBody<'a> {
    email: &'a str,
    full_name: &'a str,
}

/// Waitlist signup flow.
pub struct WaitlistSignup {
    client: Arc<ApiClient>,
}

impl WaitlistSignup {
    /// Creates a signup flow.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Joins the waitlist. The email is trimmed and lowercased, the name
    /// trimmed. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display; see
    /// [`join_error_message`] for the presentation mapping.
    pub async fn join(
        &self,
        email: &str,
        full_name: &str,
    ) -> Result<WaitlistJoinResponse, ApiError> {
        let email = email.trim().to_lowercase();
        let body = WaitlistJoinBody {
            email: &email,
            full_name: full_name.trim(),
        };

        let request = ApiRequest::with_json(Endpoint::WaitlistJoin, &body)?;
        surfaced("waitlist join", self.client.request(request)).await
    }
}

/// Maps a join failure to the text shown to the user: a 409 becomes the
/// fixed already-on-waitlist string regardless of the server's message,
/// other HTTP errors show the server message alone, and everything else
/// falls back to the generic descriptions.
#[must_use]
pub fn join_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { status: 409, .. } => ALREADY_ON_WAITLIST.to_string(),
        ApiError::Http { message, .. } => message.clone(),
        other => other.user_message(),
    }
}
