//! Community feed: browsing, posting, and deletion.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::domain::entities::{FeedPost, PostType};
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::surfaced;

#[derive(Serialize)]
struct TextPostBody<'a> {
    content: &'a str,
}

/// The community feed wall.
pub struct FeedWall {
    client: Arc<ApiClient>,
    posts: Mutex<Vec<FeedPost>>,
}

impl FeedWall {
    /// Creates an empty feed.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            posts: Mutex::new(Vec::new()),
        }
    }

    /// Loads the feed, replacing the snapshot. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn load(&self) -> Result<Vec<FeedPost>, ApiError> {
        let posts: Vec<FeedPost> = surfaced(
            "feed",
            self.client.request(ApiRequest::new(Endpoint::Feed)),
        )
        .await?;

        *self.posts.lock() = posts.clone();
        Ok(posts)
    }

    /// Creates a text post, then reloads the feed so the new post appears
    /// with its server-assigned fields. Blank input is dropped without a
    /// request. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error from either the creation or the reload.
    pub async fn create_text_post(&self, content: &str) -> Result<bool, ApiError> {
        let text = content.trim();
        if text.is_empty() {
            return Ok(false);
        }

        let body = TextPostBody { content: text };
        let request = ApiRequest::with_json(Endpoint::FeedText, &body)?;
        let _: FeedPost = surfaced("create post", self.client.request(request)).await?;

        self.load().await?;
        Ok(true)
    }

    /// Deletes a post and drops it from the snapshot. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn delete_post(&self, kind: PostType, id: i64) -> Result<(), ApiError> {
        surfaced(
            "delete post",
            self.client.request_void(ApiRequest::new(Endpoint::DeleteFeedPost {
                kind: kind.as_str().to_string(),
                id,
            })),
        )
        .await?;

        self.posts.lock().retain(|post| post.id != id);
        Ok(())
    }

    /// Returns a snapshot of the loaded posts.
    #[must_use]
    pub fn posts(&self) -> Vec<FeedPost> {
        self.posts.lock().clone()
    }
}
