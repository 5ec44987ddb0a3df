//! Community feed entities.

use serde::Deserialize;

/// Kind of a feed post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    /// Plain text post.
    Text,
    /// Image post.
    Image,
    /// Video post.
    Video,
}

impl PostType {
    /// Returns the wire name of the post kind, used in delete paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// One post on the community feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPost {
    /// Server-side post identity.
    pub id: i64,
    /// Posting user.
    pub user_id: i64,
    /// Text content, for text posts.
    #[serde(default)]
    pub content: Option<String>,
    /// Image URL, for image posts.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Caption, for media posts.
    #[serde(default)]
    pub caption: Option<String>,
    /// Video URL, for video posts.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Video kind tag.
    #[serde(default)]
    pub video_type: Option<String>,
    /// Kind of post.
    pub post_type: PostType,
    /// Creation timestamp in the server's canonical string form.
    pub created_at: String,
    /// Posting username.
    #[serde(default)]
    pub username: Option<String>,
}
