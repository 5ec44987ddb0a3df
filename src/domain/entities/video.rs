//! Video feed entities and their merged normalization.

use serde::Deserialize;

/// Video post from the combined feed endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoPost {
    /// Server-side post identity.
    pub id: i64,
    /// Posting user.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Video URL (a watch URL, a share link, or a bare video id).
    pub video_url: String,
    /// Video kind tag.
    pub video_type: String,
    /// Post caption.
    #[serde(default)]
    pub caption: Option<String>,
    /// Thumbnail URL, when the server stored one.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Creation timestamp in the server's canonical string form.
    pub created_at: String,
    /// Posting username.
    #[serde(default)]
    pub username: Option<String>,
    /// Originating feed tag.
    #[serde(default)]
    pub source: Option<String>,
}

/// Video from the music-videos and youtube-feed endpoints.
///
/// These endpoints proxy an external catalog and use camelCase keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicVideo {
    /// External video identity.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Credited artist.
    #[serde(default)]
    pub artist: Option<String>,
    /// Publication timestamp in the catalog's canonical string form.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Channel name, used when no artist is credited.
    #[serde(default)]
    pub channel_title: Option<String>,
}

/// Unified record for the merged discover video list.
///
/// Ids are source-prefixed so records from different feeds can never collide
/// within one merged result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverVideo {
    /// Merge-unique identity, `{source}-{native id}`.
    pub id: String,
    /// External video identity for playback.
    pub youtube_id: String,
    /// Display title.
    pub title: String,
    /// Thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Credited username or artist.
    pub username: Option<String>,
    /// Canonical timestamp string; merged ordering compares these directly.
    pub created_at: Option<String>,
    /// Originating source tag.
    pub source: String,
}

impl DiscoverVideo {
    /// Normalizes a combined-feed post.
    #[must_use]
    pub fn from_video_post(post: VideoPost) -> Self {
        let youtube_id =
            extract_youtube_id(&post.video_url).unwrap_or_else(|| post.video_url.clone());
        let thumbnail_url = post.thumbnail_url.clone().or_else(|| {
            Some(format!("https://img.youtube.com/vi/{youtube_id}/hqdefault.jpg"))
        });

        Self {
            id: format!("combined-{}", post.id),
            youtube_id,
            title: post.caption.unwrap_or_default(),
            thumbnail_url,
            username: post.username,
            created_at: Some(post.created_at),
            source: post.source.unwrap_or_else(|| "combined".to_string()),
        }
    }

    /// Normalizes a catalog video under the given source tag.
    #[must_use]
    pub fn from_music_video(video: MusicVideo, source: &str) -> Self {
        Self {
            id: format!("{source}-{}", video.video_id),
            youtube_id: video.video_id,
            title: video.title,
            thumbnail_url: video.thumbnail,
            username: video.artist.or(video.channel_title),
            created_at: video.published_at,
            source: source.to_string(),
        }
    }
}

/// Pulls the video id out of a watch URL, a share link, or a bare id.
fn extract_youtube_id(url: &str) -> Option<String> {
    if let Some((_, query)) = url.split_once('?') {
        for pair in query.split('&') {
            if let Some(value) = pair.strip_prefix("v=") {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    if let Some(rest) = url.split("youtu.be/").nth(1) {
        let id = rest.split('?').next().unwrap_or_default();
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    // Not URL-shaped at all: treat it as an already-extracted id.
    if !url.contains('/') && !url.contains('.') {
        return Some(url.to_string());
    }

    None
}
