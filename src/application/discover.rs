//! Merged discover video feed and artist search.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::entities::{
    Artist, DiscoverVideo, MusicVideo, ProfileList, UpcomingRelease, VideoPost,
};
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::{best_effort, merge_by_recency, surfaced};

const SEARCH_PAGE_SIZE: usize = 20;
const MAX_LIST_SIZE: usize = 20;

/// Discover screen flows: the merged video feed, upcoming releases, artist
/// search, and profile-list membership.
pub struct DiscoverFeed {
    client: Arc<ApiClient>,
    videos: Mutex<Vec<DiscoverVideo>>,
    profile_list_ids: Mutex<HashSet<i64>>,
}

impl DiscoverFeed {
    /// Creates an empty discover feed.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            videos: Mutex::new(Vec::new()),
            profile_list_ids: Mutex::new(HashSet::new()),
        }
    }

    /// Fetches both video sources concurrently and merges them into one
    /// list, newest first. Either source may fail and contributes nothing;
    /// an empty result after both return is a no-data condition, not an
    /// error.
    pub async fn load_videos(&self) -> Vec<DiscoverVideo> {
        let combined = best_effort(
            "combined video feed",
            self.client
                .request::<Vec<VideoPost>>(ApiRequest::new(Endpoint::CombinedVideoFeed)),
        );
        let music = best_effort(
            "music videos",
            self.client
                .request::<Vec<MusicVideo>>(ApiRequest::new(Endpoint::MusicVideos)),
        );

        let (combined, music) = tokio::join!(combined, music);

        let from_combined: Vec<DiscoverVideo> = combined
            .unwrap_or_default()
            .into_iter()
            .map(DiscoverVideo::from_video_post)
            .collect();
        let from_music: Vec<DiscoverVideo> = music
            .unwrap_or_default()
            .into_iter()
            .map(|video| DiscoverVideo::from_music_video(video, "music_video"))
            .collect();

        let merged = merge_by_recency(vec![from_combined, from_music]);
        *self.videos.lock() = merged.clone();

        merged
    }

    /// Loads upcoming releases. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn load_upcoming_releases(&self) -> Result<Vec<UpcomingRelease>, ApiError> {
        surfaced(
            "upcoming releases",
            self.client
                .request(ApiRequest::new(Endpoint::UpcomingReleases)),
        )
        .await
    }

    /// Searches artists by name. Best-effort: failures and blank queries
    /// both yield an empty result.
    pub async fn search_artists(&self, query: &str) -> Vec<Artist> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let request = ApiRequest::new(Endpoint::Artists)
            .query("search", query)
            .query("page", 1)
            .query("limit", SEARCH_PAGE_SIZE);

        best_effort(
            "artist search",
            self.client
                .request::<crate::domain::entities::PaginatedArtists>(request),
        )
        .await
        .map(|response| response.artists)
        .unwrap_or_default()
    }

    /// Loads the membership set for the profile list. Best-effort; the user
    /// may not be logged in.
    pub async fn load_profile_list_ids(&self) {
        if let Some(response) = best_effort(
            "profile list ids",
            self.client
                .request::<ProfileList>(ApiRequest::new(Endpoint::ProfileList)),
        )
        .await
        {
            *self.profile_list_ids.lock() =
                response.list.iter().map(|artist| artist.artist_id).collect();
        }
    }

    /// Adds an artist to the profile list. Best-effort; a no-op when the
    /// list is full or the artist is already on it.
    pub async fn add_to_profile_list(&self, artist_id: i64) {
        {
            let ids = self.profile_list_ids.lock();
            if ids.len() >= MAX_LIST_SIZE || ids.contains(&artist_id) {
                return;
            }
        }

        if best_effort(
            "add to profile list",
            self.client
                .request_void(ApiRequest::new(Endpoint::AddToProfileList { artist_id })),
        )
        .await
        .is_some()
        {
            self.profile_list_ids.lock().insert(artist_id);
        }
    }

    /// Returns whether the profile list is at capacity.
    #[must_use]
    pub fn is_list_full(&self) -> bool {
        self.profile_list_ids.lock().len() >= MAX_LIST_SIZE
    }

    /// Returns whether the artist is on the profile list.
    #[must_use]
    pub fn is_on_profile_list(&self, artist_id: i64) -> bool {
        self.profile_list_ids.lock().contains(&artist_id)
    }

    /// Returns a snapshot of the merged video list.
    #[must_use]
    pub fn videos(&self) -> Vec<DiscoverVideo> {
        self.videos.lock().clone()
    }
}
