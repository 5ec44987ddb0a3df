//! Profile list, social graph, and image uploads.

use std::sync::Arc;

use crate::domain::entities::{
    Artist, ArtistImageUpload, FollowUser, ProfileImageUpload, ProfileList,
};
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint, MultipartForm};

use super::services::{best_effort, surfaced};

/// Profile flows for the authenticated user.
pub struct ProfileService {
    client: Arc<ApiClient>,
}

impl ProfileService {
    /// Creates a profile service.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Loads the user's curated artist list. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn profile_list(&self) -> Result<Vec<Artist>, ApiError> {
        let response: ProfileList = surfaced(
            "profile list",
            self.client.request(ApiRequest::new(Endpoint::ProfileList)),
        )
        .await?;

        Ok(response.list)
    }

    /// Loads another user's curated artist list. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn user_profile_list(&self, user_id: i64) -> Result<Vec<Artist>, ApiError> {
        let response: ProfileList = surfaced(
            "user profile list",
            self.client
                .request(ApiRequest::new(Endpoint::UserProfileList { user_id })),
        )
        .await?;

        Ok(response.list)
    }

    /// Removes an artist from the profile list. Best-effort toggle;
    /// returns whether the removal went through.
    pub async fn remove_from_profile_list(&self, artist_id: i64) -> bool {
        best_effort(
            "remove from profile list",
            self.client
                .request_void(ApiRequest::new(Endpoint::RemoveFromProfileList { artist_id })),
        )
        .await
        .is_some()
    }

    /// Follows a user. Best-effort toggle; returns whether it went through.
    pub async fn follow(&self, user_id: i64) -> bool {
        best_effort(
            "follow",
            self.client
                .request_void(ApiRequest::new(Endpoint::Follow { user_id })),
        )
        .await
        .is_some()
    }

    /// Unfollows a user. Best-effort toggle; returns whether it went
    /// through.
    pub async fn unfollow(&self, user_id: i64) -> bool {
        best_effort(
            "unfollow",
            self.client
                .request_void(ApiRequest::new(Endpoint::Unfollow { user_id })),
        )
        .await
        .is_some()
    }

    /// Loads a user's followers. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn followers(&self, user_id: i64) -> Result<Vec<FollowUser>, ApiError> {
        surfaced(
            "followers",
            self.client
                .request(ApiRequest::new(Endpoint::Followers { user_id })),
        )
        .await
    }

    /// Loads the users a user follows. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn following(&self, user_id: i64) -> Result<Vec<FollowUser>, ApiError> {
        surfaced(
            "following",
            self.client
                .request(ApiRequest::new(Endpoint::Following { user_id })),
        )
        .await
    }

    /// Uploads a profile image as a single JPEG file field. Surfaced;
    /// returns the stored image URL.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn upload_profile_image(&self, data: &[u8]) -> Result<String, ApiError> {
        let mut form = MultipartForm::new();
        form.add_file("image", "profile.jpg", "image/jpeg", data);

        let response: ProfileImageUpload = surfaced(
            "profile image upload",
            self.client.upload(Endpoint::UploadProfileImage, form),
        )
        .await?;

        Ok(response.profile_image)
    }

    /// Uploads an artist image as a single file field. Surfaced; returns
    /// the stored image URL.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn upload_artist_image(
        &self,
        file_name: &str,
        mime_type: &str,
        data: &[u8],
    ) -> Result<String, ApiError> {
        let mut form = MultipartForm::new();
        form.add_file("image", file_name, mime_type, data);

        let response: ArtistImageUpload = surfaced(
            "artist image upload",
            self.client.upload(Endpoint::UploadArtistImage, form),
        )
        .await?;

        Ok(response.image_url)
    }
}
