//! Artist directory browsing.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::entities::{Artist, CloutResponse, PaginatedArtists, SingleArtistResponse};
use crate::domain::errors::ApiError;
use crate::infrastructure::api::{ApiClient, ApiRequest, Endpoint};

use super::services::{OffsetPager, best_effort, surfaced};

/// Incrementally loaded artist directory with optional name search.
pub struct ArtistDirectory {
    client: Arc<ApiClient>,
    pager: OffsetPager,
    artists: Mutex<Vec<Artist>>,
    search: Mutex<Option<String>>,
}

impl ArtistDirectory {
    /// Creates a directory paging `page_size` artists at a time.
    #[must_use]
    pub fn new(client: Arc<ApiClient>, page_size: usize) -> Self {
        Self {
            client,
            pager: OffsetPager::new(page_size),
            artists: Mutex::new(Vec::new()),
            search: Mutex::new(None),
        }
    }

    fn page_request(&self, page: u32) -> ApiRequest {
        let mut request = ApiRequest::new(Endpoint::Artists)
            .query("page", page)
            .query("limit", self.pager.page_size());

        let search = self.search.lock().clone();
        if let Some(search) = search {
            request = request.query("search", search);
        }

        request
    }

    /// Loads the first page, replacing current results. An optional search
    /// term filters by name and applies to subsequent pages too. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display; current results are
    /// kept unchanged.
    pub async fn load_first_page(&self, search: Option<&str>) -> Result<Vec<Artist>, ApiError> {
        *self.search.lock() = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);

        let page = self.pager.begin_first();
        let request = self.page_request(page);

        match surfaced("artist list", self.client.request::<PaginatedArtists>(request)).await {
            Ok(response) => {
                self.pager
                    .complete(page, response.artists.len(), response.has_more);
                *self.artists.lock() = response.artists.clone();
                Ok(response.artists)
            }
            Err(error) => {
                self.pager.abandon();
                Err(error)
            }
        }
    }

    /// Loads the next page and appends its results. Best-effort; a no-op
    /// while a load is in flight or when the directory is exhausted.
    pub async fn load_more(&self) {
        let Some(page) = self.pager.try_begin_next() else {
            return;
        };

        let request = self.page_request(page);

        match best_effort("artist page", self.client.request::<PaginatedArtists>(request)).await {
            Some(response) => {
                self.pager
                    .complete(page, response.artists.len(), response.has_more);
                self.artists.lock().extend(response.artists);
            }
            None => self.pager.abandon(),
        }
    }

    /// Fetches one artist with their discography. Surfaced.
    ///
    /// # Errors
    ///
    /// Returns the API error for the caller to display.
    pub async fn artist(&self, id: i64) -> Result<Artist, ApiError> {
        let response: SingleArtistResponse = surfaced(
            "artist detail",
            self.client.request(ApiRequest::new(Endpoint::Artist { id })),
        )
        .await?;

        Ok(response.artist)
    }

    /// Gives clout to an artist. Best-effort toggle; the caller keeps its
    /// prior count on failure.
    pub async fn give_clout(&self, artist_id: i64) -> Option<CloutResponse> {
        best_effort(
            "give clout",
            self.client
                .request(ApiRequest::new(Endpoint::Clout { id: artist_id })),
        )
        .await
    }

    /// Removes clout from an artist. Best-effort toggle.
    pub async fn remove_clout(&self, artist_id: i64) -> Option<CloutResponse> {
        best_effort(
            "remove clout",
            self.client
                .request(ApiRequest::new(Endpoint::RemoveClout { id: artist_id })),
        )
        .await
    }

    /// Returns a snapshot of the loaded artists.
    #[must_use]
    pub fn artists(&self) -> Vec<Artist> {
        self.artists.lock().clone()
    }

    /// Returns whether more pages are believed to exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MemoryCredentialStore;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn artists_json(ids: std::ops::Range<i64>) -> serde_json::Value {
        let artists: Vec<serde_json::Value> = ids
            .map(|id| serde_json::json!({"artist_id": id, "artist_name": format!("artist-{id}")}))
            .collect();
        serde_json::json!({"artists": artists})
    }

    fn make_directory(server: &MockServer, page_size: usize) -> ArtistDirectory {
        let client = Arc::new(
            ApiClient::new(server.uri(), Arc::new(MemoryCredentialStore::new())).unwrap(),
        );
        ArtistDirectory::new(client, page_size)
    }

    #[tokio::test]
    async fn test_full_first_page_enables_load_more() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(0..20)))
            .mount(&server)
            .await;

        let directory = make_directory(&server, 20);
        let artists = directory.load_first_page(None).await.unwrap();

        assert_eq!(artists.len(), 20);
        assert!(directory.has_more());
    }

    #[tokio::test]
    async fn test_short_page_exhausts_directory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(0..7)))
            .mount(&server)
            .await;

        let directory = make_directory(&server, 20);
        directory.load_first_page(None).await.unwrap();

        assert!(!directory.has_more());
        directory.load_more().await;
        assert_eq!(directory.artists().len(), 7);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_more_appends_next_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(0..20)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(20..25)))
            .mount(&server)
            .await;

        let directory = make_directory(&server, 20);
        directory.load_first_page(None).await.unwrap();
        directory.load_more().await;

        let artists = directory.artists();
        assert_eq!(artists.len(), 25);
        assert_eq!(artists[20].artist_id, 20);
        assert!(!directory.has_more());
    }

    #[tokio::test]
    async fn test_concurrent_load_more_issues_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(0..20)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(artists_json(20..40))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let directory = Arc::new(make_directory(&server, 20));
        directory.load_first_page(None).await.unwrap();

        let first = Arc::clone(&directory);
        let second = Arc::clone(&directory);
        tokio::join!(first.load_more(), second.load_more());

        assert_eq!(directory.artists().len(), 40);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_more_is_silent_and_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(0..20)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let directory = make_directory(&server, 20);
        directory.load_first_page(None).await.unwrap();
        directory.load_more().await;

        // Prior state unchanged, guard released for a retry.
        assert_eq!(directory.artists().len(), 20);
        assert!(directory.has_more());
        directory.load_more().await;
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_term_applies_to_following_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("search", "doom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artists_json(0..20)))
            .expect(2)
            .mount(&server)
            .await;

        let directory = make_directory(&server, 20);
        directory.load_first_page(Some("doom")).await.unwrap();
        directory.load_more().await;
    }
}
