//! Artist directory entities.

use serde::Deserialize;

use crate::domain::serde_utils;

/// Artist as returned by the directory endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    /// Server-side artist identity.
    pub artist_id: i64,
    /// Display name.
    pub artist_name: String,
    /// Alternate name.
    #[serde(default)]
    pub aka: Option<String>,
    /// Primary genre.
    #[serde(default)]
    pub genre: Option<String>,
    /// Clout count.
    #[serde(default)]
    pub count: Option<i64>,
    /// Home state.
    #[serde(default)]
    pub state: Option<String>,
    /// Home region.
    #[serde(default)]
    pub region: Option<String>,
    /// Record label.
    #[serde(default)]
    pub label: Option<String>,
    /// Artist image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Discography, present on detail responses.
    #[serde(default)]
    pub albums: Option<Vec<Album>>,
}

/// Album in an artist's discography.
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    /// Server-side album identity.
    pub album_id: i64,
    /// Owning artist, when included.
    #[serde(default)]
    pub artist_id: Option<i64>,
    /// Album title.
    pub album_name: String,
    /// Release year; the backend emits this as either an integer or a string.
    #[serde(default, deserialize_with = "serde_utils::string_or_int::option::deserialize")]
    pub year: Option<String>,
    /// Certification notes.
    #[serde(default)]
    pub certifications: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub album_image_url: Option<String>,
}

/// Response wrapper for a single artist.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleArtistResponse {
    /// The requested artist.
    pub artist: Artist,
}

/// One page of the artist directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedArtists {
    /// Artists on this page.
    pub artists: Vec<Artist>,
    /// Page number echoed by the server.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size echoed by the server.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total artist count, when the server computes it.
    #[serde(default)]
    pub total_count: Option<i64>,
    /// Total page count, when the server computes it.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Explicit flag for more pages; absent on older backend versions.
    #[serde(default)]
    pub has_more: Option<bool>,
}

/// Response from the clout add and remove endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CloutResponse {
    /// Server confirmation message.
    pub message: String,
    /// The affected artist; arrives as an integer or a numeric string.
    #[serde(with = "serde_utils::int_or_string")]
    pub artist_id: i64,
    /// Clout count after the operation.
    pub new_clout_count: i64,
}

/// A user's curated profile list of artists.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileList {
    /// Artists on the list, in list order.
    pub list: Vec<Artist>,
}

/// Response from the artist image upload endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistImageUpload {
    /// URL of the stored image.
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_artists_has_more_is_optional() {
        let json = r#"{"artists": [{"artist_id": 1, "artist_name": "MF GLOOM"}]}"#;
        let page: PaginatedArtists = serde_json::from_str(json).unwrap();
        assert_eq!(page.artists.len(), 1);
        assert!(page.has_more.is_none());
    }

    #[test]
    fn test_clout_response_accepts_string_artist_id() {
        let json = r#"{"message": "clout added", "artist_id": "42", "new_clout_count": 9}"#;
        let response: CloutResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.artist_id, 42);
        assert_eq!(response.new_clout_count, 9);
    }

    #[test]
    fn test_album_year_accepts_integer() {
        let json = r#"{"album_id": 3, "album_name": "Northside EP", "year": 2019}"#;
        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.year.as_deref(), Some("2019"));
    }
}
