//! Upcoming release entities.

use serde::Deserialize;

/// An upcoming music release on the discover screen.
#[derive(Debug, Clone, Deserialize)]
pub struct UpcomingRelease {
    /// Catalog identity.
    pub id: String,
    /// Release title.
    pub title: String,
    /// Credited artist.
    #[serde(default)]
    pub artist: Option<String>,
    /// Release date string.
    #[serde(default)]
    pub date: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Originating catalog tag.
    #[serde(default)]
    pub source: Option<String>,
}
