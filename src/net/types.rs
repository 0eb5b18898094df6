//! Wire types for the music-data API.
//!
//! Canonical field names are the snake_case spellings the API emits.
//! Earlier payload revisions used camelCase for some fields; those
//! spellings are accepted as aliases so older responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Artwork in one of the sizes the API provides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

/// Links out to the upstream streaming service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

/// The current account's identity and display data.
///
/// Fetched fresh on every successful (re)authentication and held only in
/// memory; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default, alias = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default, alias = "externalURLs", alias = "externalUrls")]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "albumType")]
    pub album_type: Option<String>,
    #[serde(default, alias = "totalTracks")]
    pub total_tracks: Option<u32>,
    #[serde(default, alias = "releaseDate")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default, alias = "externalURLs", alias = "externalUrls")]
    pub external_urls: ExternalUrls,
    /// Canonically an array. Older payloads put a `{href, total}` summary
    /// object here; anything that is not an array decodes as no listing.
    #[serde(default, deserialize_with = "array_or_default")]
    pub tracks: Vec<Track>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default, alias = "durationMs")]
    pub duration_ms: u32,
    #[serde(default, alias = "trackNumber")]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default, alias = "previewURL", alias = "previewUrl")]
    pub preview_url: Option<String>,
    #[serde(default, alias = "isPlayable")]
    pub is_playable: Option<bool>,
    #[serde(default, alias = "externalURLs", alias = "externalUrls")]
    pub external_urls: ExternalUrls,
}

/// Playlist owner display data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default, alias = "displayName")]
    pub display_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default, alias = "externalURLs", alias = "externalUrls")]
    pub external_urls: ExternalUrls,
}

/// One bucket per entity kind, as returned by `/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

/// Everything the artist page renders, in one payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistPage {
    #[serde(default, alias = "artistProfile")]
    pub artist_profile: Option<Artist>,
    #[serde(default, alias = "topTracks")]
    pub top_tracks: Vec<Track>,
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// Decode a JSON array, treating any other shape as the default.
fn array_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
