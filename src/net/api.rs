//! REST client for the music-data API.
//!
//! Client-side (hydrate): real HTTP GETs via `gloo-net` with the bearer
//! token attached. Server-side (SSR): stubs failing with a network error,
//! since the remote API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; no call retries or caches.
//! Callers treat failures as non-fatal: auth flows fall back to the
//! logged-out state and pages render an error affordance.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Album, Artist, ArtistPage, SearchResults, Track, UserProfile};

/// Failures a data-access call can produce.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not complete or the body could not be decoded.
    #[error("network error: {0}")]
    Network(String),
    /// The remote rejected the bearer token.
    #[error("unauthorized")]
    Unauthorized,
    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,
}

/// Map a non-2xx HTTP status to the error taxonomy.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn status_error(status: u16) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        other => ApiError::Network(format!("unexpected status {other}")),
    }
}

/// Issue an authenticated GET against the API and decode the JSON body.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    token: &str,
    query: &[(&str, &str)],
) -> Result<T, ApiError> {
    let mut request = gloo_net::http::Request::get(&crate::config::api_url(path))
        .header("Authorization", &format!("Bearer {token}"));
    if !query.is_empty() {
        request = request.query(query.iter().copied());
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("not available on the server".to_owned())
}

/// Fetch the current account's profile from `/me`.
///
/// Any failure here means "session invalid" to the caller.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/me", token, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(server_stub())
    }
}

/// Search tracks, albums, artists, and playlists via `/search?q=`.
pub async fn search(token: &str, query: &str) -> Result<SearchResults, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/search", token, &[("q", query)]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(server_stub())
    }
}

/// Fetch the composed artist page (profile, top tracks, albums) from
/// `/artists/{id}`.
pub async fn artist_page(token: &str, id: &str) -> Result<ArtistPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/artists/{id}"), token, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(server_stub())
    }
}

/// Fetch the listener's top artists from `/artists/top`.
pub async fn top_artists(token: &str) -> Result<Vec<Artist>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/artists/top", token, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(server_stub())
    }
}

/// Fetch the listener's top tracks from `/tracks/top`.
pub async fn top_tracks(token: &str) -> Result<Vec<Track>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/tracks/top", token, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(server_stub())
    }
}

/// Fetch one album with its track listing from `/albums/{id}`.
pub async fn album(token: &str, id: &str) -> Result<Album, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/albums/{id}"), token, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(server_stub())
    }
}
