//! Fixed remote origin, endpoint paths, and the token storage key.

/// Origin of the music-data API. All requests are plain GETs against it.
pub const API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Path on the remote origin that starts the external authorization
/// handshake. Navigating here leaves the application entirely.
pub const LOGIN_PATH: &str = "/oauth2/authorization/spotify";

/// `localStorage` key holding the raw bearer token — the only persisted
/// state in the whole application.
pub const TOKEN_STORAGE_KEY: &str = "spotify_token";

/// Full URL of the external login redirect.
pub fn login_url() -> String {
    format!("{API_BASE_URL}{LOGIN_PATH}")
}

/// Full URL for an API path such as `/me` or `/artists/top`.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}
