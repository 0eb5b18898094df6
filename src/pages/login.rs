//! Anonymous login entry point.

use leptos::prelude::*;

use crate::config;

/// Login page — the link hands the whole window to the remote
/// authorization endpoint; control does not return to this page.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Tunedeck"</h1>
            <p>"Connect your Spotify account to browse your music data"</p>
            <a href=config::login_url() class="login-button">
                "Login with Spotify"
            </a>
        </div>
    }
}
