//! Top navigation bar with section links, the current user, and logout.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};
use crate::util::token_store::BrowserTokenStore;

/// Sticky header shown on every authenticated page.
///
/// Logout clears the session synchronously; the route guard handles the
/// redirect once the state settles in `Anonymous`.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let display_name = move || {
        session
            .get()
            .user
            .map(|u| u.display_name)
            .unwrap_or_default()
    };
    let avatar_url = move || {
        session
            .get()
            .user
            .and_then(|u| u.images.into_iter().next())
            .map(|image| image.url)
    };

    let on_logout = move |_| {
        session.update(|state| session::logout(state, &BrowserTokenStore));
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">"Tunedeck"</a>
            <nav class="nav__links">
                <a href="/search">"Search"</a>
                <a href="/">"Dashboard"</a>
            </nav>
            <div class="nav__session">
                <span class="nav__user">{display_name}</span>
                {move || {
                    avatar_url().map(|url| view! { <img class="nav__avatar" src=url alt="avatar"/> })
                }}
                <button class="btn btn--small" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
