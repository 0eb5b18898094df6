//! Root application component with routing, session context, and the
//! one-time session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RequireSession;
use crate::pages::{
    album::AlbumPage, artist::ArtistPage, callback::CallbackPage, dashboard::DashboardPage,
    login::LoginPage, search::SearchPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, spawns the bootstrap that restores a
/// persisted session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session starts in `Bootstrapping`; the spawned flow settles it.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let store = crate::util::token_store::BrowserTokenStore;
        let mut state = session.get_untracked();
        crate::state::session::bootstrap(&mut state, &store, |token| async move {
            crate::net::api::fetch_profile(&token).await
        })
        .await;
        session.set(state);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tunedeck.css"/>
        <Title text="Tunedeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("callback") view=CallbackPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireSession><DashboardPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("search")
                    view=|| view! { <RequireSession><SearchPage/></RequireSession> }
                />
                <Route
                    path=(StaticSegment("artist"), ParamSegment("id"))
                    view=|| view! { <RequireSession><ArtistPage/></RequireSession> }
                />
                <Route
                    path=(StaticSegment("album"), ParamSegment("id"))
                    view=|| view! { <RequireSession><AlbumPage/></RequireSession> }
                />
            </Routes>
        </Router>
    }
}
