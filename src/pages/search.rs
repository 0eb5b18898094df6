//! Search across tracks, artists, albums, and playlists.

use leptos::prelude::*;

use crate::components::album_card::AlbumCard;
use crate::components::artist_card::ArtistCard;
use crate::components::loading::LoadingSpinner;
use crate::components::navigation::Navigation;
use crate::components::playlist_card::PlaylistCard;
use crate::components::track_card::TrackCard;
use crate::net::api::ApiError;
use crate::net::types::SearchResults;
use crate::state::session::SessionState;

/// Search page — the default authenticated route after login.
///
/// Every submitted query is a fresh request; nothing is cached.
#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let query = RwSignal::new(String::new());
    let submitted = RwSignal::new(String::new());

    let results = LocalResource::new(move || {
        let q = submitted.get();
        let token = session.get_untracked().token.unwrap_or_default();
        async move {
            let q = q.trim().to_owned();
            if q.is_empty() {
                return Ok(SearchResults::default());
            }
            crate::net::api::search(&token, &q).await
        }
    });

    let submit = move || submitted.set(query.get());

    view! {
        <div class="search-page">
            <Navigation/>
            <main class="search-page__main">
                <div class="search-page__bar">
                    <input
                        class="search-page__input"
                        type="text"
                        placeholder="Search tracks, artists, albums, playlists"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                    <button class="btn btn--primary" on:click=move |_| submit()>
                        "Search"
                    </button>
                </div>

                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || results.get().map(render_results)}
                </Suspense>
            </main>
        </div>
    }
}

fn render_results(result: Result<SearchResults, ApiError>) -> AnyView {
    let results = match result {
        Ok(results) => results,
        Err(err) => {
            return view! { <p class="error">{format!("Search failed: {err}")}</p> }.into_any();
        }
    };

    view! {
        <div class="search-page__results">
            {(!results.tracks.is_empty())
                .then(|| {
                    view! {
                        <section class="search-page__section">
                            <h2>"Tracks"</h2>
                            <div class="track-list">
                                {results
                                    .tracks
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, track)| {
                                        view! { <TrackCard track=track index=index/> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })}
            {(!results.artists.is_empty())
                .then(|| {
                    view! {
                        <section class="search-page__section">
                            <h2>"Artists"</h2>
                            <div class="card-grid">
                                {results
                                    .artists
                                    .into_iter()
                                    .map(|artist| view! { <ArtistCard artist=artist/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })}
            {(!results.albums.is_empty())
                .then(|| {
                    view! {
                        <section class="search-page__section">
                            <h2>"Albums"</h2>
                            <div class="card-grid">
                                {results
                                    .albums
                                    .into_iter()
                                    .map(|album| view! { <AlbumCard album=album/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })}
            {(!results.playlists.is_empty())
                .then(|| {
                    view! {
                        <section class="search-page__section">
                            <h2>"Playlists"</h2>
                            <div class="card-grid">
                                {results
                                    .playlists
                                    .into_iter()
                                    .map(|playlist| view! { <PlaylistCard playlist=playlist/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })}
        </div>
    }
    .into_any()
}
