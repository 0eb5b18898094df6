//! Artist detail page: profile header, albums, and top tracks.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::album_card::AlbumCard;
use crate::components::loading::LoadingSpinner;
use crate::components::navigation::Navigation;
use crate::components::track_card::TrackCard;
use crate::net::api::ApiError;
use crate::net::types::ArtistPage as ArtistPageData;
use crate::state::session::SessionState;
use crate::util::format;

/// Artist page for the `:id` route parameter.
#[component]
pub fn ArtistPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let page = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        let token = session.get_untracked().token.unwrap_or_default();
        async move { crate::net::api::artist_page(&token, &id).await }
    });

    view! {
        <div class="artist-page">
            <Navigation/>
            <main class="artist-page__main">
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || page.get().map(render_page)}
                </Suspense>
            </main>
        </div>
    }
}

fn render_page(result: Result<ArtistPageData, ApiError>) -> AnyView {
    let page = match result {
        Ok(page) => page,
        Err(ApiError::NotFound) => return not_found(),
        Err(err) => {
            return view! { <p class="error">{format!("Failed to load artist: {err}")}</p> }
                .into_any();
        }
    };
    let Some(artist) = page.artist_profile else {
        return not_found();
    };

    let art = artist.images.into_iter().next().map(|image| image.url);
    let name = artist.name;
    let followers = artist
        .followers
        .map(|f| format!("{} followers", format::followers(f.total)));
    let alt = name.clone();

    view! {
        <div class="artist-page__header">
            {art.map(|url| view! { <img class="artist-page__portrait" src=url alt=alt.clone()/> })}
            <div class="artist-page__title">
                <p class="artist-page__kicker">"ARTIST"</p>
                <h1>{name}</h1>
                {followers.map(|text| view! { <span class="artist-page__followers">{text}</span> })}
            </div>
        </div>

        {(!page.albums.is_empty())
            .then(|| {
                view! {
                    <section class="artist-page__section">
                        <h2>"Albums"</h2>
                        <div class="card-grid">
                            {page
                                .albums
                                .into_iter()
                                .map(|album| view! { <AlbumCard album=album/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                }
            })}

        {(!page.top_tracks.is_empty())
            .then(|| {
                view! {
                    <section class="artist-page__section">
                        <h2>"Popular Tracks"</h2>
                        <div class="track-list">
                            {page
                                .top_tracks
                                .into_iter()
                                .enumerate()
                                .map(|(index, track)| view! { <TrackCard track=track index=index/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                }
            })}
    }
    .into_any()
}

fn not_found() -> AnyView {
    view! {
        <div class="artist-page__missing">
            <h2>"Artist not found"</h2>
            <a href="/search">"Back to search"</a>
        </div>
    }
    .into_any()
}
