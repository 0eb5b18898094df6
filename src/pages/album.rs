//! Album detail page: header and full track listing.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::LoadingSpinner;
use crate::components::navigation::Navigation;
use crate::components::track_card::TrackCard;
use crate::net::api::ApiError;
use crate::net::types::Album;
use crate::state::session::SessionState;
use crate::util::format;

/// Album page for the `:id` route parameter.
#[component]
pub fn AlbumPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let album = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        let token = session.get_untracked().token.unwrap_or_default();
        async move { crate::net::api::album(&token, &id).await }
    });

    view! {
        <div class="album-page">
            <Navigation/>
            <main class="album-page__main">
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || album.get().map(render_album)}
                </Suspense>
            </main>
        </div>
    }
}

fn render_album(result: Result<Album, ApiError>) -> AnyView {
    let album = match result {
        Ok(album) => album,
        Err(ApiError::NotFound) => {
            return view! {
                <div class="album-page__missing">
                    <h2>"Album not found"</h2>
                    <a href="/search">"Back to search"</a>
                </div>
            }
            .into_any();
        }
        Err(err) => {
            return view! { <p class="error">{format!("Failed to load album: {err}")}</p> }
                .into_any();
        }
    };

    let art = album.images.into_iter().next().map(|image| image.url);
    let name = album.name;
    let artists = if album.artists.is_empty() {
        "Unknown".to_owned()
    } else {
        album
            .artists
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let year = album
        .release_date
        .as_deref()
        .map(|date| format::release_year(date).to_owned());
    let song_count = album
        .total_tracks
        .map(|total| format!("{total} songs"));
    let length = (!album.tracks.is_empty()).then(|| {
        let total_ms: u64 = album.tracks.iter().map(|t| u64::from(t.duration_ms)).sum();
        format::album_length(total_ms)
    });
    let tracks = album.tracks;
    let alt = name.clone();

    view! {
        <div class="album-page__header">
            {art.map(|url| view! { <img class="album-page__art" src=url alt=alt.clone()/> })}
            <div class="album-page__title">
                <h1>{name}</h1>
                <div class="album-page__meta">
                    <span>{artists}</span>
                    {year.map(|year| view! { <span>{year}</span> })}
                    {song_count.map(|count| view! { <span>{count}</span> })}
                    {length.map(|length| view! { <span>{length}</span> })}
                </div>
            </div>
        </div>

        {(!tracks.is_empty())
            .then(|| {
                view! {
                    <div class="track-list">
                        {tracks
                            .into_iter()
                            .enumerate()
                            .map(|(index, track)| {
                                view! { <TrackCard track=track index=index show_album=false/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}
    }
    .into_any()
}
