//! Personalized dashboard: profile card plus top artists and top tracks.

use leptos::prelude::*;

use crate::components::artist_card::ArtistCard;
use crate::components::loading::LoadingSpinner;
use crate::components::navigation::Navigation;
use crate::components::track_card::TrackCard;
use crate::components::user_profile_card::UserProfileCard;
use crate::net::api::ApiError;
use crate::net::types::{Artist, Track};
use crate::state::session::SessionState;

/// Dashboard page — the default authenticated landing view.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let top_artists = LocalResource::new(move || {
        let token = session.get().token.unwrap_or_default();
        async move { crate::net::api::top_artists(&token).await }
    });
    let top_tracks = LocalResource::new(move || {
        let token = session.get().token.unwrap_or_default();
        async move { crate::net::api::top_tracks(&token).await }
    });

    view! {
        <div class="dashboard-page">
            <Navigation/>
            <main class="dashboard-page__main">
                {move || session.get().user.map(|user| view! { <UserProfileCard user=user/> })}

                <section class="dashboard-page__section">
                    <h2>"Your Top Artists"</h2>
                    <Suspense fallback=move || view! { <LoadingSpinner/> }>
                        {move || top_artists.get().map(render_artists)}
                    </Suspense>
                </section>

                <section class="dashboard-page__section">
                    <h2>"Your Top Tracks"</h2>
                    <Suspense fallback=move || view! { <LoadingSpinner/> }>
                        {move || top_tracks.get().map(render_tracks)}
                    </Suspense>
                </section>
            </main>
        </div>
    }
}

fn render_artists(result: Result<Vec<Artist>, ApiError>) -> AnyView {
    match result {
        Ok(artists) if artists.is_empty() => {
            view! { <p class="empty">"No top artists available."</p> }.into_any()
        }
        Ok(artists) => view! {
            <div class="card-grid">
                {artists
                    .into_iter()
                    .map(|artist| view! { <ArtistCard artist=artist/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(err) => {
            view! { <p class="error">{format!("Failed to load top artists: {err}")}</p> }.into_any()
        }
    }
}

fn render_tracks(result: Result<Vec<Track>, ApiError>) -> AnyView {
    match result {
        Ok(tracks) if tracks.is_empty() => {
            view! { <p class="empty">"No top tracks available."</p> }.into_any()
        }
        Ok(tracks) => view! {
            <div class="track-list">
                {tracks
                    .into_iter()
                    .enumerate()
                    .map(|(index, track)| view! { <TrackCard track=track index=index/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(err) => {
            view! { <p class="error">{format!("Failed to load top tracks: {err}")}</p> }.into_any()
        }
    }
}
