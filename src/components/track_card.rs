//! Row component for a single track in a list.

use leptos::prelude::*;

use crate::net::types::Track;
use crate::util::format;

/// One row in a track list: position, art, name, artists, album, duration.
#[component]
pub fn TrackCard(
    track: Track,
    index: usize,
    #[prop(default = true)] show_album: bool,
) -> impl IntoView {
    let artists = if track.artists.is_empty() {
        "Unknown".to_owned()
    } else {
        track
            .artists
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let art = track
        .album
        .as_ref()
        .and_then(|album| album.images.first())
        .map(|image| image.url.clone());
    let album_name = track
        .album
        .as_ref()
        .map(|album| album.name.clone())
        .unwrap_or_default();
    let duration = format::duration(track.duration_ms);
    let name = track.name;

    view! {
        <div class="track-card">
            <span class="track-card__index">{index + 1}</span>
            {art.map(|url| view! { <img class="track-card__art" src=url alt="track art"/> })}
            <div class="track-card__titles">
                <span class="track-card__name">{name}</span>
                <span class="track-card__artists">{artists}</span>
            </div>
            {show_album.then_some(view! { <span class="track-card__album">{album_name}</span> })}
            <span class="track-card__duration">{duration}</span>
        </div>
    }
}
