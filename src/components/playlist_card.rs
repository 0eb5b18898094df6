//! Card component for a playlist in search results.

use leptos::prelude::*;

use crate::net::types::Playlist;

/// A card for a playlist: art, name, description, and owner.
#[component]
pub fn PlaylistCard(playlist: Playlist) -> impl IntoView {
    let name = playlist.name;
    let art = playlist.images.into_iter().next().map(|image| image.url);
    let owner = playlist.owner.display_name;
    let description = playlist.description;
    let alt = name.clone();

    view! {
        <div class="playlist-card">
            {art.map(|url| view! { <img class="playlist-card__art" src=url alt=alt.clone()/> })}
            <span class="playlist-card__name">{name}</span>
            <span class="playlist-card__description">{description}</span>
            <span class="playlist-card__owner">{format!("By {owner}")}</span>
        </div>
    }
}
