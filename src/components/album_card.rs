//! Card component linking to an album page.

use leptos::prelude::*;

use crate::net::types::Album;
use crate::util::format;

/// A clickable card for an album in a grid.
#[component]
pub fn AlbumCard(album: Album) -> impl IntoView {
    let href = format!("/album/{}", album.id);
    let name = album.name;
    let art = album.images.into_iter().next().map(|image| image.url);
    let artists = album
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let year = album
        .release_date
        .as_deref()
        .map(|date| format::release_year(date).to_owned());
    let alt = name.clone();

    view! {
        <a class="album-card" href=href>
            {art.map(|url| view! { <img class="album-card__art" src=url alt=alt.clone()/> })}
            <span class="album-card__name">{name}</span>
            <span class="album-card__artists">{artists}</span>
            {year.map(|year| view! { <span class="album-card__year">{year}</span> })}
        </a>
    }
}
