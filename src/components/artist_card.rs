//! Card component linking to an artist page.

use leptos::prelude::*;

use crate::net::types::Artist;
use crate::util::format;

/// A clickable card for an artist in a grid.
#[component]
pub fn ArtistCard(artist: Artist) -> impl IntoView {
    let href = format!("/artist/{}", artist.id);
    let name = artist.name;
    let art = artist.images.into_iter().next().map(|image| image.url);
    let followers = artist
        .followers
        .map(|f| format!("{} followers", format::followers(f.total)));
    let alt = name.clone();

    view! {
        <a class="artist-card" href=href>
            {art.map(|url| view! { <img class="artist-card__art" src=url alt=alt.clone()/> })}
            <span class="artist-card__name">{name}</span>
            {followers.map(|text| view! { <span class="artist-card__followers">{text}</span> })}
        </a>
    }
}
