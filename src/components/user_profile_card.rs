//! Card summarizing the logged-in account.

use leptos::prelude::*;

use crate::net::types::UserProfile;

/// Profile card shown at the top of the dashboard.
#[component]
pub fn UserProfileCard(user: UserProfile) -> impl IntoView {
    let avatar = user.images.into_iter().next().map(|image| image.url);
    let display_name = user.display_name;
    let email = user.email;
    let country = user.country;
    let product = user.product;
    let alt = display_name.clone();

    view! {
        <div class="profile-card">
            {avatar.map(|url| view! { <img class="profile-card__avatar" src=url alt=alt.clone()/> })}
            <div class="profile-card__details">
                <h2 class="profile-card__name">{display_name}</h2>
                <span class="profile-card__email">{email}</span>
                <div class="profile-card__badges">
                    {country.map(|country| view! { <span class="badge">{country}</span> })}
                    {product.map(|product| view! { <span class="badge">{product}</span> })}
                </div>
            </div>
        </div>
    }
}
