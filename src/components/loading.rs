//! Neutral waiting indicator.

use leptos::prelude::*;

/// Spinner shown while the session bootstrap or a data fetch is pending.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
