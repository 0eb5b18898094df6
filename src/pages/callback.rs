//! OAuth callback: exchange the `token` query parameter for a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionState;

/// Route the authorization server redirects back to.
///
/// With a `token` parameter the login flow runs and lands on the default
/// authenticated route; without one, or when login fails, the visitor
/// falls back to the login page. Both navigations replace the current
/// history entry so the back button never returns to the callback URL.
#[component]
pub fn CallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    Effect::new(move || {
        let token = query.get().get("token").unwrap_or_default();
        if token.is_empty() {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let store = crate::util::token_store::BrowserTokenStore;
                let mut state = session.get_untracked();
                crate::state::session::login(&mut state, &store, token, |t| async move {
                    crate::net::api::fetch_profile(&t).await
                })
                .await;
                let authenticated = state.is_authenticated();
                session.set(state);

                let target = if authenticated { "/search" } else { "/login" };
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, session);
        }
    });

    view! {
        <div class="callback-page">
            <p>"Completing login..."</p>
            <p class="callback-page__hint">"Please wait while we confirm your account"</p>
        </div>
    }
}
