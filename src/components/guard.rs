//! Access control for protected views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingSpinner;
use crate::state::session::{SessionPhase, SessionState};

/// What a guarded view does for a given session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Bootstrap or login in flight: show the waiting indicator and mount
    /// nothing else.
    Wait,
    /// Render the guarded content.
    Allow,
    /// Send the visitor to the login entry point, replacing the current
    /// history entry so back-navigation cannot return here.
    RedirectToLogin,
}

/// Pure routing decision for a session phase.
pub fn guard(phase: SessionPhase) -> GuardOutcome {
    match phase {
        SessionPhase::Bootstrapping => GuardOutcome::Wait,
        SessionPhase::Authenticated => GuardOutcome::Allow,
        SessionPhase::Anonymous => GuardOutcome::RedirectToLogin,
    }
}

/// Wrapper gating its children on an authenticated session.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if guard(session.get().phase()) == GuardOutcome::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match guard(session.get().phase()) {
        GuardOutcome::Wait => view! { <LoadingSpinner/> }.into_any(),
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::RedirectToLogin => ().into_any(),
    }
}
