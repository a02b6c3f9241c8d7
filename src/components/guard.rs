//! Route wrappers that gate a page on the session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both wrappers read `RwSignal<AuthState>` from context and render the
//! loading placeholder until the session store has been initialized, so a
//! reload on a protected page never flashes a redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::status::LoadingSpinner;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, GuardKind, guard_decision};

/// Renders children only for a signed-in user; otherwise redirects to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Protected, children)
}

/// Renders children only for anonymous visitors; otherwise redirects to `/`.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::PublicOnly, children)
}

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    // The page stays mounted while the decision is unchanged.
    let decision = Memo::new(move |_| auth.with(|state| guard_decision(state, kind)));
    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingSpinner/> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
    }
}
