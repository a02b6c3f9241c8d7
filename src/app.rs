//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{ProtectedRoute, PublicRoute};
use crate::components::header::Header;
use crate::pages::{
    home::HomePage, login::LoginPage, mypage::MypagePage, post_detail::PostDetailPage, post_editor::PostEditorPage,
    profile_edit::ProfileEditPage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// Session store shared through context.
pub type AppSession = Arc<SessionStore<BrowserStorage>>;

/// Root application component.
///
/// Creates the session store, mirrors its snapshots into an
/// `RwSignal<AuthState>`, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: AppSession = Arc::new(SessionStore::new(BrowserStorage));
    let auth = RwSignal::new(AuthState::default());
    session.subscribe(move |state| auth.set(state.clone()));
    session.initialize();

    provide_context(session);
    provide_context(auth);

    view! {
        <Title text="Simple Board"/>

        <Router>
            <div class="app">
                <Header/>
                <main class="main-content">
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("post"), ParamSegment("postId")) view=PostDetailPage/>
                        <Route
                            path=StaticSegment("create-post")
                            view=|| view! { <ProtectedRoute><PostEditorPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("edit-post"), ParamSegment("postId"))
                            view=|| view! { <ProtectedRoute><PostEditorPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("mypage")
                            view=|| view! { <ProtectedRoute><MypagePage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("mypage"), StaticSegment("edit"))
                            view=|| view! { <ProtectedRoute><ProfileEditPage/></ProtectedRoute> }
                        />
                        <Route path=StaticSegment("login") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                        <Route path=StaticSegment("signup") view=|| view! { <PublicRoute><SignupPage/></PublicRoute> }/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
