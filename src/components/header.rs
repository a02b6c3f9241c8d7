//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let signed_in = move || auth.get().is_authenticated();
    let display_name = move || auth.get().session.map(|s| s.name).unwrap_or_default();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <div class="header-container">
                <div class="header-left">
                    <a href="/" class="logo">"Simple Board"</a>
                </div>
                <nav class="header-nav">
                    <a href="/" class="nav-link">"홈"</a>
                    <Show when=signed_in>
                        <a href="/create-post" class="nav-link">"글쓰기"</a>
                    </Show>
                </nav>
                <div class="header-right">
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <div class="auth-menu">
                                <a href="/login" class="nav-link">"로그인"</a>
                                <a href="/signup" class="nav-link signup-link">"회원가입"</a>
                            </div>
                        }
                    >
                        <div class="user-menu">
                            <span class="user-name">{display_name}"님"</span>
                            <a href="/mypage" class="nav-link">"마이페이지"</a>
                            <button class="logout-btn" on:click=on_logout.clone()>"로그아웃"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
