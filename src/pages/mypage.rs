//! Mypage: profile card, account actions, and tabs for the viewer's posts,
//! scraps and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile, authored posts and scraps arrive together through
//! `state::mypage::fetch_mypage`; a single failure shows the retry screen.
//! Comments are fetched separately the first time their tab opens.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::post_card::PostCard;
use crate::components::status::{ErrorMessage, LoadingSpinner};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{PostSummary, UserComment};
use crate::state::auth::AuthState;
use crate::state::mypage::{
    DELETE_ACCOUNT_CONFIRM, MYPAGE_LOAD_FAILED, MypageData, MypageTab, USER_NOT_FOUND, fetch_mypage,
};
use crate::util::dialog::{alert, confirm};
use crate::util::format::format_date;

#[derive(Clone, Debug)]
enum Loaded<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[component]
pub fn MypagePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let data = RwSignal::new(Loaded::<MypageData>::Loading);
    let comments = RwSignal::new(None::<Loaded<Vec<UserComment>>>);
    let tab = RwSignal::new(MypageTab::default());

    let load = move || {
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            return;
        };
        data.set(Loaded::Loading);
        spawn_local(async move {
            match fetch_mypage(&user_id).await {
                Ok(loaded) => data.set(Loaded::Ready(loaded)),
                Err(e) => {
                    warn!("mypage load failed for {user_id}: {e}");
                    let message = if matches!(e, ApiError::Status { status: 404, .. }) {
                        e.user_message(USER_NOT_FOUND)
                    } else {
                        MYPAGE_LOAD_FAILED.to_owned()
                    };
                    data.set(Loaded::Failed(message));
                }
            }
        });
    };
    load();

    let load_comments = move || {
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            return;
        };
        comments.set(Some(Loaded::Loading));
        spawn_local(async move {
            let next = match api::fetch_user_comments(&user_id).await {
                Ok(resp) => Loaded::Ready(resp.comments),
                Err(e) => {
                    warn!("comment list load failed for {user_id}: {e}");
                    Loaded::Failed("댓글을 불러오는 중 오류가 발생했습니다.".to_owned())
                }
            };
            comments.set(Some(next));
        });
    };

    let select_tab = move |next: MypageTab| {
        tab.set(next);
        if next == MypageTab::Comments && comments.with_untracked(Option::is_none) {
            load_comments();
        }
    };

    let on_logout = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            if confirm("정말 로그아웃하시겠습니까?") {
                session.logout();
                navigate("/login", NavigateOptions::default());
            }
        }
    };

    let on_delete_account = move |_: leptos::ev::MouseEvent| {
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            return;
        };
        if !confirm(DELETE_ACCOUNT_CONFIRM) {
            return;
        }
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_user(&user_id).await {
                Ok(resp) if resp.is_not_rejected() => {
                    alert("회원 탈퇴가 완료되었습니다.");
                    session.logout();
                    navigate("/login", NavigateOptions::default());
                }
                Ok(resp) => alert(&resp.message_or("회원 탈퇴에 실패했습니다.")),
                Err(e) => {
                    warn!("account deletion failed for {user_id}: {e}");
                    alert("회원 탈퇴 중 오류가 발생했습니다.");
                }
            }
        });
    };

    let post_list = |posts: Vec<PostSummary>, empty: &'static str| {
        if posts.is_empty() {
            return view! { <div class="empty-list">{empty}</div> }.into_any();
        }
        view! {
            <div class="post-list">
                {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    let comment_list = move || match comments.get() {
        None | Some(Loaded::Loading) => view! { <LoadingSpinner message="댓글을 불러오는 중..."/> }.into_any(),
        Some(Loaded::Failed(message)) => {
            view! { <ErrorMessage message=message on_retry=Callback::new(move |()| load_comments())/> }.into_any()
        }
        Some(Loaded::Ready(list)) if list.is_empty() => {
            view! { <div class="empty-list">"작성한 댓글이 없습니다."</div> }.into_any()
        }
        Some(Loaded::Ready(list)) => view! {
            <ul class="my-comment-list">
                {list.into_iter().map(|c| {
                    let href = format!("/post/{}", c.post_id);
                    view! {
                        <li class="my-comment-item">
                            <a href=href class="my-comment-post">{c.post_title}</a>
                            <p class="my-comment-content">{c.content}</p>
                            <span class="my-comment-date">{format_date(&c.created_at)}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    let tab_body = move |loaded: &MypageData| match tab.get() {
        MypageTab::Posts => post_list(loaded.posts.clone(), "작성한 게시글이 없습니다."),
        MypageTab::Scraps => post_list(loaded.scraps.clone(), "스크랩한 게시글이 없습니다."),
        MypageTab::Comments => comment_list(),
    };

    let profile = move |loaded: MypageData| {
        let info = loaded.info.clone();
        let initial = info.name.chars().next().map_or_else(|| "U".to_owned(), String::from);
        let joined = info.created_at.as_deref().map_or_else(|| "-".to_owned(), format_date);
        let on_logout = on_logout.clone();
        let on_delete_account = on_delete_account.clone();
        view! {
            <div class="profile-section">
                <div class="profile-card">
                    <div class="profile-header">
                        <div class="profile-avatar"><span class="avatar-text">{initial}</span></div>
                        <div class="profile-info">
                            <h3 class="profile-name">{info.name.clone()}</h3>
                            <p class="profile-id">"@" {info.user_id.clone()}</p>
                        </div>
                    </div>
                    <div class="profile-details">
                        <div class="detail-item">
                            <span class="detail-label">"아이디"</span>
                            <span class="detail-value">{info.user_id.clone()}</span>
                        </div>
                        <div class="detail-item">
                            <span class="detail-label">"이메일"</span>
                            <span class="detail-value">{info.email.clone()}</span>
                        </div>
                        <div class="detail-item">
                            <span class="detail-label">"가입일"</span>
                            <span class="detail-value">{joined}</span>
                        </div>
                    </div>
                </div>
            </div>
            <div class="action-section">
                <div class="action-buttons">
                    <a href="/mypage/edit" class="action-button primary">"정보 수정"</a>
                    <button class="action-button secondary" on:click=on_logout>"로그아웃"</button>
                    <button class="action-button danger" on:click=on_delete_account>"회원 탈퇴"</button>
                </div>
            </div>
            <div class="mypage-tabs">
                {MypageTab::ALL.into_iter().map(|t| view! {
                    <button
                        class="tab-button"
                        class:active=move || tab.get() == t
                        on:click=move |_| select_tab(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>
            <div class="tab-content">{move || tab_body(&loaded)}</div>
        }
    };

    let body = move || match data.get() {
        Loaded::Loading => view! { <LoadingSpinner message="사용자 정보를 불러오는 중..."/> }.into_any(),
        Loaded::Failed(message) => {
            view! { <ErrorMessage message=message on_retry=Callback::new(move |()| load())/> }.into_any()
        }
        Loaded::Ready(loaded) => profile(loaded).into_any(),
    };

    view! {
        <div class="mypage-container">
            <div class="mypage-header">
                <h2>"마이페이지"</h2>
            </div>
            {body}
        </div>
    }
}
