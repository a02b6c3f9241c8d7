//! Home page: category filter, keyword search and the post list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is refetched whenever the session changes (so `isScrapped` is
//! filled for the viewer), when a category is picked, and on search. The
//! result is reordered with `sort_posts_by_priority` before display.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::post_card::PostCard;
use crate::components::status::{ErrorMessage, LoadingSpinner};
use crate::net::api::{self, DEFAULT_PAGE_SIZE};
use crate::net::types::Category;
use crate::state::auth::AuthState;
use crate::state::posts::{PostListState, apply_scrap};
use crate::util::dialog::alert;
use crate::util::format::{ALL_CATEGORIES_LABEL, DEFAULT_CATEGORY_COLOR};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let list = RwSignal::new(PostListState::default());

    let load = move || {
        let viewer = auth.with_untracked(AuthState::user_id);
        let (query, keyword) =
            list.with_untracked(|s| (s.query(DEFAULT_PAGE_SIZE, viewer), s.search_keyword().map(str::to_owned)));
        let Some(ticket) = list.try_update(PostListState::begin_load) else {
            return;
        };
        spawn_local(async move {
            let result = match keyword {
                Some(keyword) => api::search_posts(&keyword, 0, DEFAULT_PAGE_SIZE, query.user_id.as_deref()).await,
                None => api::fetch_posts(&query).await,
            };
            // A newer load may have started; its ticket decides which result lands.
            match result {
                Ok(page) => list.update(|s| {
                    s.finish_load(ticket, page.content);
                }),
                Err(e) => {
                    warn!("post list load {ticket} failed: {e}");
                    list.update(|s| {
                        s.fail_load(ticket);
                    });
                }
            }
        });
    };

    // Wait for the session to be known, then reload whenever the viewer changes.
    let viewer = Memo::new(move |_| auth.with(|a| (a.loading, a.user_id())));
    Effect::new(move || {
        let (loading, _) = viewer.get();
        if !loading {
            load();
        }
    });

    let select_category = move |category: Option<Category>| {
        list.update(|s| {
            s.category = category;
            s.keyword.clear();
        });
        load();
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    let on_scrap = Callback::new(move |post_id: i64| {
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            alert("로그인이 필요합니다.");
            return;
        };
        spawn_local(async move {
            match api::toggle_scrap(post_id, &user_id).await {
                Ok(resp) => {
                    let applied = list.try_update(|s| apply_scrap(&mut s.posts, post_id, &resp)).unwrap_or(false);
                    if !applied {
                        alert(&resp.message_or("스크랩 처리에 실패했습니다."));
                    }
                }
                Err(e) => {
                    warn!("scrap toggle failed for post {post_id}: {e}");
                    alert("스크랩 처리 중 오류가 발생했습니다.");
                }
            }
        });
    });

    let category_button = move |category: Option<Category>| {
        let label = category.map_or(ALL_CATEGORIES_LABEL, Category::label);
        let color = category.map_or(DEFAULT_CATEGORY_COLOR, Category::color);
        let active = move || list.with(|s| s.category == category);
        view! {
            <button
                class="category-btn"
                class:active=active
                style=move || {
                    if active() {
                        format!("background-color: {color}; color: white; border-color: {color}")
                    } else {
                        format!("background-color: transparent; color: {color}; border-color: {color}")
                    }
                }
                on:click=move |_| select_category(category)
            >
                {label}
            </button>
        }
    };

    let shown = Memo::new(move |_| list.with(|s| (s.loading, s.error.clone(), s.posts.clone())));

    let body = move || {
        let (loading, error, posts) = shown.get();
        if loading {
            return view! { <LoadingSpinner message="게시글을 불러오는 중..."/> }.into_any();
        }
        if let Some(message) = error {
            return view! { <ErrorMessage message=message on_retry=Callback::new(move |()| load())/> }.into_any();
        }
        if posts.is_empty() {
            return view! { <div class="no-posts"><p>"게시글이 없습니다."</p></div> }.into_any();
        }
        let signed_in = auth.with(AuthState::is_authenticated);
        view! {
            <div class="post-list">
                {posts
                    .into_iter()
                    .map(|post| {
                        if signed_in {
                            view! { <PostCard post=post on_scrap=on_scrap/> }.into_any()
                        } else {
                            view! { <PostCard post=post/> }.into_any()
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="post-list-container">
            <div class="post-list-header">
                <h2>"게시글 목록"</h2>
                <form class="search-form" on:submit=on_search>
                    <input
                        type="search"
                        class="search-input"
                        placeholder="제목 또는 내용으로 검색"
                        prop:value=move || list.with(|s| s.keyword.clone())
                        on:input=move |ev| list.update(|s| s.keyword = event_target_value(&ev))
                    />
                    <button type="submit" class="search-button">"검색"</button>
                </form>
                <div class="category-filter">
                    {category_button(None)}
                    {Category::ALL.into_iter().map(|c| category_button(Some(c))).collect_view()}
                </div>
            </div>
            {body}
        </div>
    }
}
