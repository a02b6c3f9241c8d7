//! Post detail page: body, attachments, scrap toggle, author actions and comments.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::comment_section::CommentSection;
use crate::components::status::{ErrorMessage, LoadingSpinner};
use crate::net::api;
use crate::net::types::PostDetail;
use crate::state::auth::AuthState;
use crate::state::posts::{PostDetailState, apply_detail_scrap};
use crate::util::dialog::{alert, confirm};
use crate::util::format::{category_color, category_label, format_date};

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let state = RwSignal::new(PostDetailState::default());

    let post_id = Memo::new(move |_| params.with(|p| p.get("postId").and_then(|id| id.parse::<i64>().ok())));

    let load = move || {
        let Some(id) = post_id.get_untracked() else {
            state.update(PostDetailState::reject_id);
            return;
        };
        let viewer = auth.with_untracked(AuthState::user_id);
        let Some(ticket) = state.try_update(PostDetailState::begin_load) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_post_detail(id, viewer.as_deref()).await;
            if let Err(e) = &result {
                warn!("post {id} load failed: {e}");
            }
            state.update(|s| {
                s.apply_load(ticket, result);
            });
        });
    };

    // Profile edits leave the viewer unchanged and must not count as another view.
    let viewer = Memo::new(move |_| auth.with(|a| (a.loading, a.user_id())));

    Effect::new(move || {
        let (loading, _) = viewer.get();
        post_id.track();
        if !loading {
            load();
        }
    });

    let on_scrap = move |_: leptos::ev::MouseEvent| {
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            alert("로그인이 필요합니다.");
            return;
        };
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::toggle_scrap(id, &user_id).await {
                Ok(resp) => {
                    let applied = state
                        .try_update(|s| s.post.as_mut().is_some_and(|post| apply_detail_scrap(post, &resp)))
                        .unwrap_or(false);
                    if !applied {
                        alert(&resp.message_or("스크랩 처리에 실패했습니다."));
                    }
                }
                Err(e) => {
                    warn!("scrap toggle failed for post {id}: {e}");
                    alert("스크랩 처리 중 오류가 발생했습니다.");
                }
            }
        });
    };

    let on_delete = Callback::new(move |()| {
        let (Some(user_id), Some(id)) = (auth.with_untracked(AuthState::user_id), post_id.get_untracked()) else {
            return;
        };
        if !confirm("정말로 이 게시글을 삭제하시겠습니까?") {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_post(id, &user_id).await {
                Ok(resp) if resp.is_not_rejected() => {
                    alert("게시글이 삭제되었습니다.");
                    navigate("/", NavigateOptions::default());
                }
                Ok(resp) => alert(&resp.message_or("게시글 삭제에 실패했습니다.")),
                Err(e) => {
                    warn!("delete failed for post {id}: {e}");
                    alert("게시글 삭제 중 오류가 발생했습니다.");
                }
            }
        });
    });

    let go_back = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    };

    let article = move |post: PostDetail| {
        let is_author = auth.with(|a| a.user_id().is_some_and(|id| id == post.author_user_id));
        let edit_href = format!("/edit-post/{}", post.id);
        let label = post.category_name.clone().unwrap_or_else(|| category_label(&post.category));
        let badge_style = format!("background-color: {}", category_color(&post.category));
        let paragraphs = post.content.lines().map(|line| view! { <p>{line.to_owned()}</p> }).collect_view();
        let files = (!post.file_urls.is_empty()).then(|| {
            view! {
                <div class="post-files">
                    <h3>"첨부파일"</h3>
                    <div class="file-list">
                        {post.file_urls.iter().enumerate().map(|(i, url)| view! {
                            <div class="file-item">
                                <div class="file-info">
                                    <span class="file-name">"파일 " {i + 1}</span>
                                </div>
                                <a href=url.clone() target="_blank" rel="noopener noreferrer" class="download-button">
                                    "다운로드"
                                </a>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            }
        });
        let scrapped = move || state.with(|s| s.post.as_ref().is_some_and(|p| p.is_scrapped));
        let scrap_count = move || state.with(|s| s.post.as_ref().and_then(|p| p.scrap_count).unwrap_or(0));

        view! {
            <article class="post-detail">
                <header class="post-header">
                    <div class="post-header-top">
                        <span class="category-badge" style=badge_style>{label}</span>
                        {is_author.then(|| view! {
                            <div class="author-actions">
                                <a href=edit_href class="edit-button">"수정"</a>
                                <button class="delete-button" on:click=move |_| on_delete.run(())>"삭제"</button>
                            </div>
                        })}
                    </div>
                    <h1 class="post-title">{post.title.clone()}</h1>
                    <div class="post-meta">
                        <div class="post-info">
                            <span class="post-author">"작성자: " {post.author_name.clone()}</span>
                            <span class="post-date">"작성일: " {format_date(&post.created_at)}</span>
                        </div>
                        <div class="post-stats">
                            <span class="stat">"조회 " {post.view_count.unwrap_or(0)}</span>
                            <span class="stat">"스크랩 " {scrap_count}</span>
                        </div>
                    </div>
                </header>
                <div class="post-content">
                    <div class="content-text">{paragraphs}</div>
                </div>
                {files}
                <div class="post-actions">
                    <button class="scrap-button" class:scrapped=scrapped on:click=on_scrap>
                        {move || if scrapped() { "스크랩 취소" } else { "스크랩" }}
                    </button>
                </div>
                <CommentSection post_id=post.id/>
            </article>
        }
    };

    // Scrap toggles patch `state.post` in place; only a new load rebuilds the article.
    let status = Memo::new(move |_| state.with(|s| (s.loading, s.error.clone(), s.post.as_ref().map(|p| p.id))));

    let body = move || {
        let (loading, error, shown) = status.get();
        if loading {
            return view! { <LoadingSpinner message="게시글을 불러오는 중..."/> }.into_any();
        }
        if let Some(message) = error {
            return view! { <ErrorMessage message=message on_retry=Callback::new(move |()| load())/> }.into_any();
        }
        match shown.and_then(|_| state.with_untracked(|s| s.post.clone())) {
            Some(post) => article(post).into_any(),
            None => view! { <div class="no-post">"게시글을 찾을 수 없습니다."</div> }.into_any(),
        }
    };

    view! {
        <div class="post-detail-container">
            <div class="post-detail-header">
                <button class="back-button" on:click=go_back>"← 뒤로가기"</button>
            </div>
            {body}
        </div>
    }
}
