//! Comment thread under a post: list, compose, inline edit and delete.
//!
//! Only the comment author sees edit/delete controls. Every mutation
//! reloads the thread from the backend and reports the outcome with an alert.

use std::future::Future;
use std::pin::Pin;

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::StatusResponse;
use crate::state::auth::AuthState;
use crate::state::comments::{CommentAction, CommentThread, DELETE_COMMENT_CONFIRM, is_edited};
use crate::util::dialog::{alert, confirm};
use crate::util::format::{format_relative, local_now};
use crate::util::validation::{COMMENT_MAX_CHARS, validate_comment};

type Mutation = Pin<Box<dyn Future<Output = Result<StatusResponse, ApiError>>>>;

#[component]
pub fn CommentSection(post_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let thread = RwSignal::new(CommentThread { loading: true, ..CommentThread::default() });

    let reload = move || {
        spawn_local(async move {
            let result = api::fetch_comments(post_id).await;
            if let Err(e) = &result {
                warn!("comment load failed for post {post_id}: {e}");
            }
            thread.update(|t| t.apply_list(result));
        });
    };
    reload();

    // Runs a mutation with the busy flag held, then reloads and reports.
    let run = move |action: CommentAction, request: Mutation| {
        thread.update(|t| t.busy = true);
        spawn_local(async move {
            let result = request.await;
            thread.update(|t| t.busy = false);
            match action.outcome(result) {
                Ok(notice) => {
                    thread.update(|t| {
                        if action == CommentAction::Create {
                            t.draft.clear();
                        }
                        t.cancel_edit();
                    });
                    reload();
                    alert(notice);
                }
                Err(message) => alert(&message),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let (busy, draft) = thread.with_untracked(|t| (t.busy, t.draft.trim().to_owned()));
        if busy {
            return;
        }
        if let Err(message) = validate_comment(&draft) {
            alert(message);
            return;
        }
        run(CommentAction::Create, Box::pin(async move { api::create_comment(post_id, &draft, &user_id).await }));
    };

    let on_update = move |comment_id: i64| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let text = thread.with_untracked(|t| t.editing.as_ref().map(|(_, text)| text.trim().to_owned()));
        let Some(text) = text else {
            return;
        };
        if let Err(message) = validate_comment(&text) {
            alert(message);
            return;
        }
        run(CommentAction::Update, Box::pin(async move { api::update_comment(comment_id, &text, &user_id).await }));
    };

    let on_delete = move |comment_id: i64| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        if !confirm(DELETE_COMMENT_CONFIRM) {
            return;
        }
        run(CommentAction::Delete, Box::pin(async move { api::delete_comment(comment_id, &user_id).await }));
    };

    // Row structure only; typing into the editor must not rebuild the list.
    let rows = Memo::new(move |_| thread.with(|t| (t.comments.clone(), t.editing.as_ref().map(|(id, _)| *id))));
    let busy = move || thread.with(|t| t.busy);

    let list = move || {
        let (comments, editing) = rows.get();
        if comments.is_empty() {
            return view! {
                <div class="no-comments">
                    <p>"아직 댓글이 없습니다. 첫 번째 댓글을 작성해보세요!"</p>
                </div>
            }
            .into_any();
        }
        let now = local_now();
        let viewer = auth.get().user_id();
        comments
            .into_iter()
            .map(|comment| {
                let id = comment.id;
                let is_author = viewer.as_deref() == Some(comment.author_user_id.as_str());
                let edited = is_edited(&comment);
                let body = if editing == Some(id) {
                    view! {
                        <div class="comment-edit-form">
                            <textarea
                                maxlength=COMMENT_MAX_CHARS.to_string()
                                disabled=busy
                                prop:value=thread.with_untracked(|t| t.editing.as_ref().map(|(_, s)| s.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    thread.update(|t| {
                                        if let Some((_, text)) = t.editing.as_mut() {
                                            *text = value;
                                        }
                                    });
                                }
                            ></textarea>
                            <div class="edit-buttons">
                                <button type="button" disabled=busy on:click=move |_| on_update(id)>
                                    {move || if busy() { "수정 중..." } else { "수정" }}
                                </button>
                                <button type="button" disabled=busy on:click=move |_| thread.update(CommentThread::cancel_edit)>
                                    "취소"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    let for_edit = comment.clone();
                    view! {
                        <div class="comment-content">
                            <p>{comment.content.clone()}</p>
                            {is_author.then(|| view! {
                                <div class="comment-actions">
                                    <button
                                        type="button"
                                        class="action-link"
                                        on:click=move |_| thread.update(|t| t.start_edit(&for_edit))
                                    >
                                        "수정"
                                    </button>
                                    <span class="action-separator">"|"</span>
                                    <button type="button" class="action-link" on:click=move |_| on_delete(id)>"삭제"</button>
                                </div>
                            })}
                        </div>
                    }
                    .into_any()
                };
                view! {
                    <div class="comment-item">
                        <div class="comment-header">
                            <span class="comment-author">{comment.author_name.clone()}</span>
                            <span class="comment-date">{format_relative(&comment.created_at, now)}</span>
                            {edited.then(|| view! { <span class="comment-edited">"(수정됨)"</span> })}
                        </div>
                        {body}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="comment-section">
            <Show
                when=move || !thread.with(|t| t.loading)
                fallback=|| view! {
                    <h3>"댓글"</h3>
                    <div class="loading-comments">"댓글을 불러오는 중..."</div>
                }
            >
                <h3>"댓글 (" {move || thread.with(|t| t.comments.len())} ")"</h3>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| view! {
                        <div class="login-required">
                            <p>"댓글을 작성하려면 로그인이 필요합니다."</p>
                        </div>
                    }
                >
                    <form class="comment-form" on:submit=on_submit>
                        <textarea
                            placeholder="댓글을 입력하세요..."
                            maxlength=COMMENT_MAX_CHARS.to_string()
                            disabled=busy
                            prop:value=move || thread.with(|t| t.draft.clone())
                            on:input=move |ev| thread.update(|t| t.draft = event_target_value(&ev))
                        ></textarea>
                        <div class="comment-form-footer">
                            <span class="character-count">
                                {move || thread.with(|t| t.draft.chars().count())} "/" {COMMENT_MAX_CHARS}
                            </span>
                            <button
                                type="submit"
                                disabled=move || busy() || thread.with(|t| t.draft.trim().is_empty())
                            >
                                {move || if busy() { "작성 중..." } else { "댓글 작성" }}
                            </button>
                        </div>
                    </form>
                </Show>
                <div class="comments-list">{list}</div>
            </Show>
        </div>
    }
}
