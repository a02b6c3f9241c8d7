//! Post create and edit page.
//!
//! Mounted at `/create-post` and `/edit-post/:postId` behind `ProtectedRoute`.
//! Edit mode loads the post first and sends anyone but its author back to
//! `/mypage`.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::file_uploader::FileUploader;
use crate::components::form_field::TextField;
use crate::components::status::LoadingSpinner;
use crate::net::api;
use crate::net::types::Category;
use crate::state::auth::AuthState;
use crate::state::post_editor::{EditorMode, POST_LOAD_FAILED, PostEditor};
use crate::util::dialog::{alert, confirm};
use crate::util::files::AttachmentList;
use crate::util::validation::CONTENT_MAX_CHARS;

#[component]
pub fn PostEditorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let mode = EditorMode::from_param(params.with_untracked(|p| p.get("postId")).as_deref());
    let editor = RwSignal::new(PostEditor::new(mode));
    let attachments = RwSignal::new(AttachmentList::default());
    let busy = Signal::derive(move || editor.with(|e| e.form.busy));

    if let EditorMode::Edit(post_id) = mode {
        let viewer = auth.with_untracked(AuthState::user_id).unwrap_or_default();
        let navigate = navigate.clone();
        spawn_local(async move {
            let rejected = match api::fetch_post_detail(post_id, Some(viewer.as_str())).await {
                Ok(post) => match editor.try_update(|e| e.load(&post, &viewer)) {
                    Some(Ok(urls)) => {
                        attachments.set(AttachmentList::from_urls(&urls));
                        None
                    }
                    Some(Err(message)) => Some(message),
                    None => None,
                },
                Err(e) => {
                    warn!("post {post_id} load for edit failed: {e}");
                    Some(POST_LOAD_FAILED)
                }
            };
            if let Some(message) = rejected {
                alert(message);
                navigate("/mypage", NavigateOptions::default());
            }
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
                return;
            };
            let urls = attachments.with_untracked(AttachmentList::urls);
            let Some(request) = editor.try_update(|e| e.begin_submit(urls)).flatten() else {
                return;
            };
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = match mode {
                    EditorMode::Create => api::create_post(&request, &user_id).await,
                    EditorMode::Edit(post_id) => api::update_post(post_id, &request, &user_id).await,
                };
                if let Err(e) = &result {
                    warn!("post save failed: {e}");
                }
                if editor.try_update(|e| e.apply_submit(result)).flatten().is_some() {
                    alert(mode.saved_message());
                    navigate(&mode.exit_path(), NavigateOptions::default());
                }
            });
        }
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        if confirm(mode.cancel_confirm()) {
            navigate(&mode.exit_path(), NavigateOptions::default());
        }
    };

    let field = move |name: &'static str| Signal::derive(move || editor.with(|e| e.form.field(name)));
    let error = move |name: &'static str| Signal::derive(move || editor.with(|e| e.form.error(name)));
    let setter = move |name: &'static str| Callback::new(move |value: String| editor.update(|e| e.form.set_field(name, value)));

    let category = field("category");
    let category_error = error("category");
    let content = field("content");
    let content_error = error("content");
    let set_category = setter("category");
    let set_content = setter("content");

    let form = move || {
        view! {
            <form class="post-form" on:submit=on_submit.clone()>
                {move || editor.with(|e| e.general_error()).map(|message| view! {
                    <div class="error-message general-error">{message}</div>
                })}

                <div class="form-group">
                    <label for="category">"카테고리 *"</label>
                    <select
                        id="category"
                        name="category"
                        class:error=move || category_error.get().is_some()
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.run(event_target_value(&ev))
                    >
                        <option value="">"카테고리를 선택하세요"</option>
                        {Category::ALL.into_iter().map(|c| view! {
                            <option value=c.code()>{c.label()}</option>
                        }).collect_view()}
                    </select>
                    {move || category_error.get().map(|message| view! { <span class="error-message">{message}</span> })}
                </div>

                <TextField name="title" label="제목 *" placeholder="제목을 입력하세요"
                    value=field("title") error=error("title") disabled=busy on_input=setter("title")/>

                <div class="form-group">
                    <label for="content">"내용 *"</label>
                    <textarea
                        id="content"
                        name="content"
                        rows="15"
                        placeholder="내용을 입력하세요"
                        maxlength=CONTENT_MAX_CHARS.to_string()
                        class:error=move || content_error.get().is_some()
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.run(event_target_value(&ev))
                    ></textarea>
                    <span class="char-count">
                        {move || content.with(|c| c.chars().count())} "/" {CONTENT_MAX_CHARS}
                    </span>
                    {move || content_error.get().map(|message| view! { <span class="error-message">{message}</span> })}
                </div>

                <div class="form-group">
                    <label>"첨부파일"</label>
                    <FileUploader attachments=attachments/>
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" disabled=move || busy.get() on:click=on_cancel.clone()>
                        "취소"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || match (busy.get(), mode) {
                            (true, EditorMode::Create) => "작성 중...",
                            (true, EditorMode::Edit(_)) => "수정 중...",
                            (false, EditorMode::Create) => "작성하기",
                            (false, EditorMode::Edit(_)) => "수정하기",
                        }}
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <div class="post-form-container">
            <div class="post-form-header">
                <h2>{mode.heading()}</h2>
            </div>
            <Show
                when=move || !editor.with(|e| e.loading)
                fallback=|| view! { <LoadingSpinner message="게시글을 불러오는 중..."/> }
            >
                {form()}
            </Show>
        </div>
    }
}
