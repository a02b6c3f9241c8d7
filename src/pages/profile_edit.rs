//! Profile edit page at `/mypage/edit`.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::form_field::TextField;
use crate::components::status::{ErrorMessage, LoadingSpinner};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::form::GENERAL_ERROR;
use crate::state::profile_edit::{CANCEL_CONFIRM, PROFILE_SAVED, ProfileEdit};
use crate::util::dialog::{alert, confirm};

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let edit = RwSignal::new(ProfileEdit::default());
    let busy = Signal::derive(move || edit.with(|e| e.form.busy));

    let load = move || {
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            return;
        };
        edit.update(ProfileEdit::begin_load);
        spawn_local(async move {
            let result = api::fetch_user_info(&user_id).await;
            if let Err(e) = &result {
                warn!("profile load failed for {user_id}: {e}");
            }
            edit.update(|e| e.apply_load(result));
        });
    };
    load();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
                return;
            };
            let Some(submit) = edit.try_update(ProfileEdit::begin_submit).flatten() else {
                return;
            };
            let session = session.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api::update_user_info(&submit.request, &user_id).await;
                if let Err(e) = &result {
                    warn!("profile update failed for {user_id}: {e}");
                }
                let Some(update) = edit.try_update(|e| e.apply_submit(result)).flatten() else {
                    return;
                };
                session.update_profile(&update);
                if let Some(password) = submit.new_password {
                    let result = api::reset_password(&user_id, &submit.request.email, &password).await;
                    if let Err(e) = &result {
                        warn!("password change failed for {user_id}: {e}");
                    }
                    if !edit.try_update(|e| e.apply_password_change(result)).unwrap_or(false) {
                        return;
                    }
                }
                alert(PROFILE_SAVED);
                navigate("/mypage", NavigateOptions::default());
            });
        }
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        if confirm(CANCEL_CONFIRM) {
            navigate("/mypage", NavigateOptions::default());
        }
    };

    let field = move |name: &'static str| Signal::derive(move || edit.with(|e| e.form.field(name)));
    let error = move |name: &'static str| Signal::derive(move || edit.with(|e| e.form.error(name)));
    let setter = move |name: &'static str| Callback::new(move |value: String| edit.update(|e| e.form.set_field(name, value)));

    let form = move || {
        view! {
            <form class="profile-edit-form" on:submit=on_submit.clone()>
                {move || edit.with(|e| e.form.error(GENERAL_ERROR)).map(|message| view! {
                    <div class="error-message general-error">{message}</div>
                })}
                <TextField name="name" label="이름 *" placeholder="2-10자의 한글 또는 영문"
                    value=field("name") error=error("name") on_input=setter("name")/>
                <TextField name="email" label="이메일 *" input_type="email" placeholder="이메일을 입력하세요"
                    value=field("email") error=error("email") on_input=setter("email")/>

                <div class="password-section">
                    <h3>"비밀번호 변경 (선택사항)"</h3>
                    <p class="section-description">"비밀번호를 변경하지 않으려면 비워두세요."</p>
                    <TextField name="password" label="새 비밀번호" input_type="password"
                        placeholder="8자 이상, 영문+숫자+특수문자 조합"
                        value=field("password") error=error("password") on_input=setter("password")/>
                    <TextField name="passwordConfirm" label="새 비밀번호 확인" input_type="password"
                        placeholder="새 비밀번호를 다시 입력하세요"
                        value=field("passwordConfirm") error=error("passwordConfirm") on_input=setter("passwordConfirm")/>
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=on_cancel.clone()>"취소"</button>
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "저장 중..." } else { "저장" }}
                    </button>
                </div>
            </form>
        }
    };

    // Keystrokes must not rebuild the form.
    let status = Memo::new(move |_| edit.with(|e| (e.loading, e.load_error.clone())));

    let body = move || {
        let (loading, load_error) = status.get();
        if loading {
            return view! { <LoadingSpinner message="사용자 정보를 불러오는 중..."/> }.into_any();
        }
        if let Some(message) = load_error {
            return view! { <ErrorMessage message=message on_retry=Callback::new(move |()| load())/> }.into_any();
        }
        form().into_any()
    };

    view! {
        <div class="mypage-container">
            <div class="mypage-header">
                <h2>"정보 수정"</h2>
            </div>
            {body}
        </div>
    }
}
