//! Two-step login page: check the user id, then the password, then log in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step transitions and error text live in `state::login_flow`; this page
//! only dispatches requests and hands their results back. A successful login
//! goes through the shared `SessionStore`, so every subscriber (header,
//! guards) sees the new session before navigation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::find_account_modal::FindAccountModal;
use crate::components::form_field::TextField;
use crate::net::api::{self, RestGateway};
use crate::state::form::GENERAL_ERROR;
use crate::state::login_flow::{LoginFlow, LoginStep};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::default());
    let show_find = RwSignal::new(false);

    let busy = Signal::derive(move || flow.with(|f| f.form.busy));
    let on_password_step = move || flow.with(|f| f.step == LoginStep::CollectingPassword);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !flow.try_update(LoginFlow::begin_step).unwrap_or(false) {
            return;
        }
        let (step, user_id, password) = flow.with_untracked(|f| (f.step, f.user_id(), f.password()));
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match step {
                LoginStep::CollectingId => {
                    let result = api::check_id(&user_id).await;
                    flow.update(|f| f.apply_id_check(result));
                }
                LoginStep::CollectingPassword => {
                    let result = api::check_password(&user_id, &password).await;
                    if !flow.try_update(|f| f.apply_password_check(result)).unwrap_or(false) {
                        return;
                    }
                    let outcome = session.login(&RestGateway, &user_id, &password).await;
                    flow.update(|f| f.apply_login(&outcome));
                    if outcome.success {
                        navigate("/", NavigateOptions::default());
                    }
                }
            }
        });
    };

    let general_error = move || flow.with(|f| f.form.error(GENERAL_ERROR));

    view! {
        <div class="auth-form-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"로그인"</h2>
                {move || general_error().map(|message| view! {
                    <div class="error-message general-error">{message}</div>
                })}

                <TextField
                    name="userId"
                    label="아이디"
                    placeholder="아이디를 입력하세요"
                    value=Signal::derive(move || flow.with(|f| f.form.field("userId")))
                    error=Signal::derive(move || flow.with(|f| f.form.error("userId")))
                    disabled=Signal::derive(on_password_step)
                    on_input=Callback::new(move |value: String| flow.update(|f| f.form.set_field("userId", value)))
                />

                <Show when=on_password_step>
                    <TextField
                        name="password"
                        label="비밀번호"
                        input_type="password"
                        placeholder="비밀번호를 입력하세요"
                        value=Signal::derive(move || flow.with(|f| f.form.field("password")))
                        error=Signal::derive(move || flow.with(|f| f.form.error("password")))
                        on_input=Callback::new(move |value: String| flow.update(|f| f.form.set_field("password", value)))
                    />
                </Show>

                <div class="form-actions">
                    <Show
                        when=on_password_step
                        fallback=move || view! {
                            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                                {move || if busy.get() { "확인 중..." } else { "다음" }}
                            </button>
                        }
                    >
                        <div class="button-group">
                            <button type="button" class="btn-secondary" on:click=move |_| flow.update(LoginFlow::back)>
                                "뒤로"
                            </button>
                            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                                {move || if busy.get() { "로그인 중..." } else { "로그인" }}
                            </button>
                        </div>
                    </Show>
                </div>

                <div class="auth-links">
                    <span>"계정이 없으신가요? "</span>
                    <a href="/signup" class="link-button">"회원가입"</a>
                    <span class="action-separator">"|"</span>
                    <button type="button" class="link-button" on:click=move |_| show_find.set(true)>
                        "아이디/비밀번호 찾기"
                    </button>
                </div>
            </form>
            <FindAccountModal open=show_find/>
        </div>
    }
}
