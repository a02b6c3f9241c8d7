//! Signup page with inline duplicate checks for user id and email.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::net::api;
use crate::state::form::GENERAL_ERROR;
use crate::state::signup_flow::SignupFlow;
use crate::util::dialog::alert;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Check {
    UserId,
    Email,
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let flow = RwSignal::new(SignupFlow::default());
    let busy = move || flow.with(|f| f.form.busy);

    let field = move |name: &'static str| Signal::derive(move || flow.with(|f| f.form.field(name)));
    let error = move |name: &'static str| Signal::derive(move || flow.with(|f| f.form.error(name)));
    let setter = move |name: &'static str| Callback::new(move |value: String| flow.update(|f| f.set_field(name, value)));

    let run_check = move |check: Check| {
        let value = match check {
            Check::UserId => flow.try_update(SignupFlow::begin_id_check),
            Check::Email => flow.try_update(SignupFlow::begin_email_check),
        };
        let Some(value) = value.flatten() else {
            return;
        };
        spawn_local(async move {
            match check {
                Check::UserId => {
                    let result = api::check_id(&value).await;
                    flow.update(|f| f.apply_id_check(result));
                }
                Check::Email => {
                    let result = api::check_email(&value).await;
                    flow.update(|f| f.apply_email_check(result));
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(SignupFlow::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::signup(&request).await;
            if let Err(e) = &result {
                warn!("signup failed: {e}");
            }
            if flow.try_update(|f| f.apply_signup(result)).unwrap_or(false) {
                alert("회원가입이 완료되었습니다. 로그인해주세요.");
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    let checked_input = move |check: Check, name: &'static str, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        let checked = move || {
            flow.with(|f| match check {
                Check::UserId => f.id_checked,
                Check::Email => f.email_checked,
            })
        };
        let value = field(name);
        let err = error(name);
        let on_input = setter(name);
        view! {
            <div class="form-group">
                <label for=name>{label}</label>
                <div class="input-with-button">
                    <input
                        type=input_type
                        id=name
                        name=name
                        placeholder=placeholder
                        class:error=move || err.get().is_some()
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="check-button"
                        disabled=move || busy() || checked()
                        on:click=move |_| run_check(check)
                    >
                        {move || if checked() { "확인됨" } else { "중복확인" }}
                    </button>
                </div>
                {move || err.get().map(|message| view! { <span class="error-message">{message}</span> })}
            </div>
        }
    };

    view! {
        <div class="auth-form-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"회원가입"</h2>
                {move || flow.with(|f| f.form.error(GENERAL_ERROR)).map(|message| view! {
                    <div class="error-message general-error">{message}</div>
                })}

                {checked_input(Check::UserId, "userId", "아이디", "text", "4-20자의 영문과 숫자")}
                {checked_input(Check::Email, "email", "이메일", "email", "이메일을 입력하세요")}
                <TextField name="password" label="비밀번호" input_type="password" placeholder="8자 이상, 영문+숫자+특수문자"
                    value=field("password") error=error("password") on_input=setter("password")/>
                <TextField name="passwordConfirm" label="비밀번호 확인" input_type="password"
                    placeholder="비밀번호를 다시 입력하세요"
                    value=field("passwordConfirm") error=error("passwordConfirm") on_input=setter("passwordConfirm")/>
                <TextField name="name" label="이름" placeholder="2-10자의 한글 또는 영문"
                    value=field("name") error=error("name") on_input=setter("name")/>

                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled=busy>
                        {move || if busy() { "가입 중..." } else { "회원가입" }}
                    </button>
                </div>

                <div class="auth-links">
                    <span>"이미 계정이 있으신가요? "</span>
                    <a href="/login" class="link-button">"로그인"</a>
                </div>
            </form>
        </div>
    }
}
