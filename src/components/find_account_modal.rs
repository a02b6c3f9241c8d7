//! Account recovery modal: find a user id by email, or reset a password.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::form_field::TextField;
use crate::net::api;
use crate::state::find_account::{FindAccountState, FindTab};

#[component]
pub fn FindAccountModal(open: RwSignal<bool>) -> impl IntoView {
    let state = RwSignal::new(FindAccountState::default());
    let busy = Signal::derive(move || state.with(|s| s.form.busy));

    let close = move || {
        if busy.get_untracked() {
            return;
        }
        open.set(false);
        state.set(FindAccountState::default());
    };

    let field = move |name: &'static str| Signal::derive(move || state.with(|s| s.form.field(name)));
    let error = move |name: &'static str| Signal::derive(move || state.with(|s| s.form.error(name)));
    let setter = move |name: &'static str| Callback::new(move |value: String| state.update(|s| s.form.set_field(name, value)));

    let on_find_id = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = state.try_update(FindAccountState::begin_find_id).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api::find_user_id(&email).await;
            if let Err(e) = &result {
                warn!("find-id failed: {e}");
            }
            state.update(|s| s.apply_find_id(result));
        });
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = state.try_update(FindAccountState::begin_reset).flatten() else {
            return;
        };
        spawn_local(async move {
            let reuse = api::check_current_password(&request.user_id, &request.new_password).await;
            if !state.try_update(|s| s.apply_reuse_check(reuse)).unwrap_or(false) {
                return;
            }
            let result = api::reset_password(&request.user_id, &request.email, &request.new_password).await;
            if let Err(e) = &result {
                warn!("password reset failed: {e}");
            }
            state.update(|s| s.apply_reset(result));
        });
    };

    let tab_button = move |tab: FindTab, label: &'static str| {
        view! {
            <button
                class="tab-button"
                class:active=move || state.with(|s| s.tab == tab)
                disabled=move || busy.get()
                on:click=move |_| state.update(|s| s.switch_tab(tab))
            >
                {label}
            </button>
        }
    };

    let notice = move || {
        state.with(|s| s.notice.clone()).map(|n| {
            view! { <div class="message" class:success=n.success class:error=!n.success>{n.text}</div> }
        })
    };

    let actions = move |idle: &'static str, working: &'static str| {
        view! {
            <div class="form-actions">
                <button type="button" class="cancel-button" disabled=move || busy.get() on:click=move |_| close()>
                    "취소"
                </button>
                <button type="submit" class="find-button" disabled=move || busy.get()>
                    {move || if busy.get() { working } else { idle }}
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>"계정 찾기"</h3>
                        <button class="modal-close" disabled=move || busy.get() on:click=move |_| close()>"×"</button>
                    </div>
                    <div class="tab-navigation">
                        {tab_button(FindTab::FindId, "아이디 찾기")}
                        {tab_button(FindTab::ResetPassword, "비밀번호 재설정")}
                    </div>
                    <Show
                        when=move || state.with(|s| s.tab == FindTab::FindId)
                        fallback=move || view! {
                            <form class="find-account-form" on:submit=on_reset>
                                <TextField name="userId" label="아이디" placeholder="아이디를 입력하세요"
                                    value=field("userId") error=error("userId") disabled=busy on_input=setter("userId")/>
                                <TextField name="email" label="이메일" input_type="email"
                                    placeholder="가입 시 사용한 이메일을 입력하세요"
                                    value=field("email") error=error("email") disabled=busy on_input=setter("email")/>
                                <TextField name="newPassword" label="새 비밀번호" input_type="password"
                                    placeholder="새 비밀번호를 입력하세요"
                                    value=field("newPassword") error=error("newPassword") disabled=busy
                                    on_input=setter("newPassword")/>
                                <TextField name="confirmPassword" label="새 비밀번호 확인" input_type="password"
                                    placeholder="새 비밀번호를 다시 입력하세요"
                                    value=field("confirmPassword") error=error("confirmPassword") disabled=busy
                                    on_input=setter("confirmPassword")/>
                                {notice}
                                {actions("비밀번호 재설정", "재설정 중...")}
                            </form>
                        }
                    >
                        <form class="find-account-form" on:submit=on_find_id>
                            <TextField name="email" label="이메일" input_type="email"
                                placeholder="가입 시 사용한 이메일을 입력하세요"
                                value=field("email") error=error("email") disabled=busy on_input=setter("email")/>
                            {notice}
                            {actions("아이디 찾기", "찾는 중...")}
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
