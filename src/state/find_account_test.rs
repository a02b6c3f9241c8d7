use super::*;

fn reset_form() -> FindAccountState {
    FindAccountState {
        tab: FindTab::ResetPassword,
        form: FormState::with_fields([
            ("userId", "tester01"),
            ("email", "t@example.com"),
            ("newPassword", "secret1"),
            ("confirmPassword", "secret1"),
        ]),
        ..FindAccountState::default()
    }
}

// =============================================================
// Find id
// =============================================================

#[test]
fn find_id_requires_valid_email() {
    let mut state = FindAccountState::default();
    state.form.set_field("email", "nope");
    assert_eq!(state.begin_find_id(), None);
    assert!(state.form.error("email").is_some());
}

#[test]
fn found_id_is_announced() {
    let mut state = FindAccountState::default();
    state.form.set_field("email", "t@example.com");
    assert_eq!(state.begin_find_id().as_deref(), Some("t@example.com"));
    state.apply_find_id(Ok(FindIdResponse { user_id: Some("tester01".to_owned()), message: None }));
    assert_eq!(state.notice, Some(Notice { text: "아이디를 찾았습니다: tester01".to_owned(), success: true }));
    assert_eq!(state.found_user_id.as_deref(), Some("tester01"));
    assert!(!state.form.busy);
}

#[test]
fn find_id_failure_uses_server_message() {
    let mut state = FindAccountState::default();
    let err = ApiError::Status { status: 400, message: "해당 이메일로 가입된 계정이 없습니다.".to_owned() };
    state.apply_find_id(Err(err));
    let notice = state.notice.unwrap();
    assert!(!notice.success);
    assert_eq!(notice.text, "해당 이메일로 가입된 계정이 없습니다.");
}

#[test]
fn switching_tab_clears_result() {
    let mut state = FindAccountState::default();
    state.apply_find_id(Ok(FindIdResponse { user_id: Some("tester01".to_owned()), message: None }));
    state.switch_tab(FindTab::ResetPassword);
    assert_eq!(state.notice, None);
    assert_eq!(state.found_user_id, None);
}

// =============================================================
// Reset password
// =============================================================

#[test]
fn reset_rejects_short_password() {
    let mut state = reset_form();
    state.form.set_field("newPassword", "abc");
    state.form.set_field("confirmPassword", "abc");
    assert_eq!(state.begin_reset(), None);
    assert_eq!(state.form.error("newPassword").as_deref(), Some("비밀번호는 6자 이상이어야 합니다."));
}

#[test]
fn reused_password_stops_the_reset() {
    let mut state = reset_form();
    let request = state.begin_reset().unwrap();
    assert_eq!(request.new_password, "secret1");
    assert!(!state.apply_reuse_check(Ok(PasswordMatchResponse { is_match: true })));
    assert_eq!(state.notice.as_ref().map(|n| n.text.as_str()), Some(PASSWORD_REUSED));
    assert!(!state.form.busy);
}

#[test]
fn successful_reset_clears_password_fields() {
    let mut state = reset_form();
    state.begin_reset();
    assert!(state.apply_reuse_check(Ok(PasswordMatchResponse { is_match: false })));
    assert!(state.form.busy);
    state.apply_reset(Ok(StatusResponse::default()));
    assert_eq!(state.notice, Some(Notice { text: RESET_DONE.to_owned(), success: true }));
    assert_eq!(state.form.field("newPassword"), "");
    assert_eq!(state.form.field("userId"), "tester01");
}
