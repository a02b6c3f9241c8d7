use super::*;

fn filled() -> SignupFlow {
    let mut flow = SignupFlow::default();
    for (k, v) in [
        ("userId", "tester01"),
        ("email", "tester@example.com"),
        ("password", "Abcdef1!"),
        ("passwordConfirm", "Abcdef1!"),
        ("name", "홍길동"),
    ] {
        flow.set_field(k, v);
    }
    flow
}

fn success() -> Result<StatusResponse, ApiError> {
    Ok(StatusResponse { success: Some(true), message: None })
}

#[test]
fn id_check_rejects_invalid_id_before_request() {
    let mut flow = SignupFlow::default();
    flow.set_field("userId", "ab");
    assert_eq!(flow.begin_id_check(), None);
    assert_eq!(flow.form.error("userId").as_deref(), Some("아이디는 4-20자의 영문과 숫자만 사용 가능합니다."));
}

#[test]
fn successful_checks_mark_fields() {
    let mut flow = filled();
    assert_eq!(flow.begin_id_check().as_deref(), Some("tester01"));
    flow.apply_id_check(success());
    assert_eq!(flow.begin_email_check().as_deref(), Some("tester@example.com"));
    flow.apply_email_check(success());
    assert!(flow.id_checked && flow.email_checked);
}

#[test]
fn taken_id_shows_default_message() {
    let mut flow = filled();
    flow.begin_id_check();
    flow.apply_id_check(Ok(StatusResponse { success: Some(false), message: None }));
    assert!(!flow.id_checked);
    assert_eq!(flow.form.error("userId").as_deref(), Some("이미 사용 중인 아이디입니다."));
}

#[test]
fn editing_a_checked_field_resets_its_check() {
    let mut flow = filled();
    flow.begin_id_check();
    flow.apply_id_check(success());
    flow.set_field("userId", "tester02");
    assert!(!flow.id_checked);
}

#[test]
fn submit_requires_duplicate_checks() {
    let mut flow = filled();
    assert!(flow.begin_submit().is_none());
    assert_eq!(flow.form.error("userId").as_deref(), Some("아이디 중복 확인을 해주세요."));

    flow.begin_id_check();
    flow.apply_id_check(success());
    assert!(flow.begin_submit().is_none());
    assert_eq!(flow.form.error("email").as_deref(), Some("이메일 중복 확인을 해주세요."));
}

#[test]
fn submit_builds_request_when_checked() {
    let mut flow = filled();
    flow.begin_id_check();
    flow.apply_id_check(success());
    flow.begin_email_check();
    flow.apply_email_check(success());

    let request = flow.begin_submit().unwrap();
    assert_eq!(request.user_id, "tester01");
    assert_eq!(request.name, "홍길동");
    assert!(flow.form.busy);
}

#[test]
fn signup_without_success_flag_counts_as_created() {
    let mut flow = filled();
    assert!(flow.apply_signup(Ok(StatusResponse::default())));
}

#[test]
fn signup_rejection_sets_general_error() {
    let mut flow = filled();
    let created = flow.apply_signup(Ok(StatusResponse { success: Some(false), message: Some("중복".to_owned()) }));
    assert!(!created);
    assert_eq!(flow.form.error(GENERAL_ERROR).as_deref(), Some("중복"));
}
