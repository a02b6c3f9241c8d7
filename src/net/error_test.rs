use super::*;

#[test]
fn status_message_prefers_json_message_field() {
    let body = r#"{"success":false,"message":"이미 사용 중인 아이디입니다."}"#;
    assert_eq!(status_message(body), "이미 사용 중인 아이디입니다.");
}

#[test]
fn status_message_falls_back_to_raw_body() {
    assert_eq!(status_message("  Internal Server Error\n"), "Internal Server Error");
}

#[test]
fn user_message_uses_server_text_for_status_errors() {
    let err = ApiError::Status { status: 400, message: "잘못된 요청".to_owned() };
    assert_eq!(err.user_message("fallback"), "잘못된 요청");
}

#[test]
fn user_message_uses_fallback_for_network_errors() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("댓글 작성 중 오류가 발생했습니다."), "댓글 작성 중 오류가 발생했습니다.");
}

#[test]
fn user_message_ignores_empty_status_body() {
    let err = ApiError::Status { status: 500, message: String::new() };
    assert_eq!(err.user_message("fb"), "fb");
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 404, message: "missing".to_owned() };
    assert_eq!(err.to_string(), "request failed with status 404: missing");
}
