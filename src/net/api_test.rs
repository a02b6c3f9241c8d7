use super::*;
use crate::net::endpoints::Method;

// =============================================================
// decode_response
// =============================================================

#[test]
fn decodes_success_body() {
    let resp: StatusResponse = decode_response(200, r#"{"success":true}"#, ErrorBody::Reject).unwrap();
    assert!(resp.is_success());
}

#[test]
fn empty_success_body_decodes_as_empty_object() {
    let resp: StatusResponse = decode_response(204, "", ErrorBody::Reject).unwrap();
    assert_eq!(resp, StatusResponse::default());
}

#[test]
fn rejects_error_status_with_server_message() {
    let err = decode_response::<StatusResponse>(404, r#"{"message":"게시글을 찾을 수 없습니다."}"#, ErrorBody::Reject)
        .unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, message: "게시글을 찾을 수 없습니다.".to_owned() });
}

#[test]
fn decode_policy_returns_business_failure_body() {
    let resp: LoginResponse =
        decode_response(400, r#"{"success":false,"message":"비밀번호가 일치하지 않습니다."}"#, ErrorBody::Decode)
            .unwrap();
    assert_eq!(resp.success, Some(false));
    assert_eq!(resp.message.as_deref(), Some("비밀번호가 일치하지 않습니다."));
}

#[test]
fn decode_policy_still_fails_on_non_json_error() {
    let err = decode_response::<LoginResponse>(502, "Bad Gateway", ErrorBody::Decode).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, message: "Bad Gateway".to_owned() });
}

#[test]
fn decode_policy_does_not_decode_server_errors() {
    let body = r#"{"success":false,"message":"아이디 확인 중 오류가 발생했습니다."}"#;
    let err = decode_response::<StatusResponse>(500, body, ErrorBody::Decode).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: "아이디 확인 중 오류가 발생했습니다.".to_owned() });
}

#[test]
fn malformed_success_body_is_decode_error() {
    let err = decode_response::<Vec<i64>>(200, r#"{"oops":1}"#, ErrorBody::Reject).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn scrapped_ids_decode_as_plain_array() {
    let ids: Vec<i64> = decode_response(200, "[1,5,9]", ErrorBody::Reject).unwrap();
    assert_eq!(ids, vec![1, 5, 9]);
}

// =============================================================
// Native stubs
// =============================================================

#[test]
fn method_name_matches_http_verb() {
    assert_eq!(method_name(&endpoints::delete_post(1, "u")), "DELETE");
    assert_eq!(endpoints::delete_post(1, "u").method, Method::Delete);
    assert_eq!(method_name(&endpoints::login()), "POST");
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(check_id("abc"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "csr"))]
#[test]
fn rest_gateway_propagates_unavailable() {
    let result = futures::executor::block_on(RestGateway.login("abc", "pw"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
