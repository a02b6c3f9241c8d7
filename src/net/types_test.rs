use super::*;

// =============================================================
// Category
// =============================================================

#[test]
fn category_parse_accepts_codes_and_labels() {
    assert_eq!(Category::parse("NOTICE"), Some(Category::Notice));
    assert_eq!(Category::parse("공지"), Some(Category::Notice));
    assert_eq!(Category::parse(" DEV "), Some(Category::Dev));
    assert_eq!(Category::parse("전체"), None);
    assert_eq!(Category::parse("notice"), None);
}

#[test]
fn category_serializes_as_uppercase_code() {
    let json = serde_json::to_string(&Category::Qna).unwrap();
    assert_eq!(json, "\"QNA\"");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn status_response_success_flags() {
    let missing: StatusResponse = serde_json::from_str("{}").unwrap();
    assert!(!missing.is_success());
    assert!(missing.is_not_rejected());

    let rejected: StatusResponse = serde_json::from_str(r#"{"success":false,"message":"X"}"#).unwrap();
    assert!(!rejected.is_not_rejected());
    assert_eq!(rejected.message_or("fallback"), "X");
}

#[test]
fn status_response_blank_message_uses_fallback() {
    let resp = StatusResponse { success: Some(false), message: Some("  ".to_owned()) };
    assert_eq!(resp.message_or("이미 사용 중인 아이디입니다."), "이미 사용 중인 아이디입니다.");
}

#[test]
fn login_response_reads_camel_case_profile() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"success":true,"message":"로그인 성공","token":"t","userId":"abc","name":"A","email":"a@a.com"}"#,
    )
    .unwrap();
    assert_eq!(resp.user_id.as_deref(), Some("abc"));
    assert_eq!(resp.email.as_deref(), Some("a@a.com"));
}

#[test]
fn page_without_content_is_empty() {
    let page: Page<PostSummary> = serde_json::from_str(r#"{"totalElements":0}"#).unwrap();
    assert!(page.content.is_empty());
}

// =============================================================
// Posts
// =============================================================

#[test]
fn post_summary_accepts_lombok_scrapped_field() {
    let post: PostSummary = serde_json::from_str(
        r#"{"id":7,"title":"t","authorName":"kim","category":"DEV","viewCount":null,"createdAt":"2024-05-01T10:00:00","scrapped":true}"#,
    )
    .unwrap();
    assert!(post.is_scrapped);
    assert_eq!(post.view_count, None);
}

#[test]
fn post_summary_accepts_is_scrapped_field() {
    let post: PostSummary = serde_json::from_str(r#"{"id":1,"isScrapped":true}"#).unwrap();
    assert!(post.is_scrapped);
}

#[test]
fn post_request_serializes_file_urls_camel_case() {
    let req = PostRequest {
        title: "t".to_owned(),
        content: "c".to_owned(),
        category: "DEV".to_owned(),
        file_urls: vec!["/uploads/a.png".to_owned()],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["fileUrls"][0], "/uploads/a.png");
}

#[test]
fn scrap_response_reads_count() {
    let resp: ScrapResponse =
        serde_json::from_str(r#"{"isScrapped":false,"scrapCount":3,"message":"스크랩이 취소되었습니다."}"#).unwrap();
    assert_eq!(resp.is_scrapped, Some(false));
    assert_eq!(resp.scrap_count, Some(3));
}

#[test]
fn scrap_response_without_state_falls_back_to_message() {
    let resp: ScrapResponse = serde_json::from_str(r#"{"message":"존재하지 않는 게시글입니다."}"#).unwrap();
    assert_eq!(resp.is_scrapped, None);
    assert_eq!(resp.message_or("스크랩 처리에 실패했습니다."), "존재하지 않는 게시글입니다.");

    let silent = ScrapResponse { message: Some(" ".to_owned()), ..ScrapResponse::default() };
    assert_eq!(silent.message_or("스크랩 처리에 실패했습니다."), "스크랩 처리에 실패했습니다.");
}

// =============================================================
// Comments / users
// =============================================================

#[test]
fn comment_list_defaults_to_empty() {
    let resp: CommentListResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(resp.comments.is_empty());
}

#[test]
fn user_info_found_requires_id() {
    let found: UserInfo = serde_json::from_str(r#"{"id":3,"userId":"abc","email":"a@a.com","name":"A"}"#).unwrap();
    assert!(found.is_found());
    let missing: UserInfo = serde_json::from_str(r#"{"message":"사용자를 찾을 수 없습니다."}"#).unwrap();
    assert!(!missing.is_found());
}

#[test]
fn password_match_defaults_false() {
    let resp: PasswordMatchResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.is_match);
}
