use super::*;

fn comment(id: i64, created: &str, updated: Option<&str>) -> Comment {
    Comment {
        id,
        content: format!("comment {id}"),
        created_at: created.to_owned(),
        updated_at: updated.map(str::to_owned),
        ..Comment::default()
    }
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_gives_done_notice() {
    let ok = Ok(StatusResponse { success: Some(true), message: None });
    assert_eq!(CommentAction::Create.outcome(ok), Ok("댓글이 작성되었습니다."));
}

#[test]
fn missing_success_flag_is_a_failure() {
    assert_eq!(CommentAction::Delete.outcome(Ok(StatusResponse::default())), Err("댓글 삭제에 실패했습니다.".to_owned()));
}

#[test]
fn rejection_uses_backend_message() {
    let rejected = Ok(StatusResponse { success: Some(false), message: Some("권한이 없습니다.".to_owned()) });
    assert_eq!(CommentAction::Update.outcome(rejected), Err("권한이 없습니다.".to_owned()));
}

#[test]
fn status_error_prefers_server_message() {
    let err = Err(ApiError::Status { status: 400, message: "본인 댓글만 삭제할 수 있습니다.".to_owned() });
    assert_eq!(CommentAction::Delete.outcome(err), Err("본인 댓글만 삭제할 수 있습니다.".to_owned()));
    let err = Err(ApiError::Network("offline".to_owned()));
    assert_eq!(CommentAction::Update.outcome(err), Err("댓글 수정 중 오류가 발생했습니다.".to_owned()));
}

// =============================================================
// Thread
// =============================================================

#[test]
fn list_replaced_only_on_success() {
    let mut thread = CommentThread { loading: true, ..CommentThread::default() };
    thread.apply_list(Ok(CommentListResponse {
        success: Some(true),
        comments: vec![comment(1, "a", None)],
        ..CommentListResponse::default()
    }));
    assert_eq!(thread.comments.len(), 1);
    assert!(!thread.loading);

    thread.apply_list(Err(ApiError::Unavailable));
    assert_eq!(thread.comments.len(), 1);
}

#[test]
fn edit_lifecycle() {
    let mut thread = CommentThread::default();
    let c = comment(5, "a", None);
    thread.start_edit(&c);
    assert!(thread.is_editing(5));
    assert!(!thread.is_editing(6));
    assert_eq!(thread.editing.as_ref().map(|(_, text)| text.as_str()), Some("comment 5"));
    thread.cancel_edit();
    assert!(!thread.is_editing(5));
}

#[test]
fn edited_marker() {
    assert!(!is_edited(&comment(1, "2024-01-01T00:00:00", None)));
    assert!(!is_edited(&comment(1, "2024-01-01T00:00:00", Some("2024-01-01T00:00:00"))));
    assert!(is_edited(&comment(1, "2024-01-01T00:00:00", Some("2024-01-02T00:00:00"))));
}
