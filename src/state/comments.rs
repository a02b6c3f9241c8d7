//! Comment thread state and mutation outcomes.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::error::ApiError;
use crate::net::types::{Comment, CommentListResponse, StatusResponse};

pub const DELETE_COMMENT_CONFIRM: &str = "정말로 이 댓글을 삭제하시겠습니까?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentAction {
    Create,
    Update,
    Delete,
}

impl CommentAction {
    fn messages(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Create => ("댓글이 작성되었습니다.", "댓글 작성에 실패했습니다.", "댓글 작성 중 오류가 발생했습니다."),
            Self::Update => ("댓글이 수정되었습니다.", "댓글 수정에 실패했습니다.", "댓글 수정 중 오류가 발생했습니다."),
            Self::Delete => ("댓글이 삭제되었습니다.", "댓글 삭제에 실패했습니다.", "댓글 삭제 중 오류가 발생했습니다."),
        }
    }

    /// Map a mutation result to the notice shown to the user.
    ///
    /// # Errors
    ///
    /// `Err` carries the failure notice: the backend message when one was
    /// sent, the action's fallback otherwise.
    pub fn outcome(self, result: Result<StatusResponse, ApiError>) -> Result<&'static str, String> {
        let (done, failed, errored) = self.messages();
        match result {
            Ok(resp) if resp.is_success() => Ok(done),
            Ok(resp) => Err(resp.message_or(failed)),
            Err(err) => Err(err.user_message(errored)),
        }
    }
}

/// Comments of one post plus the inline editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
    pub loading: bool,
    pub busy: bool,
    pub draft: String,
    /// Comment being edited and its working text.
    pub editing: Option<(i64, String)>,
}

impl CommentThread {
    /// Replace the list; a response without `success` keeps the old list.
    pub fn apply_list(&mut self, result: Result<CommentListResponse, ApiError>) {
        self.loading = false;
        if let Ok(resp) = result
            && resp.success == Some(true)
        {
            self.comments = resp.comments;
        }
    }

    pub fn start_edit(&mut self, comment: &Comment) {
        self.editing = Some((comment.id, comment.content.clone()));
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, comment_id: i64) -> bool {
        self.editing.as_ref().is_some_and(|(id, _)| *id == comment_id)
    }
}

/// True when the comment was edited after creation.
pub fn is_edited(comment: &Comment) -> bool {
    comment.updated_at.as_deref().is_some_and(|u| u != comment.created_at)
}
