//! Post create/edit form.
//!
//! The same controller backs `/create-post` and `/edit-post/:postId`. In edit
//! mode the post is loaded first and only its author may continue; the
//! category is normalised to its wire code so a label-only post still
//! selects the right option.

#[cfg(test)]
#[path = "post_editor_test.rs"]
mod post_editor_test;

use super::form::{FormState, GENERAL_ERROR};
use crate::net::error::ApiError;
use crate::net::types::{Category, PostDetail, PostMutationResponse, PostRequest, non_blank};
use crate::util::validation::FormKind;

pub const NOT_AUTHOR: &str = "게시글을 수정할 권한이 없습니다.";
pub const POST_LOAD_FAILED: &str = "게시글을 불러오는 중 오류가 발생했습니다.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(i64),
}

impl EditorMode {
    pub fn from_param(post_id: Option<&str>) -> Self {
        post_id.and_then(|id| id.parse().ok()).map_or(Self::Create, Self::Edit)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Create => "게시글 작성",
            Self::Edit(_) => "게시글 수정",
        }
    }

    pub fn cancel_confirm(self) -> &'static str {
        match self {
            Self::Create => "작성 중인 내용이 사라집니다. 정말 취소하시겠습니까?",
            Self::Edit(_) => "수정 중인 내용이 사라집니다. 정말 취소하시겠습니까?",
        }
    }

    /// Where cancel and a successful save lead.
    pub fn exit_path(self) -> String {
        match self {
            Self::Create => "/".to_owned(),
            Self::Edit(id) => format!("/post/{id}"),
        }
    }

    pub fn saved_message(self) -> &'static str {
        match self {
            Self::Create => "게시글이 성공적으로 작성되었습니다.",
            Self::Edit(_) => "게시글이 성공적으로 수정되었습니다.",
        }
    }

    fn failure_messages(self) -> (&'static str, &'static str) {
        match self {
            Self::Create => ("게시글 작성에 실패했습니다.", "게시글 작성 중 오류가 발생했습니다."),
            Self::Edit(_) => ("게시글 수정에 실패했습니다.", "게시글 수정 중 오류가 발생했습니다."),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostEditor {
    pub mode: EditorMode,
    pub form: FormState,
    /// True while an edit-mode post is being fetched.
    pub loading: bool,
}

impl PostEditor {
    pub fn new(mode: EditorMode) -> Self {
        Self {
            mode,
            form: FormState::with_fields([("category", ""), ("title", ""), ("content", "")]),
            loading: matches!(mode, EditorMode::Edit(_)),
        }
    }

    /// Fill the form from a loaded post.
    ///
    /// # Errors
    ///
    /// Returns [`NOT_AUTHOR`] when `viewer` did not write the post.
    pub fn load(&mut self, post: &PostDetail, viewer: &str) -> Result<Vec<String>, &'static str> {
        self.loading = false;
        if post.author_user_id != viewer {
            return Err(NOT_AUTHOR);
        }
        let category = Category::parse(&post.category).map_or(post.category.as_str(), |c| c.code());
        self.form.set_field("category", category);
        self.form.set_field("title", post.title.as_str());
        self.form.set_field("content", post.content.as_str());
        Ok(post.file_urls.clone())
    }

    /// Validate and build the request body. `None` means invalid or already submitting.
    pub fn begin_submit(&mut self, file_urls: Vec<String>) -> Option<PostRequest> {
        if self.form.busy || !self.form.validate(FormKind::Post) {
            return None;
        }
        self.form.begin_submit();
        Some(PostRequest {
            title: self.form.field("title").trim().to_owned(),
            content: self.form.field("content"),
            category: self.form.field("category"),
            file_urls,
        })
    }

    /// Returns the saved post id, or records a form-level error.
    pub fn apply_submit(&mut self, result: Result<PostMutationResponse, ApiError>) -> Option<i64> {
        let (rejected, errored) = self.mode.failure_messages();
        match result {
            Ok(PostMutationResponse { id: Some(id), .. }) => {
                self.form.end_submit();
                Some(id)
            }
            Ok(resp) => {
                let message = non_blank(resp.message.as_deref()).unwrap_or(rejected).to_owned();
                self.form.fail(message);
                None
            }
            Err(_) => {
                self.form.fail(errored);
                None
            }
        }
    }

    pub fn general_error(&self) -> Option<String> {
        self.form.error(GENERAL_ERROR)
    }
}
