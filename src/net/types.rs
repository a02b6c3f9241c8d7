//! Wire DTOs for the board REST backend.
//!
//! DESIGN
//! ======
//! Each endpoint gets an explicit response struct. The backend is loose about
//! optional fields (nullable counts, `isScrapped` vs `scrapped`, omitted
//! `success` flags), so those shapes are narrowed here with serde defaults and
//! aliases before any page code touches them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Post category as understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Dev,
    General,
    Qna,
    Notice,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Dev, Self::General, Self::Qna, Self::Notice];

    /// Wire code (`DEV`, `GENERAL`, `QNA`, `NOTICE`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Dev => "DEV",
            Self::General => "GENERAL",
            Self::Qna => "QNA",
            Self::Notice => "NOTICE",
        }
    }

    /// Korean display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dev => "개발",
            Self::General => "일반",
            Self::Qna => "질문",
            Self::Notice => "공지",
        }
    }

    /// Badge color.
    pub fn color(self) -> &'static str {
        match self {
            Self::Dev => "#007bff",
            Self::General => "#28a745",
            Self::Qna => "#ffc107",
            Self::Notice => "#dc3545",
        }
    }

    /// Accepts either the wire code or the Korean label.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|c| c.code() == raw || c.label() == raw)
    }
}

/// Generic `{ success, message }` envelope used by check/mutation endpoints.
///
/// `success` is optional because some endpoints omit it on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    /// Strict check: the backend explicitly said `success: true`.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// Lenient check: anything but an explicit `success: false`.
    pub fn is_not_rejected(&self) -> bool {
        self.success != Some(false)
    }

    /// Backend message, or `fallback` when absent or blank.
    pub fn message_or(&self, fallback: &str) -> String {
        non_blank(self.message.as_deref()).unwrap_or(fallback).to_owned()
    }
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Spring `Page<T>` envelope. Only the fields the client reads are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_elements: 0, total_pages: 0, number: 0, size: 0 }
    }
}

/// A post as it appears in list views.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Body preview; list endpoints may omit it.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_name: String,
    /// Category code as sent by the backend (normally `DEV`/`GENERAL`/`QNA`/`NOTICE`).
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub comment_count: Option<i64>,
    #[serde(default)]
    pub scrap_count: Option<i64>,
    /// Backend `LocalDateTime` in ISO-8601 form.
    #[serde(default)]
    pub created_at: String,
    #[serde(default, rename = "isScrapped", alias = "scrapped")]
    pub is_scrapped: bool,
}

/// Full post returned by the detail endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_user_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub scrap_count: Option<i64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub file_urls: Vec<String>,
    #[serde(default, rename = "isScrapped", alias = "scrapped")]
    pub is_scrapped: bool,
}

/// Body for create/update post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    pub file_urls: Vec<String>,
}

/// Create/update post response: the saved post on success, a message otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMutationResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /posts/{id}/scrap` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapResponse {
    #[serde(default, rename = "isScrapped", alias = "scrapped")]
    pub is_scrapped: Option<bool>,
    #[serde(default)]
    pub scrap_count: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ScrapResponse {
    /// Backend message, or `fallback` when absent or blank.
    pub fn message_or(&self, fallback: &str) -> String {
        non_blank(self.message.as_deref()).unwrap_or(fallback).to_owned()
    }
}

/// A comment under a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_user_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `GET /api/comments/{postId}` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// A comment listed on the author's mypage, with its parent post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComment {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub post_id: i64,
    #[serde(default)]
    pub post_title: String,
    #[serde(default)]
    pub created_at: String,
}

/// `GET /api/comments/user/{userId}` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentListResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub comments: Vec<UserComment>,
}

/// `POST /files/upload` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /user/info` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UserInfo {
    /// The backend signals a found user by including its numeric id.
    pub fn is_found(&self) -> bool {
        self.id.is_some()
    }
}

/// `PUT /user/update` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// `POST /user/find-id` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindIdResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /user/check-password` response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordMatchResponse {
    #[serde(default)]
    pub is_match: bool,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
