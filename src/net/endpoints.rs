//! Request descriptors for every backend endpoint.
//!
//! Paths and query parameters are built here as plain data so they can be
//! unit tested without a browser. `api` turns an [`Endpoint`] into a
//! `gloo-net` request; query values are percent-encoded there.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// How a non-2xx response is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorBody {
    /// Any non-2xx status is an `ApiError::Status`.
    Reject,
    /// Business failures arrive as 4xx with a JSON envelope; decode it like a success.
    Decode,
}

/// A fully described backend call (without its JSON body).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    /// User id sent as `Authorization: Bearer <id>`.
    pub bearer: Option<String>,
    pub error_body: ErrorBody,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), bearer: None, error_body: ErrorBody::Reject }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    fn param_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    fn bearer(mut self, user_id: &str) -> Self {
        self.bearer = Some(user_id.to_owned());
        self
    }

    fn decode_errors(mut self) -> Self {
        self.error_body = ErrorBody::Decode;
        self
    }

    /// Header value for the bearer user id, if any.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(|id| format!("Bearer {id}"))
    }
}

// =============================================================
// Auth
// =============================================================

pub fn check_id() -> Endpoint {
    Endpoint::post("/auth/check-id").decode_errors()
}

pub fn check_password() -> Endpoint {
    Endpoint::post("/auth/check-password").decode_errors()
}

pub fn login() -> Endpoint {
    Endpoint::post("/auth/login").decode_errors()
}

pub fn check_email() -> Endpoint {
    Endpoint::post("/auth/check-email").decode_errors()
}

pub fn signup() -> Endpoint {
    Endpoint::post("/auth/signup").decode_errors()
}

// =============================================================
// Posts
// =============================================================

/// Query for the paged post list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub page: u32,
    pub size: u32,
    /// Category code; `None` lists every category.
    pub category: Option<String>,
    /// Viewer id so the backend can fill in `isScrapped`.
    pub user_id: Option<String>,
}

pub fn list_posts(query: &PostQuery) -> Endpoint {
    Endpoint::get("/posts")
        .param("page", query.page)
        .param("size", query.size)
        .param_opt("category", query.category.as_deref())
        .param_opt("userId", query.user_id.as_deref())
}

pub fn search_posts(keyword: &str, page: u32, size: u32, user_id: Option<&str>) -> Endpoint {
    Endpoint::get("/posts/search")
        .param("keyword", keyword)
        .param("page", page)
        .param("size", size)
        .param_opt("userId", user_id)
}

pub fn post_detail(post_id: i64, user_id: Option<&str>) -> Endpoint {
    Endpoint::post(format!("/posts/{post_id}")).param_opt("userId", user_id)
}

pub fn create_post(user_id: &str) -> Endpoint {
    Endpoint::post("/posts").param("userId", user_id).decode_errors()
}

pub fn update_post(post_id: i64, user_id: &str) -> Endpoint {
    Endpoint::put(format!("/posts/{post_id}")).param("userId", user_id).decode_errors()
}

pub fn delete_post(post_id: i64, user_id: &str) -> Endpoint {
    Endpoint::delete(format!("/posts/{post_id}")).param("userId", user_id)
}

pub fn toggle_scrap(post_id: i64, user_id: &str) -> Endpoint {
    Endpoint::post(format!("/posts/{post_id}/scrap")).param("userId", user_id).decode_errors()
}

pub fn scrapped_post_ids(user_id: &str) -> Endpoint {
    Endpoint::get("/posts/scrapped/ids").param("userId", user_id)
}

pub fn scrapped_posts(user_id: &str, page: u32, size: u32) -> Endpoint {
    Endpoint::get("/posts/scrapped").param("userId", user_id).param("page", page).param("size", size)
}

pub fn user_posts(user_id: &str, page: u32, size: u32) -> Endpoint {
    Endpoint::get(format!("/posts/user/{user_id}")).param("page", page).param("size", size)
}

// =============================================================
// Comments
// =============================================================

pub fn list_comments(post_id: i64) -> Endpoint {
    Endpoint::get(format!("/api/comments/{post_id}"))
}

pub fn create_comment(post_id: i64, user_id: &str) -> Endpoint {
    Endpoint::post(format!("/api/comments/{post_id}")).bearer(user_id).decode_errors()
}

pub fn update_comment(comment_id: i64, user_id: &str) -> Endpoint {
    Endpoint::put(format!("/api/comments/{comment_id}")).bearer(user_id).decode_errors()
}

pub fn delete_comment(comment_id: i64, user_id: &str) -> Endpoint {
    Endpoint::delete(format!("/api/comments/{comment_id}")).bearer(user_id).decode_errors()
}

pub fn user_comments(user_id: &str) -> Endpoint {
    Endpoint::get(format!("/api/comments/user/{user_id}"))
}

// =============================================================
// Files
// =============================================================

pub fn upload_file() -> Endpoint {
    Endpoint::post("/files/upload")
}

pub fn delete_file(file_url: &str) -> Endpoint {
    Endpoint::delete("/files/delete").param("fileUrl", file_url)
}

// =============================================================
// Users
// =============================================================

pub fn user_info(user_id: &str) -> Endpoint {
    Endpoint::post("/user/info").param("userId", user_id)
}

pub fn update_user(user_id: &str) -> Endpoint {
    Endpoint::put("/user/update").param("userId", user_id).decode_errors()
}

pub fn delete_user(user_id: &str) -> Endpoint {
    Endpoint::delete("/user/delete").param("userId", user_id)
}

pub fn find_user_id(email: &str) -> Endpoint {
    Endpoint::post("/user/find-id").param("email", email)
}

pub fn check_current_password(user_id: &str, password: &str) -> Endpoint {
    Endpoint::post("/user/check-password").param("userId", user_id).param("password", password)
}

pub fn reset_password(user_id: &str, email: &str, new_password: &str) -> Endpoint {
    Endpoint::post("/user/reset-password")
        .param("userId", user_id)
        .param("email", email)
        .param("newPassword", new_password)
}
