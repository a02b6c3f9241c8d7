//! REST API helpers for communicating with the board backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `ApiError::Unavailable` so pages and
//! the session store can be compiled and tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Each helper issues exactly one request and returns the decoded body or an
//! `ApiError`. No retries and no custom timeouts; callers log and convert
//! failures into on-screen text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::endpoints::{self, Endpoint, PostQuery};
#[cfg(any(test, feature = "csr"))]
use super::endpoints::ErrorBody;
use super::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::error::status_message;
use super::types::{
    CommentListResponse, FileUploadResponse, FindIdResponse, LoginResponse, Page, PasswordMatchResponse,
    PostDetail, PostMutationResponse, PostRequest, PostSummary, ScrapResponse, SignupRequest, StatusResponse,
    UpdateUserRequest, UserCommentListResponse, UserInfo,
};
use crate::state::session::AuthGateway;

/// Page size used by the home list and the scrap list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Page size used for a user's own posts.
pub const USER_POSTS_PAGE_SIZE: u32 = 20;

/// Decode a response body according to the endpoint's error policy.
///
/// An empty 2xx body decodes as `{}` so bodiless deletes still yield a value.
/// `ErrorBody::Decode` endpoints also decode 4xx bodies; 5xx is always an error.
#[cfg(any(test, feature = "csr"))]
fn decode_response<T: DeserializeOwned>(status: u16, text: &str, error_body: ErrorBody) -> Result<T, ApiError> {
    let ok = (200..300).contains(&status);
    let rejected = (400..500).contains(&status);
    let text = if ok && text.trim().is_empty() { "{}" } else { text };
    if ok || (rejected && error_body == ErrorBody::Decode) {
        match serde_json::from_str::<T>(text) {
            Ok(value) => return Ok(value),
            Err(e) if ok => return Err(ApiError::Decode(e.to_string())),
            Err(_) => {}
        }
    }
    Err(ApiError::Status { status, message: status_message(text) })
}

#[cfg(feature = "csr")]
fn request_builder(endpoint: &Endpoint) -> gloo_net::http::RequestBuilder {
    use super::endpoints::Method;
    use gloo_net::http::Request;

    let url = crate::config::ApiConfig::from_env().url(&endpoint.path);
    let mut builder = match endpoint.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    if !endpoint.query.is_empty() {
        builder = builder.query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    if let Some(auth) = endpoint.authorization() {
        builder = builder.header("Authorization", &auth);
    }
    builder
}

#[cfg(feature = "csr")]
async fn read_response<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    endpoint: &Endpoint,
) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let result = decode_response(status, &text, endpoint.error_body);
    if let Err(e) = &result {
        log::error!("{} {} failed: {e}", method_name(endpoint), endpoint.path);
    }
    result
}

#[cfg(any(test, feature = "csr"))]
fn method_name(endpoint: &Endpoint) -> &'static str {
    use super::endpoints::Method;
    match endpoint.method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
    }
}

/// Send `endpoint` with an optional JSON body and decode the JSON response.
async fn call<T: DeserializeOwned>(endpoint: Endpoint, body: Option<serde_json::Value>) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = request_builder(&endpoint);
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| {
            log::error!("{} {} unreachable: {e}", method_name(&endpoint), endpoint.path);
            ApiError::Network(e.to_string())
        })?;
        read_response(resp, &endpoint).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Auth gateway
// =============================================================

/// `POST /auth/check-id`: `success` means the id is still free.
pub async fn check_id(user_id: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::check_id(), Some(json!({ "userId": user_id }))).await
}

/// `POST /auth/check-password`.
pub async fn check_password(user_id: &str, password: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::check_password(), Some(json!({ "userId": user_id, "password": password }))).await
}

/// `POST /auth/login`.
pub async fn login(user_id: &str, password: &str) -> Result<LoginResponse, ApiError> {
    call(endpoints::login(), Some(json!({ "userId": user_id, "password": password }))).await
}

/// `POST /auth/check-email`: `success` means the email is unused.
pub async fn check_email(email: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::check_email(), Some(json!({ "email": email }))).await
}

/// `POST /auth/signup`.
pub async fn signup(request: &SignupRequest) -> Result<StatusResponse, ApiError> {
    call(endpoints::signup(), Some(to_body(request)?)).await
}

/// [`AuthGateway`] backed by the live REST backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestGateway;

impl AuthGateway for RestGateway {
    async fn login(&self, user_id: &str, password: &str) -> Result<LoginResponse, ApiError> {
        login(user_id, password).await
    }
}

// =============================================================
// Posts
// =============================================================

pub async fn fetch_posts(query: &PostQuery) -> Result<Page<PostSummary>, ApiError> {
    call(endpoints::list_posts(query), None).await
}

pub async fn search_posts(
    keyword: &str,
    page: u32,
    size: u32,
    user_id: Option<&str>,
) -> Result<Page<PostSummary>, ApiError> {
    call(endpoints::search_posts(keyword, page, size, user_id), None).await
}

/// Fetch one post. The backend counts a view for each call.
pub async fn fetch_post_detail(post_id: i64, user_id: Option<&str>) -> Result<PostDetail, ApiError> {
    call(endpoints::post_detail(post_id, user_id), None).await
}

pub async fn create_post(request: &PostRequest, user_id: &str) -> Result<PostMutationResponse, ApiError> {
    call(endpoints::create_post(user_id), Some(to_body(request)?)).await
}

pub async fn update_post(
    post_id: i64,
    request: &PostRequest,
    user_id: &str,
) -> Result<PostMutationResponse, ApiError> {
    call(endpoints::update_post(post_id, user_id), Some(to_body(request)?)).await
}

pub async fn delete_post(post_id: i64, user_id: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::delete_post(post_id, user_id), None).await
}

pub async fn toggle_scrap(post_id: i64, user_id: &str) -> Result<ScrapResponse, ApiError> {
    call(endpoints::toggle_scrap(post_id, user_id), None).await
}

pub async fn fetch_scrapped_post_ids(user_id: &str) -> Result<Vec<i64>, ApiError> {
    call(endpoints::scrapped_post_ids(user_id), None).await
}

pub async fn fetch_scrapped_posts(user_id: &str, page: u32, size: u32) -> Result<Page<PostSummary>, ApiError> {
    call(endpoints::scrapped_posts(user_id, page, size), None).await
}

pub async fn fetch_user_posts(user_id: &str, page: u32, size: u32) -> Result<Page<PostSummary>, ApiError> {
    call(endpoints::user_posts(user_id, page, size), None).await
}

// =============================================================
// Comments
// =============================================================

pub async fn fetch_comments(post_id: i64) -> Result<CommentListResponse, ApiError> {
    call(endpoints::list_comments(post_id), None).await
}

pub async fn create_comment(post_id: i64, content: &str, user_id: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::create_comment(post_id, user_id), Some(json!({ "content": content }))).await
}

pub async fn update_comment(comment_id: i64, content: &str, user_id: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::update_comment(comment_id, user_id), Some(json!({ "content": content }))).await
}

pub async fn delete_comment(comment_id: i64, user_id: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::delete_comment(comment_id, user_id), None).await
}

pub async fn fetch_user_comments(user_id: &str) -> Result<UserCommentListResponse, ApiError> {
    call(endpoints::user_comments(user_id), None).await
}

// =============================================================
// Files
// =============================================================

/// Upload one file as multipart field `file`.
#[cfg(feature = "csr")]
pub async fn upload_file(file: &web_sys::File) -> Result<FileUploadResponse, ApiError> {
    let endpoint = endpoints::upload_file();
    let form = web_sys::FormData::new().map_err(|_| ApiError::Unavailable)?;
    form.append_with_blob("file", file).map_err(|_| ApiError::Unavailable)?;
    let request = request_builder(&endpoint).body(form).map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp, &endpoint).await
}

/// Non-browser builds have no file handles to upload.
#[cfg(not(feature = "csr"))]
pub async fn upload_file(file_name: &str) -> Result<FileUploadResponse, ApiError> {
    let _ = (endpoints::upload_file(), file_name);
    Err(ApiError::Unavailable)
}

pub async fn delete_file(file_url: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::delete_file(file_url), None).await
}

// =============================================================
// Users
// =============================================================

pub async fn fetch_user_info(user_id: &str) -> Result<UserInfo, ApiError> {
    call(endpoints::user_info(user_id), None).await
}

pub async fn update_user_info(request: &UpdateUserRequest, user_id: &str) -> Result<UserInfo, ApiError> {
    call(endpoints::update_user(user_id), Some(to_body(request)?)).await
}

pub async fn delete_user(user_id: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::delete_user(user_id), None).await
}

pub async fn find_user_id(email: &str) -> Result<FindIdResponse, ApiError> {
    call(endpoints::find_user_id(email), None).await
}

/// Ask whether `password` is the user's current password.
pub async fn check_current_password(user_id: &str, password: &str) -> Result<PasswordMatchResponse, ApiError> {
    call(endpoints::check_current_password(user_id, password), None).await
}

pub async fn reset_password(user_id: &str, email: &str, new_password: &str) -> Result<StatusResponse, ApiError> {
    call(endpoints::reset_password(user_id, email, new_password), None).await
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
