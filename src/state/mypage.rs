//! Mypage data: profile, authored posts and scrapped posts, loaded together.
//!
//! The three requests are issued concurrently and the load fails closed: a
//! single failure fails the whole load and nothing partial is rendered.

#[cfg(test)]
#[path = "mypage_test.rs"]
mod mypage_test;

use std::future::Future;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Page, PostSummary, UserInfo};

pub const MYPAGE_LOAD_FAILED: &str = "사용자 정보를 불러오는 중 오류가 발생했습니다.";
pub const USER_NOT_FOUND: &str = "사용자 정보를 불러오는데 실패했습니다.";
pub const DELETE_ACCOUNT_CONFIRM: &str = "정말 탈퇴하시겠습니까? 이 작업은 되돌릴 수 없습니다.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MypageData {
    pub info: UserInfo,
    pub posts: Vec<PostSummary>,
    pub scraps: Vec<PostSummary>,
}

/// Tabs below the profile card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MypageTab {
    #[default]
    Posts,
    Scraps,
    Comments,
}

impl MypageTab {
    pub const ALL: [Self; 3] = [Self::Posts, Self::Scraps, Self::Comments];

    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "내가 쓴 글",
            Self::Scraps => "스크랩",
            Self::Comments => "내 댓글",
        }
    }
}

/// Join the three fetches. An unknown user counts as a failure.
///
/// # Errors
///
/// Returns the first error any fetch produced.
pub async fn load_mypage<FI, FP, FS>(info: FI, posts: FP, scraps: FS) -> Result<MypageData, ApiError>
where
    FI: Future<Output = Result<UserInfo, ApiError>>,
    FP: Future<Output = Result<Page<PostSummary>, ApiError>>,
    FS: Future<Output = Result<Page<PostSummary>, ApiError>>,
{
    let (info, posts, scraps) = futures::try_join!(info, posts, scraps)?;
    if !info.is_found() {
        return Err(ApiError::Status { status: 404, message: info.message.unwrap_or_else(|| USER_NOT_FOUND.to_owned()) });
    }
    Ok(MypageData { info, posts: posts.content, scraps: scraps.content })
}

/// Load everything the mypage shows for `user_id`.
///
/// # Errors
///
/// Fails when any of the three requests fails.
pub async fn fetch_mypage(user_id: &str) -> Result<MypageData, ApiError> {
    load_mypage(
        api::fetch_user_info(user_id),
        api::fetch_user_posts(user_id, 0, api::USER_POSTS_PAGE_SIZE),
        api::fetch_scrapped_posts(user_id, 0, api::USER_POSTS_PAGE_SIZE),
    )
    .await
}
