//! Post list ordering and home-screen list state.
//!
//! DESIGN
//! ======
//! The home list pins the single most recent notice above everything else;
//! older notices are dropped from the page. The remaining posts follow in
//! descending creation time. Timestamps that fail to parse sort last.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::cmp::Reverse;

use crate::net::endpoints::PostQuery;
use crate::net::error::ApiError;
use crate::net::types::{Category, PostDetail, PostSummary, ScrapResponse};
use crate::util::format::parse_timestamp;

pub const POSTS_LOAD_FAILED: &str = "게시글을 불러오는 중 오류가 발생했습니다.";
pub const POST_NOT_LOADED: &str = "게시글을 불러오는데 실패했습니다.";

pub fn is_notice(post: &PostSummary) -> bool {
    Category::parse(&post.category) == Some(Category::Notice)
}

/// Newest notice first, then every non-notice post newest-first.
pub fn sort_posts_by_priority(posts: Vec<PostSummary>) -> Vec<PostSummary> {
    let (mut notices, mut regular): (Vec<_>, Vec<_>) = posts.into_iter().partition(is_notice);
    notices.sort_by_cached_key(|p| Reverse(parse_timestamp(&p.created_at)));
    regular.sort_by_cached_key(|p| Reverse(parse_timestamp(&p.created_at)));

    let mut sorted = Vec::with_capacity(regular.len() + 1);
    sorted.extend(notices.into_iter().next());
    sorted.extend(regular);
    sorted
}

/// Write a scrap toggle result back into the matching list row.
///
/// Returns false when the response carried no scrap state.
pub fn apply_scrap(posts: &mut [PostSummary], post_id: i64, resp: &ScrapResponse) -> bool {
    let Some(scrapped) = resp.is_scrapped else {
        return false;
    };
    if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
        post.is_scrapped = scrapped;
        post.scrap_count = Some(resp.scrap_count.unwrap_or(0));
    }
    true
}

/// Detail-page variant of [`apply_scrap`]. Without a count from the backend
/// the local count moves by one.
pub fn apply_detail_scrap(post: &mut PostDetail, resp: &ScrapResponse) -> bool {
    let Some(scrapped) = resp.is_scrapped else {
        return false;
    };
    let current = post.scrap_count.unwrap_or(0);
    let stepped = if scrapped { current + 1 } else { (current - 1).max(0) };
    post.is_scrapped = scrapped;
    post.scrap_count = Some(resp.scrap_count.unwrap_or(stepped));
    true
}

/// State behind the home screen list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostListState {
    pub posts: Vec<PostSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// `None` is the "전체" filter.
    pub category: Option<Category>,
    pub keyword: String,
    /// Ticket of the most recent load; results from older loads are ignored.
    pub latest_load: u64,
}

impl PostListState {
    pub fn query(&self, page_size: u32, user_id: Option<String>) -> PostQuery {
        PostQuery {
            page: 0,
            size: page_size,
            category: self.category.map(|c| c.code().to_owned()),
            user_id,
        }
    }

    /// Trimmed search keyword, if any.
    pub fn search_keyword(&self) -> Option<&str> {
        let keyword = self.keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    /// Start a load and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.loading = true;
        self.error = None;
        self.latest_load
    }

    /// Returns false, leaving the state alone, when a newer load has started since `ticket`.
    pub fn finish_load(&mut self, ticket: u64, posts: Vec<PostSummary>) -> bool {
        if ticket != self.latest_load {
            return false;
        }
        self.loading = false;
        self.posts = sort_posts_by_priority(posts);
        true
    }

    pub fn fail_load(&mut self, ticket: u64) -> bool {
        if ticket != self.latest_load {
            return false;
        }
        self.loading = false;
        self.posts.clear();
        self.error = Some(POSTS_LOAD_FAILED.to_owned());
        true
    }
}

/// State behind the post detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct PostDetailState {
    pub post: Option<PostDetail>,
    pub loading: bool,
    pub error: Option<String>,
    pub latest_load: u64,
}

impl Default for PostDetailState {
    fn default() -> Self {
        Self { post: None, loading: true, error: None, latest_load: 0 }
    }
}

impl PostDetailState {
    /// Start a load and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.loading = true;
        self.error = None;
        self.latest_load
    }

    /// The route parameter is not a post id.
    pub fn reject_id(&mut self) {
        self.latest_load += 1;
        self.loading = false;
        self.post = None;
        self.error = Some(POST_NOT_LOADED.to_owned());
    }

    /// Returns false when a newer load has started since `ticket`.
    pub fn apply_load(&mut self, ticket: u64, result: Result<PostDetail, ApiError>) -> bool {
        if ticket != self.latest_load {
            return false;
        }
        self.loading = false;
        match result {
            Ok(post) if post.id != 0 => self.post = Some(post),
            Ok(_) => self.error = Some(POST_NOT_LOADED.to_owned()),
            Err(_) => self.error = Some(POSTS_LOAD_FAILED.to_owned()),
        }
        true
    }
}
