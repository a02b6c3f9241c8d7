//! One row of a post list.

use leptos::prelude::*;

use crate::net::types::PostSummary;
use crate::util::format::{category_color, category_label, format_date, preview};

/// Post summary with stats. The scrap button only renders when `on_scrap` is set.
#[component]
pub fn PostCard(post: PostSummary, #[prop(optional)] on_scrap: Option<Callback<i64>>) -> impl IntoView {
    let href = format!("/post/{}", post.id);
    let label = post.category_name.clone().unwrap_or_else(|| category_label(&post.category));
    let badge_style = format!("background-color: {}", category_color(&post.category));
    let excerpt = preview(post.content.as_deref());
    let post_id = post.id;
    let scrapped = post.is_scrapped;

    view! {
        <div class="post-item">
            <div class="post-header">
                <span class="category-badge" style=badge_style>{label}</span>
                <div class="post-meta">
                    <span class="post-author">{post.author_name}</span>
                    <span class="post-date">{format_date(&post.created_at)}</span>
                </div>
            </div>
            <a href=href class="post-content">
                <h3 class="post-title">{post.title}</h3>
                <p class="post-excerpt">{excerpt}</p>
            </a>
            <div class="post-footer">
                <div class="post-stats">
                    <span class="stat">"조회 " {post.view_count.unwrap_or(0)}</span>
                    <span class="stat">"댓글 " {post.comment_count.unwrap_or(0)}</span>
                    <span class="stat">"스크랩 " {post.scrap_count.unwrap_or(0)}</span>
                </div>
                {on_scrap.map(|scrap| {
                    view! {
                        <button
                            class="scrap-button"
                            class:scrapped=scrapped
                            on:click=move |ev| {
                                ev.prevent_default();
                                scrap.run(post_id);
                            }
                        >
                            {if scrapped { "스크랩 취소" } else { "스크랩" }}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
