//! Most engaging school-lunch posts.

use lunchdash_core::Review;

use crate::context::RenderContext;
use crate::filter::ContentFilter;
use crate::format::{format_number, mean, round_half_even};
use crate::types::TopPost;

/// Default number of posts returned by [`top_posts`].
pub const DEFAULT_TOP_POSTS_LIMIT: usize = 6;

/// Rank filtered reviews by likes + comments + shares, highest first.
///
/// Equal scores keep input order. At most `limit` posts are returned.
#[must_use]
pub fn top_posts(
    reviews: &[Review],
    filter: &ContentFilter,
    ctx: &RenderContext,
    limit: usize,
) -> Vec<TopPost> {
    let mut posts: Vec<TopPost> = filter
        .school_lunch(reviews)
        .map(|review| to_top_post(review, ctx))
        .collect();

    posts.sort_by(|a, b| b.engagement_score.cmp(&a.engagement_score));
    posts.truncate(limit);
    posts
}

fn to_top_post(review: &Review, ctx: &RenderContext) -> TopPost {
    let stats = review.stats;
    let scores: Vec<f64> = review.scores().collect();
    let url = ctx.video_url(review.post_id.as_deref());

    TopPost {
        post_id: review.post_id.clone(),
        day_number: review.day_number,
        date: review.timestamp().and_then(|ts| ctx.date(ts)),
        timestamp: review.create_time,
        engagement_score: stats.engagement_score(),
        likes: stats.likes,
        likes_formatted: format_number(stats.likes),
        views: stats.views,
        views_formatted: format_number(stats.views),
        comments: stats.comments,
        comments_formatted: format_number(stats.comments),
        shares: stats.shares,
        average_rating: mean(&scores).map(|avg| round_half_even(avg, 2)),
        food_count: review.foods.len(),
        tiktok_url: url.clone(),
        thumbnail_url: url,
    }
}
