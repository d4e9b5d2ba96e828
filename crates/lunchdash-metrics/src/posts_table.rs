//! Every school-lunch post, newest first, for the browsable table.

use std::cmp::Reverse;

use lunchdash_core::Review;

use crate::context::RenderContext;
use crate::filter::ContentFilter;
use crate::format::{mean, round_half_even, sentence_case};
use crate::types::{PostsTableRow, TableFood};

/// Category shown for a table food item that has none.
const TABLE_DEFAULT_CATEGORY: &str = "unknown";

/// 1-based chronological position of each review, indexed like `reviews`.
///
/// Reviews are ordered by timestamp (absent counts as epoch 0) with ties in
/// input order, so the numbering only depends on the timestamps.
pub(crate) fn review_numbers(reviews: &[&Review]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..reviews.len()).collect();
    order.sort_by_key(|&i| reviews[i].sort_key());

    let mut numbers = vec![0; reviews.len()];
    for (position, &index) in order.iter().enumerate() {
        numbers[index] = position + 1;
    }
    numbers
}

/// Build the posts table.
///
/// Rows carry their chronological `review_number` but are emitted most
/// recent first.
#[must_use]
pub fn posts_table(
    reviews: &[Review],
    filter: &ContentFilter,
    ctx: &RenderContext,
) -> Vec<PostsTableRow> {
    let school_lunch: Vec<&Review> = filter.school_lunch(reviews).collect();
    let numbers = review_numbers(&school_lunch);

    let mut rows: Vec<PostsTableRow> = school_lunch
        .iter()
        .zip(numbers)
        .map(|(review, number)| to_row(review, number, ctx))
        .collect();

    rows.sort_by_key(|row| Reverse(row.timestamp.unwrap_or(0)));
    rows
}

fn to_row(review: &Review, review_number: usize, ctx: &RenderContext) -> PostsTableRow {
    let scores: Vec<f64> = review.scores().collect();

    let foods = review
        .foods
        .iter()
        .filter(|f| !f.name_or_empty().is_empty())
        .map(|f| TableFood {
            name: sentence_case(f.name_or_empty()),
            score: f.score,
            category: f.category_or(TABLE_DEFAULT_CATEGORY).to_string(),
        })
        .collect();

    PostsTableRow {
        post_id: review.post_id.clone(),
        day_number: review.day_number,
        date: review.timestamp().and_then(|ts| ctx.date(ts)),
        timestamp: review.create_time,
        average_rating: mean(&scores).map(|avg| round_half_even(avg, 2)),
        food_count: review.foods.len(),
        foods,
        likes: review.stats.likes,
        views: review.stats.views,
        comments: review.stats.comments,
        shares: review.stats.shares,
        tiktok_url: ctx.video_url(review.post_id.as_deref()),
        needs_review: review.needs_review,
        review_number,
    }
}

#[cfg(test)]
#[path = "posts_table_test.rs"]
mod tests;
