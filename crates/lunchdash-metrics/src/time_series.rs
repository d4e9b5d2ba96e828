//! Running engagement totals for the growth chart.

use lunchdash_core::Review;

use crate::context::RenderContext;
use crate::types::TimeSeriesPoint;

/// One point per timestamped review, oldest first, with running sums.
///
/// Reviews without a timestamp are left out of the series; reviews sharing a
/// timestamp keep their input order. Covers every review, filtered or not.
#[must_use]
pub fn cumulative_series(reviews: &[Review], ctx: &RenderContext) -> Vec<TimeSeriesPoint> {
    let mut dated: Vec<(i64, &Review)> = reviews
        .iter()
        .filter_map(|r| r.timestamp().map(|ts| (ts, r)))
        .collect();

    let skipped = reviews.len() - dated.len();
    if skipped > 0 {
        tracing::debug!(skipped, "reviews without create_time left out of time series");
    }

    dated.sort_by_key(|(ts, _)| *ts);

    let (mut likes, mut views, mut comments, mut shares) = (0_u64, 0_u64, 0_u64, 0_u64);
    dated
        .into_iter()
        .map(|(timestamp, review)| {
            likes = likes.saturating_add(review.stats.likes);
            views = views.saturating_add(review.stats.views);
            comments = comments.saturating_add(review.stats.comments);
            shares = shares.saturating_add(review.stats.shares);
            TimeSeriesPoint {
                date: ctx.date(timestamp).unwrap_or_default(),
                timestamp,
                day_number: review.day_number,
                cumulative_likes: likes,
                cumulative_views: views,
                cumulative_comments: comments,
                cumulative_shares: shares,
            }
        })
        .collect()
}
