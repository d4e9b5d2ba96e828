//! Per-category score statistics.

use lunchdash_core::Review;

use crate::format::{mean, round_half_even};
use crate::types::{CategoryStats, OrderedMap};

/// Category assumed when a food item carries none.
pub const DEFAULT_CATEGORY: &str = "other";

/// Mean, count, min and max of scored items per category, over all reviews.
///
/// Categories appear in the order their first scored item is seen. A category
/// with no scored items is omitted entirely.
#[must_use]
pub fn category_stats(reviews: &[Review]) -> OrderedMap<CategoryStats> {
    let mut grouped: OrderedMap<Vec<f64>> = OrderedMap::new();
    for food in reviews.iter().flat_map(|r| &r.foods) {
        if let Some(score) = food.score {
            grouped
                .get_or_insert_with(food.category_or(DEFAULT_CATEGORY), Vec::new)
                .push(score);
        }
    }

    let mut stats = OrderedMap::new();
    for (category, scores) in grouped.iter() {
        let Some(average) = mean(scores) else {
            continue;
        };
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        stats.insert(
            category,
            CategoryStats {
                average_rating: round_half_even(average, 2),
                count: scores.len(),
                min,
                max,
            },
        );
    }
    stats
}

/// Category with the highest average rating.
///
/// Ties go to the category that comes first in `stats` iteration order, i.e.
/// the one whose first scored item appeared earliest.
#[must_use]
pub fn favorite_category(stats: &OrderedMap<CategoryStats>) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for (category, entry) in stats.iter() {
        match best {
            Some((_, top)) if entry.average_rating <= top => {}
            _ => best = Some((category, entry.average_rating)),
        }
    }
    best.map(|(category, _)| category.to_string())
}
