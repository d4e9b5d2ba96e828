//! Headline numbers for the top of the dashboard.

use lunchdash_core::Review;

use crate::categories::{category_stats, favorite_category, DEFAULT_CATEGORY};
use crate::filter::ContentFilter;
use crate::format::{mean, round_half_even};
use crate::types::{OrderedMap, OverallMetrics};

/// Compute the overall metrics.
///
/// Only `school_lunch_reviews` honours the content filter; every other field
/// covers the full review collection.
#[must_use]
pub fn overall_metrics(reviews: &[Review], filter: &ContentFilter) -> OverallMetrics {
    let school_lunch_reviews = filter.school_lunch(reviews).count();
    let total_food_items = reviews.iter().map(|r| r.foods.len()).sum();

    let scores: Vec<f64> = reviews.iter().flat_map(Review::scores).collect();
    let overall_average_rating = mean(&scores).map_or(0.0, |avg| round_half_even(avg, 2));

    let mut category_counts = OrderedMap::new();
    for food in reviews.iter().flat_map(|r| &r.foods) {
        *category_counts.get_or_insert_with(food.category_or(DEFAULT_CATEGORY), || 0) += 1;
    }

    OverallMetrics {
        total_reviews: reviews.len(),
        school_lunch_reviews,
        total_food_items,
        overall_average_rating,
        favorite_category: favorite_category(&category_stats(reviews)),
        category_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunchdash_core::FoodItem;

    fn food(category: Option<&str>, score: Option<f64>) -> FoodItem {
        FoodItem {
            score,
            category: category.map(str::to_string),
            ..FoodItem::default()
        }
    }

    fn review(description: &str, foods: Vec<FoodItem>) -> Review {
        Review {
            description: Some(description.to_string()),
            foods,
            ..Review::default()
        }
    }

    #[test]
    fn empty_collection_yields_zero_sentinel() {
        let metrics = overall_metrics(&[], &ContentFilter::default());
        assert_eq!(metrics.total_reviews, 0);
        assert_eq!(metrics.school_lunch_reviews, 0);
        assert_eq!(metrics.total_food_items, 0);
        assert!(metrics.overall_average_rating.abs() < f64::EPSILON);
        assert!(metrics.favorite_category.is_none());
        assert!(metrics.category_counts.is_empty());
    }

    #[test]
    fn counts_cover_all_reviews_but_school_lunch_is_filtered() {
        let reviews = vec![
            review("lunch day 1", vec![food(Some("entree"), Some(8.0))]),
            review(
                "Texas Roadhouse rolls",
                vec![food(Some("bread"), Some(10.0)), food(None, None)],
            ),
        ];
        let metrics = overall_metrics(&reviews, &ContentFilter::default());
        assert_eq!(metrics.total_reviews, 2);
        assert_eq!(metrics.school_lunch_reviews, 1);
        assert_eq!(metrics.total_food_items, 3);
        assert!((metrics.overall_average_rating - 9.0).abs() < f64::EPSILON);
        assert_eq!(metrics.favorite_category.as_deref(), Some("bread"));
    }

    #[test]
    fn category_counts_include_unscored_items() {
        let reviews = vec![review(
            "lunch",
            vec![food(Some("side"), None), food(Some("side"), Some(3.0)), food(None, None)],
        )];
        let metrics = overall_metrics(&reviews, &ContentFilter::default());
        assert_eq!(metrics.category_counts.get("side"), Some(&2));
        assert_eq!(metrics.category_counts.get("other"), Some(&1));
    }

    #[test]
    fn average_ignores_unscored_items() {
        let reviews = vec![review(
            "lunch",
            vec![food(None, Some(8.0)), food(None, None), food(None, Some(6.0))],
        )];
        let metrics = overall_metrics(&reviews, &ContentFilter::default());
        assert!((metrics.overall_average_rating - 7.0).abs() < f64::EPSILON);
    }
}
