//! How often each food shows up across all reviews.

use lunchdash_core::Review;

use crate::format::title_case;
use crate::tally::Tally;
use crate::types::FoodFrequency;

/// Default number of foods returned by [`food_frequency`].
pub const DEFAULT_FOOD_FREQUENCY_LIMIT: usize = 10;

/// Placeholder the extraction step uses for an unidentified item.
const UNKNOWN_FOOD: &str = "unknown food";

/// Count foods by lower-cased, trimmed name; most frequent first.
#[must_use]
pub fn food_frequency(reviews: &[Review], limit: usize) -> Vec<FoodFrequency> {
    let mut tally = Tally::default();
    for food in reviews.iter().flat_map(|r| &r.foods) {
        let name = food.name_or_empty().trim().to_lowercase();
        if !name.is_empty() && name != UNKNOWN_FOOD {
            tally.add(&name);
        }
    }

    tally
        .most_common(limit)
        .into_iter()
        .map(|(name, count)| FoodFrequency {
            name: title_case(&name),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunchdash_core::FoodItem;

    fn review(names: &[Option<&str>]) -> Review {
        Review {
            foods: names
                .iter()
                .map(|n| FoodItem {
                    name: n.map(str::to_string),
                    ..FoodItem::default()
                })
                .collect(),
            ..Review::default()
        }
    }

    #[test]
    fn normalizes_and_counts() {
        let reviews = vec![
            review(&[Some("Chicken Nuggets"), Some("corn")]),
            review(&[Some("  chicken nuggets "), Some("Unknown Food"), None, Some("")]),
        ];
        let freq = food_frequency(&reviews, 10);
        assert_eq!(
            freq,
            vec![
                FoodFrequency {
                    name: "Chicken Nuggets".into(),
                    count: 2
                },
                FoodFrequency {
                    name: "Corn".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn respects_limit_with_first_seen_ties() {
        let reviews = vec![review(&[Some("tacos"), Some("pizza"), Some("salad")])];
        let names: Vec<String> = food_frequency(&reviews, 2)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["Tacos", "Pizza"]);
    }
}
