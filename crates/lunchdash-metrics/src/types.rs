//! Shapes of the dashboard document consumed by the static front end.

use lunchdash_core::FoodItem;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// String-keyed map that serializes in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable access to `key`, inserting `make()` at the end if absent.
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let existing = self.0.iter().position(|(k, _)| k == key);
        let slot = match existing {
            Some(pos) => pos,
            None => {
                self.0.push((key.to_string(), make()));
                self.0.len() - 1
            }
        };
        &mut self.0[slot].1
    }

    /// Replace the value under `key`, or append it.
    pub fn insert(&mut self, key: &str, value: V) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallMetrics {
    pub total_reviews: usize,
    pub school_lunch_reviews: usize,
    pub total_food_items: usize,
    /// `0` when nothing is scored.
    pub overall_average_rating: f64,
    pub favorite_category: Option<String>,
    pub category_counts: OrderedMap<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub average_rating: f64,
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub timestamp: i64,
    pub day_number: Option<i64>,
    pub cumulative_likes: u64,
    pub cumulative_views: u64,
    pub cumulative_comments: u64,
    pub cumulative_shares: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPost {
    pub post_id: Option<String>,
    pub day_number: Option<i64>,
    pub date: Option<String>,
    pub timestamp: Option<i64>,
    pub engagement_score: u64,
    pub likes: u64,
    pub likes_formatted: String,
    pub views: u64,
    pub views_formatted: String,
    pub comments: u64,
    pub comments_formatted: String,
    pub shares: u64,
    pub average_rating: Option<f64>,
    pub food_count: usize,
    pub tiktok_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableFood {
    pub name: String,
    pub score: Option<f64>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsTableRow {
    pub post_id: Option<String>,
    pub day_number: Option<i64>,
    pub date: Option<String>,
    pub timestamp: Option<i64>,
    pub average_rating: Option<f64>,
    pub food_count: usize,
    pub foods: Vec<TableFood>,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub shares: u64,
    pub tiktok_url: Option<String>,
    pub needs_review: bool,
    /// 1-based chronological position within the filtered set.
    pub review_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodFrequency {
    pub name: String,
    pub count: usize,
}

/// Engagement counters of the latest post, raw and formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    pub likes_formatted: String,
    pub comments_formatted: String,
    pub shares_formatted: String,
    pub views_formatted: String,
}

impl Engagement {
    #[must_use]
    pub fn new(likes: u64, comments: u64, shares: u64, views: u64) -> Self {
        use crate::format::format_number;
        Self {
            likes,
            comments,
            shares,
            views,
            likes_formatted: format_number(likes),
            comments_formatted: format_number(comments),
            shares_formatted: format_number(shares),
            views_formatted: format_number(views),
        }
    }
}

impl Default for Engagement {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestReview {
    pub post_id: Option<String>,
    pub day_number: Option<i64>,
    pub review_number: usize,
    pub date: String,
    pub foods: Vec<FoodItem>,
    pub average_rating: f64,
    pub thumbnail_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub engagement: Engagement,
}

/// The single artifact written each run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDocument {
    /// ISO-8601 in the display zone.
    pub generated_at: String,
    /// e.g. `"Nov. 23, 2025, at 8 a.m. PT"`.
    pub generated_at_formatted: String,
    pub username: String,
    pub overall_metrics: OverallMetrics,
    pub category_stats: OrderedMap<CategoryStats>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub top_posts: Vec<TopPost>,
    pub key_phrases: Vec<String>,
    pub posts_table: Vec<PostsTableRow>,
    pub food_frequency: Vec<FoodFrequency>,
    #[serde(serialize_with = "empty_object_when_none")]
    pub latest_review: Option<LatestReview>,
}

#[allow(clippy::ref_option)]
fn empty_object_when_none<S: Serializer>(
    value: &Option<LatestReview>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(latest) => latest.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
