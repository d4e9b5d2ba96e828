use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes an explicit JSON `null` into the type's default.
///
/// Paired with `#[serde(default)]` this gives "absent or null means default".
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Engagement counters as reported by the video platform.
///
/// Missing counters are zero, never "unknown".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    #[serde(
        rename = "diggCount",
        alias = "likes",
        default,
        deserialize_with = "null_as_default"
    )]
    pub likes: u64,
    #[serde(
        rename = "playCount",
        alias = "views",
        default,
        deserialize_with = "null_as_default"
    )]
    pub views: u64,
    #[serde(
        rename = "commentCount",
        alias = "comments",
        default,
        deserialize_with = "null_as_default"
    )]
    pub comments: u64,
    #[serde(
        rename = "shareCount",
        alias = "shares",
        default,
        deserialize_with = "null_as_default"
    )]
    pub shares: u64,
}

impl ReviewStats {
    /// Likes + comments + shares. Views are deliberately left out.
    #[must_use]
    pub fn engagement_score(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
    }
}

/// One scored food mentioned in a review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` means "not rated" and is excluded from every average.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Any further fields emitted by the extraction step, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FoodItem {
    /// The name, or `""` when absent.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The category tag, falling back to `default` when absent.
    #[must_use]
    pub fn category_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.category.as_deref().unwrap_or(default)
    }
}

/// One reviewed video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub day_number: Option<i64>,
    /// Calendar date assigned upstream; used only when `create_time` is unusable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: ReviewStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub foods: Vec<FoodItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub needs_review: bool,
}

impl Review {
    /// The creation timestamp, treating `0` the same as absent.
    #[must_use]
    pub fn timestamp(&self) -> Option<i64> {
        self.create_time.filter(|&t| t != 0)
    }

    /// Timestamp used for ordering: absent sorts as epoch 0.
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        self.timestamp().unwrap_or(0)
    }

    #[must_use]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Scores of the rated food items, in order.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.foods.iter().filter_map(|f| f.score)
    }
}

/// The reviews document: `{ "username": ..., "reviews": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsFile {
    #[serde(default = "default_username", deserialize_with = "null_as_unknown")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
}

fn default_username() -> String {
    "unknown".to_string()
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_username))
}
