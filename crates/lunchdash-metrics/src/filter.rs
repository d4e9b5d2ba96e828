//! Off-topic exclusion for the "school lunch" rollups.
//!
//! Overall metrics' school-lunch count, top posts, the posts table and the
//! latest review only see reviews this filter keeps. The time series, the
//! category statistics, key phrases and food frequency see everything.

use lunchdash_core::Review;

/// Description fragments (matched against the lower-cased description).
const OFF_TOPIC_MARKERS: &[&str] = &["texas roadhouse", "texasroadhouse"];

/// Post ids known to be off-topic regardless of description text.
const OFF_TOPIC_POST_IDS: &[&str] = &["7556759729863724301"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFilter {
    markers: Vec<String>,
    post_ids: Vec<String>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(
            OFF_TOPIC_MARKERS.iter().map(|s| (*s).to_string()).collect(),
            OFF_TOPIC_POST_IDS.iter().map(|s| (*s).to_string()).collect(),
        )
    }
}

impl ContentFilter {
    /// Markers are lower-cased on construction.
    #[must_use]
    pub fn new(markers: Vec<String>, post_ids: Vec<String>) -> Self {
        Self {
            markers: markers.into_iter().map(|m| m.to_lowercase()).collect(),
            post_ids,
        }
    }

    #[must_use]
    pub fn is_off_topic(&self, review: &Review) -> bool {
        if let Some(id) = review.post_id.as_deref() {
            if self.post_ids.iter().any(|known| known == id) {
                return true;
            }
        }
        let description = review.description_or_empty().to_lowercase();
        self.markers.iter().any(|m| description.contains(m.as_str()))
    }

    #[must_use]
    pub fn is_school_lunch(&self, review: &Review) -> bool {
        !self.is_off_topic(review)
    }

    /// The filtered set, in input order.
    pub fn school_lunch<'a>(&'a self, reviews: &'a [Review]) -> impl Iterator<Item = &'a Review> + 'a {
        reviews.iter().filter(move |r| self.is_school_lunch(r))
    }
}
