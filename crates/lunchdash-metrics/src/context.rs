use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// How identifiers and timestamps are rendered for the front end.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Account handle used in video links.
    pub username: String,
    /// Zone for every calendar date in the document.
    pub timezone: Tz,
}

impl RenderContext {
    #[must_use]
    pub fn new(username: impl Into<String>, timezone: Tz) -> Self {
        Self {
            username: username.into(),
            timezone,
        }
    }

    /// Public video page for a post, `None` when the post id is unknown.
    #[must_use]
    pub fn video_url(&self, post_id: Option<&str>) -> Option<String> {
        post_id.map(|id| format!("https://www.tiktok.com/@{}/video/{id}", self.username))
    }

    /// `YYYY-MM-DD` of an epoch-seconds timestamp in the display zone.
    #[must_use]
    pub fn date(&self, timestamp: i64) -> Option<String> {
        DateTime::<Utc>::from_timestamp(timestamp, 0).map(|utc| {
            utc.with_timezone(&self.timezone)
                .format("%Y-%m-%d")
                .to_string()
        })
    }
}
