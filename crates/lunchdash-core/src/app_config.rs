use std::path::PathBuf;

use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub data_dir: PathBuf,
    /// Account whose reviews document is read when no path is given.
    pub username: String,
    /// Zone used for every calendar date and for the generation stamp.
    pub timezone: Tz,
    /// Suffix of the human-formatted stamp, e.g. `"PT"`.
    pub timezone_label: String,
    pub top_posts_limit: usize,
    pub food_frequency_limit: usize,
}

impl AppConfig {
    /// `<data_dir>/<username>/<username>_reviews.json`
    #[must_use]
    pub fn default_reviews_path(&self) -> PathBuf {
        self.data_dir
            .join(&self.username)
            .join(format!("{}_reviews.json", self.username))
    }

    /// `<data_dir>/dashboard_stats.json`
    #[must_use]
    pub fn default_output_path(&self) -> PathBuf {
        self.data_dir.join("dashboard_stats.json")
    }
}
