//! Assembles every calculator's output into the dashboard document and
//! persists it.

use std::path::Path;

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use lunchdash_core::Dataset;

use crate::categories::category_stats;
use crate::clock::Clock;
use crate::context::RenderContext;
use crate::error::MetricsError;
use crate::filter::ContentFilter;
use crate::frequency::{food_frequency, DEFAULT_FOOD_FREQUENCY_LIMIT};
use crate::latest::latest_review;
use crate::overall::overall_metrics;
use crate::phrases::key_phrases;
use crate::posts_table::posts_table;
use crate::time_series::cumulative_series;
use crate::top_posts::{top_posts, DEFAULT_TOP_POSTS_LIMIT};
use crate::types::DashboardDocument;

/// Knobs for one dashboard run.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub timezone: Tz,
    /// Suffix of `generated_at_formatted`, e.g. `"PT"`.
    pub timezone_label: String,
    pub top_posts_limit: usize,
    pub food_frequency_limit: usize,
    pub filter: ContentFilter,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Los_Angeles,
            timezone_label: "PT".to_string(),
            top_posts_limit: DEFAULT_TOP_POSTS_LIMIT,
            food_frequency_limit: DEFAULT_FOOD_FREQUENCY_LIMIT,
            filter: ContentFilter::default(),
        }
    }
}

/// Run every calculator over `dataset` and assemble the document.
///
/// The clock is read once, for the generation stamp.
#[must_use]
pub fn build_dashboard(
    dataset: &Dataset,
    options: &DashboardOptions,
    clock: &dyn Clock,
) -> DashboardDocument {
    let username = dataset.reviews.username.clone();
    let reviews = dataset.reviews.reviews.as_slice();
    let ctx = RenderContext::new(username.clone(), options.timezone);
    let filter = &options.filter;

    tracing::info!(reviews = reviews.len(), username = %username, "processing reviews");

    tracing::info!("calculating overall metrics");
    let overall_metrics = overall_metrics(reviews, filter);

    tracing::info!("calculating category statistics");
    let category_stats = category_stats(reviews);

    tracing::info!("generating time series data");
    let time_series = cumulative_series(reviews, &ctx);

    tracing::info!(limit = options.top_posts_limit, "finding top posts");
    let top_posts = top_posts(reviews, filter, &ctx, options.top_posts_limit);

    tracing::info!("extracting key phrases");
    let key_phrases = key_phrases(reviews);

    tracing::info!("preparing posts table");
    let posts_table = posts_table(reviews, filter, &ctx);

    tracing::info!(limit = options.food_frequency_limit, "calculating food frequency");
    let food_frequency = food_frequency(reviews, options.food_frequency_limit);

    tracing::info!("getting latest review");
    let latest_review = latest_review(reviews, &dataset.posts, filter, &ctx);

    let now = clock.now();
    DashboardDocument {
        generated_at: iso_timestamp(now, options.timezone),
        generated_at_formatted: human_timestamp(now, options.timezone, &options.timezone_label),
        username,
        overall_metrics,
        category_stats,
        time_series,
        top_posts,
        key_phrases,
        posts_table,
        food_frequency,
        latest_review,
    }
}

/// RFC 3339 / ISO-8601 rendering of `now` in `tz`.
#[must_use]
pub fn iso_timestamp(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).to_rfc3339()
}

/// `"Nov. 23, 2025, at 8 a.m. PT"`: abbreviated month, 12-hour clock, no minutes.
#[must_use]
pub fn human_timestamp(now: DateTime<Utc>, tz: Tz, label: &str) -> String {
    let local = now.with_timezone(&tz);
    format!(
        "{}. {}, {}, at {} {label}",
        local.format("%b"),
        local.day(),
        local.year(),
        twelve_hour(local.hour()),
    )
}

fn twelve_hour(hour: u32) -> String {
    match hour {
        0 => "12 a.m.".to_string(),
        1..=11 => format!("{hour} a.m."),
        12 => "12 p.m.".to_string(),
        _ => format!("{} p.m.", hour - 12),
    }
}

/// Serialize `document` as indented UTF-8 JSON and replace `path` with it.
///
/// Parent directories are created. The bytes go to a sibling temp file that
/// is renamed over `path`, so a failed write leaves any previous file intact.
///
/// # Errors
///
/// Returns [`MetricsError`] if serialization or any filesystem step fails.
pub fn write_dashboard(document: &DashboardDocument, path: &Path) -> Result<(), MetricsError> {
    let write_err = |source: std::io::Error| MetricsError::Write {
        path: path.display().to_string(),
        source,
    };

    let body = serde_json::to_string_pretty(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = path.with_extension(format!("json.tmp.{}", std::process::id()));
    std::fs::write(&tmp_path, body.as_bytes()).map_err(write_err)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }

    tracing::info!(path = %path.display(), bytes = body.len(), "dashboard written");
    Ok(())
}
