//! The `generate` command: load, compute, write, summarize.

use anyhow::Context;
use lunchdash_core::AppConfig;
use lunchdash_metrics::{
    build_dashboard, write_dashboard, DashboardDocument, DashboardOptions, SystemClock,
};

use crate::GenerateArgs;

/// Merge command-line overrides over the environment config.
pub(crate) fn options_for(config: &AppConfig, args: &GenerateArgs) -> DashboardOptions {
    DashboardOptions {
        timezone: config.timezone,
        timezone_label: config.timezone_label.clone(),
        top_posts_limit: args.top_posts.unwrap_or(config.top_posts_limit),
        food_frequency_limit: args.food_limit.unwrap_or(config.food_frequency_limit),
        ..DashboardOptions::default()
    }
}

/// Generate the dashboard document and print a short summary.
///
/// # Errors
///
/// Returns an error if the reviews document is missing or malformed, or the
/// output cannot be written. No output file is produced in either case.
pub(crate) fn run_generate(config: &AppConfig, args: &GenerateArgs) -> anyhow::Result<()> {
    let reviews_path = args
        .reviews_json
        .clone()
        .unwrap_or_else(|| config.default_reviews_path());
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.default_output_path());

    let dataset = lunchdash_core::load_dataset(&reviews_path)
        .with_context(|| format!("failed to load reviews from {}", reviews_path.display()))?;

    let options = options_for(config, args);
    let document = build_dashboard(&dataset, &options, &SystemClock);

    write_dashboard(&document, &output_path)
        .with_context(|| format!("failed to write dashboard to {}", output_path.display()))?;

    println!("{}", summary(&document));
    println!("Saved to {}", output_path.display());
    Ok(())
}

pub(crate) fn summary(document: &DashboardDocument) -> String {
    let overall = &document.overall_metrics;
    [
        "Dashboard summary".to_string(),
        format!("  Total reviews: {}", overall.total_reviews),
        format!("  School lunch reviews: {}", overall.school_lunch_reviews),
        format!("  Food items: {}", overall.total_food_items),
        format!("  Overall average: {}/10", overall.overall_average_rating),
        format!("  Key phrases: {}", document.key_phrases.len()),
        format!("  Time series points: {}", document.time_series.len()),
    ]
    .join("\n")
}
