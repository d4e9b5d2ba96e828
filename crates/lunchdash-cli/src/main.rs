use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Debug, Parser)]
#[command(name = "lunchdash")]
#[command(about = "Build the school lunch review dashboard from extracted reviews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute every dashboard metric and write the stats document
    Generate(GenerateArgs),
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Reviews document to read (defaults to `<data_dir>/<user>/<user>_reviews.json`)
    #[arg(long)]
    reviews_json: Option<PathBuf>,
    /// Where to write the dashboard (defaults to `<data_dir>/dashboard_stats.json`)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Number of top posts by engagement
    #[arg(long)]
    top_posts: Option<usize>,
    /// Number of entries in the food frequency list
    #[arg(long)]
    food_limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = lunchdash_core::load_app_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::Generate(args)) => generate::run_generate(&config, &args),
        None => generate::run_generate(&config, &GenerateArgs::default()),
    }
}
