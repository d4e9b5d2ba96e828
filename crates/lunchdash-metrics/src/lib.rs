//! Dashboard aggregation engine for lunchdash.
//!
//! Turns the review and post collections into one [`DashboardDocument`]:
//! overall metrics, per-category statistics, a cumulative engagement series,
//! top posts, characteristic phrases, the posts table, food frequency, and the
//! latest review. Every calculator is a pure function over the same
//! immutable input; only the assembler touches the clock or the filesystem.

pub mod categories;
pub mod clock;
pub mod context;
pub mod error;
pub mod filter;
pub mod format;
pub mod frequency;
pub mod latest;
pub mod overall;
pub mod phrases;
pub mod pipeline;
pub mod posts_table;
pub mod time_series;
pub mod top_posts;
pub mod types;

mod tally;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::RenderContext;
pub use error::MetricsError;
pub use filter::ContentFilter;
pub use pipeline::{build_dashboard, write_dashboard, DashboardOptions};
pub use types::DashboardDocument;
