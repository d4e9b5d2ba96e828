//! Shared data model, input loading, and configuration for lunchdash.

pub mod app_config;
pub mod config;
pub mod error;
pub mod load;
pub mod posts;
pub mod reviews;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, LoadError};
pub use load::{load_dataset, load_posts, load_reviews, posts_path_for, Dataset};
pub use posts::{Post, PostVideo, PostsFile};
pub use reviews::{FoodItem, Review, ReviewStats, ReviewsFile};
