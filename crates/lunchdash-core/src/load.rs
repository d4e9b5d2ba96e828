//! Reads the reviews and posts documents from disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::posts::PostsFile;
use crate::reviews::ReviewsFile;

/// Everything one dashboard run reads, held immutable for the whole pass.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub reviews: ReviewsFile,
    pub posts: PostsFile,
}

/// Location of the posts document next to a reviews document.
///
/// `data/u/u_reviews.json` with username `u` gives `data/u/u_posts.json`.
#[must_use]
pub fn posts_path_for(reviews_path: &Path, username: &str) -> PathBuf {
    let dir = reviews_path.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{username}_posts.json"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(LoadError::InputMissing {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Malformed {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the reviews document.
///
/// # Errors
///
/// Returns [`LoadError::InputMissing`] if the file does not exist, and
/// [`LoadError::Malformed`] if any record fails to decode.
pub fn load_reviews(path: &Path) -> Result<ReviewsFile, LoadError> {
    read_json(path)
}

/// Load the posts document.
///
/// # Errors
///
/// Same as [`load_reviews`].
pub fn load_posts(path: &Path) -> Result<PostsFile, LoadError> {
    read_json(path)
}

/// Load the reviews document and the posts document that sits beside it.
///
/// # Errors
///
/// Returns [`LoadError`] if either document is missing or malformed.
pub fn load_dataset(reviews_path: &Path) -> Result<Dataset, LoadError> {
    tracing::info!(path = %reviews_path.display(), "loading reviews");
    let reviews = load_reviews(reviews_path)?;

    let posts_path = posts_path_for(reviews_path, &reviews.username);
    tracing::info!(path = %posts_path.display(), "loading posts");
    let posts = load_posts(&posts_path)?;

    tracing::info!(
        username = %reviews.username,
        reviews = reviews.reviews.len(),
        posts = posts.posts.len(),
        "dataset loaded"
    );

    Ok(Dataset { reviews, posts })
}
