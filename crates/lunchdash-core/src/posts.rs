use serde::{Deserialize, Serialize};

use crate::reviews::{null_as_default, ReviewStats};

/// Video media attached to a platform post. Only the thumbnails are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostVideo {
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default, rename = "dynamicCover")]
    pub dynamic_cover: Option<String>,
}

impl PostVideo {
    /// The static cover if non-empty, else the animated cover if non-empty.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.cover
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.dynamic_cover.as_deref().filter(|c| !c.is_empty()))
    }
}

/// Raw platform metadata for one post, keyed by `id` (a review's `post_id`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video: PostVideo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: ReviewStats,
}

/// The posts document: `{ "posts": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<Post>,
}

impl PostsFile {
    /// First post whose id equals `post_id`.
    #[must_use]
    pub fn find(&self, post_id: &str) -> Option<&Post> {
        self.posts
            .iter()
            .find(|p| p.id.as_deref() == Some(post_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn thumbnail_prefers_cover() {
        let video = PostVideo {
            cover: Some("https://img/cover.jpg".into()),
            dynamic_cover: Some("https://img/dyn.webp".into()),
        };
        assert_eq!(video.thumbnail_url(), Some("https://img/cover.jpg"));
    }

    #[test]
    fn thumbnail_falls_back_to_dynamic_cover_when_cover_empty() {
        let video = PostVideo {
            cover: Some(String::new()),
            dynamic_cover: Some("https://img/dyn.webp".into()),
        };
        assert_eq!(video.thumbnail_url(), Some("https://img/dyn.webp"));
    }

    #[test]
    fn thumbnail_absent_when_no_covers() {
        assert_eq!(PostVideo::default().thumbnail_url(), None);
    }

    #[test]
    fn find_matches_by_id() {
        let file: PostsFile = serde_json::from_value(json!({
            "posts": [
                { "id": "a", "stats": { "diggCount": 1 } },
                { "id": "b", "video": { "dynamicCover": "x" }, "stats": { "diggCount": 2 } }
            ]
        }))
        .unwrap();
        let post = file.find("b").unwrap();
        assert_eq!(post.stats.likes, 2);
        assert_eq!(post.video.thumbnail_url(), Some("x"));
        assert!(file.find("c").is_none());
    }
}
