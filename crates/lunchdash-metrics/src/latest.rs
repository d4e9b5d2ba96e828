//! The "latest review" hero card.

use lunchdash_core::{FoodItem, PostsFile, Review};

use crate::context::RenderContext;
use crate::filter::ContentFilter;
use crate::format::{mean, round_half_even, sentence_case};
use crate::posts_table::review_numbers;
use crate::types::{Engagement, LatestReview};

/// Project the most recent school-lunch review, enriched from its post.
///
/// Returns `None` when the filtered set is empty. Among equal timestamps the
/// first in input order wins; a review without a timestamp only wins when
/// nothing else has one. Food items are copied with names in sentence case;
/// the input is left untouched.
#[must_use]
pub fn latest_review(
    reviews: &[Review],
    posts: &PostsFile,
    filter: &ContentFilter,
    ctx: &RenderContext,
) -> Option<LatestReview> {
    let school_lunch: Vec<&Review> = filter.school_lunch(reviews).collect();

    let mut newest: Option<usize> = None;
    for (index, review) in school_lunch.iter().enumerate() {
        match newest {
            Some(best) if review.sort_key() <= school_lunch[best].sort_key() => {}
            _ => newest = Some(index),
        }
    }
    let index = newest?;
    let latest = school_lunch[index];
    let review_number = review_numbers(&school_lunch)[index];

    let post = latest.post_id.as_deref().and_then(|id| posts.find(id));
    if post.is_none() {
        tracing::warn!(
            post_id = latest.post_id.as_deref().unwrap_or("<none>"),
            "no post metadata for latest review; using zero engagement"
        );
    }

    let thumbnail_url = post.and_then(|p| p.video.thumbnail_url()).map(str::to_string);
    let engagement = post.map_or_else(Engagement::default, |p| {
        Engagement::new(p.stats.likes, p.stats.comments, p.stats.shares, p.stats.views)
    });

    let foods: Vec<FoodItem> = latest
        .foods
        .iter()
        .map(|food| FoodItem {
            name: Some(sentence_case(food.name_or_empty())),
            ..food.clone()
        })
        .collect();

    let scores: Vec<f64> = latest.scores().collect();
    let average_rating = mean(&scores).map_or(0.0, |avg| round_half_even(avg, 1));

    let date = latest
        .timestamp()
        .and_then(|ts| ctx.date(ts))
        .or_else(|| latest.date.clone())
        .unwrap_or_default();

    Some(LatestReview {
        post_id: latest.post_id.clone(),
        day_number: latest.day_number,
        review_number,
        date,
        foods,
        average_rating,
        thumbnail_url,
        tiktok_url: ctx.video_url(latest.post_id.as_deref()),
        engagement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunchdash_core::{Post, PostVideo, ReviewStats};

    fn ctx() -> RenderContext {
        RenderContext::new("davis_big_dawg", chrono_tz::UTC)
    }

    fn review(id: &str, create_time: Option<i64>) -> Review {
        Review {
            post_id: Some(id.to_string()),
            create_time,
            description: Some("lunch".into()),
            ..Review::default()
        }
    }

    fn post(id: &str, cover: Option<&str>, likes: u64) -> Post {
        Post {
            id: Some(id.to_string()),
            video: PostVideo {
                cover: cover.map(str::to_string),
                dynamic_cover: Some("https://img/dynamic.webp".into()),
            },
            stats: ReviewStats {
                likes,
                views: 2_300_000,
                comments: 12,
                shares: 3,
            },
        }
    }

    #[test]
    fn empty_filtered_set_yields_none() {
        let mut steak = review("steak", Some(10));
        steak.description = Some("Texas Roadhouse".into());
        let result = latest_review(&[steak], &PostsFile::default(), &ContentFilter::default(), &ctx());
        assert!(result.is_none());
    }

    #[test]
    fn picks_newest_and_numbers_chronologically() {
        let reviews = vec![review("mid", Some(200)), review("new", Some(300)), review("old", Some(100))];
        let posts = PostsFile {
            posts: vec![post("new", Some("https://img/cover.jpg"), 1_500)],
        };
        let latest = latest_review(&reviews, &posts, &ContentFilter::default(), &ctx()).unwrap();

        assert_eq!(latest.post_id.as_deref(), Some("new"));
        assert_eq!(latest.review_number, 3);
        assert_eq!(latest.thumbnail_url.as_deref(), Some("https://img/cover.jpg"));
        assert_eq!(latest.engagement.likes, 1_500);
        assert_eq!(latest.engagement.likes_formatted, "2K");
        assert_eq!(latest.engagement.views_formatted, "2.3M");
        assert_eq!(latest.date, "1970-01-01");
    }

    #[test]
    fn falls_back_to_dynamic_cover() {
        let reviews = vec![review("1", Some(100))];
        let posts = PostsFile {
            posts: vec![post("1", None, 0)],
        };
        let latest = latest_review(&reviews, &posts, &ContentFilter::default(), &ctx()).unwrap();
        assert_eq!(latest.thumbnail_url.as_deref(), Some("https://img/dynamic.webp"));
    }

    #[test]
    fn missing_post_gives_zero_engagement() {
        let reviews = vec![review("1", Some(100))];
        let latest =
            latest_review(&reviews, &PostsFile::default(), &ContentFilter::default(), &ctx()).unwrap();
        assert_eq!(latest.engagement, Engagement::default());
        assert!(latest.thumbnail_url.is_none());
    }

    #[test]
    fn undated_review_loses_to_dated_one() {
        let reviews = vec![review("undated", None), review("dated", Some(5))];
        let latest =
            latest_review(&reviews, &PostsFile::default(), &ContentFilter::default(), &ctx()).unwrap();
        assert_eq!(latest.post_id.as_deref(), Some("dated"));
    }

    #[test]
    fn undated_review_falls_back_to_its_date_field() {
        let mut only = review("1", None);
        only.date = Some("2025-09-02".into());
        let latest =
            latest_review(&[only], &PostsFile::default(), &ContentFilter::default(), &ctx()).unwrap();
        assert_eq!(latest.date, "2025-09-02");
        assert_eq!(latest.review_number, 1);
    }

    #[test]
    fn foods_are_copied_in_sentence_case_and_source_untouched() {
        let mut r = review("1", Some(100));
        r.foods = vec![
            FoodItem {
                name: Some("CHICKEN patty".into()),
                score: Some(7.0),
                comments: Some("pretty good".into()),
                ..FoodItem::default()
            },
            FoodItem {
                name: None,
                score: None,
                ..FoodItem::default()
            },
            FoodItem {
                name: Some("corn".into()),
                score: Some(8.0),
                ..FoodItem::default()
            },
        ];
        let reviews = vec![r];
        let latest =
            latest_review(&reviews, &PostsFile::default(), &ContentFilter::default(), &ctx()).unwrap();

        let names: Vec<_> = latest.foods.iter().map(FoodItem::name_or_empty).collect();
        assert_eq!(names, ["Chicken patty", "", "Corn"]);
        assert_eq!(latest.foods[0].comments.as_deref(), Some("pretty good"));
        assert!((latest.average_rating - 7.5).abs() < f64::EPSILON);
        assert_eq!(reviews[0].foods[0].name.as_deref(), Some("CHICKEN patty"));
    }

    #[test]
    fn average_is_zero_without_scores() {
        let latest = latest_review(
            &[review("1", Some(1))],
            &PostsFile::default(),
            &ContentFilter::default(),
            &ctx(),
        )
        .unwrap();
        assert!(latest.average_rating.abs() < f64::EPSILON);
    }
}
