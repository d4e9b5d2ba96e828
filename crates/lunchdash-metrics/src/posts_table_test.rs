use super::*;
use lunchdash_core::FoodItem;

fn ctx() -> RenderContext {
    RenderContext::new("davis_big_dawg", chrono_tz::UTC)
}

fn review(id: &str, create_time: Option<i64>) -> Review {
    Review {
        post_id: Some(id.to_string()),
        create_time,
        description: Some("school lunch".into()),
        ..Review::default()
    }
}

fn numbers_by_id(rows: &[PostsTableRow]) -> Vec<(String, usize)> {
    let mut pairs: Vec<(String, usize)> = rows
        .iter()
        .map(|r| (r.post_id.clone().unwrap_or_default(), r.review_number))
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn numbers_chronologically_but_lists_newest_first() {
    let reviews = vec![
        review("b", Some(200)),
        review("a", Some(100)),
        review("c", Some(300)),
    ];
    let rows = posts_table(&reviews, &ContentFilter::default(), &ctx());

    let order: Vec<_> = rows.iter().filter_map(|r| r.post_id.as_deref()).collect();
    assert_eq!(order, ["c", "b", "a"]);

    let numbers: Vec<_> = rows.iter().map(|r| r.review_number).collect();
    assert_eq!(numbers, [3, 2, 1]);
}

#[test]
fn numbering_is_independent_of_input_order() {
    let forward = vec![
        review("a", Some(100)),
        review("b", Some(200)),
        review("c", Some(300)),
        review("d", Some(400)),
    ];
    let mut shuffled = vec![
        forward[2].clone(),
        forward[0].clone(),
        forward[3].clone(),
        forward[1].clone(),
    ];
    let filter = ContentFilter::default();

    let expected = numbers_by_id(&posts_table(&forward, &filter, &ctx()));
    assert_eq!(numbers_by_id(&posts_table(&shuffled, &filter, &ctx())), expected);

    shuffled.reverse();
    assert_eq!(numbers_by_id(&posts_table(&shuffled, &filter, &ctx())), expected);
}

#[test]
fn missing_timestamp_numbers_first_and_lists_last() {
    let reviews = vec![review("new", Some(500)), review("undated", None)];
    let rows = posts_table(&reviews, &ContentFilter::default(), &ctx());
    assert_eq!(rows[0].post_id.as_deref(), Some("new"));
    assert_eq!(rows[0].review_number, 2);
    assert_eq!(rows[1].post_id.as_deref(), Some("undated"));
    assert_eq!(rows[1].review_number, 1);
    assert!(rows[1].date.is_none());
}

#[test]
fn off_topic_posts_are_not_numbered() {
    let mut steak = review("steak", Some(50));
    steak.description = Some("texasroadhouse".into());
    let reviews = vec![steak, review("a", Some(100))];
    let rows = posts_table(&reviews, &ContentFilter::default(), &ctx());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].review_number, 1);
}

#[test]
fn foods_are_listed_with_table_defaults() {
    let mut r = review("1", Some(100));
    r.needs_review = true;
    r.foods = vec![
        FoodItem {
            name: Some("mystery MEAT".into()),
            score: Some(3.0),
            category: None,
            ..FoodItem::default()
        },
        FoodItem {
            name: None,
            score: Some(9.0),
            ..FoodItem::default()
        },
        FoodItem {
            name: Some("milk".into()),
            score: None,
            category: Some("drink".into()),
            ..FoodItem::default()
        },
    ];
    let row = posts_table(&[r], &ContentFilter::default(), &ctx()).remove(0);

    assert_eq!(row.food_count, 3);
    assert_eq!(row.foods.len(), 2);
    assert_eq!(row.foods[0].name, "Mystery meat");
    assert_eq!(row.foods[0].category, "unknown");
    assert_eq!(row.foods[1].name, "Milk");
    assert_eq!(row.foods[1].category, "drink");
    assert_eq!(row.average_rating, Some(6.0));
    assert!(row.needs_review);
    assert_eq!(
        row.tiktok_url.as_deref(),
        Some("https://www.tiktok.com/@davis_big_dawg/video/1")
    );
}

#[test]
fn review_numbers_handles_ties_in_input_order() {
    let a = review("a", Some(100));
    let b = review("b", Some(100));
    let c = review("c", Some(50));
    assert_eq!(review_numbers(&[&a, &b, &c]), vec![2, 3, 1]);
}

#[test]
fn food_names_are_fully_sentence_cased() {
    let mut r = review("1", Some(100));
    r.foods = vec![FoodItem {
        name: Some("BBQ Chicken".into()),
        score: Some(7.0),
        ..FoodItem::default()
    }];
    let row = posts_table(&[r], &ContentFilter::default(), &ctx()).remove(0);

    assert_eq!(row.foods[0].name, "Bbq chicken");
}
