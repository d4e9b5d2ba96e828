//! Characteristic phrases pulled from the reviewer's food comments.

use lunchdash_core::Review;

use crate::format::sentence_case;
use crate::tally::Tally;

/// Lower-case fragments that mark a sentence as characteristic.
pub(crate) const MARKERS: &[&str] = &[
    "pretty good",
    "really good",
    "super",
    "very",
    "not that great",
    "kind of",
    "actually",
    "nice and",
    "love",
    "favorite",
    "not the biggest",
    "definitely",
    "bland",
    "soggy",
    "dry",
    "crisp",
];

/// Number of phrases kept.
pub const KEY_PHRASE_LIMIT: usize = 30;

fn is_characteristic(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Most frequent characteristic sentences across every review's comments.
///
/// Comments are split on `.` and `!`. Sentences are counted verbatim, so two
/// capitalizations of one sentence are tallied separately before the final
/// sentence-case rendering.
#[must_use]
pub fn key_phrases(reviews: &[Review]) -> Vec<String> {
    let mut tally = Tally::default();

    let comments = reviews
        .iter()
        .flat_map(|r| &r.foods)
        .filter_map(|f| f.comments.as_deref());

    for comment in comments {
        for sentence in comment.split(['.', '!']) {
            let sentence = sentence.trim();
            if !sentence.is_empty() && is_characteristic(sentence) {
                tally.add(sentence);
            }
        }
    }

    tally
        .most_common(KEY_PHRASE_LIMIT)
        .into_iter()
        .map(|(phrase, _)| sentence_case(&phrase))
        .collect()
}
