//! Playlist comparison engine.
//!
//! Two entry points operate on the finalized track listings of two
//! playlists: [`exact_diff`] partitions tracks by id equality into
//! "only in first", "only in second" and "common", while [`similar_pairs`]
//! scores every cross-pair of tracks by textual closeness of title and
//! primary artist. Both are pure functions of their inputs; fetching and
//! rendering live elsewhere.

use std::collections::HashMap;

use crate::types::{PlaylistItem, Track};

/// Weight of the title ratio in the overall similarity score.
pub const TITLE_WEIGHT: f64 = 0.6;
/// Weight of the primary-artist ratio in the overall similarity score.
pub const ARTIST_WEIGHT: f64 = 0.4;
/// Pairs scoring at or below this are dropped from the fuzzy report.
pub const SIMILARITY_THRESHOLD: f64 = 50.0;

/// Result of an exact-match comparison: three disjoint id -> name mappings.
#[derive(Debug, Clone, Default)]
pub struct ExactDiff {
    pub only_in_first: HashMap<String, String>,
    pub only_in_second: HashMap<String, String>,
    pub common: HashMap<String, String>,
}

/// One scored pair from the fuzzy comparison, in cross-product order.
#[derive(Debug, Clone)]
pub struct SimilarPair {
    pub first_name: String,
    pub second_name: String,
    pub score: f64,
}

/// Compares two track listings by track id.
///
/// Entries without a track object or without an id cannot be matched
/// reliably and are skipped. A track id appearing several times on one side
/// collapses to a single entry; the name of its first occurrence wins. For
/// ids present on both sides the name is taken from the first listing.
pub fn exact_diff(first: &[PlaylistItem], second: &[PlaylistItem]) -> ExactDiff {
    let first_by_id = index_by_id(first);
    let second_by_id = index_by_id(second);

    let mut diff = ExactDiff::default();

    for (id, name) in &first_by_id {
        if second_by_id.contains_key(id) {
            diff.common.insert(id.clone(), name.clone());
        } else {
            diff.only_in_first.insert(id.clone(), name.clone());
        }
    }

    for (id, name) in &second_by_id {
        if !first_by_id.contains_key(id) {
            diff.only_in_second.insert(id.clone(), name.clone());
        }
    }

    diff
}

fn index_by_id(items: &[PlaylistItem]) -> HashMap<String, String> {
    let mut by_id = HashMap::new();
    for item in items {
        let Some(track) = &item.track else {
            continue;
        };
        let Some(id) = &track.id else {
            continue;
        };
        by_id
            .entry(id.clone())
            .or_insert_with(|| track.name.clone());
    }
    by_id
}

/// Scores every pair of tracks across the two listings.
///
/// Evaluates the full cross product in listing order (first-major), keeping
/// pairs whose weighted title/artist similarity exceeds
/// [`SIMILARITY_THRESHOLD`]. Track ids play no role here; entries without a
/// resolvable track fall back to empty title and artist strings.
pub fn similar_pairs(first: &[PlaylistItem], second: &[PlaylistItem]) -> Vec<SimilarPair> {
    let mut pairs = Vec::new();

    for first_item in first {
        for second_item in second {
            let score = track_similarity(first_item.track.as_ref(), second_item.track.as_ref());
            if score > SIMILARITY_THRESHOLD {
                pairs.push(SimilarPair {
                    first_name: display_name(first_item.track.as_ref()).to_string(),
                    second_name: display_name(second_item.track.as_ref()).to_string(),
                    score,
                });
            }
        }
    }

    pairs
}

/// Weighted, case-insensitive similarity of two tracks on a 0-100 scale.
pub fn track_similarity(first: Option<&Track>, second: Option<&Track>) -> f64 {
    let title = ratio(
        &display_name(first).to_lowercase(),
        &display_name(second).to_lowercase(),
    );
    let artist = ratio(
        &primary_artist(first).to_lowercase(),
        &primary_artist(second).to_lowercase(),
    );

    title * TITLE_WEIGHT + artist * ARTIST_WEIGHT
}

/// Normalized edit-distance ratio between two strings on a 0-100 scale.
///
/// Computed as `(1 - levenshtein / (|a| + |b|)) * 100` over characters.
/// Two empty strings are considered identical (100); an empty string
/// against a non-empty one scores 0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }

    let distance = strsim::levenshtein(a, b);
    (1.0 - distance as f64 / total as f64) * 100.0
}

fn display_name(track: Option<&Track>) -> &str {
    track.map(|t| t.name.as_str()).unwrap_or("")
}

fn primary_artist(track: Option<&Track>) -> &str {
    track
        .and_then(|t| t.artists.first())
        .map(|a| a.name.as_str())
        .unwrap_or("")
}
