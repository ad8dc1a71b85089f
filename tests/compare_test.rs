use std::collections::HashSet;

use spotdiff::compare::*;
use spotdiff::types::{PlaylistItem, Track, TrackArtist};

// Helper function to create a playlist entry with a resolvable track
fn create_item(id: Option<&str>, name: &str, artist: &str) -> PlaylistItem {
    let artists = if artist.is_empty() {
        Vec::new()
    } else {
        vec![TrackArtist {
            name: artist.to_string(),
        }]
    };

    PlaylistItem {
        track: Some(Track {
            id: id.map(|s| s.to_string()),
            name: name.to_string(),
            artists,
        }),
    }
}

// Helper function to create an entry whose track Spotify could not resolve
fn create_unresolvable_item() -> PlaylistItem {
    PlaylistItem { track: None }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

#[test]
fn test_exact_diff_identical_track() {
    let first = vec![create_item(Some("1"), "Song X", "Band A")];
    let second = vec![create_item(Some("1"), "Song X", "Band A")];

    let diff = exact_diff(&first, &second);

    assert!(diff.only_in_first.is_empty());
    assert!(diff.only_in_second.is_empty());
    assert_eq!(diff.common.len(), 1);
    assert_eq!(diff.common.get("1"), Some(&"Song X".to_string()));
}

#[test]
fn test_exact_diff_different_ids_same_names() {
    // Identical metadata but different ids: exact mode keeps them apart
    let first = vec![create_item(Some("1"), "Song X", "Band A")];
    let second = vec![create_item(Some("2"), "Song X", "Band A")];

    let diff = exact_diff(&first, &second);

    assert_eq!(diff.only_in_first.get("1"), Some(&"Song X".to_string()));
    assert_eq!(diff.only_in_second.get("2"), Some(&"Song X".to_string()));
    assert!(diff.common.is_empty());
}

#[test]
fn test_exact_diff_empty_first_side() {
    let first: Vec<PlaylistItem> = Vec::new();
    let second = vec![create_item(Some("3"), "Y", "Z")];

    let diff = exact_diff(&first, &second);

    assert!(diff.only_in_first.is_empty());
    assert!(diff.common.is_empty());
    assert_eq!(diff.only_in_second.len(), 1);
    assert_eq!(diff.only_in_second.get("3"), Some(&"Y".to_string()));
}

#[test]
fn test_exact_diff_skips_entries_without_id() {
    let first = vec![
        create_item(Some("1"), "Kept", "Band A"),
        create_item(None, "Local upload", "Band B"),
        create_unresolvable_item(),
    ];
    let second: Vec<PlaylistItem> = Vec::new();

    let diff = exact_diff(&first, &second);

    assert_eq!(diff.only_in_first.len(), 1);
    assert!(diff.only_in_first.contains_key("1"));
}

#[test]
fn test_exact_diff_collapses_duplicate_ids() {
    // Same id twice on one side collapses; the first occurrence's name wins
    let first = vec![
        create_item(Some("1"), "First take", "Band A"),
        create_item(Some("1"), "Second take", "Band A"),
    ];
    let second: Vec<PlaylistItem> = Vec::new();

    let diff = exact_diff(&first, &second);

    assert_eq!(diff.only_in_first.len(), 1);
    assert_eq!(
        diff.only_in_first.get("1"),
        Some(&"First take".to_string())
    );
}

#[test]
fn test_exact_diff_common_name_taken_from_first_side() {
    let first = vec![create_item(Some("1"), "Name on A", "Band")];
    let second = vec![create_item(Some("1"), "Name on B", "Band")];

    let diff = exact_diff(&first, &second);

    assert_eq!(diff.common.get("1"), Some(&"Name on A".to_string()));
}

#[test]
fn test_exact_diff_partition_properties() {
    let first = vec![
        create_item(Some("1"), "A1", "X"),
        create_item(Some("2"), "A2", "X"),
        create_item(Some("3"), "A3", "X"),
        create_item(None, "local", "X"),
    ];
    let second = vec![
        create_item(Some("2"), "B2", "Y"),
        create_item(Some("4"), "B4", "Y"),
    ];

    let diff = exact_diff(&first, &second);

    // The three mappings are pairwise disjoint by id
    for id in diff.only_in_first.keys() {
        assert!(!diff.only_in_second.contains_key(id));
        assert!(!diff.common.contains_key(id));
    }
    for id in diff.only_in_second.keys() {
        assert!(!diff.common.contains_key(id));
    }

    // only_in_first union common covers exactly the distinct non-null ids of A
    let mut covered: HashSet<String> = diff.only_in_first.keys().cloned().collect();
    covered.extend(diff.common.keys().cloned());
    let expected: HashSet<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
    assert_eq!(covered, expected);
}

#[test]
fn test_exact_diff_symmetric_under_swap() {
    let first = vec![
        create_item(Some("1"), "A1", "X"),
        create_item(Some("2"), "Shared", "X"),
    ];
    let second = vec![
        create_item(Some("2"), "Shared", "Y"),
        create_item(Some("3"), "B3", "Y"),
    ];

    let forward = exact_diff(&first, &second);
    let backward = exact_diff(&second, &first);

    assert_eq!(forward.only_in_first, backward.only_in_second);
    assert_eq!(forward.only_in_second, backward.only_in_first);
    let forward_common: HashSet<&String> = forward.common.keys().collect();
    let backward_common: HashSet<&String> = backward.common.keys().collect();
    assert_eq!(forward_common, backward_common);
}

#[test]
fn test_ratio_identical_strings() {
    assert_close(ratio("song x", "song x"), 100.0);
}

#[test]
fn test_ratio_both_empty() {
    // Two empty strings are identical by convention
    assert_close(ratio("", ""), 100.0);
}

#[test]
fn test_ratio_empty_against_non_empty() {
    assert_close(ratio("", "band a"), 0.0);
    assert_close(ratio("band a", ""), 0.0);
}

#[test]
fn test_ratio_half_distance() {
    // lev("ab", "cd") = 2 over a combined length of 4
    assert_close(ratio("ab", "cd"), 50.0);
}

#[test]
fn test_ratio_counts_characters_not_bytes() {
    // one substitution over 8 characters
    assert_close(ratio("café", "cafe"), 87.5);
}

#[test]
fn test_similar_pairs_identical_metadata_scores_100() {
    let first = vec![create_item(Some("1"), "Song X", "Band A")];
    let second = vec![create_item(Some("2"), "Song X", "Band A")];

    let pairs = similar_pairs(&first, &second);

    assert_eq!(pairs.len(), 1);
    assert_close(pairs[0].score, 100.0);
    assert_eq!(pairs[0].first_name, "Song X");
    assert_eq!(pairs[0].second_name, "Song X");
}

#[test]
fn test_similar_pairs_case_insensitive() {
    let first = vec![create_item(Some("1"), "SONG X", "BAND A")];
    let second = vec![create_item(Some("2"), "song x", "band a")];

    let pairs = similar_pairs(&first, &second);

    assert_eq!(pairs.len(), 1);
    assert_close(pairs[0].score, 100.0);
}

#[test]
fn test_similar_pairs_filters_dissimilar_tracks() {
    let first = vec![create_item(Some("1"), "Xy", "Qz")];
    let second = vec![create_item(Some("2"), "Completely Unrelated Title", "Someone Else")];

    let pairs = similar_pairs(&first, &second);

    assert!(pairs.is_empty());
}

#[test]
fn test_similar_pairs_threshold_is_exclusive() {
    // title and artist both score exactly 50, so the pair sits on the
    // threshold and must not be emitted
    let first = vec![create_item(Some("1"), "ab", "ab")];
    let second = vec![create_item(Some("2"), "cd", "cd")];

    let pairs = similar_pairs(&first, &second);

    assert!(pairs.is_empty());
}

#[test]
fn test_similar_pairs_missing_artists_on_both_sides() {
    // Absent artists compare as empty strings, which are identical by
    // convention, so the identical titles carry the pair to 100
    let first = vec![create_item(Some("1"), "Song X", "")];
    let second = vec![create_item(Some("2"), "Song X", "")];

    let pairs = similar_pairs(&first, &second);

    assert_eq!(pairs.len(), 1);
    assert_close(pairs[0].score, 100.0);
}

#[test]
fn test_similar_pairs_missing_artist_on_one_side() {
    let first = vec![create_item(Some("1"), "Song X", "Band A")];
    let second = vec![create_item(Some("2"), "Song X", "")];

    let pairs = similar_pairs(&first, &second);

    // title contributes 60, artist contributes 0
    assert_eq!(pairs.len(), 1);
    assert_close(pairs[0].score, 60.0);
}

#[test]
fn test_similar_pairs_includes_tracks_without_id() {
    let first = vec![create_item(None, "Song X", "Band A")];
    let second = vec![create_item(Some("2"), "Song X", "Band A")];

    let pairs = similar_pairs(&first, &second);

    assert_eq!(pairs.len(), 1);
    assert_close(pairs[0].score, 100.0);
}

#[test]
fn test_similar_pairs_unresolvable_entry_is_filtered() {
    let first = vec![create_unresolvable_item()];
    let second = vec![create_item(Some("2"), "Song X", "Band A")];

    let pairs = similar_pairs(&first, &second);

    assert!(pairs.is_empty());
}

#[test]
fn test_similar_pairs_empty_side_yields_no_pairs() {
    let first: Vec<PlaylistItem> = Vec::new();
    let second = vec![create_item(Some("3"), "Y", "Z")];

    assert!(similar_pairs(&first, &second).is_empty());
    assert!(similar_pairs(&second, &first).is_empty());
}

#[test]
fn test_similar_pairs_count_bounded_by_cross_product() {
    let first = vec![
        create_item(Some("1"), "Song X", "Band A"),
        create_item(Some("2"), "Song X", "Band A"),
        create_item(Some("3"), "Song X", "Band A"),
    ];
    let second = vec![
        create_item(Some("4"), "Song X", "Band A"),
        create_item(Some("5"), "Song Y", "Band A"),
    ];

    let pairs = similar_pairs(&first, &second);

    assert!(pairs.len() <= first.len() * second.len());
}

#[test]
fn test_similar_pairs_keep_cross_product_order() {
    let first = vec![
        create_item(Some("1"), "Alpha", "Band"),
        create_item(Some("2"), "Beta", "Band"),
    ];
    let second = vec![
        create_item(Some("3"), "Alpha", "Band"),
        create_item(Some("4"), "Beta", "Band"),
    ];

    let pairs = similar_pairs(&first, &second);

    // first-major, second-minor, unsorted by score
    let order: Vec<(&str, &str)> = pairs
        .iter()
        .map(|p| (p.first_name.as_str(), p.second_name.as_str()))
        .collect();
    assert_eq!(order.first(), Some(&("Alpha", "Alpha")));
    assert_eq!(order.last(), Some(&("Beta", "Beta")));
    assert!(pairs.iter().all(|p| p.score > SIMILARITY_THRESHOLD));
}

#[test]
fn test_weights_sum_to_one() {
    assert_close(TITLE_WEIGHT + ARTIST_WEIGHT, 1.0);
}
