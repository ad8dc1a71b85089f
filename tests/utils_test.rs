use spotdiff::types::{Playlist, PlaylistTracksRef};
use spotdiff::utils::*;

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        public: Some(false),
        collaborative: false,
        tracks: PlaylistTracksRef { total: 0 },
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_resolve_playlist_by_id() {
    let playlists = vec![
        create_test_playlist("id1", "Road Trip"),
        create_test_playlist("id2", "Focus"),
    ];

    let resolved = resolve_playlist(&playlists, "id2").unwrap();
    assert_eq!(resolved.name, "Focus");
}

#[test]
fn test_resolve_playlist_by_name_case_insensitive() {
    let playlists = vec![
        create_test_playlist("id1", "Road Trip"),
        create_test_playlist("id2", "Focus"),
    ];

    let resolved = resolve_playlist(&playlists, "road trip").unwrap();
    assert_eq!(resolved.id, "id1");
}

#[test]
fn test_resolve_playlist_id_wins_over_name() {
    // A playlist named like another playlist's id resolves to the id match
    let playlists = vec![
        create_test_playlist("Focus", "Deep Work"),
        create_test_playlist("id2", "Focus"),
    ];

    let resolved = resolve_playlist(&playlists, "Focus").unwrap();
    assert_eq!(resolved.name, "Deep Work");
}

#[test]
fn test_resolve_playlist_first_match_wins_for_duplicate_names() {
    let playlists = vec![
        create_test_playlist("id1", "Mix"),
        create_test_playlist("id2", "Mix"),
    ];

    let resolved = resolve_playlist(&playlists, "mix").unwrap();
    assert_eq!(resolved.id, "id1");
}

#[test]
fn test_resolve_playlist_no_match() {
    let playlists = vec![create_test_playlist("id1", "Road Trip")];

    assert!(resolve_playlist(&playlists, "does-not-exist").is_none());
}

#[test]
fn test_playlist_visibility_labels() {
    let mut playlist = create_test_playlist("id1", "Mix");
    assert_eq!(playlist_visibility(&playlist), "private");

    playlist.public = Some(true);
    assert_eq!(playlist_visibility(&playlist), "public");

    playlist.public = None;
    assert_eq!(playlist_visibility(&playlist), "unknown");

    playlist.collaborative = true;
    assert_eq!(playlist_visibility(&playlist), "collaborative");
}
