use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Playlist;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Resolves a playlist argument against the user's playlist set.
///
/// An exact id match wins over a name match; names compare
/// case-insensitively. The first match in listing order is returned.
pub fn resolve_playlist<'a>(playlists: &'a [Playlist], wanted: &str) -> Option<&'a Playlist> {
    if let Some(by_id) = playlists.iter().find(|p| p.id == wanted) {
        return Some(by_id);
    }

    let wanted_lower = wanted.to_lowercase();
    playlists
        .iter()
        .find(|p| p.name.to_lowercase() == wanted_lower)
}

/// Human-readable visibility label for the playlist table.
pub fn playlist_visibility(playlist: &Playlist) -> String {
    if playlist.collaborative {
        "collaborative".to_string()
    } else {
        match playlist.public {
            Some(true) => "public".to_string(),
            Some(false) => "private".to_string(),
            None => "unknown".to_string(),
        }
    }
}
