use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config,
    error,
    management::TokenManager,
    spotify,
    types::{Playlist, PlaylistItem},
    utils, warning,
};

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotdiff auth\n Error: {}",
                e
            );
        }
    }
}

/// Fetches the complete playlist set of the authenticated user, paging
/// until the `next` cursor is exhausted.
pub(crate) async fn load_all_playlists(
    config: &Config,
    token_mgr: &mut TokenManager,
) -> Vec<Playlist> {
    let pb = spinner("Fetching playlists...");

    let mut all_playlists: Vec<Playlist> = Vec::new();
    let mut page_url: Option<String> = None;

    loop {
        let token = token_mgr.get_valid_token(config).await;
        match spotify::playlists::get_playlists_page(config, &token, page_url.clone()).await {
            Ok(page) => {
                all_playlists.extend(page.items);
                pb.set_message(format!("Fetched {} playlists...", all_playlists.len()));

                match page.next {
                    Some(next) => page_url = Some(next),
                    None => break,
                }
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch playlists: {}", e);
            }
        }
    }

    pb.finish_and_clear();
    all_playlists
}

/// Fetches the full track listing of one playlist, paging until the `next`
/// cursor is exhausted. The listing is finalized before it is returned;
/// the comparison engine never consumes partial pages.
pub(crate) async fn load_playlist_items(
    config: &Config,
    token_mgr: &mut TokenManager,
    playlist: &Playlist,
) -> Vec<PlaylistItem> {
    let pb = spinner(&format!("Fetching tracks for {}...", playlist.name));

    let mut all_items: Vec<PlaylistItem> = Vec::new();
    let mut page_url: Option<String> = None;

    loop {
        let token = token_mgr.get_valid_token(config).await;
        match spotify::playlists::get_playlist_items_page(
            config,
            &token,
            &playlist.id,
            page_url.clone(),
        )
        .await
        {
            Ok(page) => {
                all_items.extend(page.items);
                pb.set_message(format!(
                    "Fetched {count} tracks for {name}...",
                    count = all_items.len(),
                    name = playlist.name
                ));

                match page.next {
                    Some(next) => page_url = Some(next),
                    None => break,
                }
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch tracks for {}: {}", playlist.name, e);
            }
        }
    }

    pb.finish_and_clear();
    all_items
}

/// Resolves the two playlist arguments and loads both track listings.
///
/// Returns `None` after printing a guidance message when an argument does
/// not resolve or both arguments name the same playlist; the comparison
/// engine is not invoked in that case.
pub(crate) async fn load_selected_pair(
    config: &Config,
    first: &str,
    second: &str,
) -> Option<((Playlist, Vec<PlaylistItem>), (Playlist, Vec<PlaylistItem>))> {
    let mut token_mgr = load_token_manager().await;
    let playlists = load_all_playlists(config, &mut token_mgr).await;

    let Some(first_playlist) = utils::resolve_playlist(&playlists, first).cloned() else {
        warning!(
            "No playlist named '{}' found. Run spotdiff playlists to see your playlists.",
            first
        );
        return None;
    };
    let Some(second_playlist) = utils::resolve_playlist(&playlists, second).cloned() else {
        warning!(
            "No playlist named '{}' found. Run spotdiff playlists to see your playlists.",
            second
        );
        return None;
    };

    if first_playlist.id == second_playlist.id {
        warning!("Please select two different playlists for comparison.");
        return None;
    }

    let first_items = load_playlist_items(config, &mut token_mgr, &first_playlist).await;
    let second_items = load_playlist_items(config, &mut token_mgr, &second_playlist).await;

    Some(((first_playlist, first_items), (second_playlist, second_items)))
}
