use tabled::Table;

use crate::{
    config::Config,
    info, spotify,
    types::PlaylistTableRow,
    utils, warning,
};

use super::common;

pub async fn list_playlists(config: &Config, search: Option<String>) {
    let mut token_mgr = common::load_token_manager().await;

    let token = token_mgr.get_valid_token(config).await;
    match spotify::user::get_current_user(config, &token).await {
        Ok(user) => {
            info!(
                "Logged in as {}",
                user.display_name.unwrap_or(user.id)
            );
        }
        Err(e) => warning!("Failed to load user profile: {}", e),
    }

    let playlists = common::load_all_playlists(config, &mut token_mgr).await;

    if playlists.is_empty() {
        warning!("No playlists found for this account.");
        return;
    }

    // sort playlists by name
    let mut sorted_playlists = playlists.clone();
    sorted_playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    if let Some(playlist_search) = search {
        let search_term = playlist_search.to_lowercase();
        sorted_playlists.retain(|p| p.name.to_lowercase().contains(&search_term));
    }

    // convert playlists to table rows
    let table_rows: Vec<PlaylistTableRow> = sorted_playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            tracks: p.tracks.total,
            visibility: utils::playlist_visibility(&p),
            name: p.name,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
