use tabled::Table;

use crate::{config::Config, info, types::TrackTableRow, utils, warning};

use super::common;

pub async fn tracks(config: &Config, playlist: String) {
    let mut token_mgr = common::load_token_manager().await;
    let playlists = common::load_all_playlists(config, &mut token_mgr).await;

    let Some(selected) = utils::resolve_playlist(&playlists, &playlist).cloned() else {
        warning!(
            "No playlist named '{}' found. Run spotdiff playlists to see your playlists.",
            playlist
        );
        return;
    };

    let items = common::load_playlist_items(config, &mut token_mgr, &selected).await;

    let table_rows: Vec<TrackTableRow> = items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(|track| TrackTableRow {
            name: track.name.clone(),
            artist: track
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
        })
        .collect();

    if table_rows.is_empty() {
        warning!("Playlist {} has no resolvable tracks.", selected.name);
        return;
    }

    info!("Tracks in {}:", selected.name);
    let table = Table::new(table_rows);
    println!("{}", table);
}
