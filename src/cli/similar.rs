use tabled::Table;

use crate::{compare, config::Config, info, types::SimilarityTableRow};

use super::common;

pub async fn similar(config: &Config, first: String, second: String) {
    let Some(((first_playlist, first_items), (second_playlist, second_items))) =
        common::load_selected_pair(config, &first, &second).await
    else {
        return;
    };

    let pairs = compare::similar_pairs(&first_items, &second_items);

    if pairs.is_empty() {
        info!(
            "No track pairs above {}% similarity between {} and {}.",
            compare::SIMILARITY_THRESHOLD,
            first_playlist.name,
            second_playlist.name
        );
        return;
    }

    info!(
        "{} similar track pairs between {} and {}:",
        pairs.len(),
        first_playlist.name,
        second_playlist.name
    );

    let table_rows: Vec<SimilarityTableRow> = pairs
        .into_iter()
        .map(|pair| SimilarityTableRow {
            first: pair.first_name,
            second: pair.second_name,
            similarity: format!("{:.2}%", pair.score),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
