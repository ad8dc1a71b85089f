use std::collections::HashMap;

use tabled::Table;

use crate::{compare, config::Config, info, types::DiffTableRow};

use super::common;

pub async fn diff(config: &Config, first: String, second: String) {
    let Some(((first_playlist, first_items), (second_playlist, second_items))) =
        common::load_selected_pair(config, &first, &second).await
    else {
        return;
    };

    let result = compare::exact_diff(&first_items, &second_items);

    print_section(
        &format!("Only in {}", first_playlist.name),
        &result.only_in_first,
    );
    print_section(
        &format!("Only in {}", second_playlist.name),
        &result.only_in_second,
    );
    print_section("Common to both", &result.common);
}

fn print_section(label: &str, tracks: &HashMap<String, String>) {
    info!("{} ({} tracks)", label, tracks.len());

    if tracks.is_empty() {
        println!("(none)\n");
        return;
    }

    let mut table_rows: Vec<DiffTableRow> = tracks
        .iter()
        .map(|(id, name)| DiffTableRow {
            id: id.clone(),
            name: name.clone(),
        })
        .collect();

    // map order is unstable; sort for a reproducible listing
    table_rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let table = Table::new(table_rows);
    println!("{}\n", table);
}
