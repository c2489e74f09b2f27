//! Mood vocabulary presentation.

use crate::context::mood::Mood;
use crate::error::ApiError;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

pub fn format_moods_text(moods: &[Mood]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Mood", "Aliases", "Keywords"]);
    for mood in moods {
        table.add_row(vec![
            mood.as_str().to_string(),
            mood.aliases().join(", "),
            mood.keywords().join(", "),
        ]);
    }
    table.to_string()
}

pub fn format_moods_json(moods: &[Mood]) -> Result<String, ApiError> {
    let arr: Vec<serde_json::Value> = moods
        .iter()
        .map(|mood| {
            json!({
                "name": mood.as_str(),
                "aliases": mood.aliases(),
                "keywords": mood.keywords(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&arr)?)
}
