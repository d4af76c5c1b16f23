//! History commands: list, show, save.

use std::path::Path;

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// List the contract history, most recent first.
pub fn list(state: &AppState, json: bool) -> Result<()> {
    let history = state.service.history();

    if json {
        println!("{}", serde_json::to_string_pretty(history)?);
        return Ok(());
    }

    if history.is_empty() {
        println!();
        println!(
            "  {} No contracts yet. Generate one with: {}",
            style("i").blue().bold(),
            style("minuta draft --objective \"...\"").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Tone").fg(Color::White),
        Cell::new("Created").fg(Color::White),
    ]);

    for contract in history {
        table.add_row(vec![
            Cell::new(contract.id.simple().to_string()[..8].to_string()).fg(Color::Cyan),
            Cell::new(&contract.title),
            Cell::new(contract.form_data.tone.to_string()),
            Cell::new(contract.created_at.format("%Y-%m-%d %H:%M").to_string())
                .fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} contract{}",
        style(history.len()).bold(),
        if history.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

/// Print a stored contract by id prefix.
pub fn show(state: &AppState, prefix: &str, json: bool) -> Result<()> {
    let contract = state
        .service
        .find_by_prefix(prefix)
        .ok_or_else(|| anyhow::anyhow!("contract '{prefix}' not found"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(contract)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} ({}, {})",
        style(&contract.title).cyan().bold(),
        contract.form_data.tone,
        contract.created_at.format("%Y-%m-%d")
    );
    println!();
    println!("{}", contract.content);

    Ok(())
}

/// Overwrite a contract's content from a file (the editor-save
/// operation: wholesale content replacement, metadata untouched).
pub async fn save(state: &mut AppState, prefix: &str, file: &Path, json: bool) -> Result<()> {
    let id = state
        .service
        .find_by_prefix(prefix)
        .ok_or_else(|| anyhow::anyhow!("contract '{prefix}' not found"))?
        .id;

    let new_text = tokio::fs::read_to_string(file).await?;
    state.service.open_contract(id)?;
    state.service.save(new_text).await?;

    if json {
        println!("{}", serde_json::json!({"saved": true, "id": id}));
    } else {
        println!("  {} Contract saved.", style("✓").green().bold());
    }

    Ok(())
}
