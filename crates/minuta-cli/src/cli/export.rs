//! `minuta export` -- write a contract as a word-processor document.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use minuta_core::export::{export_filename, export_word};

use crate::state::AppState;

/// UTF-8 byte-order mark so word processors pick up the encoding.
const BOM: &str = "\u{feff}";

pub async fn run(
    state: &AppState,
    prefix: &str,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let contract = state
        .service
        .find_by_prefix(prefix)
        .ok_or_else(|| anyhow::anyhow!("contract '{prefix}' not found"))?;

    let path = out.unwrap_or_else(|| PathBuf::from(export_filename(&contract.title)));
    let document = format!("{BOM}{}", export_word(&contract.content));
    tokio::fs::write(&path, document).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"exported": true, "id": contract.id, "path": path})
        );
    } else {
        println!(
            "  {} Exported '{}' to {}",
            style("✓").green().bold(),
            style(&contract.title).cyan(),
            style(path.display()).bold()
        );
    }

    Ok(())
}
