//! `minuta chat` -- interactive refinement loop over one contract.
//!
//! Each instruction is applied through the refinement session; the full
//! replacement document is printed on success. A too-short reply prints
//! the "be more specific" hint and the loop continues -- no error is
//! fatal to the session.

use anyhow::Result;
use console::style;
use dialoguer::Input;

use minuta_types::error::{RefineError, ServiceError};

use crate::cli::print_error;
use crate::state::AppState;

pub async fn run(state: &mut AppState, contract: Option<&str>, quiet: bool) -> Result<()> {
    let id = match contract {
        Some(prefix) => match state.service.find_by_prefix(prefix) {
            Some(c) => c.id,
            None => {
                anyhow::bail!("contract '{prefix}' not found");
            }
        },
        None => match state.service.history().first() {
            Some(c) => c.id,
            None => {
                println!(
                    "  {} No contracts yet. Generate one with: {}",
                    style("i").blue().bold(),
                    style("minuta draft --objective \"...\"").yellow()
                );
                return Ok(());
            }
        },
    };

    state.service.open_contract(id)?;
    let provider = state.provider().map_err(ServiceError::Generate)?;

    if !quiet
        && let Some(active) = state.service.active()
    {
        println!();
        println!(
            "  {} Refining '{}' ({})",
            style("✎").cyan().bold(),
            style(&active.title).cyan(),
            style(active.form_data.tone.to_string()).dim()
        );
        println!(
            "    {}",
            style("Ex: \"Adicione uma multa de 10% por atraso.\" -- /quit to exit").dim()
        );
        println!();
    }

    loop {
        let instruction: String = Input::new()
            .with_prompt("ajuste")
            .allow_empty(true)
            .interact_text()?;

        let trimmed = instruction.trim();
        if trimmed.is_empty() || trimmed == "/quit" || trimmed == "/sair" {
            break;
        }

        match state.service.refine(&provider, trimmed).await {
            Ok(text) => {
                println!();
                println!("{text}");
                println!();
                if !quiet {
                    println!("  {} Contract updated and saved.", style("✓").green().bold());
                }
            }
            Err(err @ ServiceError::Refine(RefineError::TooShort { .. })) => {
                print_error(&err);
            }
            Err(err) => {
                // Non-fatal: the session stays interactive after any error.
                print_error(&err);
            }
        }
    }

    Ok(())
}
