//! `minuta draft` -- generate a new contract from form fields.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use minuta_types::contract::{ContractFormData, LanguageTone};
use minuta_types::error::ServiceError;

use crate::cli::print_error;
use crate::state::AppState;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    state: &mut AppState,
    objective: String,
    party_a: String,
    party_b: String,
    tone: &str,
    clauses: String,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let form = ContractFormData {
        objective,
        party_a,
        party_b,
        tone: LanguageTone::from_label(tone),
        specific_clauses: clauses,
    };

    let provider = match state.provider() {
        Ok(provider) => provider,
        Err(err) => {
            let err = ServiceError::Generate(err);
            print_error(&err);
            return Err(err.into());
        }
    };

    let spinner = start_spinner(json || quiet, "Drafting with Gemini...");
    let result = state.service.submit_form(&provider, form).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let contract = match result {
        Ok(contract) => contract,
        Err(err) => {
            print_error(&err);
            return Err(err.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&contract)?);
        return Ok(());
    }

    if !quiet {
        println!();
        println!(
            "  {} Draft '{}' generated ({})",
            style("✓").green().bold(),
            style(&contract.title).cyan(),
            style(contract.id.simple().to_string()[..8].to_string()).dim()
        );
        println!();
    }
    println!("{}", contract.content);

    if !quiet {
        println!();
        println!(
            "  {} Refine it with: {}",
            style("i").blue().bold(),
            style("minuta chat").yellow()
        );
    }

    Ok(())
}

fn start_spinner(disabled: bool, message: &str) -> Option<ProgressBar> {
    if disabled {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(spinner)
}
