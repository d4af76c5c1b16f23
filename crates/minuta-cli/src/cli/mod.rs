//! CLI command definitions and shared output helpers for the `minuta`
//! binary.
//!
//! Uses clap derive macros for argument parsing. Commands follow a
//! flat verb pattern (`minuta draft`, `minuta chat`, `minuta list`).

pub mod chat;
pub mod draft;
pub mod export;
pub mod history;

use clap::{Parser, Subcommand};
use console::style;

use minuta_types::error::{GenerateError, RefineError, ServiceError};

/// Draft and refine contracts with a generative model.
#[derive(Parser)]
#[command(name = "minuta", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new contract draft from form fields.
    Draft {
        /// What you want to contract (required, free text).
        #[arg(long)]
        objective: String,

        /// Party A (Contratante / Locador).
        #[arg(long, default_value = "")]
        party_a: String,

        /// Party B (Contratado / Locatário).
        #[arg(long, default_value = "")]
        party_b: String,

        /// Legal register: "Formal e Rigoroso", "Equilibrado", or
        /// "Linguagem Simples (Plain Language)". Unrecognized values
        /// fall back to "Equilibrado".
        #[arg(long, default_value = "Equilibrado")]
        tone: String,

        /// Extra clauses (e.g., "Multa de 20%, Foro em Curitiba").
        #[arg(long, default_value = "")]
        clauses: String,
    },

    /// Interactively refine a contract (most recent by default).
    Chat {
        /// Contract id prefix to refine.
        contract: Option<String>,
    },

    /// List the contract history.
    #[command(alias = "ls")]
    List,

    /// Print a stored contract.
    Show {
        /// Contract id prefix.
        contract: String,
    },

    /// Overwrite a contract's content from a file (editor save).
    Save {
        /// Contract id prefix.
        contract: String,

        /// File holding the edited document text.
        #[arg(long)]
        file: std::path::PathBuf,
    },

    /// Export a contract as a word-processor document.
    Export {
        /// Contract id prefix.
        contract: String,

        /// Output path (defaults to a sanitized title + ".doc").
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

/// Print a service error with its user-facing remedy.
///
/// The remedy differs per error kind, which is why the kinds are typed:
/// reconfigure the credential, obtain a new one, retry, check
/// connectivity, or rephrase the instruction.
pub fn print_error(err: &ServiceError) {
    eprintln!("  {} {err}", style("✗").red().bold());
    if let Some(hint) = remedy_hint(err) {
        eprintln!("    {}", style(hint).dim());
    }
}

fn remedy_hint(err: &ServiceError) -> Option<&'static str> {
    let generate = match err {
        ServiceError::Generate(g) => g,
        ServiceError::Refine(RefineError::Generate(g)) => g,
        ServiceError::Refine(RefineError::TooShort { .. }) => {
            return Some("Tente ser mais específico na solicitação.");
        }
        _ => return None,
    };

    match generate {
        GenerateError::NotConfigured => {
            Some("Set MINUTA_API_KEY (or API_KEY) to your Gemini API key and retry.")
        }
        GenerateError::AuthenticationRejected => {
            Some("The provider rejected the key; obtain a new credential.")
        }
        GenerateError::EmptyResponse => Some("The model returned nothing usable; retry."),
        GenerateError::InvalidRequest(_) | GenerateError::Transport(_) => {
            Some("Check your connection and retry.")
        }
    }
}
