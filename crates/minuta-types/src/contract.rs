//! Contract, form data, and generation-state types for Minuta.
//!
//! These types model the drafting workflow: the user fills a
//! [`ContractFormData`], a successful generation produces a [`Contract`],
//! and [`GenerationState`] tracks the single in-flight request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Maximum length of a derived contract title, in characters.
const TITLE_MAX_CHARS: usize = 40;

/// Register of legal language used when drafting.
///
/// The serde labels are the exact option strings the product exposes;
/// they are Brazilian-Portuguese because the drafted contracts are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageTone {
    /// Erudite classical legal register, Latin terms where appropriate.
    #[serde(rename = "Formal e Rigoroso")]
    Formal,
    /// Modern professional language; no archaisms, serious in tone.
    #[serde(rename = "Equilibrado")]
    Balanced,
    /// Plain language: short sentences, no jargon, readable by laypeople.
    #[serde(rename = "Linguagem Simples (Plain Language)")]
    PlainLanguage,
}

impl LanguageTone {
    /// Parse a tone label, falling back to [`LanguageTone::Balanced`] for
    /// anything unrecognized. Generation must never fail on a bad label.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(LanguageTone::Balanced)
    }
}

impl Default for LanguageTone {
    fn default() -> Self {
        LanguageTone::Balanced
    }
}

impl fmt::Display for LanguageTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageTone::Formal => write!(f, "Formal e Rigoroso"),
            LanguageTone::Balanced => write!(f, "Equilibrado"),
            LanguageTone::PlainLanguage => {
                write!(f, "Linguagem Simples (Plain Language)")
            }
        }
    }
}

impl FromStr for LanguageTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Formal e Rigoroso" => Ok(LanguageTone::Formal),
            "Equilibrado" => Ok(LanguageTone::Balanced),
            "Linguagem Simples (Plain Language)" => Ok(LanguageTone::PlainLanguage),
            other => Err(format!("invalid language tone: '{other}'")),
        }
    }
}

/// The structured form the user fills before generating a draft.
///
/// All fields are free text except `tone`. Malformed party names or
/// clauses pass through verbatim; the model is trusted to handle them.
/// The only validated invariant is a non-empty `objective`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractFormData {
    /// What the user wants to contract (e.g., "Serviço de consultoria").
    pub objective: String,
    /// Party A, treated as CONTRATANTE / LOCADOR in the preamble.
    pub party_a: String,
    /// Party B, treated as CONTRATADO / LOCATÁRIO in the preamble.
    pub party_b: String,
    pub tone: LanguageTone,
    /// Optional extra clauses (e.g., "Multa de 15%, Foro em Curitiba").
    pub specific_clauses: String,
}

impl ContractFormData {
    /// Whether the form is complete enough to generate: the objective
    /// must be non-empty after trimming.
    pub fn has_objective(&self) -> bool {
        !self.objective.trim().is_empty()
    }
}

/// A generated contract and the form snapshot that produced it.
///
/// Immutable except for `content`, which is replaced wholesale on manual
/// save or successful refinement -- never patched incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: Uuid,
    /// Derived from the objective, truncated to 40 characters.
    pub title: String,
    /// Full document text (Markdown).
    pub content: String,
    /// Snapshot of the form used to produce this contract.
    pub form_data: ContractFormData,
    pub created_at: DateTime<Utc>,
}

impl Contract {
    /// Create a new contract from a successful draft generation.
    pub fn new(form_data: ContractFormData, content: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: derive_title(&form_data.objective),
            content,
            form_data,
            created_at: Utc::now(),
        }
    }
}

/// Derive a display title from the objective, truncated on a character
/// boundary so multi-byte text never splits mid-codepoint.
pub fn derive_title(objective: &str) -> String {
    objective.trim().chars().take(TITLE_MAX_CHARS).collect()
}

/// Tracks the single in-flight generation request.
///
/// Exactly one generation may be pending at a time: a submit while
/// `Loading` is a rejected no-op, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    Idle,
    Loading,
    Success,
    Error,
}

impl Default for GenerationState {
    fn default() -> Self {
        GenerationState::Idle
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationState::Idle => write!(f, "idle"),
            GenerationState::Loading => write!(f, "loading"),
            GenerationState::Success => write!(f, "success"),
            GenerationState::Error => write!(f, "error"),
        }
    }
}
