//! Single-shot draft generation.
//!
//! `generate_draft` issues one completion request with the tone-specific
//! system directive and the form-derived user prompt, at low temperature
//! to favor consistent legal phrasing. It returns the model's full text
//! as the new document; the provider attaches the typed error kind at
//! the point of failure.

use minuta_types::config::GlobalConfig;
use minuta_types::contract::ContractFormData;
use minuta_types::error::GenerateError;
use minuta_types::llm::{ChatMessage, CompletionRequest};

use crate::llm::LlmProvider;
use crate::prompt;

/// Generate a complete contract draft from the form.
///
/// Input constraint: `form.objective` non-empty (enforced by the
/// service, never re-checked here).
#[tracing::instrument(
    name = "generate_draft",
    skip(provider, config, form),
    fields(provider = provider.name(), model = %config.model, tone = %form.tone)
)]
pub async fn generate_draft<P: LlmProvider>(
    provider: &P,
    config: &GlobalConfig,
    form: &ContractFormData,
) -> Result<String, GenerateError> {
    let request = CompletionRequest {
        model: config.model.clone(),
        system_instruction: Some(prompt::system_instruction(form.tone)),
        messages: vec![ChatMessage::user(prompt::draft_prompt(form))],
        temperature: Some(config.temperature),
        thinking_budget: config.thinking_budget,
    };

    let response = provider.complete(&request).await?;
    tracing::debug!(chars = response.text.len(), "draft generated");
    Ok(response.text)
}
