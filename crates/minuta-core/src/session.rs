//! Refinement session: the stateful conversation over one document.
//!
//! A session is a plain value of `{tone, seed_document, turns}` -- a
//! pure function of what it was opened with, never an opaque handle.
//! The seeded system directive embeds the tone guidance plus the
//! verbatim current document and instructs the model that every reply
//! must be the complete updated document, never a diff.
//!
//! A session is scoped to one tone and one seed document; changing the
//! tone means opening a new session.

use minuta_types::config::GlobalConfig;
use minuta_types::contract::LanguageTone;
use minuta_types::error::RefineError;
use minuta_types::llm::{ChatMessage, CompletionRequest};

use crate::llm::LlmProvider;
use crate::prompt;

/// Minimum plausible length of a full document, in characters.
///
/// A refinement reply shorter than this is treated as commentary
/// instead of content, and rejected back to the caller.
pub const MIN_DOCUMENT_LEN: usize = 100;

/// A conversational refinement context over one contract document.
#[derive(Debug, Clone)]
pub struct RefinementSession {
    tone: LanguageTone,
    seed_document: String,
    /// Accepted exchanges only; rejected (too-short) replies are never
    /// recorded, so the next instruction resends a clean context.
    turns: Vec<ChatMessage>,
}

impl RefinementSession {
    /// Open a session seeded with the current document and tone.
    pub fn open(document: impl Into<String>, tone: LanguageTone) -> Self {
        Self {
            tone,
            seed_document: document.into(),
            turns: Vec::new(),
        }
    }

    pub fn tone(&self) -> LanguageTone {
        self.tone
    }

    pub fn seed_document(&self) -> &str {
        &self.seed_document
    }

    /// Accepted conversation turns, oldest first.
    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// The seeded system directive: tone guidance plus the verbatim
    /// current document, with the full-document reply rule restated.
    fn system_instruction(&self) -> String {
        format!(
            "{}\n\nCONTEXTO DO CONTRATO ATUAL:\n{}\n\nSempre que solicitado um ajuste, \
             devolva o contrato completo atualizado.",
            prompt::system_instruction(self.tone),
            self.seed_document
        )
    }

    /// Wrap the user's free-text instruction in the fixed template that
    /// reiterates "return the full updated document", counteracting the
    /// model's tendency to reply with partial edits.
    fn wrap_instruction(instruction: &str) -> String {
        format!(
            "ALTERAÇÃO SOLICITADA PELO USUÁRIO: \"{instruction}\".\n\n\
             AJA AGORA: Com base no contrato que temos no contexto, aplique esta alteração \
             e me devolva o CONTRATO COMPLETO ATUALIZADO.\n\
             Não envie apenas comentários, envie o texto integral do contrato com as \
             mudanças aplicadas."
        )
    }

    /// Apply a refinement instruction; returns the complete replacement
    /// document.
    ///
    /// A reply shorter than [`MIN_DOCUMENT_LEN`] is rejected as
    /// [`RefineError::TooShort`] without recording the exchange; the
    /// caller keeps the current document and should rephrase.
    #[tracing::instrument(
        name = "refine",
        skip(self, provider, config, instruction),
        fields(provider = provider.name(), model = %config.model, turn = self.turns.len() / 2)
    )]
    pub async fn apply<P: LlmProvider>(
        &mut self,
        provider: &P,
        config: &GlobalConfig,
        instruction: &str,
    ) -> Result<String, RefineError> {
        let user_turn = ChatMessage::user(Self::wrap_instruction(instruction));

        let mut messages = self.turns.clone();
        messages.push(user_turn.clone());

        let request = CompletionRequest {
            model: config.model.clone(),
            system_instruction: Some(self.system_instruction()),
            messages,
            temperature: Some(config.temperature),
            thinking_budget: config.thinking_budget,
        };

        let response = provider.complete(&request).await?;
        let len = response.text.chars().count();
        if len < MIN_DOCUMENT_LEN {
            tracing::debug!(len, "refinement reply rejected as non-answer");
            return Err(RefineError::TooShort {
                len,
                min: MIN_DOCUMENT_LEN,
            });
        }

        self.turns.push(user_turn);
        self.turns.push(ChatMessage::model(response.text.clone()));
        Ok(response.text)
    }
}
