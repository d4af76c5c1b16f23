//! LlmProvider trait definition.
//!
//! The abstraction all completion backends implement. Uses native async
//! fn in traits (RPITIT, Rust 2024 edition); there is no streaming mode
//! because both drafting and refinement consume the full document at
//! once.
//!
//! Implementations live in minuta-infra (e.g., `GeminiProvider`). Tests
//! in this crate use scripted mock providers.

use minuta_types::error::GenerateError;
use minuta_types::llm::{CompletionRequest, CompletionResponse};

/// Trait for generative completion backends.
///
/// Implementations attach the typed [`GenerateError`] kind at the point
/// of failure; callers never classify errors by message content.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// A successful response always carries non-empty text; a response
    /// with no usable text surfaces as [`GenerateError::EmptyResponse`].
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, GenerateError>> + Send;
}
