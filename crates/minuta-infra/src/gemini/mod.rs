//! Google Gemini provider.
//!
//! - `client`: the [`LlmProvider`](minuta_core::llm::LlmProvider)
//!   implementation over the `generateContent` REST endpoint.
//! - `types`: Gemini-specific wire structures.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
