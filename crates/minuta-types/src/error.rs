//! Error taxonomies for Minuta operations.
//!
//! Each failure carries its kind as an enum variant attached at the point
//! of failure (inside the API client or the service), never inferred by
//! matching on message text downstream. The variants map one-to-one onto
//! the user-visible remedies: reconfigure the credential, obtain a new
//! credential, retry, check connectivity, or rephrase the instruction.

use thiserror::Error;

/// Errors from draft generation and the underlying provider call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Credential absent, empty, or the literal "undefined". Detected
    /// locally before any network call. Remedy: configure the API key.
    #[error("API key not configured")]
    NotConfigured,

    /// Credential present but rejected by the endpoint (401/403).
    /// Remedy: obtain a new credential.
    #[error("API key rejected by the provider")]
    AuthenticationRejected,

    /// The endpoint accepted the call but returned no usable text.
    /// Remedy: retry.
    #[error("the model returned an empty response")]
    EmptyResponse,

    /// The endpoint rejected the request shape (HTTP 400).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure or unexpected provider error. Remedy: retry or
    /// check connectivity.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from applying a refinement instruction.
#[derive(Debug, Error)]
pub enum RefineError {
    /// The reply was too short to be a full document; treated as a
    /// non-answer. Remedy: ask a more specific question. Detected
    /// locally, not by the endpoint.
    #[error("refinement reply too short to be a document ({len} < {min} chars)")]
    TooShort { len: usize, min: usize },

    /// The underlying completion call failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Errors from the persistent history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read history: {0}")]
    Read(String),

    #[error("failed to write history: {0}")]
    Write(String),
}

/// Errors from the contract service (state controller).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submit called with an empty objective; the generator is never
    /// invoked.
    #[error("objective must not be empty")]
    EmptyObjective,

    /// Submit called while a generation is already loading. The trigger
    /// is a no-op, not a queue.
    #[error("a generation is already in flight")]
    GenerationInFlight,

    /// No active contract to save, refine, or export.
    #[error("no active contract")]
    NoActiveContract,

    /// Contract id (or prefix) not found in history.
    #[error("contract '{0}' not found")]
    ContractNotFound(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Refine(#[from] RefineError),

    #[error(transparent)]
    History(#[from] HistoryError),
}
