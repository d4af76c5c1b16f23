//! HistoryStore trait definition.
//!
//! The contract history is read once at startup and written wholesale on
//! every mutation. The concrete JSON-file store lives in minuta-infra.

use minuta_types::contract::Contract;
use minuta_types::error::HistoryError;

/// Persistent store for the contract history.
///
/// `load` must degrade gracefully: a missing or unparseable store yields
/// an empty history, never a crash. Only genuine I/O failures are
/// surfaced as errors.
pub trait HistoryStore: Send + Sync {
    /// Read the full history, most recent first.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Contract>, HistoryError>> + Send;

    /// Write the full history, replacing whatever was stored.
    fn persist(
        &self,
        history: &[Contract],
    ) -> impl std::future::Future<Output = Result<(), HistoryError>> + Send;
}
