//! Environment credential resolution.
//!
//! One resolution strategy with one typed outcome, consumed uniformly by
//! drafting and refinement (both go through the same provider
//! construction). Sources are checked in priority order; the first
//! source that is *set* decides the outcome -- a set-but-unusable value
//! classifies as `Invalid` rather than falling through to the next
//! source.

use minuta_types::credential::ApiCredential;

/// Credential sources in priority order.
const KEY_SOURCES: [&str; 2] = ["MINUTA_API_KEY", "API_KEY"];

/// Resolve the API credential from the process environment.
pub fn resolve_credential() -> ApiCredential {
    resolve_with(|key| std::env::var(key).ok())
}

/// Resolve the API credential through an arbitrary lookup.
///
/// Split out from [`resolve_credential`] so classification can be tested
/// without mutating process-wide environment state.
pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> ApiCredential {
    for source in KEY_SOURCES {
        if let Some(raw) = lookup(source) {
            return ApiCredential::from_raw(Some(raw));
        }
    }
    ApiCredential::Missing
}
