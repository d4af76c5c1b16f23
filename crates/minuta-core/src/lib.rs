//! Business logic for Minuta.
//!
//! This crate holds the drafting workflow, independent of any concrete
//! provider or storage backend:
//!
//! - [`prompt`]: builds the tone-specific system directive and the
//!   draft request from the user's form.
//! - [`generator`]: the single-shot draft generation call.
//! - [`session`]: the stateful refinement conversation seeded with the
//!   current document.
//! - [`service`]: the state controller owning generation state and the
//!   contract history.
//! - [`export`]: the word-processor export transform.
//!
//! Concrete implementations of [`llm::LlmProvider`] and
//! [`history::HistoryStore`] live in minuta-infra (clean architecture:
//! this crate never depends on infra).

pub mod export;
pub mod generator;
pub mod history;
pub mod llm;
pub mod prompt;
pub mod service;
pub mod session;
