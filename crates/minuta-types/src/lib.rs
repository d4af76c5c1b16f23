//! Shared domain types for Minuta.
//!
//! This crate contains the core domain types used across the Minuta
//! contract-drafting assistant: contracts, form data, tones, LLM
//! request/response shapes, credentials, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono,
//! thiserror, secrecy.

pub mod config;
pub mod contract;
pub mod credential;
pub mod error;
pub mod llm;
