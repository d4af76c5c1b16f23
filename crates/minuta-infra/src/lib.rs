//! Infrastructure layer for Minuta.
//!
//! Contains implementations of the traits defined in `minuta-core`:
//! the Gemini HTTP provider, the environment credential resolver, the
//! JSON-file history store, and the `config.toml` loader.

pub mod config;
pub mod credential;
pub mod gemini;
pub mod history;
