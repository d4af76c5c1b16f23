//! Global configuration types for Minuta.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls
//! the model, sampling, and endpoint settings.

use serde::{Deserialize, Serialize};

/// Top-level configuration for Minuta.
///
/// Loaded from `~/.minuta/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Model identifier used for drafting and refinement.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. Low by default to favor consistent legal
    /// phrasing.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Optional reasoning-effort budget forwarded to the provider.
    #[serde(default)]
    pub thinking_budget: Option<u32>,

    /// Override the provider base URL (for proxies or testing).
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_temperature() -> f64 {
    0.4
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            thinking_budget: None,
            base_url: None,
        }
    }
}
