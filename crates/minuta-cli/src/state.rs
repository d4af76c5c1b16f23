//! Application state wiring the service to concrete infra.
//!
//! The service is generic over the history store; AppState pins it to
//! the JSON-file implementation and resolves the Gemini provider from
//! the environment credential on demand.

use std::path::PathBuf;

use minuta_core::service::ContractService;
use minuta_infra::config::{load_global_config, resolve_data_dir};
use minuta_infra::credential::resolve_credential;
use minuta_infra::gemini::GeminiProvider;
use minuta_infra::history::JsonHistoryStore;
use minuta_types::error::GenerateError;

/// The service pinned to the JSON-file history store.
pub type ConcreteContractService = ContractService<JsonHistoryStore>;

/// Shared application state for CLI commands.
pub struct AppState {
    pub service: ConcreteContractService,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, load
    /// config and history.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let store = JsonHistoryStore::new(&data_dir);
        let service = ContractService::load(store, config).await?;

        Ok(Self { service, data_dir })
    }

    /// Build a Gemini provider from the environment credential.
    ///
    /// Commands that never call the API (list, show, export) do not go
    /// through here, so they work without a configured key.
    pub fn provider(&self) -> Result<GeminiProvider, GenerateError> {
        let mut provider = GeminiProvider::from_credential(resolve_credential())?;
        if let Some(base_url) = &self.service.config().base_url {
            provider = provider.with_base_url(base_url.clone());
        }
        Ok(provider)
    }
}
