//! JSON-file history store.
//!
//! One file (`history.json`) under the data dir holds the serialized
//! contract list. Read once at startup; written wholesale on every
//! history mutation. A missing or unparseable file degrades to an empty
//! history -- storage corruption must never crash the application.

use std::path::{Path, PathBuf};

use minuta_core::history::HistoryStore;
use minuta_types::contract::Contract;
use minuta_types::error::HistoryError;

/// File-backed implementation of [`HistoryStore`].
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Store backed by `{data_dir}/history.json`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("history.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    async fn load(&self) -> Result<Vec<Contract>, HistoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(HistoryError::Read(err.to_string())),
        };

        match serde_json::from_str(&content) {
            Ok(history) => Ok(history),
            Err(err) => {
                tracing::warn!(
                    "Corrupt history at {}: {err}, starting with empty history",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, history: &[Contract]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| HistoryError::Write(err.to_string()))?;
        }

        let json = serde_json::to_string_pretty(history)
            .map_err(|err| HistoryError::Write(err.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| HistoryError::Write(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minuta_types::contract::{ContractFormData, LanguageTone};
    use tempfile::TempDir;

    fn sample_contract(marker: &str) -> Contract {
        Contract::new(
            ContractFormData {
                objective: format!("Contrato de {marker}"),
                party_a: "ACME LTDA".to_string(),
                party_b: "João Silva".to_string(),
                tone: LanguageTone::Balanced,
                specific_clauses: String::new(),
            },
            format!("# CONTRATO {marker}"),
        )
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonHistoryStore::new(tmp.path());
        let history = store.load().await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_persist_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = JsonHistoryStore::new(tmp.path());

        let contracts = vec![sample_contract("locação"), sample_contract("consultoria")];
        store.persist(&contracts).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, contracts[0].id);
        assert_eq!(loaded[0].content, "# CONTRATO locação");
        assert_eq!(loaded[1].form_data.tone, LanguageTone::Balanced);
    }

    #[tokio::test]
    async fn test_load_corrupt_file_degrades_to_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonHistoryStore::new(tmp.path());
        tokio::fs::write(store.path(), "{not json at all")
            .await
            .unwrap();

        let history = store.load().await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_persist_creates_data_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("deep").join("data");
        let store = JsonHistoryStore::new(&nested);

        store.persist(&[sample_contract("x")]).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_persist_overwrites_wholesale() {
        let tmp = TempDir::new().unwrap();
        let store = JsonHistoryStore::new(tmp.path());

        store
            .persist(&[sample_contract("a"), sample_contract("b")])
            .await
            .unwrap();
        store.persist(&[sample_contract("c")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "# CONTRATO c");
    }
}
