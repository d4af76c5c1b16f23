//! Contract service: the state controller for the drafting workflow.
//!
//! Owns the [`GenerationState`], the contract history (most recent
//! first), the active contract, and the current refinement session.
//! Persistence is an explicit side effect on every history mutation via
//! the injected [`HistoryStore`] -- there is no ambient module state.
//!
//! One generation may be in flight at a time: a submit or refine while
//! `Loading` is rejected, never queued. Every error returns the service
//! to an interactive state.

use uuid::Uuid;

use minuta_types::config::GlobalConfig;
use minuta_types::contract::{Contract, ContractFormData, GenerationState};
use minuta_types::error::{RefineError, ServiceError};

use crate::generator::generate_draft;
use crate::history::HistoryStore;
use crate::llm::LlmProvider;
use crate::session::RefinementSession;

/// Orchestrates form submission, refinement, saving, and history.
pub struct ContractService<H: HistoryStore> {
    store: H,
    config: GlobalConfig,
    state: GenerationState,
    /// Most recent first; no deduplication, no size cap.
    history: Vec<Contract>,
    active_id: Option<Uuid>,
    session: Option<RefinementSession>,
}

impl<H: HistoryStore> ContractService<H> {
    /// Load the service, reading the stored history once.
    pub async fn load(store: H, config: GlobalConfig) -> Result<Self, ServiceError> {
        let history = store.load().await?;
        Ok(Self {
            store,
            config,
            state: GenerationState::Idle,
            history,
            active_id: None,
            session: None,
        })
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// The full history, most recent first.
    pub fn history(&self) -> &[Contract] {
        &self.history
    }

    /// The currently active contract, if any.
    pub fn active(&self) -> Option<&Contract> {
        let id = self.active_id?;
        self.history.iter().find(|c| c.id == id)
    }

    /// The current refinement session, if a contract is active.
    pub fn session(&self) -> Option<&RefinementSession> {
        self.session.as_ref()
    }

    /// Find a history entry whose id starts with the given prefix.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Contract> {
        let needle = prefix.to_lowercase();
        self.history
            .iter()
            .find(|c| c.id.simple().to_string().starts_with(&needle))
    }

    /// Submit the form and generate a draft.
    ///
    /// Rejects an empty objective and a concurrent submission without
    /// ever invoking the generator. On success, exactly one new contract
    /// is prepended to history, persisted, made active, and a fresh
    /// refinement session is opened for it. On failure the state moves
    /// to `Error` and history is untouched.
    pub async fn submit_form<P: LlmProvider>(
        &mut self,
        provider: &P,
        form: ContractFormData,
    ) -> Result<Contract, ServiceError> {
        if !form.has_objective() {
            return Err(ServiceError::EmptyObjective);
        }
        if self.state == GenerationState::Loading {
            return Err(ServiceError::GenerationInFlight);
        }

        self.state = GenerationState::Loading;
        let content = match generate_draft(provider, &self.config, &form).await {
            Ok(content) => content,
            Err(err) => {
                self.state = GenerationState::Error;
                return Err(err.into());
            }
        };

        let contract = Contract::new(form, content);
        self.session = Some(RefinementSession::open(
            contract.content.clone(),
            contract.form_data.tone,
        ));
        self.active_id = Some(contract.id);
        self.history.insert(0, contract.clone());
        self.state = GenerationState::Success;
        self.store.persist(&self.history).await?;

        tracing::info!(id = %contract.id, title = %contract.title, "draft generated");
        Ok(contract)
    }

    /// Overwrite the active contract's content wholesale.
    ///
    /// Updates both the active reference and the history entry matched
    /// by id; `id`, `title`, `created_at`, and `form_data` are
    /// unchanged. The refinement session keeps its seed: the session is
    /// re-opened only on tone change or contract switch.
    pub async fn save(&mut self, new_text: String) -> Result<(), ServiceError> {
        let id = self.active_id.ok_or(ServiceError::NoActiveContract)?;
        self.overwrite_content(id, new_text)?;
        self.store.persist(&self.history).await?;
        Ok(())
    }

    /// Apply a refinement instruction to the active contract.
    ///
    /// On success performs the same wholesale overwrite as [`save`] and
    /// returns the new document. A too-short reply leaves the document,
    /// the history, and the session turns unchanged; the caller should
    /// rephrase.
    ///
    /// [`save`]: ContractService::save
    pub async fn refine<P: LlmProvider>(
        &mut self,
        provider: &P,
        instruction: &str,
    ) -> Result<String, ServiceError> {
        let id = self.active_id.ok_or(ServiceError::NoActiveContract)?;
        if self.state == GenerationState::Loading {
            return Err(ServiceError::GenerationInFlight);
        }

        let session = self
            .session
            .as_mut()
            .ok_or(ServiceError::NoActiveContract)?;
        self.state = GenerationState::Loading;

        match session.apply(provider, &self.config, instruction).await {
            Ok(text) => {
                self.overwrite_content(id, text.clone())?;
                self.state = GenerationState::Success;
                self.store.persist(&self.history).await?;
                Ok(text)
            }
            Err(err @ RefineError::TooShort { .. }) => {
                // The document still stands; back to interactive.
                self.state = GenerationState::Success;
                Err(err.into())
            }
            Err(err) => {
                self.state = GenerationState::Error;
                Err(err.into())
            }
        }
    }

    /// Make a stored contract the active one and open a fresh
    /// refinement session seeded with its content and tone.
    pub fn open_contract(&mut self, id: Uuid) -> Result<(), ServiceError> {
        let contract = self
            .history
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ServiceError::ContractNotFound(id.to_string()))?;
        self.session = Some(RefinementSession::open(
            contract.content.clone(),
            contract.form_data.tone,
        ));
        self.active_id = Some(id);
        self.state = GenerationState::Idle;
        Ok(())
    }

    fn overwrite_content(&mut self, id: Uuid, new_text: String) -> Result<(), ServiceError> {
        let entry = self
            .history
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ServiceError::ContractNotFound(id.to_string()))?;
        entry.content = new_text;
        Ok(())
    }

    #[cfg(test)]
    fn force_state(&mut self, state: GenerationState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minuta_types::contract::LanguageTone;
    use minuta_types::error::{GenerateError, HistoryError};
    use minuta_types::llm::{CompletionRequest, CompletionResponse};

    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// In-memory store recording every persist call.
    #[derive(Default)]
    struct MemoryStore {
        initial: Vec<Contract>,
        snapshots: Mutex<Vec<Vec<Contract>>>,
    }

    impl MemoryStore {
        fn persist_count(&self) -> usize {
            self.snapshots.lock().unwrap().len()
        }
    }

    impl HistoryStore for &MemoryStore {
        async fn load(&self) -> Result<Vec<Contract>, HistoryError> {
            Ok(self.initial.clone())
        }

        async fn persist(&self, history: &[Contract]) -> Result<(), HistoryError> {
            self.snapshots.lock().unwrap().push(history.to_vec());
            Ok(())
        }
    }

    struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, GenerateError>>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<Result<String, GenerateError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
            }
        }

        fn untouchable() -> Self {
            Self::new(Vec::new())
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, GenerateError> {
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("provider must not be invoked");
            reply.map(|text| CompletionResponse {
                text,
                model: request.model.clone(),
            })
        }
    }

    fn sample_form() -> ContractFormData {
        ContractFormData {
            objective: "Serviço de consultoria por 3 meses".to_string(),
            party_a: "ACME LTDA".to_string(),
            party_b: "João Silva".to_string(),
            tone: LanguageTone::Balanced,
            specific_clauses: "Multa de 15%".to_string(),
        }
    }

    fn full_document(marker: &str) -> String {
        format!(
            "# CONTRATO DE PRESTAÇÃO DE SERVIÇOS\n\n**Cláusula 1ª - Objeto**: {marker}\n{}",
            "cláusulas padrão. ".repeat(10)
        )
    }

    async fn service(store: &MemoryStore) -> ContractService<&MemoryStore> {
        ContractService::load(store, GlobalConfig::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_submit_empty_objective_never_invokes_generator() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::untouchable();
        let mut svc = service(&store).await;

        for state in [
            GenerationState::Idle,
            GenerationState::Loading,
            GenerationState::Success,
            GenerationState::Error,
        ] {
            svc.force_state(state);
            let mut form = sample_form();
            form.objective = "   ".to_string();
            let err = svc.submit_form(&provider, form).await.unwrap_err();
            assert!(matches!(err, ServiceError::EmptyObjective));
        }
        assert!(svc.history().is_empty());
        assert_eq!(store.persist_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_rejected_without_call() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::untouchable();
        let mut svc = service(&store).await;
        svc.force_state(GenerationState::Loading);

        let err = svc.submit_form(&provider, sample_form()).await.unwrap_err();
        assert!(matches!(err, ServiceError::GenerationInFlight));
    }

    #[tokio::test]
    async fn test_successful_submit_prepends_one_contract() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![Ok(full_document("consultoria"))]);
        let mut svc = service(&store).await;
        assert_eq!(svc.state(), GenerationState::Idle);

        let contract = svc.submit_form(&provider, sample_form()).await.unwrap();

        assert_eq!(svc.state(), GenerationState::Success);
        assert_eq!(svc.history().len(), 1);
        assert_eq!(svc.history()[0].content, full_document("consultoria"));
        assert_eq!(svc.history()[0].id, contract.id);
        assert_eq!(svc.active().unwrap().id, contract.id);
        assert!(svc.session().is_some());
        assert_eq!(store.persist_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_history_unchanged() {
        let store = MemoryStore::default();
        let provider =
            ScriptedProvider::new(vec![Err(GenerateError::Transport("offline".to_string()))]);
        let mut svc = service(&store).await;

        let err = svc.submit_form(&provider, sample_form()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Generate(GenerateError::Transport(_))
        ));
        assert_eq!(svc.state(), GenerationState::Error);
        assert!(svc.history().is_empty());
        assert_eq!(store.persist_count(), 0);
    }

    #[tokio::test]
    async fn test_error_state_allows_retry() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![
            Err(GenerateError::EmptyResponse),
            Ok(full_document("segunda tentativa")),
        ]);
        let mut svc = service(&store).await;

        svc.submit_form(&provider, sample_form()).await.unwrap_err();
        assert_eq!(svc.state(), GenerationState::Error);

        svc.submit_form(&provider, sample_form()).await.unwrap();
        assert_eq!(svc.state(), GenerationState::Success);
        assert_eq!(svc.history().len(), 1);
    }

    #[tokio::test]
    async fn test_save_overwrites_content_only() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![Ok(full_document("original"))]);
        let mut svc = service(&store).await;

        let before = svc.submit_form(&provider, sample_form()).await.unwrap();
        svc.save("texto editado à mão".to_string()).await.unwrap();

        let after = svc.active().unwrap();
        assert_eq!(after.content, "texto editado à mão");
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, before.title);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.form_data.party_b, before.form_data.party_b);
        assert_eq!(svc.history()[0].content, "texto editado à mão");
        assert_eq!(store.persist_count(), 2);
    }

    #[tokio::test]
    async fn test_save_without_active_contract_fails() {
        let store = MemoryStore::default();
        let mut svc = service(&store).await;
        let err = svc.save("x".to_string()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoActiveContract));
    }

    #[tokio::test]
    async fn test_refine_replaces_document_wholesale() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![
            Ok(full_document("original")),
            Ok(full_document("com multa de 10%")),
        ]);
        let mut svc = service(&store).await;

        svc.submit_form(&provider, sample_form()).await.unwrap();
        let text = svc
            .refine(&provider, "Adicione multa de 10% por atraso")
            .await
            .unwrap();

        assert_eq!(svc.active().unwrap().content, text);
        assert_eq!(svc.history()[0].content, text);
        assert_eq!(svc.state(), GenerationState::Success);
        assert_eq!(store.persist_count(), 2);
    }

    #[tokio::test]
    async fn test_refine_too_short_leaves_everything_unchanged() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![
            Ok(full_document("original")),
            Ok("Feito!".to_string()),
        ]);
        let mut svc = service(&store).await;

        svc.submit_form(&provider, sample_form()).await.unwrap();
        let before = svc.active().unwrap().content.clone();

        let err = svc.refine(&provider, "melhore").await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Refine(RefineError::TooShort { .. })
        ));
        assert_eq!(svc.active().unwrap().content, before);
        assert_eq!(svc.state(), GenerationState::Success, "back to interactive");
        assert_eq!(store.persist_count(), 1, "no persist on rejection");
    }

    #[tokio::test]
    async fn test_refine_transport_failure_sets_error_state() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![
            Ok(full_document("original")),
            Err(GenerateError::Transport("reset".to_string())),
        ]);
        let mut svc = service(&store).await;

        svc.submit_form(&provider, sample_form()).await.unwrap();
        let before = svc.active().unwrap().content.clone();

        svc.refine(&provider, "qualquer").await.unwrap_err();
        assert_eq!(svc.state(), GenerationState::Error);
        assert_eq!(svc.active().unwrap().content, before);
    }

    #[tokio::test]
    async fn test_open_contract_reseeds_session() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![
            Ok(full_document("primeiro")),
            Ok(full_document("segundo")),
        ]);
        let mut svc = service(&store).await;

        let first = svc.submit_form(&provider, sample_form()).await.unwrap();
        let mut other = sample_form();
        other.tone = LanguageTone::Formal;
        svc.submit_form(&provider, other).await.unwrap();

        svc.open_contract(first.id).unwrap();
        assert_eq!(svc.active().unwrap().id, first.id);
        let session = svc.session().unwrap();
        assert_eq!(session.tone(), LanguageTone::Balanced);
        assert_eq!(session.seed_document(), first.content);
        assert!(session.turns().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_prefix() {
        let store = MemoryStore::default();
        let provider = ScriptedProvider::new(vec![Ok(full_document("x"))]);
        let mut svc = service(&store).await;

        let contract = svc.submit_form(&provider, sample_form()).await.unwrap();
        let prefix = contract.id.simple().to_string()[..8].to_string();

        assert_eq!(svc.find_by_prefix(&prefix).unwrap().id, contract.id);
        assert!(svc.find_by_prefix("zzzzzzzz").is_none());
    }

    #[tokio::test]
    async fn test_load_restores_stored_history() {
        let stored = Contract::new(sample_form(), full_document("persistido"));
        let store = MemoryStore {
            initial: vec![stored.clone()],
            snapshots: Mutex::new(Vec::new()),
        };
        let svc = service(&store).await;
        assert_eq!(svc.history().len(), 1);
        assert_eq!(svc.history()[0].id, stored.id);
        assert!(svc.active().is_none(), "nothing active until opened");
    }
}
