//! The draft store: the single owner of the in-progress registration.
//!
//! Every mutation is synchronous, applied to the in-memory draft, and
//! followed by a persistence write before returning, so a mid-flow reload
//! resumes at the exact last state (step position included). Persistence
//! failures are logged and swallowed — the in-memory draft stays
//! authoritative for the rest of the session.

use chrono::Utc;

use stagelink_core::{DocumentId, DomainResult};
use stagelink_profile::{AccountKind, Document, DocumentUpload, DraftPatch};

use crate::draft::{DraftFields, RegistrationDraft};
use crate::persistence::DraftPersistence;
use crate::score::{completion_percentage, ScoreWeights};
use crate::steps::RegistrationStep;

/// Storage key of the serialized draft blob.
pub const DRAFT_KEY: &str = "registrationData";

/// Owns the [`RegistrationDraft`] and the injected persistence backend.
///
/// The UI layer goes through this type for the full operation surface of the
/// flow: field merges, account-kind selection, document management, step
/// navigation, completed-step classification and the completion score.
#[derive(Debug)]
pub struct DraftStore<P: DraftPersistence> {
    draft: RegistrationDraft,
    persistence: P,
    weights: ScoreWeights,
}

impl<P: DraftPersistence> DraftStore<P> {
    /// Create a store over an empty draft. Call [`hydrate`](Self::hydrate)
    /// to resume a persisted session.
    pub fn new(persistence: P) -> Self {
        Self::with_weights(persistence, ScoreWeights::default())
    }

    pub fn with_weights(persistence: P, weights: ScoreWeights) -> Self {
        Self {
            draft: RegistrationDraft::default(),
            persistence,
            weights,
        }
    }

    /// Load a previously persisted draft, if any.
    ///
    /// Never fails: a missing blob yields the empty initial draft, and a
    /// corrupt one is treated as absent (logged, not surfaced).
    pub fn hydrate(&mut self) {
        self.draft = match self.persistence.load(DRAFT_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(draft) => draft,
                Err(err) => {
                    tracing::warn!(%err, "persisted draft is corrupt; starting fresh");
                    RegistrationDraft::default()
                }
            },
            Ok(None) => RegistrationDraft::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to read persisted draft; starting fresh");
                RegistrationDraft::default()
            }
        };
    }

    /// Shallow-merge a form patch; infers the account kind on the first
    /// typed write while it is still unset. Returns whether the patch was
    /// applied (a patch for the other kind is a logged no-op).
    pub fn update_form_data(&mut self, patch: &DraftPatch) -> bool {
        let applied = self.draft.apply_patch(patch);
        if applied {
            self.persist();
        }
        applied
    }

    /// Explicit account-kind selection from the welcome step; authoritative.
    pub fn set_account_kind(&mut self, kind: AccountKind) -> DomainResult<()> {
        self.draft.set_account_kind(kind)?;
        self.persist();
        Ok(())
    }

    pub fn add_document(&mut self, upload: DocumentUpload) -> DocumentId {
        let id = self.draft.add_document(upload, Utc::now());
        self.persist();
        id
    }

    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        let removed = self.draft.remove_document(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn next_step(&mut self) {
        let before = self.draft.current_step();
        self.draft.next_step();
        if self.draft.current_step() != before {
            self.persist();
        }
    }

    pub fn prev_step(&mut self) {
        let before = self.draft.current_step();
        self.draft.prev_step();
        if self.draft.current_step() != before {
            self.persist();
        }
    }

    /// Direct jump; rejected for steps outside the current kind's sequence.
    pub fn set_current_step(&mut self, step: RegistrationStep) -> DomainResult<()> {
        self.draft.jump_to(step)?;
        self.persist();
        Ok(())
    }

    /// Clear persisted storage and return to the empty initial state.
    pub fn reset(&mut self) {
        self.draft.reset();
        if let Err(err) = self.persistence.clear(DRAFT_KEY) {
            tracing::warn!(%err, "failed to clear persisted draft");
        }
    }

    pub fn completed_steps(&self) -> Vec<RegistrationStep> {
        self.draft.completed_steps()
    }

    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(&self.draft, &self.weights)
    }

    pub fn account_kind(&self) -> Option<AccountKind> {
        self.draft.account_kind()
    }

    pub fn current_step(&self) -> RegistrationStep {
        self.draft.current_step()
    }

    pub fn documents(&self) -> &[Document] {
        self.draft.documents()
    }

    pub fn fields(&self) -> &DraftFields {
        self.draft.fields()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.draft) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize draft; skipping persistence write");
                return;
            }
        };
        if let Err(err) = self.persistence.save(DRAFT_KEY, &blob) {
            tracing::warn!(%err, "failed to persist draft; in-memory state remains authoritative");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{InMemoryPersistence, StoreError};
    use chrono::NaiveDate;
    use stagelink_profile::{DocumentKind, IndividualPatch};

    fn init_tracing() {
        stagelink_observability::init();
    }

    fn upload(kind: DocumentKind) -> DocumentUpload {
        DocumentUpload {
            title: "doc".to_string(),
            kind,
            file_name: "doc.pdf".to_string(),
            obtained_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            expiration_date: None,
        }
    }

    fn jean_patch() -> DraftPatch {
        IndividualPatch {
            first_name: Some("Jean".to_string()),
            last_name: Some("Dupont".to_string()),
            email: Some("jean@example.fr".to_string()),
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn reload_resumes_at_the_exact_last_state() {
        init_tracing();
        let backend = InMemoryPersistence::new();

        let mut store = DraftStore::new(backend.clone());
        store.hydrate();
        store.update_form_data(&jean_patch());
        store.add_document(upload(DocumentKind::IdCard));
        store.next_step();
        store.next_step();
        let before = store.draft().clone();

        // Simulated page reload: a fresh store over the same backend.
        drop(store);
        let mut resumed = DraftStore::new(backend);
        resumed.hydrate();

        assert_eq!(resumed.draft(), &before);
        assert_eq!(resumed.current_step(), RegistrationStep::Professional);
        assert_eq!(resumed.documents().len(), 1);
    }

    #[test]
    fn corrupt_blob_hydrates_to_empty_draft() {
        init_tracing();
        let backend = InMemoryPersistence::new();
        backend.save(DRAFT_KEY, "{not json").unwrap();

        let mut store = DraftStore::new(backend);
        store.hydrate();

        assert_eq!(store.account_kind(), None);
        assert_eq!(store.current_step(), RegistrationStep::Welcome);
        assert!(store.documents().is_empty());
    }

    #[test]
    fn reset_clears_storage_and_draft() {
        let backend = InMemoryPersistence::new();
        let mut store = DraftStore::new(backend.clone());
        store.update_form_data(&jean_patch());
        assert!(backend.load(DRAFT_KEY).unwrap().is_some());

        store.reset();

        assert_eq!(backend.load(DRAFT_KEY).unwrap(), None);
        assert_eq!(store.account_kind(), None);
        assert_eq!(store.current_step(), RegistrationStep::Welcome);
        assert_eq!(store.completion_percentage(), 0);
    }

    /// Backend that always fails, to show persistence errors stay non-fatal.
    struct FailingPersistence;

    impl DraftPersistence for FailingPersistence {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::backend("load refused"))
        }
        fn save(&self, _key: &str, _blob: &str) -> Result<(), StoreError> {
            Err(StoreError::backend("save refused"))
        }
        fn clear(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::backend("clear refused"))
        }
    }

    #[test]
    fn persistence_failures_leave_the_in_memory_draft_authoritative() {
        init_tracing();
        let mut store = DraftStore::new(FailingPersistence);
        store.hydrate();

        assert!(store.update_form_data(&jean_patch()));
        store.next_step();
        store.reset();
        store.set_account_kind(AccountKind::Company).unwrap();

        assert_eq!(store.account_kind(), Some(AccountKind::Company));
    }

    #[test]
    fn completion_percentage_tracks_mutations() {
        let mut store = DraftStore::new(InMemoryPersistence::new());
        assert_eq!(store.completion_percentage(), 0);

        store.update_form_data(&jean_patch());
        assert_eq!(store.completion_percentage(), 27);

        let id = store.add_document(upload(DocumentKind::Rib));
        assert_eq!(store.completion_percentage(), 32); // round(100 * 3.5 / 11)

        store.remove_document(id);
        assert_eq!(store.completion_percentage(), 27);
    }

    #[test]
    fn edit_profile_jump_is_validated_against_the_sequence() {
        let mut store = DraftStore::new(InMemoryPersistence::new());
        store.set_account_kind(AccountKind::Company).unwrap();

        store.set_current_step(RegistrationStep::Company).unwrap();
        assert!(store.set_current_step(RegistrationStep::Personal).is_err());
        assert_eq!(store.current_step(), RegistrationStep::Company);
    }
}
