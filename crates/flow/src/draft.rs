//! The registration draft aggregate.
//!
//! A draft is the in-progress, unsubmitted registration record for one
//! session: account kind, wizard position, accumulated typed fields and
//! document metadata. All mutation goes through the operations here; the
//! store layer wraps them with persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stagelink_core::{DocumentId, DomainError, DomainResult};
use stagelink_profile::{
    AccountKind, CompanyFields, Document, DocumentUpload, DraftPatch, IndividualFields,
};

use crate::steps::{self, RegistrationStep};

/// Accumulated form fields, tagged by account kind.
///
/// `Unset` means the welcome step has not been passed and no typed patch has
/// arrived yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "accountKind", content = "formData", rename_all = "lowercase")]
pub enum DraftFields {
    #[default]
    Unset,
    Individual(IndividualFields),
    Company(CompanyFields),
}

impl DraftFields {
    pub fn kind(&self) -> Option<AccountKind> {
        match self {
            DraftFields::Unset => None,
            DraftFields::Individual(_) => Some(AccountKind::Individual),
            DraftFields::Company(_) => Some(AccountKind::Company),
        }
    }

    pub fn as_individual(&self) -> Option<&IndividualFields> {
        match self {
            DraftFields::Individual(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_company(&self) -> Option<&CompanyFields> {
        match self {
            DraftFields::Company(f) => Some(f),
            _ => None,
        }
    }

    fn empty_for(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Individual => DraftFields::Individual(IndividualFields::default()),
            AccountKind::Company => DraftFields::Company(CompanyFields::default()),
        }
    }
}

/// Aggregate root: the in-progress registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    #[serde(flatten)]
    fields: DraftFields,
    current_step: RegistrationStep,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    documents: Vec<Document>,
}

impl RegistrationDraft {
    pub fn account_kind(&self) -> Option<AccountKind> {
        self.fields.kind()
    }

    pub fn current_step(&self) -> RegistrationStep {
        self.current_step
    }

    pub fn fields(&self) -> &DraftFields {
        &self.fields
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Shallow-merge a typed form patch into the draft.
    ///
    /// While the kind is unset, the patch's shape sets it (structural
    /// inference, a convenience for forms reached before the welcome choice).
    /// Once the kind is set, a patch of the other shape is a logged no-op;
    /// switching kinds requires an explicit [`reset`](Self::reset).
    ///
    /// Returns whether the patch was applied.
    pub fn apply_patch(&mut self, patch: &DraftPatch) -> bool {
        if let DraftFields::Unset = self.fields {
            tracing::debug!(kind = %patch.kind(), "account kind inferred from first patch");
            self.fields = DraftFields::empty_for(patch.kind());
        }

        match (&mut self.fields, patch) {
            (DraftFields::Individual(fields), DraftPatch::Individual(p)) => {
                p.apply_to(fields);
                true
            }
            (DraftFields::Company(fields), DraftPatch::Company(p)) => {
                p.apply_to(fields);
                true
            }
            (fields, patch) => {
                tracing::warn!(
                    current = ?fields.kind(),
                    patch = %patch.kind(),
                    "ignoring patch for mismatched account kind"
                );
                false
            }
        }
    }

    /// Explicitly choose the account kind (the welcome-step path, always
    /// authoritative).
    ///
    /// Allowed while the kind is unset or already equal; choosing the other
    /// kind on a started draft is a conflict and requires a reset first.
    pub fn set_account_kind(&mut self, kind: AccountKind) -> DomainResult<()> {
        match self.fields.kind() {
            None => {
                self.fields = DraftFields::empty_for(kind);
                Ok(())
            }
            Some(current) if current == kind => Ok(()),
            Some(current) => Err(DomainError::conflict(format!(
                "account kind is already {current}; reset the draft to switch to {kind}"
            ))),
        }
    }

    /// Append a document with a freshly generated id and upload timestamp.
    ///
    /// Document kind is deliberately not validated against the account kind:
    /// documents are optional and loosely categorized.
    pub fn add_document(&mut self, upload: DocumentUpload, now: DateTime<Utc>) -> DocumentId {
        let doc = Document::from_upload(upload, now);
        let id = doc.id;
        self.documents.push(doc);
        id
    }

    /// Remove a document by id; no-op (and `false`) if absent.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        self.documents.len() != before
    }

    /// Advance one step in the current kind's sequence; no-op at the last
    /// step or while the kind is unset.
    pub fn next_step(&mut self) {
        let Some(kind) = self.fields.kind() else {
            return;
        };
        let seq = steps::sequence(kind);
        if let Some(idx) = steps::position(kind, self.current_step) {
            if idx + 1 < seq.len() {
                self.current_step = seq[idx + 1];
                tracing::debug!(step = %self.current_step, "advanced to next step");
            }
        }
    }

    /// Move one step back; no-op at the first step or while the kind is unset.
    pub fn prev_step(&mut self) {
        let Some(kind) = self.fields.kind() else {
            return;
        };
        let seq = steps::sequence(kind);
        if let Some(idx) = steps::position(kind, self.current_step) {
            if idx > 0 {
                self.current_step = seq[idx - 1];
                tracing::debug!(step = %self.current_step, "moved to previous step");
            }
        }
    }

    /// Direct jump for out-of-sequence transitions (e.g. "edit profile" from
    /// the dashboard). Rejected when `step` is not a member of the current
    /// kind's sequence.
    pub fn jump_to(&mut self, step: RegistrationStep) -> DomainResult<()> {
        match self.fields.kind() {
            None if step == RegistrationStep::Welcome => Ok(()),
            None => Err(DomainError::invariant(
                "cannot jump before an account kind is chosen",
            )),
            Some(kind) if steps::is_member(kind, step) => {
                self.current_step = step;
                Ok(())
            }
            Some(kind) => Err(DomainError::invariant(format!(
                "step {step} is not part of the {kind} sequence"
            ))),
        }
    }

    /// Steps of the current sequence whose screens have their minimum
    /// required fields, for the step-indicator UI. Pure derivation, never
    /// cached. The Documents step is always considered done — documents are
    /// optional by policy.
    pub fn completed_steps(&self) -> Vec<RegistrationStep> {
        let mut done = Vec::new();
        match &self.fields {
            DraftFields::Unset => {}
            DraftFields::Individual(fields) => {
                if fields.personal_screen_complete() {
                    done.push(RegistrationStep::Personal);
                }
                if fields.professional_screen_complete() {
                    done.push(RegistrationStep::Professional);
                }
                done.push(RegistrationStep::Documents);
            }
            DraftFields::Company(fields) => {
                if fields.company_screen_complete() {
                    done.push(RegistrationStep::Company);
                }
                done.push(RegistrationStep::Documents);
            }
        }
        done
    }

    /// Reset to the empty initial state (kind unset, back at Welcome).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
