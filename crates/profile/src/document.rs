//! Documents held in the draft's vault.
//!
//! Only metadata and an opaque file reference live here; file bytes are the
//! upload subsystem's concern.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stagelink_core::DocumentId;

/// Domain category of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Bank details (relevé d'identité bancaire).
    Rib,
    IdCard,
    Diploma,
    Caces,
    Medical,
    Certification,
    /// Certificate of incorporation (extrait Kbis).
    Kbis,
    Insurance,
    Other,
}

/// Caller-provided part of a new document; id and upload timestamp are
/// assigned by the draft when it is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub title: String,
    pub kind: DocumentKind,
    /// Opaque reference into the upload subsystem, never the bytes.
    pub file_name: String,
    pub obtained_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
}

/// A document recorded in the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub kind: DocumentKind,
    pub file_name: String,
    pub obtained_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn from_upload(upload: DocumentUpload, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::new(),
            title: upload.title,
            kind: upload.kind,
            file_name: upload.file_name,
            obtained_date: upload.obtained_date,
            expiration_date: upload.expiration_date,
            uploaded_at,
        }
    }

    /// Whether the document is past its expiration date, if it has one.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|d| d < today)
    }
}
