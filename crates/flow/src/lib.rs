//! `stagelink-flow` — the registration flow controller.
//!
//! **Responsibility:** own the in-progress registration draft, sequence the
//! wizard steps per account kind, derive the weighted completion score, and
//! persist the draft through an injected backend so a mid-flow reload resumes
//! at the exact last state.
//!
//! The UI layer consumes this crate through [`DraftStore`]; form screens never
//! manage step transitions or persistence themselves.

pub mod draft;
pub mod persistence;
pub mod score;
pub mod steps;
pub mod store;

pub use draft::{DraftFields, RegistrationDraft};
pub use persistence::{DraftPersistence, FilePersistence, InMemoryPersistence, StoreError};
pub use score::{completion_percentage, ScoreWeights};
pub use steps::RegistrationStep;
pub use store::DraftStore;
