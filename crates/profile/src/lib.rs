//! `stagelink-profile` — typed profile model for the registration product.
//!
//! The two account kinds (individual talent, company) are mutually exclusive
//! profile shapes. Each shape is a closed record of optional attributes; a
//! field that is `None` (or an empty collection) means "not yet provided".
//! Partial form writes are expressed as typed patches with last-writer-wins
//! shallow-merge semantics.

pub mod address;
pub mod company;
pub mod document;
pub mod individual;
pub mod kind;
pub mod patch;
pub mod validation;
pub mod vehicle;

pub use address::Address;
pub use company::{CompanyFields, Establishment, EstablishmentStatus, SubUser, SubUserRole};
pub use document::{Document, DocumentKind, DocumentUpload};
pub use individual::{
    IndividualFields, Language, LanguageLevel, ProfessionalStatus, Title,
};
pub use kind::AccountKind;
pub use patch::{CompanyPatch, DraftPatch, IndividualPatch};
pub use vehicle::{FuelType, Vehicle, VehicleCategory};
