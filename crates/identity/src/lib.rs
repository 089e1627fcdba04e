//! `stagelink-identity` — narrow identity/session seam.
//!
//! The registration flow controller never touches authentication; only the
//! auth screens do, through [`IdentityService`]. The in-memory implementation
//! backs tests and local previews.

pub mod memory;
pub mod service;

pub use memory::InMemoryIdentity;
pub use service::{IdentityError, IdentityService, ProfileSeed, Session};
