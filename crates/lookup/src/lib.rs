//! `stagelink-lookup` — async candidate-lookup seam for the form widgets.
//!
//! Address, company and vehicle searches are keystroke-triggered and
//! latency-bearing. This crate defines the narrow [`LookupService`] trait the
//! widgets call and a [`SearchSession`] that makes last-request-wins explicit:
//! issuing a new search supersedes every in-flight one for the same field,
//! and superseded results are discarded by construction instead of by timer
//! juggling. Failures degrade to "no suggestions", never to an error reaching
//! the flow.

pub mod candidate;
pub mod service;
pub mod session;

pub use candidate::{AddressCandidate, CompanyCandidate, VehicleCandidate};
pub use service::{LookupError, LookupService};
pub use session::{SearchOutcome, SearchSession};
