//! Account kind: the two mutually exclusive profile shapes.

use serde::{Deserialize, Serialize};

/// Which of the two registration paths a draft belongs to.
///
/// Once chosen (explicitly on the welcome step, or inferred from the first
/// typed patch), the kind is never silently reassigned; switching requires a
/// full draft reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Individual,
    Company,
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccountKind::Individual => write!(f, "individual"),
            AccountKind::Company => write!(f, "company"),
        }
    }
}
