//! Wizard step sequences.
//!
//! Each account kind has a fixed ordered sequence. `Welcome` is the universal
//! initial state; `Dashboard` is terminal. The sequencer only governs
//! position — per-step required-field gating is the calling form's job.

use serde::{Deserialize, Serialize};

use stagelink_profile::AccountKind;

/// One screen/state of the registration wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStep {
    #[default]
    Welcome,
    Personal,
    Professional,
    Company,
    Documents,
    Validation,
    Dashboard,
}

impl core::fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            RegistrationStep::Welcome => "welcome",
            RegistrationStep::Personal => "personal",
            RegistrationStep::Professional => "professional",
            RegistrationStep::Company => "company",
            RegistrationStep::Documents => "documents",
            RegistrationStep::Validation => "validation",
            RegistrationStep::Dashboard => "dashboard",
        };
        write!(f, "{s}")
    }
}

const INDIVIDUAL_SEQUENCE: &[RegistrationStep] = &[
    RegistrationStep::Welcome,
    RegistrationStep::Personal,
    RegistrationStep::Professional,
    RegistrationStep::Documents,
    RegistrationStep::Validation,
    RegistrationStep::Dashboard,
];

const COMPANY_SEQUENCE: &[RegistrationStep] = &[
    RegistrationStep::Welcome,
    RegistrationStep::Company,
    RegistrationStep::Documents,
    RegistrationStep::Validation,
    RegistrationStep::Dashboard,
];

/// The ordered step sequence for an account kind.
pub fn sequence(kind: AccountKind) -> &'static [RegistrationStep] {
    match kind {
        AccountKind::Individual => INDIVIDUAL_SEQUENCE,
        AccountKind::Company => COMPANY_SEQUENCE,
    }
}

/// Whether `step` is a valid member of `kind`'s sequence.
pub fn is_member(kind: AccountKind, step: RegistrationStep) -> bool {
    sequence(kind).contains(&step)
}

/// Position of `step` in `kind`'s sequence, if it is a member.
pub(crate) fn position(kind: AccountKind, step: RegistrationStep) -> Option<usize> {
    sequence(kind).iter().position(|s| *s == step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_start_at_welcome_and_end_at_dashboard() {
        for kind in [AccountKind::Individual, AccountKind::Company] {
            let seq = sequence(kind);
            assert_eq!(seq.first(), Some(&RegistrationStep::Welcome));
            assert_eq!(seq.last(), Some(&RegistrationStep::Dashboard));
        }
    }

    #[test]
    fn company_sequence_has_no_personal_steps() {
        assert!(!is_member(AccountKind::Company, RegistrationStep::Personal));
        assert!(!is_member(AccountKind::Company, RegistrationStep::Professional));
        assert!(!is_member(AccountKind::Individual, RegistrationStep::Company));
    }

    #[test]
    fn position_matches_sequence_order() {
        assert_eq!(
            position(AccountKind::Individual, RegistrationStep::Professional),
            Some(2)
        );
        assert_eq!(position(AccountKind::Company, RegistrationStep::Professional), None);
    }
}
