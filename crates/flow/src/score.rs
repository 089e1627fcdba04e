//! Weighted completion scoring.
//!
//! A plain steps-done ratio would reward one optional document as much as a
//! whole required form. Instead, each required identity field is worth one
//! point and optional-but-encouraged signals (documents, collaborators) earn
//! fractional bonus points on an enlarged denominator, so required fields
//! stay dominant and the percentage never exceeds 100.

use serde::{Deserialize, Serialize};

use stagelink_profile::DocumentKind;

use crate::draft::{DraftFields, RegistrationDraft};

/// Bonus weights, tunable product policy.
///
/// Defaults reproduce the shipped behavior; only the defaults are covered by
/// the scenario tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreWeights {
    /// Bonus for a proof-of-identity document on an individual draft.
    pub id_card_bonus: f64,
    /// Bonus for a bank-details (RIB) document on an individual draft.
    pub rib_bonus: f64,
    /// Bonus when the vault holds strictly more documents than the threshold.
    pub many_documents_bonus: f64,
    pub many_documents_threshold: usize,
    /// Added to the individual denominator for the bonus pool.
    pub individual_bonus_pool: f64,

    /// Bonus for an incorporation (Kbis) document on a company draft.
    pub kbis_bonus: f64,
    /// Bonus when at least one collaborator seat exists.
    pub sub_user_bonus: f64,
    /// Added to the company denominator for the bonus pool.
    pub company_bonus_pool: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            id_card_bonus: 0.5,
            rib_bonus: 0.5,
            many_documents_bonus: 1.0,
            many_documents_threshold: 2,
            individual_bonus_pool: 2.0,
            kbis_bonus: 0.5,
            sub_user_bonus: 1.0,
            company_bonus_pool: 1.5,
        }
    }
}

fn count_present(checks: &[bool]) -> f64 {
    checks.iter().filter(|present| **present).count() as f64
}

/// Derive the 0–100 completion percentage of a draft.
///
/// Pure function of (kind, fields, documents); recompute on every change,
/// never store the result. Defined as 0 while the kind is unset.
pub fn completion_percentage(draft: &RegistrationDraft, weights: &ScoreWeights) -> u8 {
    let documents = draft.documents();
    let has_kind = |kind: DocumentKind| documents.iter().any(|d| d.kind == kind);

    let (earned, total) = match draft.fields() {
        DraftFields::Unset => return 0,
        DraftFields::Individual(f) => {
            let base = count_present(&[
                f.first_name.is_some(),
                f.last_name.is_some(),
                f.email.is_some(),
                f.phone.is_some(),
                f.birth_date.is_some(),
                f.birth_place.is_some(),
                f.status.is_some(),
                f.social_security_number.is_some(),
                f.profession.is_some(),
            ]);

            let mut bonus = 0.0;
            if has_kind(DocumentKind::IdCard) {
                bonus += weights.id_card_bonus;
            }
            if has_kind(DocumentKind::Rib) {
                bonus += weights.rib_bonus;
            }
            if documents.len() > weights.many_documents_threshold {
                bonus += weights.many_documents_bonus;
            }

            (base + bonus, 9.0 + weights.individual_bonus_pool)
        }
        DraftFields::Company(f) => {
            let base = count_present(&[
                f.name.is_some(),
                f.siret.is_some(),
                f.rcs.is_some(),
                f.ape_naf.is_some(),
            ]);

            let mut bonus = 0.0;
            if has_kind(DocumentKind::Kbis) {
                bonus += weights.kbis_bonus;
            }
            if !f.sub_users.is_empty() {
                bonus += weights.sub_user_bonus;
            }

            (base + bonus, 4.0 + weights.company_bonus_pool)
        }
    };

    if total <= 0.0 {
        return 0;
    }
    (100.0 * earned / total).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use stagelink_core::SubUserId;
    use stagelink_profile::{
        AccountKind, CompanyPatch, DocumentUpload, IndividualPatch, ProfessionalStatus, SubUser,
        SubUserRole,
    };

    fn upload(kind: DocumentKind) -> DocumentUpload {
        DocumentUpload {
            title: "doc".to_string(),
            kind,
            file_name: "doc.pdf".to_string(),
            obtained_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            expiration_date: None,
        }
    }

    fn sub_user() -> SubUser {
        SubUser {
            id: SubUserId::new(),
            title: None,
            first_name: "Claire".to_string(),
            last_name: "Martin".to_string(),
            email: "claire@acme.fr".to_string(),
            phone: None,
            role: SubUserRole::Hr,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unset_kind_scores_zero() {
        let draft = RegistrationDraft::default();
        assert_eq!(completion_percentage(&draft, &ScoreWeights::default()), 0);
    }

    #[test]
    fn empty_individual_draft_scores_zero() {
        let mut draft = RegistrationDraft::default();
        draft.set_account_kind(AccountKind::Individual).unwrap();
        assert_eq!(completion_percentage(&draft, &ScoreWeights::default()), 0);
    }

    #[test]
    fn three_of_nine_individual_fields_score_27() {
        let mut draft = RegistrationDraft::default();
        draft.apply_patch(
            &IndividualPatch {
                first_name: Some("Jean".to_string()),
                last_name: Some("Dupont".to_string()),
                email: Some("jean@example.fr".to_string()),
                ..Default::default()
            }
            .into(),
        );

        // round(100 * 3 / 11)
        assert_eq!(completion_percentage(&draft, &ScoreWeights::default()), 27);
    }

    #[test]
    fn company_identity_plus_sub_user_scores_91() {
        let mut draft = RegistrationDraft::default();
        draft.apply_patch(
            &CompanyPatch {
                name: Some("Acme SARL".to_string()),
                siret: Some("12345678900011".to_string()),
                rcs: Some("RCS Paris 123 456 789".to_string()),
                ape_naf: Some("9001Z".to_string()),
                sub_users: Some(vec![sub_user()]),
                ..Default::default()
            }
            .into(),
        );

        // round(100 * 5 / 5.5)
        assert_eq!(completion_percentage(&draft, &ScoreWeights::default()), 91);
    }

    #[test]
    fn document_bonuses_add_up_without_exceeding_100() {
        let mut draft = RegistrationDraft::default();
        draft.apply_patch(
            &IndividualPatch {
                first_name: Some("Jean".to_string()),
                last_name: Some("Dupont".to_string()),
                email: Some("jean@example.fr".to_string()),
                phone: Some("0612345678".to_string()),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 12),
                birth_place: Some("Lyon".to_string()),
                status: Some(ProfessionalStatus::Intermittent),
                social_security_number: Some("1 90 05 69 123 456 78".to_string()),
                profession: Some("Régisseur".to_string()),
                ..Default::default()
            }
            .into(),
        );

        let now = Utc::now();
        draft.add_document(upload(DocumentKind::IdCard), now);
        draft.add_document(upload(DocumentKind::Rib), now);
        draft.add_document(upload(DocumentKind::Diploma), now);

        // 9 base + 0.5 + 0.5 + 1 over 11.
        assert_eq!(completion_percentage(&draft, &ScoreWeights::default()), 100);
    }

    #[test]
    fn more_than_threshold_documents_earn_the_volume_bonus() {
        let weights = ScoreWeights::default();
        let mut draft = RegistrationDraft::default();
        draft.set_account_kind(AccountKind::Individual).unwrap();

        let now = Utc::now();
        draft.add_document(upload(DocumentKind::Diploma), now);
        draft.add_document(upload(DocumentKind::Medical), now);
        // Exactly at the threshold: no volume bonus yet.
        assert_eq!(completion_percentage(&draft, &weights), 0);

        draft.add_document(upload(DocumentKind::Certification), now);
        // round(100 * 1 / 11)
        assert_eq!(completion_percentage(&draft, &weights), 9);
    }

    #[test]
    fn custom_weights_change_the_policy() {
        let weights = ScoreWeights {
            kbis_bonus: 1.5,
            company_bonus_pool: 2.0,
            ..Default::default()
        };

        let mut draft = RegistrationDraft::default();
        draft.set_account_kind(AccountKind::Company).unwrap();
        draft.add_document(upload(DocumentKind::Kbis), Utc::now());

        // round(100 * 1.5 / 6)
        assert_eq!(completion_percentage(&draft, &weights), 25);
    }
}
