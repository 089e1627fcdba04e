//! Typed form patches.
//!
//! A patch carries the subset of fields one form screen wants to write.
//! Applying a patch is a shallow, last-writer-wins merge: `Some` overwrites,
//! `None` leaves the field untouched. The patch variant doubles as the
//! account-kind signature — an `IndividualPatch` can only carry individual
//! fields, so kind inference needs no field-name matching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::company::{CompanyFields, Establishment, SubUser};
use crate::individual::{IndividualFields, Language, ProfessionalStatus, Title};
use crate::kind::AccountKind;
use crate::vehicle::Vehicle;

macro_rules! merge_scalars {
    ($patch:ident => $fields:ident: $($field:ident),+ $(,)?) => {
        $( if let Some(v) = &$patch.$field { $fields.$field = Some(v.clone()); } )+
    };
}

macro_rules! merge_lists {
    ($patch:ident => $fields:ident: $($field:ident),+ $(,)?) => {
        $( if let Some(v) = &$patch.$field { $fields.$field = v.clone(); } )+
    };
}

/// Partial write against an individual profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndividualPatch {
    pub title: Option<Title>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub address: Option<Address>,
    pub status: Option<ProfessionalStatus>,
    pub social_security_number: Option<String>,
    pub entertainment_leave: Option<String>,
    pub guso: Option<String>,
    pub profession: Option<String>,
    /// Collections replace wholesale when present.
    pub specialties: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub formations: Option<Vec<String>>,
    pub licenses: Option<Vec<String>>,
    pub caces: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<Language>>,
    pub vehicles: Option<Vec<Vehicle>>,
}

impl IndividualPatch {
    pub fn apply_to(&self, fields: &mut IndividualFields) {
        merge_scalars!(self => fields:
            title, first_name, last_name, email, phone, birth_date, birth_place,
            address, status, social_security_number, entertainment_leave, guso,
            profession,
        );
        merge_lists!(self => fields:
            specialties, skills, formations, licenses, caces, certifications,
            languages, vehicles,
        );
    }
}

/// Partial write against a company profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub denomination: Option<String>,
    pub address: Option<Address>,
    pub siret: Option<String>,
    pub siren: Option<String>,
    pub vat_number: Option<String>,
    pub rcs: Option<String>,
    pub capital: Option<u64>,
    pub ape_naf: Option<String>,
    pub ape_naf_label: Option<String>,
    pub legal_form: Option<String>,
    pub employee_count_range: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub licence: Option<String>,
    /// Collections replace wholesale when present.
    pub establishments: Option<Vec<Establishment>>,
    pub sub_users: Option<Vec<SubUser>>,
}

impl CompanyPatch {
    pub fn apply_to(&self, fields: &mut CompanyFields) {
        merge_scalars!(self => fields:
            name, denomination, address, siret, siren, vat_number, rcs, capital,
            ape_naf, ape_naf_label, legal_form, employee_count_range,
            creation_date, licence,
        );
        merge_lists!(self => fields: establishments, sub_users);
    }
}

/// A form write, tagged by the profile shape it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftPatch {
    Individual(IndividualPatch),
    Company(CompanyPatch),
}

impl DraftPatch {
    /// The account kind this patch is shaped for.
    pub fn kind(&self) -> AccountKind {
        match self {
            DraftPatch::Individual(_) => AccountKind::Individual,
            DraftPatch::Company(_) => AccountKind::Company,
        }
    }
}

impl From<IndividualPatch> for DraftPatch {
    fn from(value: IndividualPatch) -> Self {
        DraftPatch::Individual(value)
    }
}

impl From<CompanyPatch> for DraftPatch {
    fn from(value: CompanyPatch) -> Self {
        DraftPatch::Company(value)
    }
}
