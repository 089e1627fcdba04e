//! Individual (talent) profile shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::vehicle::Vehicle;

/// Civility title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    Mr,
    Mrs,
    Other,
}

/// Professional status of an individual talent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalStatus {
    Freelance,
    /// Intermittent du spectacle (entertainment-industry contract regime).
    Intermittent,
    AutoEntrepreneur,
    Other,
}

/// Spoken language proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageLevel {
    Basic,
    Intermediate,
    Advanced,
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    pub level: LanguageLevel,
}

/// Closed record of every attribute an individual registration can carry.
///
/// All scalars are optional; collections default to empty. Presence of the
/// identity fields (name, email, phone, birth data, status, social security
/// number, profession) is what the completion scorer counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndividualFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProfessionalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_security_number: Option<String>,
    /// Congés spectacles membership, free text per product decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entertainment_leave: Option<String>,
    /// GUSO affiliation, free text per product decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub formations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<Vehicle>,
}

impl IndividualFields {
    /// Minimum required fields of the Personal screen.
    pub fn personal_screen_complete(&self) -> bool {
        self.first_name.is_some() && self.last_name.is_some() && self.email.is_some()
    }

    /// Minimum required fields of the Professional screen.
    pub fn professional_screen_complete(&self) -> bool {
        self.status.is_some() && self.profession.is_some()
    }
}
