//! Company profile shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stagelink_core::SubUserId;

use crate::address::Address;
use crate::individual::Title;

/// Role of a collaborator seat under a company account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubUserRole {
    Hr,
    Accounting,
    ProjectManager,
    Admin,
}

/// A collaborator invited under a company account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubUser {
    pub id: SubUserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: SubUserRole,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle of a company establishment (SIRET-level site).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstablishmentStatus {
    Active,
    Inactive,
    Ceased,
}

/// One establishment of the legal entity, as returned by the company lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    pub siret: String,
    pub nic: String,
    /// APE/NAF of this site (may differ from the head office).
    pub ape_naf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ape_naf_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    pub status: EstablishmentStatus,
    pub is_head_office: bool,
}

/// Closed record of every attribute a company registration can carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denomination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub siret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub siren: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcs: Option<String>,
    /// Share capital in euros.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<u64>,
    /// Primary activity code of the legal entity (unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ape_naf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ape_naf_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    /// Entertainment entrepreneur licence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub establishments: Vec<Establishment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_users: Vec<SubUser>,
}

impl CompanyFields {
    /// Minimum required fields of the Company screen.
    pub fn company_screen_complete(&self) -> bool {
        self.name.is_some() && self.siret.is_some() && self.ape_naf.is_some()
    }

    pub fn head_office(&self) -> Option<&Establishment> {
        self.establishments.iter().find(|e| e.is_head_office)
    }
}
