//! Candidate shapes returned by the lookup providers.

use serde::{Deserialize, Serialize};

/// An address suggestion (Base Adresse Nationale shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCandidate {
    pub id: String,
    /// Fully formatted display label.
    pub label: String,
    /// Street including the house number when known.
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    pub postcode: String,
    pub city: String,
    pub city_code: String,
    /// Département / région context line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A legal-entity suggestion from the company registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCandidate {
    pub siret: String,
    pub siren: String,
    pub name: String,
    pub ape_naf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ape_naf_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A vehicle suggestion from the plate registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCandidate {
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}
