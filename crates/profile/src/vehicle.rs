//! Vehicles declared on an individual profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stagelink_core::VehicleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Essence,
    Diesel,
    Electrique,
    Hybride,
    Gpl,
    Autre,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Voiture,
    Utilitaire,
    Camion,
    Moto,
    Remorque,
    SemiRemorque,
}

/// A vehicle a talent can bring on production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    /// Fiscal horsepower (CV).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<VehicleCategory>,
    /// Insurance expiry; past-due vehicles are flagged by the forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_expires: Option<NaiveDate>,
    /// Contrôle technique expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_control_expires: Option<NaiveDate>,
}
