//! Record shapes shared between the engine, the store, and the API.
//!
//! Wire names are camelCase; the structs below carry the serde renames so
//! every layer exchanges the same JSON shape.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_backup_time() -> f64 {
    6.0
}

fn default_units() -> u32 {
    1
}

fn default_days_per_week() -> u32 {
    7
}

fn default_days_per_month() -> u32 {
    30
}

/// One input line item describing a power-consuming device and its usage
/// pattern.
///
/// Omitted usage fields are defaulted at deserialization time; the engine
/// itself performs no defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    /// Opaque identifier, unique within the owning calculation.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Nameplate power draw in watts.
    pub rating: f64,
    /// Hours of operation per day.
    #[serde(default = "default_backup_time")]
    pub backup_time: f64,
    /// Count of identical devices; 0 yields zero consumption.
    #[serde(default = "default_units")]
    pub units: u32,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    #[serde(default = "default_days_per_month")]
    pub days_per_month: u32,
}

/// A named, persisted snapshot of a location, a unit energy cost, and a
/// list of appliances, optionally tied to a customer.
///
/// Only input fields are stored; consumption figures are recomputed on
/// demand and never treated as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: String,
    pub name: String,
    pub location: String,
    pub cost_per_kwh: f64,
    pub appliances: Vec<Appliance>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create payload with tariff defaults already resolved.
///
/// The store assigns the id and creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub name: String,
    pub location: String,
    pub cost_per_kwh: f64,
    pub appliances: Vec<Appliance>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

/// Partial-update payload; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub cost_per_kwh: Option<f64>,
    pub appliances: Option<Vec<Appliance>>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl CalculationPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.cost_per_kwh.is_none()
            && self.appliances.is_none()
            && self.customer_name.is_none()
            && self.customer_email.is_none()
            && self.customer_phone.is_none()
    }

    /// Copies the supplied fields onto an existing record.
    pub fn apply_to(&self, calculation: &mut Calculation) {
        if let Some(name) = &self.name {
            calculation.name = name.clone();
        }
        if let Some(location) = &self.location {
            calculation.location = location.clone();
        }
        if let Some(cost_per_kwh) = self.cost_per_kwh {
            calculation.cost_per_kwh = cost_per_kwh;
        }
        if let Some(appliances) = &self.appliances {
            calculation.appliances = appliances.clone();
        }
        if let Some(customer_name) = &self.customer_name {
            calculation.customer_name = Some(customer_name.clone());
        }
        if let Some(customer_email) = &self.customer_email {
            calculation.customer_email = Some(customer_email.clone());
        }
        if let Some(customer_phone) = &self.customer_phone {
            calculation.customer_phone = Some(customer_phone.clone());
        }
    }

    /// Checks the supplied fields, returning every violation found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(ValidationError::new("name", "must not be empty"));
            }
        }
        if let Some(cost_per_kwh) = self.cost_per_kwh {
            if cost_per_kwh < 0.0 {
                errors.push(ValidationError::new("costPerKwh", "must be >= 0"));
            }
        }
        if let Some(appliances) = &self.appliances {
            validate_appliances(appliances, &mut errors);
        }
        errors
    }
}

/// Payload validation failure with a dotted field path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Field path as it appears on the wire, e.g. `appliances[0].rating`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

/// Validates every appliance line, prefixing field paths with its index.
pub fn validate_appliances(appliances: &[Appliance], errors: &mut Vec<ValidationError>) {
    for (index, appliance) in appliances.iter().enumerate() {
        let at = |field: &str| format!("appliances[{index}].{field}");
        if appliance.rating < 0.0 {
            errors.push(ValidationError::new(at("rating"), "must be >= 0"));
        }
        if appliance.backup_time < 0.0 {
            errors.push(ValidationError::new(at("backupTime"), "must be >= 0"));
        }
        if !(1..=7).contains(&appliance.days_per_week) {
            errors.push(ValidationError::new(at("daysPerWeek"), "must be in [1, 7]"));
        }
        if !(1..=31).contains(&appliance.days_per_month) {
            errors.push(ValidationError::new(at("daysPerMonth"), "must be in [1, 31]"));
        }
    }
}
