//! Request and response bodies for the REST API.

use serde::{Deserialize, Serialize};

use crate::config::TariffConfig;
use crate::engine::{AnalysisReport, ApplianceUsage, Totals};
use crate::model::{Appliance, Calculation, NewCalculation, ValidationError, validate_appliances};

/// Create payload; tariff fields fall back to configured defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalculationRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub cost_per_kwh: Option<f64>,
    #[serde(default)]
    pub appliances: Vec<Appliance>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl CreateCalculationRequest {
    /// Checks field constraints, returning every violation found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        match &self.name {
            None => errors.push(ValidationError::new("name", "is required")),
            Some(name) if name.trim().is_empty() => {
                errors.push(ValidationError::new("name", "must not be empty"));
            }
            Some(_) => {}
        }
        if let Some(cost_per_kwh) = self.cost_per_kwh {
            if cost_per_kwh < 0.0 {
                errors.push(ValidationError::new("costPerKwh", "must be >= 0"));
            }
        }
        validate_appliances(&self.appliances, &mut errors);
        errors
    }

    /// Resolves optional tariff fields against configured defaults.
    ///
    /// Callers must validate first; a missing name resolves to empty.
    pub fn into_new(self, tariff: &TariffConfig) -> NewCalculation {
        NewCalculation {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_else(|| tariff.location.clone()),
            cost_per_kwh: self.cost_per_kwh.unwrap_or(tariff.cost_per_kwh),
            appliances: self.appliances,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
        }
    }
}

/// One appliance line paired with its recomputed usage figures.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub appliance: Appliance,
    pub usage: ApplianceUsage,
}

/// Recomputed consumption report for one stored calculation.
///
/// Nothing here is persisted; every figure is derived from the stored
/// appliance list and the calculation's cost-per-kWh at request time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub id: String,
    pub name: String,
    pub cost_per_kwh: f64,
    pub lines: Vec<SummaryLine>,
    pub totals: Totals,
    pub analysis: AnalysisReport,
}

impl SummaryResponse {
    pub fn from_calculation(calculation: &Calculation) -> Self {
        let cost_per_kwh = calculation.cost_per_kwh;
        let lines = calculation
            .appliances
            .iter()
            .map(|appliance| SummaryLine {
                appliance: appliance.clone(),
                usage: ApplianceUsage::of(appliance, cost_per_kwh),
            })
            .collect();
        Self {
            id: calculation.id.clone(),
            name: calculation.name.clone(),
            cost_per_kwh,
            lines,
            totals: Totals::from_appliances(&calculation.appliances, cost_per_kwh),
            analysis: AnalysisReport::from_appliances(&calculation.appliances, cost_per_kwh),
        }
    }
}

/// Error body; `errors` carries field-level details on validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            message: "Invalid data".to_string(),
            errors: Some(errors),
        }
    }
}
