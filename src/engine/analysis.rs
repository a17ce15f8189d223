//! On-demand heuristics layered on the consumption engine's outputs.

use std::fmt;

use serde::Serialize;

use crate::engine::consumption::{ApplianceUsage, Totals};
use crate::model::Appliance;

/// Step rating of total daily consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl EfficiencyRating {
    /// Buckets total daily consumption in kWh: `<10` Excellent, `<20`
    /// Good, `<30` Fair, otherwise Needs Improvement. Boundary values fall
    /// into the next bucket up (exactly 10 rates Good).
    pub fn from_daily_kwh(total_daily_kwh: f64) -> Self {
        if total_daily_kwh < 10.0 {
            Self::Excellent
        } else if total_daily_kwh < 20.0 {
            Self::Good
        } else if total_daily_kwh < 30.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Returns the appliance with the highest monthly cost, with its usage.
///
/// The comparison is strictly `>`, so the earliest of equally expensive
/// appliances wins. Returns `None` for an empty slice.
pub fn top_consumer<'a>(
    appliances: &'a [Appliance],
    cost_per_kwh: f64,
) -> Option<(&'a Appliance, ApplianceUsage)> {
    let mut best: Option<(&Appliance, ApplianceUsage)> = None;
    for appliance in appliances {
        let usage = ApplianceUsage::of(appliance, cost_per_kwh);
        let replaces = match &best {
            None => true,
            Some((_, current)) => usage.monthly_cost > current.monthly_cost,
        };
        if replaces {
            best = Some((appliance, usage));
        }
    }
    best
}

/// Estimated monthly savings from trimming air-conditioner usage by 20%.
///
/// Matches appliance names containing "air conditioner" case-insensitively;
/// the result is rounded half away from zero.
pub fn savings_potential(appliances: &[Appliance], cost_per_kwh: f64) -> f64 {
    let ac_cost: f64 = appliances
        .iter()
        .filter(|a| a.name.to_lowercase().contains("air conditioner"))
        .map(|a| ApplianceUsage::of(a, cost_per_kwh).monthly_cost)
        .sum();
    (ac_cost * 0.2).round()
}

/// The most expensive appliance line and its share of the monthly bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopConsumer {
    pub id: String,
    pub name: String,
    pub monthly_cost: f64,
    /// Rounded percentage of the total monthly cost; 0 when the total is 0.
    pub share_pct: u32,
}

/// Consumer-facing summary block: top consumer, efficiency, savings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub top_consumer: Option<TopConsumer>,
    pub efficiency_rating: EfficiencyRating,
    pub savings_potential: f64,
}

impl AnalysisReport {
    /// Derives all three heuristics from the appliance list.
    pub fn from_appliances(appliances: &[Appliance], cost_per_kwh: f64) -> Self {
        let totals = Totals::from_appliances(appliances, cost_per_kwh);
        let top_consumer = top_consumer(appliances, cost_per_kwh).map(|(appliance, usage)| {
            let share_pct = if totals.total_monthly_cost > 0.0 {
                (usage.monthly_cost / totals.total_monthly_cost * 100.0).round() as u32
            } else {
                0
            };
            TopConsumer {
                id: appliance.id.clone(),
                name: appliance.name.clone(),
                monthly_cost: usage.monthly_cost,
                share_pct,
            }
        });
        Self {
            top_consumer,
            efficiency_rating: EfficiencyRating::from_daily_kwh(totals.total_daily_consumption),
            savings_potential: savings_potential(appliances, cost_per_kwh),
        }
    }
}
