//! Consumption and cost figures computed from appliance records.

use serde::Serialize;

use crate::model::Appliance;

/// Per-appliance derived consumption and cost figures.
///
/// Never persisted; recomputed on demand from the appliance fields and the
/// cost-per-kWh in effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceUsage {
    /// Energy in kWh per day for this appliance line.
    pub daily_consumption: f64,
    /// Energy in kWh per week.
    pub weekly_consumption: f64,
    /// Energy in kWh per month.
    pub monthly_consumption: f64,
    /// Monetary cost per month, in the currency of the supplied
    /// cost-per-kWh.
    pub monthly_cost: f64,
}

impl ApplianceUsage {
    /// Computes the derived figures for one appliance line.
    ///
    /// Inputs are taken as-is: a zero rating, backup time, or unit count
    /// yields zero consumption rather than an error, and a negative cost
    /// propagates arithmetically. The four steps run in this order so
    /// downstream rounding matches across consumers:
    ///
    /// 1. `daily = rating × backup_time × units / 1000` (Wh to kWh)
    /// 2. `weekly = daily × days_per_week`
    /// 3. `monthly = daily × days_per_month`
    /// 4. `monthly_cost = monthly × cost_per_kwh`
    pub fn of(appliance: &Appliance, cost_per_kwh: f64) -> Self {
        let daily_consumption =
            appliance.rating * appliance.backup_time * f64::from(appliance.units) / 1000.0;
        let weekly_consumption = daily_consumption * f64::from(appliance.days_per_week);
        let monthly_consumption = daily_consumption * f64::from(appliance.days_per_month);
        let monthly_cost = monthly_consumption * cost_per_kwh;
        Self {
            daily_consumption,
            weekly_consumption,
            monthly_consumption,
            monthly_cost,
        }
    }
}

/// Aggregate figures across a set of appliance lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of `rating × units` across appliances, in watts.
    pub total_rating: f64,
    /// Sum of per-appliance daily consumption, in kWh.
    pub total_daily_consumption: f64,
    /// Sum of per-appliance monthly consumption, in kWh.
    pub total_monthly_consumption: f64,
    /// Sum of per-appliance monthly cost.
    pub total_monthly_cost: f64,
    /// `total_monthly_cost × 12`.
    pub total_annual_cost: f64,
}

impl Totals {
    /// Accumulates totals over the appliances in caller-supplied order.
    ///
    /// A single O(n) pass; an empty slice yields all-zero totals.
    pub fn from_appliances(appliances: &[Appliance], cost_per_kwh: f64) -> Self {
        let mut totals = Self::default();
        for appliance in appliances {
            let usage = ApplianceUsage::of(appliance, cost_per_kwh);
            totals.total_rating += appliance.rating * f64::from(appliance.units);
            totals.total_daily_consumption += usage.daily_consumption;
            totals.total_monthly_consumption += usage.monthly_consumption;
            totals.total_monthly_cost += usage.monthly_cost;
        }
        totals.total_annual_cost = totals.total_monthly_cost * 12.0;
        totals
    }
}
