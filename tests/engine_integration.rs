//! End-to-end checks of the consumption engine's documented behavior.

mod common;

use common::{COST_PER_KWH, air_conditioner, appliance, television};
use watt_audit::engine::{
    AnalysisReport, ApplianceUsage, EfficiencyRating, Totals, analysis,
};

const EPS: f64 = 1e-9;

#[test]
fn television_line_figures() {
    let usage = ApplianceUsage::of(&television(), COST_PER_KWH);
    assert!((usage.daily_consumption - 1.8).abs() < EPS);
    assert!((usage.weekly_consumption - 12.6).abs() < EPS);
    assert!((usage.monthly_consumption - 54.0).abs() < EPS);
    assert!((usage.monthly_cost - 12150.0).abs() < EPS);
}

#[test]
fn air_conditioner_line_figures() {
    let usage = ApplianceUsage::of(&air_conditioner(), COST_PER_KWH);
    assert!((usage.daily_consumption - 7.2).abs() < EPS);
    assert!((usage.monthly_consumption - 216.0).abs() < EPS);
    assert!((usage.monthly_cost - 48600.0).abs() < EPS);
}

#[test]
fn savings_potential_is_fifth_of_ac_cost_rounded() {
    let savings = analysis::savings_potential(&[air_conditioner()], COST_PER_KWH);
    assert_eq!(savings, 9720.0);
}

#[test]
fn any_zero_factor_zeroes_every_derived_field() {
    let zeroed = [
        appliance("a", "Idle", 0.0, 3),
        appliance("b", "Unplugged", 400.0, 0),
        {
            let mut off = appliance("c", "Off", 400.0, 1);
            off.backup_time = 0.0;
            off
        },
    ];
    for a in &zeroed {
        let usage = ApplianceUsage::of(a, COST_PER_KWH);
        assert_eq!(usage.daily_consumption, 0.0);
        assert_eq!(usage.weekly_consumption, 0.0);
        assert_eq!(usage.monthly_consumption, 0.0);
        assert_eq!(usage.monthly_cost, 0.0);
    }
}

#[test]
fn weekly_and_monthly_ratios_recover_daily() {
    let mut line = appliance("w", "Weaving Machine", 476.0, 1);
    line.days_per_week = 6;
    line.days_per_month = 26;
    let usage = ApplianceUsage::of(&line, COST_PER_KWH);
    assert!((usage.weekly_consumption / 6.0 - usage.daily_consumption).abs() < EPS);
    assert!((usage.monthly_consumption / 26.0 - usage.daily_consumption).abs() < EPS);
}

#[test]
fn empty_totals_including_annual_are_zero() {
    let totals = Totals::from_appliances(&[], COST_PER_KWH);
    assert_eq!(totals.total_rating, 0.0);
    assert_eq!(totals.total_daily_consumption, 0.0);
    assert_eq!(totals.total_monthly_consumption, 0.0);
    assert_eq!(totals.total_monthly_cost, 0.0);
    assert_eq!(totals.total_annual_cost, 0.0);
}

#[test]
fn totals_are_additive_over_any_partition() {
    let front = [television(), appliance("lap", "Laptop", 90.0, 1)];
    let back = [air_conditioner(), appliance("led", "LED Light 10W", 10.0, 15)];
    let whole: Vec<_> = front.iter().chain(back.iter()).cloned().collect();

    let all = Totals::from_appliances(&whole, COST_PER_KWH);
    let left = Totals::from_appliances(&front, COST_PER_KWH);
    let right = Totals::from_appliances(&back, COST_PER_KWH);

    assert!((all.total_monthly_cost - (left.total_monthly_cost + right.total_monthly_cost)).abs() < EPS);
    assert!(
        (all.total_daily_consumption
            - (left.total_daily_consumption + right.total_daily_consumption))
            .abs()
            < EPS
    );
    assert!((all.total_rating - (left.total_rating + right.total_rating)).abs() < EPS);
}

#[test]
fn efficiency_rating_bucket_boundaries() {
    assert_eq!(EfficiencyRating::from_daily_kwh(9.99), EfficiencyRating::Excellent);
    assert_eq!(EfficiencyRating::from_daily_kwh(10.0), EfficiencyRating::Good);
    assert_eq!(EfficiencyRating::from_daily_kwh(29.999), EfficiencyRating::Fair);
    assert_eq!(
        EfficiencyRating::from_daily_kwh(30.0),
        EfficiencyRating::NeedsImprovement
    );
}

#[test]
fn top_consumer_tie_break_prefers_first() {
    let twins = [
        appliance("first", "Electric Iron", 1200.0, 1),
        appliance("second", "Printing Machine", 1200.0, 1),
    ];
    let (top, _) = analysis::top_consumer(&twins, COST_PER_KWH).unwrap();
    assert_eq!(top.id, "first");
}

#[test]
fn analysis_report_combines_all_heuristics() {
    let appliances = [television(), air_conditioner()];
    let report = AnalysisReport::from_appliances(&appliances, COST_PER_KWH);

    let top = report.top_consumer.unwrap();
    assert_eq!(top.id, "ac-1");
    assert!((top.monthly_cost - 48600.0).abs() < EPS);
    // 1.8 + 7.2 = 9.0 kWh/day
    assert_eq!(report.efficiency_rating, EfficiencyRating::Excellent);
    assert_eq!(report.savings_potential, 9720.0);
}
