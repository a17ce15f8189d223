//! Shared test fixtures for integration tests.

use std::sync::Arc;

use watt_audit::api::AppState;
use watt_audit::config::TariffConfig;
use watt_audit::model::Appliance;
use watt_audit::storage::MemoryStorage;

/// Tariff used across the numeric scenarios (per kWh).
pub const COST_PER_KWH: f64 = 225.0;

/// Appliance line with the standard usage pattern (6 h/day, 7 days/week,
/// 30 days/month).
pub fn appliance(id: &str, name: &str, rating: f64, units: u32) -> Appliance {
    Appliance {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        backup_time: 6.0,
        units,
        days_per_week: 7,
        days_per_month: 30,
    }
}

/// Two 150 W televisions: 1.8 kWh/day at the standard pattern.
pub fn television() -> Appliance {
    appliance("tv-1", "Television 50\"", 150.0, 2)
}

/// One 1200 W air conditioner: 7.2 kWh/day at the standard pattern.
pub fn air_conditioner() -> Appliance {
    appliance("ac-1", "1.5Hp Air Conditioner", 1200.0, 1)
}

/// Router state over a fresh in-memory store and default tariff.
pub fn memory_state() -> Arc<AppState> {
    Arc::new(AppState {
        storage: Arc::new(MemoryStorage::new()),
        tariff: TariffConfig::default(),
    })
}
