//! Built-in appliance catalog used to seed new calculations.
//!
//! Ratings are nameplate watts; consumers pair an entry with their own
//! usage pattern to form an [`Appliance`](crate::model::Appliance) line.

use serde::Serialize;

/// One catalog row: stable key, display label, nameplate rating, category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
    /// Nameplate power draw in watts.
    pub rating: f64,
    pub category: &'static str,
}

const fn entry(
    value: &'static str,
    label: &'static str,
    rating: f64,
    category: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        value,
        label,
        rating,
        category,
    }
}

/// Appliance catalog shipped with the service.
pub const CATALOG: &[CatalogEntry] = &[
    entry("tv-50", "Television 50\"", 150.0, "Entertainment"),
    entry("ac-1.5hp", "1.5Hp Air Conditioner", 1200.0, "Cooling & Heating"),
    entry("laptop", "Laptop", 90.0, "Computing"),
    entry("led-10w", "10W LED Light Bulb", 10.0, "Lighting"),
    entry("fridge", "Fridge Medium", 150.0, "Kitchen Appliances"),
    entry("wifi", "WiFi Modem", 25.0, "Computing"),
    entry("charger", "Mobile Phone Charger", 15.0, "Personal Care"),
    entry("fan", "Fan Ceiling", 80.0, "Cooling & Heating"),
    entry("washing-machine", "Washing Machine", 500.0, "Cleaning"),
    entry("microwave", "Microwave", 1000.0, "Kitchen Appliances"),
    entry("kettle", "Electric Kettle", 1500.0, "Kitchen Appliances"),
    entry("iron", "Electric Iron", 1200.0, "Personal Care"),
    entry("tape-machine", "Tape Machine", 370.0, "Power Tools"),
    entry("weaving-machine", "Weaving Machine", 476.0, "Power Tools"),
    entry("buttonhole-machine", "Button Hole Machine", 370.0, "Power Tools"),
    entry("sewing-machine", "Straight Sewing Machine", 370.0, "Power Tools"),
    entry("monogram-machine", "Monogram Machine", 500.0, "Power Tools"),
    entry("desktop-pc", "Desktop Computer", 250.0, "Computing"),
    entry("led-light", "LED Light 10W", 10.0, "Lighting"),
    entry("printing-machine", "Printing Machine", 1200.0, "Power Tools"),
];

/// Looks up a catalog entry by its stable key.
pub fn find(value: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.value == value)
}
