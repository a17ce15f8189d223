//! Pure consumption/cost engine and the heuristics layered on it.
//!
//! Every operation here is a stateless transformation of appliance records
//! and a unit energy cost; nothing blocks, fails, or mutates.

/// Derived-analysis heuristics: top consumer, efficiency, savings.
pub mod analysis;
pub mod consumption;

// Re-export the main types for convenience
pub use analysis::{AnalysisReport, EfficiencyRating, TopConsumer};
pub use consumption::{ApplianceUsage, Totals};
