pub mod cold_stress;
pub mod drought;
pub mod engine;
pub mod flood;
pub mod heat_stress;
pub mod low_humidity;

pub use engine::{evaluate_risks, RiskEvaluator};

use crate::models::{RiskAlert, WeatherReading};

/// Trait for weather risk rules
pub trait RiskRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an alert if its threshold is crossed
    fn evaluate(&self, reading: &WeatherReading) -> Option<RiskAlert>;
}
