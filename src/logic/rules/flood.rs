use super::RiskRule;
use crate::models::{AlertSeverity, RiskAlert, WeatherReading};

/// Predicted rainfall above this (mm) signals flooding.
pub const FLOOD_RAINFALL_MM: f64 = 200.0;

/// Flood risk rule
///
/// Conditions:
/// - Rainfall prediction > 200 mm
pub struct FloodRule;

impl RiskRule for FloodRule {
    fn id(&self) -> &'static str {
        "flood"
    }

    fn name(&self) -> &'static str {
        "Flood Risk"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<RiskAlert> {
        let rainfall = reading.rainfall_mm();
        if rainfall <= FLOOD_RAINFALL_MM {
            return None;
        }

        Some(RiskAlert::new(
            AlertSeverity::Danger,
            "🌊",
            self.name(),
            format!(
                "High rainfall predicted ({}mm). Prepare drainage systems.",
                rainfall
            ),
        ))
    }
}
