use super::RiskRule;
use crate::models::{AlertSeverity, RiskAlert, WeatherReading};

/// Predicted rainfall below this (mm) signals drought.
pub const DROUGHT_RAINFALL_MM: f64 = 30.0;

/// Drought risk rule
///
/// Conditions:
/// - Rainfall prediction < 30 mm
pub struct DroughtRule;

impl RiskRule for DroughtRule {
    fn id(&self) -> &'static str {
        "drought"
    }

    fn name(&self) -> &'static str {
        "Drought Risk"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<RiskAlert> {
        let rainfall = reading.rainfall_mm();
        if rainfall >= DROUGHT_RAINFALL_MM {
            return None;
        }

        Some(RiskAlert::new(
            AlertSeverity::Warning,
            "🌵",
            self.name(),
            format!(
                "Low rainfall predicted ({}mm). Consider irrigation planning.",
                rainfall
            ),
        ))
    }
}
