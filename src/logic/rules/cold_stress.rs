use super::RiskRule;
use crate::models::{round_display, AlertSeverity, RiskAlert, WeatherReading};

pub const COLD_STRESS_TEMP_C: f64 = 5.0;

/// Cold stress rule
///
/// Conditions:
/// - Temperature < 5°C (frost becomes likely overnight)
pub struct ColdStressRule;

impl RiskRule for ColdStressRule {
    fn id(&self) -> &'static str {
        "cold_stress"
    }

    fn name(&self) -> &'static str {
        "Cold Stress Alert"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<RiskAlert> {
        let temp = reading.temperature_c();
        if temp >= COLD_STRESS_TEMP_C {
            return None;
        }

        Some(RiskAlert::new(
            AlertSeverity::Warning,
            "❄️",
            self.name(),
            format!(
                "Low temperature ({}°C). Frost protection may be needed.",
                round_display(temp)
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_below_threshold() {
        let reading = WeatherReading {
            temperature: Some(-1.2),
            ..Default::default()
        };
        let alert = ColdStressRule.evaluate(&reading).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert!(alert.message.contains("(-1°C)"));
    }
}
