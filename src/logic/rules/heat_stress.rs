use super::RiskRule;
use crate::models::{round_display, AlertSeverity, RiskAlert, WeatherReading};

pub const HEAT_STRESS_TEMP_C: f64 = 40.0;

/// Heat stress rule - most field crops lose yield above 40°C
///
/// Conditions:
/// - Temperature > 40°C
pub struct HeatStressRule;

impl RiskRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress Alert"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<RiskAlert> {
        let temp = reading.temperature_c();
        if temp <= HEAT_STRESS_TEMP_C {
            return None;
        }

        Some(RiskAlert::new(
            AlertSeverity::Danger,
            "🔥",
            self.name(),
            format!(
                "High temperature ({}°C). Increase irrigation frequency.",
                round_display(temp)
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_rounds_temperature() {
        let reading = WeatherReading {
            temperature: Some(41.6),
            ..Default::default()
        };
        let alert = HeatStressRule.evaluate(&reading).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Danger);
        assert!(alert.message.contains("(42°C)"));
    }
}
