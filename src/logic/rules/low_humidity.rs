use super::RiskRule;
use crate::models::{AlertSeverity, RiskAlert, WeatherReading};

pub const LOW_HUMIDITY_PERCENT: f64 = 30.0;

pub struct LowHumidityRule;

impl RiskRule for LowHumidityRule {
    fn id(&self) -> &'static str {
        "low_humidity"
    }

    fn name(&self) -> &'static str {
        "Low Humidity"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<RiskAlert> {
        let humidity = reading.humidity_percent();
        if humidity >= LOW_HUMIDITY_PERCENT {
            return None;
        }

        Some(RiskAlert::new(
            AlertSeverity::Warning,
            "💨",
            self.name(),
            format!(
                "Very dry conditions ({}%). High evapotranspiration expected.",
                humidity
            ),
        ))
    }
}
