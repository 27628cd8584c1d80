use super::{
    cold_stress::ColdStressRule, drought::DroughtRule, flood::FloodRule,
    heat_stress::HeatStressRule, low_humidity::LowHumidityRule, RiskRule,
};
use crate::models::{RiskAlert, WeatherReading};

/// Runs the fixed risk rules against a reading.
///
/// Rules are independent and non-exclusive. Output keeps rule order
/// (drought, flood, heat, cold, humidity); it is not sorted by severity.
/// An empty result means "all clear".
pub struct RiskEvaluator {
    rules: Vec<Box<dyn RiskRule>>,
}

impl RiskEvaluator {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn RiskRule>> = vec![
            Box::new(DroughtRule),
            Box::new(FloodRule),
            Box::new(HeatStressRule),
            Box::new(ColdStressRule),
            Box::new(LowHumidityRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, reading: &WeatherReading) -> Vec<RiskAlert> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(reading))
            .collect()
    }

    /// `(id, name)` of each rule, in evaluation order.
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a reading with the standard rule set.
pub fn evaluate_risks(reading: &WeatherReading) -> Vec<RiskAlert> {
    RiskEvaluator::new().evaluate(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::synthesizer::synthesize_weather;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reading(temperature: f64, rainfall: f64, humidity: f64) -> WeatherReading {
        WeatherReading {
            temperature: Some(temperature),
            humidity: Some(humidity),
            rainfall_prediction: Some(rainfall),
            wind_speed: Some(12.0),
            forecast: None,
        }
    }

    fn titles(alerts: &[RiskAlert]) -> Vec<&str> {
        alerts.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn low_rainfall_is_drought_only() {
        let alerts = evaluate_risks(&reading(28.0, 25.0, 65.0));
        assert_eq!(titles(&alerts), ["Drought Risk"]);
    }

    #[test]
    fn high_rainfall_is_flood_only() {
        let alerts = evaluate_risks(&reading(28.0, 250.0, 65.0));
        assert_eq!(titles(&alerts), ["Flood Risk"]);
    }

    #[test]
    fn moderate_rainfall_has_no_rain_alerts() {
        let alerts = evaluate_risks(&reading(28.0, 100.0, 65.0));
        assert!(alerts
            .iter()
            .all(|a| a.title != "Drought Risk" && a.title != "Flood Risk"));
    }

    #[test]
    fn heat_alone() {
        let alerts = evaluate_risks(&reading(42.0, 50.0, 50.0));
        assert_eq!(titles(&alerts), ["Heat Stress Alert"]);
    }

    #[test]
    fn all_clear() {
        assert!(evaluate_risks(&reading(28.0, 50.0, 65.0)).is_empty());
    }

    #[test]
    fn defaults_are_all_clear() {
        assert!(evaluate_risks(&WeatherReading::default()).is_empty());
    }

    #[test]
    fn zero_rainfall_is_drought_not_default() {
        let dry = WeatherReading {
            rainfall_prediction: Some(0.0),
            ..WeatherReading::default()
        };
        assert_eq!(titles(&evaluate_risks(&dry)), ["Drought Risk"]);
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(evaluate_risks(&reading(40.0, 30.0, 30.0)).is_empty());
        assert!(evaluate_risks(&reading(5.0, 200.0, 30.0)).is_empty());
    }

    #[test]
    fn multiple_alerts_keep_rule_order() {
        let alerts = evaluate_risks(&reading(2.0, 10.0, 20.0));
        assert_eq!(
            titles(&alerts),
            ["Drought Risk", "Cold Stress Alert", "Low Humidity"]
        );

        let alerts = evaluate_risks(&reading(45.0, 300.0, 10.0));
        assert_eq!(
            titles(&alerts),
            ["Flood Risk", "Heat Stress Alert", "Low Humidity"]
        );
    }

    #[test]
    fn evaluation_is_pure() {
        let evaluator = RiskEvaluator::new();
        let hot = reading(42.0, 20.0, 25.0);
        let first = evaluator.evaluate(&hot);
        evaluator.evaluate(&reading(1.0, 500.0, 90.0));
        assert_eq!(evaluator.evaluate(&hot), first);
    }

    #[test]
    fn rules_listed_in_evaluation_order() {
        let ids: Vec<&str> = RiskEvaluator::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            ["drought", "flood", "heat_stress", "cold_stress", "low_humidity"]
        );
    }

    #[test]
    fn synthesized_readings_never_alert_on_rain_or_heat() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let alerts = evaluate_risks(&synthesize_weather(&mut rng));
            assert!(alerts.is_empty(), "unexpected alerts: {:?}", alerts);
        }
    }
}
