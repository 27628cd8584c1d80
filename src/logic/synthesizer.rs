//! Locally generated stand-ins for the advisory backend.
//!
//! Used whenever a fetch fails or returns a non-success status. The weather
//! generators draw from a caller-supplied random source so results can be
//! reproduced with a seeded RNG; the crop and schedule generators are fixed.

use crate::models::{
    CropRecommendation, FarmInput, ForecastDay, RecommendationSet, Schedule, ScheduleActivity,
    Season, WeatherCondition, WeatherReading, DEFAULT_CROP_DURATION, DEFAULT_RAINFALL_RANGE,
    DEFAULT_SOIL_COMPATIBILITY, DEFAULT_TEMP_RANGE,
};
use chrono::NaiveDate;
use rand::Rng;

pub const FORECAST_DAY_LABELS: [&str; 7] = ["Today", "Tomorrow", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// (day offset, activity, duration, details)
pub const SCHEDULE_TEMPLATE: [(i64, &str, &str, &str); 7] = [
    (0, "Field Preparation", "5-7 days", "Plough and level the field"),
    (7, "Sowing", "2-3 days", "Sow seeds at recommended spacing"),
    (14, "First Irrigation", "1-2 days", "Apply first irrigation if required"),
    (21, "First Fertilization", "1 day", "Apply nitrogen fertilizer"),
    (35, "Weeding", "3-4 days", "Remove weeds from the field"),
    (45, "Second Fertilization", "1 day", "Apply potassium fertilizer"),
    (120, "Harvesting", "7-10 days", "Harvest when crop is mature"),
];

pub fn synthesize_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherReading {
    WeatherReading {
        temperature: Some(rng.gen_range(28.0..32.0)),
        humidity: Some(rng.gen_range(60.0..80.0)),
        rainfall_prediction: Some(rng.gen_range(40.0..100.0)),
        wind_speed: Some(rng.gen_range(10.0..20.0)),
        forecast: Some(synthesize_forecast(rng)),
    }
}

pub fn synthesize_forecast<R: Rng + ?Sized>(rng: &mut R) -> Vec<ForecastDay> {
    FORECAST_DAY_LABELS
        .iter()
        .map(|day| {
            let condition = WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())];
            ForecastDay {
                day_label: day.to_string(),
                condition_name: Some(condition.as_str().to_string()),
                condition_icon: Some(condition.icon().to_string()),
                temp_max: rng.gen_range(28.0..34.0),
                temp_min: rng.gen_range(18.0..22.0),
            }
        })
        .collect()
}

/// Fixed three-crop list for the input's season (kharif when unrecognised),
/// scored 95/80/65.
pub fn synthesize_recommendations(input: &FarmInput) -> RecommendationSet {
    let season_text = if input.season.is_empty() {
        Season::Kharif.as_str()
    } else {
        input.season.as_str()
    };
    let season = input.season_kind().unwrap_or(Season::Kharif);

    let crops = season
        .default_crops()
        .iter()
        .enumerate()
        .map(|(rank, name)| {
            let step = rank as i64;
            CropRecommendation {
                name: name.to_string(),
                score: (95 - step * 15) as f64,
                reason: Some(format!(
                    "Highly suitable for {} soil in {} season",
                    input.soil_type, season_text
                )),
                season: Some(season_text.to_uppercase()),
                expected_yield: Some(format!(
                    "{}-{} kg/acre",
                    2000 - step * 300,
                    2500 - step * 300
                )),
            }
        })
        .collect();

    RecommendationSet {
        crops,
        soil_compatibility: Some(DEFAULT_SOIL_COMPATIBILITY.to_string()),
        temp_range: Some(DEFAULT_TEMP_RANGE.to_string()),
        rainfall_range: Some(DEFAULT_RAINFALL_RANGE.to_string()),
        crop_duration: Some(DEFAULT_CROP_DURATION.to_string()),
    }
}

/// Seven fixed activities offset from `reference_date`; chronological by
/// construction.
pub fn synthesize_schedule(reference_date: NaiveDate) -> Schedule {
    let activities = SCHEDULE_TEMPLATE
        .iter()
        .map(|(offset, activity, duration, details)| {
            ScheduleActivity::new(
                *activity,
                reference_date + chrono::Duration::days(*offset),
                *duration,
                *details,
            )
        })
        .collect();

    Schedule { activities }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weather_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let w = synthesize_weather(&mut rng);
            let t = w.temperature.unwrap();
            let h = w.humidity.unwrap();
            let r = w.rainfall_prediction.unwrap();
            let s = w.wind_speed.unwrap();
            assert!((28.0..32.0).contains(&t));
            assert!((60.0..80.0).contains(&h));
            assert!((40.0..100.0).contains(&r));
            assert!((10.0..20.0).contains(&s));
            assert_eq!(w.forecast_days().len(), 7);
        }
    }

    #[test]
    fn seeded_weather_is_reproducible() {
        let a = synthesize_weather(&mut StdRng::seed_from_u64(9));
        let b = synthesize_weather(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn forecast_labels_and_conditions() {
        let mut rng = StdRng::seed_from_u64(1);
        let days = synthesize_forecast(&mut rng);
        let labels: Vec<_> = days.iter().map(|d| d.day_label.as_str()).collect();
        assert_eq!(labels, FORECAST_DAY_LABELS);

        for day in &days {
            let condition = WeatherCondition::ALL
                .iter()
                .find(|c| c.as_str() == day.condition_name())
                .expect("known condition");
            assert_eq!(day.condition_icon(), condition.icon());
            assert!((28.0..34.0).contains(&day.temp_max));
            assert!((18.0..22.0).contains(&day.temp_min));
        }
    }

    #[test]
    fn forecast_eventually_uses_every_condition() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            for day in synthesize_forecast(&mut rng) {
                seen.insert(day.condition_name().to_string());
            }
        }
        assert_eq!(seen.len(), WeatherCondition::ALL.len());
    }

    #[test]
    fn rabi_recommendations() {
        let input = FarmInput::new("Ludhiana", "loam", "rabi", None);
        let set = synthesize_recommendations(&input);

        let names: Vec<_> = set.crops.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Wheat", "Barley", "Chickpea"]);

        let scores: Vec<_> = set.crops.iter().map(|c| c.score).collect();
        assert_eq!(scores, [95.0, 80.0, 65.0]);

        assert!(set.crops[0].expected_yield().contains("2000-2500"));
        assert!(set.crops[1].expected_yield().contains("1700-2200"));
        assert!(set.crops[2].expected_yield().contains("1400-1900"));

        for crop in &set.crops {
            assert!(crop.reason().contains("loam"));
            assert!(crop.reason().contains("rabi"));
            assert_eq!(crop.season.as_deref(), Some("RABI"));
        }
    }

    #[test]
    fn zaid_recommendations() {
        let input = FarmInput::new("Jaipur", "sandy", "zaid", None);
        let names: Vec<_> = synthesize_recommendations(&input)
            .crops
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Watermelon", "Muskmelon", "Cucumber"]);
    }

    #[test]
    fn unknown_season_uses_kharif_crops() {
        let input = FarmInput::new("Pune", "clay", "autumn", None);
        let set = synthesize_recommendations(&input);
        assert_eq!(set.top_crop().map(|c| c.name.as_str()), Some("Rice"));
        assert!(set.crops[0].reason().contains("autumn season"));

        let blank = FarmInput::new("Pune", "clay", "", None);
        let set = synthesize_recommendations(&blank);
        assert!(set.crops[0].reason().contains("kharif season"));
        assert_eq!(set.crops[0].season.as_deref(), Some("KHARIF"));
    }

    #[test]
    fn season_aliases_and_case_variants_are_unknown() {
        for season in ["winter", "summer", "Rabi", "ZAID"] {
            let input = FarmInput::new("Pune", "loam", season, None);
            let names: Vec<String> = synthesize_recommendations(&input)
                .crops
                .into_iter()
                .map(|c| c.name)
                .collect();
            assert_eq!(names, ["Rice", "Maize", "Cotton"], "season {season}");
        }
    }

    #[test]
    fn schedule_offsets_and_order() {
        let reference = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let schedule = synthesize_schedule(reference);
        assert_eq!(schedule.activities.len(), 7);

        let offsets: Vec<i64> = schedule
            .activities
            .iter()
            .map(|a| (a.recommended_date - reference).num_days())
            .collect();
        assert_eq!(offsets, [0, 7, 14, 21, 35, 45, 120]);

        assert!(schedule
            .activities
            .windows(2)
            .all(|w| w[0].recommended_date < w[1].recommended_date));

        assert_eq!(schedule.activities[0].activity, "Field Preparation");
        assert_eq!(schedule.activities[6].activity, "Harvesting");
        assert_eq!(schedule.activities[6].duration(), "7-10 days");
    }
}
