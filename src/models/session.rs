use super::{CropRecommendation, FarmInput, RecommendationSet, Schedule, WeatherReading};
use serde::{Deserialize, Serialize};

/// The latest submitted form and everything derived from it.
///
/// All fields are `None` before the first submission and all are `Some`
/// afterwards; the store never publishes a partially filled snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub input: Option<FarmInput>,
    pub weather: Option<WeatherReading>,
    pub recommendations: Option<RecommendationSet>,
    pub schedule: Option<Schedule>,
}

impl SessionState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn populated(
        input: FarmInput,
        weather: WeatherReading,
        recommendations: RecommendationSet,
        schedule: Schedule,
    ) -> Self {
        Self {
            input: Some(input),
            weather: Some(weather),
            recommendations: Some(recommendations),
            schedule: Some(schedule),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_none()
    }

    pub fn top_crop(&self) -> Option<&CropRecommendation> {
        self.recommendations.as_ref()?.top_crop()
    }
}
