use serde::{Deserialize, Serialize};

pub const DEFAULT_REASON: &str = "Suitable for current conditions";
pub const DEFAULT_EXPECTED_YIELD: &str = "2000-2500 kg/acre";
pub const DEFAULT_SOIL_COMPATIBILITY: &str = "Highly Compatible";
pub const DEFAULT_TEMP_RANGE: &str = "20-30°C";
pub const DEFAULT_RAINFALL_RANGE: &str = "40-80 mm";
pub const DEFAULT_CROP_DURATION: &str = "90-120 days";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub name: String,
    /// Suitability, 0-100
    pub score: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub expected_yield: Option<String>,
}

impl CropRecommendation {
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or(DEFAULT_REASON)
    }

    pub fn expected_yield(&self) -> &str {
        self.expected_yield
            .as_deref()
            .unwrap_or(DEFAULT_EXPECTED_YIELD)
    }
}

/// Ranked crop list plus the compatibility panel that accompanies it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub crops: Vec<CropRecommendation>,
    #[serde(default)]
    pub soil_compatibility: Option<String>,
    #[serde(default)]
    pub temp_range: Option<String>,
    #[serde(default)]
    pub rainfall_range: Option<String>,
    #[serde(default)]
    pub crop_duration: Option<String>,
}

impl RecommendationSet {
    pub fn top_crop(&self) -> Option<&CropRecommendation> {
        self.crops.first()
    }

    /// Orders crops by score, highest first. Stable for equal scores.
    pub fn rank(&mut self) {
        self.crops.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    pub fn soil_compatibility(&self) -> &str {
        self.soil_compatibility
            .as_deref()
            .unwrap_or(DEFAULT_SOIL_COMPATIBILITY)
    }

    pub fn temp_range(&self) -> &str {
        self.temp_range.as_deref().unwrap_or(DEFAULT_TEMP_RANGE)
    }

    pub fn rainfall_range(&self) -> &str {
        self.rainfall_range
            .as_deref()
            .unwrap_or(DEFAULT_RAINFALL_RANGE)
    }

    pub fn crop_duration(&self) -> &str {
        self.crop_duration
            .as_deref()
            .unwrap_or(DEFAULT_CROP_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(name: &str, score: f64) -> CropRecommendation {
        CropRecommendation {
            name: name.into(),
            score,
            reason: None,
            season: None,
            expected_yield: None,
        }
    }

    #[test]
    fn rank_orders_by_score_descending() {
        let mut set = RecommendationSet {
            crops: vec![crop("Maize", 80.0), crop("Rice", 95.0), crop("Cotton", 65.0)],
            ..Default::default()
        };
        set.rank();
        let names: Vec<_> = set.crops.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Rice", "Maize", "Cotton"]);
        assert_eq!(set.top_crop().map(|c| c.name.as_str()), Some("Rice"));
    }

    #[test]
    fn empty_set_has_no_top_crop() {
        assert!(RecommendationSet::default().top_crop().is_none());
    }

    #[test]
    fn decodes_wire_response_with_missing_panel_fields() {
        let json = r#"{"crops": [{"name": "Wheat", "score": 91.6}]}"#;
        let set: RecommendationSet = serde_json::from_str(json).unwrap();
        let top = set.top_crop().unwrap();
        assert_eq!(top.reason(), DEFAULT_REASON);
        assert_eq!(top.expected_yield(), DEFAULT_EXPECTED_YIELD);
        assert_eq!(set.soil_compatibility(), DEFAULT_SOIL_COMPATIBILITY);
        assert_eq!(set.crop_duration(), DEFAULT_CROP_DURATION);
    }
}
