use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FARM_AREA: &str = "Not specified";

/// Soil types offered by the farm form prompt.
pub const SOIL_TYPES: [&str; 7] = [
    "loam", "clay", "sandy", "silt", "black", "red", "alluvial",
];

/// Cropping-calendar period used to key the default crop lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif (Monsoon, Jun-Oct)",
            Season::Rabi => "Rabi (Winter, Nov-Apr)",
            Season::Zaid => "Zaid (Summer, Mar-Jun)",
        }
    }

    /// Default crop list, best candidate first.
    pub fn default_crops(&self) -> [&'static str; 3] {
        match self {
            Season::Kharif => ["Rice", "Maize", "Cotton"],
            Season::Rabi => ["Wheat", "Barley", "Chickpea"],
            Season::Zaid => ["Watermelon", "Muskmelon", "Cucumber"],
        }
    }

    /// Exact, case-sensitive match on the lowercase key. Anything else
    /// (including "Rabi" or "winter") is an unknown season.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The submitted farm form. Field values are kept as entered so they can be
/// echoed back verbatim; the wire shape is camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmInput {
    pub location: String,
    pub soil_type: String,
    pub season: String,
    pub farm_area: String,
}

impl FarmInput {
    pub fn new(
        location: impl Into<String>,
        soil_type: impl Into<String>,
        season: impl Into<String>,
        farm_area: Option<String>,
    ) -> Self {
        let farm_area = farm_area
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_FARM_AREA.to_string());

        Self {
            location: location.into().trim().to_string(),
            soil_type: soil_type.into().trim().to_string(),
            season: season.into().trim().to_string(),
            farm_area,
        }
    }

    /// Parsed season, `None` when the entered value is not one of the three
    /// known periods.
    pub fn season_kind(&self) -> Option<Season> {
        Season::from_str(&self.season)
    }

    /// Rejects forms that cannot be submitted at all.
    pub fn validate(&self) -> Result<()> {
        if self.location.is_empty() {
            return Err(AdvisorError::InvalidInput("location is required".into()));
        }
        if self.soil_type.is_empty() {
            return Err(AdvisorError::InvalidInput("soil type is required".into()));
        }
        Ok(())
    }
}
