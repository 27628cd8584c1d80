use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE_C: f64 = 28.0;
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 65.0;
pub const DEFAULT_RAINFALL_MM: f64 = 45.0;
pub const DEFAULT_WIND_SPEED: f64 = 12.0;

/// One point-in-time weather snapshot plus the 7-day outlook.
///
/// Every field is optional on the wire; the accessors substitute the display
/// defaults so downstream logic never has to handle a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: Option<f64>, // °C
    pub humidity: Option<f64>,    // %
    pub rainfall_prediction: Option<f64>, // mm
    pub wind_speed: Option<f64>,
    #[serde(rename = "forecast_7day", skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<ForecastDay>>,
}

impl WeatherReading {
    pub fn temperature_c(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE_C)
    }

    pub fn humidity_percent(&self) -> f64 {
        self.humidity.unwrap_or(DEFAULT_HUMIDITY_PERCENT)
    }

    pub fn rainfall_mm(&self) -> f64 {
        self.rainfall_prediction.unwrap_or(DEFAULT_RAINFALL_MM)
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed.unwrap_or(DEFAULT_WIND_SPEED)
    }

    pub fn forecast_days(&self) -> &[ForecastDay] {
        self.forecast.as_deref().unwrap_or_default()
    }
}

/// Round half away from zero, matching how temperatures and wind are shown.
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(rename = "day")]
    pub day_label: String,
    #[serde(rename = "condition", default)]
    pub condition_name: Option<String>,
    #[serde(rename = "condition_emoji", default)]
    pub condition_icon: Option<String>,
    pub temp_max: f64,
    pub temp_min: f64,
}

impl ForecastDay {
    pub fn condition_name(&self) -> &str {
        self.condition_name
            .as_deref()
            .unwrap_or(WeatherCondition::PartlyCloudy.as_str())
    }

    pub fn condition_icon(&self) -> &str {
        self.condition_icon
            .as_deref()
            .unwrap_or(WeatherCondition::PartlyCloudy.icon())
    }
}

/// Sky condition archetypes used by the synthesized forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    Sunny,
    #[default]
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀️",
            WeatherCondition::PartlyCloudy => "🌤️",
            WeatherCondition::Cloudy => "⛅",
            WeatherCondition::Rainy => "🌧️",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
