//! Rule-based farm assistant.
//!
//! A fixed, priority-ordered list of keyword intents maps a chat message and
//! the current session to a canned answer. Matching is case-insensitive
//! substring search; the first matching intent wins. Missing session data
//! degrades to generic wording and never produces an error.

use super::rules::evaluate_risks;
use crate::models::{format_date, round_display, SessionState, WeatherReading};

pub const HELP_MESSAGE: &str = "I'm here to help with questions about your crop recommendations, \
weather conditions, and farming schedule. Try asking about \"why this crop?\", \
\"weather risks\", or \"next steps\".";

pub const ALL_CLEAR_MESSAGE: &str = "Good news! Weather conditions are favorable with no major \
risks detected. You can proceed with farming activities as scheduled.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    WhyCrop,
    WeatherRisk,
    NextStep,
    Irrigation,
    Fertilizer,
    Help,
}

impl Intent {
    /// Classify a message. `WhyCrop` only applies when a top crop exists;
    /// otherwise the message falls through to the later intents.
    pub fn classify(message: &str, state: &SessionState) -> Self {
        let msg = message.to_lowercase();

        if msg.contains("why") && state.top_crop().is_some() {
            Intent::WhyCrop
        } else if msg.contains("risk") || msg.contains("weather") {
            Intent::WeatherRisk
        } else if msg.contains("what should i do") || msg.contains("next step") {
            Intent::NextStep
        } else if msg.contains("irrigation") || msg.contains("water") {
            Intent::Irrigation
        } else if msg.contains("fertiliz") || msg.contains("nutrient") {
            Intent::Fertilizer
        } else {
            Intent::Help
        }
    }
}

/// Canned prompts offered as one-key shortcuts in the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickQuestion {
    WhyCrop,
    WeatherRisk,
    NextStep,
}

impl QuickQuestion {
    pub const ALL: [QuickQuestion; 3] = [
        QuickQuestion::WhyCrop,
        QuickQuestion::WeatherRisk,
        QuickQuestion::NextStep,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickQuestion::WhyCrop => "why-crop",
            QuickQuestion::WeatherRisk => "weather-risk",
            QuickQuestion::NextStep => "next-step",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.id() == id.trim())
    }

    pub fn message(&self, state: &SessionState) -> String {
        match self {
            QuickQuestion::WhyCrop => format!(
                "Why is {} recommended?",
                state
                    .top_crop()
                    .map(|c| c.name.as_str())
                    .unwrap_or("this crop")
            ),
            QuickQuestion::WeatherRisk => "What are the weather risks for my farm?".to_string(),
            QuickQuestion::NextStep => "What should I do now?".to_string(),
        }
    }
}

pub fn respond(message: &str, state: &SessionState) -> String {
    let default_weather = WeatherReading::default();
    let weather = state.weather.as_ref().unwrap_or(&default_weather);
    let soil = state.input.as_ref().map(|i| i.soil_type.as_str());

    match Intent::classify(message, state) {
        Intent::WhyCrop => {
            let crop = state
                .top_crop()
                .map(|c| c.name.as_str())
                .unwrap_or("This crop");
            let season = state.input.as_ref().map(|i| i.season.as_str());
            format!(
                "{} is recommended because it matches your soil type ({}), is ideal for the {} \
                 season, and the current weather conditions ({}°C, {}mm rainfall) are perfect \
                 for its growth.",
                crop,
                soil.unwrap_or("not specified"),
                season.unwrap_or("current"),
                round_display(weather.temperature_c()),
                weather.rainfall_mm()
            )
        }
        Intent::WeatherRisk => {
            let alerts = evaluate_risks(weather);
            if alerts.is_empty() {
                return ALL_CLEAR_MESSAGE.to_string();
            }
            let titles: Vec<&str> = alerts.iter().map(|a| a.title.as_str()).collect();
            format!(
                "I've identified {} risk(s): {}. Please check the risk alerts section for \
                 detailed recommendations.",
                alerts.len(),
                titles.join(", ")
            )
        }
        Intent::NextStep => {
            let next = state.schedule.as_ref().and_then(|s| s.next_activity());
            let (activity, date) = match next {
                Some(a) => (a.activity.clone(), format_date(a.recommended_date)),
                None => (
                    "Prepare your field".to_string(),
                    "the scheduled date".to_string(),
                ),
            };
            format!(
                "Based on your crop plan, your next step is: {} on {}. Make sure to follow the \
                 farming calendar for best results.",
                activity, date
            )
        }
        Intent::Irrigation => format!(
            "For {}, irrigation needs depend on rainfall. Current rainfall prediction is {}mm. \
             If this is below the crop's requirement, plan supplementary irrigation accordingly.",
            state
                .top_crop()
                .map(|c| c.name.as_str())
                .unwrap_or("your crop"),
            weather.rainfall_mm()
        ),
        Intent::Fertilizer => {
            let soil = soil.map(|s| format!("{} soil", s));
            format!(
                "Your {} compatibility is good. Consult the schedule table for recommended \
                 fertilization dates. Always follow local agricultural guidelines for \
                 fertilizer application.",
                soil.as_deref().unwrap_or("soil")
            )
        }
        Intent::Help => HELP_MESSAGE.to_string(),
    }
}
