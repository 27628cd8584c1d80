use crate::config::FarmDefaults;
use crate::error::{AdvisorError, Result};
use crate::models::{FarmInput, Season, SOIL_TYPES};
use dialoguer::{Input, Select};

/// Prompt for the farm form, pre-filled from the configured defaults.
pub fn prompt_farm_input(defaults: &FarmDefaults) -> Result<FarmInput> {
    println!("Farm details");

    let mut location = Input::<String>::new().with_prompt("  Location");
    if let Some(ref default) = defaults.location {
        location = location.default(default.clone());
    }
    let location = location
        .interact_text()
        .map_err(|e| AdvisorError::InvalidInput(format!("Input error: {}", e)))?;

    let soil_default = SOIL_TYPES
        .iter()
        .position(|s| s.eq_ignore_ascii_case(&defaults.soil_type))
        .unwrap_or(0);
    let soil_idx = Select::new()
        .with_prompt("  Soil type")
        .items(&SOIL_TYPES)
        .default(soil_default)
        .interact()
        .map_err(|e| AdvisorError::InvalidInput(format!("Input error: {}", e)))?;

    let season_labels: Vec<&str> = Season::ALL.iter().map(|s| s.label()).collect();
    let season_default = Season::from_str(&defaults.season)
        .and_then(|d| Season::ALL.iter().position(|s| *s == d))
        .unwrap_or(0);
    let season_idx = Select::new()
        .with_prompt("  Season")
        .items(&season_labels)
        .default(season_default)
        .interact()
        .map_err(|e| AdvisorError::InvalidInput(format!("Input error: {}", e)))?;

    let farm_area: String = Input::new()
        .with_prompt("  Farm area (optional)")
        .default(defaults.farm_area.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AdvisorError::InvalidInput(format!("Input error: {}", e)))?;

    println!();

    Ok(FarmInput::new(
        location,
        SOIL_TYPES[soil_idx],
        Season::ALL[season_idx].as_str(),
        Some(farm_area),
    ))
}
