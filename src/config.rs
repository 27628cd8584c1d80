use crate::error::{AdvisorError, Result};
use dialoguer::{Input, Password, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::{Season, SOIL_TYPES};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub farm: FarmDefaults,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_enabled() -> bool {
    true
}

impl ApiConfig {
    /// Bearer token, skipping blanks and `${VAR}` placeholders left unresolved.
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && !k.starts_with("${"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            enabled: true,
            api_key: None,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Values pre-filled in the farm form prompts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmDefaults {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_soil_type")]
    pub soil_type: String,
    #[serde(default = "default_season")]
    pub season: String,
    #[serde(default)]
    pub farm_area: Option<String>,
}

fn default_soil_type() -> String {
    "loam".into()
}

fn default_season() -> String {
    Season::Kharif.as_str().into()
}

impl Default for FarmDefaults {
    fn default() -> Self {
        Self {
            location: None,
            soil_type: default_soil_type(),
            season: default_season(),
            farm_area: None,
        }
    }
}

impl Config {
    /// Load from `config_override`, or search the standard locations.
    ///
    /// An explicit path must exist. When searching, a missing file yields the
    /// built-in defaults.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AdvisorError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::info!("No config file found - using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        Self::default_config_path().ok().filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/agrisense/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join("agrisense");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AgriSense!");
        println!();

        // --- Advisory API ---
        println!("Advisory API (leave blank to use offline data only)");
        let base_url: String = Input::new()
            .with_prompt("  Base URL")
            .default(DEFAULT_API_BASE_URL.into())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let api_key: String = if base_url.is_empty() {
            String::new()
        } else {
            Password::new()
                .with_prompt("  API key (optional)")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?
        };

        println!();

        // --- Farm defaults ---
        println!("Farm defaults");
        let location: String = Input::new()
            .with_prompt("  Location")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let soil_idx = Select::new()
            .with_prompt("  Soil type")
            .items(&SOIL_TYPES)
            .default(0)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let season_labels: Vec<&str> = Season::ALL.iter().map(|s| s.label()).collect();
        let season_idx = Select::new()
            .with_prompt("  Season")
            .items(&season_labels)
            .default(0)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            api: ApiConfig {
                enabled: !base_url.is_empty(),
                base_url: if base_url.is_empty() {
                    default_base_url()
                } else {
                    base_url
                },
                api_key: Some(api_key).filter(|k| !k.is_empty()),
            },
            farm: FarmDefaults {
                location: Some(location).filter(|l| !l.is_empty()),
                soil_type: SOIL_TYPES[soil_idx].to_string(),
                season: Season::ALL[season_idx].as_str().to_string(),
                farm_area: None,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AdvisorError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgriSense Configuration\n# Generated by `agrisense init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
