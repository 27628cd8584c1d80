//! AgriSense - farm advisory with crop recommendations, weather risk alerts
//! and a rule-based assistant.
//!
//! A submitted farm form (location, soil, season, area) is resolved against
//! an advisory backend for weather, crop recommendations and an activity
//! schedule. Any fetch that fails falls back to locally synthesized data, so
//! a submission always produces a complete session.
//!
//! # Modules
//!
//! - [`models`]: form input, weather, crops, schedule, alerts, session state
//! - [`datasources`]: HTTP client for the advisory backend
//! - [`logic`]: risk rules, synthesizer, assistant, session store, submission flow
//! - [`ui`]: text dashboard, form prompts and chat loop
//! - [`config`]: YAML configuration

pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod ui;

pub use error::{AdvisorError, Result};
