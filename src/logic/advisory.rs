use super::session::SessionStore;
use super::synthesizer::{
    synthesize_forecast, synthesize_recommendations, synthesize_schedule, synthesize_weather,
};
use crate::config::ApiConfig;
use crate::datasources::AdvisoryApiClient;
use crate::error::{AdvisorError, Result};
use crate::models::{FarmInput, RecommendationSet, Schedule, SessionState, WeatherReading};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

/// Runs a form submission: fetch weather, recommendations and schedule in
/// turn, substituting synthesized data for any fetch that fails, then publish
/// the result to the session store in one write.
pub struct AdvisoryService {
    client: Option<AdvisoryApiClient>,
    session: SessionStore,
    rng: Mutex<Box<dyn RngCore + Send>>,
    reference_date: Option<NaiveDate>,
    in_flight: tokio::sync::Mutex<()>,
}

impl AdvisoryService {
    pub fn new(config: &ApiConfig, offline: bool) -> Self {
        let client = if offline {
            tracing::info!("Offline mode - all data will be synthesized locally");
            None
        } else if !config.enabled {
            tracing::info!("Advisory API disabled in config - using synthesized data");
            None
        } else {
            tracing::info!("Advisory API configured at {}", config.base_url);
            Some(AdvisoryApiClient::new(config.clone()))
        };

        Self {
            client,
            session: SessionStore::new(),
            rng: Mutex::new(Box::new(StdRng::from_entropy())),
            reference_date: None,
            in_flight: tokio::sync::Mutex::new(()),
        }
    }

    /// A service that never touches the network.
    pub fn offline() -> Self {
        Self::new(&ApiConfig::default(), true)
    }

    /// Replace the random source used for synthesized weather.
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    /// Pin the date synthesized schedules count from (defaults to today).
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn current(&self) -> Arc<SessionState> {
        self.session.current().await
    }

    pub fn is_online(&self) -> bool {
        self.client.is_some()
    }

    /// Submit a farm form.
    ///
    /// Only one submission runs at a time; a second call while one is in
    /// flight is rejected with `SubmissionInProgress` rather than queued.
    pub async fn submit(&self, input: FarmInput) -> Result<Arc<SessionState>> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| AdvisorError::SubmissionInProgress)?;

        input.validate()?;
        tracing::debug!(
            "Submitting farm form for {} ({} soil, {} season)",
            input.location,
            input.soil_type,
            input.season
        );

        let weather = self.load_weather(&input.location).await;
        let recommendations = self.load_recommendations(&input).await;
        let schedule = self.load_schedule(&input).await;

        Ok(self
            .session
            .update(input, weather, recommendations, schedule)
            .await)
    }

    async fn load_weather(&self, location: &str) -> WeatherReading {
        if let Some(ref client) = self.client {
            match client.fetch_weather(location).await {
                Ok(mut reading) => {
                    tracing::debug!("Weather fetched for {}", location);
                    if reading.forecast.is_none() {
                        reading.forecast = Some(self.draw(|rng| synthesize_forecast(rng)));
                    }
                    return reading;
                }
                Err(e) => {
                    tracing::warn!("Weather API failed, using mock data: {}", e);
                }
            }
        }
        self.draw(|rng| synthesize_weather(rng))
    }

    async fn load_recommendations(&self, input: &FarmInput) -> RecommendationSet {
        if let Some(ref client) = self.client {
            match client.fetch_recommendations(input).await {
                Ok(set) => {
                    tracing::debug!("Recommendations fetched ({} crops)", set.crops.len());
                    return set;
                }
                Err(e) => {
                    tracing::warn!("Recommendation API failed, using mock data: {}", e);
                }
            }
        }
        synthesize_recommendations(input)
    }

    async fn load_schedule(&self, input: &FarmInput) -> Schedule {
        if let Some(ref client) = self.client {
            match client.fetch_schedule(input).await {
                Ok(schedule) => {
                    tracing::debug!(
                        "Schedule fetched ({} activities)",
                        schedule.activities.len()
                    );
                    return schedule;
                }
                Err(e) => {
                    tracing::warn!("Schedule API failed, using mock data: {}", e);
                }
            }
        }
        let today = self
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        synthesize_schedule(today)
    }

    fn draw<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut **rng)
    }

    /// Probe the advisory API. `None` when running without one.
    pub async fn check_connection(&self) -> Option<bool> {
        match self.client {
            Some(ref client) => Some(client.test_connection().await.unwrap_or(false)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_FARM_AREA;

    fn unreachable_api() -> ApiConfig {
        ApiConfig {
            base_url: "http://127.0.0.1:9/api".into(),
            enabled: true,
            api_key: None,
        }
    }

    #[tokio::test]
    async fn offline_submission_publishes_synthesized_state() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let service = AdvisoryService::offline()
            .with_rng(StdRng::seed_from_u64(11))
            .with_reference_date(date);
        assert!(!service.is_online());
        assert!(service.current().await.is_empty());

        let state = service
            .submit(FarmInput::new("Ludhiana", "loam", "rabi", None))
            .await
            .unwrap();

        assert_eq!(state.top_crop().map(|c| c.name.as_str()), Some("Wheat"));
        assert_eq!(
            state.input.as_ref().map(|i| i.farm_area.as_str()),
            Some(DEFAULT_FARM_AREA)
        );
        let schedule = state.schedule.as_ref().unwrap();
        assert_eq!(schedule.activities[0].recommended_date, date);
        assert_eq!(state.weather.as_ref().unwrap().forecast_days().len(), 7);

        assert_eq!(*service.current().await, *state);
    }

    #[tokio::test]
    async fn unreachable_api_falls_back_for_every_fetch() {
        let service = AdvisoryService::new(&unreachable_api(), false);
        assert!(service.is_online());

        let state = service
            .submit(FarmInput::new("Pune", "clay", "zaid", Some("1 acre".into())))
            .await
            .unwrap();

        assert_eq!(state.top_crop().map(|c| c.name.as_str()), Some("Watermelon"));
        assert_eq!(state.schedule.as_ref().unwrap().activities.len(), 7);
        let temp = state.weather.as_ref().unwrap().temperature_c();
        assert!((28.0..32.0).contains(&temp));
        assert_eq!(service.check_connection().await, Some(false));
    }

    #[tokio::test]
    async fn disabled_api_is_treated_as_offline() {
        let config = ApiConfig {
            enabled: false,
            ..unreachable_api()
        };
        let service = AdvisoryService::new(&config, false);
        assert!(!service.is_online());
        assert_eq!(service.check_connection().await, None);
    }

    #[tokio::test]
    async fn invalid_input_leaves_state_untouched() {
        let service = AdvisoryService::offline();
        let result = service
            .submit(FarmInput::new("", "loam", "kharif", None))
            .await;
        assert!(matches!(result, Err(AdvisorError::InvalidInput(_))));
        assert!(service.current().await.is_empty());
    }

    #[tokio::test]
    async fn overlapping_submission_is_rejected() {
        let service = AdvisoryService::offline();
        let _held = service.in_flight.lock().await;
        let result = service
            .submit(FarmInput::new("Pune", "loam", "kharif", None))
            .await;
        assert!(matches!(result, Err(AdvisorError::SubmissionInProgress)));
    }

    #[tokio::test]
    async fn seeded_services_synthesize_identical_weather() {
        let a = AdvisoryService::offline().with_rng(StdRng::seed_from_u64(5));
        let b = AdvisoryService::offline().with_rng(StdRng::seed_from_u64(5));
        let input = FarmInput::new("Pune", "loam", "kharif", None);
        let wa = a.submit(input.clone()).await.unwrap().weather.clone();
        let wb = b.submit(input).await.unwrap().weather.clone();
        assert_eq!(wa, wb);
    }
}
