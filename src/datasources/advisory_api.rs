use crate::config::ApiConfig;
use crate::error::{AdvisorError, Result};
use crate::models::{FarmInput, RecommendationSet, Schedule, WeatherReading};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the advisory backend (`/weather`, `/recommend`, `/schedule`).
///
/// Transport failures, non-success statuses and undecodable bodies all
/// surface as `DataSourceUnavailable`.
pub struct AdvisoryApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl AdvisoryApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// `GET /weather?location=..`
    pub async fn fetch_weather(&self, location: &str) -> Result<WeatherReading> {
        let url = format!(
            "{}/weather?location={}",
            self.base_url(),
            urlencoding::encode(location)
        );
        self.send("Weather", self.authorize(self.client.get(&url)))
            .await
    }

    /// `POST /recommend`. Crops come back ranked, highest score first.
    pub async fn fetch_recommendations(&self, input: &FarmInput) -> Result<RecommendationSet> {
        let mut set: RecommendationSet = self.post("Recommendation", "recommend", input).await?;
        if set.crops.is_empty() {
            return Err(AdvisorError::DataSourceUnavailable(
                "Recommendation API returned no crops".into(),
            ));
        }
        set.rank();
        Ok(set)
    }

    /// `POST /schedule`
    pub async fn fetch_schedule(&self, input: &FarmInput) -> Result<Schedule> {
        self.post("Schedule", "schedule", input).await
    }

    /// Test connection to the advisory API
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/weather?location=test", self.base_url());

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| AdvisorError::DataSourceUnavailable(format!("Advisory API: {}", e)))?;

        Ok(response.status().is_success())
    }

    async fn post<B, T>(&self, name: &str, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url(), path);
        let request = self.authorize(self.client.post(&url)).json(body);
        self.send(name, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        name: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| AdvisorError::DataSourceUnavailable(format!("{} API: {}", name, e)))?;

        if !response.status().is_success() {
            return Err(AdvisorError::DataSourceUnavailable(format!(
                "{} API returned {}",
                name,
                response.status()
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AdvisorError::DataSourceUnavailable(format!(
                "Failed to parse {} API response: {}",
                name, e
            ))
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.bearer_token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port, so every request fails fast.
    fn unreachable_client() -> AdvisoryApiClient {
        AdvisoryApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:9/api/".into(),
            enabled: true,
            api_key: Some("token".into()),
        })
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        assert_eq!(unreachable_client().base_url(), "http://127.0.0.1:9/api");
    }

    #[tokio::test]
    async fn transport_failure_is_data_source_unavailable() {
        let client = unreachable_client();
        let input = FarmInput::new("Pune", "loam", "kharif", None);

        assert!(matches!(
            client.fetch_weather("Pune").await,
            Err(AdvisorError::DataSourceUnavailable(_))
        ));
        assert!(matches!(
            client.fetch_recommendations(&input).await,
            Err(AdvisorError::DataSourceUnavailable(_))
        ));
        assert!(matches!(
            client.fetch_schedule(&input).await,
            Err(AdvisorError::DataSourceUnavailable(_))
        ));
        assert!(client.test_connection().await.is_err());
    }
}
