use crate::models::{FarmInput, RecommendationSet, Schedule, SessionState, WeatherReading};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the latest session snapshot.
///
/// Writers replace the whole snapshot in one step, so readers see either the
/// previous submission or the new one, never a mix. Cloning the store shares
/// the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Arc<SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn update(
        &self,
        input: FarmInput,
        weather: WeatherReading,
        recommendations: RecommendationSet,
        schedule: Schedule,
    ) -> Arc<SessionState> {
        let snapshot = Arc::new(SessionState::populated(
            input,
            weather,
            recommendations,
            schedule,
        ));
        let mut current = self.current.write().await;
        *current = Arc::clone(&snapshot);
        snapshot
    }

    /// Latest snapshot; empty before the first submission.
    pub async fn current(&self) -> Arc<SessionState> {
        Arc::clone(&*self.current.read().await)
    }
}
