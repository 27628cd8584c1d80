//! End-to-end tests for the submission flow through the public library API.
//!
//! All tests run offline or against an unreachable backend, so every dataset
//! comes from the synthesizer.

use agrisense::config::ApiConfig;
use agrisense::logic::assistant::HELP_MESSAGE;
use agrisense::logic::{evaluate_risks, respond, AdvisoryService, QuickQuestion};
use agrisense::models::FarmInput;
use agrisense::ui::output::DEFAULT_WIDTH;
use agrisense::ui::DashboardView;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn service() -> AdvisoryService {
    AdvisoryService::offline()
        .with_rng(StdRng::seed_from_u64(2026))
        .with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

#[tokio::test]
async fn test_submit_then_chat() {
    let service = service();
    let state = service
        .submit(FarmInput::new("Cuttack", "loam", "kharif", None))
        .await
        .unwrap();

    let why = respond(&QuickQuestion::WhyCrop.message(&state), &state);
    assert!(why.contains("Rice"));
    assert!(why.contains("loam"));

    let next = respond("What should I do now?", &state);
    assert!(next.contains("Field Preparation on Mon, 19 Oct, 2026"));

    let risk = respond("weather risk?", &state);
    assert!(risk.starts_with("Good news!"));

    assert_eq!(respond("hello", &state), HELP_MESSAGE);
}

#[tokio::test]
async fn test_resubmission_replaces_session() {
    let service = service();
    service
        .submit(FarmInput::new("Cuttack", "loam", "kharif", None))
        .await
        .unwrap();
    service
        .submit(FarmInput::new("Ludhiana", "alluvial", "rabi", Some("4 acres".into())))
        .await
        .unwrap();

    let state = service.current().await;
    let input = state.input.as_ref().unwrap();
    assert_eq!(input.location, "Ludhiana");
    assert_eq!(input.farm_area, "4 acres");
    assert_eq!(state.top_crop().map(|c| c.name.as_str()), Some("Wheat"));
}

#[tokio::test]
async fn test_unreachable_backend_still_produces_dashboard() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".into(),
        enabled: true,
        api_key: None,
    };
    let service = AdvisoryService::new(&config, false);
    let state = service
        .submit(FarmInput::new("Jaipur", "sandy", "zaid", None))
        .await
        .unwrap();

    let weather = state.weather.as_ref().unwrap();
    assert!(evaluate_risks(weather).is_empty());

    let dashboard = DashboardView::new(&state).render_text(DEFAULT_WIDTH);
    assert!(dashboard.contains("Farm Advisory: Jaipur"));
    assert!(dashboard.contains("Watermelon"));
    assert!(dashboard.contains("All Clear"));
}

#[tokio::test]
async fn test_session_serializes_to_wire_shape() {
    let service = service();
    let state = service
        .submit(FarmInput::new("Pune", "red", "rabi", None))
        .await
        .unwrap();

    let json = serde_json::to_value(&*state).unwrap();
    assert_eq!(json["input"]["soilType"], "red");
    assert_eq!(json["recommendations"]["crops"][0]["name"], "Wheat");
    assert_eq!(json["weather"]["forecast_7day"].as_array().unwrap().len(), 7);
    assert_eq!(
        json["schedule"]["activities"][0]["recommended_date"],
        "2026-10-19"
    );
}
