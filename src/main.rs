mod cli;

use agrisense::config::{Config, FarmDefaults};
use agrisense::error::AdvisorError;
use agrisense::logic::{respond, AdvisoryService, RiskEvaluator};
use agrisense::models::{FarmInput, SessionState};
use agrisense::ui::output::output_width;
use agrisense::ui::{chat, form, DashboardView};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, FarmArgs};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const SUBMIT_FAILED: &str =
    "Error fetching data. Please check your internet connection and try again.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init) = cli.command {
        Config::setup_interactive().context("Setup failed")?;
        return Ok(());
    }

    // Load configuration
    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `agrisense init` to create a config file");
            std::process::exit(1);
        }
    };

    let service = AdvisoryService::new(&config.api, cli.offline);

    match cli.command {
        None => run_interactive(&service, &config).await,
        Some(Commands::Advise { farm, json }) => {
            let input = farm_input(&farm, &config.farm)?;
            let state = submit(&service, input).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&*state)?);
            } else {
                DashboardView::new(&state).print(output_width())?;
            }
            Ok(())
        }
        Some(Commands::Ask { question, farm }) => {
            let input = farm_input(&farm, &config.farm)?;
            let state = submit(&service, input).await;
            println!("{}", respond(&question, &state));
            Ok(())
        }
        Some(Commands::Check) => run_check(&service, &config).await,
        Some(Commands::Init) => Ok(()),
    }
}

async fn run_interactive(service: &AdvisoryService, config: &Config) -> anyhow::Result<()> {
    let input = form::prompt_farm_input(&config.farm).context("Failed to read farm details")?;

    println!("Fetching weather, recommendations and schedule...");
    let state = submit(service, input).await;
    DashboardView::new(&state).print(output_width())?;

    chat::run_chat(service).await.context("Chat ended with an error")?;
    Ok(())
}

async fn run_check(service: &AdvisoryService, config: &Config) -> anyhow::Result<()> {
    println!("Configuration OK");
    println!("  API base URL: {}", config.api.base_url);
    println!(
        "  API key:      {}",
        if config.api.bearer_token().is_some() {
            "set"
        } else {
            "not set"
        }
    );

    match service.check_connection().await {
        Some(true) => println!("Advisory API: OK"),
        Some(false) => println!("Advisory API: OFFLINE (synthesized data will be used)"),
        None => println!("Advisory API: disabled (synthesized data will be used)"),
    }

    println!("Risk rules:");
    for (id, name) in RiskEvaluator::new().list_rules() {
        println!("  {:<14} {}", id, name);
    }
    Ok(())
}

/// Build the form from flags, falling back to configured defaults.
fn farm_input(args: &FarmArgs, defaults: &FarmDefaults) -> anyhow::Result<FarmInput> {
    let location = args
        .location
        .clone()
        .or_else(|| defaults.location.clone())
        .context("--location is required (or set farm.location in config.yaml)")?;

    Ok(FarmInput::new(
        location,
        args.soil.clone().unwrap_or_else(|| defaults.soil_type.clone()),
        args.season.clone().unwrap_or_else(|| defaults.season.clone()),
        args.area.clone().or_else(|| defaults.farm_area.clone()),
    ))
}

/// Submit, or report the single user-facing failure message and exit.
async fn submit(service: &AdvisoryService, input: FarmInput) -> Arc<SessionState> {
    match service.submit(input).await {
        Ok(state) => state,
        Err(AdvisorError::SubmissionInProgress) => {
            eprintln!("A submission is already running. Please wait for it to finish.");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            eprintln!("{}", SUBMIT_FAILED);
            std::process::exit(1);
        }
    }
}
