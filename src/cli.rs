use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrisense",
    version,
    about = "Crop recommendations, weather risk alerts and a farm assistant"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Never call the advisory API; synthesize all data locally
    #[arg(long, global = true)]
    pub offline: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit farm details and print the advisory dashboard
    Advise {
        #[command(flatten)]
        farm: FarmArgs,

        /// Print the session as JSON instead of the dashboard
        #[arg(long)]
        json: bool,
    },
    /// Submit farm details and ask the assistant one question
    Ask {
        /// The question for the assistant
        question: String,

        #[command(flatten)]
        farm: FarmArgs,
    },
    /// Validate config and test the advisory API connection
    Check,
    /// Run interactive configuration setup
    Init,
}

#[derive(Args, Debug, Clone)]
pub struct FarmArgs {
    /// Farm location (city or district)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Soil type, e.g. loam, clay, black
    #[arg(short, long)]
    pub soil: Option<String>,

    /// Season: kharif, rabi or zaid
    #[arg(long)]
    pub season: Option<String>,

    /// Farm area, free text
    #[arg(short, long)]
    pub area: Option<String>,
}
