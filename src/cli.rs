use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Health forecast: predict tomorrow's weight and BMI from today's food log.
#[derive(Parser, Debug)]
#[command(name = "health_forecast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// CSV food catalog to use instead of the built-in one.
    #[arg(short, long, global = true, env = "HEALTH_FORECAST_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Step through profile, food log, forecast and advice interactively.
    #[default]
    Wizard,

    /// Assess a profile and food log read from JSON files.
    Forecast {
        /// Profile JSON file.
        #[arg(short, long)]
        profile: PathBuf,

        /// Food log JSON file (array of entries). Omit for an empty log.
        #[arg(short, long)]
        entries: Option<PathBuf>,

        /// Print the rounded assessment as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Browse or search the food catalog.
    Catalog {
        /// Fuzzy search term.
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this category (by key).
        #[arg(long)]
        category: Option<String>,
    },
}
