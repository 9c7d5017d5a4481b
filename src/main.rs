//! Command-line entry point.

use anyhow::Result;
use clap::Parser;
use neurochef::config::Config;
use neurochef::responder::{self, Responder};
use neurochef::{data, repl};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Meal-planning assistant for neurodivergent needs.
#[derive(Debug, Parser)]
#[command(name = "neurochef", version, about)]
struct Cli {
    /// Dataset file (default: meal_data.json next to the executable)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Config file (default: the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start an interactive session
    #[arg(short, long)]
    interactive: bool,

    /// The question to ask, e.g. `neurochef i need smooth texture`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "QUERY")]
    query: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let responder = Responder::from_config(&config.responder);

    if cli.interactive {
        let data_path = config.resolve_data_path(cli.data.as_deref())?;
        let dataset = data::load(&data_path)?;
        return repl::run(&responder, &dataset);
    }

    if cli.query.is_empty() {
        println!("{}", responder::EMPTY_INPUT_MESSAGE);
        return Ok(());
    }
    let query = cli.query.join(" ");
    // Saying goodbye must not depend on the dataset being loadable.
    if responder::is_farewell(&query) {
        println!("{}", responder::FAREWELL_MESSAGE);
        return Ok(());
    }

    let data_path = config.resolve_data_path(cli.data.as_deref())?;
    let dataset = data::load(&data_path)?;
    println!("{}", responder.respond(&query, &dataset)?);
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("neurochef=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
