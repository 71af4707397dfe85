mod export;
mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use gisgrab_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "gisgrab")]
#[command(about = "Harvests business listings from 2GIS map search into a CSV")]
struct Cli {
    /// City slug as used in 2GIS URLs (transliterated: moscow, spb, novosibirsk, ...).
    #[arg(long)]
    city: String,

    /// Free-text search query, e.g. "рестораны".
    #[arg(long)]
    query: String,

    /// Output CSV path (overrides GISGRAB_OUTPUT_PATH).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run the browser without a visible window (overrides GISGRAB_HEADLESS).
    #[arg(long)]
    headless: bool,
}

/// Applies CLI flags over the env-derived configuration.
fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if cli.headless {
        config.headless = true;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = gisgrab_core::load_app_config()?;
    apply_cli_overrides(&mut config, &cli);

    pipeline::run(&config, &cli.city, &cli.query)
}
