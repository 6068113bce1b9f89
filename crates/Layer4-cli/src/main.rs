//! WeatherWatch CLI - Main entry point

mod demo;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watch_core::WeatherStation;
use watch_foundation::StationConfig;

/// WeatherWatch - weather station observer demo
#[derive(Parser, Debug)]
#[command(name = "weather-station")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Station config file (merged over global and project config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Readings published while both observers are subscribed
    #[arg(short, long)]
    readings: Option<usize>,

    /// Seed for deterministic readings
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = match &args.config {
        Some(path) => StationConfig::load_with_override(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StationConfig::load().context("Failed to load station config")?,
    };
    if let Some(readings) = args.readings {
        config = config.readings(readings);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let readings = config.readings;
    let station = WeatherStation::new(config);
    tracing::info!(
        initial = %station.temperature(),
        max = station.config().max_reading,
        readings,
        "Weather station started"
    );

    let report = demo::run(&station, readings, &mut rng);

    println!("Readings:    {}", report.readings.join(", "));
    println!("Mobile app:  {}", report.mobile_app.join(", "));
    println!("Web service: {}", report.web_service.join(", "));

    Ok(())
}
