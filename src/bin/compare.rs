//! Fare comparison CLI.
//!
//! Runs one comparison for a trip given on the command line and prints
//! the sorted estimates as JSON on stdout. Logs go to stderr so the
//! output stays pipeable; set `RUST_LOG` to control verbosity and
//! `LOG_FORMAT=json` for structured logs.

use anyhow::{Context, Result};
use clap::Parser;
use fairfare::application::services::{BookingAction, FareAggregator};
use fairfare::config::EngineConfig;
use fairfare::domain::entities::FareComparison;
use fairfare::domain::value_objects::{Location, Route};
use fairfare::infrastructure::providers::NammaYatriAdapter;
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fairfare-compare",
    version,
    about = "Compare ride fares across providers"
)]
struct Args {
    /// Pickup address.
    #[arg(long)]
    from: String,

    /// Pickup latitude.
    #[arg(long)]
    from_lat: f64,

    /// Pickup longitude.
    #[arg(long)]
    from_lng: f64,

    /// Destination address.
    #[arg(long)]
    to: String,

    /// Destination latitude.
    #[arg(long)]
    to_lat: f64,

    /// Destination longitude.
    #[arg(long)]
    to_lng: f64,

    /// Trip distance in meters.
    #[arg(long)]
    distance_m: f64,

    /// Trip duration in seconds.
    #[arg(long)]
    duration_s: f64,

    /// Human-readable duration shown on local estimates; derived from
    /// the duration when omitted.
    #[arg(long)]
    duration_text: Option<String>,

    /// Pin surge to a fixed multiplier instead of time-of-day draws.
    #[arg(long)]
    fixed_surge: Option<f64>,

    /// Also emit the booking action for the estimate at this rank
    /// (1 = cheapest).
    #[arg(long)]
    book: Option<usize>,
}

impl Args {
    fn duration_text(&self) -> String {
        self.duration_text.clone().unwrap_or_else(|| {
            let minutes = (self.duration_s / 60.0).round().max(0.0) as i64;
            format!("{minutes} mins")
        })
    }
}

/// Everything one invocation produces.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    estimates: &'a FareComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking: Option<BookingAction>,
}

fn init_tracing() -> Result<()> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;
    let args = Args::parse();

    let mut config = EngineConfig::load().context("loading configuration")?;
    if let Some(multiplier) = args.fixed_surge {
        config = config.with_fixed_surge(multiplier);
    }

    let live = config.live_provider();
    let adapter = NammaYatriAdapter::new(live.base_url(), live.timeout_ms(), live.settle_delay())
        .context("building live provider adapter")?;

    let aggregator = FareAggregator::new(
        Arc::new(adapter),
        config.surge_model(),
        config
            .eligibility_policy()
            .context("building eligibility policy")?,
    );

    let route = Route::new(args.distance_m, args.duration_s, args.duration_text());
    let pickup = Location::new(&args.from, args.from_lat, args.from_lng, "");
    let destination = Location::new(&args.to, args.to_lat, args.to_lng, "");

    let comparison = aggregator.compare_fares(&route, &pickup, &destination).await;

    let booking = match args.book {
        Some(rank) => {
            let estimate = comparison
                .as_slice()
                .get(rank.saturating_sub(1))
                .with_context(|| format!("no estimate at rank {rank}"))?;
            Some(BookingAction::for_estimate(estimate, &pickup, &destination))
        }
        None => None,
    };

    let output = Output {
        estimates: &comparison,
        booking,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
