//! # FairFare
//!
//! Ride-hailing fare comparison engine. One call fans out to
//! deterministic local fare estimators and a live provider, normalizes
//! whatever comes back into a single schema, and returns every
//! estimate sorted by total fare.
//!
//! ## Architecture
//!
//! ```text
//! FareAggregator
//! ├── LocalFareEstimator (Ola)    rate-card math, surge-adjusted
//! ├── LocalFareEstimator (Uber)   rate-card math, surge-adjusted
//! └── NammaYatriAdapter           two-phase HTTP protocol, folds
//!                                 every failure to an empty batch
//! ```
//!
//! Layered the usual way: `domain` holds the fare math and policies,
//! `infrastructure` talks to the network behind the [`EstimateSource`]
//! port, `application` orchestrates one comparison and builds booking
//! redirects, and `config` wires it all from layered sources.
//!
//! The comparison path never returns an error: providers that cannot
//! contribute contribute nothing, and the caller always gets a sorted
//! (possibly empty) [`FareComparison`].
//!
//! ## Examples
//!
//! ```no_run
//! use fairfare::application::services::FareAggregator;
//! use fairfare::config::EngineConfig;
//! use fairfare::domain::value_objects::{Location, Route};
//! use fairfare::infrastructure::providers::NammaYatriAdapter;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::load()?;
//!     let live = config.live_provider();
//!     let adapter =
//!         NammaYatriAdapter::new(live.base_url(), live.timeout_ms(), live.settle_delay())?;
//!
//!     let aggregator = FareAggregator::new(
//!         Arc::new(adapter),
//!         config.surge_model(),
//!         config.eligibility_policy()?,
//!     );
//!
//!     let route = Route::new(12_500.0, 1_500.0, "25 mins");
//!     let pickup = Location::new("MG Road, Bengaluru", 12.9757, 77.6050, "a");
//!     let destination = Location::new("HSR Layout, Bengaluru", 12.9121, 77.6446, "b");
//!
//!     let comparison = aggregator.compare_fares(&route, &pickup, &destination).await;
//!     for estimate in &comparison {
//!         println!("{estimate}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::application::services::{BookingAction, BookingFallback, FareAggregator};
pub use crate::config::EngineConfig;
pub use crate::domain::entities::{FareComparison, NormalizedEstimate};
pub use crate::domain::value_objects::{FareBreakdown, Location, Provider, Route};
pub use crate::infrastructure::providers::{EstimateSource, NammaYatriAdapter};
