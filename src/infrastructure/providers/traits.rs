//! # Estimate Source Trait
//!
//! Port definition for live fare providers.
//!
//! This module defines the [`EstimateSource`] trait the aggregator
//! depends on. Implementations wrap a provider's network protocol; test
//! doubles substitute canned results and call counters.
//!
//! # Examples
//!
//! ```ignore
//! use fairfare::infrastructure::providers::traits::EstimateSource;
//!
//! #[derive(Debug)]
//! struct MySource { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl EstimateSource for MySource {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::estimate::NormalizedEstimate;
use crate::domain::value_objects::{Location, Provider};
use async_trait::async_trait;
use std::fmt;

/// Trait defining the interface for live estimate providers.
///
/// # Failure Semantics
///
/// `fetch_estimates` NEVER surfaces an error: any transport fault,
/// unusable payload, or genuinely empty offer folds into an empty
/// vector at this boundary. Callers cannot (and must not need to)
/// distinguish "unreachable" from "nothing on offer"; the comparison
/// as a whole always succeeds.
///
/// # Cancellation
///
/// Implementations must hold no per-call state, so a caller dropping
/// the future mid-flight abandons the network work without affecting
/// later, independent calls.
#[async_trait]
pub trait EstimateSource: Send + Sync + fmt::Debug {
    /// Returns the provider this source speaks for.
    fn provider(&self) -> Provider;

    /// Fetches normalized estimates for a trip.
    ///
    /// Returns an empty vector on any failure.
    async fn fetch_estimates(
        &self,
        pickup: &Location,
        destination: &Location,
    ) -> Vec<NormalizedEstimate>;
}
