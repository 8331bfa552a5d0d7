//! # Fare Aggregation Engine
//!
//! Orchestrates one fare comparison end to end.
//!
//! This module provides the [`FareAggregator`] which fans out to the
//! deterministic local estimators and the live provider concurrently,
//! filters providers that do not serve the pickup area, and merges
//! everything into a [`FareComparison`] sorted by total fare.
//!
//! The comparison itself never fails: providers that cannot contribute
//! simply contribute nothing, and an empty comparison is a valid
//! outcome.

use crate::domain::entities::comparison::FareComparison;
use crate::domain::entities::estimate::NormalizedEstimate;
use crate::domain::services::eligibility::EligibilityPolicy;
use crate::domain::services::estimator::LocalFareEstimator;
use crate::domain::services::surge::{SurgeModel, TimeOfDaySurge};
use crate::domain::value_objects::{Location, Route};
use crate::infrastructure::providers::traits::EstimateSource;
use std::sync::Arc;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

/// Engine for collecting and ordering fare estimates across providers.
///
/// Local estimators run in a fixed order so that equal totals keep a
/// predictable relative position in the sorted output.
#[derive(Debug)]
pub struct FareAggregator {
    ola: LocalFareEstimator,
    uber: LocalFareEstimator,
    external: Arc<dyn EstimateSource>,
    surge: Arc<dyn SurgeModel>,
    eligibility: EligibilityPolicy,
}

impl FareAggregator {
    /// Creates a new `FareAggregator`.
    ///
    /// # Arguments
    ///
    /// * `external` - The live estimate source to query alongside the
    ///   local estimators
    /// * `surge` - The surge model sampled once per local estimator
    /// * `eligibility` - The policy deciding which providers serve the
    ///   pickup area
    #[must_use]
    pub fn new(
        external: Arc<dyn EstimateSource>,
        surge: Arc<dyn SurgeModel>,
        eligibility: EligibilityPolicy,
    ) -> Self {
        Self {
            ola: LocalFareEstimator::ola(),
            uber: LocalFareEstimator::uber(),
            external,
            surge,
            eligibility,
        }
    }

    /// Creates a new engine with time-of-day surge and the default
    /// exclusion zones.
    #[must_use]
    pub fn with_defaults(external: Arc<dyn EstimateSource>) -> Self {
        Self::new(
            external,
            Arc::new(TimeOfDaySurge::new()),
            EligibilityPolicy::with_default_zones(),
        )
    }

    /// Compares fares across every eligible provider for one trip.
    ///
    /// Local estimation and the live fetch run concurrently; the call
    /// completes when both sides have. Providers excluded at the pickup
    /// are never queried.
    ///
    /// # Arguments
    ///
    /// * `route` - Measured distance and duration of the trip
    /// * `pickup` - Trip origin, also used for eligibility
    /// * `destination` - Trip destination, forwarded to the live source
    ///
    /// # Returns
    ///
    /// A [`FareComparison`] sorted by total fare, cheapest first.
    /// Possibly empty, never an error.
    pub async fn compare_fares(
        &self,
        route: &Route,
        pickup: &Location,
        destination: &Location,
    ) -> FareComparison {
        let comparison_id = Uuid::new_v4();
        let span = info_span!("compare_fares", %comparison_id);

        async {
            debug!(
                pickup = %pickup,
                destination = %destination,
                distance_km = route.distance_km(),
                "comparing fares"
            );

            let (mut estimates, live) = tokio::join!(
                async { self.local_estimates(route, pickup) },
                self.external_estimates(pickup, destination)
            );
            estimates.extend(live);

            let comparison = FareComparison::from_unsorted(estimates);
            debug!(
                count = comparison.len(),
                cheapest = comparison.cheapest().map(|e| e.fare().total()),
                "comparison complete"
            );
            comparison
        }
        .instrument(span)
        .await
    }

    /// Runs every eligible local estimator, one estimate each.
    ///
    /// Surge is sampled per estimator so that concurrent comparisons
    /// do not share a draw.
    fn local_estimates(&self, route: &Route, pickup: &Location) -> Vec<NormalizedEstimate> {
        let mut estimates = Vec::with_capacity(2);
        for estimator in [&self.ola, &self.uber] {
            let provider = estimator.provider();
            if !self.eligibility.is_eligible(provider, pickup) {
                debug!(%provider, "provider excluded at pickup, skipping");
                continue;
            }
            let surge = self.surge.current_multiplier();
            estimates.push(estimator.estimate(route, surge));
        }
        estimates
    }

    /// Fetches from the live source, unless it is excluded at the
    /// pickup. The source's own failures already fold to empty.
    async fn external_estimates(
        &self,
        pickup: &Location,
        destination: &Location,
    ) -> Vec<NormalizedEstimate> {
        let provider = self.external.provider();
        if !self.eligibility.is_eligible(provider, pickup) {
            debug!(%provider, "provider excluded at pickup, not fetching");
            return Vec::new();
        }
        self.external.fetch_estimates(pickup, destination).await
    }

    /// Returns the eligibility policy in force.
    #[must_use]
    pub fn eligibility(&self) -> &EligibilityPolicy {
        &self.eligibility
    }
}
