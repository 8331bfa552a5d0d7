//! # Local Fare Estimators
//!
//! Deterministic fare-formula evaluators for providers whose pricing is
//! modeled in-process rather than quoted live.
//!
//! Each provider publishes a [`FareSchedule`]: two vehicle tiers, a
//! distance threshold that picks between them, a free-distance allowance,
//! and a tax rate. [`LocalFareEstimator::estimate`] selects the tier once
//! per call, evaluates the fare formula for that tier only, and always
//! returns a value — degenerate routes clamp to zero before any
//! arithmetic, so the output is never negative.
//!
//! These are simulated approximations of the providers' published rate
//! cards, not live quotes.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::services::estimator::LocalFareEstimator;
//! use fairfare::domain::value_objects::Route;
//!
//! let estimator = LocalFareEstimator::ola();
//! let route = Route::new(10_000.0, 1_200.0, "20 mins");
//! let estimate = estimator.estimate(&route, 1.0);
//!
//! assert_eq!(estimate.vehicle_class(), "Mini");
//! assert!((estimate.fare().total() - 155.15).abs() < 1e-9);
//! ```

use crate::domain::entities::estimate::NormalizedEstimate;
use crate::domain::value_objects::{FareBreakdown, Provider, Route, VehicleTier};

/// Placeholder in a schedule's deep-link template, replaced by the
/// lowercased tier label.
const TIER_PLACEHOLDER: &str = "{tier}";

/// Per-tier pricing constants.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRates {
    label: String,
    base_fare: f64,
    per_km: f64,
    per_min: f64,
    platform_fee: f64,
}

impl TierRates {
    /// Creates a tier's rate card.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        base_fare: f64,
        per_km: f64,
        per_min: f64,
        platform_fee: f64,
    ) -> Self {
        Self {
            label: label.into(),
            base_fare,
            per_km,
            per_min,
            platform_fee,
        }
    }

    /// Returns the vehicle class label (e.g. "Mini").
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the flag-fall amount.
    #[inline]
    #[must_use]
    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Returns the per-kilometre rate.
    #[inline]
    #[must_use]
    pub fn per_km(&self) -> f64 {
        self.per_km
    }

    /// Returns the per-minute rate.
    #[inline]
    #[must_use]
    pub fn per_min(&self) -> f64 {
        self.per_min
    }

    /// Returns the flat platform fee.
    #[inline]
    #[must_use]
    pub fn platform_fee(&self) -> f64 {
        self.platform_fee
    }
}

/// A locally modeled provider's published pricing table.
///
/// The schedule owns everything the estimator needs: both tier rate
/// cards, the threshold that selects between them, the free-distance
/// allowance shared by both tiers, the tax rate, the marketing feature
/// list, and the booking-link template.
#[derive(Debug, Clone, PartialEq)]
pub struct FareSchedule {
    provider: Provider,
    /// Distances strictly greater than this (km) book the premium tier.
    tier_threshold_km: f64,
    /// Kilometres not charged at the per-km rate.
    free_km: f64,
    tax_rate: f64,
    economy: TierRates,
    premium: TierRates,
    features: Vec<String>,
    deep_link_template: String,
}

impl FareSchedule {
    /// Creates a schedule from its parts.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider: Provider,
        tier_threshold_km: f64,
        free_km: f64,
        tax_rate: f64,
        economy: TierRates,
        premium: TierRates,
        features: Vec<String>,
        deep_link_template: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            tier_threshold_km,
            free_km,
            tax_rate,
            economy,
            premium,
            features,
            deep_link_template: deep_link_template.into(),
        }
    }

    /// Ola's modeled rate card: Mini below 10 km, Prime above, first
    /// 2 km free, 5% GST.
    #[must_use]
    pub fn ola() -> Self {
        Self::new(
            Provider::Ola,
            10.0,
            2.0,
            0.05,
            TierRates::new("Mini", 25.0, 11.0, 1.5, 5.0),
            TierRates::new("Prime", 40.0, 15.0, 2.0, 8.0),
            vec!["AC".into(), "Music".into(), "GPS Tracking".into()],
            "https://book.olacabs.com/?serviceType={tier}&utm_source=fairfare",
        )
    }

    /// Uber's modeled rate card: Go below 8 km, Premier above, no free
    /// distance, 5% GST.
    #[must_use]
    pub fn uber() -> Self {
        Self::new(
            Provider::Uber,
            8.0,
            0.0,
            0.05,
            TierRates::new("Go", 30.0, 12.0, 1.8, 6.0),
            TierRates::new("Premier", 50.0, 18.0, 2.5, 10.0),
            vec!["AC".into(), "Wi-Fi".into(), "Uber Safety".into()],
            "https://m.uber.com/looking?utm_source=fairfare",
        )
    }

    /// Returns the provider this schedule belongs to.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the premium-tier distance threshold in kilometres.
    #[inline]
    #[must_use]
    pub fn tier_threshold_km(&self) -> f64 {
        self.tier_threshold_km
    }

    /// Returns the free-distance allowance in kilometres.
    #[inline]
    #[must_use]
    pub fn free_km(&self) -> f64 {
        self.free_km
    }

    /// Returns the tax rate applied to the surged subtotal.
    #[inline]
    #[must_use]
    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Returns the marketing feature list.
    #[inline]
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Selects the tier for a trip distance.
    ///
    /// Strictly greater than the threshold books premium; the threshold
    /// itself stays economy.
    #[must_use]
    pub fn tier_for(&self, distance_km: f64) -> VehicleTier {
        if distance_km > self.tier_threshold_km {
            VehicleTier::Premium
        } else {
            VehicleTier::Economy
        }
    }

    /// Returns the rate card for a tier.
    #[must_use]
    pub fn rates(&self, tier: VehicleTier) -> &TierRates {
        match tier {
            VehicleTier::Economy => &self.economy,
            VehicleTier::Premium => &self.premium,
        }
    }

    /// Renders the booking link for a tier by substituting the
    /// lowercased tier label into the template.
    #[must_use]
    pub fn deep_link_for(&self, tier: VehicleTier) -> String {
        self.deep_link_template
            .replace(TIER_PLACEHOLDER, &self.rates(tier).label().to_lowercase())
    }
}

/// Fare-formula evaluator over one [`FareSchedule`].
///
/// `estimate` is synchronous, pure apart from reading its inputs, and
/// total: it never fails and never yields.
#[derive(Debug, Clone)]
pub struct LocalFareEstimator {
    schedule: FareSchedule,
}

impl LocalFareEstimator {
    /// Creates an estimator over the given schedule.
    #[must_use]
    pub fn new(schedule: FareSchedule) -> Self {
        Self { schedule }
    }

    /// Creates the Ola estimator.
    #[must_use]
    pub fn ola() -> Self {
        Self::new(FareSchedule::ola())
    }

    /// Creates the Uber estimator.
    #[must_use]
    pub fn uber() -> Self {
        Self::new(FareSchedule::uber())
    }

    /// Returns the provider this estimator models.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.schedule.provider()
    }

    /// Returns the underlying schedule.
    #[inline]
    #[must_use]
    pub fn schedule(&self) -> &FareSchedule {
        &self.schedule
    }

    /// Evaluates the fare for one route at the given surge multiplier.
    ///
    /// The tier is selected once, from the clamped distance, and the
    /// whole breakdown uses that tier's constants:
    ///
    /// - `distance_fare = max(0, km - free_km) * per_km`
    /// - `time_fare = min * per_min`
    /// - `total = (base + distance + time) * surge + fee + taxes`
    #[must_use]
    pub fn estimate(&self, route: &Route, surge: f64) -> NormalizedEstimate {
        let distance_km = route.distance_km();
        let duration_min = route.duration_min();

        let tier = self.schedule.tier_for(distance_km);
        let rates = self.schedule.rates(tier);

        let distance_fare = (distance_km - self.schedule.free_km()).max(0.0) * rates.per_km();
        let time_fare = duration_min * rates.per_min();
        let fare = FareBreakdown::from_components(
            rates.base_fare(),
            distance_fare,
            time_fare,
            surge,
            rates.platform_fee(),
            self.schedule.tax_rate(),
        );

        NormalizedEstimate::builder(
            self.schedule.provider(),
            rates.label(),
            fare,
            route.duration_text(),
        )
        .features(self.schedule.features().to_vec())
        .deep_link(self.schedule.deep_link_for(tier))
        .build()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn route(meters: f64, seconds: f64) -> Route {
        Route::new(meters, seconds, "20 mins")
    }

    mod ola {
        use super::*;

        #[test]
        fn concrete_economy_scenario() {
            // 10 km / 20 min at surge 1.0: the canonical worked example.
            let estimate = LocalFareEstimator::ola().estimate(&route(10_000.0, 1_200.0), 1.0);

            assert_eq!(estimate.provider_id(), Provider::Ola);
            assert_eq!(estimate.vehicle_class(), "Mini");
            let fare = estimate.fare();
            assert!((fare.base_fare() - 25.0).abs() < f64::EPSILON);
            assert!((fare.distance_fare() - 88.0).abs() < f64::EPSILON);
            assert!((fare.time_fare() - 30.0).abs() < f64::EPSILON);
            assert!((fare.surge_multiplier() - 1.0).abs() < f64::EPSILON);
            assert!((fare.platform_fee() - 5.0).abs() < f64::EPSILON);
            assert!((fare.taxes() - 7.15).abs() < 1e-9);
            assert!((fare.total() - 155.15).abs() < 1e-9);
        }

        #[test]
        fn threshold_distance_stays_economy() {
            let estimate = LocalFareEstimator::ola().estimate(&route(10_000.0, 600.0), 1.0);
            assert_eq!(estimate.vehicle_class(), "Mini");
        }

        #[test]
        fn beyond_threshold_books_prime() {
            let estimate = LocalFareEstimator::ola().estimate(&route(12_000.0, 1_800.0), 1.0);
            assert_eq!(estimate.vehicle_class(), "Prime");
            // Prime rates with the 2 km allowance: (12 - 2) * 15.
            assert!((estimate.fare().distance_fare() - 150.0).abs() < f64::EPSILON);
            assert!((estimate.fare().base_fare() - 40.0).abs() < f64::EPSILON);
        }

        #[test]
        fn free_distance_is_not_charged() {
            // 1.5 km is inside the 2 km allowance.
            let estimate = LocalFareEstimator::ola().estimate(&route(1_500.0, 300.0), 1.0);
            assert!(estimate.fare().distance_fare().abs() < f64::EPSILON);
        }

        #[test]
        fn deep_link_carries_the_selected_tier() {
            let estimator = LocalFareEstimator::ola();
            let mini = estimator.estimate(&route(5_000.0, 600.0), 1.0);
            let prime = estimator.estimate(&route(15_000.0, 1_800.0), 1.0);
            assert_eq!(
                mini.deep_link().unwrap(),
                "https://book.olacabs.com/?serviceType=mini&utm_source=fairfare"
            );
            assert_eq!(
                prime.deep_link().unwrap(),
                "https://book.olacabs.com/?serviceType=prime&utm_source=fairfare"
            );
        }

        #[test]
        fn carries_features_and_route_eta() {
            let estimate = LocalFareEstimator::ola().estimate(&route(5_000.0, 600.0), 1.0);
            assert_eq!(estimate.features(), ["AC", "Music", "GPS Tracking"]);
            assert_eq!(estimate.eta_text(), "20 mins");
        }
    }

    mod uber {
        use super::*;

        #[test]
        fn charges_from_the_first_kilometre() {
            // No free allowance: 5 km * 12.
            let estimate = LocalFareEstimator::uber().estimate(&route(5_000.0, 600.0), 1.0);
            assert_eq!(estimate.vehicle_class(), "Go");
            assert!((estimate.fare().distance_fare() - 60.0).abs() < f64::EPSILON);
        }

        #[test]
        fn threshold_is_eight_kilometres() {
            let estimator = LocalFareEstimator::uber();
            let at = estimator.estimate(&route(8_000.0, 900.0), 1.0);
            let beyond = estimator.estimate(&route(8_001.0, 900.0), 1.0);
            assert_eq!(at.vehicle_class(), "Go");
            assert_eq!(beyond.vehicle_class(), "Premier");
        }

        #[test]
        fn premier_uses_premier_rates() {
            let estimate = LocalFareEstimator::uber().estimate(&route(10_000.0, 1_200.0), 1.0);
            let fare = estimate.fare();
            assert!((fare.base_fare() - 50.0).abs() < f64::EPSILON);
            assert!((fare.distance_fare() - 180.0).abs() < f64::EPSILON);
            assert!((fare.time_fare() - 50.0).abs() < f64::EPSILON);
            assert!((fare.platform_fee() - 10.0).abs() < f64::EPSILON);
        }

        #[test]
        fn deep_link_has_no_tier_parameter() {
            let estimate = LocalFareEstimator::uber().estimate(&route(5_000.0, 600.0), 1.0);
            assert_eq!(
                estimate.deep_link().unwrap(),
                "https://m.uber.com/looking?utm_source=fairfare"
            );
        }
    }

    mod clamping {
        use super::*;

        #[test]
        fn negative_route_degrades_to_minimum_fare() {
            let estimate = LocalFareEstimator::ola().estimate(&route(-5_000.0, -600.0), 1.0);
            let fare = estimate.fare();
            assert!(fare.distance_fare().abs() < f64::EPSILON);
            assert!(fare.time_fare().abs() < f64::EPSILON);
            // base * surge + fee + tax on base.
            assert!((fare.total() - (25.0 + 5.0 + 25.0 * 0.05)).abs() < 1e-9);
        }

        #[test]
        fn nan_route_degrades_to_minimum_fare() {
            let estimate = LocalFareEstimator::uber().estimate(&route(f64::NAN, f64::NAN), 1.0);
            assert!(estimate.fare().total().is_finite());
            assert!(estimate.fare().total() >= 0.0);
        }
    }

    #[test]
    fn surge_scales_everything_but_the_fee() {
        let estimator = LocalFareEstimator::ola();
        let calm = estimator.estimate(&route(10_000.0, 1_200.0), 1.0);
        let surged = estimator.estimate(&route(10_000.0, 1_200.0), 1.5);
        let calm_ride = calm.fare().total() - calm.fare().platform_fee();
        let surged_ride = surged.fare().total() - surged.fare().platform_fee();
        assert!((surged_ride - calm_ride * 1.5).abs() < 1e-9);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn estimators() -> [LocalFareEstimator; 2] {
            [LocalFareEstimator::ola(), LocalFareEstimator::uber()]
        }

        proptest! {
            #[test]
            fn totals_follow_the_published_formula(
                meters in 0.0f64..200_000.0,
                seconds in 0.0f64..14_400.0,
                surge in 1.0f64..2.0,
            ) {
                let route = Route::new(meters, seconds, "eta");
                for estimator in estimators() {
                    let estimate = estimator.estimate(&route, surge);
                    let schedule = estimator.schedule();
                    let rates = schedule.rates(schedule.tier_for(route.distance_km()));

                    let distance_fare =
                        (route.distance_km() - schedule.free_km()).max(0.0) * rates.per_km();
                    let time_fare = route.duration_min() * rates.per_min();
                    let subtotal = (rates.base_fare() + distance_fare + time_fare) * surge;
                    let expected = subtotal + rates.platform_fee() + subtotal * schedule.tax_rate();

                    // Identical operations in identical order, so no drift.
                    prop_assert_eq!(estimate.fare().total(), expected);
                }
            }

            #[test]
            fn totals_are_never_negative(
                meters in -100_000.0f64..200_000.0,
                seconds in -7_200.0f64..14_400.0,
                surge in 1.0f64..2.0,
            ) {
                let route = Route::new(meters, seconds, "eta");
                for estimator in estimators() {
                    let estimate = estimator.estimate(&route, surge);
                    let fare = estimate.fare();
                    prop_assert!(fare.total() >= 0.0);
                    prop_assert!(fare.distance_fare() >= 0.0);
                    prop_assert!(fare.time_fare() >= 0.0);
                    prop_assert!(fare.taxes() >= 0.0);
                }
            }

            #[test]
            fn tier_selection_is_monotonic(
                km in 0.0f64..40.0,
                bump in 0.0f64..40.0,
            ) {
                for estimator in estimators() {
                    let schedule = estimator.schedule();
                    if schedule.tier_for(km) == VehicleTier::Premium {
                        // Once premium, further distance never drops back.
                        prop_assert_eq!(schedule.tier_for(km + bump), VehicleTier::Premium);
                    }
                }
            }
        }
    }
}
