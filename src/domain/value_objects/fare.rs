//! # Fare Breakdown Value Object
//!
//! The per-estimate price decomposition shared by every provider.
//!
//! Locally modeled providers compute the breakdown from a rate card, so
//! [`FareBreakdown::from_components`] enforces the pricing identity
//! `total = (base + distance + time) * surge + platform_fee + taxes`.
//! The live provider reports a `total` of its own; for those records
//! [`FareBreakdown::from_reported_total`] back-derives the distance
//! portion and reports surge as neutral. That asymmetry is a per-provider
//! reporting variance, not a second pricing model.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::value_objects::fare::FareBreakdown;
//!
//! // 10 km / 20 min economy ride, no surge.
//! let fare = FareBreakdown::from_components(25.0, 88.0, 30.0, 1.0, 5.0, 0.05);
//! assert!((fare.total() - 155.15).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// One estimate's price decomposition.
///
/// All monetary fields are in the provider's currency unit (rupees for
/// every provider currently modeled). Values are request-scoped and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    base_fare: f64,
    distance_fare: f64,
    time_fare: f64,
    surge_multiplier: f64,
    platform_fee: f64,
    taxes: f64,
    total: f64,
}

impl FareBreakdown {
    /// Computes a breakdown from rate-card components.
    ///
    /// `taxes` and `total` are derived here so every locally modeled
    /// estimate satisfies the pricing identity:
    /// `total = (base + distance + time) * surge + platform_fee + taxes`
    /// with `taxes = (base + distance + time) * surge * tax_rate`.
    /// The platform fee is charged flat and untaxed.
    #[must_use]
    pub fn from_components(
        base_fare: f64,
        distance_fare: f64,
        time_fare: f64,
        surge_multiplier: f64,
        platform_fee: f64,
        tax_rate: f64,
    ) -> Self {
        let subtotal = (base_fare + distance_fare + time_fare) * surge_multiplier;
        let taxes = subtotal * tax_rate;
        let total = subtotal + platform_fee + taxes;
        Self {
            base_fare,
            distance_fare,
            time_fare,
            surge_multiplier,
            platform_fee,
            taxes,
            total,
        }
    }

    /// Builds a breakdown around a provider-reported total.
    ///
    /// The live provider quotes `total` directly without decomposing it,
    /// so the distance portion is derived as `total - base - platform_fee`
    /// (and may come out negative when the provider's own arithmetic does
    /// not add up), time is reported as zero, taxes as zero, and surge as
    /// neutral `1.0` since the provider exposes no surge factor.
    #[must_use]
    pub fn from_reported_total(total: f64, base_fare: f64, platform_fee: f64) -> Self {
        Self {
            base_fare,
            distance_fare: total - base_fare - platform_fee,
            time_fare: 0.0,
            surge_multiplier: 1.0,
            platform_fee,
            taxes: 0.0,
            total,
        }
    }

    /// Returns the flag-fall amount.
    #[inline]
    #[must_use]
    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Returns the distance-proportional amount (pre-surge).
    #[inline]
    #[must_use]
    pub fn distance_fare(&self) -> f64 {
        self.distance_fare
    }

    /// Returns the time-proportional amount (pre-surge).
    #[inline]
    #[must_use]
    pub fn time_fare(&self) -> f64 {
        self.time_fare
    }

    /// Returns the surge multiplier applied to the ride subtotal.
    #[inline]
    #[must_use]
    pub fn surge_multiplier(&self) -> f64 {
        self.surge_multiplier
    }

    /// Returns the flat platform/booking fee.
    #[inline]
    #[must_use]
    pub fn platform_fee(&self) -> f64 {
        self.platform_fee
    }

    /// Returns the tax amount.
    #[inline]
    #[must_use]
    pub fn taxes(&self) -> f64 {
        self.taxes
    }

    /// Returns the payable total.
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }
}
