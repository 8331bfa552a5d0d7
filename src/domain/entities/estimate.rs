//! # Normalized Estimate Entity
//!
//! The common schema every provider's output is coerced into.
//!
//! One [`NormalizedEstimate`] is one bookable option: a provider, a
//! vehicle class, a [`FareBreakdown`], and the presentation fields the
//! comparison surface needs. Estimates are created fresh per comparison,
//! never mutated, and owned by the caller once returned.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::entities::estimate::NormalizedEstimate;
//! use fairfare::domain::value_objects::{FareBreakdown, Provider};
//!
//! let estimate = NormalizedEstimate::builder(
//!     Provider::Ola,
//!     "Mini",
//!     FareBreakdown::from_components(25.0, 88.0, 30.0, 1.0, 5.0, 0.05),
//!     "20 mins",
//! )
//! .features(vec!["AC".into(), "GPS Tracking".into()])
//! .build();
//!
//! assert_eq!(estimate.provider_name(), "Ola");
//! assert!(estimate.booking_ref().is_none());
//! ```

use crate::domain::value_objects::{FareBreakdown, Provider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-side handle for booking a live estimate.
///
/// Only estimates fetched from the live provider carry one; the booking
/// deep link is keyed by both ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRef {
    /// The provider's id for this specific estimate.
    estimate_id: String,
    /// The search session that produced the estimate.
    search_id: String,
}

impl BookingRef {
    /// Creates a booking reference.
    #[must_use]
    pub fn new(estimate_id: impl Into<String>, search_id: impl Into<String>) -> Self {
        Self {
            estimate_id: estimate_id.into(),
            search_id: search_id.into(),
        }
    }

    /// Returns the provider's estimate id.
    #[inline]
    #[must_use]
    pub fn estimate_id(&self) -> &str {
        &self.estimate_id
    }

    /// Returns the provider's search id.
    #[inline]
    #[must_use]
    pub fn search_id(&self) -> &str {
        &self.search_id
    }
}

/// One bookable fare option in the provider-agnostic schema.
///
/// # Invariants
///
/// - `provider_name` always matches `provider_id.display_name()`
/// - `booking_ref`/`deep_link` are set only for live-provider estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEstimate {
    /// Which provider produced this estimate.
    provider_id: Provider,
    /// Human-readable provider name.
    provider_name: String,
    /// Provider's vehicle class label (e.g. "Mini", "Premier", "AUTO_RICKSHAW").
    vehicle_class: String,
    /// The price decomposition.
    fare: FareBreakdown,
    /// Human-readable arrival/travel time.
    eta_text: String,
    /// Marketing feature list, in display order.
    features: Vec<String>,
    /// Live-provider booking handle, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    booking_ref: Option<BookingRef>,
    /// Native-app booking link, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deep_link: Option<String>,
}

impl NormalizedEstimate {
    /// Returns a builder for constructing an estimate.
    #[must_use]
    pub fn builder(
        provider_id: Provider,
        vehicle_class: impl Into<String>,
        fare: FareBreakdown,
        eta_text: impl Into<String>,
    ) -> EstimateBuilder {
        EstimateBuilder::new(provider_id, vehicle_class, fare, eta_text)
    }

    /// Returns the provider tag.
    #[inline]
    #[must_use]
    pub fn provider_id(&self) -> Provider {
        self.provider_id
    }

    /// Returns the human-readable provider name.
    #[inline]
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns the vehicle class label.
    #[inline]
    #[must_use]
    pub fn vehicle_class(&self) -> &str {
        &self.vehicle_class
    }

    /// Returns the fare breakdown.
    #[inline]
    #[must_use]
    pub fn fare(&self) -> &FareBreakdown {
        &self.fare
    }

    /// Returns the human-readable arrival/travel time.
    #[inline]
    #[must_use]
    pub fn eta_text(&self) -> &str {
        &self.eta_text
    }

    /// Returns the feature list in display order.
    #[inline]
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Returns the booking reference, if this is a live-provider estimate.
    #[inline]
    #[must_use]
    pub fn booking_ref(&self) -> Option<&BookingRef> {
        self.booking_ref.as_ref()
    }

    /// Returns the native-app deep link, if any.
    #[inline]
    #[must_use]
    pub fn deep_link(&self) -> Option<&str> {
        self.deep_link.as_deref()
    }
}

impl fmt::Display for NormalizedEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {:.2}",
            self.provider_name,
            self.vehicle_class,
            self.fare.total()
        )
    }
}

/// Builder for constructing [`NormalizedEstimate`] instances.
///
/// Construction is infallible; the builder only exists to keep the
/// optional live-provider fields out of the required signature.
///
/// # Examples
///
/// ```
/// use fairfare::domain::entities::estimate::{BookingRef, EstimateBuilder};
/// use fairfare::domain::value_objects::{FareBreakdown, Provider};
///
/// let estimate = EstimateBuilder::new(
///     Provider::NammaYatri,
///     "AUTO_RICKSHAW",
///     FareBreakdown::from_reported_total(85.0, 30.0, 10.0),
///     "3 min",
/// )
/// .booking_ref(BookingRef::new("est-1", "srch-1"))
/// .deep_link("nammayatri://book?estimateId=est-1&searchId=srch-1")
/// .build();
///
/// assert!(estimate.deep_link().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct EstimateBuilder {
    provider_id: Provider,
    vehicle_class: String,
    fare: FareBreakdown,
    eta_text: String,
    features: Vec<String>,
    booking_ref: Option<BookingRef>,
    deep_link: Option<String>,
}

impl EstimateBuilder {
    /// Creates a new builder with the required fields.
    #[must_use]
    pub fn new(
        provider_id: Provider,
        vehicle_class: impl Into<String>,
        fare: FareBreakdown,
        eta_text: impl Into<String>,
    ) -> Self {
        Self {
            provider_id,
            vehicle_class: vehicle_class.into(),
            fare,
            eta_text: eta_text.into(),
            features: Vec::new(),
            booking_ref: None,
            deep_link: None,
        }
    }

    /// Sets the feature list.
    #[must_use]
    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Sets the live-provider booking reference.
    #[must_use]
    pub fn booking_ref(mut self, booking_ref: BookingRef) -> Self {
        self.booking_ref = Some(booking_ref);
        self
    }

    /// Sets the native-app deep link.
    #[must_use]
    pub fn deep_link(mut self, deep_link: impl Into<String>) -> Self {
        self.deep_link = Some(deep_link.into());
        self
    }

    /// Builds the estimate.
    #[must_use]
    pub fn build(self) -> NormalizedEstimate {
        NormalizedEstimate {
            provider_id: self.provider_id,
            provider_name: self.provider_id.display_name().to_string(),
            vehicle_class: self.vehicle_class,
            fare: self.fare,
            eta_text: self.eta_text,
            features: self.features,
            booking_ref: self.booking_ref,
            deep_link: self.deep_link,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn local_fare() -> FareBreakdown {
        FareBreakdown::from_components(25.0, 88.0, 30.0, 1.0, 5.0, 0.05)
    }

    mod construction {
        use super::*;

        #[test]
        fn builder_fills_required_fields() {
            let estimate =
                NormalizedEstimate::builder(Provider::Ola, "Mini", local_fare(), "20 mins")
                    .build();
            assert_eq!(estimate.provider_id(), Provider::Ola);
            assert_eq!(estimate.provider_name(), "Ola");
            assert_eq!(estimate.vehicle_class(), "Mini");
            assert_eq!(estimate.eta_text(), "20 mins");
            assert!(estimate.features().is_empty());
            assert!(estimate.booking_ref().is_none());
            assert!(estimate.deep_link().is_none());
        }

        #[test]
        fn provider_name_follows_the_tag() {
            let estimate = NormalizedEstimate::builder(
                Provider::NammaYatri,
                "AUTO_RICKSHAW",
                local_fare(),
                "3 min",
            )
            .build();
            assert_eq!(estimate.provider_name(), "Namma Yatri");
        }

        #[test]
        fn builder_sets_optional_fields() {
            let estimate =
                NormalizedEstimate::builder(Provider::NammaYatri, "CAB", local_fare(), "5 min")
                    .features(vec!["No Surge Pricing".into()])
                    .booking_ref(BookingRef::new("est-9", "srch-3"))
                    .deep_link("nammayatri://book?estimateId=est-9&searchId=srch-3")
                    .build();
            let booking_ref = estimate.booking_ref().unwrap();
            assert_eq!(booking_ref.estimate_id(), "est-9");
            assert_eq!(booking_ref.search_id(), "srch-3");
            assert_eq!(
                estimate.deep_link().unwrap(),
                "nammayatri://book?estimateId=est-9&searchId=srch-3"
            );
            assert_eq!(estimate.features(), ["No Surge Pricing".to_string()]);
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn uses_camel_case_wire_names() {
            let estimate =
                NormalizedEstimate::builder(Provider::Uber, "Go", local_fare(), "20 mins").build();
            let json = serde_json::to_value(&estimate).unwrap();
            assert_eq!(json["providerId"], "uber");
            assert_eq!(json["providerName"], "Uber");
            assert_eq!(json["vehicleClass"], "Go");
            assert!(json.get("etaText").is_some());
            assert!(json["fare"].get("baseFare").is_some());
        }

        #[test]
        fn omits_absent_optionals() {
            let estimate =
                NormalizedEstimate::builder(Provider::Ola, "Prime", local_fare(), "20 mins")
                    .build();
            let json = serde_json::to_value(&estimate).unwrap();
            assert!(json.get("bookingRef").is_none());
            assert!(json.get("deepLink").is_none());
        }

        #[test]
        fn serializes_booking_ref_in_camel_case() {
            let estimate =
                NormalizedEstimate::builder(Provider::NammaYatri, "BIKE", local_fare(), "2 min")
                    .booking_ref(BookingRef::new("e", "s"))
                    .build();
            let json = serde_json::to_value(&estimate).unwrap();
            assert_eq!(json["bookingRef"]["estimateId"], "e");
            assert_eq!(json["bookingRef"]["searchId"], "s");
        }

        #[test]
        fn roundtrips() {
            let estimate =
                NormalizedEstimate::builder(Provider::NammaYatri, "CAB", local_fare(), "4 min")
                    .features(vec!["Open Source".into()])
                    .booking_ref(BookingRef::new("e", "s"))
                    .deep_link("nammayatri://book?estimateId=e&searchId=s")
                    .build();
            let json = serde_json::to_string(&estimate).unwrap();
            let back: NormalizedEstimate = serde_json::from_str(&json).unwrap();
            assert_eq!(estimate, back);
        }
    }

    #[test]
    fn display_shows_provider_class_and_total() {
        let estimate =
            NormalizedEstimate::builder(Provider::Ola, "Mini", local_fare(), "20 mins").build();
        let display = estimate.to_string();
        assert!(display.starts_with("Ola Mini @ "));
        assert!(display.contains("155.15"));
    }
}
