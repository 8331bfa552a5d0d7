//! # Namma Yatri Adapter
//!
//! Live estimate source speaking Namma Yatri's two-phase protocol:
//!
//! 1. `POST {base_url}/rideSearch` with origin/destination; the response
//!    carries a `searchId`.
//! 2. A fixed settle delay while the provider computes estimates. This
//!    is a single wait on the calling path, not a retry loop.
//! 3. `GET {base_url}/estimates?searchId=...` returning raw estimate
//!    records, each normalized into the common schema.
//!
//! Every failure — transport, status, unusable payload — folds into an
//! empty contribution at the [`EstimateSource`] boundary. An empty
//! estimate list is already a valid response, so callers see one shape
//! either way. There are no retries.

use crate::domain::entities::estimate::{BookingRef, NormalizedEstimate};
use crate::domain::value_objects::{FareBreakdown, Location, Provider};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::EstimateSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://nammayatri.in/api";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Default wait between the search and estimates phases.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;

/// Marketing feature list attached to every Namma Yatri estimate.
const FEATURES: [&str; 4] = [
    "Open Source",
    "No Surge Pricing",
    "Driver Friendly",
    "Transparent Pricing",
];

/// Vehicle variants assumed when the provider cannot list its own.
const DEFAULT_VEHICLE_TYPES: [&str; 3] = ["AUTO_RICKSHAW", "CAB", "BIKE"];

/// GPS point in the provider's wire format (`lon`, not `lng`).
#[derive(Debug, Serialize)]
struct Gps {
    lat: f64,
    lon: f64,
}

/// Address wrapper in the provider's wire format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchAddress {
    full_address: String,
}

/// One endpoint of the searched trip.
#[derive(Debug, Serialize)]
struct SearchPlace {
    gps: Gps,
    address: SearchAddress,
}

impl SearchPlace {
    fn from_location(location: &Location) -> Self {
        Self {
            gps: Gps {
                lat: location.lat(),
                lon: location.lng(),
            },
            address: SearchAddress {
                full_address: location.address().to_string(),
            },
        }
    }
}

/// Body of the search request.
#[derive(Debug, Serialize)]
struct SearchRequest {
    contents: SearchContents,
}

#[derive(Debug, Serialize)]
struct SearchContents {
    origin: SearchPlace,
    destination: SearchPlace,
}

impl SearchRequest {
    fn new(pickup: &Location, destination: &Location) -> Self {
        Self {
            contents: SearchContents {
                origin: SearchPlace::from_location(pickup),
                destination: SearchPlace::from_location(destination),
            },
        }
    }
}

/// Response of the search phase.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    search_id: Option<String>,
}

impl SearchResponse {
    /// Extracts a usable search id.
    ///
    /// A missing or empty id means the provider did not accept the
    /// search, which is a provider-unavailable condition.
    fn into_search_id(self) -> ProviderResult<String> {
        match self.search_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ProviderError::MissingSearchId),
        }
    }
}

/// Response of the estimates phase.
///
/// A payload without the `estimates` key counts as zero estimates, not
/// as a malformed response.
#[derive(Debug, Deserialize)]
struct EstimatesResponse {
    #[serde(default)]
    estimates: Vec<RawEstimate>,
}

/// One estimate record as the provider reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEstimate {
    estimate_id: String,
    vehicle_variant: String,
    total_fare: f64,
    base_fare: f64,
    pickup_charges: f64,
    waiting_charges: f64,
    ride_distance: f64,
    ride_duration: f64,
    night_shift_charge: f64,
    currency: String,
}

/// Response of the vehicle types endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleTypesResponse {
    vehicle_types: Option<Vec<String>>,
}

/// Live [`EstimateSource`] for Namma Yatri.
///
/// Stateless between calls: each `fetch_estimates` runs the protocol
/// from scratch, so an abandoned call cannot poison a later one.
#[derive(Debug, Clone)]
pub struct NammaYatriAdapter {
    http: HttpClient,
    base_url: String,
    settle_delay: Duration,
}

impl NammaYatriAdapter {
    /// Creates an adapter against the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the HTTP client cannot
    /// be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout_ms: u64,
        settle_delay: Duration,
    ) -> ProviderResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url,
            settle_delay,
        })
    }

    /// Creates an adapter against the production endpoint with default
    /// timeout and settle delay.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the HTTP client cannot
    /// be constructed.
    pub fn with_defaults() -> ProviderResult<Self> {
        Self::new(
            DEFAULT_BASE_URL,
            DEFAULT_TIMEOUT_MS,
            Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        )
    }

    /// Returns the configured endpoint.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the wait between the search and estimates phases.
    #[inline]
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Lists the provider's vehicle variants.
    ///
    /// Falls back to a static default list on any failure, mirroring
    /// the estimates fold: callers never see an error from this path.
    pub async fn vehicle_types(&self) -> Vec<String> {
        let url = format!("{}/vehicleTypes", self.base_url);
        match self.http.get::<VehicleTypesResponse>(&url).await {
            Ok(response) => response
                .vehicle_types
                .unwrap_or_else(Self::default_vehicle_types),
            Err(e) => {
                warn!(error = %e, "vehicle types unavailable, using defaults");
                Self::default_vehicle_types()
            }
        }
    }

    fn default_vehicle_types() -> Vec<String> {
        DEFAULT_VEHICLE_TYPES.iter().map(ToString::to_string).collect()
    }

    /// Runs both protocol phases, returning the normalized batch.
    async fn run_protocol(
        &self,
        pickup: &Location,
        destination: &Location,
    ) -> ProviderResult<Vec<NormalizedEstimate>> {
        let search_id = self.search(pickup, destination).await?;
        debug!(search_id = %search_id, "search accepted, settling");

        tokio::time::sleep(self.settle_delay).await;

        let raw = self.poll_estimates(&search_id).await?;
        debug!(search_id = %search_id, count = raw.len(), "estimates received");

        Ok(raw
            .into_iter()
            .map(|estimate| Self::normalize(estimate, &search_id))
            .collect())
    }

    /// Search phase: submits the trip and extracts the search id.
    async fn search(&self, pickup: &Location, destination: &Location) -> ProviderResult<String> {
        let url = format!("{}/rideSearch", self.base_url);
        let body = SearchRequest::new(pickup, destination);
        let response: SearchResponse = self.http.post(&url, &body).await?;
        response.into_search_id()
    }

    /// Estimates phase: polls once for the search's results.
    async fn poll_estimates(&self, search_id: &str) -> ProviderResult<Vec<RawEstimate>> {
        let url = format!("{}/estimates", self.base_url);
        let response: EstimatesResponse = self
            .http
            .get_with_params(&url, &[("searchId", search_id)])
            .await?;
        Ok(response.estimates)
    }

    /// Maps one raw record into the common schema.
    ///
    /// The provider quotes a total without decomposing it, so the fare
    /// is built around the reported total: pickup charges become the
    /// platform fee and the distance portion is derived. Surge is
    /// reported neutral because this provider has none.
    fn normalize(raw: RawEstimate, search_id: &str) -> NormalizedEstimate {
        debug!(
            estimate_id = %raw.estimate_id,
            variant = %raw.vehicle_variant,
            total = raw.total_fare,
            distance_m = raw.ride_distance,
            waiting_charges = raw.waiting_charges,
            night_shift_charge = raw.night_shift_charge,
            currency = %raw.currency,
            "normalizing live estimate"
        );

        let fare =
            FareBreakdown::from_reported_total(raw.total_fare, raw.base_fare, raw.pickup_charges);
        let eta_minutes = (raw.ride_duration / 60.0).ceil().max(0.0) as i64;
        let deep_link = format!(
            "nammayatri://book?estimateId={}&searchId={}",
            raw.estimate_id, search_id
        );

        NormalizedEstimate::builder(
            Provider::NammaYatri,
            raw.vehicle_variant,
            fare,
            format!("{eta_minutes} min"),
        )
        .features(FEATURES.iter().map(ToString::to_string).collect())
        .booking_ref(BookingRef::new(raw.estimate_id, search_id))
        .deep_link(deep_link)
        .build()
    }
}

#[async_trait]
impl EstimateSource for NammaYatriAdapter {
    fn provider(&self) -> Provider {
        Provider::NammaYatri
    }

    async fn fetch_estimates(
        &self,
        pickup: &Location,
        destination: &Location,
    ) -> Vec<NormalizedEstimate> {
        match self.run_protocol(pickup, destination).await {
            Ok(estimates) => estimates,
            Err(e) => {
                warn!(
                    provider = %Provider::NammaYatri,
                    error = %e,
                    "live estimates unavailable, contributing none"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw_estimate() -> RawEstimate {
        RawEstimate {
            estimate_id: "est-42".to_string(),
            vehicle_variant: "AUTO_RICKSHAW".to_string(),
            total_fare: 85.0,
            base_fare: 30.0,
            pickup_charges: 10.0,
            waiting_charges: 1.5,
            ride_distance: 5_200.0,
            ride_duration: 980.0,
            night_shift_charge: 0.0,
            currency: "INR".to_string(),
        }
    }

    mod wire_format {
        use super::*;
        use crate::domain::value_objects::Location;

        #[test]
        fn search_request_nests_gps_and_address() {
            let pickup = Location::new("MG Road, Bengaluru", 12.9757, 77.6050, "a");
            let destination = Location::new("Airport Road, Bengaluru", 13.1986, 77.7066, "b");
            let body = serde_json::to_value(SearchRequest::new(&pickup, &destination)).unwrap();

            assert!((body["contents"]["origin"]["gps"]["lat"].as_f64().unwrap() - 12.9757).abs()
                < f64::EPSILON);
            // The provider spells longitude "lon".
            assert!((body["contents"]["origin"]["gps"]["lon"].as_f64().unwrap() - 77.6050).abs()
                < f64::EPSILON);
            assert_eq!(
                body["contents"]["destination"]["address"]["fullAddress"],
                "Airport Road, Bengaluru"
            );
        }

        #[test]
        fn estimates_payload_without_key_is_empty() {
            let response: EstimatesResponse = serde_json::from_str("{}").unwrap();
            assert!(response.estimates.is_empty());
        }

        #[test]
        fn raw_estimate_parses_camel_case() {
            let json = r#"{
                "estimateId": "e1",
                "vehicleVariant": "CAB",
                "totalFare": 185.0,
                "baseFare": 50.0,
                "pickupCharges": 10.0,
                "waitingCharges": 2.0,
                "rideDistance": 9000.0,
                "rideDuration": 1240.0,
                "nightShiftCharge": 0.0,
                "currency": "INR"
            }"#;
            let raw: RawEstimate = serde_json::from_str(json).unwrap();
            assert_eq!(raw.estimate_id, "e1");
            assert_eq!(raw.vehicle_variant, "CAB");
            assert!((raw.total_fare - 185.0).abs() < f64::EPSILON);
        }
    }

    mod search_id {
        use super::*;

        #[test]
        fn present_id_is_accepted() {
            let response = SearchResponse {
                search_id: Some("srch-1".to_string()),
            };
            assert_eq!(response.into_search_id().unwrap(), "srch-1");
        }

        #[test]
        fn missing_id_is_rejected() {
            let response: SearchResponse = serde_json::from_str("{}").unwrap();
            assert!(matches!(
                response.into_search_id(),
                Err(ProviderError::MissingSearchId)
            ));
        }

        #[test]
        fn empty_id_is_rejected() {
            let response = SearchResponse {
                search_id: Some(String::new()),
            };
            assert!(matches!(
                response.into_search_id(),
                Err(ProviderError::MissingSearchId)
            ));
        }
    }

    mod normalization {
        use super::*;

        #[test]
        fn fare_is_built_around_the_reported_total() {
            let estimate = NammaYatriAdapter::normalize(raw_estimate(), "srch-7");
            let fare = estimate.fare();
            assert!((fare.total() - 85.0).abs() < f64::EPSILON);
            assert!((fare.base_fare() - 30.0).abs() < f64::EPSILON);
            assert!((fare.platform_fee() - 10.0).abs() < f64::EPSILON);
            // 85 - 30 - 10
            assert!((fare.distance_fare() - 45.0).abs() < f64::EPSILON);
            assert!(fare.time_fare().abs() < f64::EPSILON);
            assert!(fare.taxes().abs() < f64::EPSILON);
            assert!((fare.surge_multiplier() - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn eta_rounds_duration_up_to_minutes() {
            // 980 s is 16.33 min.
            let estimate = NammaYatriAdapter::normalize(raw_estimate(), "s");
            assert_eq!(estimate.eta_text(), "17 min");
        }

        #[test]
        fn exact_minutes_do_not_round_up() {
            let mut raw = raw_estimate();
            raw.ride_duration = 300.0;
            let estimate = NammaYatriAdapter::normalize(raw, "s");
            assert_eq!(estimate.eta_text(), "5 min");
        }

        #[test]
        fn booking_ref_and_deep_link_carry_both_ids() {
            let estimate = NammaYatriAdapter::normalize(raw_estimate(), "srch-7");
            let booking_ref = estimate.booking_ref().unwrap();
            assert_eq!(booking_ref.estimate_id(), "est-42");
            assert_eq!(booking_ref.search_id(), "srch-7");
            assert_eq!(
                estimate.deep_link().unwrap(),
                "nammayatri://book?estimateId=est-42&searchId=srch-7"
            );
        }

        #[test]
        fn carries_provider_identity_and_features() {
            let estimate = NammaYatriAdapter::normalize(raw_estimate(), "s");
            assert_eq!(estimate.provider_id(), Provider::NammaYatri);
            assert_eq!(estimate.provider_name(), "Namma Yatri");
            assert_eq!(estimate.vehicle_class(), "AUTO_RICKSHAW");
            assert_eq!(estimate.features().len(), 4);
            assert_eq!(estimate.features().first().unwrap(), "Open Source");
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn trims_trailing_slash() {
            let adapter =
                NammaYatriAdapter::new("https://api.test/", 1_000, Duration::from_millis(10))
                    .unwrap();
            assert_eq!(adapter.base_url(), "https://api.test");
        }

        #[test]
        fn defaults_point_at_production() {
            let adapter = NammaYatriAdapter::with_defaults().unwrap();
            assert_eq!(adapter.base_url(), DEFAULT_BASE_URL);
            assert_eq!(adapter.settle_delay(), Duration::from_millis(1_000));
        }

        #[test]
        fn reports_its_provider() {
            let adapter = NammaYatriAdapter::with_defaults().unwrap();
            assert_eq!(adapter.provider(), Provider::NammaYatri);
        }
    }
}
