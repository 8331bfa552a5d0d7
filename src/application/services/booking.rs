//! # Booking Redirection
//!
//! Turns a chosen estimate into a [`BookingAction`]: the URL a client
//! should open to hand the trip off to the provider, plus an optional
//! timed web fallback for app deep links that may go unhandled.
//!
//! Web providers get their booking page directly. The live provider
//! gets its app scheme first, preferring the exact estimate when a
//! booking reference is attached and falling back to a trip-level link
//! otherwise.
//!
//! # Examples
//!
//! ```rust
//! use fairfare::application::services::booking::BookingAction;
//! use fairfare::domain::entities::NormalizedEstimate;
//! use fairfare::domain::value_objects::{FareBreakdown, Location, Provider};
//!
//! let pickup = Location::new("MG Road, Bengaluru", 12.9757, 77.6050, "a");
//! let destination = Location::new("HSR Layout, Bengaluru", 12.9121, 77.6446, "b");
//! let estimate = NormalizedEstimate::builder(
//!     Provider::Uber,
//!     "Go",
//!     FareBreakdown::from_reported_total(180.0, 50.0, 6.0),
//!     "18 mins",
//! )
//! .build();
//!
//! let action = BookingAction::for_estimate(&estimate, &pickup, &destination);
//! assert!(action.primary_url().starts_with("https://m.uber.com/"));
//! assert!(action.fallback().is_none());
//! ```

use crate::domain::entities::estimate::NormalizedEstimate;
use crate::domain::value_objects::{Location, Provider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::form_urlencoded;

/// Attribution tag appended to every outbound booking URL.
const UTM_SOURCE: &str = "fairfare";

/// Wait before falling back from an app scheme to the web.
const FALLBACK_DELAY_MS: u64 = 1_000;

const OLA_BOOKING_BASE: &str = "https://book.olacabs.com/";
const UBER_BOOKING_URL: &str = "https://m.uber.com/looking?utm_source=fairfare";
const NAMMA_APP_SCHEME: &str = "nammayatri://book";
const NAMMA_WEB_BASE: &str = "https://nammayatri.in";

/// Web URL to open if an app deep link goes unhandled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFallback {
    url: String,
    after_ms: u64,
}

impl BookingFallback {
    fn new(url: String) -> Self {
        Self {
            url,
            after_ms: FALLBACK_DELAY_MS,
        }
    }

    /// Returns the fallback URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the wait before the fallback fires, in milliseconds.
    #[inline]
    #[must_use]
    pub fn after_ms(&self) -> u64 {
        self.after_ms
    }

    /// Returns the wait before the fallback fires.
    #[inline]
    #[must_use]
    pub fn after(&self) -> Duration {
        Duration::from_millis(self.after_ms)
    }
}

/// What a client should open to book one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAction {
    primary_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<BookingFallback>,
}

impl BookingAction {
    /// Builds the booking action for a chosen estimate.
    ///
    /// # Arguments
    ///
    /// * `estimate` - The estimate the rider picked
    /// * `pickup` - Trip origin, carried into trip-level booking URLs
    /// * `destination` - Trip destination, carried into trip-level
    ///   booking URLs
    #[must_use]
    pub fn for_estimate(
        estimate: &NormalizedEstimate,
        pickup: &Location,
        destination: &Location,
    ) -> Self {
        match estimate.provider_id() {
            Provider::Ola => Self::ola_web(pickup, destination),
            Provider::Uber => Self::web(UBER_BOOKING_URL.to_string()),
            Provider::NammaYatri => Self::namma_yatri(estimate, pickup, destination),
        }
    }

    /// Returns the URL to open first.
    #[inline]
    #[must_use]
    pub fn primary_url(&self) -> &str {
        &self.primary_url
    }

    /// Returns the timed web fallback, if the primary is an app scheme.
    #[inline]
    #[must_use]
    pub fn fallback(&self) -> Option<&BookingFallback> {
        self.fallback.as_ref()
    }

    fn web(primary_url: String) -> Self {
        Self {
            primary_url,
            fallback: None,
        }
    }

    fn app(primary_url: String, fallback_url: String) -> Self {
        Self {
            primary_url,
            fallback: Some(BookingFallback::new(fallback_url)),
        }
    }

    fn ola_web(pickup: &Location, destination: &Location) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("pickup", pickup.address())
            .append_pair("drop", destination.address())
            .append_pair("utm_source", UTM_SOURCE)
            .finish();
        Self::web(format!("{OLA_BOOKING_BASE}?{query}"))
    }

    /// The primary is the estimate's own deep link when it carries
    /// one, otherwise a trip-level link. The web fallback can target
    /// the exact estimate only with a booking reference.
    fn namma_yatri(
        estimate: &NormalizedEstimate,
        pickup: &Location,
        destination: &Location,
    ) -> Self {
        let primary = match estimate.deep_link() {
            Some(link) => link.to_string(),
            None => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("pickup", pickup.address())
                    .append_pair("destination", destination.address())
                    .finish();
                format!("{NAMMA_APP_SCHEME}?{query}")
            }
        };
        let fallback_url = match estimate.booking_ref() {
            Some(booking_ref) => format!(
                "{NAMMA_WEB_BASE}/book?estimateId={}&searchId={}",
                booking_ref.estimate_id(),
                booking_ref.search_id()
            ),
            None => format!("{NAMMA_WEB_BASE}/"),
        };
        Self::app(primary, fallback_url)
    }
}
