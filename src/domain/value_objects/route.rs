//! # Route Value Object
//!
//! A computed path between two locations, carrying the measured road
//! distance, the expected travel time, and the routing layer's human
//! duration text.
//!
//! Routing happens upstream; the engine only reads the figures. Upstream
//! routing occasionally reports garbage for degenerate inputs (identical
//! pickup and drop, off-road snapping), so the converting accessors clamp
//! negative and non-finite values to zero rather than letting them flow
//! into fare arithmetic.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::value_objects::route::Route;
//!
//! let route = Route::new(10_000.0, 1_200.0, "20 mins");
//! assert!((route.distance_km() - 10.0).abs() < f64::EPSILON);
//! assert!((route.duration_min() - 20.0).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pickup-to-destination path with distance and duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Road distance in metres, as reported by the routing layer.
    distance_meters: f64,
    /// Expected travel time in seconds, as reported by the routing layer.
    duration_seconds: f64,
    /// Human-readable duration, e.g. `"20 mins"`.
    duration_text: String,
}

impl Route {
    /// Creates a route from its already-resolved parts.
    #[must_use]
    pub fn new(distance_meters: f64, duration_seconds: f64, duration_text: impl Into<String>) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            duration_text: duration_text.into(),
        }
    }

    /// Returns the raw road distance in metres.
    #[inline]
    #[must_use]
    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Returns the raw travel time in seconds.
    #[inline]
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Returns the routing layer's human duration text.
    #[inline]
    #[must_use]
    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Returns the trip distance in kilometres, clamped to a finite,
    /// non-negative value.
    #[inline]
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        clamped(self.distance_meters / 1_000.0)
    }

    /// Returns the trip duration in minutes, clamped to a finite,
    /// non-negative value.
    #[inline]
    #[must_use]
    pub fn duration_min(&self) -> f64 {
        clamped(self.duration_seconds / 60.0)
    }
}

/// Maps NaN, infinities, and negatives to zero.
fn clamped(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km ({})", self.distance_km(), self.duration_text)
    }
}
