//! # Location Value Object
//!
//! A geocoded pickup or destination point.
//!
//! Locations are produced by the (external) geocoding/autocomplete layer
//! and consumed read-only by the engine. The engine never validates or
//! corrects coordinates; it only reads them for eligibility checks and
//! the live provider's wire format.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::value_objects::location::Location;
//!
//! let pickup = Location::new("MG Road, Bengaluru", 12.9757, 77.6050, "place-1");
//! assert!(pickup.address_contains("mg road"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geocoded point with its display address.
///
/// Immutable value; request-scoped like every other entity in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Full display address as returned by the geocoder.
    address: String,
    /// Latitude in decimal degrees.
    lat: f64,
    /// Longitude in decimal degrees.
    lng: f64,
    /// Opaque geocoder place identifier.
    place_id: String,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(address: impl Into<String>, lat: f64, lng: f64, place_id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
            place_id: place_id.into(),
        }
    }

    /// Returns the display address.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the latitude in decimal degrees.
    #[inline]
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in decimal degrees.
    #[inline]
    #[must_use]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns the geocoder place id.
    #[inline]
    #[must_use]
    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    /// Returns true if the address contains `keyword`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use fairfare::domain::value_objects::location::Location;
    ///
    /// let loc = Location::new("Sector 17, Chandigarh", 30.74, 76.78, "p");
    /// assert!(loc.address_contains("CHANDIGARH"));
    /// assert!(!loc.address_contains("bengaluru"));
    /// ```
    #[must_use]
    pub fn address_contains(&self, keyword: &str) -> bool {
        self.address
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4}, {:.4})", self.address, self.lat, self.lng)
    }
}

/// An inclusive latitude/longitude bounding box.
///
/// Used by the eligibility filter to describe regions a provider does not
/// serve. Both bounds of each axis are inclusive.
///
/// # Examples
///
/// ```
/// use fairfare::domain::value_objects::location::BoundingBox;
///
/// let chandigarh = BoundingBox::new(30.6, 30.8, 76.7, 76.9);
/// assert!(chandigarh.contains_point(30.7, 76.8));
/// assert!(chandigarh.contains_point(30.6, 76.9)); // edges included
/// assert!(!chandigarh.contains_point(30.5, 76.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Southern edge.
    min_lat: f64,
    /// Northern edge.
    max_lat: f64,
    /// Western edge.
    min_lng: f64,
    /// Eastern edge.
    max_lng: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its inclusive edges.
    #[must_use]
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Returns true if the point lies within the box, edges included.
    #[must_use]
    pub fn contains_point(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// Returns true if the location's coordinates lie within the box.
    #[must_use]
    pub fn contains(&self, location: &Location) -> bool {
        self.contains_point(location.lat(), location.lng())
    }
}
