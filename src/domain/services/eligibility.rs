//! # Eligibility Filter
//!
//! Geofencing rules deciding which providers participate in a comparison.
//!
//! The check is pure and synchronous; it runs before any network call so
//! a provider known not to serve a region costs nothing. This is a
//! round-trip saver, not a legal/business enforcement layer.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::services::eligibility::EligibilityPolicy;
//! use fairfare::domain::value_objects::{Location, Provider};
//!
//! let policy = EligibilityPolicy::with_default_zones();
//! let chandigarh = Location::new("Sector 17, Chandigarh", 30.74, 76.78, "p");
//!
//! assert!(!policy.is_eligible(Provider::NammaYatri, &chandigarh));
//! assert!(policy.is_eligible(Provider::Ola, &chandigarh));
//! ```

use crate::domain::value_objects::{BoundingBox, Location, Provider};
use std::collections::HashMap;

/// A region one provider does not serve.
///
/// A pickup is excluded when its address contains the keyword
/// (case-insensitive) OR its coordinates fall inside the bounding box.
/// Either signal alone is enough; addresses and coordinates come from
/// different upstream sources and disagree often enough that both are
/// checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionZone {
    keyword: String,
    bounds: BoundingBox,
}

impl ExclusionZone {
    /// Creates a zone from its keyword and bounding box.
    #[must_use]
    pub fn new(keyword: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            keyword: keyword.into(),
            bounds,
        }
    }

    /// The Chandigarh region, where the live provider does not operate.
    #[must_use]
    pub fn chandigarh() -> Self {
        Self::new("chandigarh", BoundingBox::new(30.6, 30.8, 76.7, 76.9))
    }

    /// Returns the address keyword.
    #[inline]
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the coordinate bounds.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Returns true if the location falls inside this zone.
    #[must_use]
    pub fn excludes(&self, location: &Location) -> bool {
        location.address_contains(&self.keyword) || self.bounds.contains(location)
    }
}

/// Per-provider exclusion zones.
///
/// Providers without an entry are eligible everywhere. The default value
/// has no rules; [`EligibilityPolicy::with_default_zones`] carries the
/// production ones.
#[derive(Debug, Clone, Default)]
pub struct EligibilityPolicy {
    zones: HashMap<Provider, Vec<ExclusionZone>>,
}

impl EligibilityPolicy {
    /// Creates a policy with no exclusions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the production policy: the live provider is excluded for
    /// the Chandigarh region.
    #[must_use]
    pub fn with_default_zones() -> Self {
        Self::new().with_exclusion(Provider::NammaYatri, ExclusionZone::chandigarh())
    }

    /// Adds an exclusion zone for a provider.
    #[must_use]
    pub fn with_exclusion(mut self, provider: Provider, zone: ExclusionZone) -> Self {
        self.zones.entry(provider).or_default().push(zone);
        self
    }

    /// Returns the zones configured for a provider.
    #[must_use]
    pub fn zones_for(&self, provider: Provider) -> &[ExclusionZone] {
        self.zones.get(&provider).map_or(&[], Vec::as_slice)
    }

    /// Returns true if the provider should be consulted for a pickup.
    ///
    /// Pure and synchronous; evaluated before any network call.
    #[must_use]
    pub fn is_eligible(&self, provider: Provider, pickup: &Location) -> bool {
        self.zones_for(provider)
            .iter()
            .all(|zone| !zone.excludes(pickup))
    }
}
