//! # Provider Identity
//!
//! Closed set of ride-hailing providers known to the engine.
//!
//! Provider identity is a tagged variant rather than a free-form string so
//! that per-provider dispatch (pricing tables, booking links, eligibility
//! zones) is exhaustive and compiler-checked.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::value_objects::provider::Provider;
//!
//! let provider: Provider = "namma-yatri".parse().unwrap();
//! assert_eq!(provider, Provider::NammaYatri);
//! assert!(provider.is_live());
//! assert_eq!(provider.display_name(), "Namma Yatri");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A ride-hailing provider participating in fare comparison.
///
/// The wire representation is the provider's stable string id
/// (`"ola"`, `"uber"`, `"namma-yatri"`), both in JSON and in `FromStr`.
///
/// # Examples
///
/// ```
/// use fairfare::domain::value_objects::provider::Provider;
///
/// assert_eq!(Provider::Ola.id(), "ola");
/// assert_eq!(Provider::NammaYatri.to_string(), "namma-yatri");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Provider {
    /// Ola — fares modeled locally from its published rate card.
    Ola = 0,
    /// Uber — fares modeled locally from its published rate card.
    Uber = 1,
    /// Namma Yatri — fares fetched live over its search/estimate API.
    NammaYatri = 2,
}

impl Provider {
    /// All providers, in the fixed aggregation order (local providers
    /// first, then the live provider).
    pub const ALL: [Self; 3] = [Self::Ola, Self::Uber, Self::NammaYatri];

    /// Returns the stable string id used on the wire.
    #[inline]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ola => "ola",
            Self::Uber => "uber",
            Self::NammaYatri => "namma-yatri",
        }
    }

    /// Returns the human-readable provider name.
    #[inline]
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ola => "Ola",
            Self::Uber => "Uber",
            Self::NammaYatri => "Namma Yatri",
        }
    }

    /// Returns true if this provider's estimates come from a live network
    /// source rather than a local pricing model.
    #[inline]
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::NammaYatri)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ola" => Ok(Self::Ola),
            "uber" => Ok(Self::Uber),
            "namma-yatri" => Ok(Self::NammaYatri),
            _ => Err(ParseProviderError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown provider id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider id: {0}")]
pub struct ParseProviderError(pub String);

/// Vehicle tier within a locally modeled provider's rate card.
///
/// Each local provider publishes two tiers; the tier label shown to users
/// ("Mini", "Premier", ...) lives in the provider's fare schedule, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum VehicleTier {
    /// Base tier, selected for trips at or below the provider's distance
    /// threshold.
    Economy = 0,
    /// Upgraded tier, selected for trips above the threshold.
    Premium = 1,
}

impl VehicleTier {
    /// Returns true for the economy tier.
    #[inline]
    #[must_use]
    pub const fn is_economy(self) -> bool {
        matches!(self, Self::Economy)
    }

    /// Returns true for the premium tier.
    #[inline]
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl fmt::Display for VehicleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Economy => write!(f, "ECONOMY"),
            Self::Premium => write!(f, "PREMIUM"),
        }
    }
}
