//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`Provider`]: closed set of provider tags
//! - [`VehicleTier`]: economy/premium rate-card selector
//!
//! ## Geography
//!
//! - [`Location`]: geocoded point with display address
//! - [`BoundingBox`]: inclusive lat/lng region for geofencing
//! - [`Route`]: resolved trip with clamping distance/duration accessors
//!
//! ## Money
//!
//! - [`FareBreakdown`]: per-estimate price decomposition

pub mod fare;
pub mod location;
pub mod provider;
pub mod route;

pub use fare::FareBreakdown;
pub use location::{BoundingBox, Location};
pub use provider::{ParseProviderError, Provider, VehicleTier};
pub use route::Route;
