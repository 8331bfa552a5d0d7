//! # Domain Entities
//!
//! Request-scoped entities produced by one comparison call.
//!
//! ## Entities
//!
//! - [`NormalizedEstimate`]: one bookable option in the common schema
//! - [`FareComparison`]: the sorted result of a comparison
//! - [`BookingRef`]: live-provider booking handle

pub mod comparison;
pub mod estimate;

pub use comparison::FareComparison;
pub use estimate::{BookingRef, EstimateBuilder, NormalizedEstimate};
