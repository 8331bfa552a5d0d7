//! # Domain Services
//!
//! Domain services encapsulating business logic that doesn't naturally
//! belong to a single entity or value object.
//!
//! ## Services
//!
//! - [`surge::SurgeModel`]: time-of-day demand pricing strategy
//! - [`estimator::LocalFareEstimator`]: deterministic fare-formula evaluation
//! - [`eligibility::EligibilityPolicy`]: provider geofencing

pub mod eligibility;
pub mod estimator;
pub mod surge;

pub use eligibility::{EligibilityPolicy, ExclusionZone};
pub use estimator::{FareSchedule, LocalFareEstimator, TierRates};
pub use surge::{DemandWindow, FixedSurge, SurgeModel, TimeOfDaySurge};
