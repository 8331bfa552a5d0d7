//! # Domain Layer
//!
//! Pure business types and rules: no I/O, no clocks beyond the injected
//! surge strategy, no framework dependencies.
//!
//! - [`value_objects`]: providers, locations, routes, fare breakdowns
//! - [`entities`]: normalized estimates and the sorted comparison
//! - [`services`]: surge, local estimation, eligibility

pub mod entities;
pub mod services;
pub mod value_objects;
