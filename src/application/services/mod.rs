//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`FareAggregator`]: Concurrent fare collection and ordering
//! - [`BookingAction`]: Redirection targets for a chosen estimate

pub mod aggregator;
pub mod booking;

pub use aggregator::FareAggregator;
pub use booking::{BookingAction, BookingFallback};
