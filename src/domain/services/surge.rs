//! # Surge Model
//!
//! Demand pricing as an injectable strategy.
//!
//! The production model ([`TimeOfDaySurge`]) classifies the local
//! wall-clock hour into a demand window and draws a multiplier uniformly
//! from that window's range. Because the draw is randomized, the model is
//! a trait so deterministic values can be substituted ([`FixedSurge`])
//! wherever reproducible totals are needed.
//!
//! # Examples
//!
//! ```
//! use fairfare::domain::services::surge::{FixedSurge, SurgeModel};
//!
//! let surge = FixedSurge::new(1.0);
//! assert!((surge.current_multiplier() - 1.0).abs() < f64::EPSILON);
//! ```

use chrono::{DateTime, Local, Timelike};
use rand::Rng;
use std::fmt;
use std::ops::Range;

/// Peak-window draw range.
const PEAK_SURGE: Range<f64> = 1.2..1.5;
/// Late-night draw range.
const LATE_NIGHT_SURGE: Range<f64> = 1.1..1.3;
/// Everything else gets a small variation above neutral.
const OFFPEAK_SURGE: Range<f64> = 1.0..1.1;

/// Strategy producing the surge multiplier for a point in time.
///
/// Implementations must be cheap and side-effect-free beyond reading a
/// randomness source; the aggregator samples once per local estimator
/// invocation.
pub trait SurgeModel: Send + Sync + fmt::Debug {
    /// Returns the multiplier for the given local time.
    fn multiplier_at(&self, now: DateTime<Local>) -> f64;

    /// Returns the multiplier for the current wall-clock time.
    fn current_multiplier(&self) -> f64 {
        self.multiplier_at(Local::now())
    }
}

/// Demand classification of a local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandWindow {
    /// Morning (08–10) and evening (18–21) rush, bounds inclusive.
    Peak,
    /// Hour >= 23 or <= 5.
    LateNight,
    /// Any other hour.
    Offpeak,
}

impl DemandWindow {
    /// Classifies a local hour (0–23).
    #[must_use]
    pub fn at(hour: u32) -> Self {
        if (8..=10).contains(&hour) || (18..=21).contains(&hour) {
            Self::Peak
        } else if hour >= 23 || hour <= 5 {
            Self::LateNight
        } else {
            Self::Offpeak
        }
    }

    /// Returns the multiplier range drawn from in this window.
    #[must_use]
    pub fn surge_range(self) -> Range<f64> {
        match self {
            Self::Peak => PEAK_SURGE,
            Self::LateNight => LATE_NIGHT_SURGE,
            Self::Offpeak => OFFPEAK_SURGE,
        }
    }
}

/// Production surge model: uniform draw per demand window.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeOfDaySurge;

impl TimeOfDaySurge {
    /// Creates the production model.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SurgeModel for TimeOfDaySurge {
    fn multiplier_at(&self, now: DateTime<Local>) -> f64 {
        let range = DemandWindow::at(now.hour()).surge_range();
        rand::rng().random_range(range)
    }
}

/// Deterministic surge model returning one fixed multiplier.
///
/// Used in tests and anywhere reproducible totals matter more than
/// demand modeling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurge {
    multiplier: f64,
}

impl FixedSurge {
    /// Creates a model that always returns `multiplier`.
    #[must_use]
    pub const fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Creates the neutral (1.0×) model.
    #[must_use]
    pub const fn neutral() -> Self {
        Self::new(1.0)
    }

    /// Returns the fixed multiplier.
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for FixedSurge {
    fn default() -> Self {
        Self::neutral()
    }
}

impl SurgeModel for FixedSurge {
    fn multiplier_at(&self, _now: DateTime<Local>) -> f64 {
        self.multiplier
    }
}
