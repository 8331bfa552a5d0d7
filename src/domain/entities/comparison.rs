//! # Fare Comparison Entity
//!
//! The ordered result of one comparison call.
//!
//! A [`FareComparison`] is just the merged estimate list, sorted ascending
//! by payable total. It serializes transparently as a JSON array, so the
//! response contract is the sequence itself. There is deliberately no
//! error or partial-result channel: fewer entries is the only visible
//! effect of an unavailable provider.

use crate::domain::entities::estimate::NormalizedEstimate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Estimates from all participating providers, cheapest first.
///
/// Ties keep the order the sources were concatenated in, so the sort is
/// deterministic for a fixed set of inputs.
///
/// # Examples
///
/// ```
/// use fairfare::domain::entities::comparison::FareComparison;
/// use fairfare::domain::entities::estimate::NormalizedEstimate;
/// use fairfare::domain::value_objects::{FareBreakdown, Provider};
///
/// let pricier = NormalizedEstimate::builder(
///     Provider::Uber,
///     "Go",
///     FareBreakdown::from_components(30.0, 120.0, 36.0, 1.0, 6.0, 0.05),
///     "20 mins",
/// )
/// .build();
/// let cheaper = NormalizedEstimate::builder(
///     Provider::Ola,
///     "Mini",
///     FareBreakdown::from_components(25.0, 88.0, 30.0, 1.0, 5.0, 0.05),
///     "20 mins",
/// )
/// .build();
///
/// let comparison = FareComparison::from_unsorted(vec![pricier, cheaper]);
/// assert_eq!(comparison.cheapest().unwrap().provider_id(), Provider::Ola);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FareComparison {
    estimates: Vec<NormalizedEstimate>,
}

impl FareComparison {
    /// Creates a comparison by stable-sorting the given estimates
    /// ascending by `fare.total`.
    ///
    /// Equal totals (and the pathological NaN total) keep their input
    /// order; `sort_by` is stable, so concatenation order is the
    /// tie-break.
    #[must_use]
    pub fn from_unsorted(mut estimates: Vec<NormalizedEstimate>) -> Self {
        estimates.sort_by(|a, b| {
            a.fare()
                .total()
                .partial_cmp(&b.fare().total())
                .unwrap_or(Ordering::Equal)
        });
        Self { estimates }
    }

    /// Returns the cheapest estimate, if any.
    #[inline]
    #[must_use]
    pub fn cheapest(&self) -> Option<&NormalizedEstimate> {
        self.estimates.first()
    }

    /// Returns the number of estimates.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Returns true if no provider contributed anything.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Iterates the estimates, cheapest first.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedEstimate> {
        self.estimates.iter()
    }

    /// Returns the estimates as a slice, cheapest first.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[NormalizedEstimate] {
        &self.estimates
    }

    /// Consumes the comparison, returning the sorted estimates.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<NormalizedEstimate> {
        self.estimates
    }
}

impl IntoIterator for FareComparison {
    type Item = NormalizedEstimate;
    type IntoIter = std::vec::IntoIter<NormalizedEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.estimates.into_iter()
    }
}

impl<'a> IntoIterator for &'a FareComparison {
    type Item = &'a NormalizedEstimate;
    type IntoIter = std::slice::Iter<'a, NormalizedEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.estimates.iter()
    }
}
