//! Conversion between two related logical domains.
//!
//! Well logs are often indexed by more than one depth reference (for example
//! measured depth and true vertical depth). An [`Interpolator`] converts
//! values and whole domains between a master domain and an alternate domain.

use std::fmt;
use std::sync::Arc;

use crate::interval::Interval;

/// Conversion between a master domain and an alternate domain.
///
/// `forward` maps alternate units into master units and `reverse` is its
/// inverse. Implementations must keep the pair consistent:
/// `reverse(forward(v)) ≈ v` across the domain. The crate relies on that
/// contract but does not enforce it.
pub trait Interpolator {
    /// Convert a value from alternate units into master units.
    fn forward(&self, value: f64) -> f64;

    /// Convert a value from master units into alternate units.
    fn reverse(&self, value: f64) -> f64;

    /// Convert a whole domain from alternate units into master units.
    fn forward_interpolated_domain(&self, domain: Interval) -> Interval {
        Interval::new(self.forward(domain.start), self.forward(domain.end))
    }

    /// Convert a whole domain from master units into alternate units.
    fn reverse_interpolated_domain(&self, domain: Interval) -> Interval {
        Interval::new(self.reverse(domain.start), self.reverse(domain.end))
    }
}

/// Interpolator that leaves values unchanged.
///
/// Handlers constructed without a meaningful dual domain use this.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityInterpolator;

impl Interpolator for IdentityInterpolator {
    fn forward(&self, value: f64) -> f64 {
        value
    }

    fn reverse(&self, value: f64) -> f64 {
        value
    }
}

/// Interpolator backed by a pair of closures.
#[derive(Clone)]
pub struct FnInterpolator {
    forward: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
    reverse: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl FnInterpolator {
    /// Create an interpolator from forward and reverse conversions.
    pub fn new(
        forward: impl Fn(f64) -> f64 + Send + Sync + 'static,
        reverse: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            forward: Arc::new(forward),
            reverse: Arc::new(reverse),
        }
    }
}

impl Interpolator for FnInterpolator {
    fn forward(&self, value: f64) -> f64 {
        (self.forward)(value)
    }

    fn reverse(&self, value: f64) -> f64 {
        (self.reverse)(value)
    }
}

impl fmt::Debug for FnInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnInterpolator(..)")
    }
}
