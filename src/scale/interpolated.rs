//! Derived scale presenting master units over an alternate working domain.

use std::fmt;
use std::sync::Arc;

use crate::interpolator::Interpolator;
use crate::interval::Interval;
use crate::scale::{LinearScale, Scale};
use crate::ticks;

/// Read-only view of a working scale expressed in alternate units.
///
/// The view accepts and reports master-unit values: it converts inputs with
/// the interpolator's `reverse` before applying the underlying scale, and
/// converts inverted pixel positions back with `forward`. It is a derived
/// view rather than independent state; no mutators exist, so the underlying
/// handler remains the single owner of domain and range.
#[derive(Clone)]
pub struct InterpolatedScale {
    inner: LinearScale,
    interpolator: Arc<dyn Interpolator + Send + Sync>,
}

impl InterpolatedScale {
    pub(crate) fn new(
        inner: LinearScale,
        interpolator: Arc<dyn Interpolator + Send + Sync>,
    ) -> Self {
        Self {
            inner,
            interpolator,
        }
    }
}

impl Scale for InterpolatedScale {
    fn apply(&self, value: f64) -> f64 {
        self.inner.apply(self.interpolator.reverse(value))
    }

    fn invert(&self, px: f64) -> f64 {
        self.interpolator.forward(self.inner.invert(px))
    }

    fn domain(&self) -> Interval {
        self.interpolator
            .forward_interpolated_domain(self.inner.domain())
    }

    fn range(&self) -> Interval {
        self.inner.range()
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::nice_ticks(self.domain(), count)
    }
}

impl fmt::Debug for InterpolatedScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatedScale")
            .field("inner", &self.inner)
            .field("domain", &self.domain())
            .finish()
    }
}
