//! Base-10 logarithmic domain-to-pixel mapping.

use crate::interval::Interval;
use crate::scale::Scale;
use crate::ticks;

/// Logarithmic scale mapping a positive domain onto a pixel range.
///
/// Both domain endpoints must be positive; callers own that precondition
/// (resistivity and similar log-scaled curves never cross zero). A
/// degenerate domain maps every value to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: Interval,
    range: Interval,
}

impl LogScale {
    /// Create a log scale from a positive domain and a pixel range.
    pub fn new(domain: Interval, range: Interval) -> Self {
        Self { domain, range }
    }

    /// Replace the domain, keeping the range.
    pub fn set_domain(&mut self, domain: Interval) {
        self.domain = domain;
    }

    /// Replace the pixel range, keeping the domain.
    pub fn set_range(&mut self, range: Interval) {
        self.range = range;
    }

    fn log_domain(&self) -> Interval {
        Interval::new(self.domain.start.log10(), self.domain.end.log10())
    }
}

impl Scale for LogScale {
    fn apply(&self, value: f64) -> f64 {
        let log_domain = self.log_domain();
        let span = log_domain.span();
        if span == 0.0 {
            return self.range.start;
        }
        let t = (value.log10() - log_domain.start) / span;
        self.range.start + t * self.range.span()
    }

    fn invert(&self, px: f64) -> f64 {
        let span = self.range.span();
        if span == 0.0 {
            return self.domain.start;
        }
        let log_domain = self.log_domain();
        let t = (px - self.range.start) / span;
        10f64.powf(log_domain.start + t * log_domain.span())
    }

    fn domain(&self) -> Interval {
        self.domain
    }

    fn range(&self) -> Interval {
        self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let decades = ticks::decade_ticks(self.domain);
        if decades.len() > count {
            decades.into_iter().filter(|t| t.is_major).map(|t| t.value).collect()
        } else {
            decades.into_iter().map(|t| t.value).collect()
        }
    }
}
