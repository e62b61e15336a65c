//! Affine domain-to-pixel mapping.

use crate::interval::Interval;
use crate::scale::Scale;
use crate::ticks;

/// Linear scale mapping a domain onto a pixel range.
///
/// Out-of-domain values are not clamped; they map beyond the range so the
/// renderer can decide how to handle them. A degenerate (zero-span) domain
/// maps every value to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Interval,
    range: Interval,
}

impl LinearScale {
    /// Create a linear scale from a domain and a pixel range.
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
}

impl Scale for LinearScale {
    fn apply(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return self.range.start;
        }
        let t = (value - self.domain.start) / span;
        self.range.start + t * self.range.span()
    }

    fn invert(&self, px: f64) -> f64 {
        let span = self.range.span();
        if span == 0.0 {
            return self.domain.start;
        }
        let t = (px - self.range.start) / span;
        self.domain.start + t * self.domain.span()
    }

    fn domain(&self) -> Interval {
        self.domain
    }

    fn range(&self) -> Interval {
        self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::nice_ticks(self.domain, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_inverts() {
        let scale = LinearScale::new(Interval::new(0.0, 100.0), Interval::new(0.0, 500.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(50.0), 250.0);
        assert_eq!(scale.apply(100.0), 500.0);
        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn does_not_clamp() {
        let scale = LinearScale::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
        assert_eq!(scale.apply(150.0), 150.0);
        assert_eq!(scale.apply(-50.0), -50.0);
    }

    #[test]
    fn descending_domain_flips_mapping() {
        let scale = LinearScale::new(Interval::new(100.0, 0.0), Interval::new(0.0, 100.0));
        assert_eq!(scale.apply(100.0), 0.0);
        assert_eq!(scale.apply(0.0), 100.0);
        assert_eq!(scale.invert(0.0), 100.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new(Interval::new(5.0, 5.0), Interval::new(10.0, 20.0));
        assert_eq!(scale.apply(123.0), 10.0);
    }

    #[test]
    fn roundtrip_within_tolerance() {
        let scale = LinearScale::new(Interval::new(-10.0, 100.0), Interval::new(0.0, 640.0));
        for value in [-10.0, -3.7, 0.0, 55.5, 100.0] {
            let roundtrip = scale.invert(scale.apply(value));
            assert!((roundtrip - value).abs() < 1e-9);
        }
    }
}
