//! Numeric intervals for logical domains and pixel ranges.

/// Ordered pair of endpoints that preserves orientation.
///
/// Depth axes commonly run descending, so unlike a min/max range the
/// endpoints are kept exactly as given. Use [`Interval::sorted`] when an
/// ascending view is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// First endpoint.
    pub start: f64,
    /// Second endpoint.
    pub end: f64,
}

impl Interval {
    /// Create an interval from its endpoints, keeping their order.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed span of the interval.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Absolute span of the interval.
    pub fn length(&self) -> f64 {
        self.span().abs()
    }

    /// Check whether the endpoints run descending.
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Check whether both endpoints are finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Ascending copy of the interval.
    pub fn sorted(&self) -> Self {
        if self.is_reversed() {
            Self::new(self.end, self.start)
        } else {
            *self
        }
    }

    /// Copy with the endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Check whether a value lies within the interval, inclusive on both
    /// ends and regardless of orientation.
    pub fn contains(&self, value: f64) -> bool {
        let sorted = self.sorted();
        value >= sorted.start && value <= sorted.end
    }

    /// Ascending copy expanded outward by `amount` on each side.
    pub fn expanded(&self, amount: f64) -> Self {
        let sorted = self.sorted();
        Self::new(sorted.start - amount, sorted.end + amount)
    }
}

impl From<[f64; 2]> for Interval {
    fn from(endpoints: [f64; 2]) -> Self {
        Self::new(endpoints[0], endpoints[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.start, interval.end]
    }
}
