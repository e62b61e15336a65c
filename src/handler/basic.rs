//! Single-domain scale handler for pan and zoom along one axis.

use tracing::debug;

use crate::interval::Interval;
use crate::scale::{LinearScale, Scale};
use crate::ticks::{create_ticks, Ticks};
use crate::transform::{Axis, ZoomTransform};

/// Owns the base (unzoomed) domain and a working linear scale whose
/// domain tracks the current zoom state.
///
/// Rescaling always starts from the base domain, so applying gesture
/// transforms repeatedly cannot accumulate drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicScaleHandler {
    base_domain: Interval,
    scale: LinearScale,
}

impl BasicScaleHandler {
    pub fn new(base_domain: Interval) -> Self {
        Self {
            base_domain,
            scale: LinearScale::new(base_domain, Interval::new(0.0, 0.0)),
        }
    }

    pub fn base_domain(&self) -> Interval {
        self.base_domain
    }

    /// Replace the base domain and reset the working scale to it, with
    /// any zoom state discarded.
    pub fn set_base_domain(&mut self, domain: Interval) {
        self.base_domain = domain;
        self.scale.set_domain(domain);
        debug!(start = domain.start, end = domain.end, "base domain reset");
    }

    pub fn range(&self) -> Interval {
        self.scale.range()
    }

    pub fn set_range(&mut self, range: Interval) {
        self.scale.set_range(range);
    }

    /// Re-derive the working domain from the base domain and a gesture
    /// transform.
    pub fn rescale(&mut self, transform: &ZoomTransform, axis: Axis) {
        self.scale
            .set_domain(rescaled_domain(self.base_domain, self.scale.range(), transform, axis));
    }

    /// Depth-axis ticks for the current working domain and range.
    pub fn ticks(&self) -> Ticks {
        create_ticks(&self.scale)
    }

    /// The working scale, for projecting data positions to pixels.
    pub fn data_scale(&self) -> &LinearScale {
        &self.scale
    }
}

impl From<Interval> for BasicScaleHandler {
    fn from(base_domain: Interval) -> Self {
        Self::new(base_domain)
    }
}

// Shared rescale math: a reference scale over the base domain maps the
// transform-inverted range endpoints back to domain units.
pub(super) fn rescaled_domain(
    base_domain: Interval,
    range: Interval,
    transform: &ZoomTransform,
    axis: Axis,
) -> Interval {
    let reference = LinearScale::new(base_domain, range);
    Interval::new(
        reference.invert(transform.invert(range.start, axis)),
        reference.invert(transform.invert(range.end, axis)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_keeps_base_domain() {
        let mut handler = BasicScaleHandler::new(Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 500.0));
        handler.rescale(&ZoomTransform::IDENTITY, Axis::Y);
        handler.rescale(&ZoomTransform::IDENTITY, Axis::Y);
        assert_eq!(handler.data_scale().domain(), Interval::new(0.0, 100.0));
    }

    #[test]
    fn zoom_in_halves_the_visible_domain() {
        let mut handler = BasicScaleHandler::new(Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 100.0));
        handler.rescale(&ZoomTransform::new(2.0, 0.0, 0.0), Axis::Y);
        assert_eq!(handler.data_scale().domain(), Interval::new(0.0, 50.0));
    }

    #[test]
    fn pan_shifts_the_visible_domain() {
        let mut handler = BasicScaleHandler::new(Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 100.0));
        handler.rescale(&ZoomTransform::new(1.0, 0.0, -10.0), Axis::Y);
        assert_eq!(handler.data_scale().domain(), Interval::new(10.0, 110.0));
    }

    #[test]
    fn set_base_domain_resets_zoom_state() {
        let mut handler = BasicScaleHandler::new(Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 100.0));
        handler.rescale(&ZoomTransform::new(4.0, 0.0, 0.0), Axis::Y);
        handler.set_base_domain(Interval::new(200.0, 300.0));
        assert_eq!(handler.data_scale().domain(), Interval::new(200.0, 300.0));
    }

    #[test]
    fn descending_base_domain_is_preserved() {
        let mut handler = BasicScaleHandler::new(Interval::new(3000.0, 1000.0));
        handler.set_range(Interval::new(0.0, 400.0));
        handler.rescale(&ZoomTransform::new(2.0, 0.0, 0.0), Axis::Y);
        assert_eq!(handler.data_scale().domain(), Interval::new(3000.0, 2000.0));
    }
}
