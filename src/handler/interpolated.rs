//! Dual-domain scale handler driven by an interpolator.
//!
//! The handler tracks the same base extent in two unit systems and can
//! switch which one the working scale is expressed in. Data positions
//! are always in master units; the derived scale bridges the two.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::interpolator::Interpolator;
use crate::interval::Interval;
use crate::scale::{InterpolatedScale, LinearScale, Scale};
use crate::ticks::{create_ticks, Ticks};
use crate::transform::{Axis, ZoomTransform};

use super::basic::rescaled_domain;
use super::Mode;

/// The scale a consumer should project master-unit data through,
/// whichever mode the handler is in.
#[derive(Clone)]
pub enum DataScale {
    Direct(LinearScale),
    Interpolated(InterpolatedScale),
}

impl Scale for DataScale {
    fn apply(&self, value: f64) -> f64 {
        match self {
            DataScale::Direct(s) => s.apply(value),
            DataScale::Interpolated(s) => s.apply(value),
        }
    }

    fn invert(&self, px: f64) -> f64 {
        match self {
            DataScale::Direct(s) => s.invert(px),
            DataScale::Interpolated(s) => s.invert(px),
        }
    }

    fn domain(&self) -> Interval {
        match self {
            DataScale::Direct(s) => s.domain(),
            DataScale::Interpolated(s) => s.domain(),
        }
    }

    fn range(&self) -> Interval {
        match self {
            DataScale::Direct(s) => s.range(),
            DataScale::Interpolated(s) => s.range(),
        }
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            DataScale::Direct(s) => s.ticks(count),
            DataScale::Interpolated(s) => s.ticks(count),
        }
    }
}

impl fmt::Debug for DataScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataScale::Direct(s) => f.debug_tuple("Direct").field(s).finish(),
            DataScale::Interpolated(s) => f.debug_tuple("Interpolated").field(s).finish(),
        }
    }
}

/// Scale handler for a track whose axis can display either of two unit
/// systems related by an [`Interpolator`].
pub struct InterpolatedScaleHandler {
    interpolator: Arc<dyn Interpolator + Send + Sync>,
    base_domain: Interval,
    alternate_base: Interval,
    mode: Mode,
    scale: LinearScale,
}

impl InterpolatedScaleHandler {
    /// `base_domain` is in master units; the alternate-unit mirror is
    /// derived through the interpolator.
    pub fn new(interpolator: Arc<dyn Interpolator + Send + Sync>, base_domain: Interval) -> Self {
        let alternate_base = interpolator.reverse_interpolated_domain(base_domain);
        Self {
            interpolator,
            base_domain,
            alternate_base,
            mode: Mode::Master,
            scale: LinearScale::new(base_domain, Interval::new(0.0, 0.0)),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the working scale's unit system, converting its current
    /// domain so the visible extent does not jump.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        let domain = self.scale.domain();
        let converted = match mode {
            Mode::Master => self.interpolator.forward_interpolated_domain(domain),
            Mode::Alternate => self.interpolator.reverse_interpolated_domain(domain),
        };
        self.scale.set_domain(converted);
        self.mode = mode;
        debug!(?mode, "scale handler mode switched");
    }

    /// The base domain in master units.
    pub fn base_domain(&self) -> Interval {
        self.base_domain
    }

    /// The base domain in alternate units.
    pub fn alternate_base(&self) -> Interval {
        self.alternate_base
    }

    /// Replace the base extent and reset the working scale to it. The
    /// interval is interpreted in the current mode's units.
    pub fn set_base_domain(&mut self, domain: Interval) {
        match self.mode {
            Mode::Master => {
                self.base_domain = domain;
                self.alternate_base = self.interpolator.reverse_interpolated_domain(domain);
            }
            Mode::Alternate => {
                self.alternate_base = domain;
                self.base_domain = self.interpolator.forward_interpolated_domain(domain);
            }
        }
        self.scale.set_domain(domain);
        debug!(start = domain.start, end = domain.end, mode = ?self.mode, "base domain reset");
    }

    pub fn range(&self) -> Interval {
        self.scale.range()
    }

    pub fn set_range(&mut self, range: Interval) {
        self.scale.set_range(range);
    }

    /// Re-derive the working domain from the active mode's base domain
    /// and a gesture transform.
    pub fn rescale(&mut self, transform: &ZoomTransform, axis: Axis) {
        let base = match self.mode {
            Mode::Master => self.base_domain,
            Mode::Alternate => self.alternate_base,
        };
        self.scale
            .set_domain(rescaled_domain(base, self.scale.range(), transform, axis));
    }

    /// Depth-axis ticks in the requested mode's units, defaulting to the
    /// current mode.
    pub fn ticks(&self, mode: Option<Mode>) -> Ticks {
        let mode = mode.unwrap_or(self.mode);
        if mode == self.mode {
            return create_ticks(&self.scale);
        }
        let domain = self.scale.domain();
        let converted = match mode {
            Mode::Master => self.interpolator.forward_interpolated_domain(domain),
            Mode::Alternate => self.interpolator.reverse_interpolated_domain(domain),
        };
        create_ticks(&LinearScale::new(converted, self.scale.range()))
    }

    /// A read-only master-unit view over the alternate-mode scale.
    pub fn interpolated_scale(&self) -> InterpolatedScale {
        InterpolatedScale::new(self.scale, Arc::clone(&self.interpolator))
    }

    /// The scale to project master-unit data through. In master mode
    /// this is the working scale itself; in alternate mode the working
    /// scale is bridged back to master units.
    pub fn data_scale(&self) -> DataScale {
        match self.mode {
            Mode::Master => DataScale::Direct(self.scale),
            Mode::Alternate => DataScale::Interpolated(self.interpolated_scale()),
        }
    }

    /// The working scale in the current mode's own units.
    pub fn working_scale(&self) -> &LinearScale {
        &self.scale
    }
}

impl fmt::Debug for InterpolatedScaleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatedScaleHandler")
            .field("base_domain", &self.base_domain)
            .field("alternate_base", &self.alternate_base)
            .field("mode", &self.mode)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolator::FnInterpolator;

    fn halving() -> Arc<dyn Interpolator + Send + Sync> {
        Arc::new(FnInterpolator::new(|v| v / 2.0, |v| v * 2.0))
    }

    #[test]
    fn alternate_base_mirrors_the_master_base() {
        let handler = InterpolatedScaleHandler::new(halving(), Interval::new(-10.0, 100.0));
        assert_eq!(handler.alternate_base(), Interval::new(-20.0, 200.0));
    }

    #[test]
    fn data_scale_stays_in_master_units_across_modes() {
        let mut handler = InterpolatedScaleHandler::new(halving(), Interval::new(-10.0, 100.0));
        handler.set_range(Interval::new(0.0, 100.0));
        handler.set_mode(Mode::Alternate);
        assert_eq!(handler.working_scale().domain(), Interval::new(-20.0, 200.0));
        assert_eq!(handler.data_scale().domain(), Interval::new(-10.0, 100.0));
    }

    #[test]
    fn mode_switch_round_trips() {
        let mut handler = InterpolatedScaleHandler::new(halving(), Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 400.0));
        handler.set_mode(Mode::Alternate);
        handler.set_mode(Mode::Master);
        assert_eq!(handler.working_scale().domain(), Interval::new(0.0, 100.0));
        assert_eq!(handler.mode(), Mode::Master);
    }

    #[test]
    fn rescale_anchors_to_the_active_mode_base() {
        let mut handler = InterpolatedScaleHandler::new(halving(), Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 100.0));
        handler.set_mode(Mode::Alternate);
        handler.rescale(&ZoomTransform::new(2.0, 0.0, 0.0), Axis::Y);
        assert_eq!(handler.working_scale().domain(), Interval::new(0.0, 100.0));
        assert_eq!(handler.data_scale().domain(), Interval::new(0.0, 50.0));
    }

    #[test]
    fn base_domain_set_in_alternate_mode_updates_both_bases() {
        let mut handler = InterpolatedScaleHandler::new(halving(), Interval::new(0.0, 100.0));
        handler.set_mode(Mode::Alternate);
        handler.set_base_domain(Interval::new(0.0, 400.0));
        assert_eq!(handler.alternate_base(), Interval::new(0.0, 400.0));
        assert_eq!(handler.base_domain(), Interval::new(0.0, 200.0));
        assert_eq!(handler.working_scale().domain(), Interval::new(0.0, 400.0));
    }

    #[test]
    fn ticks_can_be_requested_in_the_other_mode() {
        let mut handler = InterpolatedScaleHandler::new(halving(), Interval::new(0.0, 100.0));
        handler.set_range(Interval::new(0.0, 100.0));
        let master = handler.ticks(None);
        let alternate = handler.ticks(Some(Mode::Alternate));
        assert_eq!(master.major, vec![0.0, 50.0, 100.0]);
        assert_eq!(alternate.major, vec![0.0, 100.0, 200.0]);
    }
}
