//! Scale contract and concrete scale types.
//!
//! A scale maps a logical domain (depth, measured value) onto a pixel range.
//! Scales are plain value objects; the handlers in [`crate::handler`] own
//! the mutable working copies.

mod interpolated;
mod linear;
mod log;

pub use interpolated::InterpolatedScale;
pub use linear::LinearScale;
pub use log::LogScale;

use thiserror::Error;

use crate::interval::Interval;

/// Mapping between a logical domain and a pixel range.
pub trait Scale {
    /// Map a domain value to a pixel position.
    fn apply(&self, value: f64) -> f64;

    /// Map a pixel position back to a domain value.
    fn invert(&self, px: f64) -> f64;

    /// Current domain.
    fn domain(&self) -> Interval;

    /// Current pixel range.
    fn range(&self) -> Interval;

    /// Nice tick positions within the domain, roughly `count` of them.
    fn ticks(&self, count: usize) -> Vec<f64>;
}

/// Errors from the scale factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// The scale kind string was not recognized.
    #[error("unknown scale kind `{0}`, expected `linear` or `log`")]
    UnknownKind(String),
}

/// Concrete scale selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleVariant {
    /// Affine mapping.
    Linear(LinearScale),
    /// Base-10 logarithmic mapping.
    Log(LogScale),
}

impl ScaleVariant {
    /// Replace the domain, keeping the range.
    pub fn set_domain(&mut self, domain: Interval) {
        match self {
            Self::Linear(scale) => scale.set_domain(domain),
            Self::Log(scale) => scale.set_domain(domain),
        }
    }

    /// Replace the pixel range, keeping the domain.
    pub fn set_range(&mut self, range: Interval) {
        match self {
            Self::Linear(scale) => scale.set_range(range),
            Self::Log(scale) => scale.set_range(range),
        }
    }
}

impl Scale for ScaleVariant {
    fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.apply(value),
            Self::Log(scale) => scale.apply(value),
        }
    }

    fn invert(&self, px: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.invert(px),
            Self::Log(scale) => scale.invert(px),
        }
    }

    fn domain(&self) -> Interval {
        match self {
            Self::Linear(scale) => scale.domain(),
            Self::Log(scale) => scale.domain(),
        }
    }

    fn range(&self) -> Interval {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Log(scale) => scale.range(),
        }
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(scale) => Scale::ticks(scale, count),
            Self::Log(scale) => Scale::ticks(scale, count),
        }
    }
}

/// Create a scale from a kind string, `"linear"` or `"log"`.
pub fn create_scale(kind: &str, domain: Interval, range: Interval) -> Result<ScaleVariant, ScaleError> {
    match kind {
        "linear" => Ok(ScaleVariant::Linear(LinearScale::new(domain, range))),
        "log" => Ok(ScaleVariant::Log(LogScale::new(domain, range))),
        other => Err(ScaleError::UnknownKind(other.to_string())),
    }
}
