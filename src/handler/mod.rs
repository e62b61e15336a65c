//! Scale handlers: the mutable state behind a zoomable track axis.

mod basic;
mod interpolated;

pub use basic::BasicScaleHandler;
pub use interpolated::{DataScale, InterpolatedScaleHandler};

use thiserror::Error;

/// Which unit system the handler's working scale is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The primary unit system, e.g. measured depth.
    #[default]
    Master = 0,
    /// The interpolator-derived unit system, e.g. true vertical depth.
    Alternate = 1,
}

/// Raised when a raw mode discriminant is neither 0 nor 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid mode {0}, expected 0 (master) or 1 (alternate)")]
pub struct ModeError(pub u8);

impl TryFrom<u8> for Mode {
    type Error = ModeError;

    fn try_from(raw: u8) -> Result<Self, ModeError> {
        match raw {
            0 => Ok(Mode::Master),
            1 => Ok(Mode::Alternate),
            other => Err(ModeError(other)),
        }
    }
}
