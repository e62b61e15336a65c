//! Headless core for scrolling well-log track rendering: pan/zoom scale
//! handlers, dual-domain (e.g. MD/TVD) interpolation, tick generation,
//! and reduction of position-ordered curve data.
//!
//! Renderers feed gesture state in as a [`ZoomTransform`] and pixel
//! ranges, and read back scales, ticks, and reduced series. Nothing here
//! touches a drawing surface.

#![forbid(unsafe_code)]

pub mod data;
pub mod debounce;
pub mod handler;
pub mod interpolator;
pub mod interval;
pub mod scale;
pub mod ticks;
pub mod transform;

pub use data::{
    filter_data, merge_series, query_continuous, query_point, query_zone, resample, MergedSample,
    PlotPoint, Reducer, DEFAULT_OVERLAP_FACTOR,
};
pub use debounce::{debounce, DebounceHandle};
pub use handler::{BasicScaleHandler, DataScale, InterpolatedScaleHandler, Mode, ModeError};
pub use interpolator::{FnInterpolator, IdentityInterpolator, Interpolator};
pub use interval::Interval;
pub use scale::{create_scale, InterpolatedScale, LinearScale, LogScale, Scale, ScaleError, ScaleVariant};
pub use ticks::{
    create_linear_ticks, create_log_ticks, create_ticks, domain_span, pixel_span, pixels_per_unit,
    units_per_pixel, Ticks, DEFAULT_LINEAR_TICK_COUNT, MAJOR_TICK_SPACING_PX, MINOR_TICK_MIN_PX,
};
pub use transform::{Axis, ZoomTransform};
