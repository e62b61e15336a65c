//! Tick generation and pixel/domain span utilities.
//!
//! Tick positions are produced in domain units; projecting them to pixels
//! is the caller's job (and zoom level decides how many fit).

use crate::interval::Interval;
use crate::scale::Scale;

/// Major and minor tick positions, in domain units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ticks {
    /// Primary, labelled tick positions.
    pub major: Vec<f64>,
    /// Secondary, unlabelled subdivision positions.
    pub minor: Vec<f64>,
}

/// Target pixel spacing between major ticks.
pub const MAJOR_TICK_SPACING_PX: f64 = 60.0;

/// Legibility floor for the pixel spacing of minor ticks.
pub const MINOR_TICK_MIN_PX: f64 = 5.0;

/// Default major tick count for value-axis grids.
pub const DEFAULT_LINEAR_TICK_COUNT: usize = 10;

// Minor density candidates, as multiples of the major tick count. The
// densest candidate that clears the legibility floor wins.
const MINOR_DENSITY_FACTORS: [usize; 3] = [10, 5, 2];

/// Generate depth-axis ticks for the scale's current domain and range.
///
/// The major count follows the pixel span (one tick per ~60 px) but never
/// exceeds twice the integer domain span. Minors are a denser nice-tick
/// pass over the same domain with the majors removed.
pub fn create_ticks(scale: &dyn Scale) -> Ticks {
    let domain = scale.domain();
    let domain_span = domain.length();
    let range_span = scale.range().length();
    if domain_span == 0.0 || range_span == 0.0 || !domain.is_finite() {
        return Ticks::default();
    }

    let by_pixels = (range_span / MAJOR_TICK_SPACING_PX).round() as usize;
    let by_domain = (domain_span.floor() as usize).saturating_mul(2);
    let count = by_pixels.min(by_domain).max(1);
    let major = nice_ticks(domain, count);

    let px_per_unit = range_span / domain_span;
    let mut minor = Vec::new();
    for factor in MINOR_DENSITY_FACTORS {
        let candidate = nice_ticks(domain, count * factor);
        if candidate.len() < 2 {
            continue;
        }
        let step = (candidate[1] - candidate[0]).abs();
        if step * px_per_unit >= MINOR_TICK_MIN_PX {
            minor = exclude(candidate, &major, step * 1e-6);
            break;
        }
    }

    Ticks { major, minor }
}

/// Generate value-axis grid ticks for a linear scale.
pub fn create_linear_ticks(scale: &dyn Scale, count: usize) -> Ticks {
    let count = count.max(1);
    let major = scale.ticks(count);
    let minor_candidate = nice_ticks(scale.domain(), count * 5);
    let tolerance = match minor_candidate.len() {
        0 | 1 => 0.0,
        _ => (minor_candidate[1] - minor_candidate[0]).abs() * 1e-6,
    };
    let minor = exclude(minor_candidate, &major, tolerance);
    Ticks { major, minor }
}

/// Generate value-axis grid ticks for a base-10 logarithmic scale.
///
/// Ticks land on 1..9 within each decade; powers of ten are major, the
/// rest minor.
pub fn create_log_ticks(scale: &dyn Scale) -> Ticks {
    let mut ticks = Ticks::default();
    for tick in decade_ticks(scale.domain()) {
        if tick.is_major {
            ticks.major.push(tick.value);
        } else {
            ticks.minor.push(tick.value);
        }
    }
    ticks
}

/// Pixel span covered by `domain`, or by the scale's own domain.
pub fn pixel_span(scale: &dyn Scale, domain: Option<Interval>) -> f64 {
    let domain = domain.unwrap_or_else(|| scale.domain());
    (scale.apply(domain.end) - scale.apply(domain.start)).abs()
}

/// Domain span covered by `pixels`, or by the scale's own range.
pub fn domain_span(scale: &dyn Scale, pixels: Option<Interval>) -> f64 {
    let pixels = pixels.unwrap_or_else(|| scale.range());
    (scale.invert(pixels.end) - scale.invert(pixels.start)).abs()
}

/// Pixels per domain unit at the current zoom.
pub fn pixels_per_unit(scale: &dyn Scale) -> f64 {
    let domain_span = scale.domain().length();
    if domain_span == 0.0 {
        return 0.0;
    }
    scale.range().length() / domain_span
}

/// Domain units per pixel at the current zoom.
pub fn units_per_pixel(scale: &dyn Scale) -> f64 {
    let range_span = scale.range().length();
    if range_span == 0.0 {
        return 0.0;
    }
    scale.domain().length() / range_span
}

/// Nice tick values covering `interval`, roughly `count` of them.
///
/// Ticks are multiples of a 1/2/5 step, generated from integer indices so
/// long sweeps do not accumulate floating point error, and never fall
/// outside the interval. A descending interval yields descending ticks.
pub(crate) fn nice_ticks(interval: Interval, count: usize) -> Vec<f64> {
    if !interval.is_finite() {
        return Vec::new();
    }
    let sorted = interval.sorted();
    let (lo, hi) = (sorted.start, sorted.end);
    if lo == hi {
        return vec![lo];
    }

    let step = tick_increment(lo, hi, count.max(1));
    if !step.is_finite() || step <= 0.0 {
        return vec![lo];
    }

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let mut out: Vec<f64> = (first..=last).map(|i| i as f64 * step).collect();
    if interval.is_reversed() {
        out.reverse();
    }
    out
}

// Nice step size for roughly `count` ticks across [lo, hi]: the closest
// power-of-ten multiple of 1, 2 or 5.
fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let step = (hi - lo) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

pub(crate) struct DecadeTick {
    pub(crate) value: f64,
    pub(crate) is_major: bool,
}

/// Log-scale ticks at 1..9 times each power of ten within the domain.
pub(crate) fn decade_ticks(domain: Interval) -> Vec<DecadeTick> {
    let sorted = domain.sorted();
    let (lo, hi) = (sorted.start, sorted.end);
    if !(lo > 0.0) || !hi.is_finite() || lo > hi {
        return Vec::new();
    }

    let first_power = lo.log10().floor() as i32;
    let last_power = hi.log10().ceil() as i32;
    let mut out = Vec::new();
    for power in first_power..=last_power {
        let decade = 10f64.powi(power);
        for mantissa in 1..=9 {
            let value = mantissa as f64 * decade;
            if value < lo || value > hi {
                continue;
            }
            out.push(DecadeTick {
                value,
                is_major: mantissa == 1,
            });
        }
    }
    if domain.is_reversed() {
        out.reverse();
    }
    out
}

// Remove from `values` everything that matches a reference value within
// `tolerance`.
fn exclude(values: Vec<f64>, reference: &[f64], tolerance: f64) -> Vec<f64> {
    values
        .into_iter()
        .filter(|v| !reference.iter().any(|r| (v - r).abs() <= tolerance))
        .collect()
}
