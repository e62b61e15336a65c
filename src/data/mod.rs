//! Windowing, merging, and lookup for position-ordered curve data.
//!
//! All operations assume points sorted ascending by position. Gaps in a
//! curve are carried in-band as points with a non-finite value.

mod resample;

pub use resample::{resample, Reducer, MIN_INPUT_LEN, MIN_RATIO};

use crate::interval::Interval;

/// One sample of a curve: a position along the track and a value.
///
/// A non-finite value marks a gap; the curve breaks there instead of
/// connecting across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub position: f64,
    pub value: f64,
}

impl PlotPoint {
    pub fn new(position: f64, value: f64) -> Self {
        Self { position, value }
    }

    /// A gap marker at `position`.
    pub fn gap(position: f64) -> Self {
        Self {
            position,
            value: f64::NAN,
        }
    }

    pub fn is_gap(&self) -> bool {
        !self.value.is_finite()
    }
}

/// Fraction of the window span added on each side by [`filter_data`]
/// when no explicit overlap is given.
pub const DEFAULT_OVERLAP_FACTOR: f64 = 0.5;

/// Keep the points visible within `window`, plus enough margin to draw
/// line segments that enter the window from outside.
///
/// The window is first expanded by `overlap_factor` times its span on
/// each side. Points inside the expanded window are kept; additionally,
/// when two adjacent points bracket the entire expanded window, both are
/// kept so the segment crossing the view survives.
pub fn filter_data(
    points: &[PlotPoint],
    window: Interval,
    overlap_factor: Option<f64>,
) -> Vec<PlotPoint> {
    let factor = overlap_factor.unwrap_or(DEFAULT_OVERLAP_FACTOR);
    let expanded = window.sorted().expanded(window.length() * factor);

    let mut out = Vec::new();
    for (i, point) in points.iter().enumerate() {
        if expanded.contains(point.position) {
            out.push(*point);
            continue;
        }
        // A segment can straddle the whole expanded window without either
        // endpoint falling inside it.
        if point.position < expanded.start {
            if let Some(next) = points.get(i + 1) {
                if next.position > expanded.end {
                    out.push(*point);
                    out.push(*next);
                }
            }
        }
    }
    out
}

/// One row of a merged pair of curves at a shared position.
///
/// A `None` value means the corresponding curve has no usable sample at
/// this position. Rows where both sides would be `None` are not emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedSample {
    pub position: f64,
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
}

/// Merge two ordered curves onto the primary curve's positions.
///
/// For each primary sample, the secondary value is the mean of all
/// not-yet-consumed secondary samples at or before that position. A gap
/// in the consumed secondary samples makes the secondary side `None` for
/// that row. Secondary samples outside the primary curve's extent are
/// emitted as their own rows with a `None` primary side.
pub fn merge_series(primary: &[PlotPoint], secondary: &[PlotPoint]) -> Vec<MergedSample> {
    let mut out = Vec::with_capacity(primary.len().max(secondary.len()));
    let mut cursor = 0;

    // Secondary data preceding the primary curve.
    if let Some(first) = primary.first() {
        while cursor < secondary.len() && secondary[cursor].position < first.position {
            let s = secondary[cursor];
            cursor += 1;
            if s.is_gap() {
                continue;
            }
            out.push(MergedSample {
                position: s.position,
                primary: None,
                secondary: Some(s.value),
            });
        }
    }

    for point in primary {
        let mut sum = 0.0;
        let mut n = 0usize;
        let mut gap = false;
        while cursor < secondary.len() && secondary[cursor].position <= point.position {
            let s = secondary[cursor];
            cursor += 1;
            if s.is_gap() {
                gap = true;
            } else {
                sum += s.value;
                n += 1;
            }
        }
        let secondary_value = if gap || n == 0 {
            None
        } else {
            Some(sum / n as f64)
        };
        let primary_value = (!point.is_gap()).then_some(point.value);
        if primary_value.is_none() && secondary_value.is_none() {
            continue;
        }
        out.push(MergedSample {
            position: point.position,
            primary: primary_value,
            secondary: secondary_value,
        });
    }

    // Secondary data extending past the primary curve.
    for s in &secondary[cursor..] {
        if s.is_gap() {
            continue;
        }
        out.push(MergedSample {
            position: s.position,
            primary: None,
            secondary: Some(s.value),
        });
    }
    out
}

// Nearest sample by position; ties go to the earlier one.
fn nearest_sample(points: &[PlotPoint], position: f64) -> Option<PlotPoint> {
    if points.is_empty() {
        return None;
    }
    let idx = points.partition_point(|p| p.position < position);
    if idx == 0 {
        return Some(points[0]);
    }
    if idx == points.len() {
        return Some(points[points.len() - 1]);
    }
    let before = points[idx - 1];
    let after = points[idx];
    if (position - before.position) <= (after.position - position) {
        Some(before)
    } else {
        Some(after)
    }
}

/// Value of a continuous curve at `position`: the nearest sample, with
/// ties going to the earlier one. Returns `None` for empty input or when
/// the nearest sample is a gap.
pub fn query_continuous(points: &[PlotPoint], position: f64) -> Option<f64> {
    let nearest = nearest_sample(points, position)?;
    (!nearest.is_gap()).then_some(nearest.value)
}

/// Value of a discrete point curve at `position`: the nearest sample,
/// ties going to the earlier one. With a threshold, samples further away
/// than it yield `None`.
pub fn query_point(points: &[PlotPoint], position: f64, threshold: Option<f64>) -> Option<f64> {
    let nearest = nearest_sample(points, position)?;
    if nearest.is_gap() {
        return None;
    }
    if let Some(threshold) = threshold {
        if (nearest.position - position).abs() > threshold {
            return None;
        }
    }
    Some(nearest.value)
}

/// Value of a zoned curve at `position`. Consecutive points delimit
/// closed intervals carrying the earlier point's value; on a shared
/// boundary the earlier zone wins. Returns `None` outside the curve's
/// extent or when the containing zone carries a gap.
pub fn query_zone(points: &[PlotPoint], position: f64) -> Option<f64> {
    let last = points.len().checked_sub(1).filter(|&l| l > 0)?;
    if position < points[0].position || position > points[last].position {
        return None;
    }
    let idx = points.partition_point(|p| p.position < position);
    let zone = points[idx.saturating_sub(1).min(last - 1)];
    (!zone.is_gap()).then_some(zone.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_window_and_overlap() {
        let points: Vec<PlotPoint> = [2.0, 10.0, 40.0, 45.0, 50.0, 55.0, 60.0, 90.0, 98.0]
            .iter()
            .map(|&p| PlotPoint::new(p, p))
            .collect();
        let out = filter_data(&points, Interval::new(40.0, 60.0), None);
        let kept: Vec<f64> = out.iter().map(|p| p.position).collect();
        assert_eq!(kept, vec![40.0, 45.0, 50.0, 55.0, 60.0]);
    }

    #[test]
    fn filter_keeps_straddling_pair() {
        let points = vec![PlotPoint::new(-100.0, 1.0), PlotPoint::new(200.0, 2.0)];
        let out = filter_data(&points, Interval::new(40.0, 60.0), None);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn filter_cuts_at_the_window_edge_and_keeps_edge_gaps() {
        let points = vec![
            PlotPoint::gap(0.0),
            PlotPoint::gap(1.0),
            PlotPoint::new(2.0, 10.0),
            PlotPoint::new(3.0, 20.0),
            PlotPoint::new(4.0, 10.0),
            PlotPoint::gap(5.0),
        ];
        let out = filter_data(&points, Interval::new(3.0, 5.0), Some(0.0));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], PlotPoint::new(3.0, 20.0));
        assert_eq!(out[1], PlotPoint::new(4.0, 10.0));
        assert_eq!(out[2].position, 5.0);
        assert!(out[2].is_gap());
    }

    #[test]
    fn filter_honors_custom_overlap() {
        let points: Vec<PlotPoint> = (0..10)
            .map(|i| PlotPoint::new(i as f64 * 10.0, 0.0))
            .collect();
        let out = filter_data(&points, Interval::new(40.0, 60.0), Some(0.0));
        let kept: Vec<f64> = out.iter().map(|p| p.position).collect();
        assert_eq!(kept, vec![40.0, 50.0, 60.0]);
    }

    #[test]
    fn merge_averages_secondary_up_to_each_breakpoint() {
        let primary = vec![PlotPoint::new(10.0, 1.0), PlotPoint::new(20.0, 2.0)];
        let secondary = vec![
            PlotPoint::new(10.0, 4.0),
            PlotPoint::new(12.0, 6.0),
            PlotPoint::new(18.0, 8.0),
        ];
        let out = merge_series(&primary, &secondary);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].secondary, Some(4.0));
        assert_eq!(out[1].secondary, Some(7.0));
        assert_eq!(out[0].primary, Some(1.0));
    }

    #[test]
    fn merge_pads_leading_secondary() {
        let primary = vec![PlotPoint::new(10.0, 1.0)];
        let secondary = vec![PlotPoint::new(2.0, 4.0), PlotPoint::new(10.0, 6.0)];
        let out = merge_series(&primary, &secondary);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position, 2.0);
        assert_eq!(out[0].primary, None);
        assert_eq!(out[0].secondary, Some(4.0));
        assert_eq!(out[1].secondary, Some(6.0));
    }

    #[test]
    fn merge_gap_in_secondary_blanks_that_row() {
        let primary = vec![PlotPoint::new(10.0, 1.0), PlotPoint::new(20.0, 2.0)];
        let secondary = vec![
            PlotPoint::new(12.0, 4.0),
            PlotPoint::gap(15.0),
            PlotPoint::new(18.0, 6.0),
        ];
        let out = merge_series(&primary, &secondary);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].secondary, None);
        assert_eq!(out[1].primary, Some(2.0));
    }

    #[test]
    fn merge_appends_trailing_secondary() {
        let primary = vec![PlotPoint::new(10.0, 1.0)];
        let secondary = vec![PlotPoint::new(20.0, 7.0), PlotPoint::gap(30.0)];
        let out = merge_series(&primary, &secondary);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].position, 20.0);
        assert_eq!(out[1].primary, None);
        assert_eq!(out[1].secondary, Some(7.0));
    }

    #[test]
    fn merge_never_emits_double_none() {
        let primary = vec![PlotPoint::gap(10.0)];
        let secondary: Vec<PlotPoint> = Vec::new();
        assert!(merge_series(&primary, &secondary).is_empty());
    }

    #[test]
    fn continuous_query_picks_nearest_with_left_tie() {
        let points = vec![
            PlotPoint::new(0.0, 1.0),
            PlotPoint::new(10.0, 2.0),
            PlotPoint::new(20.0, 3.0),
        ];
        assert_eq!(query_continuous(&points, 4.0), Some(1.0));
        assert_eq!(query_continuous(&points, 5.0), Some(1.0));
        assert_eq!(query_continuous(&points, 6.0), Some(2.0));
        assert_eq!(query_continuous(&points, -99.0), Some(1.0));
        assert_eq!(query_continuous(&points, 99.0), Some(3.0));
        assert_eq!(query_continuous(&[], 0.0), None);
    }

    #[test]
    fn continuous_query_skips_gap() {
        let points = vec![PlotPoint::new(0.0, 1.0), PlotPoint::gap(10.0)];
        assert_eq!(query_continuous(&points, 9.0), None);
    }

    #[test]
    fn point_query_respects_threshold() {
        let points = vec![PlotPoint::new(0.0, 1.0), PlotPoint::new(10.0, 2.0)];
        assert_eq!(query_point(&points, 9.0, Some(2.0)), Some(2.0));
        assert_eq!(query_point(&points, 5.0, Some(2.0)), None);
        assert_eq!(query_point(&points, 5.0, None), Some(1.0));
    }

    #[test]
    fn zone_query_returns_the_containing_interval_value() {
        let points = vec![
            PlotPoint::new(0.0, 1.0),
            PlotPoint::new(10.0, 2.0),
            PlotPoint::new(20.0, 3.0),
        ];
        assert_eq!(query_zone(&points, 5.0), Some(1.0));
        // Shared boundary belongs to the earlier zone.
        assert_eq!(query_zone(&points, 10.0), Some(1.0));
        assert_eq!(query_zone(&points, 15.0), Some(2.0));
        // The final position still falls inside the last zone.
        assert_eq!(query_zone(&points, 20.0), Some(2.0));
        assert_eq!(query_zone(&points, 25.0), None);
        assert_eq!(query_zone(&points, -1.0), None);
    }

    #[test]
    fn zone_query_gap_zone_yields_none() {
        let points = vec![
            PlotPoint::new(0.0, 1.0),
            PlotPoint::gap(10.0),
            PlotPoint::new(20.0, 3.0),
        ];
        assert_eq!(query_zone(&points, 5.0), Some(1.0));
        assert_eq!(query_zone(&points, 15.0), None);
    }
}
