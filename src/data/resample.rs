//! Downsampling of ordered curve data for dense zoom levels.

use tracing::trace;

use super::PlotPoint;

/// Bucket reduction strategy used by [`resample`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reducer {
    /// One point per bucket carrying the bucket mean.
    #[default]
    Average,
    /// Two points per bucket, the bucket minimum at its first position
    /// and the bucket maximum at its last, preserving spikes that
    /// averaging would flatten.
    MinMax,
}

/// Inputs shorter than this are returned unreduced.
pub const MIN_INPUT_LEN: usize = 100;

/// Ratios at or below this are returned unreduced.
pub const MIN_RATIO: f64 = 2.0;

/// Reduce `points` by roughly `ratio`, keeping gaps where they are.
///
/// `ratio` is input samples per output sample. Gap points (non-finite
/// values) act as run separators and survive in place, so a reduced curve
/// still breaks where the source data breaks. The first and last real
/// samples of the input are always kept so the curve's endpoints do not
/// move.
pub fn resample(points: &[PlotPoint], ratio: f64, reducer: Reducer) -> Vec<PlotPoint> {
    if points.len() < MIN_INPUT_LEN || !ratio.is_finite() || ratio <= MIN_RATIO {
        return points.to_vec();
    }
    let width = ratio.floor() as usize;

    let mut out = Vec::with_capacity(points.len() / width + 2);
    let mut run_start = 0;
    for (i, point) in points.iter().enumerate() {
        if point.is_gap() {
            reduce_run(&points[run_start..i], width, reducer, &mut out);
            out.push(*point);
            run_start = i + 1;
        }
    }
    reduce_run(&points[run_start..], width, reducer, &mut out);

    // Pin the curve endpoints. Position alone is not enough: the MinMax
    // reducer can emit a bucket extreme at the first or last position
    // with a different value.
    if let Some(first) = points.first() {
        if !first.is_gap() && out.first() != Some(first) {
            out.insert(0, *first);
        }
    }
    if let Some(last) = points.last() {
        if !last.is_gap() && out.last() != Some(last) {
            out.push(*last);
        }
    }

    trace!(
        input = points.len(),
        output = out.len(),
        ratio,
        "resampled curve data"
    );
    out
}

// Reduce one gap-free run bucket by bucket.
fn reduce_run(run: &[PlotPoint], width: usize, reducer: Reducer, out: &mut Vec<PlotPoint>) {
    for bucket in run.chunks(width) {
        if bucket.is_empty() {
            continue;
        }
        match reducer {
            Reducer::Average => {
                let position = bucket.iter().map(|p| p.position).sum::<f64>() / bucket.len() as f64;
                let value = bucket.iter().map(|p| p.value).sum::<f64>() / bucket.len() as f64;
                out.push(PlotPoint::new(position, value));
            }
            Reducer::MinMax => {
                let mut min = bucket[0].value;
                let mut max = bucket[0].value;
                for p in bucket {
                    min = min.min(p.value);
                    max = max.max(p.value);
                }
                out.push(PlotPoint::new(bucket[0].position, min));
                if bucket.len() > 1 {
                    out.push(PlotPoint::new(bucket[bucket.len() - 1].position, max));
                }
            }
        }
    }
}
