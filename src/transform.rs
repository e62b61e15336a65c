//! Pan/zoom gesture state shared with the rendering layer.

/// Screen axis a gesture runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal screen axis.
    X,
    /// Vertical screen axis.
    Y,
}

/// Cumulative zoom/pan state produced by a gesture layer.
///
/// `k` is a scale multiplier relative to the handler's current working
/// scale; `x` and `y` are pixel translations along the two screen axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    /// Scale multiplier.
    pub k: f64,
    /// Pixel translation along the horizontal axis.
    pub x: f64,
    /// Pixel translation along the vertical axis.
    pub y: f64,
}

impl ZoomTransform {
    /// Transform that leaves pixel positions unchanged.
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Create a transform from a scale factor and pixel translations.
    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    /// Check whether applying the transform is a no-op.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Apply the transform to a horizontal pixel position.
    pub fn apply_x(&self, px: f64) -> f64 {
        px * self.k + self.x
    }

    /// Apply the transform to a vertical pixel position.
    pub fn apply_y(&self, px: f64) -> f64 {
        px * self.k + self.y
    }

    /// Undo the transform for a horizontal pixel position.
    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.x) / self.k
    }

    /// Undo the transform for a vertical pixel position.
    pub fn invert_y(&self, px: f64) -> f64 {
        (px - self.y) / self.k
    }

    /// Apply the transform along the given axis.
    pub fn apply(&self, px: f64, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.apply_x(px),
            Axis::Y => self.apply_y(px),
        }
    }

    /// Undo the transform along the given axis.
    pub fn invert(&self, px: f64, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.invert_x(px),
            Axis::Y => self.invert_y(px),
        }
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
