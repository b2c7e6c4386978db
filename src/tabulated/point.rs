//! Sample point of a tabulated function.

use std::fmt;


/// A single `(x, y)` sample.
///
/// `FunctionPoint` is `Copy`: every query hands out a fresh value and every
/// mutator takes one by value, so a caller never holds a reference into a
/// function's storage.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FunctionPoint {
    x: f64,
    y: f64,
}

impl FunctionPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline] pub const fn x(&self) -> f64 { self.x }
    #[inline] pub const fn y(&self) -> f64 { self.y }

    /// Same point with `x` replaced.
    #[must_use]
    pub const fn with_x(self, x: f64) -> Self { Self { x, ..self } }

    /// Same point with `y` replaced.
    #[must_use]
    pub const fn with_y(self, y: f64) -> Self { Self { y, ..self } }

    pub(crate) fn set_x(&mut self, x: f64) { self.x = x; }
    pub(crate) fn set_y(&mut self, y: f64) { self.y = y; }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}


/// Line through `p0` and `p1` evaluated at `xq`.
#[inline]
pub(crate) fn lerp(p0: FunctionPoint, p1: FunctionPoint, xq: f64) -> f64 {
    p0.y + (p1.y - p0.y) * (xq - p0.x) / (p1.x - p0.x)
}
