//! Array-backed tabulated function
//!
//! Samples live in one contiguous buffer kept sorted by x, so lookup is a
//! [binary search](https://en.wikipedia.org/wiki/Binary_search_algorithm)
//! in `O(log n)`. Insertion and deletion shift the trailing samples, `O(n)`.
//!
//! # Growth
//! The buffer is allocated with [`TabulatedCfg::growth`] spare slots. When
//! an insertion finds it full, it grows by exactly that many slots again.
//! Growth is a fixed increment, not geometric: `n` insertions from a full
//! buffer cost `O(n² / growth)` element copies in the worst case.

use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::tabulated::config::{
    check_between, check_finite, check_index, uniform_grid, TabulatedCfg,
};
use crate::tabulated::errors::{ConstructionError, PointError};
use crate::tabulated::point::{lerp, FunctionPoint};
use crate::tabulated::storage::Storage;
use crate::tabulated::traits::TabulatedFunction;


/// Tabulated function over a sorted contiguous buffer.
///
/// # Construction
/// - [`ArrayTabulatedFunction::new`]         : `count` uniform samples, `y = 0`
/// - [`ArrayTabulatedFunction::from_values`] : uniform samples carrying `values`
///
/// Both have a `_with_cfg` form taking an explicit [`TabulatedCfg`].
#[derive(Debug, Clone)]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>,
    cfg   : TabulatedCfg,
}

impl ArrayTabulatedFunction {
    pub fn new(left: f64, right: f64, count: usize) -> Result<Self, ConstructionError> {
        Self::new_with_cfg(left, right, count, TabulatedCfg::default())
    }

    pub fn new_with_cfg(
        left : f64,
        right: f64,
        count: usize,
        cfg  : TabulatedCfg,
    ) -> Result<Self, ConstructionError> {
        let grid = uniform_grid(left, right, count, &cfg)?;

        let mut points = Vec::with_capacity(count + cfg.growth());
        points.extend(grid.map(|x| FunctionPoint::new(x, 0.0)));

        Ok(Self { points, cfg })
    }

    pub fn from_values(left: f64, right: f64, values: &[f64]) -> Result<Self, ConstructionError> {
        Self::from_values_with_cfg(left, right, values, TabulatedCfg::default())
    }

    pub fn from_values_with_cfg(
        left  : f64,
        right : f64,
        values: &[f64],
        cfg   : TabulatedCfg,
    ) -> Result<Self, ConstructionError> {
        let grid = uniform_grid(left, right, values.len(), &cfg)?;

        let mut points = Vec::with_capacity(values.len() + cfg.growth());
        points.extend(grid.zip(values).map(|(x, &y)| FunctionPoint::new(x, y)));

        Ok(Self { points, cfg })
    }

    pub fn cfg(&self) -> TabulatedCfg { self.cfg }

    /// Slots currently allocated, always `>= points_count()`.
    pub fn capacity(&self) -> usize { self.points.capacity() }

    /// Locates `xq` among the samples.
    ///
    /// - `Ok(i)`  : sample `i` is within `x_tol` of `xq`
    /// - `Err(i)` : no such sample; `i` is the first index whose x is not
    ///   less than `xq`
    fn search(&self, xq: f64) -> Result<usize, usize> {
        let found = self.points.binary_search_by(
            |p| {
                let xi = p.x();
                if xi < xq      { Ordering::Less    }
                else if xi > xq { Ordering::Greater }
                else            { Ordering::Equal   }
            }
        );
        let idx = match found {
            Ok(idx)  => return Ok(idx),
            Err(idx) => idx,
        };

        // a sample within tolerance can only sit next to the insertion point
        if idx < self.points.len() && self.cfg.same_x(self.points[idx].x(), xq) {
            return Ok(idx);
        }
        if idx > 0 && self.cfg.same_x(self.points[idx - 1].x(), xq) {
            return Ok(idx - 1);
        }
        Err(idx)
    }

    // never empty: construction needs 2 samples and deletion stops at 2
    #[inline] fn first(&self) -> FunctionPoint { self.points[0] }
    #[inline] fn last(&self)  -> FunctionPoint { self.points[self.points.len() - 1] }

    fn neighbors(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let lower = index.checked_sub(1).map(|i| self.points[i].x());
        let upper = self.points.get(index + 1).map(|p| p.x());
        (lower, upper)
    }

    fn reserve_slot(&mut self) {
        if self.points.len() == self.points.capacity() {
            self.points.reserve_exact(self.cfg.growth());
            trace!(
                count    = self.points.len(),
                capacity = self.points.capacity(),
                "array buffer grown"
            );
        }
    }
}


impl TabulatedFunction for ArrayTabulatedFunction {
    fn storage(&self) -> Storage { Storage::Array }

    fn left_domain_border(&self) -> f64 {
        self.first().x()
    }

    fn right_domain_border(&self) -> f64 {
        self.last().x()
    }

    fn function_value(&self, x: f64) -> f64 {
        // domain check, also rejects NaN
        if !(x >= self.left_domain_border() && x <= self.right_domain_border()) {
            return f64::NAN;
        }

        match self.search(x) {
            Ok(idx)  => self.points[idx].y(),
            // points[idx - 1].x < x < points[idx].x
            Err(idx) => lerp(self.points[idx - 1], self.points[idx], x),
        }
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, PointError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PointError::IndexOutOfBounds { index, count: self.points.len() })
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), PointError> {
        check_index(index, self.points.len())?;
        let (lower, upper) = self.neighbors(index);
        check_between(point.x(), lower, upper, &self.cfg)
            .inspect_err(|e| debug!(index, error = %e, "set_point rejected"))?;

        self.points[index] = point;
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), PointError> {
        check_index(index, self.points.len())?;
        let (lower, upper) = self.neighbors(index);
        check_between(x, lower, upper, &self.cfg)
            .inspect_err(|e| debug!(index, error = %e, "set_point_x rejected"))?;

        self.points[index].set_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), PointError> {
        check_index(index, self.points.len())?;
        self.points[index].set_y(y);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), PointError> {
        check_finite(point.x())?;

        match self.search(point.x()) {
            Ok(idx) => {
                let err = PointError::DuplicateX { x: point.x(), existing: self.points[idx].x() };
                debug!(error = %err, "add_point rejected");
                Err(err)
            }
            Err(idx) => {
                self.reserve_slot();
                self.points.insert(idx, point);
                debug!(index = idx, x = point.x(), count = self.points.len(), "point added");
                Ok(())
            }
        }
    }

    fn delete_point(&mut self, index: usize) -> Result<(), PointError> {
        let count = self.points.len();
        check_index(index, count)?;
        if count < 3 {
            debug!(index, count, "delete_point rejected");
            return Err(PointError::Underflow { count });
        }

        self.points.remove(index);
        debug!(index, count = self.points.len(), "point deleted");
        Ok(())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.points.clone()
    }
}
