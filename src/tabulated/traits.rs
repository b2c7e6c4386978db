use crate::tabulated::errors::PointError;
use crate::tabulated::point::FunctionPoint;
use crate::tabulated::report::EvaluationReport;
use crate::tabulated::storage::Storage;

/// Capability set shared by every storage strategy.
///
/// Samples stay in strictly ascending x-order with at least two points.
/// Every fallible method either succeeds completely or returns an error
/// and leaves the function untouched.
pub trait TabulatedFunction {
    fn storage(&self) -> Storage;

    /// x of the first sample
    fn left_domain_border(&self) -> f64;

    /// x of the last sample
    fn right_domain_border(&self) -> f64;

    /// Value at `x`.
    ///
    /// Exact sample `y` when `x` is within the tolerance of a sample,
    /// linear interpolation between the bracketing samples otherwise.
    /// NaN outside `[left, right]`; never extrapolates.
    fn function_value(&self, x: f64) -> f64;

    fn points_count(&self) -> usize;

    /// Copy of the sample at `index`.
    fn point(&self, index: usize) -> Result<FunctionPoint, PointError>;

    fn point_x(&self, index: usize) -> Result<f64, PointError> {
        self.point(index).map(|p| p.x())
    }

    fn point_y(&self, index: usize) -> Result<f64, PointError> {
        self.point(index).map(|p| p.y())
    }

    /// Replaces both coordinates. `point.x` must lie strictly between the
    /// current neighbors of `index`.
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), PointError>;

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), PointError>;

    /// No ordering check, y is free.
    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), PointError>;

    /// Inserts at the first index whose x is not less than `point.x`.
    /// Rejects an x within the tolerance of an existing sample.
    fn add_point(&mut self, point: FunctionPoint) -> Result<(), PointError>;

    /// Removes the sample at `index`; refused while fewer than 3 remain.
    fn delete_point(&mut self, index: usize) -> Result<(), PointError>;

    /// Copies of all samples in ascending x-order.
    fn points(&self) -> Vec<FunctionPoint>;

    // provided

    fn storage_name(&self) -> &'static str {
        self.storage().storage_name()
    }

    fn domain(&self) -> (f64, f64) {
        (self.left_domain_border(), self.right_domain_border())
    }

    /// evaluates many points
    #[inline]
    fn function_values(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.function_value(xq)).collect()
    }

    fn evaluate(&self, xs: &[f64]) -> EvaluationReport {
        let mut report = EvaluationReport::new(self.storage(), self.points_count(), xs.len());
        let (left, right) = self.domain();

        for &xq in xs {
            if !(left..=right).contains(&xq) {
                report.n_outside += 1;
            }
            report.evaluated.push(self.function_value(xq));
        }
        report
    }
}
