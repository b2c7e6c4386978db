//! Defines the struct returned by batch evaluation.
//!
//! [`EvaluationReport`] summarizes one call to
//! [`crate::tabulated::TabulatedFunction::evaluate`]: which storage
//! answered, how many samples it held, and the value at each query point.

use crate::tabulated::storage::Storage;

/// Summary of a batch evaluation.
///
/// [`EvaluationReport`]
/// - `storage_name` : backing store that answered (e.g. `"array"`)
/// - `n_points`     : number of samples at evaluation time
/// - `n_evaluated`  : number of query points
/// - `n_outside`    : query points outside the domain (their value is NaN)
/// - `evaluated`    : function value at each query point
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub storage_name: &'static str,
    pub n_points: usize,
    pub n_evaluated: usize,
    pub n_outside: usize,
    pub evaluated: Vec<f64>,
}

impl EvaluationReport {
    pub fn new(storage: Storage, n_points: usize, n_evaluated: usize) -> Self {
        Self {
            storage_name: storage.storage_name(),
            n_points,
            n_evaluated,
            n_outside: 0,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
