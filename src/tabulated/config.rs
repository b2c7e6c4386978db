//! Shared configuration for tabulated functions.
//!
//! Provides [`TabulatedCfg`] with the default equality tolerance
//! [`DEFAULT_X_TOL`] and the default array growth increment
//! [`DEFAULT_GROWTH`]. Shared by both storage strategies.
//!
//! [`TabulatedCfg`] fields
//! - `x_tol`  : two x-values closer than this are the same sample
//! - `growth` : slots added whenever the array buffer runs full
//!
//! [`TabulatedCfg::new`] initializes configuration with the defaults.
//!
//! Also hosts the validation helpers every strategy runs before touching
//! its storage, so both enforce identical failure behavior.

use crate::tabulated::errors::{ConfigError, ConstructionError, PointError};

pub const DEFAULT_X_TOL : f64   = 1e-10;
pub const DEFAULT_GROWTH: usize = 10;


/// Tabulated function configuration
///
/// # Construction
/// - Use [`TabulatedCfg::new`] then optional setters.
///
/// # Validation
/// - `x_tol`  finite and > 0
/// - `growth` >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TabulatedCfg {
    x_tol : f64,
    growth: usize,
}

impl TabulatedCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    // getters
    #[inline] pub fn x_tol(&self)  -> f64   { self.x_tol }
    #[inline] pub fn growth(&self) -> usize { self.growth }

    // setters
    pub fn set_x_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    pub fn set_growth(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidGrowth { got: v });
        }
        self.growth = v;
        Ok(self)
    }

    /// `true` if `a` and `b` name the same sample under `x_tol`.
    #[inline]
    pub(crate) fn same_x(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.x_tol
    }
}

impl Default for TabulatedCfg {
    fn default() -> Self {
        Self {
            x_tol : DEFAULT_X_TOL,
            growth: DEFAULT_GROWTH,
        }
    }
}


/// Uniformly spaced x-values over `[left, right]`.
///
/// # Errors
/// - [`ConstructionError::InvalidDomain`] if a bound is non-finite or `left >= right`
/// - [`ConstructionError::InsufficientPoints`] if `n < 2`
/// - [`ConstructionError::SpacingBelowTolerance`] if adjacent samples would
///   be the same sample under `cfg.x_tol()`
pub(crate) fn uniform_grid(
    left : f64,
    right: f64,
    n    : usize,
    cfg  : &TabulatedCfg,
) -> Result<impl Iterator<Item = f64>, ConstructionError> {
    if !(left.is_finite() && right.is_finite()) || left >= right {
        return Err(ConstructionError::InvalidDomain { left, right });
    }
    if n < 2 {
        return Err(ConstructionError::InsufficientPoints { got: n });
    }

    let step = (right - left) / (n - 1) as f64;
    if step <= cfg.x_tol() {
        return Err(ConstructionError::SpacingBelowTolerance { step, x_tol: cfg.x_tol() });
    }
    Ok((0..n).map(move |i| left + i as f64 * step))
}


#[inline]
pub(crate) fn check_index(index: usize, count: usize) -> Result<(), PointError> {
    if index >= count {
        return Err(PointError::IndexOutOfBounds { index, count });
    }
    Ok(())
}


/// NaN and infinities have no place in an ascending sequence.
#[inline]
pub(crate) fn check_finite(x: f64) -> Result<(), PointError> {
    if !x.is_finite() {
        return Err(PointError::NonFiniteX { x });
    }
    Ok(())
}


/// Checks that `x` lies strictly between its would-be neighbors and is not
/// the same sample as either of them under `cfg.x_tol()`.
///
/// A missing neighbor (boundary index) leaves that side open.
pub(crate) fn check_between(
    x    : f64,
    lower: Option<f64>,
    upper: Option<f64>,
    cfg  : &TabulatedCfg,
) -> Result<(), PointError> {
    check_finite(x)?;

    let lo = lower.unwrap_or(f64::NEG_INFINITY);
    let hi = upper.unwrap_or(f64::INFINITY);
    if x <= lo || x >= hi {
        return Err(PointError::OrderViolation { x, lower: lo, upper: hi });
    }

    if let Some(existing) = lower.into_iter().chain(upper).find(|&xi| cfg.same_x(x, xi)) {
        return Err(PointError::DuplicateX { x, existing });
    }
    Ok(())
}
