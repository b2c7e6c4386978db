//! Tabulated function error types.
//!
//! ┌ [`ConstructionError`] : rejected at construction, no object produced
//! │   ├ invalid domain bounds (left >= right, or non-finite)
//! │   ├ fewer than 2 sample points
//! │   └ uniform spacing not wider than the tolerance ε
//! │
//! ├ [`PointError`]        : rejected query or mutation, instance unchanged
//! │   ├ index outside [0, count)
//! │   ├ x breaks strict ascending order or lands within ε of a neighbor
//! │   └ delete would leave fewer than 2 points
//! │
//! ├ [`ConfigError`]       : invalid [`crate::tabulated::config::TabulatedCfg`] setting
//! │
//! └ [`TabulatedError`]    : umbrella over all of the above

use thiserror::Error;


/// Coarse classification shared by every error in this module.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Construction,
    Index,
    Order,
    Underflow,
    Config,
}


/// Construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConstructionError {
    #[error("invalid domain: bounds must be finite with left < right. got [{left}, {right}]")]
    InvalidDomain { left: f64, right: f64 },

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("sample spacing {step} is within x_tol {x_tol}: adjacent samples would coincide")]
    SpacingBelowTolerance { step: f64, x_tol: f64 },
}


/// Errors raised by indexed access and by order-preserving mutation.
///
/// For [`PointError::OrderViolation`] the missing neighbor of a boundary
/// index is reported as `-inf` (`lower`) or `+inf` (`upper`).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PointError {
    #[error("index {index} out of bounds for {count} points")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("duplicate x-value: {x} is within tolerance of existing sample {existing}")]
    DuplicateX { x: f64, existing: f64 },

    #[error("order violation: x = {x} must lie strictly inside ({lower}, {upper})")]
    OrderViolation { x: f64, lower: f64, upper: f64 },

    #[error("non-finite x-value {x} cannot be ordered")]
    NonFiniteX { x: f64 },

    #[error("cannot delete a point: {count} points left, need at least 3")]
    Underflow { count: usize },
}


/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid x_tol {got}: must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid growth increment {got}: must be >= 1")]
    InvalidGrowth { got: usize },
}


/// Any error produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TabulatedError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Point(#[from] PointError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}


impl ConstructionError {
    pub fn kind(&self) -> ErrorKind { ErrorKind::Construction }
}

impl PointError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PointError::IndexOutOfBounds { .. } => ErrorKind::Index,
            PointError::DuplicateX { .. }
            | PointError::OrderViolation { .. }
            | PointError::NonFiniteX { .. }     => ErrorKind::Order,
            PointError::Underflow { .. }        => ErrorKind::Underflow,
        }
    }
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind { ErrorKind::Config }
}

impl TabulatedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TabulatedError::Construction(e) => e.kind(),
            TabulatedError::Point(e)        => e.kind(),
            TabulatedError::Config(e)       => e.kind(),
        }
    }
}
