//! Tabulated functions.
//!
//! A real function known only at a strictly increasing set of sample
//! points and queried elsewhere by linear interpolation. Two storage
//! strategies share the [`tabulated::TabulatedFunction`] contract:
//!
//! - [`tabulated::array::ArrayTabulatedFunction`]       contiguous buffer, binary search
//! - [`tabulated::linked_list::LinkedListTabulatedFunction`] circular list with a sentinel

pub mod tabulated;
