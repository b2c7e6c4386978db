pub mod config;
pub mod errors;
pub mod point;
pub mod report;
pub mod storage;
pub mod traits;
pub use errors::{ConfigError, ConstructionError, ErrorKind, PointError, TabulatedError};
pub use point::FunctionPoint;
pub use traits::TabulatedFunction;

pub mod array;
pub mod linked_list;
pub use array::ArrayTabulatedFunction;
pub use linked_list::LinkedListTabulatedFunction;
