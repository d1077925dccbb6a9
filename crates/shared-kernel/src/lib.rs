// crates/shared-kernel/src/lib.rs
pub use error::{EnforceRangeError, ErrorKind, OperandRole, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{Operand, parse_numeric};
