//! Clamp a number into an inclusive `[min, max]` range.
//!
//! Bounds may be `null` (unbounded on that side), numbers, infinities or
//! numeric strings; the value may be a number or numeric string. Leaving the
//! value out gives back a [`RangeEnforcer`] that applies the validated bounds
//! later.
//!
//! ```
//! use enforce_range::{enforce_range, range_enforcer};
//!
//! assert_eq!(enforce_range(-10, 10, 11), Ok(10.0));
//! assert_eq!(enforce_range("5", "6", "7"), Ok(6.0));
//! assert_eq!(enforce_range(0, (), 100), Ok(100.0));
//!
//! let clamp = range_enforcer(-10, 10)?;
//! assert_eq!(clamp.apply(-11)?, -10.0);
//! # Ok::<(), enforce_range::EnforceRangeError>(())
//! ```

pub use enforce_range_domain::{ClampRange, Enforced, RangeEnforcer, enforce_range, invoke, range_enforcer};
pub use enforce_range_shared_kernel::{EnforceRangeError, ErrorKind, Operand, OperandRole, Result, parse_numeric};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
