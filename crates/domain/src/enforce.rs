// crates/domain/src/enforce.rs
//! The `enforce_range` operations: direct, curried and variadic.

use enforce_range_shared_kernel::{Operand, Result};

use crate::value_objects::ClampRange;

/// Clamp `value` into `[min, max]`.
///
/// `min` and `max` may be null (unbounded on that side), numbers, or numeric
/// strings. `value` may be a number or a numeric string but not null.
///
/// # Errors
/// Returns a type error for an operand that cannot be coerced (checked in
/// the order `min`, `max`, `value`), or a range error if `min > max`.
pub fn enforce_range(
    min: impl Into<Operand>,
    max: impl Into<Operand>,
    value: impl Into<Operand>,
) -> Result<f64> {
    range_enforcer(min, max)?.apply(value)
}

/// Validate the bounds now and return a functor that clamps values later.
///
/// # Errors
/// Same bound errors as [`enforce_range`].
pub fn range_enforcer(min: impl Into<Operand>, max: impl Into<Operand>) -> Result<RangeEnforcer> {
    ClampRange::from_operands(&min.into(), &max.into()).map(RangeEnforcer::from)
}

/// The curried half of `enforce_range`: validated bounds awaiting a value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeEnforcer {
    range: ClampRange,
}

impl RangeEnforcer {
    #[inline]
    pub const fn range(&self) -> ClampRange {
        self.range
    }

    /// # Errors
    /// Returns a type error if `value` is null, NaN or not coercible.
    pub fn apply(&self, value: impl Into<Operand>) -> Result<f64> {
        self.range.clamp_operand(&value.into())
    }

    pub fn into_fn(self) -> impl Fn(Operand) -> Result<f64> + Copy {
        move |value| self.range.clamp_operand(&value)
    }
}

impl From<ClampRange> for RangeEnforcer {
    fn from(range: ClampRange) -> Self {
        Self { range }
    }
}

/// Outcome of [`invoke`]: a number when a value was supplied, otherwise the curried form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enforced {
    Value(f64),
    Curried(RangeEnforcer),
}

impl Enforced {
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Curried(_) => None,
        }
    }

    pub const fn enforcer(&self) -> Option<RangeEnforcer> {
        match self {
            Self::Curried(e) => Some(*e),
            Self::Value(_) => None,
        }
    }
}

/// Call `enforce_range` with a loosely-typed argument list.
///
/// Absent positions count as [`Operand::Missing`], so zero or one argument is
/// a type error on the first missing bound. With no value (or a missing one)
/// the curried form is returned. Arguments past the third are ignored.
///
/// # Errors
/// Same as [`enforce_range`].
pub fn invoke(args: &[Operand]) -> Result<Enforced> {
    const MISSING: &Operand = &Operand::Missing;
    let min = args.first().unwrap_or(MISSING);
    let max = args.get(1).unwrap_or(MISSING);
    let enforcer = RangeEnforcer::from(ClampRange::from_operands(min, max)?);

    match args.get(2) {
        None | Some(Operand::Missing) => Ok(Enforced::Curried(enforcer)),
        Some(value) => enforcer.range.clamp_operand(value).map(Enforced::Value),
    }
}
