// crates/domain/src/value_objects/clamp_range.rs
use std::fmt;

use enforce_range_shared_kernel::{EnforceRangeError, Operand, Result};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range with infinite bounds standing in for "unbounded".
///
/// Both bounds are NaN-free and `min <= max` always holds. Serialized
/// infinite bounds come out as `null`, which deserializes back to unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClampRange")]
pub struct ClampRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawClampRange {
    min: Operand,
    max: Operand,
}

impl TryFrom<RawClampRange> for ClampRange {
    type Error = EnforceRangeError;

    fn try_from(raw: RawClampRange) -> Result<Self> {
        Self::from_operands(&raw.min, &raw.max)
    }
}

impl Default for ClampRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ClampRange {
    pub const fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Build from already-numeric bounds, `None` meaning unbounded on that side.
    ///
    /// # Errors
    /// Returns a type error if a bound is NaN, or a range error if `min > max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self> {
        Self::from_operands(&Operand::from(min), &Operand::from(max))
    }

    /// Coerce and validate both bounds, `min` first.
    ///
    /// # Errors
    /// Returns a type error if either bound is neither null nor coercible to a
    /// number (or is NaN), or a range error if `min > max`.
    pub fn from_operands(min: &Operand, max: &Operand) -> Result<Self> {
        let min = min.coerce_min()?;
        let max = max.coerce_max()?;
        if min > max {
            log::debug!("rejecting inverted range: min {min} > max {max}");
            return Err(EnforceRangeError::InvertedRange { min, max });
        }
        log::debug!("validated range [{min}, {max}]");
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn is_bounded_below(&self) -> bool {
        self.min != f64::NEG_INFINITY
    }

    #[inline]
    pub fn is_bounded_above(&self) -> bool {
        self.max != f64::INFINITY
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp an already-validated number. NaN passes through unchanged.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Coerce `value` and clamp it.
    ///
    /// # Errors
    /// Returns a type error if `value` is null, NaN or not coercible.
    pub fn clamp_operand(&self, value: &Operand) -> Result<f64> {
        let number = value.coerce_value()?;
        let clamped = self.clamp(number);
        log::trace!("clamped {number} into {self} -> {clamped}");
        Ok(clamped)
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: f64) -> fmt::Result {
    if bound == f64::INFINITY {
        f.write_str("Infinity")
    } else if bound == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else {
        write!(f, "{bound}")
    }
}

impl fmt::Display for ClampRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_bound(f, self.min)?;
        f.write_str(", ")?;
        write_bound(f, self.max)?;
        f.write_str("]")
    }
}
