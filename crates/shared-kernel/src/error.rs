// crates/shared-kernel/src/error.rs
use std::fmt;

use thiserror::Error;

/// Which argument of an `enforce_range` call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandRole {
    Min,
    Max,
    Value,
}

impl OperandRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Value => "value",
        }
    }

    /// Bounds accept `null` as the unbounded sentinel, values do not.
    pub const fn accepts_null(self) -> bool {
        !matches!(self, Self::Value)
    }
}

impl fmt::Display for OperandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of [`EnforceRangeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operand is not null (where allowed) and not a number.
    Type,
    /// The bounds are numbers but `min > max`.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Type => "TypeError",
            Self::Range => "RangeError",
        })
    }
}

/// Root error type shared across the workspace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnforceRangeError {
    #[error("{operand} must be {expected}, got {found}")]
    InvalidType {
        operand: OperandRole,
        expected: &'static str,
        found: String,
    },

    #[error("{operand} must not be NaN")]
    NotANumber { operand: OperandRole },

    #[error("min ({min}) must be less than or equal to max ({max})")]
    InvertedRange { min: f64, max: f64 },
}

impl EnforceRangeError {
    pub fn invalid_type(operand: OperandRole, found: impl Into<String>) -> Self {
        let expected = if operand.accepts_null() {
            "null or a number"
        } else {
            "a number"
        };
        Self::InvalidType {
            operand,
            expected,
            found: found.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } | Self::NotANumber { .. } => ErrorKind::Type,
            Self::InvertedRange { .. } => ErrorKind::Range,
        }
    }

    /// The offending operand, if the error concerns a single one.
    pub const fn operand(&self) -> Option<OperandRole> {
        match self {
            Self::InvalidType { operand, .. } | Self::NotANumber { operand } => Some(*operand),
            Self::InvertedRange { .. } => None,
        }
    }

    #[inline]
    pub const fn is_type_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Type)
    }

    #[inline]
    pub const fn is_range_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Range)
    }
}

pub type Result<T> = std::result::Result<T, EnforceRangeError>;
