// crates/shared-kernel/src/value_objects/operand.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::numeric::parse_numeric;
use crate::error::{EnforceRangeError, OperandRole, Result};

/// A dynamically-typed argument to `enforce_range`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// The argument was not supplied.
    #[default]
    Missing,
    Null,
    Number(f64),
    Text(String),
    /// Any other dynamic kind, e.g. a boolean or an array.
    Unsupported(&'static str),
}

impl Operand {
    /// Coerce to a number, with `Ok(None)` for `null`. NaN is rejected.
    fn to_number(&self, role: OperandRole) -> Result<Option<f64>> {
        let number = match self {
            Self::Null => return Ok(None),
            Self::Number(n) => *n,
            Self::Text(text) => parse_numeric(text).ok_or_else(|| reject(role, self))?,
            Self::Missing | Self::Unsupported(_) => return Err(reject(role, self)),
        };
        if number.is_nan() {
            log::debug!("rejecting {role}: NaN");
            return Err(EnforceRangeError::NotANumber { operand: role });
        }
        Ok(Some(number))
    }

    /// Coerce the lower bound; `null` means negative infinity.
    pub fn coerce_min(&self) -> Result<f64> {
        Ok(self.to_number(OperandRole::Min)?.unwrap_or(f64::NEG_INFINITY))
    }

    /// Coerce the upper bound; `null` means positive infinity.
    pub fn coerce_max(&self) -> Result<f64> {
        Ok(self.to_number(OperandRole::Max)?.unwrap_or(f64::INFINITY))
    }

    /// Coerce the value to clamp. Unlike the bounds, `null` is rejected.
    pub fn coerce_value(&self) -> Result<f64> {
        self.to_number(OperandRole::Value)?
            .ok_or_else(|| reject(OperandRole::Value, self))
    }
}

fn reject(role: OperandRole, operand: &Operand) -> EnforceRangeError {
    log::debug!("rejecting {role}: {operand}");
    EnforceRangeError::invalid_type(role, operand.to_string())
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("nothing"),
            Self::Null => f.write_str("null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Unsupported(kind) => f.write_str(kind),
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Missing | Self::Null | Self::Unsupported(_) => serializer.serialize_none(),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

// Any JSON value is accepted; kinds that cannot be coerced surface later as type errors.
impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Number(n) => n.as_f64().map_or(Self::Unsupported("number"), Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Bool(_) => Self::Unsupported("boolean"),
            Value::Array(_) => Self::Unsupported("array"),
            Value::Object(_) => Self::Unsupported("object"),
        }
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Operand {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

macro_rules! impl_from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Self::Number(f64::from(n))
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[allow(clippy::cast_precision_loss)]
                fn from(n: $t) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_wide_int!(i64, u64, i128, u128, isize, usize);

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<()> for Operand {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
