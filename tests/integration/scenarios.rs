//! Behaviour of the direct three-argument call.

use enforce_range::{EnforceRangeError, OperandRole, enforce_range};

#[test]
fn returns_min_if_number_is_less_than_min() {
    assert_eq!(enforce_range(-10, 10, -11), Ok(-10.0));
}

#[test]
fn returns_max_if_number_is_greater_than_max() {
    assert_eq!(enforce_range(-10, 10, 11), Ok(10.0));
}

#[test]
fn returns_number_if_within_range() {
    assert_eq!(enforce_range(-10, 10, 5), Ok(5.0));
}

#[test]
fn supports_floats() {
    assert_eq!(enforce_range(-1.1, 1.1, 1.2), Ok(1.1));
}

#[test]
fn supports_string_numbers() {
    assert_eq!(enforce_range("5", "6", "7"), Ok(6.0));
}

#[test]
fn supports_equal_min_and_max() {
    assert_eq!(enforce_range(99, 99, 50), Ok(99.0));
}

#[test]
fn null_and_infinite_bounds_are_unbounded() {
    assert_eq!(enforce_range(0, (), 100), Ok(100.0));
    assert_eq!(enforce_range(0, f64::INFINITY, 100), Ok(100.0));
    assert_eq!(enforce_range((), 0, -100), Ok(-100.0));
    assert_eq!(enforce_range(f64::NEG_INFINITY, 0, -100), Ok(-100.0));
    assert_eq!(enforce_range((), (), 123), Ok(123.0));
    assert_eq!(enforce_range(f64::NEG_INFINITY, f64::INFINITY, 123), Ok(123.0));
    assert_eq!(enforce_range(None::<f64>, Some(0.0), -100), Ok(-100.0));
}

#[test]
fn non_numeric_or_nan_bounds_are_type_errors() {
    let cases = [
        (enforce_range("not a number", 10, 0), OperandRole::Min),
        (enforce_range(f64::NAN, 10, 0), OperandRole::Min),
        (enforce_range(-10, "not a number", 0), OperandRole::Max),
        (enforce_range(-10, f64::NAN, 0), OperandRole::Max),
    ];
    for (result, role) in cases {
        let err = result.unwrap_err();
        assert!(err.is_type_error(), "{err}");
        assert_eq!(err.operand(), Some(role));
    }
}

#[test]
fn null_or_nan_value_is_a_type_error() {
    assert!(enforce_range(-10, 10, ()).unwrap_err().is_type_error());
    assert_eq!(
        enforce_range(-10, 10, f64::NAN),
        Err(EnforceRangeError::NotANumber { operand: OperandRole::Value })
    );
}

#[test]
fn min_greater_than_max_is_a_range_error() {
    assert_eq!(
        enforce_range(10, -10, 0),
        Err(EnforceRangeError::InvertedRange { min: 10.0, max: -10.0 })
    );
    assert!(enforce_range(f64::INFINITY, 0, 0).unwrap_err().is_range_error());
}
