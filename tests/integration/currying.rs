//! The curried and variadic call shapes.

use enforce_range::{ClampRange, Enforced, Operand, enforce_range, invoke, range_enforcer};
use serde_json::json;

#[test]
fn curried_form_matches_direct_call() {
    let enforcer = range_enforcer(-10, 10).expect("valid bounds");
    for value in [-11.0, -10.0, 0.0, 10.0, 11.0] {
        assert_eq!(enforcer.apply(value), enforce_range(-10, 10, value));
    }
    assert_eq!(enforcer.range(), ClampRange::new(Some(-10.0), Some(10.0)).unwrap());
}

#[test]
fn curried_closure_is_reusable() {
    let clamp = range_enforcer("0", ()).expect("valid bounds").into_fn();
    let results: Vec<_> = ["-5", "5", "Infinity"].into_iter().map(|v| clamp(v.into())).collect();
    assert_eq!(results, vec![Ok(0.0), Ok(5.0), Ok(f64::INFINITY)]);
}

#[test]
fn zero_arguments_is_a_type_error() {
    assert!(invoke(&[]).unwrap_err().is_type_error());
}

#[test]
fn json_arguments_drive_the_variadic_call() {
    let args: Vec<Operand> = serde_json::from_value(json!(["5", "6", "7"])).unwrap();
    assert_eq!(invoke(&args).unwrap(), Enforced::Value(6.0));

    let args: Vec<Operand> = serde_json::from_value(json!([0, null])).unwrap();
    let enforcer = invoke(&args).unwrap().enforcer().expect("curried");
    assert_eq!(enforcer.apply(100), Ok(100.0));

    let args: Vec<Operand> = serde_json::from_value(json!([-10, 10, true])).unwrap();
    assert!(invoke(&args).unwrap_err().is_type_error());
}
