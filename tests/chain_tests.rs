//! Unit tests for the Chain fluent wrapper.

use purely::{Chain, Maybe, Raise, ValueAbsent};
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn test_map() {
    assert_eq!(Chain::new(3).map(|x| x + 1).value(), &4);
}

#[rstest]
fn test_then() {
    assert_eq!(Chain::new(3).then(|x: i32| x.to_string()), Chain::new("3".to_string()));
}

#[rstest]
fn test_bit_or_operator() {
    let result = Chain::new(3) | (|x: i32| x * 2) | (|x: i32| x - 1);
    assert_eq!(result, 5);
}

#[rstest]
fn test_map_then_and_operator_are_equivalent() {
    let function = |x: i32| x * 10;
    let by_map = Chain::new(2).map(function);
    let by_then = Chain::new(2).then(function);
    let by_operator = Chain::new(2) | function;

    assert_eq!(by_map, by_then);
    assert_eq!(by_then, by_operator);
}

#[rstest]
fn test_map_does_not_track_absence() {
    let described = Chain::new(None::<i32>).map(|value| format!("{value:?}"));
    assert_eq!(described, "None".to_string());
}

// =============================================================================
// Tap
// =============================================================================

#[rstest]
fn test_tap_keeps_value_and_calls_once() {
    let seen = RefCell::new(Vec::new());
    let chain = Chain::new(3).tap(|value| seen.borrow_mut().push(*value));

    assert_eq!(chain.into_value(), 3);
    assert_eq!(*seen.borrow(), vec![3]);
}

#[rstest]
fn test_tap_between_steps() {
    let seen = RefCell::new(Vec::new());
    let result = Chain::new(1)
        .tap(|value| seen.borrow_mut().push(*value))
        .map(|x| x + 1)
        .tap(|value| seen.borrow_mut().push(*value))
        .unwrap();

    assert_eq!(result, 2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

// =============================================================================
// Ensure
// =============================================================================

#[rstest]
fn test_ensure_present_returns_same_value() {
    assert_eq!(Chain::new(Some(5)).ensure(), Ok(Chain::new(5)));
    assert_eq!(Chain::new(Maybe::some(5)).ensure(), Ok(Chain::new(5)));
}

#[rstest]
fn test_ensure_absent_default_message() {
    let error = Chain::new(None::<i32>).ensure().unwrap_err();
    assert_eq!(error, ValueAbsent::chain_value_is_none());
    assert_eq!(error.to_string(), "Chain value is None");
}

#[rstest]
fn test_ensure_with_message() {
    let error = Chain::new(None::<i32>).ensure_with("boom").unwrap_err();
    assert_eq!(error.message(), "boom");
}

#[rstest]
fn test_ensure_with_raise() {
    let result = Chain::new(Maybe::<i32>::none()).ensure_with(Raise("not found"));
    assert_eq!(result, Err("not found"));
}

#[rstest]
fn test_ensure_mid_chain() -> Result<(), ValueAbsent> {
    let doubled = Chain::new("21")
        .map(|text| text.parse::<i32>().ok())
        .ensure_with("not a number")?
        .map(|x| x * 2)
        .into_value();
    assert_eq!(doubled, 42);
    Ok(())
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equality() {
    assert_eq!(Chain::new(5), Chain::new(5));
    assert_eq!(Chain::new(5), 5);
    assert_ne!(Chain::new(5), 6);
    assert_eq!(Chain::new(None::<i32>), None);
}
