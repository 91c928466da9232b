//! Unit tests for the tap combinator and its use alongside Maybe and Chain.

#![cfg(feature = "compose")]

use purely::{Chain, Maybe, pipe, tap};
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// tap function tests
// =============================================================================

#[rstest]
fn test_tap_returns_input_and_calls_once() {
    let calls = RefCell::new(Vec::new());
    let result = tap(5, |value| calls.borrow_mut().push(*value));

    assert_eq!(result, 5);
    assert_eq!(*calls.borrow(), vec![5]);
}

#[rstest]
#[case(0)]
#[case(-3)]
#[case(i32::MAX)]
fn test_tap_ignores_function_result(#[case] value: i32) {
    assert_eq!(tap(value, |x| x.checked_add(1)), value);
}

#[rstest]
fn test_tap_keeps_ownership_of_non_copy_values() {
    let names = tap(vec![String::from("a")], |names| assert_eq!(names.len(), 1));
    assert_eq!(names, vec![String::from("a")]);
}

#[rstest]
#[should_panic(expected = "audit failed")]
fn test_tap_propagates_panics() {
    tap(1, |value: &i32| {
        if *value > 0 {
            panic!("audit failed");
        }
    });
}

// =============================================================================
// tap with Maybe and Chain
// =============================================================================

#[rstest]
fn test_tap_in_maybe_map() {
    let observed = Cell::new(0);
    let result = Maybe::some(7)
        .map(|value| tap(value, |value| observed.set(*value)))
        .map(|value| value * 2);

    assert_eq!(result, 14);
    assert_eq!(observed.get(), 7);
}

#[rstest]
fn test_tap_in_pipe_matches_chain_tap() {
    let via_pipe = RefCell::new(Vec::new());
    let via_chain = RefCell::new(Vec::new());

    let piped = pipe!(
        2,
        |x| tap(x, |x| via_pipe.borrow_mut().push(*x)),
        |x: i32| x + 1
    );
    let chained = Chain::new(2)
        .tap(|x| via_chain.borrow_mut().push(*x))
        .map(|x| x + 1);

    assert_eq!(chained, piped);
    assert_eq!(*via_pipe.borrow(), *via_chain.borrow());
}
