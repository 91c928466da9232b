//! Property-based tests for the laws of Maybe and Chain.
//!
//! - **Identity Law**: `maybe.map(|x| x) == maybe`
//! - **Composition Law**: `maybe.map(f).map(g) == maybe.map(|x| g(f(x)))`
//! - **Extraction Laws**: present values survive `unwrap`/`unwrap_or`,
//!   absent values yield the default
//! - **Chain Transparency**: `tap` and a successful `ensure` keep the value

#![cfg(feature = "compose")]

use proptest::prelude::*;
use purely::{Chain, Maybe, ensure, tap};

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::new)
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_law(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_composition_law(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = maybe.map(function1).map(function2);
        let right = maybe.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_composition_changes_type(value in any::<i32>()) {
        let function1 = |n: i32| n.to_string();
        let function2 = |s: String| s.len();

        prop_assert_eq!(
            Maybe::some(value).map(function1).map(function2),
            Maybe::some(function2(function1(value)))
        );
    }
}

// =============================================================================
// Extraction Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_present_extraction(value in any::<i32>(), default in any::<i32>()) {
        let maybe = Maybe::some(value);
        prop_assert!(maybe.is_some());
        prop_assert!(!maybe.is_none());
        prop_assert_eq!(maybe.unwrap(), Ok(value));
        prop_assert_eq!(maybe.unwrap_or(default), value);
        prop_assert_eq!(ensure(maybe), Ok(value));
    }

    #[test]
    fn prop_absent_extraction(default in any::<i32>()) {
        let maybe = Maybe::<i32>::none();
        prop_assert!(maybe.unwrap().is_err());
        prop_assert_eq!(maybe.unwrap_or(default), default);
    }

    #[test]
    fn prop_filter_keeps_or_drops(maybe in maybe_strategy(), threshold in any::<i32>()) {
        let filtered = maybe.filter(|x| *x > threshold);
        let expected = maybe.into_option().filter(|x| *x > threshold);
        prop_assert_eq!(filtered, expected);
    }
}

// =============================================================================
// Chain and Tap Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_tap_is_transparent(value in any::<i64>()) {
        prop_assert_eq!(tap(value, |x| x.wrapping_mul(3)), value);
        prop_assert_eq!(Chain::new(value).tap(|x| x.wrapping_mul(3)), value);
    }

    #[test]
    fn prop_chain_map_matches_application(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(7);
        prop_assert_eq!(Chain::new(value).map(function), function(value));
        prop_assert_eq!(Chain::new(value) | function, Chain::new(value).then(function));
    }

    #[test]
    fn prop_chain_ensure_keeps_present(value in any::<i32>()) {
        prop_assert_eq!(Chain::new(Some(value)).ensure(), Ok(Chain::new(value)));
    }
}
