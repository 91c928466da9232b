//! Composition helpers: `tap`, `pipe!` and the curry macros.
//!
//! # Overview
//!
//! - [`tap`]: run a side effect on a value and hand the value back
//! - [`pipe!`]: thread a value through functions from left to right
//! - [`curry2!`] through [`curry4!`]: convert multi-argument functions to
//!   curried form
//!
//! Curried and partially applied functions are ordinary closures, so they
//! compose with [`pipe!`], [`Maybe::map`](crate::Maybe::map) and
//! [`Chain::then`](crate::Chain::then) like any other function.
//!
//! # Examples
//!
//! ```
//! use purely::{curry2, pipe, tap};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_ten = curry2!(add)(10);
//! let mut log = Vec::new();
//!
//! let result = pipe!(
//!     5,
//!     |x| tap(x, |x| log.push(*x)),
//!     add_ten,
//!     |x: i32| x.to_string()
//! );
//! assert_eq!(result, "15");
//! assert_eq!(log, vec![5]);
//! ```
//!
//! # Laws
//!
//! - **Pipe identity**: `pipe!(x) == x`
//! - **Pipe composition**: `pipe!(x, f, g) == g(f(x))`
//! - **Tap transparency**: `tap(x, f) == x` for every `f`
//! - **Curry definition**: `curry2!(f)(a)(b) == f(a, b)`

mod curry_macro;
mod pipe_macro;
mod tap;

pub use tap::tap;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::pipe;
