//! # purely
//!
//! Null-safety and composition primitives for application code.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: a possibly-absent value with safe transformation and
//!   safe navigation (attribute, item read, item write, call) that never
//!   fails on absence
//! - **[`ensure`]**: asserts presence of a raw `Option` or a [`Maybe`]
//! - **[`safe`]**: wraps a possibly-absent value for safe navigation
//! - **[`Chain`]**: a fluent wrapper for readable pipelines over a valid value
//! - **[`tap`] / [`pipe!`]**: side-effect tap and left-to-right application
//! - **[`curry2!`] to [`curry4!`]**: currying
//!
//! Absence stays a value until a terminal [`Maybe::unwrap`],
//! [`Maybe::unwrap_or`] or [`ensure`] decides what it means.
//!
//! ## Feature Flags
//!
//! - `compose`: `tap`, `pipe!` and the curry macros (default)
//! - `serde`: transparent `Serialize`/`Deserialize` for `Maybe` and `Chain`
//! - `json`: safe navigation over `serde_json::Value`
//! - `tracing`: trace events when an absent value is forced
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use purely::{Chain, ensure, safe};
//!
//! let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();
//! owners.insert("api", vec!["ana", "bo"]);
//!
//! let first_owner = safe(Some(&owners)).get_item("api")?.get_item(&0)?;
//! assert_eq!(ensure(first_owner), Ok("ana"));
//!
//! let nobody = safe(None::<&HashMap<&str, Vec<&str>>>)
//!     .get_item("api")?
//!     .get_item(&0)?;
//! assert!(ensure(nobody).is_err());
//!
//! let shout = Chain::new("ana").map(str::to_uppercase).into_value();
//! assert_eq!(shout, "ANA");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a trace event when an absent value is forced into an error.
macro_rules! trace_absent {
    ($operation:literal) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "purely", operation = $operation, "absent value forced");
    }};
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use purely::prelude::*;
///
/// assert_eq!(ensure(Maybe::some(1)), Ok(1));
/// ```
pub mod prelude {
    pub use crate::chain::Chain;
    pub use crate::ensure::{Ensurable, ensure, ensure_with, safe};
    pub use crate::error::{NavigationError, OnAbsent, Raise, RaiseWith, ValueAbsent};
    pub use crate::maybe::{GetAttr, GetItem, Invoke, Maybe, SetItem};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod chain;
pub mod ensure;
pub mod error;
pub mod maybe;

#[cfg(feature = "compose")]
pub mod compose;

pub use chain::Chain;
pub use ensure::{Ensurable, ensure, ensure_with, safe};
pub use error::{NavigationError, OnAbsent, Raise, RaiseWith, ValueAbsent};
pub use maybe::{GetAttr, GetItem, Invoke, Maybe, SetItem};

#[cfg(feature = "compose")]
pub use compose::tap;
