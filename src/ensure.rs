//! Presence assertion and the `safe` construction shim.
//!
//! [`ensure`] and [`ensure_with`] accept either representation of a value
//! that may be missing: a raw `Option<T>` or a wrapped [`Maybe<T>`]. Both
//! are normalised through [`Ensurable`], so code holding a `Maybe` built by
//! [`safe`] and code holding a plain `Option` assert presence the same way.
//!
//! # Examples
//!
//! ```rust
//! use purely::{ensure, ensure_with, safe};
//!
//! assert_eq!(ensure(Some(5)), Ok(5));
//! assert_eq!(ensure(safe(Some(5))), Ok(5));
//!
//! let error = ensure_with(safe(None::<i32>), "custom").unwrap_err();
//! assert_eq!(error.message(), "custom");
//! ```

use crate::error::{OnAbsent, RaiseWith, ValueAbsent};
use crate::maybe::Maybe;

/// Either representation of a possibly-absent value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ensurable<T> {
    /// A raw optional value.
    Raw(Option<T>),
    /// A value wrapped in [`Maybe`].
    Wrapped(Maybe<T>),
}

impl<T> From<Option<T>> for Ensurable<T> {
    fn from(value: Option<T>) -> Self {
        Self::Raw(value)
    }
}

impl<T> From<Maybe<T>> for Ensurable<T> {
    fn from(value: Maybe<T>) -> Self {
        Self::Wrapped(value)
    }
}

/// Asserts that `value` is present, failing with `"Value is None"`.
///
/// # Errors
///
/// Returns [`ValueAbsent::value_is_none`] if `value` is absent.
///
/// # Examples
///
/// ```rust
/// use purely::{Maybe, ensure};
///
/// assert_eq!(ensure(Some("ready")), Ok("ready"));
/// assert_eq!(ensure(Maybe::some(5)), Ok(5));
/// assert_eq!(ensure(None::<i32>).unwrap_err().message(), "Value is None");
/// ```
#[inline]
pub fn ensure<T>(value: impl Into<Ensurable<T>>) -> Result<T, ValueAbsent> {
    ensure_with(value, RaiseWith(ValueAbsent::value_is_none))
}

/// Asserts that `value` is present, failing with the error described by
/// `error`.
///
/// A wrapped value is unwrapped through [`Maybe::unwrap_with`]; a raw value
/// is returned unchanged when present.
///
/// # Errors
///
/// Returns `error.into_error()` if `value` is absent: a string becomes a
/// [`ValueAbsent`], a [`Raise`](crate::Raise) is returned verbatim.
///
/// # Examples
///
/// ```rust
/// use purely::{Raise, ensure_with};
///
/// #[derive(Debug, PartialEq)]
/// enum ConfigError {
///     MissingHome,
/// }
///
/// let home = ensure_with(None::<&str>, Raise(ConfigError::MissingHome));
/// assert_eq!(home, Err(ConfigError::MissingHome));
/// ```
pub fn ensure_with<T, E>(value: impl Into<Ensurable<T>>, error: E) -> Result<T, E::Error>
where
    E: OnAbsent,
{
    match value.into() {
        Ensurable::Wrapped(maybe) => maybe.unwrap_with(error),
        Ensurable::Raw(Some(value)) => Ok(value),
        Ensurable::Raw(None) => {
            trace_absent!("ensure");
            Err(error.into_error())
        }
    }
}

/// Wraps a possibly-absent value for safe navigation.
///
/// The result is a [`Maybe`]; navigation through it never fails on
/// absence, and the presence check is deferred to [`ensure`] or
/// [`Maybe::unwrap`].
///
/// # Examples
///
/// ```rust
/// use purely::{ensure, safe};
///
/// let settings: Option<Vec<&str>> = None;
/// let first = safe(settings.as_ref()).get_item(&0)?;
/// assert!(ensure(first).is_err());
/// # Ok::<(), purely::NavigationError>(())
/// ```
#[inline]
pub const fn safe<T>(value: Option<T>) -> Maybe<T> {
    Maybe::new(value)
}
