//! Error types for absence and safe navigation.
//!
//! This module provides the errors produced when an absent value is forced
//! (`unwrap`, `ensure`) and when navigation into a *present* value fails
//! (missing attribute, missing key, out-of-range index).
//!
//! It also provides [`OnAbsent`], the error specification accepted by
//! [`Maybe::unwrap_with`](crate::Maybe::unwrap_with) and
//! [`ensure_with`](crate::ensure_with):
//!
//! - a string (`&str` or `String`) becomes a [`ValueAbsent`] carrying it,
//! - a [`ValueAbsent`] is used as is,
//! - [`Raise`] hands back a caller-built error verbatim,
//! - [`RaiseWith`] builds the caller's error lazily, only on failure.

use std::borrow::Cow;

/// Represents an absent value being forced into a present one.
///
/// # Examples
///
/// ```rust
/// use purely::{Maybe, ValueAbsent};
///
/// let error = Maybe::<i32>::none().unwrap().unwrap_err();
/// assert_eq!(error, ValueAbsent::unwrap_on_none());
/// assert_eq!(format!("{error}"), "Called unwrap on None");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueAbsent {
    message: Cow<'static, str>,
}

impl ValueAbsent {
    /// Message used by [`Maybe::unwrap`](crate::Maybe::unwrap).
    pub const UNWRAP_ON_NONE: &'static str = "Called unwrap on None";
    /// Message used by [`ensure`](crate::ensure).
    pub const VALUE_IS_NONE: &'static str = "Value is None";
    /// Message used by [`Chain::ensure`](crate::Chain::ensure).
    pub const CHAIN_VALUE_IS_NONE: &'static str = "Chain value is None";

    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The default error of [`Maybe::unwrap`](crate::Maybe::unwrap).
    pub const fn unwrap_on_none() -> Self {
        Self {
            message: Cow::Borrowed(Self::UNWRAP_ON_NONE),
        }
    }

    /// The default error of [`ensure`](crate::ensure).
    pub const fn value_is_none() -> Self {
        Self {
            message: Cow::Borrowed(Self::VALUE_IS_NONE),
        }
    }

    /// The default error of [`Chain::ensure`](crate::Chain::ensure).
    pub const fn chain_value_is_none() -> Self {
        Self {
            message: Cow::Borrowed(Self::CHAIN_VALUE_IS_NONE),
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValueAbsent {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for ValueAbsent {}

/// Represents a failed navigation step into a present value.
///
/// Navigation through an *absent* value never produces this error; it only
/// reports that the value which is there does not have what was asked for.
///
/// # Examples
///
/// ```rust
/// use purely::{Maybe, NavigationError};
///
/// let numbers = Maybe::some(vec![1, 2, 3]);
/// assert_eq!(
///     numbers.get_item(&7),
///     Err(NavigationError::IndexOutOfBounds { index: 7, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The value has no attribute with this name.
    NoSuchAttribute {
        /// The requested attribute.
        name: String,
        /// The type that was navigated.
        type_name: &'static str,
    },
    /// The key is not present in a keyed collection.
    KeyNotFound {
        /// The requested key, rendered with `Debug`.
        key: String,
    },
    /// The index is past the end of a sequence.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        length: usize,
    },
    /// The value does not support this kind of navigation.
    Unsupported {
        /// The navigation that was attempted (`"get_attr"`, `"get_item"`, `"set_item"`).
        operation: &'static str,
        /// The kind of value that was navigated.
        type_name: &'static str,
    },
}

impl NavigationError {
    /// Creates a [`NavigationError::NoSuchAttribute`] for the type `T`.
    pub fn no_such_attribute<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::NoSuchAttribute {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Creates a [`NavigationError::KeyNotFound`] from any debuggable key.
    pub fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchAttribute { name, type_name } => {
                write!(formatter, "'{type_name}' has no attribute '{name}'")
            }
            Self::KeyNotFound { key } => write!(formatter, "key not found: {key}"),
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index out of range: the length is {length} but the index is {index}"
            ),
            Self::Unsupported {
                operation,
                type_name,
            } => write!(formatter, "'{type_name}' does not support {operation}"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// An error specification: what to fail with when a value is absent.
///
/// The error is only built when the value turns out to be absent, and it is
/// built fresh on every failing call.
///
/// # Examples
///
/// ```rust
/// use purely::{Maybe, Raise, ValueAbsent};
///
/// #[derive(Debug, PartialEq)]
/// struct MissingUser;
///
/// let absent = Maybe::<&str>::none();
/// assert_eq!(absent.unwrap_with("no user"), Err(ValueAbsent::new("no user")));
/// assert_eq!(absent.unwrap_with(Raise(MissingUser)), Err(MissingUser));
/// ```
pub trait OnAbsent {
    /// The error produced.
    type Error;

    /// Builds the error.
    fn into_error(self) -> Self::Error;
}

impl OnAbsent for &str {
    type Error = ValueAbsent;

    fn into_error(self) -> Self::Error {
        ValueAbsent::new(self.to_owned())
    }
}

impl OnAbsent for String {
    type Error = ValueAbsent;

    fn into_error(self) -> Self::Error {
        ValueAbsent::new(self)
    }
}

impl OnAbsent for ValueAbsent {
    type Error = Self;

    fn into_error(self) -> Self::Error {
        self
    }
}

/// Fails with a caller-built error, returned verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raise<E>(pub E);

impl<E> OnAbsent for Raise<E> {
    type Error = E;

    fn into_error(self) -> Self::Error {
        self.0
    }
}

/// Fails with an error built by a closure, invoked only on absence.
#[derive(Debug, Clone, Copy)]
pub struct RaiseWith<F>(pub F);

impl<E, F> OnAbsent for RaiseWith<F>
where
    F: FnOnce() -> E,
{
    type Error = E;

    fn into_error(self) -> Self::Error {
        (self.0)()
    }
}
