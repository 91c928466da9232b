//! The `Chain` fluent wrapper.
//!
//! `Chain<T>` threads an already-valid value through a sequence of
//! transformations with method syntax. It does no absence tracking: a held
//! `None` is handed to the next function like any other value. When the
//! held value is an `Option` or a [`Maybe`](crate::Maybe),
//! [`Chain::ensure`] asserts presence mid-chain.
//!
//! # Examples
//!
//! ```rust
//! use purely::Chain;
//!
//! let mut seen = Vec::new();
//! let length = Chain::new("  purely  ")
//!     .map(str::trim)
//!     .tap(|text| seen.push(text.to_string()))
//!     .then(str::len)
//!     | (|length: usize| length * 2);
//!
//! assert_eq!(length, 12);
//! assert_eq!(seen, vec!["purely"]);
//! ```

use std::ops::BitOr;

use crate::ensure::{Ensurable, ensure_with};
use crate::error::{OnAbsent, RaiseWith, ValueAbsent};

/// A fluent wrapper around a value.
///
/// See the [module documentation](self) for an overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chain<T> {
    value: T,
}

impl<T> Chain<T> {
    /// Starts a chain from `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Applies `function` to the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Chain;
    ///
    /// assert_eq!(Chain::new(3).map(|x| x + 1).into_value(), 4);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Chain<U>
    where
        F: FnOnce(T) -> U,
    {
        Chain::new(function(self.value))
    }

    /// Same as [`Chain::map`].
    #[inline]
    pub fn then<U, F>(self, function: F) -> Chain<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(function)
    }

    /// Runs `function` on the held value for its side effect and keeps the
    /// value.
    #[inline]
    #[must_use]
    pub fn tap<R, F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> R,
    {
        function(&self.value);
        self
    }

    /// Asserts that the held `Option` or `Maybe` is present, failing with
    /// `"Chain value is None"`.
    ///
    /// On success the chain carries on with the same value, unwrapped.
    ///
    /// # Errors
    ///
    /// Returns [`ValueAbsent::chain_value_is_none`] if the held value is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Chain;
    ///
    /// assert_eq!(Chain::new(Some(5)).ensure(), Ok(Chain::new(5)));
    /// assert!(Chain::new(None::<i32>).ensure().is_err());
    /// ```
    #[inline]
    pub fn ensure<U>(self) -> Result<Chain<U>, ValueAbsent>
    where
        T: Into<Ensurable<U>>,
    {
        self.ensure_with(RaiseWith(ValueAbsent::chain_value_is_none))
    }

    /// Asserts that the held `Option` or `Maybe` is present, failing with
    /// the error described by `error`.
    ///
    /// # Errors
    ///
    /// Returns `error.into_error()` if the held value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Chain;
    ///
    /// let error = Chain::new(None::<i32>).ensure_with("boom").unwrap_err();
    /// assert_eq!(error.message(), "boom");
    /// ```
    pub fn ensure_with<U, E>(self, error: E) -> Result<Chain<U>, E::Error>
    where
        T: Into<Ensurable<U>>,
        E: OnAbsent,
    {
        ensure_with(self.value, error).map(Chain::new)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Ends the chain, returning the held value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Same as [`Chain::into_value`].
    #[inline]
    pub fn unwrap(self) -> T {
        self.value
    }
}

impl<T, U, F> BitOr<F> for Chain<T>
where
    F: FnOnce(T) -> U,
{
    type Output = Chain<U>;

    fn bitor(self, function: F) -> Self::Output {
        self.map(function)
    }
}

impl<T> From<T> for Chain<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: PartialEq> PartialEq<T> for Chain<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Chain<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Chain<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

static_assertions::assert_impl_all!(Chain<String>: Send, Sync, Clone);
