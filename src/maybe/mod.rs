//! The `Maybe` container - a value that may be absent, with safe navigation.
//!
//! `Maybe<T>` distinguishes "a value is present" from "no value" and lets a
//! caller transform and navigate into the value without checking for
//! absence at every step. Every step taken on an absent `Maybe` yields
//! another absent `Maybe`; only the terminal [`Maybe::unwrap`],
//! [`Maybe::unwrap_or`] or [`ensure`](crate::ensure) decides what absence
//! means.
//!
//! # Safe Navigation
//!
//! Navigation goes through four named methods backed by the traits in
//! [`navigate`]:
//!
//! | Method | Trait | On absence |
//! |---|---|---|
//! | [`Maybe::get_attr`] | [`GetAttr`] | `Ok(absent)` |
//! | [`Maybe::get_item`] | [`GetItem`] | `Ok(absent)` |
//! | [`Maybe::call`] | [`Invoke`] | absent, nothing invoked |
//! | [`Maybe::set_item`] | [`SetItem`] | `Ok(())`, nothing written |
//!
//! Failures of a *present* value (a missing attribute, a missing key, an
//! index past the end) are reported as [`NavigationError`]s and are never
//! turned into absence.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use purely::Maybe;
//!
//! let mut ports: HashMap<String, Vec<u16>> = HashMap::new();
//! ports.insert("web".to_string(), vec![80, 443]);
//!
//! let present = Maybe::some(&ports);
//! assert_eq!(present.get_item("web")?.get_item(&1)?, 443);
//!
//! let absent = Maybe::<&HashMap<String, Vec<u16>>>::none();
//! assert!(absent.get_item("web")?.get_item(&1)?.is_none());
//! # Ok::<(), purely::NavigationError>(())
//! ```

pub mod navigate;

#[cfg(feature = "json")]
mod json;

pub use navigate::{GetAttr, GetItem, Invoke, SetItem};

use crate::error::{NavigationError, OnAbsent, RaiseWith, ValueAbsent};

/// A value that is either present or absent.
///
/// See the [module documentation](self) for an overview.
///
/// # Examples
///
/// ```rust
/// use purely::Maybe;
///
/// let port = Maybe::some("8080")
///     .map(|text| text.parse::<u16>().ok())
///     .flatten()
///     .filter(|port| *port >= 1024);
/// assert_eq!(port, 8080);
///
/// let missing = Maybe::<&str>::none().map(str::len);
/// assert_eq!(missing.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a raw optional value; `None` is the absent state.
    #[inline]
    pub const fn new(value: Option<T>) -> Self {
        Self { value }
    }

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Maybe;
    ///
    /// assert!(Maybe::some(0).is_some());
    /// assert!(!Maybe::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    /// Mutably borrows the contained value.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        Maybe {
            value: self.value.as_mut(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or a [`ValueAbsent`] error reading
    /// `"Called unwrap on None"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueAbsent::unwrap_on_none`] if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).unwrap(), Ok(5));
    ///
    /// let error = Maybe::<i32>::none().unwrap().unwrap_err();
    /// assert_eq!(error.message(), "Called unwrap on None");
    /// ```
    #[inline]
    pub fn unwrap(self) -> Result<T, ValueAbsent> {
        self.unwrap_with(RaiseWith(ValueAbsent::unwrap_on_none))
    }

    /// Returns the contained value, or the error described by `error`.
    ///
    /// A string becomes a [`ValueAbsent`] carrying it; a
    /// [`Raise`](crate::Raise) is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns `error.into_error()` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::{Maybe, Raise};
    ///
    /// let error = Maybe::<u16>::none().unwrap_with("port is not configured");
    /// assert_eq!(error.unwrap_err().message(), "port is not configured");
    ///
    /// let error = Maybe::<u16>::none().unwrap_with(Raise(std::fmt::Error));
    /// assert_eq!(error, Err(std::fmt::Error));
    /// ```
    pub fn unwrap_with<E: OnAbsent>(self, error: E) -> Result<T, E::Error> {
        match self.value {
            Some(value) => Ok(value),
            None => {
                trace_absent!("unwrap");
                Err(error.into_error())
            }
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(function)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value. `function` is never invoked on
    /// an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|x| x * 10), 20);
    /// assert!(Maybe::<i32>::none().map(|x| x * 10).is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            value: self.value.map(function),
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Applies a `Maybe`-returning `function` to a present value.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::none(),
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        if self.is_some() { self } else { other }
    }

    // =========================================================================
    // Safe Navigation
    // =========================================================================

    /// Looks up the attribute `name` on a present value.
    ///
    /// An attribute that is itself null yields an absent `Maybe`.
    ///
    /// # Errors
    ///
    /// Propagates the [`NavigationError`] of a present value that has no
    /// such attribute. An absent `Maybe` never fails.
    pub fn get_attr(&self, name: &str) -> Result<Maybe<T::Output>, NavigationError>
    where
        T: GetAttr,
    {
        match &self.value {
            Some(value) => value.get_attr(name).map(Maybe::new),
            None => Ok(Maybe::none()),
        }
    }

    /// Performs an indexed or keyed read on a present value.
    ///
    /// # Errors
    ///
    /// Propagates the [`NavigationError`] of a present value that does not
    /// hold `key`. An absent `Maybe` never fails.
    pub fn get_item<K>(&self, key: &K) -> Result<Maybe<T::Output>, NavigationError>
    where
        T: GetItem<K>,
        K: ?Sized,
    {
        match &self.value {
            Some(value) => value.get_item(key).map(Maybe::new),
            None => Ok(Maybe::none()),
        }
    }

    /// Writes `item` at `key` into a present value. Writing into an absent
    /// `Maybe` silently does nothing.
    ///
    /// # Errors
    ///
    /// Propagates the [`NavigationError`] of a present value that rejects
    /// the write.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Maybe;
    ///
    /// let mut scores = Maybe::some(vec![0, 0]);
    /// scores.set_item(1, 7)?;
    /// assert_eq!(scores, vec![0, 7]);
    ///
    /// let mut nothing = Maybe::<Vec<i32>>::none();
    /// nothing.set_item(1, 7)?;
    /// assert!(nothing.is_none());
    /// # Ok::<(), purely::NavigationError>(())
    /// ```
    pub fn set_item<K, V>(&mut self, key: K, item: V) -> Result<(), NavigationError>
    where
        T: SetItem<K, V>,
    {
        match &mut self.value {
            Some(value) => value.set_item(key, item),
            None => Ok(()),
        }
    }

    /// Invokes a present callable with `arguments`, passed as a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use purely::Maybe;
    ///
    /// let add = Maybe::some(|left: i32, right: i32| left + right);
    /// assert_eq!(add.call((2, 3)), 5);
    ///
    /// let missing = Maybe::<fn(i32, i32) -> i32>::none();
    /// assert!(missing.call((2, 3)).is_none());
    /// ```
    pub fn call<Args>(&self, arguments: Args) -> Maybe<T::Output>
    where
        T: Invoke<Args>,
    {
        Maybe {
            value: self.value.as_ref().map(|value| value.invoke(arguments)),
        }
    }
}

impl<T> Maybe<Option<T>> {
    /// Collapses a present-but-null inner value into absence.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        Maybe {
            value: self.value.flatten(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses a nested `Maybe`.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Maybe<Result<T, E>> {
    /// Turns a `Maybe` of a `Result` into a `Result` of a `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns the inner error if a present value holds one.
    pub fn transpose(self) -> Result<Maybe<T>, E> {
        self.value.transpose().map(Maybe::new)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    fn eq(&self, other: &T) -> bool {
        self.value.as_ref() == Some(other)
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Maybe<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        self.value == *other
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
