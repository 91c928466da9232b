//! Navigation traits used by [`Maybe`](crate::Maybe)'s safe-navigation methods.
//!
//! Each trait describes one kind of step into a value:
//!
//! - [`GetAttr`]: look up a named attribute
//! - [`GetItem`]: indexed or keyed read
//! - [`SetItem`]: indexed or keyed write
//! - [`Invoke`]: call with a tuple of arguments
//!
//! Lookups return `Ok(None)` when the value that was found is itself null,
//! and `Err` when the step is invalid for the value (a missing attribute,
//! a missing key, an index past the end).
//!
//! # Implementing `GetAttr`
//!
//! ```rust
//! use purely::{GetAttr, Maybe, NavigationError};
//!
//! struct Profile {
//!     nickname: Option<String>,
//!     email: String,
//! }
//!
//! impl GetAttr for Profile {
//!     type Output = String;
//!
//!     fn get_attr(&self, name: &str) -> Result<Option<String>, NavigationError> {
//!         match name {
//!             "nickname" => Ok(self.nickname.clone()),
//!             "email" => Ok(Some(self.email.clone())),
//!             _ => Err(NavigationError::no_such_attribute::<Self>(name)),
//!         }
//!     }
//! }
//!
//! let profile = Maybe::some(Profile { nickname: None, email: "a@b.c".into() });
//! assert_eq!(profile.get_attr("email")?, "a@b.c".to_string());
//! assert!(profile.get_attr("nickname")?.is_none());
//! assert!(profile.get_attr("age").is_err());
//! # Ok::<(), NavigationError>(())
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::error::NavigationError;

/// Named attribute lookup.
pub trait GetAttr {
    /// The type of the attributes.
    type Output;

    /// Looks up the attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoSuchAttribute`] if the value has no
    /// attribute called `name`.
    fn get_attr(&self, name: &str) -> Result<Option<Self::Output>, NavigationError>;
}

/// Indexed or keyed read.
pub trait GetItem<K: ?Sized> {
    /// The type of the items.
    type Output;

    /// Reads the item stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] if `key` is not held by the value.
    fn get_item(&self, key: &K) -> Result<Option<Self::Output>, NavigationError>;
}

/// Indexed or keyed write.
pub trait SetItem<K, V> {
    /// Stores `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] if the value cannot store at `key`.
    fn set_item(&mut self, key: K, value: V) -> Result<(), NavigationError>;
}

/// Invocation with a tuple of arguments.
///
/// Implemented for every `Fn` taking up to four arguments.
///
/// ```rust
/// use purely::Invoke;
///
/// let greet = |name: &str| format!("hello {name}");
/// assert_eq!(greet.invoke(("world",)), "hello world");
/// assert_eq!((|| 7).invoke(()), 7);
/// ```
pub trait Invoke<Args> {
    /// The return type of the call.
    type Output;

    /// Calls the value with `arguments`.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

// =============================================================================
// Forwarding
// =============================================================================

impl<T: GetAttr + ?Sized> GetAttr for &T {
    type Output = T::Output;

    fn get_attr(&self, name: &str) -> Result<Option<Self::Output>, NavigationError> {
        (**self).get_attr(name)
    }
}

impl<T: GetAttr + ?Sized> GetAttr for Box<T> {
    type Output = T::Output;

    fn get_attr(&self, name: &str) -> Result<Option<Self::Output>, NavigationError> {
        (**self).get_attr(name)
    }
}

impl<K: ?Sized, T: GetItem<K> + ?Sized> GetItem<K> for &T {
    type Output = T::Output;

    fn get_item(&self, key: &K) -> Result<Option<Self::Output>, NavigationError> {
        (**self).get_item(key)
    }
}

impl<K: ?Sized, T: GetItem<K> + ?Sized> GetItem<K> for Box<T> {
    type Output = T::Output;

    fn get_item(&self, key: &K) -> Result<Option<Self::Output>, NavigationError> {
        (**self).get_item(key)
    }
}

impl<K, V, T: SetItem<K, V> + ?Sized> SetItem<K, V> for &mut T {
    fn set_item(&mut self, key: K, value: V) -> Result<(), NavigationError> {
        (**self).set_item(key, value)
    }
}

// =============================================================================
// Sequences
// =============================================================================

const fn out_of_bounds(index: usize, length: usize) -> NavigationError {
    NavigationError::IndexOutOfBounds { index, length }
}

impl<T: Clone> GetItem<usize> for [T] {
    type Output = T;

    fn get_item(&self, key: &usize) -> Result<Option<T>, NavigationError> {
        self.get(*key)
            .map(|item| Some(item.clone()))
            .ok_or_else(|| out_of_bounds(*key, self.len()))
    }
}

impl<T: Clone> GetItem<usize> for Vec<T> {
    type Output = T;

    fn get_item(&self, key: &usize) -> Result<Option<T>, NavigationError> {
        self.as_slice().get_item(key)
    }
}

impl<T: Clone> GetItem<usize> for VecDeque<T> {
    type Output = T;

    fn get_item(&self, key: &usize) -> Result<Option<T>, NavigationError> {
        self.get(*key)
            .map(|item| Some(item.clone()))
            .ok_or_else(|| out_of_bounds(*key, self.len()))
    }
}

impl<T> SetItem<usize, T> for [T] {
    fn set_item(&mut self, key: usize, value: T) -> Result<(), NavigationError> {
        let length = self.len();
        let slot = self.get_mut(key).ok_or_else(|| out_of_bounds(key, length))?;
        *slot = value;
        Ok(())
    }
}

impl<T> SetItem<usize, T> for Vec<T> {
    fn set_item(&mut self, key: usize, value: T) -> Result<(), NavigationError> {
        self.as_mut_slice().set_item(key, value)
    }
}

impl<T> SetItem<usize, T> for VecDeque<T> {
    fn set_item(&mut self, key: usize, value: T) -> Result<(), NavigationError> {
        let length = self.len();
        let slot = self.get_mut(key).ok_or_else(|| out_of_bounds(key, length))?;
        *slot = value;
        Ok(())
    }
}

// =============================================================================
// Maps
// =============================================================================

impl<K, Q, V, S> GetItem<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + Debug + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    type Output = V;

    fn get_item(&self, key: &Q) -> Result<Option<V>, NavigationError> {
        self.get(key)
            .map(|item| Some(item.clone()))
            .ok_or_else(|| NavigationError::key_not_found(key))
    }
}

impl<K, Q, V> GetItem<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + Debug + ?Sized,
    V: Clone,
{
    type Output = V;

    fn get_item(&self, key: &Q) -> Result<Option<V>, NavigationError> {
        self.get(key)
            .map(|item| Some(item.clone()))
            .ok_or_else(|| NavigationError::key_not_found(key))
    }
}

impl<K, V, S> SetItem<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn set_item(&mut self, key: K, value: V) -> Result<(), NavigationError> {
        self.insert(key, value);
        Ok(())
    }
}

impl<K: Ord, V> SetItem<K, V> for BTreeMap<K, V> {
    fn set_item(&mut self, key: K, value: V) -> Result<(), NavigationError> {
        self.insert(key, value);
        Ok(())
    }
}

// =============================================================================
// Callables
// =============================================================================

macro_rules! impl_invoke {
    ($($argument:ident: $argument_type:ident),*) => {
        impl<Function, Return, $($argument_type),*> Invoke<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($argument_type,)*)) -> Return {
                self($($argument),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(first: A);
impl_invoke!(first: A, second: B);
impl_invoke!(first: A, second: B, third: C);
impl_invoke!(first: A, second: B, third: C, fourth: D);
