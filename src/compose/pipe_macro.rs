//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Each step may change
/// the type of the value, and each function is called exactly once, so
/// [`FnOnce`] closures are accepted.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use purely::pipe;
///
/// assert_eq!(pipe!(3, |x| x + 1, |x: i32| x.to_string()), "4");
/// assert_eq!(pipe!(3), 3);
/// ```
///
/// ## Over a `Maybe`
///
/// ```
/// use purely::{Maybe, pipe};
///
/// let port = pipe!(
///     Maybe::some("8080"),
///     |raw: Maybe<&str>| raw.map(str::parse::<u16>),
///     |parsed: Maybe<Result<u16, _>>| parsed.transpose(),
/// );
/// assert_eq!(port, Ok(Maybe::some(8080)));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
