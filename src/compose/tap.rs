//! The `tap` combinator.

/// Runs `function` on `value` for its side effect and returns `value`.
///
/// The return value of `function` is discarded. A panic inside `function`
/// propagates to the caller.
///
/// # Examples
///
/// ```
/// use purely::tap;
///
/// let mut audit = Vec::new();
/// let total = tap(42, |total| audit.push(format!("total={total}")));
///
/// assert_eq!(total, 42);
/// assert_eq!(audit, vec!["total=42"]);
/// ```
#[inline]
pub fn tap<T, R, F>(value: T, function: F) -> T
where
    F: FnOnce(&T) -> R,
{
    function(&value);
    value
}
