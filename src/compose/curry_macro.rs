//! The curry macro family for converting multi-argument functions to curried form.
//!
//! The wrapped function is shared through `std::rc::Rc`, and every
//! argument applied so far is cloned into the next stage. Partial
//! applications are therefore `Fn` and can be called any number of times.
//! All arguments except the last must implement [`Clone`].

/// Converts a 2-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use purely::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let double = curry2!(multiply)(2);
/// assert_eq!(double(5), 10);
/// assert_eq!(double(21), 42);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use purely::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use purely::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// assert_eq!(curry4!(sum_four)(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
