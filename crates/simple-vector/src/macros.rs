/// Builds a [`SimpleVector`](crate::SimpleVector) from a literal sequence.
///
/// `simple_vec![a, b, c]` has exactly three slots of capacity;
/// `simple_vec![value; n]` holds `n` clones of `value`.
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::with_size_value($n, $value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($item),+])
    };
}

#[cfg(feature = "log")]
macro_rules! vec_trace {
    ($($arg:tt)*) => {
        svec_log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! vec_trace {
    ($($arg:tt)*) => {
        { let _ = ($($arg)*); false }
    };
}

#[cfg(feature = "log")]
macro_rules! vec_debug {
    ($($arg:tt)*) => {
        svec_log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! vec_debug {
    ($($arg:tt)*) => {
        { let _ = ($($arg)*); false }
    };
}
