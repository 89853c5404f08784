//! Growth rule for appends and insertions into a full vector.
//!
//! A full vector of capacity `c` grows to `max(1, 2 * c)`. Explicit reservations bypass
//! this and allocate exactly what was asked for. Capacity never shrinks on its own.

pub const MIN_CAPACITY: usize = 1;

pub const GROWTH_FACTOR: usize = 2;

/// Capacity after one growth step from `current`, `None` if it overflows `usize`.
#[inline(always)]
pub const fn grow(current: usize) -> Option<usize> {
    if current == 0 {
        Some(MIN_CAPACITY)
    } else {
        current.checked_mul(GROWTH_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grows_to_one() {
        assert_eq!(grow(0), Some(1));
    }

    #[test]
    fn non_empty_doubles() {
        assert_eq!(grow(1), Some(2));
        assert_eq!(grow(3), Some(6));
        assert_eq!(grow(1 << 20), Some(1 << 21));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(grow(usize::MAX / 2 + 1), None);
        assert_eq!(grow(usize::MAX), None);
    }
}
