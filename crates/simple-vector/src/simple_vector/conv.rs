use crate::reserve::ReserveProxy;

use super::SimpleVector;

impl<T> From<ReserveProxy> for SimpleVector<T> {

    #[inline(always)]
    fn from(value: ReserveProxy) -> Self {
        Self::from_reserve(value)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {

    fn from(value: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        for item in value {
            unsafe { vec.write_back(item) }
        }
        vec
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {

    fn from(value: &[T]) -> Self {
        let mut vec = Self::with_capacity(value.len());
        for item in value {
            unsafe { vec.write_back(item.clone()) }
        }
        vec
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {

    /// Grows by appending, so the capacity follows the doubling rule.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for SimpleVector<T> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {

    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.push_back(item);
        }
    }
}
