use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::SimpleVector;

impl<T> SimpleVector<T> {

    /// Lexicographic three-way comparison of the live elements.
    ///
    /// The first pair of elements that differ decides; if one vector is a prefix of the
    /// other, the shorter one is less. Returns `None` as soon as an element pair is
    /// unordered, so every relational operator is derived from this one result.
    pub fn compare(&self, other: &Self) -> Option<Ordering>
        where
            T: PartialOrd
    {
        for (a, b) in self.as_slice().iter().zip(other.as_slice()) {
            match a.partial_cmp(b)? {
                Ordering::Equal => continue,
                ord => return Some(ord),
            }
        }
        Some(self.size.cmp(&other.size))
    }
}

impl<T: PartialEq<U>, U> PartialEq<SimpleVector<U>> for SimpleVector<T> {

    fn eq(&self, other: &SimpleVector<U>) -> bool {
        self.size == other.size &&
            self.as_slice().iter().zip(other.as_slice()).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {

    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T> {

    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {

    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl<T: Ord> Ord for SimpleVector<T> {

    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.as_slice().iter().zip(other.as_slice()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.size.cmp(&other.size)
    }
}

impl<T: Hash> Hash for SimpleVector<T> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
