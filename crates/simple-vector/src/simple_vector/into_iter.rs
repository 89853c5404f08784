use core::{
    fmt,
    iter::FusedIterator,
    mem::{self, ManuallyDrop},
    slice,
};

use svec_mem::{
    Buffer,
    slots::drop_slots,
};

use super::SimpleVector;

/// Owning iterator over the elements of a [`SimpleVector`].
///
/// Elements not yielded are dropped with the iterator, then the buffer is freed.
pub struct IntoIter<T> {
    buffer: Buffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.buffer.as_ptr().add(self.start), self.end - self.start)
        }
    }
}

impl<T> IntoIterator for SimpleVector<T> {

    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut vec = ManuallyDrop::new(self);
        let buffer = mem::take(&mut vec.buffer);
        IntoIter {
            buffer,
            start: 0,
            end: vec.size,
        }
    }
}

impl<T> Iterator for IntoIter<T> {

    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None
        }
        let item = unsafe { self.buffer.get_raw().add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {

    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None
        }
        self.end -= 1;
        Some(unsafe { self.buffer.get_raw().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {

    fn drop(&mut self) {
        unsafe {
            drop_slots(self.buffer.get_raw().add(self.start), self.end - self.start);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
