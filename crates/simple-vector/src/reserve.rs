/// Requested capacity for constructing an empty [`SimpleVector`](crate::SimpleVector).
///
/// Exists so that "`n` reserved slots" reads differently from "`n` default elements"
/// at the call site: `SimpleVector::from(reserve(n))` versus
/// `SimpleVector::with_size(n)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {

    #[inline(always)]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[inline(always)]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

#[inline(always)]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
