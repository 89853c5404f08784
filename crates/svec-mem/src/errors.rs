#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapacityError {
    /// The byte size of `requested` slots does not fit in `isize::MAX`,
    /// or the slot count itself overflowed while growing.
    CapacityOverflow {
        requested: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity of {} slots overflows the address space", requested)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
        }
    }
}

impl core::error::Error for CapacityError {}
