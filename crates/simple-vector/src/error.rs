use svec_mem::CapacityError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VecError {
    /// Checked access with `index >= size`.
    OutOfRange {
        index: usize,
        size: usize,
    },
    Capacity(CapacityError),
}

impl From<CapacityError> for VecError {

    fn from(value: CapacityError) -> Self {
        Self::Capacity(value)
    }
}

impl core::fmt::Display for VecError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {} is out of range for size {}", index, size)
            },
            Self::Capacity(err) => write!(f, "{}", err),
        }
    }
}

impl core::error::Error for VecError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Capacity(err) => Some(err),
        }
    }
}
