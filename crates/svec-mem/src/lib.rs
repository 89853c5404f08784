mod macros;
mod errors;
mod allocator;
mod global_alloc;
mod buffer;

pub mod slots;

pub use errors::CapacityError;
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use buffer::Buffer;

pub type Result<T> = core::result::Result<T, CapacityError>;
