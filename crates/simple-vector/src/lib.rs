//! A growable, contiguous array with explicit capacity control.
//!
//! [`SimpleVector`] keeps its elements in a single [`Buffer`](svec_mem::Buffer) and
//! tracks how many of the buffer's slots are live. Appends grow the buffer by doubling
//! (`0 -> 1 -> 2 -> 4 -> ...`), explicit [`reserve`](SimpleVector::reserve) and
//! [`resize`](SimpleVector::resize) grow it to exactly the requested capacity, and
//! nothing ever shrinks it implicitly.
//!
//! # Examples
//!
//! ```rust
//! use simple_vector::{simple_vec, reserve, SimpleVector};
//!
//! let mut vec = simple_vec![10, 20];
//! vec.insert(1, 15);
//! assert_eq!(vec, [10, 15, 20]);
//!
//! vec.erase(1);
//! assert_eq!(vec, [10, 20]);
//! assert!(vec.at(5).is_err());
//!
//! let reserved = SimpleVector::<u32>::from(reserve(16));
//! assert_eq!((reserved.size(), reserved.capacity()), (0, 16));
//! ```
//!
//! # Features
//!
//! - `log` (default): reallocations are reported at trace level through `svec-log`,
//!   filtered with `RUST_LOG` (e.g. `RUST_LOG=simple_vector=trace`).

#[macro_use]
mod macros;

mod error;
mod reserve;
mod simple_vector;

pub mod capacity_policy;

pub use error::VecError;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vector::{SimpleVector, IntoIter};

pub use svec_mem::CapacityError;

pub type Result<T> = core::result::Result<T, VecError>;
