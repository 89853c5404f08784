#[macro_use]
mod log;
mod error;

pub use error::LogError;
pub use log::fmt::{LogFmt, LogFmtBuilder, LogSpec, SegmentSpec};

pub type Result<T> = core::result::Result<T, LogError>;

pub use log::*;
