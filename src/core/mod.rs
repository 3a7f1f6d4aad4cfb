//! Core primitives shared by every layer
//!
//! The error domain, sense decoding and the cancellation context.

pub mod error;
pub mod sense;
mod sense_table;
pub mod signals;

pub use error::{AppError, DriverStatus, ErrorCode, ErrorKind, HostStatus, Result};
pub use signals::OperationContext;
