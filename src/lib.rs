//! bbf - bad block finder
//!
//! Scans block devices for unreadable blocks, rewrites them so the drive
//! can reallocate, stress tests media with pattern burn-in, maps blocks to
//! the files that own them and drives the ATA security erase sequence.
//!
//! Layers, innermost first:
//!
//! * [`core`] error domain, sense decoding, cancellation
//! * [`domain`] entities, transport traits and pure services
//! * [`infrastructure`] ATA passthrough, Linux block devices, FIEMAP and
//!   bad block list files
//! * [`application`] the use cases
//! * [`presentation`] the `bbf` command line

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use crate::core::{AppError, ErrorCode, ErrorKind, OperationContext};
