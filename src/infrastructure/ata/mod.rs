//! ATA passthrough codec
//!
//! Task file construction, CDB encoding, SG_IO execution and IDENTIFY
//! decoding.

pub mod cdb;
pub mod commands;
pub mod identify;
pub mod sg_io;
pub mod taskfile;

pub use cdb::{Cdb, DataDirection, Protocol};
pub use sg_io::{interpret, Completion, Transfer};
pub use taskfile::{needs_lba48, opcode, Registers, TaskFile};
