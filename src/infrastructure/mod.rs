//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories: device transports,
//! the ATA passthrough codec, filesystem extent queries and list files.
//! This layer contains all platform-specific code.

pub mod ata;
pub mod block_device;
pub mod file_systems;
pub mod persistence;
