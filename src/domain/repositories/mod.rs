//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! They follow the Dependency Inversion Principle (DIP) from SOLID.

mod block_device;
mod extent_source;

pub use block_device::{AtaSecurity, BlockTransport, TransportMode};
pub use extent_source::{ExtentSource, FileExtent};
