//! File system queries
//!
//! Physical extents of files and the device nodes backing them.

pub mod block_to_file;
pub mod device_lookup;
pub mod fiemap;

pub use block_to_file::{file_blocks, BlockToFileMapper};
pub use device_lookup::{backing_device, is_block_device};
pub use fiemap::FiemapExtentSource;
