//! Block device implementations

pub(crate) mod ioctl;
mod linux_block_device;
mod memory_block_device;

pub use linux_block_device::{LinuxBlockDevice, DEFAULT_TIMEOUT};
pub use memory_block_device::{
    MemoryBlockDevice, SecurityEvent, SecurityStep, UNRECOVERED_READ_ERROR,
};
