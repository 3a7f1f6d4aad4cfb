//! File extent source trait

use crate::core::ErrorCode;
use std::path::Path;

/// A run of device blocks backing part of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileExtent {
    /// First device block (in logical block units)
    pub block: u64,
    /// Length in blocks
    pub length: u64,
}

/// Resolves which device blocks back a file
pub trait ExtentSource {
    /// Logical block size of the device holding `path`
    fn block_size(&self, path: &Path) -> Result<u64, ErrorCode>;

    /// Physical extents of the regular file at `path`, in device blocks
    /// of `block_size` bytes
    fn extents(&self, path: &Path, block_size: u64) -> Result<Vec<FileExtent>, ErrorCode>;
}
