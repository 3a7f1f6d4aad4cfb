//! FIEMAP extent queries
//!
//! Asks the filesystem for the physical extents of a file through
//! `FS_IOC_FIEMAP`, fetching a fixed batch of extents per call until the
//! kernel flags the last one.

use super::device_lookup;
use crate::core::ErrorCode;
use crate::domain::repositories::{ExtentSource, FileExtent};
use std::fs::OpenOptions;
use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

const FS_IOC_FIEMAP: libc::c_ulong = 0xC020_660B;
const FIEMAP_EXTENT_LAST: u32 = 0x0000_0001;
const FIEMAP_MAX_OFFSET: u64 = u64::MAX;
/// Extents fetched per ioctl
const EXTENTS_PER_CALL: usize = 64;

/// `struct fiemap_extent`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
struct RawExtent {
    fe_logical: u64,
    fe_physical: u64,
    fe_length: u64,
    fe_reserved64: [u64; 2],
    fe_flags: u32,
    fe_reserved: [u32; 3],
}

impl RawExtent {
    const EMPTY: Self = Self {
        fe_logical: 0,
        fe_physical: 0,
        fe_length: 0,
        fe_reserved64: [0; 2],
        fe_flags: 0,
        fe_reserved: [0; 3],
    };

    fn is_last(&self) -> bool {
        self.fe_flags & FIEMAP_EXTENT_LAST != 0
    }
}

/// `struct fiemap` followed by its extent array
#[repr(C)]
#[allow(dead_code)]
struct FiemapRequest {
    fm_start: u64,
    fm_length: u64,
    fm_flags: u32,
    fm_mapped_extents: u32,
    fm_extent_count: u32,
    fm_reserved: u32,
    fm_extents: [RawExtent; EXTENTS_PER_CALL],
}

impl FiemapRequest {
    fn starting_at(start: u64) -> Self {
        Self {
            fm_start: start,
            fm_length: FIEMAP_MAX_OFFSET - start,
            fm_flags: 0,
            fm_mapped_extents: 0,
            fm_extent_count: EXTENTS_PER_CALL as u32,
            fm_reserved: 0,
            fm_extents: [RawExtent::EMPTY; EXTENTS_PER_CALL],
        }
    }

    fn mapped(&self) -> &[RawExtent] {
        let count = (self.fm_mapped_extents as usize).min(EXTENTS_PER_CALL);
        &self.fm_extents[..count]
    }
}

fn to_file_extent(raw: &RawExtent, block_size: u64) -> FileExtent {
    FileExtent {
        block: raw.fe_physical / block_size,
        length: raw.fe_length / block_size,
    }
}

/// Physical extents of an open file, in device blocks of `block_size` bytes
pub fn file_extents(fd: BorrowedFd<'_>, block_size: u64) -> Result<Vec<FileExtent>, ErrorCode> {
    if block_size == 0 {
        return Err(ErrorCode::Os(libc::EINVAL));
    }

    let mut extents = Vec::new();
    let mut start = 0u64;

    loop {
        let mut request = FiemapRequest::starting_at(start);
        let rv = unsafe { libc::ioctl(fd.as_raw_fd(), FS_IOC_FIEMAP as _, &mut request) };
        if rv == -1 {
            return Err(io::Error::last_os_error().into());
        }

        let mapped = request.mapped();
        let Some(last) = mapped.last() else {
            break;
        };

        extents.extend(mapped.iter().map(|raw| to_file_extent(raw, block_size)));

        if last.is_last() {
            break;
        }
        start = last.fe_logical.saturating_add(last.fe_length);
    }

    Ok(extents)
}

/// Extent source backed by the running kernel
#[derive(Debug, Clone, Copy, Default)]
pub struct FiemapExtentSource;

impl ExtentSource for FiemapExtentSource {
    fn block_size(&self, path: &Path) -> Result<u64, ErrorCode> {
        device_lookup::logical_block_size(path)
    }

    fn extents(&self, path: &Path, block_size: u64) -> Result<Vec<FileExtent>, ErrorCode> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NOFOLLOW)
            .open(path)?;
        file_extents(file.as_fd(), block_size)
    }
}
