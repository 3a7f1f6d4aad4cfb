//! Block device ioctls

use crate::core::ErrorCode;
use std::io;
use std::os::fd::{AsRawFd, BorrowedFd};

const BLKGETSIZE: libc::c_ulong = 0x1260;
const BLKFLSBUF: libc::c_ulong = 0x1261;
const BLKSSZGET: libc::c_ulong = 0x1268;
const BLKPBSZGET: libc::c_ulong = 0x127B;
const BLKGETSIZE64: libc::c_ulong = 0x80081272;

fn check(rv: libc::c_int) -> Result<(), ErrorCode> {
    if rv == -1 {
        Err(io::Error::last_os_error().into())
    } else {
        Ok(())
    }
}

/// Logical (addressable) block size in bytes
pub fn logical_block_size(fd: BorrowedFd<'_>) -> Result<u32, ErrorCode> {
    let mut size: libc::c_int = 0;
    check(unsafe { libc::ioctl(fd.as_raw_fd(), BLKSSZGET as _, &mut size) })?;
    u32::try_from(size).map_err(|_| ErrorCode::Os(libc::EINVAL))
}

/// Physical block size in bytes
pub fn physical_block_size(fd: BorrowedFd<'_>) -> Result<u32, ErrorCode> {
    let mut size: libc::c_uint = 0;
    check(unsafe { libc::ioctl(fd.as_raw_fd(), BLKPBSZGET as _, &mut size) })?;
    Ok(size)
}

/// Device size in bytes
///
/// Falls back to the 512-byte sector count on kernels without
/// BLKGETSIZE64.
pub fn size_in_bytes(fd: BorrowedFd<'_>) -> Result<u64, ErrorCode> {
    let mut size: u64 = 0;
    if check(unsafe { libc::ioctl(fd.as_raw_fd(), BLKGETSIZE64 as _, &mut size) }).is_ok() {
        return Ok(size);
    }

    let mut sectors: libc::c_ulong = 0;
    check(unsafe { libc::ioctl(fd.as_raw_fd(), BLKGETSIZE as _, &mut sectors) })?;
    Ok(sectors as u64 * 512)
}

/// Drops the kernel's buffer cache for the device
pub fn flush_buffers(fd: BorrowedFd<'_>) -> Result<(), ErrorCode> {
    check(unsafe { libc::ioctl(fd.as_raw_fd(), BLKFLSBUF as _, 0) })
}
