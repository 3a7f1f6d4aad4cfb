//! Backing block device resolution

use crate::core::ErrorCode;
use crate::infrastructure::block_device::ioctl;
use rustix::fs::{lstat, FileType};
use std::fs::{self, OpenOptions};
use std::os::fd::AsFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEV_DIR: &str = "/dev";

/// Returns true if `path` is a block special file
pub fn is_block_device(path: &Path) -> bool {
    lstat(path)
        .map(|st| FileType::from_raw_mode(st.st_mode) == FileType::BlockDevice)
        .unwrap_or(false)
}

/// Finds the device node whose `st_rdev` matches the `st_dev` of `path`
///
/// A block device path resolves to itself.
pub fn backing_device(path: &Path) -> Result<PathBuf, ErrorCode> {
    if is_block_device(path) {
        return Ok(path.to_path_buf());
    }

    let device = lstat(path)?.st_dev;
    find_in_dir(Path::new(DEV_DIR), device)
}

fn find_in_dir(dir: &Path, device: u64) -> Result<PathBuf, ErrorCode> {
    for entry in fs::read_dir(dir)?.flatten() {
        let candidate = entry.path();
        let Ok(st) = lstat(&candidate) else {
            continue;
        };
        if FileType::from_raw_mode(st.st_mode) == FileType::BlockDevice
            && st.st_rdev as u64 == device
        {
            debug!("{} backs device {:#x}", candidate.display(), device);
            return Ok(candidate);
        }
    }

    Err(ErrorCode::Os(libc::ENOENT))
}

/// Logical block size of the device holding `path`
pub fn logical_block_size(path: &Path) -> Result<u64, ErrorCode> {
    let device = backing_device(path)?;
    let file = OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(&device)?;

    Ok(ioctl::logical_block_size(file.as_fd())? as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_regular_file_is_not_block_device() {
        let file = NamedTempFile::new().unwrap();
        assert!(!is_block_device(file.path()));
        assert!(!is_block_device(Path::new("/nonexistent")));
    }

    #[test]
    fn test_backing_device_missing_path() {
        assert_eq!(
            backing_device(Path::new("/nonexistent/file")),
            Err(ErrorCode::Os(libc::ENOENT))
        );
    }
}
