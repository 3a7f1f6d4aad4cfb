//! Linux block device implementation
//!
//! Opens a device node, reads its geometry through ioctls and serves
//! block requests either through positioned read/write or through ATA
//! passthrough, selected at runtime with [`TransportMode`].

use super::ioctl;
use crate::core::ErrorCode;
use crate::domain::entities::{
    AtaPassword, BlockBuffer, DeviceGeometry, DeviceIdentity, PasswordIdentifier,
    UncorrectableMode,
};
use crate::domain::repositories::{AtaSecurity, BlockTransport, TransportMode};
use crate::infrastructure::ata::commands;
use rustix::fs::{fadvise, fdatasync, fstat, fsync, Advice, FileType};
use std::fs::{File, OpenOptions};
use std::os::fd::{AsFd, BorrowedFd, IntoRawFd, OwnedFd};
use std::os::unix::fs::{FileExt, OpenOptionsExt};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default per-command timeout for ATA transfers
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// An open Linux block device
///
/// The descriptor is owned by this value and closed exactly once, either
/// by [`LinuxBlockDevice::close`] or on drop.
///
/// # Example
///
/// ```ignore
/// let mut device = LinuxBlockDevice::open_read("/dev/sdb")?;
/// device.set_mode(TransportMode::Ata);
/// println!("{} blocks", device.geometry().logical_block_count());
/// ```
#[derive(Debug)]
pub struct LinuxBlockDevice {
    file: File,
    path: PathBuf,
    geometry: DeviceGeometry,
    identity: Option<DeviceIdentity>,
    mode: TransportMode,
    timeout: Duration,
}

impl LinuxBlockDevice {
    /// Opens a device read-only
    pub fn open_read(path: impl AsRef<Path>) -> Result<Self, ErrorCode> {
        let mut options = OpenOptions::new();
        options.read(true).custom_flags(libc::O_NONBLOCK);
        Self::open_with(path.as_ref(), &options)
    }

    /// Opens a device for reading and writing
    ///
    /// With `exclusive` the open fails with `EBUSY` while the device is
    /// mounted or otherwise claimed.
    pub fn open_read_write(path: impl AsRef<Path>, exclusive: bool) -> Result<Self, ErrorCode> {
        let mut flags = libc::O_NONBLOCK;
        if exclusive {
            flags |= libc::O_EXCL;
        }

        let mut options = OpenOptions::new();
        options.read(true).write(true).custom_flags(flags);
        Self::open_with(path.as_ref(), &options)
    }

    fn open_with(path: &Path, options: &OpenOptions) -> Result<Self, ErrorCode> {
        let file = options.open(path)?;

        let stat = fstat(&file)?;
        if FileType::from_raw_mode(stat.st_mode) != FileType::BlockDevice {
            return Err(ErrorCode::Os(libc::ENOTBLK));
        }

        let identity = match commands::identify(file.as_fd()) {
            Ok(identity) => Some(identity),
            Err(err) => {
                debug!("{} did not answer IDENTIFY DEVICE: {}", path.display(), err);
                None
            }
        };

        let logical = ioctl::logical_block_size(file.as_fd())?;
        let physical = ioctl::physical_block_size(file.as_fd())?;
        let size = ioctl::size_in_bytes(file.as_fd())?;
        let geometry =
            DeviceGeometry::new(logical, physical, size).ok_or(ErrorCode::Os(libc::EINVAL))?;

        if let Err(err) = fadvise(&file, 0, None, Advice::DontNeed) {
            warn!("Unable to drop cached pages for {}: {}", path.display(), err);
        }

        info!(
            "Opened {} ({} bytes, logical {} / physical {})",
            path.display(),
            size,
            logical,
            physical
        );

        Ok(Self {
            file,
            path: path.to_path_buf(),
            geometry,
            identity,
            mode: TransportMode::default(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Returns the device path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Switches between OS and ATA read/write
    pub fn set_mode(&mut self, mode: TransportMode) {
        if mode != self.mode {
            debug!("{}: transport {} -> {}", self.path.display(), self.mode, mode);
        }
        self.mode = mode;
    }

    /// Sets the ATA command timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }

    /// Closes the descriptor, reporting any error from close(2)
    pub fn close(self) -> Result<(), ErrorCode> {
        debug!("Closing {}", self.path.display());
        let fd: OwnedFd = self.file.into();
        let raw = fd.into_raw_fd();
        // SAFETY: `raw` was just released from its owner and is closed once.
        if unsafe { libc::close(raw) } == -1 {
            return Err(std::io::Error::last_os_error().into());
        }
        Ok(())
    }

    fn byte_offset(&self, lba: u64) -> Result<u64, ErrorCode> {
        lba.checked_mul(self.geometry.logical_block_size() as u64)
            .ok_or(ErrorCode::Os(libc::EINVAL))
    }
}

impl BlockTransport for LinuxBlockDevice {
    fn geometry(&self) -> DeviceGeometry {
        self.geometry
    }

    fn identity(&self) -> Option<&DeviceIdentity> {
        self.identity.as_ref()
    }

    fn read(&mut self, lba: u64, blocks: u64, buf: &mut BlockBuffer) -> Result<u64, ErrorCode> {
        commands::sector_count(blocks)?;
        let span = buf.span_mut(blocks)?;

        match self.mode {
            TransportMode::Os => {
                let offset = self.byte_offset(lba)?;
                let bytes = self.file.read_at(span, offset)?;
                Ok(bytes as u64 / self.geometry.logical_block_size() as u64)
            }
            TransportMode::Ata => {
                commands::read_sectors(self.file.as_fd(), lba, blocks, span, self.timeout)
            }
        }
    }

    fn write(&mut self, lba: u64, blocks: u64, buf: &BlockBuffer) -> Result<u64, ErrorCode> {
        commands::sector_count(blocks)?;
        let span = buf.span(blocks)?;

        match self.mode {
            TransportMode::Os => {
                let offset = self.byte_offset(lba)?;
                let bytes = self.file.write_at(span, offset)?;
                Ok(bytes as u64 / self.geometry.logical_block_size() as u64)
            }
            TransportMode::Ata => {
                commands::write_sectors(self.file.as_fd(), lba, blocks, span, self.timeout)
            }
        }
    }

    fn sync(&mut self) -> Result<(), ErrorCode> {
        let results = [
            fsync(&self.file).map_err(ErrorCode::from),
            fdatasync(&self.file).map_err(ErrorCode::from),
            ioctl::flush_buffers(self.file.as_fd()),
        ];

        let mut first_error = results.into_iter().find_map(Result::err);

        if self.mode == TransportMode::Ata {
            if let Err(err) = commands::flush_cache(self.file.as_fd(), self.timeout) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn write_uncorrectable(&mut self, lba: u64, mode: UncorrectableMode) -> Result<(), ErrorCode> {
        commands::write_uncorrectable(self.file.as_fd(), lba, mode, self.timeout)
    }
}

impl AtaSecurity for LinuxBlockDevice {
    fn security_set_password(&mut self, password: &AtaPassword) -> Result<(), ErrorCode> {
        commands::security_set_password(
            self.file.as_fd(),
            PasswordIdentifier::User,
            password,
            commands::SECURITY_TIMEOUT,
        )
    }

    fn security_erase_prepare(&mut self) -> Result<(), ErrorCode> {
        commands::security_erase_prepare(self.file.as_fd(), commands::SECURITY_TIMEOUT)
    }

    fn security_erase_unit(
        &mut self,
        password: &AtaPassword,
        enhanced: bool,
        timeout: Duration,
    ) -> Result<(), ErrorCode> {
        commands::security_erase_unit(
            self.file.as_fd(),
            PasswordIdentifier::User,
            password,
            enhanced,
            timeout,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_nonexistent() {
        let result = LinuxBlockDevice::open_read("/nonexistent/device");
        assert_eq!(result.unwrap_err(), ErrorCode::Os(libc::ENOENT));
    }

    #[test]
    fn test_regular_file_is_not_a_block_device() {
        let file = NamedTempFile::new().unwrap();
        let result = LinuxBlockDevice::open_read(file.path());
        assert_eq!(result.unwrap_err(), ErrorCode::Os(libc::ENOTBLK));
    }
}
