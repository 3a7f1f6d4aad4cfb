//! Block transport traits
//!
//! Defines the interface the bad block operations use to talk to a device.
//! This abstraction lets the lifecycle loops run against a real device
//! node or an in-memory device with injected faults.

use crate::core::ErrorCode;
use crate::domain::entities::{
    AtaPassword, BlockBuffer, DeviceGeometry, DeviceIdentity, UncorrectableMode,
};
use std::fmt;
use std::time::Duration;

/// How read and write requests reach the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Positioned read/write through the kernel block layer
    #[default]
    Os,
    /// ATA PIO commands through SCSI generic passthrough
    Ata,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Os => f.write_str("os"),
            Self::Ata => f.write_str("ata"),
        }
    }
}

/// Block level access to an open device
///
/// Every request addresses whole logical blocks. Implementations validate
/// the block count against the buffer before any I/O and reject requests
/// of more than 65536 blocks with `EINVAL`.
///
/// # Example
///
/// ```ignore
/// let mut device = LinuxBlockDevice::open_read("/dev/sdb")?;
/// let mut buf = BlockBuffer::new(device.geometry().logical_block_size(), 8);
/// let blocks = device.read(0, 8, &mut buf)?;
/// ```
pub trait BlockTransport {
    /// Block sizes and capacity
    fn geometry(&self) -> DeviceGeometry;

    /// ATA identity, if the device answered IDENTIFY DEVICE
    fn identity(&self) -> Option<&DeviceIdentity>;

    /// Reads `blocks` blocks starting at `lba` into `buf`
    ///
    /// # Returns
    ///
    /// The number of blocks transferred. Zero means the end of the usable
    /// range was reached.
    fn read(&mut self, lba: u64, blocks: u64, buf: &mut BlockBuffer) -> Result<u64, ErrorCode>;

    /// Writes `blocks` blocks from `buf` starting at `lba`
    fn write(&mut self, lba: u64, blocks: u64, buf: &BlockBuffer) -> Result<u64, ErrorCode>;

    /// Flushes written data to the media
    fn sync(&mut self) -> Result<(), ErrorCode>;

    /// Marks one block unreadable
    fn write_uncorrectable(&mut self, lba: u64, mode: UncorrectableMode) -> Result<(), ErrorCode>;
}

/// ATA security feature set commands
pub trait AtaSecurity {
    /// SECURITY SET PASSWORD for the user slot
    fn security_set_password(&mut self, password: &AtaPassword) -> Result<(), ErrorCode>;

    /// SECURITY ERASE PREPARE
    fn security_erase_prepare(&mut self) -> Result<(), ErrorCode>;

    /// SECURITY ERASE UNIT
    ///
    /// `timeout` bounds how long the command may run; erasing a large
    /// drive can take hours.
    fn security_erase_unit(
        &mut self,
        password: &AtaPassword,
        enhanced: bool,
        timeout: Duration,
    ) -> Result<(), ErrorCode>;
}
