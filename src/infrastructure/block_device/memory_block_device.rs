//! In-memory block device
//!
//! A RAM-backed transport with injectable faults. Used to drive the bad
//! block operations without real hardware: reads of selected blocks fail
//! with a chosen code, writes can heal those blocks the way a drive
//! reallocates a pending sector, and every request is recorded.

use crate::core::ErrorCode;
use crate::domain::entities::{
    AtaPassword, BlockBuffer, DeviceGeometry, DeviceIdentity, UncorrectableMode,
};
use crate::domain::repositories::{AtaSecurity, BlockTransport, TransportMode};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Error reported for an unreadable block: unrecovered read error,
/// auto reallocate failed
pub const UNRECOVERED_READ_ERROR: ErrorCode = ErrorCode::Sense {
    asc: 0x11,
    ascq: 0x04,
};

/// Largest request the transport accepts, in blocks
const MAX_REQUEST_BLOCKS: u64 = 65536;

/// One security command received by the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityEvent {
    SetPassword,
    ErasePrepare,
    EraseUnit { enhanced: bool, timeout: Duration },
}

/// Security command that should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityStep {
    SetPassword,
    ErasePrepare,
    EraseUnit,
}

type ReadHook = Box<dyn FnMut(u64)>;

/// RAM-backed block device
///
/// # Example
///
/// ```ignore
/// let geometry = DeviceGeometry::new(512, 4096, 64 * 512).unwrap();
/// let mut device = MemoryBlockDevice::new(geometry);
/// device.fail_read(10, UNRECOVERED_READ_ERROR);
/// ```
pub struct MemoryBlockDevice {
    data: Vec<u8>,
    geometry: DeviceGeometry,
    identity: Option<DeviceIdentity>,
    mode: TransportMode,
    read_faults: BTreeMap<u64, ErrorCode>,
    transient_read_faults: BTreeMap<u64, u32>,
    write_faults: BTreeMap<u64, ErrorCode>,
    corrupt_on_read: BTreeSet<u64>,
    short_reads: BTreeSet<u64>,
    short_writes: BTreeSet<u64>,
    uncorrectable: BTreeMap<u64, UncorrectableMode>,
    uncorrectable_faults: BTreeMap<u64, ErrorCode>,
    heal_on_write: bool,
    reads: Vec<(u64, u64)>,
    writes: Vec<(u64, u64)>,
    syncs: usize,
    read_hook: Option<ReadHook>,
    security_events: Vec<SecurityEvent>,
    security_failure: Option<(SecurityStep, ErrorCode)>,
}

impl MemoryBlockDevice {
    /// Creates a zero-filled device with the given geometry
    pub fn new(geometry: DeviceGeometry) -> Self {
        Self {
            data: vec![0; geometry.size_in_bytes() as usize],
            geometry,
            identity: None,
            mode: TransportMode::default(),
            read_faults: BTreeMap::new(),
            transient_read_faults: BTreeMap::new(),
            write_faults: BTreeMap::new(),
            corrupt_on_read: BTreeSet::new(),
            short_reads: BTreeSet::new(),
            short_writes: BTreeSet::new(),
            uncorrectable: BTreeMap::new(),
            uncorrectable_faults: BTreeMap::new(),
            heal_on_write: false,
            reads: Vec::new(),
            writes: Vec::new(),
            syncs: 0,
            read_hook: None,
            security_events: Vec::new(),
            security_failure: None,
        }
    }

    /// Attaches an ATA identity
    pub fn with_identity(mut self, identity: DeviceIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Writes clear read faults on the written blocks
    pub fn with_heal_on_write(mut self) -> Self {
        self.heal_on_write = true;
        self
    }

    /// Fills every block with a byte derived from its number
    pub fn with_block_pattern(mut self) -> Self {
        let block_size = self.block_size();
        for (block, chunk) in self.data.chunks_mut(block_size).enumerate() {
            chunk.fill(block as u8);
        }
        self
    }

    pub fn set_mode(&mut self, mode: TransportMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Makes every read covering `block` fail with `code`
    pub fn fail_read(&mut self, block: u64, code: ErrorCode) {
        self.read_faults.insert(block, code);
    }

    /// Makes the next `times` reads covering `block` fail
    pub fn fail_read_times(&mut self, block: u64, times: u32) {
        self.transient_read_faults.insert(block, times);
    }

    /// Makes every write covering `block` fail with `code`
    pub fn fail_write(&mut self, block: u64, code: ErrorCode) {
        self.write_faults.insert(block, code);
    }

    /// Reads of `block` succeed but return inverted data
    pub fn corrupt_on_read(&mut self, block: u64) {
        self.corrupt_on_read.insert(block);
    }

    /// Reads covering `block` stop just before it
    pub fn short_read_at(&mut self, block: u64) {
        self.short_reads.insert(block);
    }

    /// Writes covering `block` stop just before it
    pub fn short_write_at(&mut self, block: u64) {
        self.short_writes.insert(block);
    }

    /// Makes WRITE UNCORRECTABLE on `block` fail with `code`
    pub fn fail_uncorrectable(&mut self, block: u64, code: ErrorCode) {
        self.uncorrectable_faults.insert(block, code);
    }

    /// Makes one security command fail with `code`
    pub fn fail_security(&mut self, step: SecurityStep, code: ErrorCode) {
        self.security_failure = Some((step, code));
    }

    /// Calls `hook` with the starting block of every read request
    pub fn on_read(&mut self, hook: impl FnMut(u64) + 'static) {
        self.read_hook = Some(Box::new(hook));
    }

    /// Contents of one block
    pub fn block(&self, lba: u64) -> &[u8] {
        let size = self.block_size();
        let offset = lba as usize * size;
        &self.data[offset..offset + size]
    }

    /// Mutable contents of one block
    pub fn block_mut(&mut self, lba: u64) -> &mut [u8] {
        let size = self.block_size();
        let offset = lba as usize * size;
        &mut self.data[offset..offset + size]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read requests received, as `(lba, blocks)`
    pub fn reads(&self) -> &[(u64, u64)] {
        &self.reads
    }

    /// Write requests received, as `(lba, blocks)`
    pub fn writes(&self) -> &[(u64, u64)] {
        &self.writes
    }

    pub fn sync_count(&self) -> usize {
        self.syncs
    }

    /// Blocks marked with WRITE UNCORRECTABLE and not rewritten since
    pub fn uncorrectable_blocks(&self) -> &BTreeMap<u64, UncorrectableMode> {
        &self.uncorrectable
    }

    pub fn security_events(&self) -> &[SecurityEvent] {
        &self.security_events
    }

    fn block_size(&self) -> usize {
        self.geometry.logical_block_size() as usize
    }

    /// Validates a request and returns the blocks it may transfer
    fn admit(&self, lba: u64, blocks: u64, buffer_blocks: u64) -> Result<u64, ErrorCode> {
        if blocks == 0 || blocks > MAX_REQUEST_BLOCKS || blocks > buffer_blocks {
            return Err(ErrorCode::Os(libc::EINVAL));
        }
        let count = self.geometry.logical_block_count();
        if lba >= count {
            return Ok(0);
        }
        Ok(blocks.min(count - lba))
    }

    fn clip(stops: &BTreeSet<u64>, lba: u64, count: u64) -> u64 {
        stops
            .range(lba..lba + count)
            .next()
            .map_or(count, |&stop| stop - lba)
    }

    fn read_fault(&mut self, lba: u64, blocks: u64) -> Option<ErrorCode> {
        for block in lba..lba + blocks {
            if let Some(code) = self.read_faults.get(&block) {
                return Some(*code);
            }
            if self.uncorrectable.contains_key(&block) {
                return Some(UNRECOVERED_READ_ERROR);
            }
            if let Some(remaining) = self.transient_read_faults.get_mut(&block) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(UNRECOVERED_READ_ERROR);
                }
            }
        }
        None
    }

    fn security_result(&self, step: SecurityStep) -> Result<(), ErrorCode> {
        match self.security_failure {
            Some((failing, code)) if failing == step => Err(code),
            _ => Ok(()),
        }
    }
}

impl BlockTransport for MemoryBlockDevice {
    fn geometry(&self) -> DeviceGeometry {
        self.geometry
    }

    fn identity(&self) -> Option<&DeviceIdentity> {
        self.identity.as_ref()
    }

    fn read(&mut self, lba: u64, blocks: u64, buf: &mut BlockBuffer) -> Result<u64, ErrorCode> {
        if let Some(hook) = self.read_hook.as_mut() {
            hook(lba);
        }

        let count = self.admit(lba, blocks, buf.capacity_blocks())?;
        let count = Self::clip(&self.short_reads, lba, count);
        self.reads.push((lba, blocks));
        if count == 0 {
            return Ok(0);
        }
        if let Some(code) = self.read_fault(lba, count) {
            return Err(code);
        }

        let size = self.block_size();
        let offset = lba as usize * size;
        let len = count as usize * size;
        let span = buf.span_mut(count)?;
        span.copy_from_slice(&self.data[offset..offset + len]);

        for block in lba..lba + count {
            if self.corrupt_on_read.contains(&block) {
                let at = (block - lba) as usize * size;
                span[at..at + size].iter_mut().for_each(|b| *b = !*b);
            }
        }

        Ok(count)
    }

    fn write(&mut self, lba: u64, blocks: u64, buf: &BlockBuffer) -> Result<u64, ErrorCode> {
        let count = self.admit(lba, blocks, buf.capacity_blocks())?;
        let count = Self::clip(&self.short_writes, lba, count);
        self.writes.push((lba, blocks));
        if count == 0 {
            return Ok(0);
        }
        if let Some(code) = (lba..lba + count).find_map(|b| self.write_faults.get(&b).copied()) {
            return Err(code);
        }

        let size = self.block_size();
        let offset = lba as usize * size;
        let len = count as usize * size;
        self.data[offset..offset + len].copy_from_slice(buf.span(count)?);

        for block in lba..lba + count {
            self.uncorrectable.remove(&block);
            if self.heal_on_write {
                self.read_faults.remove(&block);
                self.transient_read_faults.remove(&block);
            }
        }

        Ok(count)
    }

    fn sync(&mut self) -> Result<(), ErrorCode> {
        self.syncs += 1;
        Ok(())
    }

    fn write_uncorrectable(&mut self, lba: u64, mode: UncorrectableMode) -> Result<(), ErrorCode> {
        if lba >= self.geometry.logical_block_count() {
            return Err(ErrorCode::Os(libc::EINVAL));
        }
        if let Some(code) = self.uncorrectable_faults.get(&lba) {
            return Err(*code);
        }
        self.uncorrectable.insert(lba, mode);
        Ok(())
    }
}

impl AtaSecurity for MemoryBlockDevice {
    fn security_set_password(&mut self, _password: &AtaPassword) -> Result<(), ErrorCode> {
        self.security_result(SecurityStep::SetPassword)?;
        self.security_events.push(SecurityEvent::SetPassword);
        if let Some(identity) = self.identity.as_mut() {
            identity.security_enabled = true;
        }
        Ok(())
    }

    fn security_erase_prepare(&mut self) -> Result<(), ErrorCode> {
        self.security_result(SecurityStep::ErasePrepare)?;
        self.security_events.push(SecurityEvent::ErasePrepare);
        Ok(())
    }

    fn security_erase_unit(
        &mut self,
        _password: &AtaPassword,
        enhanced: bool,
        timeout: Duration,
    ) -> Result<(), ErrorCode> {
        self.security_result(SecurityStep::EraseUnit)?;
        self.security_events
            .push(SecurityEvent::EraseUnit { enhanced, timeout });
        self.data.fill(0);
        self.uncorrectable.clear();
        if let Some(identity) = self.identity.as_mut() {
            identity.security_enabled = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(blocks: u64) -> MemoryBlockDevice {
        MemoryBlockDevice::new(DeviceGeometry::new(512, 4096, blocks * 512).unwrap())
    }

    #[test]
    fn test_write_then_read_returns_same_data() {
        let mut dev = device(16);
        let data = BlockBuffer::filled(512, 2, 0x5A);
        assert_eq!(dev.write(4, 2, &data).unwrap(), 2);

        let mut buf = BlockBuffer::new(512, 2);
        assert_eq!(dev.read(4, 2, &mut buf).unwrap(), 2);
        assert_eq!(buf, data);
    }

    #[test]
    fn test_read_past_end() {
        let mut dev = device(16);
        let mut buf = BlockBuffer::new(512, 8);
        assert_eq!(dev.read(16, 8, &mut buf).unwrap(), 0);
        assert_eq!(dev.read(12, 8, &mut buf).unwrap(), 4);
    }

    #[test]
    fn test_request_larger_than_buffer() {
        let mut dev = device(16);
        let mut buf = BlockBuffer::new(512, 1);
        assert_eq!(dev.read(0, 2, &mut buf), Err(ErrorCode::Os(libc::EINVAL)));
    }

    #[test]
    fn test_fault_covers_whole_request() {
        let mut dev = device(16);
        dev.fail_read(3, UNRECOVERED_READ_ERROR);

        let mut buf = BlockBuffer::new(512, 8);
        assert_eq!(dev.read(0, 8, &mut buf), Err(UNRECOVERED_READ_ERROR));
        assert_eq!(dev.read(4, 4, &mut buf), Ok(4));
    }

    #[test]
    fn test_heal_on_write() {
        let mut dev = device(8).with_heal_on_write();
        dev.fail_read(2, UNRECOVERED_READ_ERROR);

        let mut buf = BlockBuffer::new(512, 1);
        assert!(dev.read(2, 1, &mut buf).is_err());
        dev.write(2, 1, &BlockBuffer::new(512, 1)).unwrap();
        assert!(dev.read(2, 1, &mut buf).is_ok());
    }

    #[test]
    fn test_uncorrectable_until_rewritten() {
        let mut dev = device(8);
        dev.write_uncorrectable(5, UncorrectableMode::PseudoWithLogging)
            .unwrap();

        let mut buf = BlockBuffer::new(512, 1);
        assert_eq!(dev.read(5, 1, &mut buf), Err(UNRECOVERED_READ_ERROR));
        dev.write(5, 1, &buf.clone()).unwrap();
        assert!(dev.read(5, 1, &mut buf).is_ok());
    }
}
