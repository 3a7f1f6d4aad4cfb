//! ATA task files
//!
//! A task file is the register set describing one ATA command. Commands
//! addressing more than 28 bits of LBA, or more than 255 sectors, use the
//! 48-bit form where the high-order registers carry the upper bytes.

/// ATA command opcodes
pub mod opcode {
    pub const DATA_SET_MANAGEMENT: u8 = 0x06;
    pub const READ_SECTORS: u8 = 0x20;
    pub const READ_SECTORS_EXT: u8 = 0x24;
    pub const READ_DMA_EXT: u8 = 0x25;
    pub const READ_NATIVE_MAX_EXT: u8 = 0x27;
    pub const WRITE_SECTORS: u8 = 0x30;
    pub const WRITE_LONG: u8 = 0x33;
    pub const WRITE_SECTORS_EXT: u8 = 0x34;
    pub const WRITE_DMA_EXT: u8 = 0x35;
    pub const SET_MAX_ADDRESS_EXT: u8 = 0x37;
    pub const READ_VERIFY_SECTORS_EXT: u8 = 0x42;
    pub const WRITE_UNCORRECTABLE_EXT: u8 = 0x45;
    pub const VENDOR_SPECIFIC: u8 = 0x80;
    pub const SMART: u8 = 0xB0;
    pub const FLUSH_CACHE: u8 = 0xE7;
    pub const FLUSH_CACHE_EXT: u8 = 0xEA;
    pub const IDENTIFY_DEVICE: u8 = 0xEC;
    pub const SECURITY_SET_PASSWORD: u8 = 0xF1;
    pub const SECURITY_UNLOCK: u8 = 0xF2;
    pub const SECURITY_ERASE_PREPARE: u8 = 0xF3;
    pub const SECURITY_ERASE_UNIT: u8 = 0xF4;
    pub const SECURITY_FREEZE_LOCK: u8 = 0xF5;
    pub const SECURITY_DISABLE_PASSWORD: u8 = 0xF6;
}

/// Highest block addressable with 28-bit LBA
pub const LBA28_LIMIT: u64 = (1 << 28) - 1;

/// Most sectors a single 48-bit command can transfer (encoded as 0)
pub const MAX_SECTORS_PER_COMMAND: u32 = 65536;

/// Obsolete bits 7 and 5 plus the LBA bit (6)
const DEVICE_LBA: u8 = 0x40 | 0xA0;

/// One bank of ATA registers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub feature: u8,
    pub nsect: u8,
    pub lbal: u8,
    pub lbam: u8,
    pub lbah: u8,
}

/// Register contents for one ATA command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFile {
    pub command: u8,
    pub device: u8,
    pub is_lba48: bool,
    /// Current (low order) registers
    pub lob: Registers,
    /// Previous (high order) registers, only meaningful when `is_lba48`
    pub hob: Registers,
}

/// Decides whether a command must use 48-bit addressing
///
/// Extended opcodes always do, a handful of non-addressed opcodes never
/// do, everything else depends on the LBA and sector count.
pub fn needs_lba48(command: u8, lba: u64, nsect: u32) -> bool {
    match command {
        opcode::DATA_SET_MANAGEMENT
        | opcode::READ_SECTORS_EXT
        | opcode::READ_DMA_EXT
        | opcode::READ_NATIVE_MAX_EXT
        | opcode::WRITE_SECTORS_EXT
        | opcode::WRITE_DMA_EXT
        | opcode::SET_MAX_ADDRESS_EXT
        | opcode::READ_VERIFY_SECTORS_EXT
        | opcode::WRITE_UNCORRECTABLE_EXT
        | opcode::FLUSH_CACHE_EXT => true,
        opcode::SECURITY_ERASE_PREPARE
        | opcode::SECURITY_ERASE_UNIT
        | opcode::VENDOR_SPECIFIC
        | opcode::SMART => false,
        _ => {
            if lba >= LBA28_LIMIT || nsect > 0xFF {
                return true;
            }
            nsect > 0 && lba + nsect as u64 - 1 >= LBA28_LIMIT
        }
    }
}

impl TaskFile {
    /// Builds the task file for `command` at `lba` covering `nsect` sectors
    ///
    /// A count of 65536 is written as 0, which ATA defines as the maximum
    /// for 48-bit commands. Callers reject larger counts.
    pub fn new(command: u8, lba: u64, nsect: u32) -> Self {
        let is_lba48 = needs_lba48(command, lba, nsect);
        let mut device = DEVICE_LBA;

        let lob = Registers {
            feature: 0,
            nsect: nsect as u8,
            lbal: lba as u8,
            lbam: (lba >> 8) as u8,
            lbah: (lba >> 16) as u8,
        };

        let hob = if is_lba48 {
            Registers {
                feature: 0,
                nsect: (nsect >> 8) as u8,
                lbal: (lba >> 24) as u8,
                lbam: (lba >> 32) as u8,
                lbah: (lba >> 40) as u8,
            }
        } else {
            device |= ((lba >> 24) & 0x0F) as u8;
            Registers::default()
        };

        Self {
            command,
            device,
            is_lba48,
            lob,
            hob,
        }
    }

    /// Sets the low-order feature register
    pub fn with_feature(mut self, feature: u8) -> Self {
        self.lob.feature = feature;
        self
    }

    /// Forces 48-bit encoding
    pub fn with_lba48(mut self) -> Self {
        self.is_lba48 = true;
        self
    }

    /// Reassembles the LBA from the registers
    pub fn lba(&self) -> u64 {
        let low = self.lob.lbal as u64 | (self.lob.lbam as u64) << 8 | (self.lob.lbah as u64) << 16;

        if self.is_lba48 {
            low | (self.hob.lbal as u64) << 24
                | (self.hob.lbam as u64) << 32
                | (self.hob.lbah as u64) << 40
        } else {
            low | ((self.device & 0x0F) as u64) << 24
        }
    }

    /// Sector count encoded in the registers (0 means 65536 in 48-bit mode)
    pub fn sector_count(&self) -> u32 {
        if self.is_lba48 {
            self.lob.nsect as u32 | (self.hob.nsect as u32) << 8
        } else {
            self.lob.nsect as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_opcodes_force_lba48() {
        assert!(needs_lba48(opcode::READ_SECTORS_EXT, 0, 1));
        assert!(needs_lba48(opcode::WRITE_UNCORRECTABLE_EXT, 0, 1));
        assert!(!needs_lba48(opcode::SECURITY_ERASE_UNIT, LBA28_LIMIT + 10, 1));
    }

    #[test]
    fn test_addressing_limit_decides_otherwise() {
        assert!(!needs_lba48(opcode::READ_SECTORS, 0, 255));
        assert!(needs_lba48(opcode::READ_SECTORS, 0, 256));
        assert!(needs_lba48(opcode::READ_SECTORS, LBA28_LIMIT, 1));
        assert!(needs_lba48(opcode::READ_SECTORS, LBA28_LIMIT - 1, 2));
        assert!(!needs_lba48(opcode::READ_SECTORS, LBA28_LIMIT - 1, 1));
    }

    #[test]
    fn test_lba28_layout() {
        let tf = TaskFile::new(opcode::READ_SECTORS, 0x0ABC_DEF1, 8);
        assert!(!tf.is_lba48);
        assert_eq!(tf.lob.lbal, 0xF1);
        assert_eq!(tf.lob.lbam, 0xDE);
        assert_eq!(tf.lob.lbah, 0xBC);
        assert_eq!(tf.device, 0xE0 | 0x0A);
        assert_eq!(tf.lba(), 0x0ABC_DEF1);
    }

    #[test]
    fn test_lba48_layout() {
        let tf = TaskFile::new(opcode::READ_SECTORS_EXT, 0x1234_5678_9ABC, 0x0102);
        assert!(tf.is_lba48);
        assert_eq!(tf.device, 0xE0);
        assert_eq!(tf.lob.nsect, 0x02);
        assert_eq!(tf.hob.nsect, 0x01);
        assert_eq!(tf.hob.lbah, 0x12);
        assert_eq!(tf.hob.lbam, 0x34);
        assert_eq!(tf.hob.lbal, 0x56);
        assert_eq!(tf.lba(), 0x1234_5678_9ABC);
        assert_eq!(tf.sector_count(), 0x0102);
    }

    #[test]
    fn test_max_sector_count_rolls_to_zero() {
        let tf = TaskFile::new(opcode::READ_SECTORS_EXT, 0, MAX_SECTORS_PER_COMMAND);
        assert_eq!(tf.lob.nsect, 0);
        assert_eq!(tf.hob.nsect, 0);
    }
}
