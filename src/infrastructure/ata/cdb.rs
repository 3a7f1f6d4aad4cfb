//! SCSI ATA PASS-THROUGH command descriptor blocks
//!
//! Layouts (SAT-3):
//!
//! ```text
//! ATA PASS-THROUGH(12)            ATA PASS-THROUGH(16)
//!  0  opcode 0xA1                  0  opcode 0x85
//!  1  protocol << 1                1  protocol << 1 | extend
//!  2  transfer flags               2  transfer flags
//!  3  feature                      3  feature (15:8)    4  feature (7:0)
//!  4  sector count                 5  count (15:8)      6  count (7:0)
//!  5  lba low                      7  lba low (15:8)    8  lba low (7:0)
//!  6  lba mid                      9  lba mid (15:8)   10  lba mid (7:0)
//!  7  lba high                    11  lba high (15:8)  12  lba high (7:0)
//!  8  device                      13  device
//!  9  command                     14  command
//! 10-11 reserved/control          15  control
//! ```

use super::taskfile::TaskFile;

pub const ATA_PASS_THROUGH_12: u8 = 0xA1;
pub const ATA_PASS_THROUGH_12_LEN: usize = 12;
pub const ATA_PASS_THROUGH_16: u8 = 0x85;
pub const ATA_PASS_THROUGH_16_LEN: usize = 16;

/// Transfer length is in the sector count field
const TLEN_NSECT: u8 = 0x02;
/// Transfer length is counted in blocks
const BYTE_BLOCK: u8 = 0x04;
/// Transfer from device
const TDIR_FROM_DEV: u8 = 0x08;
/// Always return ATA registers in sense data
const CHECK_CONDITION: u8 = 0x20;
/// 48-bit command marker in byte 1 of the 16-byte form
const EXTEND: u8 = 0x01;

/// ATA protocol field of the CDB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    NonData = 3,
    PioIn = 4,
    PioOut = 5,
    Dma = 6,
}

/// Direction of the data phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirection {
    None,
    FromDevice,
    ToDevice,
}

/// Selects the protocol for a transfer
pub fn protocol(direction: DataDirection, dma: bool) -> Protocol {
    match (direction, dma) {
        (DataDirection::None, _) => Protocol::NonData,
        (_, true) => Protocol::Dma,
        (DataDirection::ToDevice, false) => Protocol::PioOut,
        (DataDirection::FromDevice, false) => Protocol::PioIn,
    }
}

/// An encoded command descriptor block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cdb {
    bytes: [u8; ATA_PASS_THROUGH_16_LEN],
    len: usize,
}

impl Cdb {
    /// Encodes a task file
    ///
    /// 48-bit task files use the 16-byte form, everything else the
    /// 12-byte form.
    pub fn encode(tf: &TaskFile, direction: DataDirection, dma: bool) -> Self {
        let mut bytes = [0u8; ATA_PASS_THROUGH_16_LEN];

        bytes[1] = (protocol(direction, dma) as u8) << 1;
        bytes[2] = match direction {
            DataDirection::None => CHECK_CONDITION,
            DataDirection::ToDevice => TLEN_NSECT | BYTE_BLOCK,
            DataDirection::FromDevice => TLEN_NSECT | BYTE_BLOCK | TDIR_FROM_DEV,
        };

        let len = if tf.is_lba48 {
            bytes[0] = ATA_PASS_THROUGH_16;
            bytes[1] |= EXTEND;
            bytes[3] = tf.hob.feature;
            bytes[4] = tf.lob.feature;
            bytes[5] = tf.hob.nsect;
            bytes[6] = tf.lob.nsect;
            bytes[7] = tf.hob.lbal;
            bytes[8] = tf.lob.lbal;
            bytes[9] = tf.hob.lbam;
            bytes[10] = tf.lob.lbam;
            bytes[11] = tf.hob.lbah;
            bytes[12] = tf.lob.lbah;
            bytes[13] = tf.device;
            bytes[14] = tf.command;
            ATA_PASS_THROUGH_16_LEN
        } else {
            bytes[0] = ATA_PASS_THROUGH_12;
            bytes[3] = tf.lob.feature;
            bytes[4] = tf.lob.nsect;
            bytes[5] = tf.lob.lbal;
            bytes[6] = tf.lob.lbam;
            bytes[7] = tf.lob.lbah;
            bytes[8] = tf.device;
            bytes[9] = tf.command;
            ATA_PASS_THROUGH_12_LEN
        };

        Self { bytes, len }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mutable pointer for the SG_IO header
    pub(crate) fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }
}
