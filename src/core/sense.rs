//! SCSI sense data decoding
//!
//! Sense buffers come back from SG_IO in either fixed (0x70/0x71) or
//! descriptor (0x72/0x73) format. ATA passthrough normally produces the
//! descriptor format, but some bridges answer with fixed sense.

use super::sense_table::SENSE_DESCRIPTIONS;

/// Sense key (low nibble of the key byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenseKey {
    NoSense,
    RecoveredError,
    NotReady,
    MediumError,
    HardwareError,
    IllegalRequest,
    UnitAttention,
    DataProtect,
    BlankCheck,
    VendorSpecific,
    CopyAborted,
    AbortedCommand,
    Obsolete,
    VolumeOverflow,
    Miscompare,
    Completed,
}

impl SenseKey {
    pub fn from_nibble(value: u8) -> Self {
        match value & 0x0F {
            0x0 => Self::NoSense,
            0x1 => Self::RecoveredError,
            0x2 => Self::NotReady,
            0x3 => Self::MediumError,
            0x4 => Self::HardwareError,
            0x5 => Self::IllegalRequest,
            0x6 => Self::UnitAttention,
            0x7 => Self::DataProtect,
            0x8 => Self::BlankCheck,
            0x9 => Self::VendorSpecific,
            0xA => Self::CopyAborted,
            0xB => Self::AbortedCommand,
            0xC => Self::Obsolete,
            0xD => Self::VolumeOverflow,
            0xE => Self::Miscompare,
            _ => Self::Completed,
        }
    }

    /// Returns true if the key does not indicate a failed command
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::NoSense | Self::RecoveredError)
    }
}

/// Decoded fields of a sense buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseData {
    pub response_code: u8,
    pub key: SenseKey,
    pub asc: u8,
    pub ascq: u8,
}

impl SenseData {
    /// Decodes a sense buffer
    ///
    /// Returns `None` when the buffer is too short or does not carry a
    /// recognised response code (for example, an all-zero buffer).
    pub fn parse(buf: &[u8]) -> Option<Self> {
        let response_code = *buf.first()? & 0x7F;

        match response_code {
            0x70 | 0x71 => {
                if buf.len() < 14 {
                    return None;
                }
                Some(Self {
                    response_code,
                    key: SenseKey::from_nibble(buf[2]),
                    asc: buf[12],
                    ascq: buf[13],
                })
            }
            0x72 | 0x73 => {
                if buf.len() < 4 {
                    return None;
                }
                Some(Self {
                    response_code,
                    key: SenseKey::from_nibble(buf[1]),
                    asc: buf[2],
                    ascq: buf[3],
                })
            }
            _ => None,
        }
    }
}

/// Looks up the description of an ASC/ASCQ pair
pub fn lookup(asc: u8, ascq: u8) -> Option<&'static str> {
    SENSE_DESCRIPTIONS
        .binary_search_by_key(&(asc, ascq), |&(a, q, _)| (a, q))
        .ok()
        .map(|idx| SENSE_DESCRIPTIONS[idx].2)
}

/// Human readable form of an ASC/ASCQ pair, e.g. `1105 L-Ec Uncorrectable Error`
pub fn describe(asc: u8, ascq: u8) -> String {
    match lookup(asc, ascq) {
        Some(text) => format!("{:02x}{:02x} {}", asc, ascq, text),
        None => format!("{:02x}{:02x} unknown sense code", asc, ascq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor_format() {
        let buf = [0x72, 0x03, 0x11, 0x04, 0, 0, 0, 0x0E];
        let sense = SenseData::parse(&buf).unwrap();
        assert_eq!(sense.key, SenseKey::MediumError);
        assert_eq!((sense.asc, sense.ascq), (0x11, 0x04));
    }

    #[test]
    fn test_parse_fixed_format() {
        let mut buf = [0u8; 18];
        buf[0] = 0xF0; // valid bit set
        buf[2] = 0x05;
        buf[12] = 0x24;
        buf[13] = 0x00;
        let sense = SenseData::parse(&buf).unwrap();
        assert_eq!(sense.key, SenseKey::IllegalRequest);
        assert_eq!((sense.asc, sense.ascq), (0x24, 0x00));
    }

    #[test]
    fn test_parse_rejects_empty_buffer() {
        assert!(SenseData::parse(&[0u8; 32]).is_none());
        assert!(SenseData::parse(&[]).is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(0x32, 0x00), "3200 No Defect Spare Location Available");
        assert_eq!(describe(0xFF, 0xEE), "ffee unknown sense code");
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(SENSE_DESCRIPTIONS
            .windows(2)
            .all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
    }
}
