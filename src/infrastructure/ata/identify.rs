//! IDENTIFY DEVICE decoding
//!
//! The response is 256 little-endian words. ASCII fields store two
//! characters per word with the first character in the high byte.

use crate::domain::entities::DeviceIdentity;

/// Size of the IDENTIFY DEVICE response
pub const IDENTIFY_LEN: usize = 512;

/// Word 83/87 "valid" pattern: bit 15 clear, bit 14 set
const VALID_MASK: u16 = 0xC000;
const VALID: u16 = 0x4000;

struct Words<'a>(&'a [u8]);

impl Words<'_> {
    fn get(&self, idx: usize) -> u16 {
        let off = idx * 2;
        match self.0.get(off..off + 2) {
            Some(b) => u16::from_le_bytes([b[0], b[1]]),
            None => 0,
        }
    }

    fn bit(&self, idx: usize, mask: u16) -> bool {
        self.get(idx) & mask != 0
    }

    fn valid(&self, idx: usize) -> bool {
        self.get(idx) & VALID_MASK == VALID
    }

    fn string(&self, range: std::ops::Range<usize>) -> String {
        let mut bytes = Vec::with_capacity(range.len() * 2);
        for idx in range {
            let w = self.get(idx);
            bytes.push((w >> 8) as u8);
            bytes.push(w as u8);
        }
        String::from_utf8_lossy(&bytes)
            .trim_matches(|c: char| c.is_whitespace() || c == '\0')
            .to_string()
    }
}

/// Erase time words 89/90: minutes / 2, extended format when bit 15 set
///
/// The maximum field value means "longer than the field can express";
/// an extra 90 minutes of headroom is added in that case.
fn erase_time(word: u16) -> u32 {
    let (value, max) = if word & 0x8000 != 0 {
        ((word & 0x7FFF) as u32, 0x7FFF)
    } else {
        ((word & 0x00FF) as u32, 0x00FF)
    };

    let minutes = value * 2;
    if value == max { minutes + 90 } else { minutes }
}

/// Decodes an IDENTIFY DEVICE response
pub fn decode(buf: &[u8]) -> DeviceIdentity {
    let w = Words(buf);

    DeviceIdentity {
        serial_number: w.string(10..20),
        firmware_revision: w.string(23..27),
        model_number: w.string(27..47),
        rpm: w.get(217),
        form_factor: (w.get(168) & 0x000F) as u8,

        smart_supported: w.valid(83) && w.bit(82, 0x0001),
        smart_enabled: w.valid(87) && w.bit(85, 0x0001),

        security_supported: w.valid(83) && w.bit(82, 0x0002),
        security_enabled: w.valid(87) && w.bit(85, 0x0002),
        security_locked: w.bit(128, 0x0004),
        security_frozen: w.bit(128, 0x0008),
        security_count_expired: w.bit(128, 0x0010),
        security_enhanced_erase_supported: w.bit(128, 0x0020),
        security_normal_erase_time: erase_time(w.get(89)),
        security_enhanced_erase_time: erase_time(w.get(90)),

        block_erase: w.bit(59, 0x8000),
        overwrite: w.bit(59, 0x4000),
        crypto_scramble: w.bit(59, 0x2000),
        sanitize: w.bit(59, 0x1000),

        sata_gen1: w.bit(76, 0x0002),
        sata_gen2: w.bit(76, 0x0004),
        sata_gen3: w.bit(76, 0x0008),

        trim_supported: w.bit(169, 0x0001),
        write_uncorrectable_ext: w.valid(83)
            && w.bit(86, 0x8000)
            && w.get(119) & 0xC004 == 0x4004
            && w.get(120) & 0xC004 == 0x4004,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put_word(buf: &mut [u8], idx: usize, value: u16) {
        buf[idx * 2..idx * 2 + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn put_string(buf: &mut [u8], first_word: usize, words: usize, text: &str) {
        let mut padded = text.as_bytes().to_vec();
        padded.resize(words * 2, b' ');
        for (i, pair) in padded.chunks(2).enumerate() {
            put_word(buf, first_word + i, (pair[0] as u16) << 8 | pair[1] as u16);
        }
    }

    #[test]
    fn test_decode_strings() {
        let mut buf = [0u8; IDENTIFY_LEN];
        put_string(&mut buf, 10, 10, "  WD-123456");
        put_string(&mut buf, 23, 4, "FW01");
        put_string(&mut buf, 27, 20, "WDC WD40EFRX-68N32N0");

        let id = decode(&buf);
        assert_eq!(id.serial_number, "WD-123456");
        assert_eq!(id.firmware_revision, "FW01");
        assert_eq!(id.model_number, "WDC WD40EFRX-68N32N0");
    }

    #[test]
    fn test_decode_capability_words() {
        let mut buf = [0u8; IDENTIFY_LEN];
        put_word(&mut buf, 82, 0x0003);
        put_word(&mut buf, 83, 0x4000);
        put_word(&mut buf, 85, 0x0001);
        put_word(&mut buf, 87, 0x4000);
        put_word(&mut buf, 128, 0x0008 | 0x0020);
        put_word(&mut buf, 217, 5400);
        put_word(&mut buf, 76, 0x000E);

        let id = decode(&buf);
        assert!(id.smart_supported && id.smart_enabled);
        assert!(id.security_supported);
        assert!(!id.security_enabled);
        assert!(id.security_frozen);
        assert!(id.security_enhanced_erase_supported);
        assert!(!id.security_locked);
        assert_eq!(id.rpm, 5400);
        assert!(id.sata_gen1 && id.sata_gen2 && id.sata_gen3);
    }

    #[test]
    fn test_capabilities_ignored_without_valid_word() {
        let mut buf = [0u8; IDENTIFY_LEN];
        put_word(&mut buf, 82, 0x0003);
        put_word(&mut buf, 83, 0xC000);
        let id = decode(&buf);
        assert!(!id.smart_supported);
        assert!(!id.security_supported);
    }

    #[test]
    fn test_write_uncorrectable_support() {
        let mut buf = [0u8; IDENTIFY_LEN];
        put_word(&mut buf, 83, 0x4000);
        put_word(&mut buf, 86, 0x8000);
        put_word(&mut buf, 119, 0x4004);
        put_word(&mut buf, 120, 0x4004);
        assert!(decode(&buf).write_uncorrectable_ext);

        put_word(&mut buf, 120, 0x4000);
        assert!(!decode(&buf).write_uncorrectable_ext);
    }

    #[test]
    fn test_erase_time_formats() {
        assert_eq!(erase_time(30), 60);
        assert_eq!(erase_time(0x8000 | 300), 600);
        assert_eq!(erase_time(0x00FF), 0xFF * 2 + 90);
        assert_eq!(erase_time(0xFFFF), 0x7FFF * 2 + 90);
    }

    #[test]
    fn test_short_buffer_decodes_as_zero() {
        let id = decode(&[0u8; 16]);
        assert_eq!(id, DeviceIdentity::default());
    }
}
