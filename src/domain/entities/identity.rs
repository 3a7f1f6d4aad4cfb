//! Device identity entity
//!
//! Populated once from the ATA IDENTIFY DEVICE response when the device is
//! opened. Devices that do not answer IDENTIFY (plain SCSI, USB bridges
//! without passthrough) simply have no identity.

use serde::Serialize;

/// Identity and capability flags reported by an ATA device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    /// Serial number (IDENTIFY words 10-19)
    pub serial_number: String,
    /// Firmware revision (IDENTIFY words 23-26)
    pub firmware_revision: String,
    /// Model number (IDENTIFY words 27-46)
    pub model_number: String,
    /// Nominal media rotation rate; 1 means non-rotating media
    pub rpm: u16,
    /// Nominal form factor code (IDENTIFY word 168, bits 3:0)
    pub form_factor: u8,

    pub smart_supported: bool,
    pub smart_enabled: bool,

    pub security_supported: bool,
    pub security_enabled: bool,
    pub security_locked: bool,
    pub security_frozen: bool,
    pub security_count_expired: bool,
    pub security_enhanced_erase_supported: bool,
    /// Normal security erase time in minutes
    pub security_normal_erase_time: u32,
    /// Enhanced security erase time in minutes
    pub security_enhanced_erase_time: u32,

    pub block_erase: bool,
    pub overwrite: bool,
    pub crypto_scramble: bool,
    pub sanitize: bool,

    pub sata_gen1: bool,
    pub sata_gen2: bool,
    pub sata_gen3: bool,

    pub trim_supported: bool,
    pub write_uncorrectable_ext: bool,
}

impl DeviceIdentity {
    /// Returns true for solid state media
    pub fn is_non_rotating(&self) -> bool {
        self.rpm == 1
    }

    /// Human readable rotation rate
    pub fn rotation(&self) -> String {
        match self.rpm {
            0 => "not reported".to_string(),
            1 => "non-rotating".to_string(),
            rpm => format!("{} rpm", rpm),
        }
    }

    /// Human readable form factor
    pub fn form_factor_name(&self) -> &'static str {
        match self.form_factor {
            1 => "5.25 inch",
            2 => "3.5 inch",
            3 => "2.5 inch",
            4 => "1.8 inch",
            5 => "less than 1.8 inch",
            6 => "mSATA",
            7 => "M.2",
            8 => "MicroSSD",
            9 => "CFast",
            _ => "not reported",
        }
    }

    /// Reported erase time in minutes for the requested erase variant
    pub fn erase_time_minutes(&self, enhanced: bool) -> u32 {
        if enhanced {
            self.security_enhanced_erase_time
        } else {
            self.security_normal_erase_time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_text() {
        let mut identity = DeviceIdentity::default();
        assert_eq!(identity.rotation(), "not reported");
        identity.rpm = 1;
        assert!(identity.is_non_rotating());
        identity.rpm = 7200;
        assert_eq!(identity.rotation(), "7200 rpm");
    }

    #[test]
    fn test_erase_time_variant() {
        let identity = DeviceIdentity {
            security_normal_erase_time: 60,
            security_enhanced_erase_time: 120,
            ..Default::default()
        };
        assert_eq!(identity.erase_time_minutes(false), 60);
        assert_eq!(identity.erase_time_minutes(true), 120);
    }
}
