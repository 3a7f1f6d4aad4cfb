//! ATA commands used by the tool
//!
//! Thin wrappers building the task file and data phase for each command
//! and running it through [`sg_io::execute`].

use super::identify::{self, IDENTIFY_LEN};
use super::sg_io::{self, Transfer};
use super::taskfile::{opcode, TaskFile, MAX_SECTORS_PER_COMMAND};
use crate::core::ErrorCode;
use crate::domain::entities::{
    AtaPassword, DeviceIdentity, PasswordIdentifier, UncorrectableMode, PASSWORD_LEN,
};
use std::os::fd::BorrowedFd;
use std::time::Duration;
use tracing::debug;

/// Timeout for IDENTIFY DEVICE
pub const IDENTIFY_TIMEOUT: Duration = Duration::from_secs(60);
/// Timeout for security set password and erase prepare
pub const SECURITY_TIMEOUT: Duration = Duration::from_secs(15);

/// Feature sub-codes of WRITE UNCORRECTABLE EXT
pub mod uncorrectable {
    pub const PSEUDO_WITH_LOGGING: u8 = 0x55;
    pub const PSEUDO_WITHOUT_LOGGING: u8 = 0x5A;
    pub const FLAGGED_WITHOUT_LOGGING: u8 = 0xA5;
    pub const FLAGGED_WITH_LOGGING: u8 = 0xAA;
}

/// Length of the WRITE LONG payload: one 512-byte sector plus ECC
const WRITE_LONG_LEN: usize = 520;
const WRITE_LONG_FILL: u8 = 0xA5;

/// Size of a security command payload
const SECURITY_PAYLOAD_LEN: usize = 512;

/// Validates a per-request block count
///
/// Every request carries between 1 and 65536 blocks.
pub fn sector_count(blocks: u64) -> Result<u32, ErrorCode> {
    if blocks == 0 || blocks > MAX_SECTORS_PER_COMMAND as u64 {
        return Err(ErrorCode::Os(libc::EINVAL));
    }
    Ok(blocks as u32)
}

pub fn feature_code(mode: UncorrectableMode) -> u8 {
    match mode {
        UncorrectableMode::PseudoWithLogging => uncorrectable::PSEUDO_WITH_LOGGING,
        UncorrectableMode::PseudoWithoutLogging => uncorrectable::PSEUDO_WITHOUT_LOGGING,
        UncorrectableMode::FlaggedWithLogging => uncorrectable::FLAGGED_WITH_LOGGING,
        UncorrectableMode::FlaggedWithoutLogging => uncorrectable::FLAGGED_WITHOUT_LOGGING,
    }
}

/// IDENTIFY DEVICE
pub fn identify(fd: BorrowedFd<'_>) -> Result<DeviceIdentity, ErrorCode> {
    let mut buf = [0u8; IDENTIFY_LEN];
    let tf = TaskFile::new(opcode::IDENTIFY_DEVICE, 0, 1);
    sg_io::execute(fd, &tf, Transfer::FromDevice(&mut buf), false, IDENTIFY_TIMEOUT)?;
    Ok(identify::decode(&buf))
}

/// READ SECTORS EXT (PIO)
pub fn read_sectors(
    fd: BorrowedFd<'_>,
    lba: u64,
    blocks: u64,
    buf: &mut [u8],
    timeout: Duration,
) -> Result<u64, ErrorCode> {
    let count = sector_count(blocks)?;
    let tf = TaskFile::new(opcode::READ_SECTORS_EXT, lba, count);
    sg_io::execute(fd, &tf, Transfer::FromDevice(buf), false, timeout)?;
    Ok(blocks)
}

/// WRITE SECTORS EXT (PIO)
pub fn write_sectors(
    fd: BorrowedFd<'_>,
    lba: u64,
    blocks: u64,
    buf: &[u8],
    timeout: Duration,
) -> Result<u64, ErrorCode> {
    let count = sector_count(blocks)?;
    let tf = TaskFile::new(opcode::WRITE_SECTORS_EXT, lba, count);
    sg_io::execute(fd, &tf, Transfer::ToDevice(buf), false, timeout)?;
    Ok(blocks)
}

/// FLUSH CACHE EXT, falling back to FLUSH CACHE
pub fn flush_cache(fd: BorrowedFd<'_>, timeout: Duration) -> Result<(), ErrorCode> {
    let tf = TaskFile::new(opcode::FLUSH_CACHE_EXT, 0, 0);
    match sg_io::execute(fd, &tf, Transfer::None, false, timeout) {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!("FLUSH CACHE EXT failed ({}), retrying with FLUSH CACHE", err);
            let tf = TaskFile::new(opcode::FLUSH_CACHE, 0, 0);
            sg_io::execute(fd, &tf, Transfer::None, false, timeout)
        }
    }
}

/// WRITE UNCORRECTABLE EXT for one block
///
/// Devices that reject the command get a WRITE LONG with a garbage
/// payload instead, which leaves the sector with a bad ECC.
pub fn write_uncorrectable(
    fd: BorrowedFd<'_>,
    lba: u64,
    mode: UncorrectableMode,
    timeout: Duration,
) -> Result<(), ErrorCode> {
    let tf = TaskFile::new(opcode::WRITE_UNCORRECTABLE_EXT, lba, 1)
        .with_feature(feature_code(mode))
        .with_lba48();

    match sg_io::execute(fd, &tf, Transfer::None, false, timeout) {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!("WRITE UNCORRECTABLE EXT failed at {} ({}), trying WRITE LONG", lba, err);
            let payload = [WRITE_LONG_FILL; WRITE_LONG_LEN];
            let tf = TaskFile::new(opcode::WRITE_LONG, lba, 1);
            sg_io::execute(fd, &tf, Transfer::ToDevice(&payload), false, timeout)
        }
    }
}

/// Builds the 512-byte payload of SET PASSWORD / ERASE UNIT
///
/// Byte 0 bit 0 selects the master password, bit 1 the enhanced erase;
/// bytes 2..34 hold the password.
pub fn security_payload(
    identifier: PasswordIdentifier,
    password: &AtaPassword,
    enhanced: bool,
) -> [u8; SECURITY_PAYLOAD_LEN] {
    let mut data = [0u8; SECURITY_PAYLOAD_LEN];
    if identifier == PasswordIdentifier::Master {
        data[0] |= 0x01;
    }
    if enhanced {
        data[0] |= 0x02;
    }
    data[2..2 + PASSWORD_LEN].copy_from_slice(password.as_bytes());
    data
}

/// SECURITY SET PASSWORD
pub fn security_set_password(
    fd: BorrowedFd<'_>,
    identifier: PasswordIdentifier,
    password: &AtaPassword,
    timeout: Duration,
) -> Result<(), ErrorCode> {
    let data = security_payload(identifier, password, false);
    let tf = TaskFile::new(opcode::SECURITY_SET_PASSWORD, 0, 1);
    sg_io::execute(fd, &tf, Transfer::ToDevice(&data), false, timeout)
}

/// SECURITY ERASE PREPARE
pub fn security_erase_prepare(fd: BorrowedFd<'_>, timeout: Duration) -> Result<(), ErrorCode> {
    let tf = TaskFile::new(opcode::SECURITY_ERASE_PREPARE, 0, 0);
    sg_io::execute(fd, &tf, Transfer::None, false, timeout)
}

/// SECURITY ERASE UNIT
pub fn security_erase_unit(
    fd: BorrowedFd<'_>,
    identifier: PasswordIdentifier,
    password: &AtaPassword,
    enhanced: bool,
    timeout: Duration,
) -> Result<(), ErrorCode> {
    let data = security_payload(identifier, password, enhanced);
    let tf = TaskFile::new(opcode::SECURITY_ERASE_UNIT, 0, 1);
    sg_io::execute(fd, &tf, Transfer::ToDevice(&data), false, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_count_bounds() {
        assert_eq!(sector_count(0), Err(ErrorCode::Os(libc::EINVAL)));
        assert_eq!(sector_count(1), Ok(1));
        assert_eq!(sector_count(65536), Ok(65536));
        assert_eq!(sector_count(65537), Err(ErrorCode::Os(libc::EINVAL)));
    }

    #[test]
    fn test_feature_codes() {
        assert_eq!(feature_code(UncorrectableMode::PseudoWithLogging), 0x55);
        assert_eq!(feature_code(UncorrectableMode::PseudoWithoutLogging), 0x5A);
        assert_eq!(feature_code(UncorrectableMode::FlaggedWithLogging), 0xAA);
        assert_eq!(feature_code(UncorrectableMode::FlaggedWithoutLogging), 0xA5);
    }

    #[test]
    fn test_security_payload_layout() {
        let pw = AtaPassword::new("hunter2").unwrap();

        let data = security_payload(PasswordIdentifier::User, &pw, true);
        assert_eq!(data[0], 0x02);
        assert_eq!(&data[2..9], b"hunter2");
        assert!(data[34..].iter().all(|&b| b == 0));

        let data = security_payload(PasswordIdentifier::Master, &pw, false);
        assert_eq!(data[0], 0x01);
    }
}
