//! ATA protocol codec tests
//!
//! Task file addressing, CDB layout, completion interpretation and
//! IDENTIFY decoding. Nothing here touches a device.

use bbf::core::sense::{SenseData, SenseKey};
use bbf::core::{DriverStatus, ErrorCode, HostStatus};
use bbf::domain::entities::UncorrectableMode;
use bbf::infrastructure::ata::cdb::{ATA_PASS_THROUGH_12, ATA_PASS_THROUGH_16};
use bbf::infrastructure::ata::commands::{feature_code, sector_count};
use bbf::infrastructure::ata::identify::{decode, IDENTIFY_LEN};
use bbf::infrastructure::ata::{
    interpret, needs_lba48, opcode, Cdb, Completion, DataDirection, TaskFile,
};
use rstest::*;

// ============================================================================
// TaskFile Tests
// ============================================================================

#[rstest]
#[case(opcode::READ_SECTORS, 0, 1, false)]
#[case(opcode::READ_SECTORS, 0x0FFF_FFFE, 1, false)]
#[case(opcode::READ_SECTORS, 0x0FFF_FFFF, 1, true)]
#[case(opcode::READ_SECTORS, 0x0FFF_FFF0, 16, true)]
#[case(opcode::READ_SECTORS, 0, 256, true)]
#[case(opcode::READ_SECTORS_EXT, 0, 1, true)]
#[case(opcode::FLUSH_CACHE_EXT, 0, 0, true)]
#[case(opcode::SECURITY_ERASE_UNIT, 1 << 40, 1, false)]
#[case(opcode::SMART, 1 << 40, 1, false)]
fn test_addressing_mode(
    #[case] command: u8,
    #[case] lba: u64,
    #[case] nsect: u32,
    #[case] lba48: bool,
) {
    assert_eq!(needs_lba48(command, lba, nsect), lba48);
}

#[test]
fn test_lba28_registers() {
    let tf = TaskFile::new(opcode::READ_SECTORS, 0x0ABC_DEF1, 8);

    assert!(!tf.is_lba48);
    assert_eq!(tf.lob.nsect, 8);
    assert_eq!(tf.lob.lbal, 0xF1);
    assert_eq!(tf.lob.lbam, 0xDE);
    assert_eq!(tf.lob.lbah, 0xBC);
    assert_eq!(tf.device & 0x0F, 0x0A);
    assert_eq!(tf.device & 0x40, 0x40);
    assert_eq!(tf.lba(), 0x0ABC_DEF1);
}

#[test]
fn test_lba48_registers() {
    let tf = TaskFile::new(opcode::READ_SECTORS_EXT, 0x1234_5678_9ABC, 0x0102);

    assert!(tf.is_lba48);
    assert_eq!(tf.lob.lbal, 0xBC);
    assert_eq!(tf.hob.lbal, 0x56);
    assert_eq!(tf.hob.lbah, 0x12);
    assert_eq!(tf.lob.nsect, 0x02);
    assert_eq!(tf.hob.nsect, 0x01);
    assert_eq!(tf.device & 0x0F, 0);
    assert_eq!(tf.lba(), 0x1234_5678_9ABC);
    assert_eq!(tf.sector_count(), 0x0102);
}

#[test]
fn test_full_count_encodes_as_zero() {
    let tf = TaskFile::new(opcode::READ_SECTORS_EXT, 0, 65536);
    assert_eq!(tf.lob.nsect, 0);
    assert_eq!(tf.hob.nsect, 0);
}

#[rstest]
#[case(0, None)]
#[case(1, Some(1))]
#[case(65536, Some(65536))]
#[case(65537, None)]
fn test_sector_count_bounds(#[case] blocks: u64, #[case] expected: Option<u32>) {
    match expected {
        Some(count) => assert_eq!(sector_count(blocks).unwrap(), count),
        None => assert_eq!(sector_count(blocks), Err(ErrorCode::Os(libc::EINVAL))),
    }
}

#[rstest]
#[case(UncorrectableMode::PseudoWithLogging, 0x55)]
#[case(UncorrectableMode::PseudoWithoutLogging, 0x5A)]
#[case(UncorrectableMode::FlaggedWithLogging, 0xAA)]
#[case(UncorrectableMode::FlaggedWithoutLogging, 0xA5)]
fn test_uncorrectable_feature(#[case] mode: UncorrectableMode, #[case] feature: u8) {
    assert_eq!(feature_code(mode), feature);
}

// ============================================================================
// CDB Tests
// ============================================================================

#[test]
fn test_cdb_12_for_lba28() {
    let tf = TaskFile::new(opcode::IDENTIFY_DEVICE, 0, 1);
    let cdb = Cdb::encode(&tf, DataDirection::FromDevice, false);
    let bytes = cdb.as_bytes();

    assert_eq!(cdb.len(), 12);
    assert_eq!(bytes[0], ATA_PASS_THROUGH_12);
    assert_eq!(bytes[1] >> 1, 4);
    assert_eq!(bytes[4], 1);
    assert_eq!(bytes[9], opcode::IDENTIFY_DEVICE);
}

#[test]
fn test_cdb_16_for_lba48() {
    let tf = TaskFile::new(opcode::WRITE_SECTORS_EXT, 0x01_0000_0000, 2);
    let cdb = Cdb::encode(&tf, DataDirection::ToDevice, false);
    let bytes = cdb.as_bytes();

    assert_eq!(cdb.len(), 16);
    assert_eq!(bytes[0], ATA_PASS_THROUGH_16);
    assert_eq!(bytes[1] & 0x01, 0x01);
    assert_eq!(bytes[1] >> 1, 5);
    assert_eq!(bytes[6], 2);
    assert_eq!(bytes[9], 0x01);
    assert_eq!(bytes[14], opcode::WRITE_SECTORS_EXT);
}

#[test]
fn test_cdb_non_data_requests_registers() {
    let tf = TaskFile::new(opcode::SECURITY_ERASE_PREPARE, 0, 0);
    let cdb = Cdb::encode(&tf, DataDirection::None, false);

    assert_eq!(cdb.as_bytes()[1] >> 1, 3);
    assert_eq!(cdb.as_bytes()[2] & 0x20, 0x20);
}

// ============================================================================
// Completion Tests
// ============================================================================

fn descriptor_sense(key: u8, asc: u8, ascq: u8) -> Completion {
    let mut completion = Completion::ok();
    completion.status = 0x02;
    completion.driver_status = DriverStatus::SENSE as u16;
    completion.sense[0] = 0x72;
    completion.sense[1] = key;
    completion.sense[2] = asc;
    completion.sense[3] = ascq;
    completion
}

#[test]
fn test_clean_completion() {
    assert_eq!(interpret(&Completion::ok()), Ok(()));
}

#[test]
fn test_passthrough_information_is_benign() {
    assert_eq!(interpret(&descriptor_sense(0x00, 0x00, 0x1D)), Ok(()));
    assert_eq!(interpret(&descriptor_sense(0x01, 0x00, 0x1D)), Ok(()));
}

#[test]
fn test_medium_error_surfaces_sense() {
    assert_eq!(
        interpret(&descriptor_sense(0x03, 0x11, 0x04)),
        Err(ErrorCode::Sense { asc: 0x11, ascq: 0x04 })
    );
}

#[test]
fn test_host_status_wins_over_sense() {
    let mut completion = descriptor_sense(0x03, 0x11, 0x04);
    completion.host_status = 0x03;
    assert_eq!(interpret(&completion), Err(ErrorCode::Host(HostStatus(0x03))));
}

#[test]
fn test_driver_status_without_sense() {
    let mut completion = Completion::ok();
    completion.driver_status = 0x06;
    assert_eq!(
        interpret(&completion),
        Err(ErrorCode::Driver(DriverStatus(0x06)))
    );
}

#[test]
fn test_unexpected_scsi_status() {
    let mut completion = Completion::ok();
    completion.status = 0x18;
    assert_eq!(interpret(&completion), Err(ErrorCode::Os(libc::EBADE)));
}

#[test]
fn test_fixed_sense_format() {
    let mut buf = [0u8; 18];
    buf[0] = 0x70;
    buf[2] = 0x03;
    buf[12] = 0x11;
    buf[13] = 0x00;

    let sense = SenseData::parse(&buf).unwrap();
    assert_eq!(sense.key, SenseKey::MediumError);
    assert_eq!((sense.asc, sense.ascq), (0x11, 0x00));
    assert!(SenseData::parse(&[0u8; 18]).is_none());
}

// ============================================================================
// IDENTIFY Tests
// ============================================================================

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

#[fixture]
fn identify_page() -> [u8; IDENTIFY_LEN] {
    let mut buf = [0u8; IDENTIFY_LEN];
    put_string(&mut buf, 10, 10, "  S3Z9NB0K123456");
    put_string(&mut buf, 23, 4, "RVT04B6Q");
    put_string(&mut buf, 27, 20, "Samsung SSD 860 EVO 500GB");
    put_word(&mut buf, 76, 0x000E);
    put_word(&mut buf, 82, 0x0003);
    put_word(&mut buf, 83, 0x4000);
    put_word(&mut buf, 85, 0x0003);
    put_word(&mut buf, 87, 0x4000);
    put_word(&mut buf, 89, 0x0001);
    put_word(&mut buf, 90, 0x00FF);
    put_word(&mut buf, 128, 0x0029);
    put_word(&mut buf, 168, 0x0003);
    put_word(&mut buf, 169, 0x0001);
    put_word(&mut buf, 217, 0x0001);
    buf
}

#[rstest]
fn test_identify_decode(identify_page: [u8; IDENTIFY_LEN]) {
    let identity = decode(&identify_page);

    assert_eq!(identity.serial_number, "S3Z9NB0K123456");
    assert_eq!(identity.firmware_revision, "RVT04B6Q");
    assert_eq!(identity.model_number, "Samsung SSD 860 EVO 500GB");
    assert!(identity.is_non_rotating());
    assert_eq!(identity.form_factor_name(), "2.5 inch");
    assert!(identity.sata_gen1 && identity.sata_gen2 && identity.sata_gen3);
    assert!(identity.smart_supported && identity.smart_enabled);
    assert!(identity.security_supported && identity.security_enabled);
    assert!(!identity.security_locked);
    assert!(identity.security_frozen);
    assert!(identity.security_enhanced_erase_supported);
    assert!(identity.trim_supported);
    assert_eq!(identity.security_normal_erase_time, 2);
    assert_eq!(identity.security_enhanced_erase_time, 255 * 2 + 90);
}

#[rstest]
fn test_identify_invalid_feature_words(mut identify_page: [u8; IDENTIFY_LEN]) {
    put_word(&mut identify_page, 83, 0xFFFF);
    let identity = decode(&identify_page);

    assert!(!identity.smart_supported);
    assert!(!identity.security_supported);
}
