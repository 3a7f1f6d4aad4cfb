//! Device fingerprint
//!
//! A short checksum of identity and geometry. Destructive operations
//! require the operator to pass it back, so a command aimed at the wrong
//! device fails before any I/O is issued.

use crate::domain::entities::{DeviceGeometry, DeviceIdentity};
use crc32fast::Hasher;

/// Computes the fingerprint as eight lowercase hex digits
pub fn device_fingerprint(identity: Option<&DeviceIdentity>, geometry: &DeviceGeometry) -> String {
    let mut hasher = Hasher::new();

    if let Some(identity) = identity {
        hasher.update(identity.serial_number.as_bytes());
        hasher.update(identity.model_number.as_bytes());
    }
    hasher.update(&geometry.logical_block_size().to_le_bytes());
    hasher.update(&geometry.physical_block_size().to_le_bytes());
    hasher.update(&geometry.size_in_bytes().to_le_bytes());

    format!("{:08x}", hasher.finalize())
}
