//! Device report
//!
//! Identity, geometry and fingerprint of an open device, as printed by
//! `info` and `captcha`.

use crate::core::AppError;
use crate::domain::entities::DeviceIdentity;
use crate::domain::repositories::BlockTransport;
use crate::domain::services::device_fingerprint;
use humansize::{format_size, BINARY, DECIMAL};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything known about an open device
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceReport {
    pub path: PathBuf,
    pub fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<DeviceIdentity>,
    pub logical_block_size: u32,
    pub physical_block_size: u32,
    pub stepping: u64,
    pub logical_block_count: u64,
    pub physical_block_count: u64,
    pub size_in_bytes: u64,
    pub size_base2: String,
    pub size_base10: String,
}

impl DeviceReport {
    pub fn from_device<T: BlockTransport + ?Sized>(path: &Path, device: &T) -> Self {
        let geometry = device.geometry();
        let identity = device.identity().cloned();

        Self {
            path: path.to_path_buf(),
            fingerprint: device_fingerprint(identity.as_ref(), &geometry),
            identity,
            logical_block_size: geometry.logical_block_size(),
            physical_block_size: geometry.physical_block_size(),
            stepping: geometry.stepping(),
            logical_block_count: geometry.logical_block_count(),
            physical_block_count: geometry.physical_block_count(),
            size_in_bytes: geometry.size_in_bytes(),
            size_base2: format_size(geometry.size_in_bytes(), BINARY),
            size_base10: format_size(geometry.size_in_bytes(), DECIMAL),
        }
    }
}

/// Fails with a captcha error unless `given` matches the device fingerprint
///
/// Checked before any I/O that changes the device.
pub fn confirm_device<T: BlockTransport + ?Sized>(device: &T, given: &str) -> Result<(), AppError> {
    let expected = device_fingerprint(device.identity(), &device.geometry());
    if given != expected {
        return Err(AppError::captcha(given, &expected));
    }
    Ok(())
}
