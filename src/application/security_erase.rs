//! Security erase use case
//!
//! Drives the ATA security feature set through a full erase: password,
//! operator confirmation, SECURITY ERASE PREPARE and SECURITY ERASE UNIT.

use crate::core::{AppError, ErrorCode, Result};
use crate::domain::entities::{AtaPassword, DeviceGeometry, DeviceIdentity};
use crate::domain::repositories::{AtaSecurity, BlockTransport};
use crate::domain::services::confirmation_string;
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Capacity erased per second by the conservative estimate
const ESTIMATE_BYTES_PER_SECOND: u64 = 30 * 1024 * 1024;

/// Operator interaction needed by the erase
pub trait Prompter {
    /// Asks for the drive password
    ///
    /// `security_enabled` tells whether the drive already has one.
    fn password(&mut self, security_enabled: bool) -> Result<String>;

    /// Asks the operator to retype `challenge`; returns what was typed
    fn confirm(&mut self, challenge: &str) -> Result<String>;

    /// Shows a status line
    fn notify(&mut self, message: &str);
}

/// Time budget for the erase command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraseEstimate {
    /// Time reported by the device in IDENTIFY
    pub reported: Duration,
    /// One second per 30 MiB of capacity
    pub estimated: Duration,
}

impl EraseEstimate {
    pub fn new(identity: &DeviceIdentity, geometry: &DeviceGeometry, enhanced: bool) -> Self {
        let minutes = identity.erase_time_minutes(enhanced) as u64;
        Self {
            reported: Duration::from_secs(minutes * 60),
            estimated: Duration::from_secs(geometry.size_in_bytes() / ESTIMATE_BYTES_PER_SECOND),
        }
    }

    /// Command timeout: the larger of the two
    pub fn timeout(&self) -> Duration {
        self.reported.max(self.estimated)
    }
}

/// Security erase use case
pub struct SecurityEraseUseCase {
    enhanced: bool,
}

impl SecurityEraseUseCase {
    pub fn new(enhanced: bool) -> Self {
        Self { enhanced }
    }

    /// Runs the erase sequence
    ///
    /// Any failing step aborts the rest of the sequence.
    pub fn execute<D, P, R>(
        &self,
        device: &mut D,
        prompter: &mut P,
        rng: &mut R,
    ) -> Result<EraseEstimate>
    where
        D: BlockTransport + AtaSecurity + ?Sized,
        P: Prompter + ?Sized,
        R: Rng + ?Sized,
    {
        let identity = device.identity().cloned().ok_or_else(|| {
            AppError::runtime(
                ErrorCode::Os(libc::EOPNOTSUPP),
                "device did not report an ATA identity",
            )
        })?;

        if !identity.security_supported {
            return Err(AppError::runtime(
                ErrorCode::Os(libc::EOPNOTSUPP),
                "security feature set not supported",
            ));
        }
        if identity.security_frozen {
            return Err(AppError::runtime(
                ErrorCode::Os(libc::EBUSY),
                "Security frozen. Unable to continue.",
            ));
        }
        if self.enhanced && !identity.security_enhanced_erase_supported {
            return Err(AppError::runtime(
                ErrorCode::Os(libc::EOPNOTSUPP),
                "enhanced security erase not supported",
            ));
        }

        let estimate = EraseEstimate::new(&identity, &device.geometry(), self.enhanced);
        prompter.notify(&format!(
            "Security erase time: ~{} minutes (reported) & ~{} minutes (estimated from 1s/30MB)",
            estimate.reported.as_secs() / 60,
            estimate.estimated.as_secs() / 60
        ));

        let password = loop {
            let input = prompter.password(identity.security_enabled)?;
            match AtaPassword::new(&input) {
                Some(password) => break password,
                None => prompter.notify("ERROR: reenter password - can not be empty!"),
            }
        };

        let challenge = confirmation_string(rng);
        let given = prompter.confirm(&challenge)?;
        if given != challenge {
            return Err(AppError::captcha(&given, &challenge));
        }

        if !identity.security_enabled {
            device
                .security_set_password(&password)
                .map_err(|code| AppError::runtime(code, "failed to set password"))?;
            prompter.notify("Security password set successfully");
        }

        device
            .security_erase_prepare()
            .map_err(|code| AppError::runtime(code, "security erase prepare instruction failed"))?;
        prompter.notify("Security erase prepare command issued successfully");

        info!(
            "Starting {} security erase, timeout {}s",
            if self.enhanced { "enhanced" } else { "normal" },
            estimate.timeout().as_secs()
        );
        prompter.notify("Security erase starting");

        device
            .security_erase_unit(&password, self.enhanced, estimate.timeout())
            .map_err(|code| AppError::runtime(code, "security erase instruction failed"))?;
        prompter.notify("Security erase finished");

        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_takes_larger() {
        let identity = DeviceIdentity {
            security_normal_erase_time: 2,
            ..Default::default()
        };
        // 3 GiB -> 102 seconds
        let geometry = DeviceGeometry::new(512, 512, 3 << 30).unwrap();
        let estimate = EraseEstimate::new(&identity, &geometry, false);
        assert_eq!(estimate.reported, Duration::from_secs(120));
        assert_eq!(estimate.estimated, Duration::from_secs(102));
        assert_eq!(estimate.timeout(), Duration::from_secs(120));

        let big = DeviceGeometry::new(512, 512, 1 << 40).unwrap();
        let estimate = EraseEstimate::new(&identity, &big, false);
        assert_eq!(estimate.timeout(), Duration::from_secs((1 << 40) / (30 << 20)));
    }
}
