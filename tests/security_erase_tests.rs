//! Security erase flow tests
//!
//! The erase sequence against the in-memory transport with a scripted
//! operator.

use bbf::application::{EraseEstimate, Prompter, SecurityEraseUseCase};
use bbf::core::{ErrorCode, ErrorKind, Result};
use bbf::domain::entities::{DeviceGeometry, DeviceIdentity};
use bbf::infrastructure::block_device::{MemoryBlockDevice, SecurityEvent, SecurityStep};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::*;
use std::collections::VecDeque;
use std::time::Duration;

/// Operator that answers from a script
struct ScriptedPrompter {
    passwords: VecDeque<String>,
    /// `None` retypes the challenge correctly
    confirmation: Option<String>,
    messages: Vec<String>,
    challenges: Vec<String>,
}

impl ScriptedPrompter {
    fn new(passwords: &[&str]) -> Self {
        Self {
            passwords: passwords.iter().map(|p| p.to_string()).collect(),
            confirmation: None,
            messages: Vec::new(),
            challenges: Vec::new(),
        }
    }

    fn mistyping(mut self, typed: &str) -> Self {
        self.confirmation = Some(typed.to_string());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn password(&mut self, _security_enabled: bool) -> Result<String> {
        Ok(self.passwords.pop_front().unwrap_or_default())
    }

    fn confirm(&mut self, challenge: &str) -> Result<String> {
        self.challenges.push(challenge.to_string());
        Ok(self
            .confirmation
            .clone()
            .unwrap_or_else(|| challenge.to_string()))
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

const CAPACITY: u64 = 60 * 1024 * 1024 * 1024;

#[fixture]
fn identity() -> DeviceIdentity {
    DeviceIdentity {
        serial_number: "S1".to_string(),
        model_number: "TEST SSD".to_string(),
        security_supported: true,
        security_enhanced_erase_supported: true,
        security_normal_erase_time: 2,
        security_enhanced_erase_time: 4,
        ..Default::default()
    }
}

fn drive(identity: DeviceIdentity) -> MemoryBlockDevice {
    let geometry = DeviceGeometry::new(512, 512, 64 * 512).unwrap();
    let mut device = MemoryBlockDevice::new(geometry).with_identity(identity);
    device.block_mut(3).fill(0x77);
    device
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ============================================================================
// Estimate Tests
// ============================================================================

#[rstest]
fn test_estimate_takes_the_larger_time(identity: DeviceIdentity) {
    let geometry = DeviceGeometry::new(512, 4096, CAPACITY).unwrap();

    let normal = EraseEstimate::new(&identity, &geometry, false);
    assert_eq!(normal.reported, Duration::from_secs(120));
    assert_eq!(normal.estimated, Duration::from_secs(2048));
    assert_eq!(normal.timeout(), Duration::from_secs(2048));

    let mut slow = identity.clone();
    slow.security_enhanced_erase_time = 600;
    let enhanced = EraseEstimate::new(&slow, &geometry, true);
    assert_eq!(enhanced.timeout(), Duration::from_secs(36_000));
}

// ============================================================================
// Erase Sequence Tests
// ============================================================================

#[rstest]
fn test_full_sequence(identity: DeviceIdentity) {
    let mut device = drive(identity);
    let mut prompter = ScriptedPrompter::new(&["", "hunter2"]);

    let estimate = SecurityEraseUseCase::new(false)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap();

    assert_eq!(
        device.security_events(),
        &[
            SecurityEvent::SetPassword,
            SecurityEvent::ErasePrepare,
            SecurityEvent::EraseUnit {
                enhanced: false,
                timeout: estimate.timeout(),
            },
        ]
    );
    assert!(device.block(3).iter().all(|&b| b == 0));
    assert!(prompter
        .messages
        .iter()
        .any(|m| m.contains("can not be empty")));
    assert_eq!(prompter.challenges.len(), 1);
}

#[rstest]
fn test_existing_password_is_not_reset(mut identity: DeviceIdentity) {
    identity.security_enabled = true;
    let mut device = drive(identity);
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);

    SecurityEraseUseCase::new(true)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap();

    assert_eq!(device.security_events().len(), 2);
    assert_eq!(device.security_events()[0], SecurityEvent::ErasePrepare);
    assert!(matches!(
        device.security_events()[1],
        SecurityEvent::EraseUnit { enhanced: true, .. }
    ));
}

#[rstest]
fn test_frozen_drive_is_refused(mut identity: DeviceIdentity) {
    identity.security_frozen = true;
    let mut device = drive(identity);
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);

    let err = SecurityEraseUseCase::new(false)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert_eq!(err.code(), ErrorCode::Os(libc::EBUSY));
    assert!(err.context().contains("frozen"));
    assert!(prompter.challenges.is_empty());
    assert!(device.security_events().is_empty());
}

#[rstest]
fn test_mistyped_confirmation_aborts(identity: DeviceIdentity) {
    let mut device = drive(identity);
    let mut prompter = ScriptedPrompter::new(&["hunter2"]).mistyping("nope");

    let err = SecurityEraseUseCase::new(false)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Captcha);
    assert!(device.security_events().is_empty());
    assert!(device.block(3).iter().all(|&b| b == 0x77));
}

#[rstest]
#[case(SecurityStep::SetPassword, 0)]
#[case(SecurityStep::ErasePrepare, 1)]
#[case(SecurityStep::EraseUnit, 2)]
fn test_failing_step_stops_the_sequence(
    identity: DeviceIdentity,
    #[case] step: SecurityStep,
    #[case] completed: usize,
) {
    let mut device = drive(identity);
    device.fail_security(step, ErrorCode::Sense { asc: 0x24, ascq: 0x00 });
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);

    let err = SecurityEraseUseCase::new(false)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert_eq!(err.code(), ErrorCode::Sense { asc: 0x24, ascq: 0x00 });
    assert_eq!(device.security_events().len(), completed);
    assert!(device.block(3).iter().all(|&b| b == 0x77));
}

#[rstest]
fn test_enhanced_requires_support(mut identity: DeviceIdentity) {
    identity.security_enhanced_erase_supported = false;
    let mut device = drive(identity);
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);

    let err = SecurityEraseUseCase::new(true)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::Os(libc::EOPNOTSUPP));
}

#[test]
fn test_drive_without_identity_is_refused() {
    let geometry = DeviceGeometry::new(512, 512, 64 * 512).unwrap();
    let mut device = MemoryBlockDevice::new(geometry);
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);

    let err = SecurityEraseUseCase::new(false)
        .execute(&mut device, &mut prompter, &mut rng())
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::Os(libc::EOPNOTSUPP));
}
