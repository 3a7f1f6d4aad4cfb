//! Operation result DTOs

use crate::core::ErrorCode;
use std::fmt;
use std::time::Duration;

/// Why a block loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every block of the range was processed
    Completed,
    /// SIGINT/SIGTERM/SIGQUIT was received
    Cancelled,
    /// The device reported no more blocks
    EndOfMedia,
    /// The bad block ceiling was exceeded
    ErrorCeiling,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::EndOfMedia => "end of media",
            Self::ErrorCeiling => "too many errors",
        };
        f.write_str(text)
    }
}

/// Summary of a scan or burn-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopReport {
    pub stop: StopReason,
    pub start_block: u64,
    pub end_block: u64,
    pub stepping: u64,
    /// First block not processed
    pub next_block: u64,
    /// Bad blocks recorded by this run
    pub new_bad_blocks: usize,
    pub elapsed: Duration,
}

/// Result of one retried phase (read or write) of a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseOutcome {
    pub attempts: u32,
    /// Error of the last attempt, if every attempt failed
    pub error: Option<ErrorCode>,
}

impl PhaseOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for PhaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            None => write!(f, "succeeded ({} attempts)", self.attempts),
            Some(code) => write!(f, "failed [{}] ({} attempts)", code, self.attempts),
        }
    }
}

/// Per-block result of a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixOutcome {
    pub block: u64,
    pub read: PhaseOutcome,
    pub write: PhaseOutcome,
}

/// Summary of a fix run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    pub cancelled: bool,
    pub processed: usize,
    pub read_failures: usize,
    pub write_failures: usize,
}

/// Summary of a write-uncorrectable run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UncorrectableReport {
    pub cancelled: bool,
    pub succeeded: usize,
    /// Blocks the device refused, with the error
    pub failed: Vec<(u64, ErrorCode)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_outcome_display() {
        let ok = PhaseOutcome {
            attempts: 1,
            error: None,
        };
        assert_eq!(ok.to_string(), "succeeded (1 attempts)");

        let failed = PhaseOutcome {
            attempts: 3,
            error: Some(ErrorCode::Os(libc::EIO)),
        };
        assert!(!failed.succeeded());
        assert_eq!(failed.to_string(), "failed [Input/output error] (3 attempts)");
    }
}
