//! Operation progress view
//!
//! Borrowed snapshot handed to progress callbacks while a block loop runs.

use std::fmt;
use std::time::Duration;

/// Progress of a block loop at one instant
#[derive(Debug, Clone, Copy)]
pub struct OperationProgress<'a> {
    /// First block of the range
    pub start_block: u64,
    /// End of the range (exclusive)
    pub end_block: u64,
    /// Next block to be processed
    pub current_block: u64,
    /// Time since the loop started
    pub elapsed: Duration,
    /// Bad blocks recorded so far
    pub bad_blocks: &'a [u64],
}

impl<'a> OperationProgress<'a> {
    pub fn new(
        start_block: u64,
        end_block: u64,
        current_block: u64,
        elapsed: Duration,
        bad_blocks: &'a [u64],
    ) -> Self {
        Self {
            start_block,
            end_block,
            current_block,
            elapsed,
            bad_blocks,
        }
    }

    /// Blocks processed so far
    pub fn processed(&self) -> u64 {
        self.current_block.saturating_sub(self.start_block)
    }

    /// Blocks in the whole range
    pub fn total(&self) -> u64 {
        self.end_block.saturating_sub(self.start_block)
    }

    /// Returns the progress percentage (0.0 - 100.0)
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 100.0;
        }
        (self.processed() as f64 / total as f64) * 100.0
    }

    /// Throughput in blocks per second
    pub fn blocks_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.processed() as f64 / secs
    }

    /// Estimated time to finish, if throughput is known
    pub fn eta(&self) -> Option<Duration> {
        let bps = self.blocks_per_second();
        if bps <= 0.0 {
            return None;
        }
        let remaining = self.total().saturating_sub(self.processed());
        Some(Duration::from_secs((remaining as f64 / bps) as u64))
    }

    pub fn bad_count(&self) -> usize {
        self.bad_blocks.len()
    }

    pub fn last_bad(&self) -> Option<u64> {
        self.bad_blocks.last().copied()
    }
}

/// Formats a duration as `HH:MM:SS`
pub fn format_hms(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

impl fmt::Display for OperationProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eta = match self.eta() {
            Some(eta) => format_hms(eta),
            None => "--:--:--".to_string(),
        };

        write!(
            f,
            "Current: {} ({:.2}%); bps: {:.2}; eta: {}; bad: {}",
            self.current_block,
            self.percentage(),
            self.blocks_per_second(),
            eta,
            self.bad_count()
        )?;

        if let Some(last) = self.last_bad() {
            write!(f, "; last: {}", last)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line() {
        let bad = [10u64, 11];
        let progress = OperationProgress::new(0, 200, 100, Duration::from_secs(10), &bad);
        assert_eq!(progress.percentage(), 50.0);
        assert_eq!(progress.blocks_per_second(), 10.0);
        assert_eq!(progress.eta(), Some(Duration::from_secs(10)));
        assert_eq!(
            progress.to_string(),
            "Current: 100 (50.00%); bps: 10.00; eta: 00:00:10; bad: 2; last: 11"
        );
    }

    #[test]
    fn test_progress_without_elapsed_time() {
        let progress = OperationProgress::new(0, 10, 0, Duration::ZERO, &[]);
        assert_eq!(progress.eta(), None);
        assert!(progress.to_string().ends_with("eta: --:--:--; bad: 0"));
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::from_secs(3661)), "01:01:01");
    }
}
