//! Operation options DTO

use crate::domain::entities::{BlockRange, DeviceGeometry, OperationProgress};

/// Default bad block ceiling for scan and burn-in
pub const DEFAULT_MAX_ERRORS: usize = 1024;

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(&OperationProgress<'_>) + Send + Sync>;

/// Options shared by the block loops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOptions {
    /// First block to process; rounded down to the stepping
    pub start_block: u64,
    /// End of the range (exclusive); `None` means the end of the device
    pub end_block: Option<u64>,
    /// Blocks per request; `None` uses the device's physical stepping
    pub stepping: Option<u64>,
    /// Stop once more than this many bad blocks are recorded
    pub max_errors: usize,
    /// Extra attempts for each read or write
    pub retries: u32,
}

impl Default for OperationOptions {
    fn default() -> Self {
        Self {
            start_block: 0,
            end_block: None,
            stepping: None,
            max_errors: DEFAULT_MAX_ERRORS,
            retries: 0,
        }
    }
}

impl OperationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_block(mut self, block: u64) -> Self {
        self.start_block = block;
        self
    }

    pub fn with_end_block(mut self, block: u64) -> Self {
        self.end_block = Some(block);
        self
    }

    pub fn with_stepping(mut self, stepping: u64) -> Self {
        self.stepping = Some(stepping);
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Total attempts per request
    pub fn attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Effective range on a device
    pub fn range(&self, geometry: &DeviceGeometry) -> BlockRange {
        BlockRange::plan(geometry, self.start_block, self.end_block, self.stepping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OperationOptions::default();
        assert_eq!(options.max_errors, 1024);
        assert_eq!(options.attempts(), 1);
        assert_eq!(options.with_retries(3).attempts(), 4);
    }

    #[test]
    fn test_range_uses_options() {
        let geometry = DeviceGeometry::new(512, 4096, 1024 * 512).unwrap();
        let range = OperationOptions::new()
            .with_start_block(10)
            .with_end_block(100)
            .with_stepping(16)
            .range(&geometry);
        assert_eq!((range.start(), range.end(), range.stepping()), (0, 112, 16));
    }
}
