//! Write uncorrectable use case
//!
//! Deliberately marks blocks unreadable. Used to check that the layers
//! above a drive notice and handle bad sectors.

use crate::application::dto::UncorrectableReport;
use crate::core::OperationContext;
use crate::domain::entities::UncorrectableMode;
use crate::domain::repositories::BlockTransport;
use tracing::{info, warn};

/// Write uncorrectable use case
pub struct WriteUncorrectableUseCase {
    mode: UncorrectableMode,
}

impl WriteUncorrectableUseCase {
    pub fn new(mode: UncorrectableMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> UncorrectableMode {
        self.mode
    }

    /// Applies the command to every block; failures are tallied
    pub fn execute<T: BlockTransport + ?Sized>(
        &self,
        device: &mut T,
        blocks: &[u64],
        ctx: &OperationContext,
    ) -> UncorrectableReport {
        let mut report = UncorrectableReport::default();
        info!("Writing {} to {} blocks", self.mode, blocks.len());

        for &block in blocks {
            if ctx.is_cancelled() {
                report.cancelled = true;
                break;
            }

            match device.write_uncorrectable(block, self.mode) {
                Ok(()) => report.succeeded += 1,
                Err(code) => {
                    warn!("Block {}: {}", block, code);
                    report.failed.push((block, code));
                }
            }
        }

        info!(
            "{} blocks marked, {} refused",
            report.succeeded,
            report.failed.len()
        );
        report
    }
}
