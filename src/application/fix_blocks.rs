//! Fix blocks use case
//!
//! Rewrites known bad blocks so the drive gets a chance to reallocate
//! them. Each block is read with retries; if every read fails the block
//! is rewritten with zeros.

use crate::application::block_loop::{require_full, with_retries};
use crate::application::dto::{FixOutcome, FixReport, OperationOptions, PhaseOutcome};
use crate::core::{ErrorCode, OperationContext};
use crate::domain::entities::BlockBuffer;
use crate::domain::repositories::{BlockTransport, ExtentSource};
use crate::infrastructure::file_systems::file_blocks;
use std::path::Path;
use tracing::{debug, info};

/// Fix blocks use case
pub struct FixBlocksUseCase {
    options: OperationOptions,
}

impl FixBlocksUseCase {
    pub fn new(options: OperationOptions) -> Self {
        Self { options }
    }

    /// Rewrites every block in `blocks`, in order
    ///
    /// `on_outcome` is called once per processed block. Failures never
    /// stop the run; only cancellation does.
    pub fn execute<T: BlockTransport + ?Sized>(
        &self,
        device: &mut T,
        blocks: &[u64],
        ctx: &OperationContext,
        mut on_outcome: impl FnMut(&FixOutcome),
    ) -> FixReport {
        let attempts = self.options.attempts();
        let mut buf = BlockBuffer::new(device.geometry().logical_block_size(), 1);
        let mut report = FixReport::default();

        info!("Fixing {} blocks ({} attempts each)", blocks.len(), attempts);

        for &block in blocks {
            if ctx.is_cancelled() {
                info!("Fix cancelled before block {}", block);
                report.cancelled = true;
                break;
            }

            let outcome = Self::fix_block(device, block, attempts, &mut buf);
            debug!(
                "Block {}: read {}, write {}",
                block, outcome.read, outcome.write
            );

            report.processed += 1;
            if !outcome.read.succeeded() {
                report.read_failures += 1;
            }
            if !outcome.write.succeeded() {
                report.write_failures += 1;
            }
            on_outcome(&outcome);
        }

        info!(
            "Fixed {} blocks: {} unreadable, {} unwritable",
            report.processed, report.read_failures, report.write_failures
        );
        report
    }

    /// Rewrites the blocks backing the file at `path`
    pub fn execute_for_file<T, S>(
        &self,
        device: &mut T,
        source: &S,
        path: &Path,
        ctx: &OperationContext,
        on_outcome: impl FnMut(&FixOutcome),
    ) -> Result<FixReport, ErrorCode>
    where
        T: BlockTransport + ?Sized,
        S: ExtentSource,
    {
        let blocks = file_blocks(source, path)?;
        info!("{} is backed by {} blocks", path.display(), blocks.len());
        Ok(self.execute(device, &blocks, ctx, on_outcome))
    }

    fn fix_block<T: BlockTransport + ?Sized>(
        device: &mut T,
        block: u64,
        attempts: u32,
        buf: &mut BlockBuffer,
    ) -> FixOutcome {
        let (tries, result) =
            with_retries(attempts, || require_full(1, device.read(block, 1, buf)));
        let read = PhaseOutcome {
            attempts: tries,
            error: result.err(),
        };
        if !read.succeeded() {
            buf.clear();
        }

        let (tries, result) =
            with_retries(attempts, || require_full(1, device.write(block, 1, buf)));
        let write = PhaseOutcome {
            attempts: tries,
            error: result.err(),
        };

        FixOutcome { block, read, write }
    }
}
