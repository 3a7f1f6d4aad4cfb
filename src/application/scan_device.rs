//! Scan device use case
//!
//! Reads a device range one stepping-sized group at a time. Failed
//! groups are bisected into single-block reads so that exactly the
//! unreadable blocks are recorded.

use crate::application::block_loop::LoopProgress;
use crate::application::dto::{LoopReport, OperationOptions, ProgressCallback, StopReason};
use crate::core::{ErrorCode, OperationContext};
use crate::domain::entities::{BadBlockList, BlockBuffer};
use crate::domain::repositories::BlockTransport;
use tracing::{debug, info, warn};

/// Scan device use case
///
/// Found blocks are appended to a caller-owned list, so everything
/// recorded before a cancellation or a fatal error is still available
/// to be persisted.
pub struct ScanDeviceUseCase {
    options: OperationOptions,
}

impl ScanDeviceUseCase {
    /// Creates a new scan device use case
    pub fn new(options: OperationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OperationOptions {
        &self.options
    }

    /// Executes the scan
    ///
    /// # Errors
    ///
    /// Returns the code of the first failure that is not attributable to
    /// the blocks being read (see [`ErrorCode::is_block_local`]).
    pub fn execute<T: BlockTransport + ?Sized>(
        &self,
        device: &mut T,
        bad_blocks: &mut BadBlockList,
        ctx: &OperationContext,
        progress_callback: Option<&ProgressCallback>,
    ) -> Result<LoopReport, ErrorCode> {
        let geometry = device.geometry();
        let range = self.options.range(&geometry);
        let progress = LoopProgress::new(range, progress_callback);
        let known = bad_blocks.len();

        info!(
            "Scanning blocks {} - {} (stepping {})",
            range.start(),
            range.end(),
            range.stepping()
        );

        let mut buf = BlockBuffer::new(geometry.logical_block_size(), range.stepping());
        let mut block = range.start();
        progress.emit(block, bad_blocks.as_slice());

        let stop = loop {
            if block >= range.end() {
                break StopReason::Completed;
            }
            if ctx.is_cancelled() {
                info!("Scan cancelled at block {}", block);
                break StopReason::Cancelled;
            }
            if ctx.tick() {
                progress.emit(block, bad_blocks.as_slice());
            }

            let count = range.chunk_len(block);
            match device.read(block, count, &mut buf) {
                Ok(0) => {
                    info!("Device reported end of media at block {}", block);
                    break StopReason::EndOfMedia;
                }
                Ok(read) => {
                    block += read;
                    continue;
                }
                Err(code) if !code.is_block_local() => {
                    warn!("Fatal error reading block {}: {}", block, code);
                    progress.emit(block, bad_blocks.as_slice());
                    return Err(code);
                }
                Err(code) => {
                    debug!("Group at {} failed ({}), bisecting", block, code);
                    if let Err(code) = Self::bisect(device, block, count, &mut buf, bad_blocks) {
                        warn!("Fatal error bisecting group at {}: {}", block, code);
                        progress.emit(block, bad_blocks.as_slice());
                        return Err(code);
                    }
                    block += count;
                    progress.emit(block, bad_blocks.as_slice());
                }
            }

            if bad_blocks.len() > self.options.max_errors {
                warn!(
                    "Stopping: {} bad blocks exceeds the limit of {}",
                    bad_blocks.len(),
                    self.options.max_errors
                );
                break StopReason::ErrorCeiling;
            }
        };

        progress.emit(block, bad_blocks.as_slice());

        let report = LoopReport {
            stop,
            start_block: range.start(),
            end_block: range.end(),
            stepping: range.stepping(),
            next_block: block,
            new_bad_blocks: bad_blocks.len() - known,
            elapsed: progress.elapsed(),
        };

        info!(
            "Scan {}: {} new bad blocks in {:.2}s",
            report.stop,
            report.new_bad_blocks,
            report.elapsed.as_secs_f64()
        );

        Ok(report)
    }

    /// Reads each block of a failed group on its own
    ///
    /// Stops at the first failure that is not block-local; blocks found
    /// bad before it stay recorded.
    fn bisect<T: BlockTransport + ?Sized>(
        device: &mut T,
        start: u64,
        count: u64,
        buf: &mut BlockBuffer,
        bad_blocks: &mut BadBlockList,
    ) -> Result<(), ErrorCode> {
        for block in start..start + count {
            match device.read(block, 1, buf) {
                Ok(read) if read > 0 => {}
                Ok(_) => bad_blocks.push(block),
                Err(code) if !code.is_block_local() => return Err(code),
                Err(code) => {
                    debug!("Block {} unreadable: {}", block, code);
                    bad_blocks.push(block);
                }
            }
        }
        Ok(())
    }
}
