//! Burn-in use case
//!
//! Non-destructive stress test: each group is saved, overwritten with a
//! series of patterns that are read back and compared, and finally
//! restored.

use crate::application::block_loop::{require_full, with_retries, LoopProgress};
use crate::application::dto::{LoopReport, OperationOptions, ProgressCallback, StopReason};
use crate::core::{ErrorCode, OperationContext};
use crate::domain::entities::{BadBlockList, BlockBuffer};
use crate::domain::repositories::BlockTransport;
use tracing::{debug, info, warn};

/// Byte patterns written to every group, in order
pub const BURN_IN_PATTERNS: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];

/// Burn-in use case
pub struct BurnInUseCase {
    options: OperationOptions,
}

/// Scratch buffers for one group
struct GroupBuffers {
    saved: BlockBuffer,
    readback: BlockBuffer,
    patterns: Vec<BlockBuffer>,
}

impl BurnInUseCase {
    pub fn new(options: OperationOptions) -> Self {
        Self { options }
    }

    /// Executes the burn-in
    ///
    /// A group is recorded as bad when any pattern cycle or the final
    /// restore fails; all of its blocks are appended to `bad_blocks`.
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
        let lbs = geometry.logical_block_size();

        info!(
            "Burning blocks {} - {} (stepping {}, {} attempts)",
            range.start(),
            range.end(),
            range.stepping(),
            self.options.attempts()
        );

        let mut buffers = GroupBuffers {
            saved: BlockBuffer::new(lbs, range.stepping()),
            readback: BlockBuffer::new(lbs, range.stepping()),
            patterns: BURN_IN_PATTERNS
                .iter()
                .map(|&byte| BlockBuffer::filled(lbs, range.stepping(), byte))
                .collect(),
        };

        let mut block = range.start();
        progress.emit(block, bad_blocks.as_slice());

        let stop = loop {
            if block >= range.end() {
                break StopReason::Completed;
            }
            if ctx.is_cancelled() {
                info!("Burn-in cancelled at block {}", block);
                break StopReason::Cancelled;
            }
            if ctx.tick() {
                progress.emit(block, bad_blocks.as_slice());
            }

            let count = range.chunk_len(block);
            let result = self.burn_group(device, block, count, &mut buffers);

            match result {
                Ok(()) => {
                    block += count;
                    continue;
                }
                Err(code) if !code.is_block_local() => {
                    warn!("Fatal error burning block {}: {}", block, code);
                    progress.emit(block, bad_blocks.as_slice());
                    return Err(code);
                }
                Err(code) => {
                    debug!("Group at {} failed burn-in: {}", block, code);
                    bad_blocks.extend(block..block + count);
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
            "Burn-in {}: {} new bad blocks in {:.2}s",
            report.stop,
            report.new_bad_blocks,
            report.elapsed.as_secs_f64()
        );

        Ok(report)
    }

    /// Saves, stresses and restores one group
    ///
    /// Returns the first failure seen; the restore is attempted even
    /// after a pattern failure.
    fn burn_group<T: BlockTransport + ?Sized>(
        &self,
        device: &mut T,
        block: u64,
        count: u64,
        buffers: &mut GroupBuffers,
    ) -> Result<(), ErrorCode> {
        let attempts = self.options.attempts();
        let GroupBuffers {
            saved,
            readback,
            patterns,
        } = buffers;

        let mut failure = None;

        let (_, result) = with_retries(attempts, || device.read(block, count, saved));
        match result {
            Ok(read) if read >= count => {}
            Ok(read) => {
                debug!("Short read of group at {} ({} of {})", block, read, count);
                let from = read as usize * saved.block_size();
                let to = saved.span_len(count)?;
                saved.as_mut_slice()[from..to].fill(0);
                failure = Some(ErrorCode::Os(libc::EIO));
            }
            Err(code) => {
                debug!("Group at {} unreadable ({}), saving zeros", block, code);
                saved.clear();
            }
        }

        for pattern in patterns.iter() {
            let result =
                Self::write_read_compare(device, block, count, attempts, pattern, readback);
            if let Err(code) = result {
                failure.get_or_insert(code);
            }
        }

        let (_, result) = with_retries(attempts, || {
            require_full(count, device.write(block, count, saved))
        });
        if let Err(code) = result {
            warn!("Unable to restore group at {}: {}", block, code);
            failure.get_or_insert(code);
        }

        match failure {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }

    fn write_read_compare<T: BlockTransport + ?Sized>(
        device: &mut T,
        block: u64,
        count: u64,
        attempts: u32,
        pattern: &BlockBuffer,
        readback: &mut BlockBuffer,
    ) -> Result<(), ErrorCode> {
        with_retries(attempts, || {
            require_full(count, device.write(block, count, pattern))
        })
        .1?;
        with_retries(attempts, || {
            require_full(count, device.read(block, count, readback))
        })
        .1?;

        if pattern.span(count)? != readback.span(count)? {
            return Err(ErrorCode::Os(libc::EIO));
        }
        Ok(())
    }
}
