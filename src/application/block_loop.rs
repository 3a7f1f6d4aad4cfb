//! Pieces shared by the block loops

use crate::application::dto::ProgressCallback;
use crate::core::ErrorCode;
use crate::domain::entities::{BlockRange, OperationProgress};
use std::time::{Duration, Instant};

/// Runs `op` until it succeeds or `attempts` tries are used up
///
/// Returns the number of tries made with the last result.
pub(crate) fn with_retries<T>(
    attempts: u32,
    mut op: impl FnMut() -> Result<T, ErrorCode>,
) -> (u32, Result<T, ErrorCode>) {
    let attempts = attempts.max(1);
    let mut tries = 0;
    loop {
        tries += 1;
        let result = op();
        if result.is_ok() || tries >= attempts {
            return (tries, result);
        }
    }
}

/// Fails a transfer that moved fewer than `count` blocks
///
/// The blocks left over count as unreadable or unwritable.
pub(crate) fn require_full(
    count: u64,
    result: Result<u64, ErrorCode>,
) -> Result<u64, ErrorCode> {
    match result {
        Ok(done) if done < count => Err(ErrorCode::Os(libc::EIO)),
        other => other,
    }
}

/// Emits progress snapshots for one loop over a range
pub(crate) struct LoopProgress<'a> {
    range: BlockRange,
    started: Instant,
    callback: Option<&'a ProgressCallback>,
}

impl<'a> LoopProgress<'a> {
    pub(crate) fn new(range: BlockRange, callback: Option<&'a ProgressCallback>) -> Self {
        Self {
            range,
            started: Instant::now(),
            callback,
        }
    }

    pub(crate) fn emit(&self, current_block: u64, bad_blocks: &[u64]) {
        if let Some(callback) = self.callback {
            callback(&OperationProgress::new(
                self.range.start(),
                self.range.end(),
                current_block,
                self.elapsed(),
                bad_blocks,
            ));
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_stop_on_success() {
        let mut calls = 0;
        let (tries, result) = with_retries(5, || {
            calls += 1;
            if calls < 3 {
                Err(ErrorCode::Os(libc::EIO))
            } else {
                Ok(calls)
            }
        });
        assert_eq!(tries, 3);
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn test_retries_exhausted() {
        let (tries, result): (u32, Result<(), _>) =
            with_retries(2, || Err(ErrorCode::Os(libc::EIO)));
        assert_eq!(tries, 2);
        assert!(result.is_err());

        let (tries, _) = with_retries(0, || Ok(()));
        assert_eq!(tries, 1);
    }

    #[test]
    fn test_short_transfer_is_an_error() {
        assert_eq!(require_full(8, Ok(8)), Ok(8));
        assert_eq!(require_full(8, Ok(3)), Err(ErrorCode::Os(libc::EIO)));
        assert_eq!(require_full(1, Ok(0)), Err(ErrorCode::Os(libc::EIO)));
        assert_eq!(
            require_full(1, Err(ErrorCode::Os(libc::EBADF))),
            Err(ErrorCode::Os(libc::EBADF))
        );
    }
}
