//! Progress reporting for CLI

use crate::application::dto::ProgressCallback;
use crate::domain::entities::OperationProgress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;

/// Single rewritten status line using indicatif
///
/// The line shows current block, percentage, blocks per second, ETA and
/// the bad block count with the most recent bad block.
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a new progress reporter
    pub fn new(total_blocks: u64, quiet: bool) -> Self {
        let bar = ProgressBar::new(total_blocks);
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            bar.set_draw_target(ProgressDrawTarget::stdout());
        }
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            bar.set_style(style);
        }

        Self { bar: Arc::new(bar) }
    }

    /// Updates from a progress snapshot
    pub fn update(&self, progress: &OperationProgress<'_>) {
        update_bar(&self.bar, progress);
    }

    /// Gets a callback for the block loops
    pub fn callback(&self) -> ProgressCallback {
        let bar = Arc::clone(&self.bar);
        Box::new(move |progress: &OperationProgress<'_>| update_bar(&bar, progress))
    }

    /// Leaves the last line on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}

fn update_bar(bar: &ProgressBar, progress: &OperationProgress<'_>) {
    bar.set_position(progress.processed());
    bar.set_message(progress.to_string());
}
