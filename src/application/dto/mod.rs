//! Data Transfer Objects

mod operation_options;
mod operation_report;

pub use operation_options::{OperationOptions, ProgressCallback, DEFAULT_MAX_ERRORS};
pub use operation_report::{
    FixOutcome, FixReport, LoopReport, PhaseOutcome, StopReason, UncorrectableReport,
};
