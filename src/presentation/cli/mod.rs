//! CLI module

mod commands;
mod dispatch;
mod progress;
mod prompts;

pub use commands::{Cli, Commands, RwType, UncorrectableArg};
pub use dispatch::run;
pub use progress::ProgressReporter;
pub use prompts::TerminalPrompter;
