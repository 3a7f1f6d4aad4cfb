//! Defect injection modes

use std::fmt;

/// Variant of WRITE UNCORRECTABLE to apply
///
/// Pseudo-uncorrectable blocks report an error on read until rewritten;
/// flagged blocks are marked bad. Either may be recorded in the device's
/// error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UncorrectableMode {
    PseudoWithLogging,
    PseudoWithoutLogging,
    FlaggedWithLogging,
    FlaggedWithoutLogging,
}

impl UncorrectableMode {
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::FlaggedWithLogging | Self::FlaggedWithoutLogging)
    }

    pub fn is_logged(&self) -> bool {
        matches!(self, Self::PseudoWithLogging | Self::FlaggedWithLogging)
    }
}

impl fmt::Display for UncorrectableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_flagged() { "flagged" } else { "pseudo" };
        let logging = if self.is_logged() { "with" } else { "without" };
        write!(f, "{} uncorrectable {} logging", kind, logging)
    }
}
