//! CLI commands using clap

use crate::application::dto::{OperationOptions, DEFAULT_MAX_ERRORS};
use crate::core::AppError;
use crate::domain::entities::{UncorrectableMode, MAX_STEPPING, MIN_STEPPING};
use crate::domain::repositories::TransportMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// bbf - bad block finder
///
/// Finds, rewrites and stresses bad blocks on storage devices, maps bad
/// blocks back to the files that own them, and drives ATA security erase.
#[derive(Debug, Parser)]
#[command(name = "bbf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find and fix bad blocks on storage devices", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress normal output; errors are still printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Read/write strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RwType {
    /// Positioned read/write through the kernel
    #[default]
    Os,
    /// ATA commands through SCSI generic passthrough
    Ata,
}

impl From<RwType> for TransportMode {
    fn from(rwtype: RwType) -> Self {
        match rwtype {
            RwType::Os => TransportMode::Os,
            RwType::Ata => TransportMode::Ata,
        }
    }
}

/// WRITE UNCORRECTABLE variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UncorrectableArg {
    /// Pseudo uncorrectable with logging
    PseudoWl,
    /// Pseudo uncorrectable without logging
    PseudoWol,
    /// Flagged uncorrectable with logging
    FlaggedWl,
    /// Flagged uncorrectable without logging
    FlaggedWol,
}

impl From<UncorrectableArg> for UncorrectableMode {
    fn from(arg: UncorrectableArg) -> Self {
        match arg {
            UncorrectableArg::PseudoWl => UncorrectableMode::PseudoWithLogging,
            UncorrectableArg::PseudoWol => UncorrectableMode::PseudoWithoutLogging,
            UncorrectableArg::FlaggedWl => UncorrectableMode::FlaggedWithLogging,
            UncorrectableArg::FlaggedWol => UncorrectableMode::FlaggedWithoutLogging,
        }
    }
}

/// Target device and how to talk to it
#[derive(Debug, Clone, Args)]
pub struct DeviceArgs {
    /// Block device to act on (e.g., /dev/sdb)
    pub device: PathBuf,

    /// Use OS or ATA reads and writes
    #[arg(short = 't', long, value_enum, default_value_t = RwType::Os)]
    pub rwtype: RwType,

    /// Do not fail destructive operations when the device is in use
    #[arg(short, long)]
    pub force: bool,

    /// Device fingerprint; required by destructive operations
    #[arg(short, long)]
    pub captcha: Option<String>,
}

impl DeviceArgs {
    /// The fingerprint, or an argument error if it was not given
    pub fn require_captcha(&self) -> Result<&str, AppError> {
        self.captcha
            .as_deref()
            .ok_or_else(|| AppError::argument_required("captcha"))
    }
}

/// Block range of a loop
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// Block to start from
    #[arg(short, long, default_value_t = 0)]
    pub start_block: u64,

    /// Block to stop at (default: last block)
    #[arg(short, long)]
    pub end_block: Option<u64>,

    /// Logical blocks per request (default: physical / logical)
    #[arg(short = 'S', long)]
    pub stepping: Option<u64>,

    /// Read/write errors tolerated before stopping
    #[arg(short = 'M', long, default_value_t = DEFAULT_MAX_ERRORS)]
    pub max_errors: usize,
}

/// Bad block list files
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// File to read the bad block list from ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File to write the bad block list to ("-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show device identity and geometry
    Info {
        #[command(flatten)]
        device: DeviceArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the device fingerprint needed by destructive operations
    Captcha {
        /// Block device, or any file or directory on it
        path: PathBuf,
    },

    /// Read every block and record the unreadable ones
    Scan {
        #[command(flatten)]
        device: DeviceArgs,
        #[command(flatten)]
        range: RangeArgs,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Rewrite the blocks in a bad block list
    Fix {
        #[command(flatten)]
        device: DeviceArgs,

        /// Retries on reads and writes
        #[arg(short, long)]
        retries: Option<u32>,

        /// File to read the bad block list from ("-" for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Rewrite every block backing a file
    FixFile {
        /// File whose blocks should be rewritten
        file: PathBuf,

        /// Use OS or ATA reads and writes
        #[arg(short = 't', long, value_enum, default_value_t = RwType::Os)]
        rwtype: RwType,

        /// Do not fail when the device is in use
        #[arg(short, long)]
        force: bool,

        /// Fingerprint of the device holding the file
        #[arg(short, long)]
        captcha: Option<String>,

        /// Retries on reads and writes
        #[arg(short, long)]
        retries: Option<u32>,
    },

    /// Write, verify and restore patterns over the device
    Burnin {
        #[command(flatten)]
        device: DeviceArgs,
        #[command(flatten)]
        range: RangeArgs,
        #[command(flatten)]
        list: ListArgs,

        /// Retries on reads and writes
        #[arg(short, long)]
        retries: Option<u32>,
    },

    /// Print the file owning each block of a bad block list
    FindFiles {
        /// Directory tree to search (usually a mount point)
        path: PathBuf,

        /// File to read the bad block list from ("-" for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print every file extent under a directory
    DumpFiles {
        /// Directory tree to map
        path: PathBuf,
    },

    /// Print every device block backing a file
    FileBlocks {
        /// File to map
        file: PathBuf,
    },

    /// Mark blocks from a bad block list as uncorrectable
    WriteUncorrectable {
        #[command(flatten)]
        device: DeviceArgs,

        /// Variant to apply
        #[arg(short, long, value_enum)]
        mode: UncorrectableArg,

        /// File to read the bad block list from ("-" for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Erase the whole drive with ATA SECURITY ERASE UNIT
    SecurityErase {
        #[command(flatten)]
        device: DeviceArgs,

        /// Use the enhanced erase variant
        #[arg(long)]
        enhanced: bool,
    },
}

/// Validates a retry count; zero is only valid when not given
pub fn retries(value: Option<u32>) -> Result<u32, AppError> {
    match value {
        Some(0) => Err(AppError::argument_invalid("retries invalid")),
        Some(n) => Ok(n),
        None => Ok(0),
    }
}

/// Builds loop options from range arguments
pub fn operation_options(range: &RangeArgs, retries: u32) -> Result<OperationOptions, AppError> {
    let mut options = OperationOptions::new()
        .with_start_block(range.start_block)
        .with_max_errors(range.max_errors)
        .with_retries(retries);

    if let Some(stepping) = range.stepping {
        if !(MIN_STEPPING..=MAX_STEPPING).contains(&stepping) {
            return Err(AppError::argument_invalid(format!(
                "stepping must be >= {} && <= {}",
                MIN_STEPPING, MAX_STEPPING
            )));
        }
        options = options.with_stepping(stepping);
    }

    if let Some(end_block) = range.end_block {
        if range.start_block >= end_block {
            return Err(AppError::argument_invalid("start block >= end block"));
        }
        options = options.with_end_block(end_block);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_scan_arguments() {
        let cli = parse(&["bbf", "scan", "/dev/sdz", "-t", "ata", "-S", "16", "-e", "4096"]);
        let Commands::Scan { device, range, .. } = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(device.rwtype, RwType::Ata);
        assert_eq!(range.stepping, Some(16));
        assert_eq!(range.max_errors, 1024);

        let options = operation_options(&range, 0).unwrap();
        assert_eq!(options.end_block, Some(4096));
    }

    #[test]
    fn test_invalid_ranges() {
        let range = RangeArgs {
            start_block: 10,
            end_block: Some(10),
            stepping: None,
            max_errors: 1,
        };
        let err = operation_options(&range, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);

        let range = RangeArgs {
            start_block: 0,
            end_block: None,
            stepping: Some(1),
            max_errors: 1,
        };
        assert!(operation_options(&range, 0).is_err());
    }

    #[test]
    fn test_captcha_required() {
        let cli = parse(&["bbf", "fix", "/dev/sdz"]);
        let Commands::Fix { device, .. } = cli.command else {
            panic!("expected fix");
        };
        let err = device.require_captcha().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentRequired);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_retries_must_be_positive() {
        assert_eq!(retries(None).unwrap(), 0);
        assert_eq!(retries(Some(3)).unwrap(), 3);
        assert!(retries(Some(0)).is_err());
    }

    #[test]
    fn test_write_uncorrectable_mode() {
        let cli = parse(&["bbf", "write-uncorrectable", "/dev/sdz", "-m", "flagged-wol"]);
        let Commands::WriteUncorrectable { mode, .. } = cli.command else {
            panic!("expected write-uncorrectable");
        };
        assert_eq!(
            UncorrectableMode::from(mode),
            UncorrectableMode::FlaggedWithoutLogging
        );
    }
}
