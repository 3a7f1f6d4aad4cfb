//! Bad block list file
//!
//! Plain text, one block number per line. The path `-` stands for
//! standard input when reading and standard output when writing.

use crate::core::ErrorCode;
use crate::domain::entities::BadBlockList;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path meaning standard input/output
pub const STDIO_PATH: &str = "-";

const FALLBACK_HOME: &str = "/root";

/// Default list location for a device: `$HOME/badblocks.<fingerprint>`
pub fn default_path(fingerprint: &str) -> PathBuf {
    let home = std::env::var("HOME").ok();
    default_path_in(home.as_deref(), fingerprint)
}

/// Default list location under an explicit home directory
///
/// An unset or empty home falls back to `/root`.
pub fn default_path_in(home: Option<&str>, fingerprint: &str) -> PathBuf {
    let home = match home {
        Some(h) if !h.is_empty() => h,
        _ => FALLBACK_HOME,
    };
    Path::new(home).join(format!("badblocks.{}", fingerprint))
}

/// Parses whitespace separated block numbers
pub fn parse<R: BufRead>(reader: R) -> Result<BadBlockList, ErrorCode> {
    let mut list = BadBlockList::new();

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let block = token
                .parse::<u64>()
                .map_err(|_| ErrorCode::Os(libc::EINVAL))?;
            list.push(block);
        }
    }

    Ok(list)
}

/// Writes one block number per line
pub fn render<W: Write>(mut writer: W, blocks: &[u64]) -> io::Result<()> {
    for block in blocks {
        writeln!(writer, "{}", block)?;
    }
    writer.flush()
}

/// A bad block list on disk or on stdio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadBlockFile {
    path: PathBuf,
}

impl BadBlockFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the list goes through stdin/stdout
    pub fn is_stdio(&self) -> bool {
        self.path.as_os_str() == STDIO_PATH
    }

    pub fn read(&self) -> Result<BadBlockList, ErrorCode> {
        let list = if self.is_stdio() {
            parse(io::stdin().lock())?
        } else {
            parse(BufReader::new(File::open(&self.path)?))?
        };

        debug!("Read {} blocks from {}", list.len(), self.path.display());
        Ok(list)
    }

    pub fn write(&self, blocks: &[u64]) -> Result<(), ErrorCode> {
        if self.is_stdio() {
            render(io::stdout().lock(), blocks)?;
        } else {
            render(BufWriter::new(File::create(&self.path)?), blocks)?;
        }

        debug!("Wrote {} blocks to {}", blocks.len(), self.path.display());
        Ok(())
    }
}
