//! File lookup use cases
//!
//! Relate device blocks to the files that own them: which file holds a
//! given bad block, the full extent map of a tree, and the blocks of one
//! file.

use crate::core::ErrorCode;
use crate::domain::repositories::ExtentSource;
use crate::infrastructure::file_systems::{file_blocks, BlockToFileMapper};
use std::fmt;
use std::path::{Path, PathBuf};

/// Owner of one queried block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOwner {
    pub block: u64,
    pub path: Option<PathBuf>,
}

impl fmt::Display for BlockOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} {}", self.block, path.display()),
            None => write!(f, "{} [none]", self.block),
        }
    }
}

/// One compacted extent of the block map, with an inclusive end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtentLine {
    pub first_block: u64,
    pub last_block: u64,
    pub path: PathBuf,
}

impl fmt::Display for ExtentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            self.first_block,
            self.last_block,
            self.path.display()
        )
    }
}

/// File lookup use case
pub struct FindFilesUseCase<S> {
    source: S,
}

impl<S: ExtentSource> FindFilesUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Finds the owner of each block, in the order given
    pub fn find(self, root: &Path, blocks: &[u64]) -> Result<Vec<BlockOwner>, ErrorCode> {
        let mut mapper = BlockToFileMapper::new(self.source);
        mapper.scan(root)?;

        Ok(blocks
            .iter()
            .map(|&block| BlockOwner {
                block,
                path: mapper.find(block).map(Path::to_path_buf),
            })
            .collect())
    }

    /// Every extent under `root`, in block order
    pub fn dump(self, root: &Path) -> Result<Vec<ExtentLine>, ErrorCode> {
        let mut mapper = BlockToFileMapper::new(self.source);
        mapper.scan(root)?;

        Ok(mapper
            .map()
            .iter()
            .map(|extent| ExtentLine {
                first_block: extent.start,
                last_block: extent.last_block(),
                path: extent.path.to_path_buf(),
            })
            .collect())
    }

    /// Device blocks backing one file
    pub fn file_blocks(&self, path: &Path) -> Result<Vec<u64>, ErrorCode> {
        file_blocks(&self.source, path)
    }
}
