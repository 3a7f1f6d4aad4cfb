//! Device block to file mapping
//!
//! Walks a directory tree, collects the physical extents of every regular
//! file and answers "which file owns block N" queries.

use super::fiemap::FiemapExtentSource;
use crate::core::ErrorCode;
use crate::domain::entities::BlockIntervalMap;
use crate::domain::repositories::ExtentSource;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Builds and queries a block to file map
///
/// # Example
///
/// ```ignore
/// let mut mapper = BlockToFileMapper::new(FiemapExtentSource);
/// mapper.scan(Path::new("/mnt/data"))?;
/// if let Some(path) = mapper.find(123_456) {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Default)]
pub struct BlockToFileMapper<S = FiemapExtentSource> {
    source: S,
    map: BlockIntervalMap,
    files: usize,
}

impl<S: ExtentSource> BlockToFileMapper<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            map: BlockIntervalMap::new(),
            files: 0,
        }
    }

    /// Maps every regular file under `root`
    ///
    /// Symlinks are not followed. Files and subdirectories that cannot be
    /// read are skipped; only an unreadable `root` or an unknown block
    /// size fails the scan. Returns the number of files mapped.
    pub fn scan(&mut self, root: &Path) -> Result<usize, ErrorCode> {
        let block_size = self.source.block_size(root)?;
        info!("Mapping files under {} ({} byte blocks)", root.display(), block_size);

        let entries = fs::read_dir(root)?;
        self.walk_entries(entries, block_size);
        self.map.compact();

        info!("{} files mapped to {} extents", self.files, self.map.len());
        Ok(self.files)
    }

    fn walk(&mut self, dir: &Path, block_size: u64) {
        match fs::read_dir(dir) {
            Ok(entries) => self.walk_entries(entries, block_size),
            Err(err) => debug!("Skipping {}: {}", dir.display(), err),
        }
    }

    fn walk_entries(&mut self, entries: fs::ReadDir, block_size: u64) {
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();

            if file_type.is_dir() {
                self.walk(&path, block_size);
            } else if file_type.is_file() {
                self.add_file(&path, block_size);
            }
        }
    }

    fn add_file(&mut self, path: &Path, block_size: u64) {
        match self.source.extents(path, block_size) {
            Ok(extents) => {
                for extent in extents {
                    self.map.insert(extent.block, extent.length, path);
                }
                self.files += 1;
            }
            Err(err) => debug!("No extents for {}: {}", path.display(), err),
        }
    }

    /// File owning `block`, if any
    pub fn find(&self, block: u64) -> Option<&Path> {
        self.map.find(block)
    }

    pub fn map(&self) -> &BlockIntervalMap {
        &self.map
    }
}

/// Every device block backing the file at `path`, in extent order
pub fn file_blocks<S: ExtentSource>(source: &S, path: &Path) -> Result<Vec<u64>, ErrorCode> {
    let block_size = source.block_size(path)?;
    let extents = source.extents(path, block_size)?;

    Ok(extents
        .iter()
        .flat_map(|extent| extent.block..extent.block + extent.length)
        .collect())
}
