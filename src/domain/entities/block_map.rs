//! Physical block to file interval map

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A run of device blocks owned by one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockExtent<'a> {
    pub start: u64,
    pub length: u64,
    pub path: &'a Path,
}

impl BlockExtent<'_> {
    /// Last block of the extent (inclusive)
    pub fn last_block(&self) -> u64 {
        self.start + self.length.saturating_sub(1)
    }
}

/// Map from starting block to `(length, owning file)`
///
/// Entries are keyed by start block. Inserting a second entry at an
/// existing start keeps the first one.
#[derive(Debug, Clone, Default)]
pub struct BlockIntervalMap {
    entries: BTreeMap<u64, (u64, PathBuf)>,
}

impl BlockIntervalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an extent; zero-length extents are ignored
    pub fn insert(&mut self, start: u64, length: u64, path: impl Into<PathBuf>) {
        if length == 0 {
            return;
        }
        self.entries
            .entry(start)
            .or_insert_with(|| (length, path.into()));
    }

    /// Merges contiguous extents that belong to the same file
    ///
    /// Runs to a fixed point: after compaction no two neighbouring entries
    /// share a path while touching each other.
    pub fn compact(&mut self) {
        let mut merged: BTreeMap<u64, (u64, PathBuf)> = BTreeMap::new();
        let mut current: Option<(u64, u64, PathBuf)> = None;

        for (start, (length, path)) in std::mem::take(&mut self.entries) {
            current = match current.take() {
                Some((cur_start, cur_len, cur_path))
                    if cur_path == path && cur_start + cur_len == start =>
                {
                    Some((cur_start, cur_len + length, cur_path))
                }
                Some((cur_start, cur_len, cur_path)) => {
                    merged.insert(cur_start, (cur_len, cur_path));
                    Some((start, length, path))
                }
                None => Some((start, length, path)),
            };
        }

        if let Some((start, length, path)) = current {
            merged.insert(start, (length, path));
        }

        self.entries = merged;
    }

    /// Finds the file owning `block`
    ///
    /// Looks at the entry with the greatest start not above `block` and
    /// returns its path if the block lies inside it.
    pub fn find(&self, block: u64) -> Option<&Path> {
        let (start, (length, path)) = self.entries.range(..=block).next_back()?;
        if block - start < *length {
            Some(path.as_path())
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates extents in ascending block order
    pub fn iter(&self) -> impl Iterator<Item = BlockExtent<'_>> {
        self.entries
            .iter()
            .map(|(start, (length, path))| BlockExtent {
                start: *start,
                length: *length,
                path: path.as_path(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_merges_same_file() {
        let mut map = BlockIntervalMap::new();
        map.insert(150, 25, "/a");
        map.insert(100, 50, "/a");
        map.compact();

        let extents: Vec<_> = map.iter().collect();
        assert_eq!(extents.len(), 1);
        assert_eq!((extents[0].start, extents[0].length), (100, 75));
    }

    #[test]
    fn test_compact_keeps_different_files_apart() {
        let mut map = BlockIntervalMap::new();
        map.insert(100, 50, "/a");
        map.insert(150, 25, "/b");
        map.compact();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_compact_chain_reaches_fixed_point() {
        let mut map = BlockIntervalMap::new();
        for i in 0..10 {
            map.insert(i * 8, 8, "/frag");
        }
        map.insert(200, 8, "/frag");
        map.compact();

        let extents: Vec<_> = map.iter().map(|e| (e.start, e.length)).collect();
        assert_eq!(extents, vec![(0, 80), (200, 8)]);
    }

    #[test]
    fn test_find_bounds() {
        let mut map = BlockIntervalMap::new();
        assert_eq!(map.find(0), None);

        map.insert(100, 50, "/a");
        assert_eq!(map.find(99), None);
        assert_eq!(map.find(100), Some(Path::new("/a")));
        assert_eq!(map.find(149), Some(Path::new("/a")));
        assert_eq!(map.find(150), None);
        assert_eq!(map.find(u64::MAX), None);
    }

    #[test]
    fn test_insert_keeps_first_at_same_start() {
        let mut map = BlockIntervalMap::new();
        map.insert(10, 5, "/first");
        map.insert(10, 9, "/second");
        assert_eq!(map.find(12), Some(Path::new("/first")));
        assert_eq!(map.find(16), None);
    }
}
