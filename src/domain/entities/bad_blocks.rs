//! Bad block set

/// Ordered, append-only list of logical block addresses
///
/// Blocks are kept in the order they were found. Duplicates are allowed:
/// a block recorded by an earlier run and found again is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadBlockList {
    blocks: Vec<u64>,
}

impl BadBlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: u64) {
        self.blocks.push(block);
    }

    pub fn extend<I: IntoIterator<Item = u64>>(&mut self, blocks: I) {
        self.blocks.extend(blocks);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Most recently recorded block
    pub fn last(&self) -> Option<u64> {
        self.blocks.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.blocks.iter().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.blocks
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.blocks
    }
}

impl From<Vec<u64>> for BadBlockList {
    fn from(blocks: Vec<u64>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<u64> for BadBlockList {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
