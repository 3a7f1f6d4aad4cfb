//! Pre-sized I/O buffer measured in blocks

use crate::core::ErrorCode;
use std::ops::{Deref, DerefMut};

/// Owned buffer sized to a whole number of logical blocks
///
/// Transports validate every request against the buffer with
/// [`BlockBuffer::span`] before issuing I/O, so a request can never read
/// or write past the end of the allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBuffer {
    data: Vec<u8>,
    block_size: usize,
}

impl BlockBuffer {
    /// Allocates a zeroed buffer holding `blocks` blocks
    pub fn new(block_size: u32, blocks: u64) -> Self {
        Self::filled(block_size, blocks, 0)
    }

    /// Allocates a buffer with every byte set to `byte`
    pub fn filled(block_size: u32, blocks: u64, byte: u8) -> Self {
        let block_size = block_size.max(1) as usize;
        Self {
            data: vec![byte; block_size * blocks as usize],
            block_size,
        }
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of whole blocks the buffer holds
    #[inline]
    pub fn capacity_blocks(&self) -> u64 {
        (self.data.len() / self.block_size) as u64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn fill(&mut self, byte: u8) {
        self.data.fill(byte);
    }

    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Byte length of `blocks` blocks, or `EINVAL` if they do not fit
    pub fn span_len(&self, blocks: u64) -> Result<usize, ErrorCode> {
        if blocks == 0 || blocks > self.capacity_blocks() {
            return Err(ErrorCode::Os(libc::EINVAL));
        }
        Ok(blocks as usize * self.block_size)
    }

    /// The first `blocks` blocks of the buffer
    pub fn span(&self, blocks: u64) -> Result<&[u8], ErrorCode> {
        let len = self.span_len(blocks)?;
        Ok(&self.data[..len])
    }

    /// The first `blocks` blocks of the buffer, mutably
    pub fn span_mut(&mut self, blocks: u64) -> Result<&mut [u8], ErrorCode> {
        let len = self.span_len(blocks)?;
        Ok(&mut self.data[..len])
    }
}

impl Deref for BlockBuffer {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for BlockBuffer {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_validation() {
        let buf = BlockBuffer::new(512, 8);
        assert_eq!(buf.capacity_blocks(), 8);
        assert_eq!(buf.span(8).unwrap().len(), 4096);
        assert_eq!(buf.span(9), Err(ErrorCode::Os(libc::EINVAL)));
        assert_eq!(buf.span(0), Err(ErrorCode::Os(libc::EINVAL)));
    }

    #[test]
    fn test_fill_and_clear() {
        let mut buf = BlockBuffer::filled(512, 1, 0xAA);
        assert!(buf.iter().all(|&b| b == 0xAA));
        buf.clear();
        assert!(buf.iter().all(|&b| b == 0));
    }
}
