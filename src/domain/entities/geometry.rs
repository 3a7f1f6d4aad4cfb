//! Device geometry and block ranges

use serde::Serialize;

/// Smallest stepping a caller may request
pub const MIN_STEPPING: u64 = 2;
/// Largest stepping a caller may request
pub const MAX_STEPPING: u64 = 65536;

/// Block sizes and capacity of an open device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceGeometry {
    logical_block_size: u32,
    physical_block_size: u32,
    size_in_bytes: u64,
}

impl DeviceGeometry {
    /// Creates a geometry
    ///
    /// Returns `None` if either block size is zero.
    pub fn new(
        logical_block_size: u32,
        physical_block_size: u32,
        size_in_bytes: u64,
    ) -> Option<Self> {
        if logical_block_size == 0 || physical_block_size == 0 {
            return None;
        }

        Some(Self {
            logical_block_size,
            physical_block_size,
            size_in_bytes,
        })
    }

    pub fn logical_block_size(&self) -> u32 {
        self.logical_block_size
    }

    pub fn physical_block_size(&self) -> u32 {
        self.physical_block_size
    }

    pub fn size_in_bytes(&self) -> u64 {
        self.size_in_bytes
    }

    pub fn logical_block_count(&self) -> u64 {
        self.size_in_bytes / self.logical_block_size as u64
    }

    pub fn physical_block_count(&self) -> u64 {
        self.size_in_bytes / self.physical_block_size as u64
    }

    /// Logical blocks per physical block, never less than 1
    pub fn stepping(&self) -> u64 {
        (self.physical_block_size / self.logical_block_size).max(1) as u64
    }

    /// Returns true if the physical size is a whole multiple of the logical size
    pub fn is_stepping_exact(&self) -> bool {
        self.physical_block_size % self.logical_block_size == 0
    }
}

/// A half-open, stepping-aligned range of logical blocks
///
/// `start` is always a multiple of `stepping` and `start <= end <=
/// logical_block_count`. The final chunk may be shorter than `stepping`
/// when the device capacity is not a multiple of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    start: u64,
    end: u64,
    stepping: u64,
}

impl BlockRange {
    /// Computes the effective range for an operation
    ///
    /// A stepping override is clamped to `[MIN_STEPPING, MAX_STEPPING]`;
    /// without one the device's natural stepping is used. The start is
    /// rounded down and the end rounded up to stepping boundaries, and the
    /// end is clamped to the device capacity. A start at or past the end
    /// yields an empty range on the last stepping boundary.
    pub fn plan(
        geometry: &DeviceGeometry,
        start_block: u64,
        end_block: Option<u64>,
        stepping: Option<u64>,
    ) -> Self {
        let stepping = match stepping {
            Some(s) => s.clamp(MIN_STEPPING, MAX_STEPPING),
            None => geometry.stepping(),
        };
        let count = geometry.logical_block_count();

        let end = end_block.unwrap_or(count).min(count);
        let end = round_up(end, stepping).min(count);
        if start_block >= end {
            let edge = round_down(end, stepping);
            return Self {
                start: edge,
                end: edge,
                stepping,
            };
        }
        let start = round_down(start_block, stepping);

        Self { start, end, stepping }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn stepping(&self) -> u64 {
        self.stepping
    }

    /// Number of blocks in the range
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of blocks to process starting at `block`
    pub fn chunk_len(&self, block: u64) -> u64 {
        if block >= self.end {
            return 0;
        }
        self.stepping.min(self.end - block)
    }
}

fn round_down(value: u64, step: u64) -> u64 {
    value - value % step
}

fn round_up(value: u64, step: u64) -> u64 {
    match value % step {
        0 => value,
        rem => value.saturating_add(step - rem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(lbs: u32, pbs: u32, blocks: u64) -> DeviceGeometry {
        DeviceGeometry::new(lbs, pbs, blocks * lbs as u64).unwrap()
    }

    #[test]
    fn test_stepping_from_block_sizes() {
        assert_eq!(geometry(512, 4096, 64).stepping(), 8);
        assert_eq!(geometry(512, 512, 64).stepping(), 1);
        assert_eq!(geometry(4096, 512, 64).stepping(), 1);
        assert!(!DeviceGeometry::new(512, 1000, 512).unwrap().is_stepping_exact());
        assert!(DeviceGeometry::new(0, 512, 512).is_none());
    }

    #[test]
    fn test_plan_rounds_and_clamps() {
        let g = geometry(512, 4096, 100);
        let range = BlockRange::plan(&g, 13, Some(50), None);
        assert_eq!(range.start(), 8);
        assert_eq!(range.end(), 56);

        let range = BlockRange::plan(&g, 0, Some(10_000), None);
        assert_eq!(range.end(), 100);
        assert_eq!(range.chunk_len(96), 4);
        assert_eq!(range.chunk_len(100), 0);
    }

    #[test]
    fn test_plan_clamps_stepping_override() {
        let g = geometry(512, 512, 1 << 20);
        assert_eq!(BlockRange::plan(&g, 0, None, Some(1)).stepping(), MIN_STEPPING);
        assert_eq!(
            BlockRange::plan(&g, 0, None, Some(1 << 20)).stepping(),
            MAX_STEPPING
        );
    }

    #[test]
    fn test_plan_start_past_end() {
        let g = geometry(512, 4096, 64);
        let range = BlockRange::plan(&g, 200, Some(32), None);
        assert!(range.is_empty());
        assert_eq!(range.start(), 32);
    }

    #[test]
    fn test_plan_start_past_unaligned_capacity() {
        let g = geometry(512, 512, 100);
        let range = BlockRange::plan(&g, 150, None, Some(8));
        assert!(range.is_empty());
        assert_eq!(range.start(), 96);
        assert_eq!(range.start() % range.stepping(), 0);
    }
}
