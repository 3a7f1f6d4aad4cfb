//! Domain layer tests
//!
//! Geometry and range planning, the block interval map, passwords and the
//! device fingerprint.

use bbf::domain::entities::{
    AtaPassword, BlockIntervalMap, BlockRange, DeviceGeometry, DeviceIdentity, OperationProgress,
    MAX_STEPPING, MIN_STEPPING, PASSWORD_LEN,
};
use bbf::domain::services::{confirmation_string, device_fingerprint, CONFIRMATION_LEN};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::*;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Geometry Tests
// ============================================================================

#[rstest]
#[case(512, 512, 1)]
#[case(512, 4096, 8)]
#[case(4096, 4096, 1)]
#[case(4096, 512, 1)]
fn test_natural_stepping(#[case] lbs: u32, #[case] pbs: u32, #[case] stepping: u64) {
    let geometry = DeviceGeometry::new(lbs, pbs, 1 << 20).unwrap();
    assert_eq!(geometry.stepping(), stepping);
}

#[test]
fn test_zero_block_size_rejected() {
    assert!(DeviceGeometry::new(0, 4096, 1 << 20).is_none());
    assert!(DeviceGeometry::new(512, 0, 1 << 20).is_none());
}

#[test]
fn test_range_rounds_to_stepping() {
    let geometry = DeviceGeometry::new(512, 4096, 100 * 512).unwrap();
    let range = BlockRange::plan(&geometry, 13, Some(30), None);

    assert_eq!(range.start(), 8);
    assert_eq!(range.end(), 32);
    assert_eq!(range.stepping(), 8);
}

#[test]
fn test_range_clamps_to_capacity() {
    let geometry = DeviceGeometry::new(512, 4096, 100 * 512).unwrap();
    let range = BlockRange::plan(&geometry, 0, Some(1_000), None);

    assert_eq!(range.end(), 100);
    assert_eq!(range.chunk_len(96), 4);
    assert_eq!(range.chunk_len(100), 0);
}

#[rstest]
#[case(150, None, 96)]
#[case(100, None, 96)]
#[case(40, Some(20), 24)]
fn test_start_past_end_is_empty_and_aligned(
    #[case] start: u64,
    #[case] end: Option<u64>,
    #[case] edge: u64,
) {
    let geometry = DeviceGeometry::new(512, 512, 100 * 512).unwrap();
    let range = BlockRange::plan(&geometry, start, end, Some(8));

    assert!(range.is_empty());
    assert_eq!(range.start(), edge);
    assert_eq!(range.start() % range.stepping(), 0);
}

#[test]
fn test_stepping_override_is_clamped() {
    let geometry = DeviceGeometry::new(512, 512, 1 << 30).unwrap();
    assert_eq!(BlockRange::plan(&geometry, 0, None, Some(1)).stepping(), MIN_STEPPING);
    assert_eq!(
        BlockRange::plan(&geometry, 0, None, Some(1 << 20)).stepping(),
        MAX_STEPPING
    );
}

proptest! {
    #[test]
    fn prop_range_invariants(
        lbs_shift in 0u32..4,
        pbs_shift in 0u32..4,
        blocks in 1u64..100_000,
        start in 0u64..200_000,
        end in proptest::option::of(0u64..200_000),
        stepping in proptest::option::of(0u64..70_000),
    ) {
        let lbs = 512u32 << lbs_shift;
        let pbs = lbs << pbs_shift;
        let geometry = DeviceGeometry::new(lbs, pbs, blocks * lbs as u64).unwrap();
        let range = BlockRange::plan(&geometry, start, end, stepping);

        prop_assert!(geometry.stepping() >= 1);
        prop_assert!(range.stepping() >= 1);
        prop_assert_eq!(range.start() % range.stepping(), 0);
        prop_assert!(range.start() <= range.end());
        prop_assert!(range.end() <= geometry.logical_block_count());
    }

    #[test]
    fn prop_chunks_never_pass_the_end(
        blocks in 1u64..10_000,
        stepping in 2u64..512,
    ) {
        let geometry = DeviceGeometry::new(512, 512, blocks * 512).unwrap();
        let range = BlockRange::plan(&geometry, 0, None, Some(stepping));

        let mut block = range.start();
        while block < range.end() {
            let len = range.chunk_len(block);
            prop_assert!(len >= 1);
            prop_assert!(block + len <= geometry.logical_block_count());
            block += len;
        }
        prop_assert_eq!(block, range.end());
    }
}

// ============================================================================
// BlockIntervalMap Tests
// ============================================================================

#[fixture]
fn fragmented_map() -> BlockIntervalMap {
    let mut map = BlockIntervalMap::new();
    map.insert(100, 10, "/data/a");
    map.insert(110, 5, "/data/a");
    map.insert(115, 5, "/data/b");
    map.insert(200, 1, "/data/a");
    map
}

#[rstest]
fn test_compaction_merges_adjacent_fragments(mut fragmented_map: BlockIntervalMap) {
    fragmented_map.compact();

    let extents: Vec<_> = fragmented_map
        .iter()
        .map(|e| (e.start, e.length, e.path.to_path_buf()))
        .collect();
    assert_eq!(extents.len(), 3);
    assert_eq!(extents[0], (100, 15, "/data/a".into()));
    assert_eq!(extents[1], (115, 5, "/data/b".into()));
    assert_eq!(extents[2], (200, 1, "/data/a".into()));
}

#[rstest]
#[case(99, None)]
#[case(100, Some("/data/a"))]
#[case(114, Some("/data/a"))]
#[case(115, Some("/data/b"))]
#[case(119, Some("/data/b"))]
#[case(120, None)]
#[case(200, Some("/data/a"))]
#[case(201, None)]
fn test_find_owner(
    mut fragmented_map: BlockIntervalMap,
    #[case] block: u64,
    #[case] owner: Option<&str>,
) {
    fragmented_map.compact();
    assert_eq!(fragmented_map.find(block), owner.map(Path::new));
}

#[test]
fn test_find_on_empty_map() {
    assert_eq!(BlockIntervalMap::new().find(0), None);
}

proptest! {
    #[test]
    fn prop_compaction_preserves_ownership(
        lengths in proptest::collection::vec((1u64..16, 0usize..3), 1..32),
    ) {
        let names = ["/a", "/b", "/c"];
        let mut map = BlockIntervalMap::new();
        let mut expected = Vec::new();
        let mut start = 0;
        for (length, owner) in lengths {
            map.insert(start, length, names[owner]);
            expected.push((start, length, names[owner]));
            start += length;
        }

        let mut compacted = map.clone();
        compacted.compact();
        prop_assert!(compacted.len() <= map.len());

        for (start, length, owner) in expected {
            for block in start..start + length {
                prop_assert_eq!(compacted.find(block), Some(Path::new(owner)));
            }
        }
        prop_assert_eq!(compacted.find(start), None);
    }
}

// ============================================================================
// Password & Confirmation Tests
// ============================================================================

#[test]
fn test_password_is_padded() {
    let password = AtaPassword::new("secret").unwrap();
    let bytes = password.as_bytes();
    assert_eq!(bytes.len(), PASSWORD_LEN);
    assert_eq!(&bytes[..6], b"secret");
    assert!(bytes[6..].iter().all(|&b| b == 0));
}

#[test]
fn test_password_is_truncated() {
    let long = "x".repeat(PASSWORD_LEN + 8);
    let password = AtaPassword::new(&long).unwrap();
    assert!(password.as_bytes().iter().all(|&b| b == b'x'));
}

#[test]
fn test_empty_password_rejected() {
    assert!(AtaPassword::new("").is_none());
}

#[test]
fn test_confirmation_string_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = confirmation_string(&mut rng);
    let b = confirmation_string(&mut rng);

    assert_eq!(a.len(), CONFIRMATION_LEN);
    assert!(a.chars().all(|c| c.is_ascii_lowercase()));
    assert_ne!(a, b);
}

// ============================================================================
// Fingerprint Tests
// ============================================================================

#[fixture]
fn identity() -> DeviceIdentity {
    DeviceIdentity {
        serial_number: "WD-WCC4E0000001".to_string(),
        model_number: "WDC WD40EFRX-68N32N0".to_string(),
        ..Default::default()
    }
}

#[rstest]
fn test_fingerprint_distinguishes_devices(identity: DeviceIdentity) {
    let geometry = DeviceGeometry::new(512, 4096, 4_000_787_030_016).unwrap();
    let fp = device_fingerprint(Some(&identity), &geometry);
    assert_eq!(fp.len(), 8);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(fp, device_fingerprint(Some(&identity.clone()), &geometry));

    let mut other = identity.clone();
    other.serial_number.push('2');
    assert_ne!(fp, device_fingerprint(Some(&other), &geometry));

    let smaller = DeviceGeometry::new(512, 4096, 2_000_398_934_016).unwrap();
    assert_ne!(fp, device_fingerprint(Some(&identity), &smaller));
    assert_ne!(fp, device_fingerprint(None, &geometry));
}

// ============================================================================
// Progress Tests
// ============================================================================

#[test]
fn test_progress_view() {
    let bad = [5u64, 9];
    let progress = OperationProgress::new(0, 100, 25, Duration::from_secs(5), &bad);

    assert_eq!(progress.processed(), 25);
    assert_eq!(progress.total(), 100);
    assert!((progress.percentage() - 25.0).abs() < f64::EPSILON);
    assert!((progress.blocks_per_second() - 5.0).abs() < 1e-9);
    assert_eq!(progress.eta(), Some(Duration::from_secs(15)));
    assert_eq!(progress.bad_count(), 2);
    assert_eq!(progress.last_bad(), Some(9));
}
