//! Domain entities
//!
//! Core objects of the bad block domain: device identity and geometry,
//! block buffers, bad block sets, progress snapshots and the block to
//! file map.

mod bad_blocks;
mod block_buffer;
mod block_map;
mod geometry;
mod identity;
mod password;
mod progress;
mod uncorrectable;

pub use bad_blocks::BadBlockList;
pub use block_buffer::BlockBuffer;
pub use block_map::{BlockExtent, BlockIntervalMap};
pub use geometry::{BlockRange, DeviceGeometry, MAX_STEPPING, MIN_STEPPING};
pub use identity::DeviceIdentity;
pub use password::{AtaPassword, PasswordIdentifier, PASSWORD_LEN};
pub use progress::{format_hms, OperationProgress};
pub use uncorrectable::UncorrectableMode;
