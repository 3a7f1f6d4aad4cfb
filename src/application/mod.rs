//! Application layer
//!
//! Use cases that run the bad block operations over a block transport.

mod block_loop;
mod burn_in;
mod device_report;
pub mod dto;
mod find_files;
mod fix_blocks;
mod scan_device;
mod security_erase;
mod write_uncorrectable;

pub use burn_in::{BurnInUseCase, BURN_IN_PATTERNS};
pub use device_report::{confirm_device, DeviceReport};
pub use find_files::{BlockOwner, ExtentLine, FindFilesUseCase};
pub use fix_blocks::FixBlocksUseCase;
pub use scan_device::ScanDeviceUseCase;
pub use security_erase::{EraseEstimate, Prompter, SecurityEraseUseCase};
pub use write_uncorrectable::WriteUncorrectableUseCase;
