//! Domain services
//!
//! Stateless helpers shared by the operations.

mod confirmation;
mod fingerprint;

pub use confirmation::{confirmation_string, CONFIRMATION_LEN};
pub use fingerprint::device_fingerprint;
