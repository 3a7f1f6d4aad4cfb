//! Random confirmation strings

use rand::Rng;

/// Length of a generated confirmation string
pub const CONFIRMATION_LEN: usize = 6;

/// Generates a lowercase confirmation string the operator must retype
pub fn confirmation_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CONFIRMATION_LEN)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}
