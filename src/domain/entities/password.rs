//! ATA security password

/// Length of the ATA security password field
pub const PASSWORD_LEN: usize = 32;

/// Which password slot a security command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIdentifier {
    User,
    Master,
}

/// A password padded or truncated to the fixed 32-byte field
#[derive(Clone, PartialEq, Eq)]
pub struct AtaPassword {
    bytes: [u8; PASSWORD_LEN],
}

impl AtaPassword {
    /// Builds a password from operator input
    ///
    /// Returns `None` for an empty password.
    pub fn new(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }

        let mut bytes = [0u8; PASSWORD_LEN];
        let len = input.len().min(PASSWORD_LEN);
        bytes[..len].copy_from_slice(&input.as_bytes()[..len]);
        Some(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; PASSWORD_LEN] {
        &self.bytes
    }
}

// never print the secret
impl std::fmt::Debug for AtaPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AtaPassword(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_padding() {
        assert!(AtaPassword::new("").is_none());

        let pw = AtaPassword::new("secret").unwrap();
        assert_eq!(&pw.as_bytes()[..6], b"secret");
        assert!(pw.as_bytes()[6..].iter().all(|&b| b == 0));

        let long = "x".repeat(40);
        let pw = AtaPassword::new(&long).unwrap();
        assert!(pw.as_bytes().iter().all(|&b| b == b'x'));
        assert_eq!(format!("{:?}", pw), "AtaPassword(..)");
    }
}
