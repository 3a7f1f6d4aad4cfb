//! Error domain
//!
//! Every layer of the tool reports failures through [`ErrorCode`], a single
//! value covering four disjoint sources:
//!
//! * POSIX errno values returned by system calls
//! * host adapter status reported by the SCSI generic driver
//! * driver status reported by the SCSI generic driver
//! * ATA/SCSI sense data (additional sense code and qualifier)
//!
//! The codes also pack into one `u32` so they can be stored, logged and
//! compared without losing the source. [`AppError`] wraps a code with the
//! operation that failed and maps it onto the process exit status.

use super::sense;
use std::fmt;
use std::io;
use thiserror::Error;

/// Packed range marker for host adapter status codes
pub const HOST_STATUS_RANGE: u32 = 0x0000_0100;
/// Packed range marker for driver status codes
pub const DRIVER_STATUS_RANGE: u32 = 0x0000_0200;

const RANGE_MASK: u32 = 0x0000_FF00;

/// Host adapter status (`DID_*`) from an SG_IO request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostStatus(pub u8);

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.0 {
            0x00 => "No error (0x00)",
            0x01 => "Couldn't connect before timeout period (0x01)",
            0x02 => "Bus stayed busy through time out period (0x02)",
            0x03 => "Timed out for other reason (0x03)",
            0x04 => "Bad target (0x04)",
            0x05 => "Told to abort for some other reason (0x05)",
            0x06 => "Parity error (0x06)",
            0x07 => "Internal error (0x07)",
            0x08 => "Reset by somebody (0x08)",
            0x09 => "Got an interrupt we weren't expecting (0x09)",
            _ => "invalid error",
        };
        f.write_str(text)
    }
}

/// Driver status (`DRIVER_*`) from an SG_IO request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverStatus(pub u8);

impl DriverStatus {
    /// Sense data is available; not a failure on its own
    pub const SENSE: u8 = 0x08;

    /// Returns true if the status only announces pending sense data
    pub fn is_sense_pending(&self) -> bool {
        self.0 & 0x0F == Self::SENSE
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.0 {
            0x00 => "No Error (0x00)",
            0x01 => "Busy (0x01)",
            0x02 => "Soft (0x02)",
            0x03 => "Media (0x03)",
            0x04 => "internal driver error (0x04)",
            0x05 => "finished (DID_BAD_TARGET or DID_ABORT) (0x05)",
            0x06 => "finished with timeout (0x06)",
            0x07 => "finished with fatal error (0x07)",
            0x08 => "had sense information available (0x08)",
            _ => "unknown",
        };
        f.write_str(text)
    }
}

/// A failure from the OS, the SCSI transport, or the device itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// POSIX errno
    Os(i32),
    /// Host adapter status
    Host(HostStatus),
    /// Driver status
    Driver(DriverStatus),
    /// Device sense data
    Sense { asc: u8, ascq: u8 },
}

impl ErrorCode {
    /// Builds an errno code
    pub fn os(errno: i32) -> Self {
        Self::Os(errno)
    }

    /// Unpacks a code from its integer form
    ///
    /// Values below 256 are errno, `0x1xx` host status, `0x2xx` driver
    /// status, and anything else is `(asc << 24) | (ascq << 16)`.
    pub fn from_raw(raw: u32) -> Self {
        if raw < 256 {
            return Self::Os(raw as i32);
        }

        match raw & RANGE_MASK {
            HOST_STATUS_RANGE => Self::Host(HostStatus(raw as u8)),
            DRIVER_STATUS_RANGE => Self::Driver(DriverStatus(raw as u8)),
            _ => Self::Sense {
                asc: (raw >> 24) as u8,
                ascq: (raw >> 16) as u8,
            },
        }
    }

    /// Packs the code into its integer form
    ///
    /// `Sense { asc: 0, ascq: 0 }` packs to 0 and therefore does not
    /// survive a round trip; it never signals a failure in practice.
    pub fn raw(&self) -> u32 {
        match *self {
            Self::Os(errno) => (errno as u32) & 0xFF,
            Self::Host(HostStatus(h)) => HOST_STATUS_RANGE | h as u32,
            Self::Driver(DriverStatus(d)) => DRIVER_STATUS_RANGE | d as u32,
            Self::Sense { asc, ascq } => ((asc as u32) << 24) | ((ascq as u32) << 16),
        }
    }

    /// Returns the errno if this is an OS error
    pub fn errno(&self) -> Option<i32> {
        match *self {
            Self::Os(errno) => Some(errno),
            _ => None,
        }
    }

    /// Returns true if the failure is attributable to the addressed blocks
    ///
    /// Block-local failures are recorded and the run continues; anything
    /// else (bad descriptor, invalid argument, unplugged device) stops the
    /// whole operation.
    pub fn is_block_local(&self) -> bool {
        match *self {
            Self::Os(errno) => matches!(
                errno,
                libc::EIO | libc::ENODATA | libc::EBADMSG | libc::EILSEQ
            ),
            Self::Host(_) | Self::Driver(_) | Self::Sense { .. } => true,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Os(errno) => write!(f, "{}", errno_message(*errno)),
            Self::Host(status) => write!(f, "{}", status),
            Self::Driver(status) => write!(f, "{}", status),
            Self::Sense { asc, ascq } => write!(f, "{}", sense::describe(*asc, *ascq)),
        }
    }
}

impl std::error::Error for ErrorCode {}

impl From<io::Error> for ErrorCode {
    fn from(err: io::Error) -> Self {
        Self::Os(err.raw_os_error().unwrap_or(libc::EIO))
    }
}

impl From<rustix::io::Errno> for ErrorCode {
    fn from(err: rustix::io::Errno) -> Self {
        Self::Os(err.raw_os_error())
    }
}

fn errno_message(errno: i32) -> String {
    let text = io::Error::from_raw_os_error(errno).to_string();
    // "Input/output error (os error 5)" -> "Input/output error"
    match text.rfind(" (os error") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}

/// Category of an application level failure
///
/// The discriminant is the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentRequired = 1,
    ArgumentInvalid = 2,
    OpeningDevice = 3,
    ClosingDevice = 4,
    IdentifyingDevice = 5,
    ReadingBadBlocksFile = 6,
    WritingBadBlocksFile = 7,
    OpeningFile = 8,
    Captcha = 9,
    Runtime = 10,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ArgumentRequired => "required argument",
            Self::ArgumentInvalid => "invalid argument",
            Self::OpeningDevice => "unable to open device",
            Self::ClosingDevice => "unable to close device",
            Self::IdentifyingDevice => "unable to identify device",
            Self::ReadingBadBlocksFile => "unable to read bad blocks file",
            Self::WritingBadBlocksFile => "unable to write bad blocks file",
            Self::OpeningFile => "unable to open file",
            Self::Captcha => "captcha doesn't match",
            Self::Runtime => "runtime",
        };
        f.write_str(text)
    }
}

/// An operation level failure shown to the operator
#[derive(Debug, Clone, Error)]
#[error("ERROR - {kind}: {context} [{code}]")]
pub struct AppError {
    kind: ErrorKind,
    code: ErrorCode,
    context: String,
}

impl AppError {
    /// Creates an error of the given kind
    pub fn new(kind: ErrorKind, code: ErrorCode, context: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            context: context.into(),
        }
    }

    pub fn argument_required(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArgumentRequired, ErrorCode::Os(libc::EINVAL), context)
    }

    pub fn argument_invalid(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArgumentInvalid, ErrorCode::Os(libc::EINVAL), context)
    }

    pub fn opening_device(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::OpeningDevice, code, context)
    }

    pub fn closing_device(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClosingDevice, code, context)
    }

    pub fn identifying_device(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::IdentifyingDevice, code, context)
    }

    pub fn reading_bad_blocks_file(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReadingBadBlocksFile, code, context)
    }

    pub fn writing_bad_blocks_file(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::WritingBadBlocksFile, code, context)
    }

    pub fn opening_file(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::OpeningFile, code, context)
    }

    /// Confirmation string mismatch
    pub fn captcha(given: &str, expected: &str) -> Self {
        Self::new(
            ErrorKind::Captcha,
            ErrorCode::Os(libc::EINVAL),
            format!("{} != {}", given, expected),
        )
    }

    pub fn runtime(code: ErrorCode, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::Runtime, code, context)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        self.kind as i32
    }
}

/// Result type for operation level code
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_ranges_decode() {
        assert_eq!(ErrorCode::from_raw(5), ErrorCode::Os(5));
        assert_eq!(ErrorCode::from_raw(0x103), ErrorCode::Host(HostStatus(3)));
        assert_eq!(ErrorCode::from_raw(0x206), ErrorCode::Driver(DriverStatus(6)));
        assert_eq!(
            ErrorCode::from_raw(0x1105_0000),
            ErrorCode::Sense { asc: 0x11, ascq: 0x05 }
        );
    }

    #[test]
    fn test_raw_packing() {
        assert_eq!(ErrorCode::Host(HostStatus(0x07)).raw(), 0x107);
        assert_eq!(ErrorCode::Sense { asc: 0x32, ascq: 0x00 }.raw(), 0x3200_0000);
        // zero sense pair collapses onto errno 0
        assert_eq!(ErrorCode::Sense { asc: 0, ascq: 0 }.raw(), 0);
    }

    #[test]
    fn test_display_never_fails() {
        assert_eq!(
            ErrorCode::Host(HostStatus(0x03)).to_string(),
            "Timed out for other reason (0x03)"
        );
        assert_eq!(ErrorCode::Host(HostStatus(0x7F)).to_string(), "invalid error");
        assert_eq!(ErrorCode::Driver(DriverStatus(0x55)).to_string(), "unknown");
        assert_eq!(
            ErrorCode::Sense { asc: 0x11, ascq: 0x05 }.to_string(),
            "1105 L-Ec Uncorrectable Error"
        );
        assert!(ErrorCode::Sense { asc: 0xFE, ascq: 0xFE }
            .to_string()
            .contains("unknown"));
        assert!(!ErrorCode::Os(libc::EIO).to_string().contains("os error"));
    }

    #[test]
    fn test_block_local_classification() {
        assert!(ErrorCode::Os(libc::EIO).is_block_local());
        assert!(ErrorCode::Sense { asc: 0x11, ascq: 0 }.is_block_local());
        assert!(ErrorCode::Host(HostStatus(3)).is_block_local());
        assert!(!ErrorCode::Os(libc::EBADF).is_block_local());
        assert!(!ErrorCode::Os(libc::EINVAL).is_block_local());
    }

    #[test]
    fn test_app_error_format() {
        let err = AppError::captcha("abc", "def");
        assert_eq!(err.exit_code(), 9);
        assert_eq!(
            err.to_string(),
            format!("ERROR - captcha doesn't match: abc != def [{}]", ErrorCode::Os(libc::EINVAL))
        );

        let err = AppError::runtime(ErrorCode::Os(libc::EBUSY), "Security frozen");
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().starts_with("ERROR - runtime: Security frozen ["));
    }
}
