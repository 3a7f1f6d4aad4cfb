//! SG_IO execution
//!
//! Issues a passthrough CDB through the Linux SCSI generic ioctl and turns
//! the layered completion status into an [`ErrorCode`].

use super::cdb::{Cdb, DataDirection};
use super::taskfile::TaskFile;
use crate::core::error::{DriverStatus, ErrorCode, HostStatus};
use crate::core::sense::SenseData;
use std::os::fd::{AsRawFd, BorrowedFd};
use std::time::Duration;

const SG_IO: libc::c_ulong = 0x2285;
const SG_INTERFACE_ID: i32 = b'S' as i32;

const SG_DXFER_NONE: i32 = -1;
const SG_DXFER_TO_DEV: i32 = -2;
const SG_DXFER_FROM_DEV: i32 = -3;

/// SCSI status byte for CHECK CONDITION
const STATUS_CHECK_CONDITION: u8 = 0x02;

/// Size of the sense buffer handed to the kernel
pub const SENSE_LEN: usize = 32;

/// Timeout used when the caller passes zero
const DEFAULT_TIMEOUT_MS: u32 = 1000;

/// `struct sg_io_hdr` from `<scsi/sg.h>`
#[repr(C)]
struct SgIoHdr {
    interface_id: i32,
    dxfer_direction: i32,
    cmd_len: u8,
    mx_sb_len: u8,
    iovec_count: u16,
    dxfer_len: u32,
    dxferp: *mut libc::c_void,
    cmdp: *mut u8,
    sbp: *mut u8,
    timeout: u32,
    flags: u32,
    pack_id: i32,
    usr_ptr: *mut libc::c_void,
    status: u8,
    masked_status: u8,
    msg_status: u8,
    sb_len_wr: u8,
    host_status: u16,
    driver_status: u16,
    resid: i32,
    duration: u32,
    info: u32,
}

/// Data phase of a passthrough command
pub enum Transfer<'a> {
    None,
    FromDevice(&'a mut [u8]),
    ToDevice(&'a [u8]),
}

impl Transfer<'_> {
    pub fn direction(&self) -> DataDirection {
        match self {
            Self::None => DataDirection::None,
            Self::FromDevice(_) => DataDirection::FromDevice,
            Self::ToDevice(_) => DataDirection::ToDevice,
        }
    }
}

/// Completion fields of an SG_IO request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub status: u8,
    pub host_status: u16,
    pub driver_status: u16,
    pub sense: [u8; SENSE_LEN],
}

impl Completion {
    /// A completion with every status clear
    pub fn ok() -> Self {
        Self {
            status: 0,
            host_status: 0,
            driver_status: 0,
            sense: [0; SENSE_LEN],
        }
    }
}

/// Interprets a completion
///
/// Checked strictly in order: SCSI status (CHECK CONDITION is expected for
/// ATA passthrough), host status, driver status (pending sense is
/// expected), then the sense key. A transport failure is reported before
/// any sense data, which may be stale.
pub fn interpret(completion: &Completion) -> Result<(), ErrorCode> {
    if completion.status != 0 && completion.status != STATUS_CHECK_CONDITION {
        return Err(ErrorCode::Os(libc::EBADE));
    }

    if completion.host_status != 0 {
        return Err(ErrorCode::Host(HostStatus(completion.host_status as u8)));
    }

    let driver = DriverStatus(completion.driver_status as u8);
    if completion.driver_status != 0 && !driver.is_sense_pending() {
        return Err(ErrorCode::Driver(driver));
    }

    match SenseData::parse(&completion.sense) {
        Some(sense) if !sense.key.is_benign() => Err(ErrorCode::Sense {
            asc: sense.asc,
            ascq: sense.ascq,
        }),
        _ => Ok(()),
    }
}

/// Executes one ATA command through SG_IO
///
/// Input buffers are zeroed before the request so a short transfer never
/// leaves stale data behind.
pub fn execute(
    fd: BorrowedFd<'_>,
    tf: &TaskFile,
    transfer: Transfer<'_>,
    dma: bool,
    timeout: Duration,
) -> Result<(), ErrorCode> {
    let mut cdb = Cdb::encode(tf, transfer.direction(), dma);
    let mut sense = [0u8; SENSE_LEN];

    let (direction, dxferp, dxfer_len): (i32, *mut libc::c_void, usize) = match transfer {
        Transfer::None => (SG_DXFER_NONE, std::ptr::null_mut(), 0),
        Transfer::FromDevice(buf) => {
            buf.fill(0);
            (SG_DXFER_FROM_DEV, buf.as_mut_ptr().cast(), buf.len())
        }
        // the kernel only reads from the buffer in this direction
        Transfer::ToDevice(buf) => (SG_DXFER_TO_DEV, buf.as_ptr() as *mut libc::c_void, buf.len()),
    };

    let timeout_ms = match timeout.as_millis() {
        0 => DEFAULT_TIMEOUT_MS,
        ms => ms.min(u32::MAX as u128) as u32,
    };

    let mut hdr = SgIoHdr {
        interface_id: SG_INTERFACE_ID,
        dxfer_direction: direction,
        cmd_len: cdb.len() as u8,
        mx_sb_len: SENSE_LEN as u8,
        iovec_count: 0,
        dxfer_len: u32::try_from(dxfer_len).map_err(|_| ErrorCode::Os(libc::EINVAL))?,
        dxferp,
        cmdp: cdb.as_mut_ptr(),
        sbp: sense.as_mut_ptr(),
        timeout: timeout_ms,
        flags: 0,
        pack_id: tf.lba() as i32,
        usr_ptr: std::ptr::null_mut(),
        status: 0,
        masked_status: 0,
        msg_status: 0,
        sb_len_wr: 0,
        host_status: 0,
        driver_status: 0,
        resid: 0,
        duration: 0,
        info: 0,
    };

    // SAFETY: every pointer in `hdr` refers to a live buffer of the length
    // recorded next to it for the duration of the call.
    let rv = unsafe { libc::ioctl(fd.as_raw_fd(), SG_IO as _, &mut hdr as *mut SgIoHdr) };
    if rv == -1 {
        return Err(std::io::Error::last_os_error().into());
    }

    interpret(&Completion {
        status: hdr.status,
        host_status: hdr.host_status,
        driver_status: hdr.driver_status,
        sense,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sense(key: u8, asc: u8, ascq: u8) -> [u8; SENSE_LEN] {
        let mut sense = [0u8; SENSE_LEN];
        sense[0] = 0x72;
        sense[1] = key;
        sense[2] = asc;
        sense[3] = ascq;
        sense
    }

    #[test]
    fn test_clean_completion() {
        assert_eq!(interpret(&Completion::ok()), Ok(()));
    }

    #[test]
    fn test_scsi_status_checked_first() {
        let completion = Completion {
            status: 0x08, // BUSY
            host_status: 0x03,
            driver_status: 0x06,
            sense: with_sense(0x03, 0x11, 0x00),
        };
        assert_eq!(interpret(&completion), Err(ErrorCode::Os(libc::EBADE)));
    }

    #[test]
    fn test_host_before_driver_before_sense() {
        let mut completion = Completion {
            status: STATUS_CHECK_CONDITION,
            host_status: 0x03,
            driver_status: 0x06,
            sense: with_sense(0x03, 0x11, 0x00),
        };
        assert_eq!(interpret(&completion), Err(ErrorCode::Host(HostStatus(3))));

        completion.host_status = 0;
        assert_eq!(interpret(&completion), Err(ErrorCode::Driver(DriverStatus(6))));

        completion.driver_status = DriverStatus::SENSE as u16;
        assert_eq!(
            interpret(&completion),
            Err(ErrorCode::Sense { asc: 0x11, ascq: 0x00 })
        );
    }

    #[test]
    fn test_benign_sense_keys_pass() {
        let completion = Completion {
            status: STATUS_CHECK_CONDITION,
            host_status: 0,
            driver_status: DriverStatus::SENSE as u16,
            sense: with_sense(0x01, 0x00, 0x1D),
        };
        assert_eq!(interpret(&completion), Ok(()));
    }
}
