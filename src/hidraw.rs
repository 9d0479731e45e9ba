//! Raw HID character-device access.
//!
//! Wraps one `/dev/hidrawN` node behind the [`HidNode`] trait so the session
//! and finder logic can be exercised against simulated devices in tests. The
//! node is opened non-blocking; reads and writes signal
//! [`std::io::ErrorKind::WouldBlock`] instead of suspending.

use log::warn;
use nix::ioctl_read;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::{AsRawFd, IntoRawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

// From linux/hidraw.h
const HIDRAW_IOC_MAGIC: u8 = b'H';
const HIDRAW_IOC_GRAWINFO: u8 = 0x03;

/// Mirror of `struct hidraw_devinfo` from linux/hidraw.h.
#[derive(Debug, Default, Clone, Copy)]
#[repr(C)]
struct HidrawDevInfo {
    bustype: u32,
    vendor: i16,
    product: i16,
}

ioctl_read!(
    hidraw_ioc_grawinfo,
    HIDRAW_IOC_MAGIC,
    HIDRAW_IOC_GRAWINFO,
    HidrawDevInfo
);

/// Hardware identity of a raw HID node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidIdentity {
    pub vendor: u16,
    pub product: u16,
}

/// One open raw HID node: identity query plus report transfer.
///
/// Implementations must be non-blocking: `read_report` and `write_report`
/// return [`std::io::ErrorKind::WouldBlock`] when no report or buffer space
/// is available.
pub trait HidNode {
    /// Queries the node's vendor/product identity.
    fn identity(&self) -> io::Result<HidIdentity>;
    /// Reads one input report into `buf`, returning the number of bytes read.
    fn read_report(&mut self, buf: &mut [u8]) -> io::Result<usize>;
    /// Writes one output report from `buf`, returning the number of bytes written.
    fn write_report(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// A `/dev/hidrawN` node opened non-blocking, read-write.
///
/// Owns the file descriptor exclusively; it is closed exactly once when the
/// node is dropped, and a failed close is reported but does not block teardown.
#[derive(Debug)]
pub struct HidrawNode {
    file: Option<File>,
    path: PathBuf,
}

impl HidrawNode {
    /// Opens the node at `path` with `O_RDWR | O_NONBLOCK`.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)?;
        Ok(Self {
            file: Some(file),
            path: path.to_owned(),
        })
    }

    /// Filesystem path this node was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file(&self) -> io::Result<&File> {
        // None only while drop is running, when no calls can arrive.
        self.file
            .as_ref()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotConnected))
    }
}

impl HidNode for HidrawNode {
    fn identity(&self) -> io::Result<HidIdentity> {
        let fd = self.file()?.as_raw_fd();
        let mut info = HidrawDevInfo::default();
        // SAFETY: fd is a valid open hidraw descriptor and `info` is a
        // properly sized out-parameter for HIDIOCGRAWINFO.
        unsafe { hidraw_ioc_grawinfo(fd, &mut info) }.map_err(io::Error::from)?;
        Ok(HidIdentity {
            vendor: info.vendor as u16,
            product: info.product as u16,
        })
    }

    fn read_report(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut file = self.file()?;
        file.read(buf)
    }

    fn write_report(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.file()?;
        file.write(buf)
    }
}

impl Drop for HidrawNode {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let fd = file.into_raw_fd();
            // SAFETY: into_raw_fd released ownership, so the descriptor is
            // closed exactly once, here.
            if unsafe { libc::close(fd) } < 0 {
                warn!(
                    "close() failed for {}: {}",
                    self.path.display(),
                    io::Error::last_os_error()
                );
            }
        }
    }
}
