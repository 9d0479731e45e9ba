//! Controller discovery and the live device session.
//!
//! [`enumerate`] scans the device-node directory for a DualShock 3 and binds
//! at most one [`DualShock3`] session around the matching node. The session
//! owns the node exclusively, keeps the most recent input report, and carries
//! a sticky health flag the host polls to decide when to drop and rediscover.

use crate::consts::{self, input, output};
use crate::error::{Error, Result};
use crate::hidraw::{HidNode, HidrawNode};
use crate::report::{Control, InputReport, Motor, RumbleReport};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Number of virtual pad slots the host drives.
pub const NUM_PADS: usize = 2;

/// Default strength for diagnostic rumble invocations.
pub const DEFAULT_TEST_FORCE: f32 = 0.60;

/// Force-feedback configuration the host owns.
///
/// `intensity` uses the host's 0-128 scale and is divided by 128 to obtain
/// the rumble strength.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackConfig {
    /// Per-pad force-feedback enable flags.
    pub force_feedback: [bool; NUM_PADS],
    /// Rumble intensity, 0-128.
    pub intensity: u16,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            force_feedback: [true; NUM_PADS],
            intensity: 128,
        }
    }
}

impl FeedbackConfig {
    /// Whether force feedback is enabled for `pad`. Unknown slots read as off.
    pub fn enabled(&self, pad: usize) -> bool {
        self.force_feedback.get(pad).copied().unwrap_or(false)
    }

    /// Converts the configured intensity to a rumble strength.
    pub fn strength(&self) -> f32 {
        f32::from(self.intensity) / 128.0
    }
}

/// Capability set the host expects from any pad backend: a name, per-control
/// value queries, state refresh, a unique id, and rumble.
pub trait GamePad {
    /// Human-readable device name.
    fn name(&self) -> &'static str;
    /// Value of one logical control from the last refreshed state.
    fn input(&self, control: Control) -> i32;
    /// Refreshes internal state from the device.
    fn update_state(&mut self);
    /// Small constant identifying this device to the host.
    fn unique_identifier(&self) -> usize;
    /// Issues a rumble command for `pad`, subject to the host configuration.
    fn rumble(&mut self, motor: Motor, pad: usize);
    /// Diagnostic rumble at an explicit strength; reports transmission success.
    fn test_force(&mut self, strength: f32) -> bool;
    /// Sticky health signal; once false the host should drop the session
    /// and rediscover.
    fn healthy(&self) -> bool;
}

/// One bound DualShock 3 session.
///
/// Owns the raw node exclusively; the descriptor is closed when the session
/// drops. Generic over [`HidNode`] so tests can substitute a simulated device.
#[derive(Debug)]
pub struct DualShock3<N: HidNode = HidrawNode> {
    node: N,
    report: InputReport,
    healthy: bool,
    feedback: FeedbackConfig,
}

impl<N: HidNode> DualShock3<N> {
    /// Wraps an already-opened node. Ownership of the node transfers here.
    pub fn new(node: N, feedback: FeedbackConfig) -> Self {
        Self {
            node,
            report: InputReport::default(),
            healthy: true,
            feedback,
        }
    }

    /// The sticky health flag. Set on any I/O or protocol anomaly and never
    /// cleared by this layer.
    pub fn is_healthy(&self) -> bool {
        self.healthy
    }

    pub fn feedback(&self) -> FeedbackConfig {
        self.feedback
    }

    pub fn set_feedback(&mut self, feedback: FeedbackConfig) {
        self.feedback = feedback;
    }

    /// Last refreshed input report.
    pub fn report(&self) -> &InputReport {
        &self.report
    }

    /// Encodes and transmits a rumble command for one motor.
    ///
    /// Returns whether the full report was written. Failures set the health
    /// flag; a would-block write is transient and expected under load, so it
    /// flags the session without being reported as an error.
    pub fn rumble_with_strength(&mut self, motor: Motor, strength: f32) -> bool {
        let report = RumbleReport::for_motor(motor, strength);
        match self.transmit(&report) {
            Ok(()) => true,
            Err(Error::Io(e)) if e.kind() == ErrorKind::WouldBlock => {
                self.healthy = false;
                false
            }
            Err(e) => {
                warn!("rumble write failed: {e}");
                self.healthy = false;
                false
            }
        }
    }

    fn transmit(&mut self, report: &RumbleReport) -> Result<()> {
        match self.node.write_report(report.as_bytes()) {
            Ok(n) if n == output::REPORT_LEN => Ok(()),
            Ok(n) => Err(Error::ShortWrite {
                got: n,
                expected: output::REPORT_LEN,
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Reads queued input reports until the device signals would-block, so
    /// the retained buffer is always the most recent report. Intermediate
    /// frames are discarded; freshness matters more than completeness.
    fn drain_reports(&mut self) -> Result<()> {
        loop {
            match self.node.read_report(self.report.as_mut_bytes()) {
                Ok(n) if n == input::REPORT_LEN => {}
                Ok(n) => {
                    return Err(Error::ShortRead {
                        got: n,
                        expected: input::REPORT_LEN,
                    })
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => return Ok(()),
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }
}

impl<N: HidNode> GamePad for DualShock3<N> {
    fn name(&self) -> &'static str {
        "DualShock 3 with pressure sensitive buttons"
    }

    fn input(&self, control: Control) -> i32 {
        self.report.value(control)
    }

    fn update_state(&mut self) {
        if let Err(e) = self.drain_reports() {
            warn!("input refresh failed: {e}");
            self.healthy = false;
        }
    }

    fn unique_identifier(&self) -> usize {
        1
    }

    fn rumble(&mut self, motor: Motor, pad: usize) {
        if !self.feedback.enabled(pad) {
            return;
        }
        let strength = self.feedback.strength();
        self.rumble_with_strength(motor, strength);
    }

    fn test_force(&mut self, strength: f32) -> bool {
        self.rumble_with_strength(Motor::Large, strength);
        true
    }

    fn healthy(&self) -> bool {
        self.healthy
    }
}

/// Scans the device-node directory and binds the first DualShock 3 found.
///
/// Returns `Ok(None)` when no matching controller is connected. Candidates
/// that cannot be opened for lack of permission are skipped; any other open
/// failure, and any identity-query failure, aborts the scan with an error.
/// Directory-read errors mid-scan are logged and skipped.
///
/// # Errors
///
/// Fails when the device directory cannot be opened or a candidate node
/// fails in an unexpected way; a later call may retry from scratch.
pub fn enumerate(feedback: FeedbackConfig) -> Result<Option<DualShock3>> {
    let entries = fs::read_dir(consts::DEV_DIR)?;
    let candidates = entries.filter_map(|entry| match entry {
        Ok(entry) => entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(consts::HIDRAW_PREFIX))
            .then(|| entry.path()),
        Err(e) => {
            warn!("error while scanning {}: {e}", consts::DEV_DIR);
            None
        }
    });
    select_pad(candidates, HidrawNode::open, feedback)
}

/// Core selection pass over candidate node paths.
///
/// Every opened node that is not bound into the returned session is dropped
/// before the next candidate is probed, closing its descriptor.
fn select_pad<N, F, I>(candidates: I, mut open: F, feedback: FeedbackConfig) -> Result<Option<DualShock3<N>>>
where
    N: HidNode,
    F: FnMut(&Path) -> io::Result<N>,
    I: IntoIterator<Item = PathBuf>,
{
    for path in candidates {
        let node = match open(&path) {
            Ok(node) => node,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                // Not every hidraw node is accessible to us.
                debug!("skipping {}: {e}", path.display());
                continue;
            }
            Err(e) => {
                warn!("open() failed for {}: {e}", path.display());
                return Err(e.into());
            }
        };
        let identity = match node.identity() {
            Ok(identity) => identity,
            Err(e) => {
                warn!("identity query failed for {}: {e}", path.display());
                return Err(e.into());
            }
        };
        debug!(
            "probed {}: vendor={:04x} product={:04x}",
            path.display(),
            identity.vendor,
            identity.product
        );
        if identity.vendor == consts::SONY_VID && identity.product == consts::DUALSHOCK3_PID {
            info!("found DualShock 3 at {}", path.display());
            return Ok(Some(DualShock3::new(node, feedback)));
        }
    }
    Ok(None)
}
