//! # dualshock3-hid
//!
//! A Rust crate for reading the Sony DualShock 3's pressure-sensitive
//! controls and driving its rumble motors and status LEDs over the Linux
//! raw HID (`/dev/hidraw*`) interface.
//!
//! ## Features
//!
//! *   Device discovery (`enumerate`): scans `/dev` for hidraw nodes and
//!     binds the first controller matching the DualShock 3 vendor/product
//!     identity (0x054c:0x0268). At most one session is bound.
//! *   Drain-to-latest polling (`update_state`): the device queues input
//!     reports between polls, so the session reads to exhaustion and keeps
//!     only the most recent report, trading frame loss for zero input lag.
//! *   Typed control extraction (`input`): pressure bytes (0-255), raw
//!     masked digital flags, and stick axes remapped onto a signed
//!     16-bit-scale range centered at zero.
//! *   Rumble (`rumble`, `test_force`): binary small motor, variable-force
//!     large motor, gated behind a per-pad [`FeedbackConfig`].
//! *   Player LED selection on the output report ([`RumbleReport::set_player_led`]).
//! *   Sticky health flag (`healthy`): any I/O or protocol anomaly marks the
//!     session; the host polls the flag and rediscovers when it trips.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use dualshock3_hid::{enumerate, Control, FeedbackConfig, GamePad, Motor};
//!
//! fn main() -> dualshock3_hid::Result<()> {
//!     env_logger::init();
//!
//!     let Some(mut pad) = enumerate(FeedbackConfig::default())? else {
//!         eprintln!("no DualShock 3 connected");
//!         return Ok(());
//!     };
//!     println!("bound: {}", pad.name());
//!
//!     loop {
//!         pad.update_state();
//!         if !pad.healthy() {
//!             eprintln!("device went away");
//!             break;
//!         }
//!         if pad.input(Control::Cross) > 0 {
//!             pad.rumble(Motor::Large, 0);
//!         }
//!         std::thread::sleep(std::time::Duration::from_millis(16));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Hardware Setup Notes
//!
//! *   **Linux udev Rules:** hidraw nodes are root-only by default; nodes the
//!     user cannot open are silently skipped during discovery. Grant access
//!     with `/etc/udev/rules.d/99-dualshock3.rules`:
//!     ```udev
//!     SUBSYSTEM=="hidraw", ATTRS{idVendor}=="054c", ATTRS{idProduct}=="0268", MODE="0666", GROUP="plugdev"
//!     ```
//!     Reload: `sudo udevadm control --reload-rules && sudo udevadm trigger`
//! *   **Rumble quirk:** the large motor produces no perceptible rumble for
//!     force bytes much below 128. That is the hardware, not a bug.
//! *   This crate is Linux-only; it talks to the hidraw character-device
//!     interface directly.

mod consts;
mod device;
mod error;
pub mod hidraw;
pub mod report;

pub use consts::{DUALSHOCK3_PID, SONY_VID};
pub use device::{
    enumerate, DualShock3, FeedbackConfig, GamePad, DEFAULT_TEST_FORCE, NUM_PADS,
};
pub use error::{Error, Result};
pub use hidraw::{HidIdentity, HidNode, HidrawNode};
pub use report::{axis_to_wide, Control, InputReport, Motor, RumbleReport};
