//! Polls a connected DualShock 3 and prints a few control values.
//!
//! Run with `RUST_LOG=debug cargo run --example poll` to watch discovery.

use dualshock3_hid::{enumerate, Control, FeedbackConfig, GamePad};
use std::thread;
use std::time::Duration;

fn main() -> dualshock3_hid::Result<()> {
    env_logger::init();

    let Some(mut pad) = enumerate(FeedbackConfig::default())? else {
        eprintln!("No DualShock 3 found. Is it plugged in, and is the hidraw node readable?");
        return Ok(());
    };
    println!("Bound: {} (id {})", pad.name(), pad.unique_identifier());

    loop {
        pad.update_state();
        if !pad.healthy() {
            eprintln!("Session unhealthy, giving up. Replug the controller and rerun.");
            return Ok(());
        }
        println!(
            "cross={:3} square={:3} l2={:3} left-stick x={:6} y={:6}",
            pad.input(Control::Cross),
            pad.input(Control::Square),
            pad.input(Control::L2),
            pad.input(Control::LeftStickRight),
            pad.input(Control::LeftStickUp),
        );
        thread::sleep(Duration::from_millis(100));
    }
}
