//! Fixed-layout report parsing and encoding, independent of any I/O.
//!
//! [`InputReport`] decodes the 49-byte device-to-host report into typed
//! control values; [`RumbleReport`] builds the 36-byte host-to-device report
//! that drives the rumble motors and status LEDs.

use crate::consts::{self, input, output};

/// Logical controls the host can query.
///
/// Stick axes appear once per logical direction even though opposite
/// directions share a report byte; the readings are identical and the host
/// interprets the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Select,
    L3,
    R3,
    Start,
    Up,
    Right,
    Down,
    Left,
    L2,
    R2,
    L1,
    R1,
    Triangle,
    Circle,
    Cross,
    Square,
    LeftStickUp,
    LeftStickRight,
    LeftStickDown,
    LeftStickLeft,
    RightStickUp,
    RightStickRight,
    RightStickDown,
    RightStickLeft,
    /// PS/guide button. Not decoded from this report layout.
    Ps,
}

/// The two rumble motors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motor {
    /// High-frequency motor; binary on/off only.
    Small,
    /// Low-frequency motor with a variable force byte.
    Large,
}

/// Remaps a raw stick byte (0-255, centered at 127) onto a signed
/// 16-bit-scale range centered at zero.
pub fn axis_to_wide(raw: u8) -> i32 {
    (i32::from(raw) - i32::from(consts::AXIS_CENTER)) * 256
}

/// One complete input report as last read from the device.
#[derive(Debug, Clone, Copy)]
pub struct InputReport {
    bytes: [u8; input::REPORT_LEN],
}

impl Default for InputReport {
    fn default() -> Self {
        Self {
            bytes: [0; input::REPORT_LEN],
        }
    }
}

impl InputReport {
    /// Wraps a raw 49-byte report.
    pub fn from_bytes(bytes: [u8; input::REPORT_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; input::REPORT_LEN] {
        &self.bytes
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; input::REPORT_LEN] {
        &mut self.bytes
    }

    /// Extracts the value of one logical control.
    ///
    /// Pressure bytes pass through unchanged (0-255). Digital flags return
    /// the raw masked bit value, not a normalized 0/1. Stick axes go through
    /// [`axis_to_wide`]. Controls this layout does not carry read as 0.
    pub fn value(&self, control: Control) -> i32 {
        match control {
            Control::Select => i32::from(self.bytes[input::DIGITALS] & input::DIGITAL_SELECT),
            Control::L3 => i32::from(self.bytes[input::DIGITALS] & input::DIGITAL_L3),
            Control::R3 => i32::from(self.bytes[input::DIGITALS] & input::DIGITAL_R3),
            Control::Start => i32::from(self.bytes[input::DIGITALS] & input::DIGITAL_START),
            Control::Up => i32::from(self.bytes[input::DPAD_UP]),
            Control::Right => i32::from(self.bytes[input::DPAD_RIGHT]),
            Control::Down => i32::from(self.bytes[input::DPAD_DOWN]),
            Control::Left => i32::from(self.bytes[input::DPAD_LEFT]),
            Control::L2 => i32::from(self.bytes[input::L2]),
            Control::R2 => i32::from(self.bytes[input::R2]),
            Control::L1 => i32::from(self.bytes[input::L1]),
            Control::R1 => i32::from(self.bytes[input::R1]),
            Control::Triangle => i32::from(self.bytes[input::TRIANGLE]),
            Control::Circle => i32::from(self.bytes[input::CIRCLE]),
            Control::Cross => i32::from(self.bytes[input::CROSS]),
            Control::Square => i32::from(self.bytes[input::SQUARE]),
            Control::LeftStickUp | Control::LeftStickDown => {
                axis_to_wide(self.bytes[input::STICK_LEFT_Y])
            }
            Control::LeftStickLeft | Control::LeftStickRight => {
                axis_to_wide(self.bytes[input::STICK_LEFT_X])
            }
            Control::RightStickUp | Control::RightStickDown => {
                axis_to_wide(self.bytes[input::STICK_RIGHT_Y])
            }
            Control::RightStickLeft | Control::RightStickRight => {
                axis_to_wide(self.bytes[input::STICK_RIGHT_X])
            }
            Control::Ps => 0,
        }
    }
}

/// One output report, built from the fixed template.
#[derive(Debug, Clone, Copy)]
pub struct RumbleReport {
    bytes: [u8; output::REPORT_LEN],
}

impl Default for RumbleReport {
    fn default() -> Self {
        Self {
            bytes: output::TEMPLATE,
        }
    }
}

impl RumbleReport {
    /// An inactive report: motors off, player 1 LED lit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a rumble command for one motor, leaving the other at its
    /// inactive template value.
    ///
    /// Strength is clamped to `[0, 1]`. The small motor is binary: any
    /// positive strength switches it on. The large motor's force byte is
    /// `strength * 255`, rounded to nearest; the hardware produces no
    /// perceptible rumble for force values much below 128.
    pub fn for_motor(motor: Motor, strength: f32) -> Self {
        let mut report = Self::new();
        match motor {
            Motor::Small => {
                report.bytes[output::SMALL_MOTOR_DURATION] = output::RUMBLE_DURATION;
                report.bytes[output::SMALL_MOTOR_ON] = u8::from(strength > 0.0);
            }
            Motor::Large => {
                report.bytes[output::LARGE_MOTOR_DURATION] = output::RUMBLE_DURATION;
                report.bytes[output::LARGE_MOTOR_FORCE] = force_byte(strength);
            }
        }
        report
    }

    /// Lights the LED for `player` (1-4) instead of the default player 1.
    /// Out-of-range values are clamped into 1-4.
    pub fn set_player_led(&mut self, player: u8) {
        self.bytes[output::LED_MASK] = 1 << player.clamp(1, 4);
    }

    pub fn as_bytes(&self) -> &[u8; output::REPORT_LEN] {
        &self.bytes
    }
}

fn force_byte(strength: f32) -> u8 {
    (strength.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_transform_fixed_points() {
        assert_eq!(axis_to_wide(127), 0);
        assert_eq!(axis_to_wide(0), -32512);
        assert_eq!(axis_to_wide(255), 32768);
    }

    #[test]
    fn axis_transform_is_linear_and_monotonic() {
        for b in 0u8..255 {
            assert_eq!(axis_to_wide(b + 1) - axis_to_wide(b), 256);
            assert!(axis_to_wide(b + 1) > axis_to_wide(b));
        }
    }

    #[test]
    fn pressure_bytes_pass_through_unchanged() {
        let mut bytes = [0u8; input::REPORT_LEN];
        bytes[input::L2] = 12;
        bytes[input::R2] = 34;
        bytes[input::L1] = 56;
        bytes[input::R1] = 78;
        bytes[input::TRIANGLE] = 90;
        bytes[input::CIRCLE] = 123;
        bytes[input::CROSS] = 255;
        bytes[input::SQUARE] = 1;
        bytes[input::DPAD_UP] = 200;
        bytes[input::DPAD_RIGHT] = 201;
        bytes[input::DPAD_DOWN] = 202;
        bytes[input::DPAD_LEFT] = 203;
        let report = InputReport::from_bytes(bytes);
        assert_eq!(report.value(Control::L2), 12);
        assert_eq!(report.value(Control::R2), 34);
        assert_eq!(report.value(Control::L1), 56);
        assert_eq!(report.value(Control::R1), 78);
        assert_eq!(report.value(Control::Triangle), 90);
        assert_eq!(report.value(Control::Circle), 123);
        assert_eq!(report.value(Control::Cross), 255);
        assert_eq!(report.value(Control::Square), 1);
        assert_eq!(report.value(Control::Up), 200);
        assert_eq!(report.value(Control::Right), 201);
        assert_eq!(report.value(Control::Down), 202);
        assert_eq!(report.value(Control::Left), 203);
    }

    #[test]
    fn digital_flags_keep_raw_masked_value() {
        let mut bytes = [0u8; input::REPORT_LEN];
        bytes[input::DIGITALS] = input::DIGITAL_L3 | input::DIGITAL_START;
        let report = InputReport::from_bytes(bytes);
        assert_eq!(report.value(Control::Select), 0);
        assert_eq!(report.value(Control::L3), i32::from(input::DIGITAL_L3));
        assert_eq!(report.value(Control::R3), 0);
        assert_eq!(report.value(Control::Start), i32::from(input::DIGITAL_START));
    }

    #[test]
    fn opposite_stick_directions_share_a_byte() {
        let mut bytes = [0u8; input::REPORT_LEN];
        bytes[input::STICK_LEFT_Y] = 200;
        bytes[input::STICK_RIGHT_X] = 50;
        let report = InputReport::from_bytes(bytes);
        assert_eq!(
            report.value(Control::LeftStickUp),
            report.value(Control::LeftStickDown)
        );
        assert_eq!(report.value(Control::LeftStickUp), axis_to_wide(200));
        assert_eq!(
            report.value(Control::RightStickLeft),
            report.value(Control::RightStickRight)
        );
        assert_eq!(report.value(Control::RightStickLeft), axis_to_wide(50));
    }

    #[test]
    fn undecoded_control_reads_zero() {
        let report = InputReport::from_bytes([0xff; input::REPORT_LEN]);
        assert_eq!(report.value(Control::Ps), 0);
    }

    #[test]
    fn template_has_doubled_report_id_and_leds() {
        let report = RumbleReport::new();
        let bytes = report.as_bytes();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[1], 0x01);
        assert_eq!(bytes[output::LED_MASK], 0x02);
        // first led timing block
        assert_eq!(&bytes[11..16], &[0xff, 0x27, 0x10, 0x00, 0x32]);
        // motors inactive
        assert_eq!(bytes[output::SMALL_MOTOR_DURATION], 0x00);
        assert_eq!(bytes[output::LARGE_MOTOR_DURATION], 0x00);
    }

    #[test]
    fn small_motor_is_binary() {
        let off = RumbleReport::for_motor(Motor::Small, 0.0);
        assert_eq!(off.as_bytes()[output::SMALL_MOTOR_ON], 0x00);
        assert_eq!(
            off.as_bytes()[output::SMALL_MOTOR_DURATION],
            output::RUMBLE_DURATION
        );

        let on = RumbleReport::for_motor(Motor::Small, 0.4);
        assert_eq!(on.as_bytes()[output::SMALL_MOTOR_ON], 0x01);
        assert_eq!(
            on.as_bytes()[output::SMALL_MOTOR_DURATION],
            output::RUMBLE_DURATION
        );
        // large motor untouched
        assert_eq!(on.as_bytes()[output::LARGE_MOTOR_DURATION], 0x00);
        assert_eq!(on.as_bytes()[output::LARGE_MOTOR_FORCE], 0x00);
    }

    #[test]
    fn large_motor_force_rounds_to_nearest() {
        let full = RumbleReport::for_motor(Motor::Large, 1.0);
        assert_eq!(full.as_bytes()[output::LARGE_MOTOR_FORCE], 255);
        assert_eq!(
            full.as_bytes()[output::LARGE_MOTOR_DURATION],
            output::RUMBLE_DURATION
        );

        let half = RumbleReport::for_motor(Motor::Large, 0.5);
        assert_eq!(half.as_bytes()[output::LARGE_MOTOR_FORCE], 128);
        // small motor untouched
        assert_eq!(half.as_bytes()[output::SMALL_MOTOR_DURATION], 0x00);
    }

    #[test]
    fn force_byte_is_clamped() {
        assert_eq!(force_byte(1.5), 255);
        assert_eq!(force_byte(-0.3), 0);
    }

    #[test]
    fn player_led_selection() {
        let mut report = RumbleReport::new();
        report.set_player_led(3);
        assert_eq!(report.as_bytes()[output::LED_MASK], 0b1000);
        report.set_player_led(9);
        assert_eq!(report.as_bytes()[output::LED_MASK], 0b10000);
    }
}
