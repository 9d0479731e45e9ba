//! Integration tests for the public protocol surface: report layout,
//! axis transform, rumble encoding, and feedback configuration.
//!
//! These run without hardware; everything here is pure byte manipulation.

use approx::assert_relative_eq;
use dualshock3_hid::{axis_to_wide, Control, FeedbackConfig, InputReport, Motor, RumbleReport};

const INPUT_REPORT_LEN: usize = 49;
const OUTPUT_REPORT_LEN: usize = 36;

#[test]
fn axis_transform_covers_full_range() {
    // table of (raw byte, expected wide value)
    let cases = [
        (0u8, -32512),
        (63, -16384),
        (127, 0),
        (128, 256),
        (191, 16384),
        (255, 32768),
    ];
    for (raw, expected) in cases {
        assert_eq!(
            axis_to_wide(raw),
            expected,
            "raw byte {raw}: expected {expected}"
        );
    }
}

#[test]
fn input_report_maps_documented_offsets() {
    let mut bytes = [0u8; INPUT_REPORT_LEN];
    bytes[0x02] = 0b0000_0101; // select + r3
    bytes[0x06] = 255; // left stick x
    bytes[0x0e] = 77; // d-pad up pressure
    bytes[0x18] = 180; // cross pressure
    let report = InputReport::from_bytes(bytes);

    assert_eq!(report.value(Control::Select), 1);
    assert_eq!(report.value(Control::L3), 0);
    assert_eq!(report.value(Control::R3), 4);
    assert_eq!(report.value(Control::LeftStickRight), 32768);
    assert_eq!(report.value(Control::Up), 77);
    assert_eq!(report.value(Control::Cross), 180);
}

#[test]
fn rumble_report_is_exactly_one_output_report() {
    let report = RumbleReport::for_motor(Motor::Large, 0.9);
    assert_eq!(report.as_bytes().len(), OUTPUT_REPORT_LEN);
}

#[test]
fn exactly_one_motor_subrange_is_populated() {
    let small = RumbleReport::for_motor(Motor::Small, 1.0);
    assert_ne!(small.as_bytes()[2], 0); // small duration set
    assert_eq!(small.as_bytes()[4], 0); // large duration untouched
    assert_eq!(small.as_bytes()[5], 0);

    let large = RumbleReport::for_motor(Motor::Large, 1.0);
    assert_eq!(large.as_bytes()[2], 0); // small duration untouched
    assert_eq!(large.as_bytes()[3], 0);
    assert_ne!(large.as_bytes()[4], 0); // large duration set
}

#[test]
fn feedback_intensity_scales_down_by_128() {
    let feedback = FeedbackConfig {
        intensity: 64,
        ..FeedbackConfig::default()
    };
    assert_relative_eq!(feedback.strength(), 0.5);

    let full = FeedbackConfig::default();
    assert_relative_eq!(full.strength(), 1.0);
}

#[test]
fn feedback_unknown_pad_slot_reads_disabled() {
    let feedback = FeedbackConfig::default();
    assert!(feedback.enabled(0));
    assert!(!feedback.enabled(99));
}
