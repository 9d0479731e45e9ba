//! Protocol constants: device identity, node discovery, and report layouts.
//!
//! Byte offsets come from prior reverse engineering of the DualShock 3 USB
//! reports; they are fixed by the hardware, not derived at runtime.

/// Sony Corporation vendor ID.
pub const SONY_VID: u16 = 0x054c;
/// Product ID of the DualShock 3 / Sixaxis controller.
pub const DUALSHOCK3_PID: u16 = 0x0268;

/// Directory scanned for raw HID character devices.
pub const DEV_DIR: &str = "/dev";
/// Name prefix identifying raw HID nodes within [`DEV_DIR`].
pub const HIDRAW_PREFIX: &str = "hidraw";

/// Analog sticks report this value when centered.
pub const AXIS_CENTER: u8 = 127;

// --- Input Report (device -> host) ---
pub mod input {
    /// Full length of one input report in bytes.
    pub const REPORT_LEN: usize = 49;

    /// Byte holding the digital button flags below.
    pub const DIGITALS: usize = 0x02;
    pub const DIGITAL_SELECT: u8 = 1;
    pub const DIGITAL_L3: u8 = 1 << 1;
    pub const DIGITAL_R3: u8 = 1 << 2;
    pub const DIGITAL_START: u8 = 1 << 3;

    // Analog stick positions, one byte per axis, centered at 127.
    pub const STICK_LEFT_X: usize = 0x06;
    pub const STICK_LEFT_Y: usize = 0x07;
    pub const STICK_RIGHT_X: usize = 0x08;
    pub const STICK_RIGHT_Y: usize = 0x09;

    // D-pad pressure values, 0-255.
    pub const DPAD_UP: usize = 0x0e;
    pub const DPAD_RIGHT: usize = 0x0f;
    pub const DPAD_DOWN: usize = 0x10;
    pub const DPAD_LEFT: usize = 0x11;

    // Shoulder and face button pressure values, 0-255.
    pub const L2: usize = 0x12;
    pub const R2: usize = 0x13;
    pub const L1: usize = 0x14;
    pub const R1: usize = 0x15;
    pub const TRIANGLE: usize = 0x16;
    pub const CIRCLE: usize = 0x17;
    pub const CROSS: usize = 0x18;
    pub const SQUARE: usize = 0x19;
}

// --- Output Report (host -> device) ---
pub mod output {
    /// Full length of one output report in bytes.
    pub const REPORT_LEN: usize = 0x24;

    pub const SMALL_MOTOR_DURATION: usize = 0x2;
    pub const SMALL_MOTOR_ON: usize = 0x3;
    pub const LARGE_MOTOR_DURATION: usize = 0x4;
    pub const LARGE_MOTOR_FORCE: usize = 0x5;

    /// Bitmask selecting which of the four status LEDs are lit
    /// (bit 1 = player 1 .. bit 4 = player 4).
    pub const LED_MASK: usize = 0xa;

    /// Duration byte written for either motor when rumble is requested.
    pub const RUMBLE_DURATION: u8 = 0x10;

    /// Baseline output report. Motor fields are inactive; the LED block
    /// lights the player 1 LED with the stock timing configuration.
    pub const TEMPLATE: [u8; REPORT_LEN] = [
        // report id, doubled: hidraw consumes the first byte
        0x01, 0x01,
        // small motor: duration, on flag
        0x00, 0x00,
        // large motor: duration, force
        0x00, 0x00,
        // padding
        0x00, 0x00, 0x00, 0x00,
        // led mask, then per-led timing blocks
        0x02,
        0xff, 0x27, 0x10, 0x00, 0x32,
        0xff, 0x27, 0x10, 0x00, 0x32,
        0xff, 0x27, 0x10, 0x00, 0x32,
        0xff, 0x27, 0x10, 0x00, 0x32,
        0x00, 0x00, 0x00, 0x00, 0x00,
    ];
}
