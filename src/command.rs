//! SSD1680 command definitions
//!
//! This module defines the command bytes used to control the SSD1680
//! e-paper display controller. Commands are sent over SPI with the DC pin
//! low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send data bytes (if any)
//! 6. Deassert CS

// System control commands

/// Soft reset command (0x12)
///
/// Resets the controller to default state. Must wait for BUSY low after issuing.
pub const SOFT_RESET: u8 = 0x12;

/// Driver output control command (0x01)
///
/// Sets the number of gate outputs (rows) and scanning direction.
/// Requires 3 bytes: [rows-1 (LSB), rows-1 (MSB), scanning mode]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Border waveform control command (0x3C)
///
/// Controls the border color and transition behavior.
/// Requires 1 byte of data.
pub const BORDER_WAVEFORM: u8 = 0x3C;

/// Temperature sensor control command (0x1A)
///
/// Selects the temperature sensor source for the refresh waveform.
/// Requires 1 byte: 0x80 = internal sensor.
pub const TEMP_SENSOR_CONTROL: u8 = 0x1A;

// RAM and data commands

/// Data entry mode command (0x11)
///
/// Controls the address counter auto-increment direction.
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE: u8 = 0x11;

/// Set RAM X address range command (0x44)
///
/// Sets the X (source) address range for RAM access. X addresses are
/// byte-granular on the SSD1680: one address covers 8 pixels.
/// Requires 2 bytes: [start, end]
pub const SET_RAM_X_RANGE: u8 = 0x44;

/// Set RAM Y address range command (0x45)
///
/// Sets the Y (gate) address range for RAM access.
/// Requires 4 bytes: [start_LSB, start_MSB, end_LSB, end_MSB]
pub const SET_RAM_Y_RANGE: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
///
/// Sets the X address counter to a specific byte address.
/// Requires 1 byte.
pub const SET_RAM_X_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// Sets the Y address counter to a specific gate line.
/// Requires 2 bytes: [address_LSB, address_MSB]
pub const SET_RAM_Y_COUNTER: u8 = 0x4F;

/// Write to BW RAM command (0x24)
///
/// Writes black/white pixel data starting at the current address counters.
/// Bit=0: Black, Bit=1: White.
/// Requires pixel data bytes (width * height / 8).
pub const WRITE_RAM_BW: u8 = 0x24;

// Display update commands

/// Display update control 1 command (0x21)
///
/// Controls which RAM sources are used for the display update.
/// Requires 2 bytes: [RAM option, source output mode]
pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;

/// Display update control 2 command (0x22)
///
/// Selects the display update sequence (power on, load LUT, refresh, power off).
/// Requires 1 byte; see [`CTRL2_FULL_REFRESH`].
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;

/// Master activation command (0x20)
///
/// Triggers the update sequence selected by [`DISPLAY_UPDATE_CTRL2`].
/// BUSY goes high for the duration of the physical refresh; RAM must not
/// be written while BUSY is asserted.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Display update control 2 value for a full refresh
///
/// Enables clock and analog, loads temperature and the OTP LUT, refreshes
/// the panel, then powers the analog and clock back down.
pub const CTRL2_FULL_REFRESH: u8 = 0xF7;

// Power management commands

/// Deep sleep command (0x10)
///
/// Enters ultra-low power mode. Only a hardware reset can wake the controller.
/// Requires 1 byte mode value; see [`crate::DeepSleepMode`].
pub const DEEP_SLEEP: u8 = 0x10;
