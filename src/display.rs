//! Core display operations
//!
//! [`Display`] owns the hardware interface and drives the SSD1680 through
//! its reset / init / update / deep-sleep sequence. All methods take
//! `&mut self`: the protocol assumes exactly one caller at a time, and a
//! refresh blocks in the busy-wait until the panel releases (or the ~4s
//! timeout elapses, which is logged and ignored).

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::command::{
    BORDER_WAVEFORM, DATA_ENTRY_MODE, DEEP_SLEEP, DISPLAY_UPDATE_CTRL1, DISPLAY_UPDATE_CTRL2,
    DRIVER_OUTPUT_CONTROL, MASTER_ACTIVATION, SET_RAM_X_COUNTER, SET_RAM_X_RANGE,
    SET_RAM_Y_COUNTER, SET_RAM_Y_RANGE, SOFT_RESET, TEMP_SENSOR_CONTROL, WRITE_RAM_BW,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::{BusyWait, DisplayInterface};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Deep sleep mode configuration
///
/// Controls RAM preservation behavior when entering deep sleep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum DeepSleepMode {
    /// Normal deep sleep, RAM content is NOT preserved
    Normal = 0x00,
    /// Deep sleep with RAM content preserved
    #[default]
    PreserveRam = 0x01,
    /// Deep sleep with RAM and analog circuit preserved
    PreserveRamAndAnalog = 0x03,
}

/// Core display driver for the SSD1680
///
/// This struct provides the panel protocol operations. For a drawing
/// surface on top of it, use
/// [`GraphicDisplay`](crate::graphics::GraphicDisplay).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Perform hardware reset, software reset, and controller initialization
    ///
    /// Programs the gate count, data entry mode, full-panel RAM window, and
    /// the fixed waveform/sensor/update-control bytes, then zeroes both RAM
    /// address counters. Busy timeouts during the sequence are logged and
    /// the init proceeds; the panel usually recovers on the next refresh.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let ram = self.config.ram_dimensions();

        self.interface.reset(delay);
        self.busy_wait(delay, "reset")?;

        self.send_command(SOFT_RESET)?;
        self.busy_wait(delay, "soft reset")?;

        // Gate count follows the RAM height: the panel is scanned in its
        // native orientation regardless of how it is mounted.
        let gates = ram.height - 1;
        self.send_command(DRIVER_OUTPUT_CONTROL)?;
        self.send_data(&[(gates & 0xFF) as u8, (gates >> 8) as u8, self.config.gate_scanning])?;

        self.send_command(DATA_ENTRY_MODE)?;
        self.send_data(&[self.config.data_entry_mode])?;

        // RAM X window, byte-granular: 0 ..= width/8 - 1
        self.send_command(SET_RAM_X_RANGE)?;
        self.send_data(&[0x00, (ram.row_stride() - 1) as u8])?;

        // RAM Y window: 0 ..= height - 1, little-endian bounds
        self.send_command(SET_RAM_Y_RANGE)?;
        self.send_data(&[0x00, 0x00, (gates & 0xFF) as u8, (gates >> 8) as u8])?;

        self.send_command(BORDER_WAVEFORM)?;
        self.send_data(&[self.config.border_waveform])?;

        self.send_command(TEMP_SENSOR_CONTROL)?;
        self.send_data(&[self.config.temp_sensor_control])?;

        self.send_command(DISPLAY_UPDATE_CTRL1)?;
        let display_update_ctrl1 = self.config.display_update_ctrl1;
        self.send_data(&display_update_ctrl1)?;

        self.reset_ram_counters()?;
        self.busy_wait(delay, "init")?;

        Ok(())
    }

    /// Push a framebuffer to panel RAM and trigger a full refresh
    ///
    /// Streams `framebuffer` into BW RAM starting at the origin, writes the
    /// activation mode byte, issues master activation, and blocks until the
    /// panel releases BUSY (bounded by the interface timeout). No RAM may
    /// be written while the refresh runs; this method returns only once the
    /// panel is idle again (or the timeout has been logged).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `framebuffer` is shorter than
    /// `config.buffer_size()`, or `Error::Interface` on a bus fault.
    pub fn update<D: DelayNs>(&mut self, framebuffer: &[u8], delay: &mut D) -> DisplayResult<I> {
        let expected = self.config.buffer_size();
        if framebuffer.len() < expected {
            return Err(Error::BufferTooSmall {
                required: expected,
                provided: framebuffer.len(),
            });
        }

        self.reset_ram_counters()?;

        self.send_command(WRITE_RAM_BW)?;
        self.send_data(&framebuffer[..expected])?;

        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_data(&[self.config.display_update_ctrl2])?;

        self.send_command(MASTER_ACTIVATION)?;
        self.busy_wait(delay, "refresh")?;

        Ok(())
    }

    /// Enter deep sleep mode
    ///
    /// Only a hardware reset (via [`initialize`](Self::initialize)) brings
    /// the controller back.
    pub fn deep_sleep(&mut self, mode: DeepSleepMode) -> DisplayResult<I> {
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[mode as u8])?;
        Ok(())
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    /// Zero both RAM address counters (X: one byte, Y: two bytes)
    fn reset_ram_counters(&mut self) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_COUNTER)?;
        self.send_data(&[0x00])?;

        self.send_command(SET_RAM_Y_COUNTER)?;
        self.send_data(&[0x00, 0x00])?;

        Ok(())
    }

    /// Busy-wait with the degrade-and-continue timeout policy
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D, context: &str) -> DisplayResult<I> {
        match self.interface.busy_wait(delay).map_err(Error::Interface)? {
            BusyWait::Released => {}
            BusyWait::TimedOut => warn!("BUSY timeout after {context}, proceeding"),
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
