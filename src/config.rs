//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Logical display dimensions
///
/// Width and height as the application reasons about the panel. The
/// controller's RAM addressing is derived from these via the configured
/// [`Rotation`]; see [`Config::ram_dimensions`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (the long edge on the 2.9" panel: 296)
    pub width: u16,
    /// Height in pixels (the short edge on the 2.9" panel: 128)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_GATE_OUTPUTS (296)
    /// - height == 0 or height > MAX_SOURCE_OUTPUTS (176)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_SOURCE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// RAM-space dimensions derived from logical dimensions and rotation
///
/// The panel is typically mounted rotated relative to the controller's
/// native scan direction, so RAM width/height need not match the logical
/// width/height. For the fixed 90-degree mounting of the 2.9" panel,
/// `ram_width == logical height` and `ram_height == logical width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RamDimensions {
    /// RAM width in pixels (source outputs; must be a multiple of 8)
    pub width: u16,
    /// RAM height in pixels (gate outputs)
    pub height: u16,
}

impl RamDimensions {
    /// Bytes per RAM row (`width / 8`, MSB-first bit packing)
    pub fn row_stride(&self) -> usize {
        self.width as usize / 8
    }

    /// Required framebuffer size in bytes (`row_stride * height`)
    pub fn buffer_size(&self) -> usize {
        self.row_stride() * self.height as usize
    }
}

/// Display rotation: how the panel is mounted relative to controller RAM
///
/// The default is [`Rotation::Rotate90`], matching the common 2.9" module
/// wiring where the panel's long edge runs along the gate lines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// Panel mounted in the controller's native orientation
    Rotate0,
    /// Rotate 90 degrees clockwise (long edge horizontal)
    #[default]
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Whether this rotation swaps the logical axes in RAM space
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Display configuration
///
/// Holds all configurable parameters for the SSD1680 controller.
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Logical display dimensions
    pub dimensions: Dimensions,
    /// Panel mounting rotation
    pub rotation: Rotation,
    /// Gate scanning direction byte (GD/SM/TB bits)
    pub gate_scanning: u8,
    /// Data entry mode byte
    pub data_entry_mode: u8,
    /// Border waveform setting
    pub border_waveform: u8,
    /// Temperature sensor control (0x80 = internal)
    pub temp_sensor_control: u8,
    /// Display Update Control 1 bytes (RAM option, source output mode)
    pub display_update_ctrl1: [u8; 2],
    /// Display Update Control 2 value used for activation
    pub display_update_ctrl2: u8,
}

impl Config {
    /// Get the RAM-space dimensions for this configuration
    pub fn ram_dimensions(&self) -> RamDimensions {
        if self.rotation.swaps_axes() {
            RamDimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            }
        } else {
            RamDimensions {
                width: self.dimensions.width,
                height: self.dimensions.height,
            }
        }
    }

    /// Required framebuffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.ram_dimensions().buffer_size()
    }
}

/// Builder for constructing display configuration
///
/// Defaults reproduce the 2.9" monochrome module: 90-degree mounting,
/// X/Y auto-increment addressing, internal temperature sensor, and the
/// full-refresh activation sequence.
///
/// # Example
///
/// ```
/// use ssd1680::{Builder, Dimensions, Rotation};
///
/// let dims = Dimensions::new(296, 128).unwrap();
/// let config = Builder::new().dimensions(dims).build().unwrap();
/// assert_eq!(config.ram_dimensions().width, 128);
/// assert_eq!(config.buffer_size(), 4736);
/// ```
#[must_use]
pub struct Builder {
    /// Logical display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Panel mounting rotation
    rotation: Rotation,
    /// Gate scanning direction byte
    gate_scanning: u8,
    /// Data entry mode byte
    data_entry_mode: u8,
    /// Border waveform setting
    border_waveform: u8,
    /// Temperature sensor control
    temp_sensor_control: u8,
    /// Display Update Control 1 bytes
    display_update_ctrl1: [u8; 2],
    /// Display Update Control 2 value
    display_update_ctrl2: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate90,
            // GD = 0, SM = 0, TB = 0
            gate_scanning: 0x00,
            // X increment, Y increment
            data_entry_mode: 0x03,
            border_waveform: 0x05,
            // Internal temperature sensor
            temp_sensor_control: 0x80,
            display_update_ctrl1: [0x00, 0x80],
            display_update_ctrl2: crate::command::CTRL2_FULL_REFRESH,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logical display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set panel mounting rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set gate scanning direction
    pub fn gate_scanning(mut self, value: u8) -> Self {
        self.gate_scanning = value;
        self
    }

    /// Set data entry mode
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Set border waveform
    pub fn border_waveform(mut self, value: u8) -> Self {
        self.border_waveform = value;
        self
    }

    /// Set temperature sensor control
    pub fn temp_sensor_control(mut self, value: u8) -> Self {
        self.temp_sensor_control = value;
        self
    }

    /// Set Display Update Control 1 bytes
    pub fn display_update_ctrl1(mut self, value: [u8; 2]) -> Self {
        self.display_update_ctrl1 = value;
        self
    }

    /// Set the Display Update Control 2 activation value
    pub fn display_update_ctrl2(mut self, value: u8) -> Self {
        self.display_update_ctrl2 = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidDimensions` if the RAM row width implied by
    /// the rotation is not byte-aligned (RAM writes are byte-packed).
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let config = Config {
            dimensions,
            rotation: self.rotation,
            gate_scanning: self.gate_scanning,
            data_entry_mode: self.data_entry_mode,
            border_waveform: self.border_waveform,
            temp_sensor_control: self.temp_sensor_control,
            display_update_ctrl1: self.display_update_ctrl1,
            display_update_ctrl2: self.display_update_ctrl2,
        };
        if config.ram_dimensions().width % 8 != 0 {
            return Err(BuilderError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        Ok(config)
    }
}
