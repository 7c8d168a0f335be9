//! Color type for monochrome e-paper displays
//!
//! This module defines the [`Color`] enum for the black and white pixels
//! supported by monochrome panels driven by the SSD1680 controller.
//!
//! ## Color Representation
//!
//! The display RAM is bit-packed, one bit per pixel:
//!
//! | Color | RAM bit |
//! |-------|---------|
//! | Black | 0       |
//! | White | 1       |
//!
//! ## Example
//!
//! ```
//! use ssd1680::Color;
//!
//! // Byte values used when clearing the framebuffer
//! assert_eq!(Color::Black.fill_byte(), 0x00);
//! assert_eq!(Color::White.fill_byte(), 0xFF);
//! ```

/// Colors supported by monochrome SSD1680 panels
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels
    White,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}

impl Color {
    /// Get the byte value that fills a framebuffer with this color
    ///
    /// - Black: 0x00 (all bits 0)
    /// - White: 0xFF (all bits 1)
    ///
    /// ## Example
    ///
    /// ```
    /// use ssd1680::Color;
    ///
    /// assert_eq!(Color::Black.fill_byte(), 0x00);
    /// assert_eq!(Color::White.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }
}
