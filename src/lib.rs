//! SSD1680 E-Paper Display Driver
//!
//! A driver for the SSD1680 e-paper display controller, as found on the
//! Waveshare 2.9" 296x128 monochrome module.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Bit-packed framebuffer in the panel's native RAM orientation, with a
//!   configurable rotation transform (the 2.9" module mounts the panel
//!   rotated 90 degrees, which is the default)
//! - Bitmap-font text rendering from external glyph tables
//! - Bounded busy-wait: a stuck BUSY pin degrades to a logged warning
//!   after ~4s instead of hanging the caller
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1680::{Builder, Color, Dimensions, Display, GraphicDisplay, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let dims = match Dimensions::new(296, 128) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let buffer_size = config.buffer_size();
//!
//! let display = Display::new(interface, config);
//! let mut epd = GraphicDisplay::new(display, vec![0u8; buffer_size]);
//!
//! let _ = epd.initialize(&mut delay);
//! epd.clear(Color::White);
//! let _ = epd.update(&mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Color type for monochrome panels
pub mod color;
/// SSD1680 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap font glyph source
pub mod font;
/// Bit-packed RAM-orientation framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

/// Drawing surface over the display driver
pub mod graphics;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, RamDimensions, Rotation};
pub use display::{DeepSleepMode, Display};
pub use error::{BuilderError, Error, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};
pub use font::Font;
pub use framebuffer::Framebuffer;
pub use graphics::GraphicDisplay;
pub use interface::{
    BUSY_POLL_INTERVAL_MS, BusyWait, DEFAULT_BUSY_TIMEOUT_MS, DisplayInterface, Interface,
    InterfaceError,
};
