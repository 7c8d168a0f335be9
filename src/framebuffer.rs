//! Bit-packed framebuffer in the controller's RAM orientation
//!
//! The framebuffer mirrors panel RAM byte for byte: `ram_width / 8` bytes
//! per RAM row, `ram_height` rows, MSB-first within each byte. Pixel
//! `(ram_x, ram_y)` lives at byte `ram_y * stride + ram_x / 8`, mask
//! `0x80 >> (ram_x % 8)`. Bit value 1 is white, 0 is black.
//!
//! Callers never address RAM pixels directly; drawing goes through the
//! rotation transform in [`GraphicDisplay`](crate::graphics::GraphicDisplay),
//! which is what keeps every write inside RAM bounds. The only public
//! mutations here are whole-buffer fills and the deterministic test
//! patterns used to verify panel wiring and orientation.

use crate::color::Color;
use crate::config::RamDimensions;

/// RAM row period of the stripe test pattern
const STRIPE_PERIOD: u16 = 16;

/// RAM row period of one checkerboard tile
const CHECKER_PERIOD: u16 = 8;

/// Fixed-size monochrome canvas over a caller-provided buffer
///
/// The buffer is allocated once by the caller (static array, heap vector,
/// anything `AsRef<[u8]> + AsMut<[u8]>`) and validated against the RAM
/// geometry at construction. It is mutated in place by every drawing and
/// clear operation and never resized.
pub struct Framebuffer<B> {
    /// Backing storage, at least `ram.buffer_size()` bytes
    buffer: B,
    /// RAM-space geometry this buffer is laid out for
    ram: RamDimensions,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a framebuffer over `buffer` for the given RAM geometry
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than `ram.buffer_size()`. Use
    /// [`GraphicDisplay::try_new`](crate::graphics::GraphicDisplay::try_new)
    /// for a fallible construction path.
    pub fn new(buffer: B, ram: RamDimensions) -> Self {
        let required = ram.buffer_size();
        assert!(
            buffer.as_ref().len() >= required,
            "framebuffer too small: required {} bytes, got {}",
            required,
            buffer.as_ref().len()
        );
        Self { buffer, ram }
    }

    /// RAM geometry this framebuffer is laid out for
    pub fn ram(&self) -> RamDimensions {
        self.ram
    }

    /// The RAM payload: exactly the bytes streamed to the controller
    pub fn bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.ram.buffer_size()]
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        let size = self.ram.buffer_size();
        &mut self.buffer.as_mut()[..size]
    }

    /// Set every byte to `fill`
    ///
    /// `0xFF` clears the canvas to white, `0x00` to black.
    pub fn clear(&mut self, fill: u8) {
        for byte in self.bytes_mut() {
            *byte = fill;
        }
    }

    /// Horizontal stripe test pattern
    ///
    /// White background with an all-black RAM row every 16 rows. On a
    /// correctly wired 90-degree mounted panel these appear as thin
    /// vertical lines across the logical canvas.
    pub fn fill_stripes(&mut self) {
        self.clear(0xFF);
        let stride = self.ram.row_stride();
        let height = self.ram.height;
        let bytes = self.bytes_mut();
        for row in (0..height).step_by(STRIPE_PERIOD as usize) {
            let start = row as usize * stride;
            bytes[start..start + stride].fill(0x00);
        }
    }

    /// Two-tone checkerboard test pattern
    ///
    /// Byte at `(ram_row, byte_col)` is `0xAA` when
    /// `(ram_row / 8 + byte_col) % 2 == 0`, else `0x55`, giving 8x8 pixel
    /// tiles. Any orientation or byte-order mistake shows up as smeared or
    /// offset tiles.
    pub fn fill_checkerboard(&mut self) {
        let stride = self.ram.row_stride();
        let height = self.ram.height;
        let bytes = self.bytes_mut();
        for row in 0..height as usize {
            for col in 0..stride {
                bytes[row * stride + col] = if (row / CHECKER_PERIOD as usize + col) % 2 == 0 {
                    0xAA
                } else {
                    0x55
                };
            }
        }
    }

    /// Write one RAM pixel
    ///
    /// Black clears the bit, white sets it. Out-of-range coordinates are
    /// ignored; the rotation transform already guarantees in-range values
    /// for valid logical input, so this check is a backstop only.
    pub(crate) fn write_ram_pixel(&mut self, ram_x: u32, ram_y: u32, color: Color) {
        if ram_x >= u32::from(self.ram.width) || ram_y >= u32::from(self.ram.height) {
            return;
        }
        let stride = self.ram.row_stride();
        let index = ram_y as usize * stride + ram_x as usize / 8;
        let mask = 0x80 >> (ram_x % 8);
        match color {
            Color::Black => self.buffer.as_mut()[index] &= !mask,
            Color::White => self.buffer.as_mut()[index] |= mask,
        }
    }
}
