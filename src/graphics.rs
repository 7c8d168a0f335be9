//! Drawing surface over the display driver
//!
//! [`GraphicDisplay`] pairs a [`Display`] with a [`Framebuffer`] and maps
//! every drawing call from logical panel coordinates through the rotation
//! transform into RAM bit writes. This is the only path that mutates
//! pixels, so all writes land inside RAM bounds by construction.
//!
//! Text rendering blits packed glyph cells from an external [`Font`]
//! table; it is additive-only (unset glyph bits never touch the canvas),
//! so clear the display first if you want a blank background.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use ssd1680::{Builder, Color, Dimensions, Display, Font, GraphicDisplay, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # static FONT_TABLE: [u8; 95 * 24 * 2] = [0; 95 * 24 * 2];
//! # static FONT24: Font = Font { table: &FONT_TABLE, width: 16, height: 24 };
//! let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! let dims = Dimensions::new(296, 128).unwrap();
//! let config = Builder::new().dimensions(dims).build().unwrap();
//! let buffer_size = config.buffer_size();
//!
//! let display = Display::new(interface, config);
//! let mut epd = GraphicDisplay::new(display, vec![0u8; buffer_size]);
//! let mut delay = MockDelay;
//!
//! let _ = epd.initialize(&mut delay);
//! epd.clear(Color::White);
//! epd.draw_text(10, 40, "Hello e-Paper", &FONT24, Color::Black);
//! let _ = epd.update(&mut delay);
//! ```

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

/// Display with an attached framebuffer and logical-coordinate drawing
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Buffer type implementing `AsRef<[u8]> + AsMut<[u8]>`
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// Canvas in the panel's RAM orientation
    framebuffer: Framebuffer<B>,
}

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than `display.config().buffer_size()`.
    pub fn new(display: Display<I>, buffer: B) -> Self {
        let ram = display.config().ram_dimensions();
        Self {
            display,
            framebuffer: Framebuffer::new(buffer, ram),
        }
    }

    /// Fallible version of [`new`](Self::new)
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer cannot hold one full
    /// RAM frame.
    pub fn try_new(display: Display<I>, buffer: B) -> GraphicsNewResult<I, Self> {
        let required = display.config().buffer_size();
        if buffer.as_ref().len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.as_ref().len(),
            });
        }
        Ok(Self::new(display, buffer))
    }

    /// Reset and initialize the panel; see [`Display::initialize`]
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.initialize(delay)
    }

    /// Clear the canvas to a solid color
    pub fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color.fill_byte());
    }

    /// Fill the canvas with the stripe test pattern
    ///
    /// See [`Framebuffer::fill_stripes`].
    pub fn fill_stripes(&mut self) {
        self.framebuffer.fill_stripes();
    }

    /// Fill the canvas with the checkerboard test pattern
    ///
    /// See [`Framebuffer::fill_checkerboard`].
    pub fn fill_checkerboard(&mut self) {
        self.framebuffer.fill_checkerboard();
    }

    /// Draw a string at logical position `(x, y)` (top-left of the first cell)
    ///
    /// Characters advance the cursor by the font's fixed cell width.
    /// Characters without a glyph (outside printable ASCII, or beyond a
    /// truncated table) are logged and skipped without advancing, and the
    /// rest of the string still renders. Glyph pixels falling outside the
    /// logical canvas are clipped.
    ///
    /// Only set glyph bits are written: `Color::Black` clears framebuffer
    /// bits, `Color::White` sets them. The background is left untouched.
    ///
    /// Returns the number of characters that were skipped, so callers can
    /// tell a fully drawn string from a partial one.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, font: &Font, color: Color) -> usize {
        let mut cursor_x = x;
        let mut skipped = 0usize;

        for c in text.chars() {
            let Some(cell) = font.glyph(c) else {
                warn!("no glyph for {c:?}, skipping");
                skipped += 1;
                continue;
            };

            for row in 0..u32::from(font.height) {
                for col in 0..u32::from(font.width) {
                    if font.bit(cell, row, col) {
                        self.set_pixel(cursor_x + col, y + row, color);
                    }
                }
            }

            cursor_x += u32::from(font.width);
        }

        skipped
    }

    /// Set a single logical pixel
    ///
    /// Out-of-canvas coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let dims = self.display.config().dimensions;
        if x >= u32::from(dims.width) || y >= u32::from(dims.height) {
            return;
        }

        let ram = self.framebuffer.ram();
        let rotation = self.display.config().rotation;
        let (ram_x, ram_y) = apply_rotation(x, y, ram, rotation);
        self.framebuffer.write_ram_pixel(ram_x, ram_y, color);
    }

    /// Push the framebuffer to the panel and refresh; see [`Display::update`]
    pub fn update<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.update(self.framebuffer.bytes(), delay)
    }

    /// Access the canvas
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Useful for low-level operations such as
    /// [`deep_sleep`](Display::deep_sleep).
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }
}

#[cfg(feature = "graphics")]
impl<I, B> embedded_graphics_core::draw_target::DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = core::convert::Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = embedded_graphics_core::prelude::Pixel<Self::Color>>,
    {
        use embedded_graphics_core::prelude::{Pixel, Point};

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }

        Ok(())
    }
}

#[cfg(feature = "graphics")]
impl<I, B> embedded_graphics_core::geometry::OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> embedded_graphics_core::geometry::Size {
        let dims = self.display.config().dimensions;
        embedded_graphics_core::geometry::Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{
        DISPLAY_UPDATE_CTRL2, MASTER_ACTIVATION, WRITE_RAM_BW,
    };
    use crate::config::{Builder, Dimensions, Rotation};
    use crate::display::tests::{MockDelay, MockInterface};
    use crate::font::GLYPH_COUNT;

    // 8x8 test font: '#' is a solid cell, '.' a single top-left pixel,
    // everything else blank.
    static TEST_TABLE: [u8; GLYPH_COUNT * 8] = {
        let mut table = [0u8; GLYPH_COUNT * 8];
        let hash = (b'#' - b' ') as usize * 8;
        let mut i = 0;
        while i < 8 {
            table[hash + i] = 0xFF;
            i += 1;
        }
        let dot = (b'.' - b' ') as usize * 8;
        table[dot] = 0x80;
        table
    };

    static TEST_FONT: Font = Font {
        table: &TEST_TABLE,
        width: 8,
        height: 8,
    };

    fn test_display(rotation: Rotation) -> GraphicDisplay<MockInterface, alloc::vec::Vec<u8>> {
        let config = Builder::new()
            .dimensions(Dimensions::new(296, 128).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        let size = config.buffer_size();
        let display = Display::new(MockInterface::new(), config);
        GraphicDisplay::new(display, alloc::vec![0u8; size])
    }

    fn snapshot(epd: &GraphicDisplay<MockInterface, alloc::vec::Vec<u8>>) -> alloc::vec::Vec<u8> {
        epd.framebuffer().bytes().to_vec()
    }

    #[test]
    fn try_new_rejects_short_buffer() {
        let config = Builder::new()
            .dimensions(Dimensions::new(296, 128).unwrap())
            .build()
            .unwrap();
        let display = Display::new(MockInterface::new(), config);
        let result = GraphicDisplay::try_new(display, alloc::vec![0u8; 16]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 4736,
                provided: 16
            })
        ));
    }

    #[test]
    fn set_pixel_maps_through_90_degree_rotation() {
        let mut epd = test_display(Rotation::Rotate90);
        epd.clear(Color::White);

        // Logical (0, 0) -> RAM (127, 0) -> last byte of row 0, LSB
        epd.set_pixel(0, 0, Color::Black);
        assert_eq!(epd.framebuffer().bytes()[15], 0xFE);

        // Logical (1, 0) -> RAM (127, 1) -> next RAM row
        epd.set_pixel(1, 0, Color::Black);
        assert_eq!(epd.framebuffer().bytes()[16 + 15], 0xFE);

        // Logical (0, 127) -> RAM (0, 0) -> first byte, MSB
        epd.set_pixel(0, 127, Color::Black);
        assert_eq!(epd.framebuffer().bytes()[0], 0x7F);
    }

    #[test]
    fn set_pixel_ignores_out_of_canvas() {
        let mut epd = test_display(Rotation::Rotate90);
        epd.clear(Color::White);
        let before = snapshot(&epd);

        epd.set_pixel(296, 0, Color::Black);
        epd.set_pixel(0, 128, Color::Black);

        assert_eq!(snapshot(&epd), before);
    }

    #[test]
    fn draw_text_skips_unknown_characters() {
        let mut with_bad = test_display(Rotation::Rotate90);
        with_bad.clear(Color::White);
        let skipped = with_bad.draw_text(10, 40, "#\n#", &TEST_FONT, Color::Black);
        assert_eq!(skipped, 1);

        let mut without = test_display(Rotation::Rotate90);
        without.clear(Color::White);
        assert_eq!(without.draw_text(10, 40, "##", &TEST_FONT, Color::Black), 0);

        assert_eq!(snapshot(&with_bad), snapshot(&without));
    }

    #[test]
    fn draw_text_is_additive_only() {
        // Blank glyphs (spaces) leave the canvas untouched
        let mut epd = test_display(Rotation::Rotate90);
        epd.fill_checkerboard();
        let before = snapshot(&epd);

        epd.draw_text(0, 0, "   ", &TEST_FONT, Color::Black);
        assert_eq!(snapshot(&epd), before);
    }

    #[test]
    fn draw_text_advances_by_cell_width() {
        let mut one = test_display(Rotation::Rotate90);
        one.clear(Color::White);
        one.draw_text(8, 0, ".", &TEST_FONT, Color::Black);

        let mut two = test_display(Rotation::Rotate90);
        two.clear(Color::White);
        two.draw_text(0, 0, " .", &TEST_FONT, Color::Black);

        // A leading blank cell shifts the next glyph by exactly one width
        assert_eq!(snapshot(&one), snapshot(&two));
    }

    #[test]
    fn draw_text_clips_at_canvas_edges() {
        let mut epd = test_display(Rotation::Rotate90);
        epd.clear(Color::White);

        // Cell straddles the right and bottom edges; must not wrap or panic
        epd.draw_text(292, 124, "#", &TEST_FONT, Color::Black);

        let mut reference = test_display(Rotation::Rotate90);
        reference.clear(Color::White);
        for y in 124..128 {
            for x in 292..296 {
                reference.set_pixel(x, y, Color::Black);
            }
        }
        assert_eq!(snapshot(&epd), snapshot(&reference));
    }

    #[test]
    fn white_text_sets_bits_on_black_background() {
        let mut epd = test_display(Rotation::Rotate90);
        epd.clear(Color::Black);
        epd.draw_text(0, 0, ".", &TEST_FONT, Color::White);

        // Logical (0, 0) -> RAM (127, 0): bit set in the last byte of row 0
        assert_eq!(epd.framebuffer().bytes()[15], 0x01);
    }

    #[test]
    fn end_to_end_update_streams_canvas_then_activates() {
        let mut epd = test_display(Rotation::Rotate90);
        let mut delay = MockDelay;

        epd.initialize(&mut delay).unwrap();
        epd.clear(Color::White);
        epd.draw_text(10, 40, "Hi", &TEST_FONT, Color::Black);
        let expected = snapshot(&epd);
        epd.update(&mut delay).unwrap();

        let interface = epd.display().interface();

        // The RAM payload is exactly the framebuffer, in row-major order
        assert_eq!(interface.data_for(WRITE_RAM_BW), [expected.as_slice()]);

        // ...followed by the activation mode byte and a bare master activation
        let n = interface.commands.len();
        assert_eq!(
            &interface.commands[n - 2..],
            &[DISPLAY_UPDATE_CTRL2, MASTER_ACTIVATION]
        );
        assert_eq!(interface.data_for(DISPLAY_UPDATE_CTRL2), [&[0xF7][..]]);
        assert!(interface.data_for(MASTER_ACTIVATION).is_empty());
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn draw_target_reports_logical_size() {
        use embedded_graphics_core::geometry::OriginDimensions;

        let epd = test_display(Rotation::Rotate90);
        assert_eq!(
            epd.size(),
            embedded_graphics_core::geometry::Size::new(296, 128)
        );
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn embedded_graphics_text_renders_through_rotation() {
        use embedded_graphics::mono_font::MonoTextStyle;
        use embedded_graphics::mono_font::ascii::FONT_6X10;
        use embedded_graphics::prelude::*;
        use embedded_graphics::text::Text;

        let mut epd = test_display(Rotation::Rotate90);
        epd.clear(Color::White);
        let blank = snapshot(&epd);

        Text::new(
            "Hi",
            Point::new(10, 40),
            MonoTextStyle::new(&FONT_6X10, Color::Black),
        )
        .draw(&mut epd)
        .unwrap();

        // Some black pixels landed, and only bits were cleared (additive)
        let after = snapshot(&epd);
        assert_ne!(after, blank);
        for (a, b) in after.iter().zip(blank.iter()) {
            assert_eq!(a & !b, 0, "text must only clear bits on white");
        }
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn draw_target_pixels_land_in_ram() {
        use embedded_graphics_core::draw_target::DrawTarget;
        use embedded_graphics_core::prelude::{Pixel, Point};

        let mut epd = test_display(Rotation::Rotate90);
        epd.clear(Color::White);

        epd.draw_iter([
            Pixel(Point::new(0, 0), Color::Black),
            Pixel(Point::new(-1, -1), Color::Black), // ignored
        ])
        .unwrap();

        assert_eq!(epd.framebuffer().bytes()[15], 0xFE);
    }
}
