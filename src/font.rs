//! Bitmap font glyph source
//!
//! Fonts are external static assets: a packed table of 1-bit glyph cells
//! plus fixed cell dimensions, matching the layout used by the Waveshare
//! font tables. The driver only ever reads through this structure.
//!
//! ## Table layout
//!
//! Glyphs cover the 95 printable ASCII characters starting at space
//! (0x20), in code order. Each glyph cell is `height` rows of
//! `ceil(width / 8)` bytes, row-major, MSB-first within each byte.
//!
//! ## Example
//!
//! ```
//! use ssd1680::Font;
//!
//! // A degenerate 8x1 font: every glyph is a single 0xFF byte
//! static TABLE: [u8; 95] = [0xFF; 95];
//! static FONT: Font = Font { table: &TABLE, width: 8, height: 1 };
//!
//! assert_eq!(FONT.glyph(' '), Some(&TABLE[0..1]));
//! assert_eq!(FONT.glyph('\n'), None); // outside printable range
//! ```

/// First character code covered by a font table
pub const FIRST_PRINTABLE: char = ' ';

/// Number of glyphs in a font table (printable ASCII, space through tilde)
pub const GLYPH_COUNT: usize = 95;

/// Read-only bitmap font
///
/// See the module docs for the table layout.
#[derive(Clone, Copy, Debug)]
pub struct Font {
    /// Packed glyph cells, `GLYPH_COUNT * bytes_per_glyph` bytes
    pub table: &'static [u8],
    /// Glyph cell width in pixels (also the text cursor advance)
    pub width: u16,
    /// Glyph cell height in pixels
    pub height: u16,
}

impl Font {
    /// Bytes per glyph row (`ceil(width / 8)`)
    pub fn bytes_per_row(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes per glyph cell
    pub fn bytes_per_glyph(&self) -> usize {
        self.height as usize * self.bytes_per_row()
    }

    /// Look up the packed cell for a character
    ///
    /// Returns `None` for characters outside the printable ASCII range or
    /// beyond the end of a truncated table; callers skip those and
    /// continue with the rest of the string.
    pub fn glyph(&self, c: char) -> Option<&'static [u8]> {
        if !c.is_ascii() || (c as usize) < (FIRST_PRINTABLE as usize) {
            return None;
        }
        let index = c as usize - FIRST_PRINTABLE as usize;
        if index >= GLYPH_COUNT {
            return None;
        }
        let size = self.bytes_per_glyph();
        self.table.get(index * size..(index + 1) * size)
    }

    /// Whether a set bit exists at glyph-local `(row, col)` in `cell`
    ///
    /// Out-of-cell coordinates read as unset.
    pub(crate) fn bit(&self, cell: &[u8], row: u32, col: u32) -> bool {
        if row >= u32::from(self.height) || col >= u32::from(self.width) {
            return false;
        }
        let byte = row as usize * self.bytes_per_row() + col as usize / 8;
        let mask = 0x80 >> (col % 8);
        cell.get(byte).is_some_and(|b| b & mask != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two-byte rows: width 12 -> ceil(12/8) = 2 bytes per row, 3 rows
    static WIDE_TABLE: [u8; GLYPH_COUNT * 6] = {
        let mut table = [0u8; GLYPH_COUNT * 6];
        // Glyph for '!' (index 1): top row fully set
        table[6] = 0xFF;
        table[7] = 0xF0;
        table
    };

    static WIDE_FONT: Font = Font {
        table: &WIDE_TABLE,
        width: 12,
        height: 3,
    };

    #[test]
    fn glyph_geometry() {
        assert_eq!(WIDE_FONT.bytes_per_row(), 2);
        assert_eq!(WIDE_FONT.bytes_per_glyph(), 6);
    }

    #[test]
    fn glyph_lookup_by_code_offset() {
        let bang = WIDE_FONT.glyph('!').unwrap();
        assert_eq!(bang, &WIDE_TABLE[6..12]);

        let tilde = WIDE_FONT.glyph('~').unwrap();
        assert_eq!(tilde.len(), 6);
    }

    #[test]
    fn out_of_range_characters_are_rejected() {
        assert!(WIDE_FONT.glyph('\n').is_none());
        assert!(WIDE_FONT.glyph('\u{7f}').is_none());
        assert!(WIDE_FONT.glyph('ä').is_none());
    }

    #[test]
    fn truncated_table_yields_none() {
        static SHORT: [u8; 4] = [0xFF; 4];
        let font = Font {
            table: &SHORT,
            width: 8,
            height: 8,
        };
        assert!(font.glyph('A').is_none());
    }

    #[test]
    fn bit_reads_msb_first_across_row_bytes() {
        let bang = WIDE_FONT.glyph('!').unwrap();
        assert!(WIDE_FONT.bit(bang, 0, 0));
        assert!(WIDE_FONT.bit(bang, 0, 11));
        assert!(!WIDE_FONT.bit(bang, 1, 0));
        // Out-of-cell reads are unset
        assert!(!WIDE_FONT.bit(bang, 0, 12));
        assert!(!WIDE_FONT.bit(bang, 3, 0));
    }
}
