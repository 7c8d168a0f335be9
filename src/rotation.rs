//! Coordinate rotation utilities
//!
//! This module maps logical pixel coordinates to the controller's RAM
//! coordinate system. E-paper modules are frequently mounted rotated
//! relative to the controller's native scan direction; the 2.9" SSD1680
//! module wires the panel's long edge along the gate lines, so the
//! driver's default is a fixed 90-degree transform.
//!
//! The returned RAM coordinates feed the framebuffer's byte/bit addressing
//! (`byte = ram_y * stride + ram_x / 8`, MSB-first within each byte).
//!
//! ## Example
//!
//! ```
//! use ssd1680::{rotation::apply_rotation, RamDimensions, Rotation};
//!
//! let ram = RamDimensions { width: 128, height: 296 };
//!
//! // Logical origin maps to the top of the last RAM column at 90 degrees
//! let (ram_x, ram_y) = apply_rotation(0, 0, ram, Rotation::Rotate90);
//! assert_eq!((ram_x, ram_y), (127, 0));
//!
//! // ram_x decreases as the logical row position increases
//! let (ram_x, _) = apply_rotation(0, 1, ram, Rotation::Rotate90);
//! assert_eq!(ram_x, 126);
//! ```

use crate::config::{RamDimensions, Rotation};

/// Map a logical (x, y) pixel position to RAM coordinates
///
/// The caller must ensure `(x, y)` lies within the logical dimensions
/// implied by `ram` and `rotation` (axes swapped for 90/270 degrees);
/// within those bounds every mapping is a bijection onto the RAM grid.
///
/// # Arguments
///
/// * `x` - Logical X coordinate (column), 0 to logical width - 1
/// * `y` - Logical Y coordinate (row), 0 to logical height - 1
/// * `ram` - RAM-space dimensions
/// * `rotation` - Panel mounting rotation
///
/// # Returns
///
/// The `(ram_x, ram_y)` pixel position in controller RAM.
pub fn apply_rotation(x: u32, y: u32, ram: RamDimensions, rotation: Rotation) -> (u32, u32) {
    let ram_w = u32::from(ram.width);
    let ram_h = u32::from(ram.height);
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (ram_w - 1 - y, x),
        Rotation::Rotate180 => (ram_w - 1 - x, ram_h - 1 - y),
        Rotation::Rotate270 => (y, ram_h - 1 - x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAM_2IN9: RamDimensions = RamDimensions {
        width: 128,
        height: 296,
    };

    #[test]
    fn rotate90_matches_panel_wiring() {
        // phys(x, y) -> ram(RAM_WIDTH - 1 - y, x)
        assert_eq!(apply_rotation(0, 0, RAM_2IN9, Rotation::Rotate90), (127, 0));
        assert_eq!(apply_rotation(10, 40, RAM_2IN9, Rotation::Rotate90), (87, 10));
        assert_eq!(
            apply_rotation(295, 127, RAM_2IN9, Rotation::Rotate90),
            (0, 295)
        );
    }

    #[test]
    fn rotate90_inverts_ram_x_with_logical_row() {
        let (hi, _) = apply_rotation(0, 0, RAM_2IN9, Rotation::Rotate90);
        let (lo, _) = apply_rotation(0, 127, RAM_2IN9, Rotation::Rotate90);
        assert_eq!(hi, 127);
        assert_eq!(lo, 0);
    }

    #[test]
    fn rotate0_is_identity() {
        let ram = RamDimensions {
            width: 16,
            height: 16,
        };
        assert_eq!(apply_rotation(3, 7, ram, Rotation::Rotate0), (3, 7));
    }

    #[test]
    fn rotate180_inverts_both_axes() {
        let ram = RamDimensions {
            width: 16,
            height: 8,
        };
        assert_eq!(apply_rotation(0, 0, ram, Rotation::Rotate180), (15, 7));
        assert_eq!(apply_rotation(15, 7, ram, Rotation::Rotate180), (0, 0));
    }

    #[test]
    fn rotate270_mirrors_rotate90() {
        assert_eq!(apply_rotation(0, 0, RAM_2IN9, Rotation::Rotate270), (0, 295));
        assert_eq!(
            apply_rotation(295, 127, RAM_2IN9, Rotation::Rotate270),
            (127, 0)
        );
    }

    #[test]
    fn rotate90_is_a_bijection() {
        // Every logical pixel lands on a distinct in-range RAM pixel, and
        // the full RAM grid is covered.
        let mut seen = alloc::vec![false; 128 * 296];
        for y in 0..128u32 {
            for x in 0..296u32 {
                let (ram_x, ram_y) = apply_rotation(x, y, RAM_2IN9, Rotation::Rotate90);
                assert!(ram_x < 128 && ram_y < 296, "({x},{y}) out of RAM bounds");
                let idx = (ram_y * 128 + ram_x) as usize;
                assert!(!seen[idx], "collision at logical ({x},{y})");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn all_rotations_stay_in_bounds() {
        for rotation in [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ] {
            let (logical_w, logical_h) = if rotation.swaps_axes() {
                (296u32, 128u32)
            } else {
                (128u32, 296u32)
            };
            for y in (0..logical_h).step_by(7) {
                for x in (0..logical_w).step_by(7) {
                    let (ram_x, ram_y) = apply_rotation(x, y, RAM_2IN9, rotation);
                    assert!(ram_x < 128);
                    assert!(ram_y < 296);
                }
            }
        }
    }
}
