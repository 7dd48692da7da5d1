//! LED matrix wiring, frame buffer and the strip driver trait.
//!
//! The 25 LEDs are one daisy chain snaking through the board. Logical row 0
//! (top) is the last physical row. Physical rows 0 and 2 run right-to-left;
//! the others run left-to-right, including physical row 4:
//!
//! ```text
//! logical          physical slot
//! row 0  →  20 21 22 23 24
//! row 1  →  15 16 17 18 19
//! row 2  →  14 13 12 11 10
//! row 3  →   5  6  7  8  9
//! row 4  →   4  3  2  1  0
//! ```
//!
//! This matches the board's wiring as built and is reproduced exactly.

use smart_leds::RGB8;

use crate::config::{LED_COUNT, MATRIX_SIZE};
use crate::images::Image;
use crate::pixel::Pixel;

const LAST: usize = MATRIX_SIZE - 1;

/// Physical rows wired right-to-left.
const fn is_mirrored(phys_row: usize) -> bool {
    phys_row == 0 || phys_row == 2
}

/// Chain position of the LED at logical `(row, col)`.
///
/// Coordinates outside the matrix are clamped to the last row/column.
pub fn physical_index(row: usize, col: usize) -> usize {
    let row = row.min(LAST);
    let col = col.min(LAST);
    let phys_row = LAST.saturating_sub(row);
    let phys_col = if is_mirrored(phys_row) {
        LAST.saturating_sub(col)
    } else {
        col
    };
    phys_row
        .saturating_mul(MATRIX_SIZE)
        .saturating_add(phys_col)
}

/// Logical `(row, col)` of chain position `index`; inverse of
/// [`physical_index`]. Indices past the end are clamped to the last LED.
pub fn logical_position(index: usize) -> (usize, usize) {
    let index = index.min(LED_COUNT.saturating_sub(1));
    let phys_row = index / MATRIX_SIZE;
    let phys_col = index % MATRIX_SIZE;
    let col = if is_mirrored(phys_row) {
        LAST.saturating_sub(phys_col)
    } else {
        phys_col
    };
    (LAST.saturating_sub(phys_row), col)
}

/// Pixels in chain order, ready to scale and send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedBuffer {
    pixels: [Pixel; LED_COUNT],
}

impl Default for LedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LedBuffer {
    /// All LEDs off.
    pub const fn new() -> Self {
        Self {
            pixels: [Pixel::OFF; LED_COUNT],
        }
    }

    /// Replace the whole buffer with `image`, remapped to chain order.
    pub fn load_image(&mut self, image: &Image) {
        for (row, line) in image.iter().enumerate() {
            for (col, pixel) in line.iter().enumerate() {
                if let Some(slot) = self.pixels.get_mut(physical_index(row, col)) {
                    *slot = *pixel;
                }
            }
        }
    }

    /// Pixels in chain order.
    pub fn pixels(&self) -> &[Pixel; LED_COUNT] {
        &self.pixels
    }

    /// Brightness-scaled colours in chain order.
    pub fn frame(&self) -> [RGB8; LED_COUNT] {
        self.pixels.map(|p| p.scaled())
    }
}

/// A chain of addressable LEDs.
///
/// A call sends the whole frame, first element to the first LED, and returns
/// once the strip has latched it.
pub trait LedStrip {
    /// Error type returned by the driver.
    type Error: core::fmt::Debug;

    /// Send one frame.
    async fn write(&mut self, frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_land_where_wired() {
        assert_eq!(physical_index(0, 0), 20);
        assert_eq!(physical_index(0, 4), 24);
        assert_eq!(physical_index(2, 0), 14);
        assert_eq!(physical_index(4, 0), 4);
        assert_eq!(physical_index(4, 4), 0);
    }

    #[test]
    fn out_of_range_coordinates_clamp() {
        assert_eq!(physical_index(9, 9), physical_index(4, 4));
        assert_eq!(logical_position(99), logical_position(24));
    }

    #[test]
    fn new_buffer_is_dark() {
        let buf = LedBuffer::new();
        assert!(buf.frame().iter().all(|c| *c == RGB8::default()));
    }

    #[test]
    fn marker_follows_the_remap() {
        let mut image = [[Pixel::OFF; MATRIX_SIZE]; MATRIX_SIZE];
        image[0][0] = Pixel::new(255, 0, 0, 255);
        let mut buf = LedBuffer::new();
        buf.load_image(&image);
        let lit: Vec<usize> = buf
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Pixel::OFF)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lit, vec![20]);
    }

    #[test]
    fn load_replaces_everything() {
        let mut buf = LedBuffer::new();
        buf.load_image(&[[Pixel::new(1, 2, 3, 255); MATRIX_SIZE]; MATRIX_SIZE]);
        buf.load_image(&[[Pixel::OFF; MATRIX_SIZE]; MATRIX_SIZE]);
        assert_eq!(buf, LedBuffer::new());
    }
}
