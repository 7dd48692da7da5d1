//! Pixel records and the WS2812 wire word.
//!
//! A [`Pixel`] carries full-scale colour plus a separate brightness. Scaling
//! happens once per frame, right before transmission:
//!
//! ```text
//! out = channel × brightness / 255     (integer, truncating)
//! ```
//!
//! The strip expects 24 bits per LED in G-R-B order, MSB first. The PIO
//! shifts from bit 31, so the 24-bit word is padded with 8 zero bits:
//!
//! ```text
//! 31      24 23      16 15       8 7        0
//! ┌─────────┬──────────┬──────────┬─────────┐
//! │    G    │    R     │    B     │  0x00   │
//! └─────────┴──────────┴──────────┴─────────┘
//! ```

use smart_leds::RGB8;

/// Colour and brightness of one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel {
    /// Red, full scale.
    pub r: u8,
    /// Green, full scale.
    pub g: u8,
    /// Blue, full scale.
    pub b: u8,
    /// 0 = off, 255 = full colour.
    pub brightness: u8,
}

impl Pixel {
    /// Fully dark pixel.
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    /// Create a pixel.
    pub const fn new(r: u8, g: u8, b: u8, brightness: u8) -> Self {
        Self { r, g, b, brightness }
    }

    /// Colour with brightness applied.
    pub fn scaled(&self) -> RGB8 {
        RGB8::new(
            scale(self.r, self.brightness),
            scale(self.g, self.brightness),
            scale(self.b, self.brightness),
        )
    }
}

fn scale(channel: u8, brightness: u8) -> u8 {
    // 255 × 255 fits u16; the quotient fits u8.
    let product = u16::from(channel).saturating_mul(u16::from(brightness));
    u8::try_from(product / 255).unwrap_or(u8::MAX)
}

/// 24-bit GRB word for one LED.
pub fn color_word(rgb: RGB8) -> u32 {
    u32::from_be_bytes([0, rgb.g, rgb.r, rgb.b])
}

/// Word pushed into the PIO TX FIFO: the GRB word left-aligned in 32 bits.
pub fn fifo_word(rgb: RGB8) -> u32 {
    u32::from_be_bytes([rgb.g, rgb.r, rgb.b, 0])
}
