//! The image catalog shown on the LED matrix.
//!
//! Images are stored in logical orientation: `image[row][col]` with row 0 at
//! the top and column 0 on the left, as the viewer sees it. Each design
//! appears twice so it stays up for two seconds.

use crate::config::MATRIX_SIZE;
use crate::pixel::Pixel;

/// A 5x5 picture, row-major, logical orientation.
pub type Image = [[Pixel; MATRIX_SIZE]; MATRIX_SIZE];

/// Number of images in [`IMAGES`].
pub const IMAGE_COUNT: usize = 6;

const __: Pixel = Pixel::OFF;
const RD: Pixel = Pixel::new(255, 0, 0, 50);
const WH: Pixel = Pixel::new(255, 255, 255, 50);
const OR: Pixel = Pixel::new(255, 145, 0, 50);
// Black entries keep a brightness; they still render dark.
const BK: Pixel = Pixel::new(0, 0, 0, 50);
const BH: Pixel = Pixel::new(0, 0, 0, 200);

/// Red and white crest.
pub const CREST: Image = [
    [RD, BH, BH, BH, RD],
    [BK, WH, WH, WH, BK],
    [RD, WH, WH, WH, RD],
    [BK, RD, WH, RD, BK],
    [RD, BK, RD, BK, RD],
];

/// White emblem.
pub const EMBLEM: Image = [
    [WH, WH, WH, WH, WH],
    [WH, __, WH, __, WH],
    [WH, __, WH, WH, WH],
    [WH, WH, WH, __, __],
    [__, __, WH, __, __],
];

/// White hawk with an orange beak.
pub const HAWK: Image = [
    [__, WH, WH, WH, __],
    [WH, __, WH, __, WH],
    [WH, WH, OR, OR, WH],
    [WH, WH, OR, OR, __],
    [__, WH, WH, OR, __],
];

/// Display order.
pub static IMAGES: [Image; IMAGE_COUNT] = [CREST, CREST, EMBLEM, EMBLEM, HAWK, HAWK];
