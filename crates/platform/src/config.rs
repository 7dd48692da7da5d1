//! Application configuration and constants
//!
//! Everything here is compiled in: the firmware has no runtime configuration
//! surface. Timing constants shared by both cores live here so the firmware,
//! the emulator and the tests all read the same numbers.

use embassy_time::Duration;

/// The application name
pub const APP_NAME: &str = "Melody Matrix";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of one whole note, in milliseconds.
///
/// A beat divisor `d` lasts `MEASURE_MS / d` ms (integer division), so an
/// eighth note is 187 ms, not 187.5.
pub const MEASURE_MS: u32 = 1_500;

/// Interval between two image switches on the LED matrix.
pub const IMAGE_INTERVAL: Duration = Duration::from_micros(1_000_000);

/// Number of LEDs on the 5x5 matrix.
pub const LED_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Side length of the LED matrix.
pub const MATRIX_SIZE: usize = 5;

/// WS2812 reset/latch time the line must stay low after a frame, in µs.
pub const LATCH_SETTLE_US: u64 = 60;

/// Development mode banner
pub const fn dev_banner() -> &'static str {
    "Melody Matrix - Emulator"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_count_matches_matrix() {
        assert_eq!(LED_COUNT, 25);
    }

    #[test]
    fn image_interval_is_one_second() {
        assert_eq!(IMAGE_INTERVAL.as_micros(), 1_000_000);
    }
}
