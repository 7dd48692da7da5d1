//! WS2812 chain on a PIO state machine
//!
//! Wraps embassy-rp's `PioWs2812` (800 kHz, GRB, MSB first). The program is
//! loaded by the caller on the core that will run the matrix task, so the PIO
//! interrupt and the DMA completion are serviced there.
//!
//! # Hardware
//!
//! - GPIO 7 → DIN of the first LED
//! - PIO0, state machine 0, DMA channel 0

use core::convert::Infallible;

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::Timer;
use platform::config::LED_COUNT;
use platform::pixel::fifo_word;
use platform::{LedStrip, RGB8};

use super::LATCH_TOP_UP_US;

/// 25-LED WS2812 matrix.
pub struct PioMatrix<'d, P: Instance, const S: usize> {
    ws2812: PioWs2812<'d, P, S, LED_COUNT>,
    frames: u32,
}

impl<'d, P: Instance, const S: usize> PioMatrix<'d, P, S> {
    /// Wrap a ready PIO WS2812 driver.
    pub fn new(ws2812: PioWs2812<'d, P, S, LED_COUNT>) -> Self {
        Self { ws2812, frames: 0 }
    }

    /// Frames sent since start.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl<P: Instance, const S: usize> LedStrip for PioMatrix<'_, P, S> {
    type Error = Infallible;

    async fn write(&mut self, frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error> {
        for (slot, rgb) in frame.iter().enumerate() {
            defmt::trace!("LED {=usize}: {=u32:#010x}", slot, fifo_word(*rgb));
        }
        self.ws2812.write(frame).await;
        // The driver has already held the line low for PIO_WS2812_RESET_US.
        Timer::after_micros(LATCH_TOP_UP_US).await;
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }
}
