//! LED matrix drivers
//!
//! Concrete [`platform::LedStrip`] implementations, feature-gated by build
//! target:
//! - `ws2812` — 5x5 WS2812 chain on an RP2040 PIO state machine (`hardware`)
//! - `terminal` — ANSI true-colour rendering for the emulator (`emulator`)
//!
//! Both receive frames already remapped to chain order by
//! [`platform::LedBuffer`].

use platform::config::LATCH_SETTLE_US;

/// Low time `PioWs2812::write` already holds after its DMA transfer, in µs.
pub const PIO_WS2812_RESET_US: u64 = 55;

/// Extra wait after a PIO frame so the line stays low for [`LATCH_SETTLE_US`].
pub const LATCH_TOP_UP_US: u64 = LATCH_SETTLE_US.saturating_sub(PIO_WS2812_RESET_US);

#[cfg(feature = "hardware")]
pub mod ws2812;

#[cfg(feature = "emulator")]
pub mod terminal;

#[cfg(feature = "hardware")]
pub use ws2812::PioMatrix;

#[cfg(feature = "emulator")]
pub use terminal::TerminalMatrix;
